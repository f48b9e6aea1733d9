//! Dialog Code Tests - Error Code Table Invariants
//!
//! These tests exercise the extended error code table as a whole:
//! - Vendor values for every symbol
//! - Category partition of the code space
//! - Symbol prefix / category agreement
//! - Lookup in both directions

use std::collections::HashSet;

use comdlg::{codes, ComdlgError, DialogError, DialogErrorCategory};

/// Every vendor (symbol, value) pair, straight from the header
const VENDOR_TABLE: &[(&str, u32)] = &[
    ("CDERR_DIALOGFAILURE", 0xFFFF),
    ("CDERR_GENERALCODES", 0x0000),
    ("CDERR_STRUCTSIZE", 0x0001),
    ("CDERR_INITIALIZATION", 0x0002),
    ("CDERR_NOTEMPLATE", 0x0003),
    ("CDERR_NOHINSTANCE", 0x0004),
    ("CDERR_LOADSTRFAILURE", 0x0005),
    ("CDERR_FINDRESFAILURE", 0x0006),
    ("CDERR_LOADRESFAILURE", 0x0007),
    ("CDERR_LOCKRESFAILURE", 0x0008),
    ("CDERR_MEMALLOCFAILURE", 0x0009),
    ("CDERR_MEMLOCKFAILURE", 0x000A),
    ("CDERR_NOHOOK", 0x000B),
    ("CDERR_REGISTERMSGFAIL", 0x000C),
    ("PDERR_PRINTERCODES", 0x1000),
    ("PDERR_SETUPFAILURE", 0x1001),
    ("PDERR_PARSEFAILURE", 0x1002),
    ("PDERR_RETDEFFAILURE", 0x1003),
    ("PDERR_LOADDRVFAILURE", 0x1004),
    ("PDERR_GETDEVMODEFAIL", 0x1005),
    ("PDERR_INITFAILURE", 0x1006),
    ("PDERR_NODEVICES", 0x1007),
    ("PDERR_NODEFAULTPRN", 0x1008),
    ("PDERR_DNDMMISMATCH", 0x1009),
    ("PDERR_CREATEICFAILURE", 0x100A),
    ("PDERR_PRINTERNOTFOUND", 0x100B),
    ("PDERR_DEFAULTDIFFERENT", 0x100C),
    ("CFERR_CHOOSEFONTCODES", 0x2000),
    ("CFERR_NOFONTS", 0x2001),
    ("CFERR_MAXLESSTHANMIN", 0x2002),
    ("FNERR_FILENAMECODES", 0x3000),
    ("FNERR_SUBCLASSFAILURE", 0x3001),
    ("FNERR_INVALIDFILENAME", 0x3002),
    ("FNERR_BUFFERTOOSMALL", 0x3003),
    ("FRERR_FINDREPLACECODES", 0x4000),
    ("FRERR_BUFFERLENGTHZERO", 0x4001),
    ("CCERR_CHOOSECOLORCODES", 0x5000),
];

#[test]
fn test_every_symbol_has_vendor_value() {
    assert_eq!(DialogError::ALL.len(), VENDOR_TABLE.len());
    for (symbol, value) in VENDOR_TABLE {
        let err = DialogError::from_symbol(symbol).unwrap();
        assert_eq!(err.code(), *value, "{}", symbol);
    }
}

#[test]
fn test_raw_constants_agree_with_table() {
    assert_eq!(codes::CDERR_DIALOGFAILURE, 0xFFFF);
    assert_eq!(codes::PDERR_NODEVICES, 0x1007);
    assert_eq!(codes::CFERR_MAXLESSTHANMIN, 0x2002);
    assert_eq!(codes::FNERR_BUFFERTOOSMALL, 0x3003);
    assert_eq!(codes::FRERR_BUFFERLENGTHZERO, 0x4001);
    assert_eq!(codes::CCERR_CHOOSECOLORCODES, 0x5000);
}

#[test]
fn test_symbol_prefix_matches_category() {
    for err in DialogError::ALL {
        let expected = match &err.symbol()[..2] {
            "CD" => DialogErrorCategory::GeneralDialog,
            "PD" => DialogErrorCategory::Printer,
            "CF" => DialogErrorCategory::Font,
            "FN" => DialogErrorCategory::FileName,
            "FR" => DialogErrorCategory::FindReplace,
            "CC" => DialogErrorCategory::Color,
            other => panic!("unexpected symbol prefix: {}", other),
        };
        assert_eq!(err.category(), expected, "{}", err.symbol());
    }
}

#[test]
fn test_partition_is_total_and_stable() {
    // Every value maps to exactly one category, defined or not
    for code in 0u32..0x6100 {
        let category = DialogErrorCategory::of_code(code);
        assert!(category.contains(code));
        let again = DialogErrorCategory::of_code(code);
        assert_eq!(category, again);
    }
    assert_eq!(
        DialogErrorCategory::of_code(0xFFFF),
        DialogErrorCategory::GeneralDialog
    );
}

#[test]
fn test_category_ranges() {
    for err in DialogError::ALL {
        let code = err.code();
        match err.category() {
            DialogErrorCategory::Printer => assert!((0x1000..0x2000).contains(&code)),
            DialogErrorCategory::Font => assert!((0x2000..0x3000).contains(&code)),
            DialogErrorCategory::FileName => assert!((0x3000..0x4000).contains(&code)),
            DialogErrorCategory::FindReplace => assert!((0x4000..0x5000).contains(&code)),
            DialogErrorCategory::Color => assert!((0x5000..0x6000).contains(&code)),
            DialogErrorCategory::GeneralDialog => {
                assert!(code < 0x1000 || code == 0xFFFF)
            }
        }
    }
}

#[test]
fn test_values_and_symbols_unique() {
    let values: HashSet<u32> = DialogError::ALL.iter().map(|e| e.code()).collect();
    assert_eq!(values.len(), DialogError::ALL.len());

    let symbols: HashSet<&str> = DialogError::ALL.iter().map(|e| e.symbol()).collect();
    assert_eq!(symbols.len(), DialogError::ALL.len());
}

#[test]
fn test_roundtrip_through_both_lookups() {
    for err in DialogError::ALL {
        assert_eq!(DialogError::from_code(err.code()), Some(*err));
        assert_eq!(DialogError::from_symbol(err.symbol()).unwrap(), *err);
        assert_eq!(DialogError::try_from(err.code()).unwrap(), *err);
    }
}

#[test]
fn test_unknown_inputs_rejected() {
    assert_eq!(DialogError::from_code(0x0F00), None);
    assert_eq!(DialogError::from_code(0x1DDD), None);
    assert_eq!(
        DialogError::try_from(0x6000).unwrap_err(),
        ComdlgError::UnknownCode(0x6000)
    );
    assert_eq!(
        DialogError::from_symbol("CDERR_NOPE").unwrap_err(),
        ComdlgError::UnknownSymbol("CDERR_NOPE".to_string())
    );
}

#[test]
fn test_descriptions_present() {
    for err in DialogError::ALL {
        assert!(!err.description().is_empty(), "{}", err.symbol());
    }
}
