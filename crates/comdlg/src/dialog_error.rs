//! Typed view of the extended error code table
//!
//! [`DialogError`] enumerates every code the common dialog subsystem can
//! report through its extended error query, with the vendor value as the
//! discriminant. [`DialogErrorCategory`] partitions the code space by the
//! dialog family that owns each 0x1000-sized block.

use std::fmt;

use crate::codes;
use crate::error::{ComdlgError, Result};

/// Dialog family owning a block of the extended error code space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogErrorCategory {
    /// Codes shared by every common dialog (below 0x1000, plus 0xFFFF)
    GeneralDialog,
    /// Print dialog codes (0x1000..0x1FFF)
    Printer,
    /// Font chooser codes (0x2000..0x2FFF)
    Font,
    /// Open/save file-name dialog codes (0x3000..0x3FFF)
    FileName,
    /// Find/replace dialog codes (0x4000..0x4FFF)
    FindReplace,
    /// Color chooser codes (0x5000..0x5FFF)
    Color,
}

impl DialogErrorCategory {
    /// All categories, in code-space order
    pub const ALL: &'static [DialogErrorCategory] = &[
        Self::GeneralDialog,
        Self::Printer,
        Self::Font,
        Self::FileName,
        Self::FindReplace,
        Self::Color,
    ];

    /// Base value of this category's code block
    pub const fn base(self) -> u32 {
        match self {
            Self::GeneralDialog => codes::CDERR_GENERALCODES,
            Self::Printer => codes::PDERR_PRINTERCODES,
            Self::Font => codes::CFERR_CHOOSEFONTCODES,
            Self::FileName => codes::FNERR_FILENAMECODES,
            Self::FindReplace => codes::FRERR_FINDREPLACECODES,
            Self::Color => codes::CCERR_CHOOSECOLORCODES,
        }
    }

    /// Category that owns `code` in the partition of the code space.
    ///
    /// Values outside every named block (including the 0xFFFF catch-all)
    /// belong to the general dialog category.
    pub const fn of_code(code: u32) -> Self {
        match code {
            0x1000..=0x1FFF => Self::Printer,
            0x2000..=0x2FFF => Self::Font,
            0x3000..=0x3FFF => Self::FileName,
            0x4000..=0x4FFF => Self::FindReplace,
            0x5000..=0x5FFF => Self::Color,
            _ => Self::GeneralDialog,
        }
    }

    /// Returns true if `code` falls inside this category's block
    pub const fn contains(self, code: u32) -> bool {
        Self::of_code(code).base() == self.base()
    }
}

impl fmt::Display for DialogErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::GeneralDialog => "general dialog",
            Self::Printer => "printer",
            Self::Font => "font",
            Self::FileName => "file name",
            Self::FindReplace => "find/replace",
            Self::Color => "color",
        };
        f.write_str(name)
    }
}

/// Extended error code reported by the common dialog subsystem
///
/// Discriminants are the vendor values and form the compatibility contract;
/// `0x1000`-aligned `*Codes` variants are block bases rather than reportable
/// failures, but consumers receive them verbatim so they are enumerated too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum DialogError {
    DialogFailure = codes::CDERR_DIALOGFAILURE,

    GeneralCodes = codes::CDERR_GENERALCODES,
    StructSize = codes::CDERR_STRUCTSIZE,
    Initialization = codes::CDERR_INITIALIZATION,
    NoTemplate = codes::CDERR_NOTEMPLATE,
    NoHInstance = codes::CDERR_NOHINSTANCE,
    LoadStringFailure = codes::CDERR_LOADSTRFAILURE,
    FindResourceFailure = codes::CDERR_FINDRESFAILURE,
    LoadResourceFailure = codes::CDERR_LOADRESFAILURE,
    LockResourceFailure = codes::CDERR_LOCKRESFAILURE,
    MemoryAllocationFailure = codes::CDERR_MEMALLOCFAILURE,
    MemoryLockFailure = codes::CDERR_MEMLOCKFAILURE,
    NoHook = codes::CDERR_NOHOOK,
    RegisterMessageFailure = codes::CDERR_REGISTERMSGFAIL,

    PrinterCodes = codes::PDERR_PRINTERCODES,
    SetupFailure = codes::PDERR_SETUPFAILURE,
    ParseFailure = codes::PDERR_PARSEFAILURE,
    ReturnDefaultFailure = codes::PDERR_RETDEFFAILURE,
    LoadDriverFailure = codes::PDERR_LOADDRVFAILURE,
    GetDeviceModeFailure = codes::PDERR_GETDEVMODEFAIL,
    InitFailure = codes::PDERR_INITFAILURE,
    NoDevices = codes::PDERR_NODEVICES,
    NoDefaultPrinter = codes::PDERR_NODEFAULTPRN,
    DeviceNameDevModeMismatch = codes::PDERR_DNDMMISMATCH,
    CreateICFailure = codes::PDERR_CREATEICFAILURE,
    PrinterNotFound = codes::PDERR_PRINTERNOTFOUND,
    DefaultDifferent = codes::PDERR_DEFAULTDIFFERENT,

    ChooseFontCodes = codes::CFERR_CHOOSEFONTCODES,
    NoFonts = codes::CFERR_NOFONTS,
    MaxLessThanMin = codes::CFERR_MAXLESSTHANMIN,

    FileNameCodes = codes::FNERR_FILENAMECODES,
    SubclassFailure = codes::FNERR_SUBCLASSFAILURE,
    InvalidFileName = codes::FNERR_INVALIDFILENAME,
    BufferTooSmall = codes::FNERR_BUFFERTOOSMALL,

    FindReplaceCodes = codes::FRERR_FINDREPLACECODES,
    BufferLengthZero = codes::FRERR_BUFFERLENGTHZERO,

    ChooseColorCodes = codes::CCERR_CHOOSECOLORCODES,
}

impl DialogError {
    /// Every defined code, in vendor header order
    pub const ALL: &'static [DialogError] = &[
        Self::DialogFailure,
        Self::GeneralCodes,
        Self::StructSize,
        Self::Initialization,
        Self::NoTemplate,
        Self::NoHInstance,
        Self::LoadStringFailure,
        Self::FindResourceFailure,
        Self::LoadResourceFailure,
        Self::LockResourceFailure,
        Self::MemoryAllocationFailure,
        Self::MemoryLockFailure,
        Self::NoHook,
        Self::RegisterMessageFailure,
        Self::PrinterCodes,
        Self::SetupFailure,
        Self::ParseFailure,
        Self::ReturnDefaultFailure,
        Self::LoadDriverFailure,
        Self::GetDeviceModeFailure,
        Self::InitFailure,
        Self::NoDevices,
        Self::NoDefaultPrinter,
        Self::DeviceNameDevModeMismatch,
        Self::CreateICFailure,
        Self::PrinterNotFound,
        Self::DefaultDifferent,
        Self::ChooseFontCodes,
        Self::NoFonts,
        Self::MaxLessThanMin,
        Self::FileNameCodes,
        Self::SubclassFailure,
        Self::InvalidFileName,
        Self::BufferTooSmall,
        Self::FindReplaceCodes,
        Self::BufferLengthZero,
        Self::ChooseColorCodes,
    ];

    /// Numeric value of this code
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Category owning this code's block
    pub const fn category(self) -> DialogErrorCategory {
        DialogErrorCategory::of_code(self.code())
    }

    /// Vendor macro spelling of this code
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::DialogFailure => "CDERR_DIALOGFAILURE",
            Self::GeneralCodes => "CDERR_GENERALCODES",
            Self::StructSize => "CDERR_STRUCTSIZE",
            Self::Initialization => "CDERR_INITIALIZATION",
            Self::NoTemplate => "CDERR_NOTEMPLATE",
            Self::NoHInstance => "CDERR_NOHINSTANCE",
            Self::LoadStringFailure => "CDERR_LOADSTRFAILURE",
            Self::FindResourceFailure => "CDERR_FINDRESFAILURE",
            Self::LoadResourceFailure => "CDERR_LOADRESFAILURE",
            Self::LockResourceFailure => "CDERR_LOCKRESFAILURE",
            Self::MemoryAllocationFailure => "CDERR_MEMALLOCFAILURE",
            Self::MemoryLockFailure => "CDERR_MEMLOCKFAILURE",
            Self::NoHook => "CDERR_NOHOOK",
            Self::RegisterMessageFailure => "CDERR_REGISTERMSGFAIL",
            Self::PrinterCodes => "PDERR_PRINTERCODES",
            Self::SetupFailure => "PDERR_SETUPFAILURE",
            Self::ParseFailure => "PDERR_PARSEFAILURE",
            Self::ReturnDefaultFailure => "PDERR_RETDEFFAILURE",
            Self::LoadDriverFailure => "PDERR_LOADDRVFAILURE",
            Self::GetDeviceModeFailure => "PDERR_GETDEVMODEFAIL",
            Self::InitFailure => "PDERR_INITFAILURE",
            Self::NoDevices => "PDERR_NODEVICES",
            Self::NoDefaultPrinter => "PDERR_NODEFAULTPRN",
            Self::DeviceNameDevModeMismatch => "PDERR_DNDMMISMATCH",
            Self::CreateICFailure => "PDERR_CREATEICFAILURE",
            Self::PrinterNotFound => "PDERR_PRINTERNOTFOUND",
            Self::DefaultDifferent => "PDERR_DEFAULTDIFFERENT",
            Self::ChooseFontCodes => "CFERR_CHOOSEFONTCODES",
            Self::NoFonts => "CFERR_NOFONTS",
            Self::MaxLessThanMin => "CFERR_MAXLESSTHANMIN",
            Self::FileNameCodes => "FNERR_FILENAMECODES",
            Self::SubclassFailure => "FNERR_SUBCLASSFAILURE",
            Self::InvalidFileName => "FNERR_INVALIDFILENAME",
            Self::BufferTooSmall => "FNERR_BUFFERTOOSMALL",
            Self::FindReplaceCodes => "FRERR_FINDREPLACECODES",
            Self::BufferLengthZero => "FRERR_BUFFERLENGTHZERO",
            Self::ChooseColorCodes => "CCERR_CHOOSECOLORCODES",
        }
    }

    /// One-line meaning of this code
    pub const fn description(self) -> &'static str {
        match self {
            Self::DialogFailure => "the dialog could not be created",
            Self::GeneralCodes => "general dialog code block base",
            Self::StructSize => "structure size member is invalid",
            Self::Initialization => "dialog initialization failed",
            Self::NoTemplate => "template flag set but no template supplied",
            Self::NoHInstance => "instance flag set but no instance handle supplied",
            Self::LoadStringFailure => "failed to load a string resource",
            Self::FindResourceFailure => "failed to find a dialog resource",
            Self::LoadResourceFailure => "failed to load a dialog resource",
            Self::LockResourceFailure => "failed to lock a dialog resource",
            Self::MemoryAllocationFailure => "memory allocation failed",
            Self::MemoryLockFailure => "failed to lock allocated memory",
            Self::NoHook => "hook flag set but no hook procedure supplied",
            Self::RegisterMessageFailure => "window message registration failed",
            Self::PrinterCodes => "print dialog code block base",
            Self::SetupFailure => "failed to load printer setup resources",
            Self::ParseFailure => "failed to parse device strings",
            Self::ReturnDefaultFailure => "return-default requested with device fields set",
            Self::LoadDriverFailure => "failed to load the printer driver",
            Self::GetDeviceModeFailure => "driver returned no device mode",
            Self::InitFailure => "print dialog initialization failed",
            Self::NoDevices => "no printer devices installed",
            Self::NoDefaultPrinter => "no default printer configured",
            Self::DeviceNameDevModeMismatch => "device name and device mode disagree",
            Self::CreateICFailure => "failed to create a printer information context",
            Self::PrinterNotFound => "named printer does not exist",
            Self::DefaultDifferent => "named printer is not the current default",
            Self::ChooseFontCodes => "font chooser code block base",
            Self::NoFonts => "no fonts exist",
            Self::MaxLessThanMin => "maximum point size below minimum",
            Self::FileNameCodes => "file-name dialog code block base",
            Self::SubclassFailure => "failed to subclass a list box",
            Self::InvalidFileName => "file name contains invalid characters",
            Self::BufferTooSmall => "buffer too small for selected file names",
            Self::FindReplaceCodes => "find/replace dialog code block base",
            Self::BufferLengthZero => "search string buffer length is zero",
            Self::ChooseColorCodes => "color chooser code block base",
        }
    }

    /// Resolve a raw extended error value to its defined code
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|e| e.code() == code)
    }

    /// Resolve a vendor macro spelling to its defined code
    pub fn from_symbol(symbol: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|e| e.symbol() == symbol)
            .ok_or_else(|| ComdlgError::UnknownSymbol(symbol.to_string()))
    }
}

impl fmt::Display for DialogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl TryFrom<u32> for DialogError {
    type Error = ComdlgError;

    fn try_from(code: u32) -> Result<Self> {
        Self::from_code(code).ok_or(ComdlgError::UnknownCode(code))
    }
}
