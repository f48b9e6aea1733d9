//! Raw extended error code values (CommDlgExtendedError)
//!
//! These are the exact values returned by the common dialog subsystem and
//! must not be changed. Each dialog family owns a 0x1000-sized block of the
//! code space; the block base (`*_CODES`) doubles as the family marker.

/// The dialog could not be created
pub const CDERR_DIALOGFAILURE: u32 = 0xFFFF;

/// Base of the general dialog code block
pub const CDERR_GENERALCODES: u32 = 0x0000;
/// Structure size member set to an invalid value
pub const CDERR_STRUCTSIZE: u32 = 0x0001;
/// Dialog initialization failed
pub const CDERR_INITIALIZATION: u32 = 0x0002;
/// Template flag set but no template handle supplied
pub const CDERR_NOTEMPLATE: u32 = 0x0003;
/// Instance flag set but no instance handle supplied
pub const CDERR_NOHINSTANCE: u32 = 0x0004;
/// Failed to load a string resource
pub const CDERR_LOADSTRFAILURE: u32 = 0x0005;
/// Failed to find a dialog resource
pub const CDERR_FINDRESFAILURE: u32 = 0x0006;
/// Failed to load a dialog resource
pub const CDERR_LOADRESFAILURE: u32 = 0x0007;
/// Failed to lock a dialog resource
pub const CDERR_LOCKRESFAILURE: u32 = 0x0008;
/// Memory allocation failed
pub const CDERR_MEMALLOCFAILURE: u32 = 0x0009;
/// Failed to lock allocated memory
pub const CDERR_MEMLOCKFAILURE: u32 = 0x000A;
/// Hook flag set but no hook procedure supplied
pub const CDERR_NOHOOK: u32 = 0x000B;
/// RegisterWindowMessage failed
pub const CDERR_REGISTERMSGFAIL: u32 = 0x000C;

/// Base of the print dialog code block
pub const PDERR_PRINTERCODES: u32 = 0x1000;
/// Failure loading the printer setup resources
pub const PDERR_SETUPFAILURE: u32 = 0x1001;
/// Failure parsing device strings from the registry
pub const PDERR_PARSEFAILURE: u32 = 0x1002;
/// Return-default flag set but device fields were non-null
pub const PDERR_RETDEFFAILURE: u32 = 0x1003;
/// Failed to load the printer driver
pub const PDERR_LOADDRVFAILURE: u32 = 0x1004;
/// Driver failed to return a DEVMODE structure
pub const PDERR_GETDEVMODEFAIL: u32 = 0x1005;
/// Print dialog support initialization failed
pub const PDERR_INITFAILURE: u32 = 0x1006;
/// No printer devices are installed
pub const PDERR_NODEVICES: u32 = 0x1007;
/// No default printer is configured
pub const PDERR_NODEFAULTPRN: u32 = 0x1008;
/// Device name and DEVMODE name disagree
pub const PDERR_DNDMMISMATCH: u32 = 0x1009;
/// Failed to create an information context for the printer
pub const PDERR_CREATEICFAILURE: u32 = 0x100A;
/// Named printer does not exist
pub const PDERR_PRINTERNOTFOUND: u32 = 0x100B;
/// Named printer differs from the current default
pub const PDERR_DEFAULTDIFFERENT: u32 = 0x100C;

/// Base of the font chooser code block
pub const CFERR_CHOOSEFONTCODES: u32 = 0x2000;
/// No fonts exist
pub const CFERR_NOFONTS: u32 = 0x2001;
/// Maximum point size is less than the minimum
pub const CFERR_MAXLESSTHANMIN: u32 = 0x2002;

/// Base of the file-name dialog code block
pub const FNERR_FILENAMECODES: u32 = 0x3000;
/// Failed to subclass a list box control
pub const FNERR_SUBCLASSFAILURE: u32 = 0x3001;
/// File name contains invalid characters
pub const FNERR_INVALIDFILENAME: u32 = 0x3002;
/// Supplied buffer is too small for the selected file names
pub const FNERR_BUFFERTOOSMALL: u32 = 0x3003;

/// Base of the find/replace dialog code block
pub const FRERR_FINDREPLACECODES: u32 = 0x4000;
/// Search string buffer length is zero
pub const FRERR_BUFFERLENGTHZERO: u32 = 0x4001;

/// Base of the color chooser code block
pub const CCERR_CHOOSECOLORCODES: u32 = 0x5000;
