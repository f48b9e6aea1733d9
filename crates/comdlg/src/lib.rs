//! Windows common-dialog extended error code tables
//!
//! When a common dialog (file open/save, print setup, font chooser, color
//! picker, find/replace) fails or is cancelled abnormally, the subsystem
//! reports an extended error value. This crate carries that value table,
//! bit-exact, for consumers that interpret captured codes away from the
//! originating machine.
//!
//! Two surfaces are provided over the same data:
//!
//! - [`codes`]: raw `u32` constants under the vendor macro names, for code
//!   that wants the compile-time symbol and nothing else.
//! - [`DialogError`]: a typed enumeration of the same values with category,
//!   description, and runtime lookup in both directions.
//!
//! # Example
//!
//! ```
//! use comdlg::{codes, DialogError, DialogErrorCategory};
//!
//! let err = DialogError::from_code(0x1007).unwrap();
//! assert_eq!(err, DialogError::NoDevices);
//! assert_eq!(err.symbol(), "PDERR_NODEVICES");
//! assert_eq!(err.category(), DialogErrorCategory::Printer);
//! assert_eq!(err.code(), codes::PDERR_NODEVICES);
//! ```

pub mod codes;

mod dialog_error;
mod error;

pub use dialog_error::{DialogError, DialogErrorCategory};
pub use error::{ComdlgError, Result};
