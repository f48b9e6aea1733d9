//! COM identifier tables for the Microsoft Agent control
//!
//! The Agent control is addressed by an external activation mechanism
//! through fixed 128-bit identifiers: one IID per scripting interface, a
//! DIID for the event source, a LIBID for the type library, and the
//! coclass CLSID. This crate carries those values bit-exact, together with
//! the [`Guid`] type they are expressed in.
//!
//! # Example
//!
//! ```
//! use agentctl::{identifiers, Guid};
//!
//! let clsid = Guid::parse("{D45FD31B-5C6E-11D1-9EC1-00C04FD7081F}").unwrap();
//! assert_eq!(clsid, identifiers::CLSID_AGENT);
//!
//! let entry = identifiers::find_by_guid(&clsid).unwrap();
//! assert_eq!(entry.name, "Agent");
//! ```

pub mod identifiers;

mod error;
mod guid;

pub use error::{AgentCtlError, Result};
pub use guid::Guid;
pub use identifiers::{IdentifierRole, KnownIdentifier, KNOWN_IDENTIFIERS};
