//! 128-bit COM identifier value
//!
//! The field shape matches the IDL-compiler output: one 32-bit field, two
//! 16-bit fields, and an 8-byte tail. The three leading fields are subject
//! to byte order when marshaled; the tail is a plain byte sequence. COM
//! marshals GUIDs little-endian, so that layout is the default byte form.

use std::fmt;
use std::str::FromStr;

use bytes::{Buf, BufMut};

use crate::error::{AgentCtlError, Result};

/// A globally unique identifier (IID, DIID, CLSID, or LIBID)
///
/// Equality is bitwise over all four fields. No ordering is defined.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl Guid {
    /// Size of a marshaled GUID in bytes
    pub const SIZE: usize = 16;

    /// Nil GUID (all zeros)
    pub const NIL: Self = Self::new(0, 0, 0, [0; 8]);

    pub const fn new(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Self {
            data1,
            data2,
            data3,
            data4,
        }
    }

    /// Returns true if this is the nil GUID
    pub fn is_nil(&self) -> bool {
        *self == Self::NIL
    }

    /// Parse from the dashed form "xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx",
    /// with or without surrounding registry braces
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let s = s
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .unwrap_or(s);
        if s.len() != 36 {
            return None;
        }
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 5 {
            return None;
        }
        if parts[0].len() != 8
            || parts[1].len() != 4
            || parts[2].len() != 4
            || parts[3].len() != 4
            || parts[4].len() != 12
        {
            return None;
        }

        let data1 = u32::from_str_radix(parts[0], 16).ok()?;
        let data2 = u16::from_str_radix(parts[1], 16).ok()?;
        let data3 = u16::from_str_radix(parts[2], 16).ok()?;

        let mut data4 = [0u8; 8];
        let clock = u16::from_str_radix(parts[3], 16).ok()?;
        data4[0] = (clock >> 8) as u8;
        data4[1] = clock as u8;
        for i in 0..6 {
            data4[2 + i] = u8::from_str_radix(&parts[4][i * 2..i * 2 + 2], 16).ok()?;
        }

        Some(Self {
            data1,
            data2,
            data3,
            data4,
        })
    }

    /// Marshaled layout: leading fields little-endian, tail as-is
    pub fn to_bytes_le(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        bytes[0..4].copy_from_slice(&self.data1.to_le_bytes());
        bytes[4..6].copy_from_slice(&self.data2.to_le_bytes());
        bytes[6..8].copy_from_slice(&self.data3.to_le_bytes());
        bytes[8..16].copy_from_slice(&self.data4);
        bytes
    }

    /// Network-order layout: leading fields big-endian, tail as-is
    pub fn to_bytes_be(&self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        bytes[0..4].copy_from_slice(&self.data1.to_be_bytes());
        bytes[4..6].copy_from_slice(&self.data2.to_be_bytes());
        bytes[6..8].copy_from_slice(&self.data3.to_be_bytes());
        bytes[8..16].copy_from_slice(&self.data4);
        bytes
    }

    /// Decode from the marshaled little-endian layout
    pub fn from_bytes_le(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < 16 {
            return None;
        }
        Some(Self {
            data1: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            data2: u16::from_le_bytes([bytes[4], bytes[5]]),
            data3: u16::from_le_bytes([bytes[6], bytes[7]]),
            data4: [
                bytes[8], bytes[9], bytes[10], bytes[11], bytes[12], bytes[13], bytes[14],
                bytes[15],
            ],
        })
    }

    /// Encode to a buffer, respecting byte order for the leading fields
    pub fn encode<B: BufMut>(&self, buf: &mut B, little_endian: bool) {
        if little_endian {
            buf.put_u32_le(self.data1);
            buf.put_u16_le(self.data2);
            buf.put_u16_le(self.data3);
        } else {
            buf.put_u32(self.data1);
            buf.put_u16(self.data2);
            buf.put_u16(self.data3);
        }
        buf.put_slice(&self.data4);
    }

    /// Decode from a buffer, respecting byte order for the leading fields
    pub fn decode<B: Buf>(buf: &mut B, little_endian: bool) -> Result<Self> {
        if buf.remaining() < Self::SIZE {
            return Err(AgentCtlError::BufferUnderflow {
                needed: Self::SIZE,
                have: buf.remaining(),
            });
        }
        let data1 = if little_endian {
            buf.get_u32_le()
        } else {
            buf.get_u32()
        };
        let data2 = if little_endian {
            buf.get_u16_le()
        } else {
            buf.get_u16()
        };
        let data3 = if little_endian {
            buf.get_u16_le()
        } else {
            buf.get_u16()
        };
        let mut data4 = [0u8; 8];
        buf.copy_to_slice(&mut data4);

        Ok(Self {
            data1,
            data2,
            data3,
            data4,
        })
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            self.data1,
            self.data2,
            self.data3,
            self.data4[0],
            self.data4[1],
            self.data4[2],
            self.data4[3],
            self.data4[4],
            self.data4[5],
            self.data4[6],
            self.data4[7]
        )
    }
}

impl fmt::Debug for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Registry form
        write!(
            f,
            "{{{:08X}-{:04X}-{:04X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}}}",
            self.data1,
            self.data2,
            self.data3,
            self.data4[0],
            self.data4[1],
            self.data4[2],
            self.data4[3],
            self.data4[4],
            self.data4[5],
            self.data4[6],
            self.data4[7]
        )
    }
}

impl FromStr for Guid {
    type Err = AgentCtlError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| AgentCtlError::InvalidGuid(s.to_string()))
    }
}

impl From<Guid> for uuid::Uuid {
    fn from(guid: Guid) -> Self {
        uuid::Uuid::from_fields(guid.data1, guid.data2, guid.data3, &guid.data4)
    }
}

impl From<uuid::Uuid> for Guid {
    fn from(uuid: uuid::Uuid) -> Self {
        let (data1, data2, data3, data4) = uuid.as_fields();
        Self {
            data1,
            data2,
            data3,
            data4: *data4,
        }
    }
}
