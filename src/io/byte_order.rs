//! Byte order (endianness) handling
//!
//! Files declare their byte order in the first two header bytes. Values are
//! read in host order and reversed with [`swap16`] / [`swap32`] when the
//! file was written on a host of the opposite endianness.

use serde::{Deserialize, Serialize};

/// Reverses the two bytes of a 16-bit value
#[inline]
pub fn swap16(x: u16) -> u16 {
    (x >> 8) | (x << 8)
}

/// Reverses the four bytes of a 32-bit value
#[inline]
pub fn swap32(x: u32) -> u32 {
    ((x >> 24) & 0xff) | ((x << 8) & 0xff_0000) | ((x >> 8) & 0xff00) | ((x << 24) & 0xff00_0000)
}

/// Swaps every 2-byte unit of `data` in place; a trailing odd byte is left alone
pub fn swap16_in_place(data: &mut [u8]) {
    for unit in data.chunks_exact_mut(2) {
        unit.swap(0, 1);
    }
}

/// Swaps every 4-byte unit of `data` in place; trailing bytes are left alone
pub fn swap32_in_place(data: &mut [u8]) {
    for unit in data.chunks_exact_mut(4) {
        unit.reverse();
    }
}

/// Represents the byte order (endianness) of binary data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ByteOrder {
    /// Little-endian byte order (least significant byte first)
    LittleEndian,
    /// Big-endian byte order (most significant byte first)
    BigEndian,
}

impl ByteOrder {
    /// Byte order of the running host
    pub const fn native() -> Self {
        if cfg!(target_endian = "little") {
            ByteOrder::LittleEndian
        } else {
            ByteOrder::BigEndian
        }
    }

    /// Detects byte order from the TIFF marker bytes
    ///
    /// TIFF files start with either "II" (0x4949) for little-endian
    /// or "MM" (0x4D4D) for big-endian.
    pub fn from_tiff_magic(magic: [u8; 2]) -> Option<Self> {
        match &magic {
            b"II" => Some(ByteOrder::LittleEndian),
            b"MM" => Some(ByteOrder::BigEndian),
            _ => None,
        }
    }

    /// The two marker bytes that announce this byte order
    pub fn marker(&self) -> [u8; 2] {
        match self {
            ByteOrder::LittleEndian => *b"II",
            ByteOrder::BigEndian => *b"MM",
        }
    }

    /// Returns true when values in this order must be swapped on this host
    pub fn is_foreign(&self) -> bool {
        *self != Self::native()
    }

    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "little-endian",
            ByteOrder::BigEndian => "big-endian",
        }
    }
}
