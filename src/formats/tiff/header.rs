//! Fixed 8-byte file header

use crate::io::byte_order::{swap32, ByteOrder};

use super::{FIRST_IFD_OFFSET, TIFF_MAGIC};

/// Size of the header in bytes
pub const HEADER_SIZE: usize = 8;

/// File preamble: byte-order marker, magic number and first directory offset
///
/// The offset is kept exactly as it was decoded in host order; use
/// [`first_ifd_offset`](Self::first_ifd_offset) for the corrected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// "II" or "MM"
    pub byte_order: [u8; 2],
    /// 42 in the file's byte order
    pub magic: [u8; 2],
    raw_offset: u32,
}

impl Header {
    /// Header written by this host: its own byte order, directory at offset 8
    pub fn native() -> Self {
        Self {
            byte_order: ByteOrder::native().marker(),
            magic: TIFF_MAGIC.to_ne_bytes(),
            raw_offset: FIRST_IFD_OFFSET,
        }
    }

    /// Decodes the header bytes as stored on disk
    pub fn from_bytes(raw: [u8; HEADER_SIZE]) -> Self {
        Self {
            byte_order: [raw[0], raw[1]],
            magic: [raw[2], raw[3]],
            raw_offset: u32::from_ne_bytes([raw[4], raw[5], raw[6], raw[7]]),
        }
    }

    /// Encodes the header for writing
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut raw = [0u8; HEADER_SIZE];
        raw[..2].copy_from_slice(&self.byte_order);
        raw[2..4].copy_from_slice(&self.magic);
        raw[4..].copy_from_slice(&self.raw_offset.to_ne_bytes());
        raw
    }

    /// Both marker bytes agree and pair with the matching magic layout
    pub fn is_valid(&self) -> bool {
        if self.byte_order[0] != self.byte_order[1] {
            return false;
        }
        matches!(
            (self.byte_order[0], self.magic),
            (0x49, [0x2A, 0x00]) | (0x4D, [0x00, 0x2A])
        )
    }

    /// Byte order declared by the file, if the header is valid
    pub fn file_byte_order(&self) -> Option<ByteOrder> {
        if !self.is_valid() {
            return None;
        }
        ByteOrder::from_tiff_magic(self.byte_order)
    }

    /// Whether multi-byte fields must be swapped to reach host order
    pub fn must_swap_bytes(&self) -> bool {
        let file_is_big_endian = self.magic[1] == 0x2A;
        file_is_big_endian != (ByteOrder::native() == ByteOrder::BigEndian)
    }

    /// Offset of the first directory in host order
    pub fn first_ifd_offset(&self) -> u32 {
        if self.must_swap_bytes() {
            swap32(self.raw_offset)
        } else {
            self.raw_offset
        }
    }
}
