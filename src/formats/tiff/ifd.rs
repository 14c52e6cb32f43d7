//! Image File Directory (IFD) entry codec

use serde::Serialize;

use crate::io::byte_order::{swap16, swap32};

use super::tags::{self, field_types};

/// Size of one directory entry on disk
pub const ENTRY_SIZE: usize = 12;

/// One tagged field of a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IFDEntry {
    /// TIFF tag identifier
    pub tag: u16,
    /// Field type
    pub field_type: u16,
    /// Number of values
    pub count: u32,
    /// Value, or offset to the values when they do not fit inline
    pub value: u32,
}

impl IFDEntry {
    /// Creates a new IFD entry
    pub fn new(tag: u16, field_type: u16, count: u32, value: u32) -> Self {
        Self {
            tag,
            field_type,
            count,
            value,
        }
    }

    /// Single LONG value, the only form the writer emits
    pub fn long(tag: u16, value: u32) -> Self {
        Self::new(tag, field_types::LONG, 1, value)
    }

    /// Whether the value occupies only the first two bytes of the value field
    ///
    /// Up to two SHORTs fit inline; larger SHORT arrays store a 4-byte
    /// offset. BitsPerSample is inline only for a single sample.
    pub fn is_short_value(&self) -> bool {
        if self.field_type != field_types::SHORT {
            return false;
        }
        if self.tag == tags::BITS_PER_SAMPLE {
            self.count == 1
        } else {
            self.count <= 2
        }
    }

    /// Decodes an entry, swapping every field to host order when `swap` is set
    pub fn decode(raw: [u8; ENTRY_SIZE], swap: bool) -> Self {
        let mut entry = Self {
            tag: u16::from_ne_bytes([raw[0], raw[1]]),
            field_type: u16::from_ne_bytes([raw[2], raw[3]]),
            count: u32::from_ne_bytes([raw[4], raw[5], raw[6], raw[7]]),
            value: 0,
        };
        if swap {
            entry.tag = swap16(entry.tag);
            entry.field_type = swap16(entry.field_type);
            entry.count = swap32(entry.count);
        }

        entry.value = if entry.is_short_value() {
            let v = u16::from_ne_bytes([raw[8], raw[9]]);
            (if swap { swap16(v) } else { v }) as u32
        } else {
            let v = u32::from_ne_bytes([raw[8], raw[9], raw[10], raw[11]]);
            if swap {
                swap32(v)
            } else {
                v
            }
        };
        entry
    }

    /// Encodes the entry in host order
    pub fn encode(&self) -> [u8; ENTRY_SIZE] {
        let mut raw = [0u8; ENTRY_SIZE];
        raw[0..2].copy_from_slice(&self.tag.to_ne_bytes());
        raw[2..4].copy_from_slice(&self.field_type.to_ne_bytes());
        raw[4..8].copy_from_slice(&self.count.to_ne_bytes());
        if self.is_short_value() {
            raw[8..10].copy_from_slice(&(self.value as u16).to_ne_bytes());
        } else {
            raw[8..12].copy_from_slice(&self.value.to_ne_bytes());
        }
        raw
    }

    /// Name of this entry's tag
    pub fn name(&self) -> &'static str {
        tags::tag_name(self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Lays out an entry the way a big-endian producer would
    fn big_endian_entry(tag: u16, field_type: u16, count: u32, value: [u8; 4]) -> [u8; ENTRY_SIZE] {
        let mut raw = [0u8; ENTRY_SIZE];
        raw[0..2].copy_from_slice(&tag.to_be_bytes());
        raw[2..4].copy_from_slice(&field_type.to_be_bytes());
        raw[4..8].copy_from_slice(&count.to_be_bytes());
        raw[8..12].copy_from_slice(&value);
        raw
    }

    fn swap_for(order_is_big: bool) -> bool {
        order_is_big != cfg!(target_endian = "big")
    }

    #[test]
    fn test_ifd_entry_creation() {
        let entry = IFDEntry::long(tags::IMAGE_WIDTH, 1024);
        assert_eq!(entry.tag, 256);
        assert_eq!(entry.field_type, field_types::LONG);
        assert_eq!(entry.count, 1);
        assert_eq!(entry.value, 1024);
        assert_eq!(entry.name(), "ImageWidth");
    }

    #[test]
    fn test_encode_decode_native() {
        let entry = IFDEntry::long(tags::STRIP_BYTE_COUNTS, 0x0102_0304);
        assert_eq!(IFDEntry::decode(entry.encode(), false), entry);

        let short = IFDEntry::new(tags::COMPRESSION, field_types::SHORT, 1, 1);
        assert_eq!(IFDEntry::decode(short.encode(), false), short);
    }

    #[test]
    fn test_big_endian_short_value() {
        let raw = big_endian_entry(tags::IMAGE_WIDTH, field_types::SHORT, 1, [0x01, 0x02, 0, 0]);
        let entry = IFDEntry::decode(raw, swap_for(true));
        assert_eq!(entry.tag, tags::IMAGE_WIDTH);
        assert_eq!(entry.field_type, field_types::SHORT);
        assert_eq!(entry.value, 0x0102);
    }

    #[test]
    fn test_big_endian_long_value() {
        let raw = big_endian_entry(tags::STRIP_OFFSETS, field_types::LONG, 1, [0, 0, 0x01, 0x00]);
        let entry = IFDEntry::decode(raw, swap_for(true));
        assert_eq!(entry.value, 256);
    }

    #[test]
    fn test_bits_per_sample_single_short() {
        let raw = big_endian_entry(tags::BITS_PER_SAMPLE, field_types::SHORT, 1, [0, 16, 0, 0]);
        let entry = IFDEntry::decode(raw, swap_for(true));
        assert_eq!(entry.value, 16);
    }

    #[test]
    fn test_bits_per_sample_offset_is_long_width() {
        // Three SHORTs do not fit inline, so the field holds a 4-byte offset
        let raw = big_endian_entry(tags::BITS_PER_SAMPLE, field_types::SHORT, 3, [0, 0, 0x01, 0x2C]);
        let entry = IFDEntry::decode(raw, swap_for(true));
        assert!(!entry.is_short_value());
        assert_eq!(entry.count, 3);
        assert_eq!(entry.value, 300);
    }

    #[test]
    fn test_short_array_offset_keeps_full_width() {
        // 768 ColorMap SHORTs live elsewhere; the field is a 4-byte offset
        let le = {
            let mut raw = [0u8; ENTRY_SIZE];
            raw[0..2].copy_from_slice(&tags::COLOR_MAP.to_le_bytes());
            raw[2..4].copy_from_slice(&field_types::SHORT.to_le_bytes());
            raw[4..8].copy_from_slice(&768u32.to_le_bytes());
            raw[8..12].copy_from_slice(&0x0001_2345u32.to_le_bytes());
            raw
        };
        let be = big_endian_entry(
            tags::COLOR_MAP,
            field_types::SHORT,
            768,
            0x0001_2345u32.to_be_bytes(),
        );

        for entry in [
            IFDEntry::decode(le, swap_for(false)),
            IFDEntry::decode(be, swap_for(true)),
        ] {
            assert!(!entry.is_short_value());
            assert_eq!(entry.tag, tags::COLOR_MAP);
            assert_eq!(entry.count, 768);
            assert_eq!(entry.value, 0x0001_2345);
        }
    }

    #[test]
    fn test_two_shorts_read_first_inline() {
        let raw = big_endian_entry(tags::EXTRA_SAMPLES, field_types::SHORT, 2, [0, 2, 0, 1]);
        let entry = IFDEntry::decode(raw, swap_for(true));
        assert!(entry.is_short_value());
        assert_eq!(entry.value, 2);
    }

    #[test]
    fn test_little_endian_short_value() {
        let mut raw = [0u8; ENTRY_SIZE];
        raw[0..2].copy_from_slice(&tags::SAMPLES_PER_PIXEL.to_le_bytes());
        raw[2..4].copy_from_slice(&field_types::SHORT.to_le_bytes());
        raw[4..8].copy_from_slice(&1u32.to_le_bytes());
        raw[8..10].copy_from_slice(&3u16.to_le_bytes());
        let entry = IFDEntry::decode(raw, swap_for(false));
        assert_eq!(entry.tag, tags::SAMPLES_PER_PIXEL);
        assert_eq!(entry.value, 3);
    }
}
