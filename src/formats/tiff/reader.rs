//! Directory reader and validator
//!
//! Reading goes through a fixed sequence: header, directory scan, post-scan
//! validation, bits-per-component resolution, then a seek to the pixel data.
//! The caller receives a [`RawReader`] positioned at the first pixel byte,
//! already configured to swap 16/32-bit components when needed.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::config::LoadOptions;
use crate::error::{Error, Result};
use crate::io::byte_order::swap16;
use crate::io::{ByteOrder, RawReader, SeekableReader, SwapMode};
use crate::types::{is_supported_bits, is_supported_components, RasterDescriptor, RasterLayout};

use super::header::Header;
use super::ifd::IFDEntry;
use super::tags::{self, values};

/// Raw reader over a buffered file, as handed to `load` consumers
pub type FileReader = RawReader<BufReader<File>>;

/// Fields captured while walking the directory
///
/// Nothing here is cross-checked until the whole directory has been seen,
/// since tag order is not guaranteed.
#[derive(Debug, Default)]
struct DirectoryScan {
    width: u32,
    height: u32,
    bits_per_sample: Option<u32>,
    components: Option<u32>,
    rows_per_strip: Option<u32>,
    data_offset: Option<u32>,
    data_len: u32,
    fill_order: Option<u32>,
    sample_format: Option<u32>,
}

impl DirectoryScan {
    /// Applies the per-tag policy to one entry
    fn apply(&mut self, entry: &IFDEntry) -> Result<()> {
        match entry.tag {
            tags::NEW_SUBFILE_TYPE => require(entry, |v| v == 0)?,
            tags::IMAGE_WIDTH => self.width = entry.value,
            tags::IMAGE_LENGTH => self.height = entry.value,
            tags::BITS_PER_SAMPLE => self.bits_per_sample = Some(entry.value),
            tags::COMPRESSION => require(entry, |v| v == values::COMPRESSION_NONE)?,
            tags::PHOTOMETRIC_INTERPRETATION => require(entry, |v| {
                v == values::PHOTOMETRIC_BLACK_IS_ZERO || v == values::PHOTOMETRIC_RGB
            })?,
            tags::STRIP_OFFSETS => self.data_offset = Some(entry.value),
            tags::SAMPLES_PER_PIXEL => self.components = Some(entry.value),
            tags::ROWS_PER_STRIP => self.rows_per_strip = Some(entry.value),
            tags::STRIP_BYTE_COUNTS => self.data_len = entry.value,
            tags::PLANAR_CONFIGURATION => require(entry, |v| v == values::PLANAR_CHUNKY)?,
            tags::FILL_ORDER => self.fill_order = Some(entry.value),
            tags::SAMPLE_FORMAT => self.sample_format = Some(entry.value),
            // Informational tags and anything unknown are ignored
            _ => {}
        }
        Ok(())
    }

    /// Cross-field checks that need the complete directory
    fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(Error::IncompleteDirectory("ImageWidth"));
        }
        if self.height == 0 {
            return Err(Error::IncompleteDirectory("ImageLength"));
        }
        if self.data_len == 0 {
            return Err(Error::IncompleteDirectory("StripByteCounts"));
        }
        if self.data_offset.is_none() {
            return Err(Error::IncompleteDirectory("StripOffsets"));
        }
        if self.bits_per_sample.is_none() {
            return Err(Error::IncompleteDirectory("BitsPerSample"));
        }
        if let Some(rows) = self.rows_per_strip {
            if rows != self.height {
                debug!(rows, height = self.height, "multi-strip layout");
                return Err(Error::Unsupported {
                    tag: "RowsPerStrip",
                    value: rows,
                });
            }
        }
        let components = self.components();
        if !is_supported_components(components) {
            return Err(Error::Unsupported {
                tag: "SamplesPerPixel",
                value: components,
            });
        }
        Ok(())
    }

    /// SamplesPerPixel defaults to 1 when absent
    fn components(&self) -> u32 {
        self.components.unwrap_or(1)
    }
}

fn require(entry: &IFDEntry, accept: impl Fn(u32) -> bool) -> Result<()> {
    if accept(entry.value) {
        Ok(())
    } else {
        debug!(tag = entry.name(), value = entry.value, "unsupported tag value");
        Err(Error::Unsupported {
            tag: entry.name(),
            value: entry.value,
        })
    }
}

/// Reads and validates a single-strip uncompressed TIFF
pub struct TiffReader<R: SeekableReader> {
    raw: RawReader<R>,
    options: LoadOptions,
}

impl TiffReader<BufReader<File>> {
    /// Opens a TIFF file for reading with default options
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, LoadOptions::default())
    }

    /// Opens a TIFF file with custom options
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::open(path, e))?;
        Ok(Self::with_options(BufReader::new(file), options))
    }
}

impl<R: SeekableReader> TiffReader<R> {
    /// Wraps a seekable stream with default options
    pub fn new(inner: R) -> Self {
        Self::with_options(inner, LoadOptions::default())
    }

    pub fn with_options(inner: R, options: LoadOptions) -> Self {
        Self {
            raw: RawReader::new(inner),
            options,
        }
    }

    /// Reads the header at offset 0 and rejects unknown markers
    pub fn read_header(&mut self) -> Result<Header> {
        self.raw.seek(0)?;
        let header = Header::from_bytes(self.raw.read_array()?);
        if !header.is_valid() {
            return Err(Error::InvalidHeader {
                byte_order: header.byte_order,
                magic: header.magic,
            });
        }
        debug!(
            offset = header.first_ifd_offset(),
            swap = header.must_swap_bytes(),
            "header"
        );
        Ok(header)
    }

    /// Streams every directory entry, in file order, through `visit`
    fn scan_directory<F>(&mut self, header: &Header, mut visit: F) -> Result<u16>
    where
        F: FnMut(&IFDEntry) -> Result<()>,
    {
        let swap = header.must_swap_bytes();
        self.raw.seek(header.first_ifd_offset() as u64)?;

        let mut count = self.raw.read_u16()?;
        if swap {
            count = swap16(count);
        }

        for _ in 0..count {
            let entry = IFDEntry::decode(self.raw.read_array()?, swap);
            debug!(
                tag = entry.tag,
                name = entry.name(),
                field_type = entry.field_type,
                count = entry.count,
                value = entry.value,
                "directory entry"
            );
            visit(&entry)?;
        }
        Ok(count)
    }

    /// Reports every directory entry to `visitor` without validating any of them
    ///
    /// Returns the number of entries visited.
    pub fn for_each_entry<F: FnMut(&IFDEntry)>(&mut self, mut visitor: F) -> Result<u16> {
        let header = self.read_header()?;
        self.scan_directory(&header, |entry| {
            visitor(entry);
            Ok(())
        })
    }

    /// Collects the directory entries in file order
    pub fn entries(&mut self) -> Result<Vec<IFDEntry>> {
        let mut entries = Vec::new();
        self.for_each_entry(|entry| entries.push(*entry))?;
        Ok(entries)
    }

    /// Resolves a BitsPerSample value that may be an offset to a SHORT
    fn resolve_bits(&mut self, raw_bits: u32, swap: bool) -> Result<u32> {
        if is_supported_bits(raw_bits) {
            return Ok(raw_bits);
        }

        self.raw.seek(raw_bits as u64)?;
        let mut bits = self.raw.read_u16()?;
        if swap {
            bits = swap16(bits);
        }
        let bits = bits as u32;
        debug!(offset = raw_bits, bits, "indirect bits per sample");

        if !is_supported_bits(bits) {
            return Err(Error::InvalidBitsPerComponent(bits));
        }
        Ok(bits)
    }

    /// Validates the directory and positions the reader at the pixel data
    pub fn read_descriptor(mut self) -> Result<(RasterDescriptor, RawReader<R>)> {
        let header = self.read_header()?;
        let swap = header.must_swap_bytes();

        let mut scan = DirectoryScan::default();
        self.scan_directory(&header, |entry| scan.apply(entry))?;
        scan.validate()?;

        let raw_bits = scan.bits_per_sample.unwrap_or_default();
        let bits = self.resolve_bits(raw_bits, swap)?;

        let layout = RasterLayout::new(scan.width, scan.height, scan.components(), bits)?;
        if (scan.data_len as u64) < layout.data_len() {
            return Err(Error::DataLength {
                expected: layout.data_len(),
                actual: scan.data_len as u64,
            });
        }

        let descriptor = RasterDescriptor {
            layout,
            data_offset: scan.data_offset.unwrap_or_default(),
            data_len: scan.data_len,
            // read_header only accepts valid headers
            byte_order: header.file_byte_order().unwrap_or_else(ByteOrder::native),
            fill_order: scan.fill_order,
            sample_format: scan.sample_format,
        };

        self.raw.seek(descriptor.data_offset as u64)?;

        let fill_order_hint = scan.fill_order == Some(values::FILL_ORDER_SWAP_HINT);
        if self.options.component_swap.should_swap(swap, fill_order_hint) {
            self.raw.set_swap_mode(SwapMode::for_bits(bits));
        }
        debug!(
            width = descriptor.width(),
            height = descriptor.height(),
            components = descriptor.components(),
            bits,
            offset = descriptor.data_offset,
            len = descriptor.data_len,
            swap_mode = ?self.raw.swap_mode(),
            "resolved raster"
        );

        Ok((descriptor, self.raw))
    }

    /// Validates the directory, then hands the positioned reader to `consumer`
    ///
    /// The consumer's result becomes the result of the call. It is expected
    /// to read `descriptor.layout.data_len()` bytes; nothing checks that it does.
    pub fn load<T, F>(self, consumer: F) -> Result<T>
    where
        F: FnOnce(&RasterDescriptor, &mut RawReader<R>) -> Result<T>,
    {
        let (descriptor, mut raw) = self.read_descriptor()?;
        consumer(&descriptor, &mut raw)
    }
}
