//! Minimal single-strip TIFF writer

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::io::RawWriter;
use crate::types::RasterLayout;

use super::header::Header;
use super::ifd::IFDEntry;
use super::tags::{self, values};
use super::DATA_OFFSET;

/// Fixed-order directory describing `layout`
///
/// SampleFormat is only emitted for 32-bit components, which are written
/// as IEEE floats.
pub fn directory_entries(layout: &RasterLayout) -> Vec<IFDEntry> {
    let mut entries = vec![
        IFDEntry::long(tags::NEW_SUBFILE_TYPE, 0),
        IFDEntry::long(tags::IMAGE_WIDTH, layout.width),
        IFDEntry::long(tags::IMAGE_LENGTH, layout.height),
        IFDEntry::long(tags::BITS_PER_SAMPLE, layout.bits_per_component),
        IFDEntry::long(tags::COMPRESSION, values::COMPRESSION_NONE),
        IFDEntry::long(tags::PHOTOMETRIC_INTERPRETATION, layout.photometric()),
        IFDEntry::long(tags::STRIP_OFFSETS, DATA_OFFSET),
        IFDEntry::long(tags::SAMPLES_PER_PIXEL, layout.components),
    ];
    if layout.bits_per_component == 32 {
        entries.push(IFDEntry::long(tags::SAMPLE_FORMAT, values::SAMPLE_FORMAT_IEEE_FP));
    }
    entries.push(IFDEntry::long(tags::ROWS_PER_STRIP, layout.height));
    // RasterLayout::new guarantees the length fits in 32 bits
    entries.push(IFDEntry::long(tags::STRIP_BYTE_COUNTS, layout.data_len() as u32));
    entries
}

/// Writes one raster in the canonical minimal layout
pub struct TiffWriter<W: Write> {
    raw: RawWriter<W>,
}

impl TiffWriter<BufWriter<File>> {
    /// Creates or truncates the file at `path`
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::open(path, e))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> TiffWriter<W> {
    /// Wraps an output stream
    pub fn new(inner: W) -> Self {
        Self {
            raw: RawWriter::new(inner),
        }
    }

    /// Writes header, directory, padding and `data` verbatim
    ///
    /// Pixel bytes are never swapped: the header declares the host byte
    /// order, which is the order the caller's buffer is already in.
    pub fn write_image(mut self, layout: &RasterLayout, data: &[u8]) -> Result<W> {
        check_data_len(layout, data)?;

        let entries = directory_entries(layout);
        self.raw.write_bytes(&Header::native().to_bytes())?;
        self.raw.write_u16(entries.len() as u16)?;
        for entry in &entries {
            self.raw.write_bytes(&entry.encode())?;
        }

        let padding = DATA_OFFSET as u64 - self.raw.bytes_written();
        self.raw.write_fill(0x00, padding)?;
        self.raw.write_bytes(data)?;

        debug!(
            width = layout.width,
            height = layout.height,
            components = layout.components,
            bits = layout.bits_per_component,
            total = self.raw.bytes_written(),
            "wrote raster"
        );
        self.raw.finish()
    }
}

pub(crate) fn check_data_len(layout: &RasterLayout, data: &[u8]) -> Result<()> {
    if data.len() as u64 != layout.data_len() {
        return Err(Error::DataLength {
            expected: layout.data_len(),
            actual: data.len() as u64,
        });
    }
    Ok(())
}
