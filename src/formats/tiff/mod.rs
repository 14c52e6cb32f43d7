//! Baseline uncompressed TIFF support

pub mod tags;
pub mod header;
pub mod ifd;
pub mod reader;
pub mod writer;

use std::path::Path;

use crate::config::LoadOptions;
use crate::error::Result;
use crate::types::{RasterDescriptor, RasterLayout};

pub use header::Header;
pub use ifd::IFDEntry;
pub use reader::{FileReader, TiffReader};
pub use writer::TiffWriter;

/// TIFF magic number (42)
pub const TIFF_MAGIC: u16 = 42;

/// Offset of the directory in files this crate writes
pub const FIRST_IFD_OFFSET: u32 = 8;

/// Offset of the pixel data in files this crate writes
pub const DATA_OFFSET: u32 = 256;

/// Writes an interleaved raster to `path`
///
/// Parameters are validated before the file is created, so a rejected call
/// leaves nothing behind. `data` must hold exactly
/// `width * height * components * bits_per_component / 8` bytes in host order.
pub fn save<P: AsRef<Path>>(
    path: P,
    width: u32,
    height: u32,
    components: u32,
    bits_per_component: u32,
    data: &[u8],
) -> Result<()> {
    let layout = RasterLayout::new(width, height, components, bits_per_component)?;
    writer::check_data_len(&layout, data)?;
    TiffWriter::create(path)?.write_image(&layout, data)?;
    Ok(())
}

/// Validates `path` and passes the positioned reader to `consumer`
pub fn load<P, T, F>(path: P, consumer: F) -> Result<T>
where
    P: AsRef<Path>,
    F: FnOnce(&RasterDescriptor, &mut FileReader) -> Result<T>,
{
    load_with_options(path, LoadOptions::default(), consumer)
}

/// [`load`] with explicit options
pub fn load_with_options<P, T, F>(path: P, options: LoadOptions, consumer: F) -> Result<T>
where
    P: AsRef<Path>,
    F: FnOnce(&RasterDescriptor, &mut FileReader) -> Result<T>,
{
    TiffReader::open_with_options(path, options)?.load(consumer)
}

/// Validates `path` and returns the descriptor with a reader at the pixel data
pub fn open<P: AsRef<Path>>(path: P) -> Result<(RasterDescriptor, FileReader)> {
    TiffReader::open(path)?.read_descriptor()
}

/// Reports every directory entry of `path`, in file order, without validation
pub fn info<P, F>(path: P, visitor: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnMut(&IFDEntry),
{
    TiffReader::open(path)?.for_each_entry(visitor)?;
    Ok(())
}
