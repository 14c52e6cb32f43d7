//! minitiff - a minimal codec for uncompressed baseline TIFF
//!
//! minitiff writes and reads single-strip, uncompressed rasters with 1, 3 or
//! 4 interleaved components at 8, 16 or 32 bits each. Files of either byte
//! order are accepted; 16 and 32-bit components come back in host order.
//!
//! # Examples
//!
//! ## Saving
//!
//! ```no_run
//! let rgb16 = vec![0u8; 32 * 32 * 3 * 2];
//! minitiff::save("out.tif", 32, 32, 3, 16, &rgb16)?;
//! # Ok::<(), minitiff::Error>(())
//! ```
//!
//! ## Loading straight into caller storage
//!
//! ```no_run
//! let pixels = minitiff::load("out.tif", |desc, reader| {
//!     let mut samples = vec![0u16; desc.layout.data_len() as usize / 2];
//!     reader.read_u16_samples(&mut samples)?;
//!     Ok(samples)
//! })?;
//! # Ok::<(), minitiff::Error>(())
//! ```
//!
//! ## Listing the directory
//!
//! ```no_run
//! minitiff::info("out.tif", |entry| {
//!     println!("{} = {}", minitiff::tags::tag_name(entry.tag), entry.value);
//! })?;
//! # Ok::<(), minitiff::Error>(())
//! ```

pub mod io;
pub mod error;
pub mod types;
pub mod config;
pub mod formats;

pub use error::{Error, Result};
pub use types::{DataType, Dimensions, RasterDescriptor, RasterLayout};
pub use config::{ComponentSwap, LoadOptions};
pub use formats::tiff::{
    info, load, load_with_options, open, save,
    tags, FileReader, Header, IFDEntry, TiffReader, TiffWriter, TIFF_MAGIC,
};
pub use io::{swap16, swap32, ByteOrder, RawReader, RawWriter, SeekableReader, SwapMode};
