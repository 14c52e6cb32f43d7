//! I/O utilities for minitiff
//!
//! Byte-order helpers plus the raw reader and writer the directory codec
//! streams through.

pub mod traits;
pub mod byte_order;
pub mod reader;
pub mod writer;

pub use traits::SeekableReader;
pub use byte_order::{swap16, swap32, ByteOrder};
pub use reader::{RawReader, SwapMode};
pub use writer::RawWriter;
