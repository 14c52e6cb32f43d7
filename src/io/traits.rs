//! Core I/O traits

use std::io::{Read, Seek};

/// Trait for readers that support both reading and seeking operations
///
/// Combines [`Read`] and [`Seek`] so the codec can run over files and
/// in-memory cursors alike. Implemented for every type that has both.
pub trait SeekableReader: Read + Seek {}

impl<T: Read + Seek> SeekableReader for T {}
