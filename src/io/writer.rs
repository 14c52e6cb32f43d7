//! Sequential raw writer that counts what it emits

use std::io::Write;

use crate::error::Result;

/// Writer over an output byte stream
///
/// Tracks the running number of bytes written so the directory writer can
/// pad up to the fixed pixel data offset.
pub struct RawWriter<W: Write> {
    inner: W,
    bytes_written: u64,
}

impl<W: Write> RawWriter<W> {
    /// Wraps an output stream
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            bytes_written: 0,
        }
    }

    /// Appends all of `data`
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.inner.write_all(data)?;
        self.bytes_written += data.len() as u64;
        Ok(())
    }

    /// Appends a u16 in host byte order
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.write_bytes(&value.to_ne_bytes())
    }

    /// Appends a u32 in host byte order
    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.write_bytes(&value.to_ne_bytes())
    }

    /// Appends `count` copies of `byte`
    pub fn write_fill(&mut self, byte: u8, count: u64) -> Result<()> {
        let block = [byte; 64];
        let mut remaining = count;
        while remaining > 0 {
            let n = remaining.min(block.len() as u64) as usize;
            self.write_bytes(&block[..n])?;
            remaining -= n as u64;
        }
        Ok(())
    }

    /// Total number of bytes written so far
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Flushes and returns the underlying stream
    pub fn finish(mut self) -> Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
