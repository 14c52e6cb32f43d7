//! Sequential raw reader with transparent component swapping

use std::io::{self, Read, Seek, SeekFrom};

use tracing::trace;

use crate::error::{Error, Result};
use crate::io::byte_order::{swap16_in_place, swap32_in_place};
use crate::io::SeekableReader;

/// Scratch size used by the typed sample readers
const SAMPLE_CHUNK: usize = 4096;

/// How [`RawReader::read_bytes`] rewrites the bytes it hands back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwapMode {
    /// Bytes are returned as stored
    #[default]
    None,
    /// Every 2-byte unit is reversed
    Swap16,
    /// Every 4-byte unit is reversed
    Swap32,
}

impl SwapMode {
    /// Swap mode needed to bring components of the given width to host order
    pub fn for_bits(bits_per_component: u32) -> Self {
        match bits_per_component {
            16 => SwapMode::Swap16,
            32 => SwapMode::Swap32,
            _ => SwapMode::None,
        }
    }
}

/// Reader over a seekable byte stream
///
/// Once the directory reader has configured a [`SwapMode`], every call to
/// [`read_bytes`](Self::read_bytes) normalizes the data it returns, so
/// pixel consumers never have to deal with file byte order.
pub struct RawReader<R: SeekableReader> {
    inner: R,
    bytes_read: u64,
    swap: SwapMode,
}

impl<R: SeekableReader> RawReader<R> {
    /// Wraps a seekable reader
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            bytes_read: 0,
            swap: SwapMode::None,
        }
    }

    /// Fills `buf` completely or fails with [`Error::ShortRead`]
    pub fn read_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        self.bytes_read += filled as u64;

        if filled < buf.len() {
            return Err(Error::ShortRead {
                expected: buf.len(),
                actual: filled,
            });
        }

        match self.swap {
            SwapMode::None => {}
            SwapMode::Swap16 => swap16_in_place(buf),
            SwapMode::Swap32 => swap32_in_place(buf),
        }
        Ok(())
    }

    /// Reads a fixed-size byte array
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.read_bytes(&mut buf)?;
        Ok(buf)
    }

    /// Reads a u16 in host byte order
    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(u16::from_ne_bytes(self.read_array()?))
    }

    /// Reads a u32 in host byte order
    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_ne_bytes(self.read_array()?))
    }

    /// Reads `out.len()` 16-bit samples
    pub fn read_u16_samples(&mut self, out: &mut [u16]) -> Result<()> {
        let mut scratch = [0u8; SAMPLE_CHUNK];
        for chunk in out.chunks_mut(SAMPLE_CHUNK / 2) {
            let bytes = &mut scratch[..chunk.len() * 2];
            self.read_bytes(bytes)?;
            for (sample, raw) in chunk.iter_mut().zip(bytes.chunks_exact(2)) {
                *sample = u16::from_ne_bytes([raw[0], raw[1]]);
            }
        }
        Ok(())
    }

    /// Reads `out.len()` 32-bit unsigned samples
    pub fn read_u32_samples(&mut self, out: &mut [u32]) -> Result<()> {
        let mut scratch = [0u8; SAMPLE_CHUNK];
        for chunk in out.chunks_mut(SAMPLE_CHUNK / 4) {
            let bytes = &mut scratch[..chunk.len() * 4];
            self.read_bytes(bytes)?;
            for (sample, raw) in chunk.iter_mut().zip(bytes.chunks_exact(4)) {
                *sample = u32::from_ne_bytes([raw[0], raw[1], raw[2], raw[3]]);
            }
        }
        Ok(())
    }

    /// Reads `out.len()` 32-bit float samples
    pub fn read_f32_samples(&mut self, out: &mut [f32]) -> Result<()> {
        let mut scratch = [0u8; SAMPLE_CHUNK];
        for chunk in out.chunks_mut(SAMPLE_CHUNK / 4) {
            let bytes = &mut scratch[..chunk.len() * 4];
            self.read_bytes(bytes)?;
            for (sample, raw) in chunk.iter_mut().zip(bytes.chunks_exact(4)) {
                *sample = f32::from_ne_bytes([raw[0], raw[1], raw[2], raw[3]]);
            }
        }
        Ok(())
    }

    /// Moves to an absolute byte offset
    pub fn seek(&mut self, offset: u64) -> Result<()> {
        trace!(offset, "seek");
        self.inner.seek(SeekFrom::Start(offset))?;
        Ok(())
    }

    /// Current absolute byte offset
    pub fn position(&mut self) -> Result<u64> {
        Ok(self.inner.stream_position()?)
    }

    /// Total number of bytes obtained so far
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Active swap mode
    pub fn swap_mode(&self) -> SwapMode {
        self.swap
    }

    pub(crate) fn set_swap_mode(&mut self, mode: SwapMode) {
        self.swap = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_bytes() {
        let mut reader = RawReader::new(Cursor::new(vec![0x10u8, 0x20, 0x30, 0x40]));
        let mut buf = [0u8; 2];
        reader.read_bytes(&mut buf).unwrap();
        assert_eq!(buf, [0x10, 0x20]);
        reader.read_bytes(&mut buf).unwrap();
        assert_eq!(buf, [0x30, 0x40]);
        assert_eq!(reader.bytes_read(), 4);
    }

    #[test]
    fn test_short_read() {
        let mut reader = RawReader::new(Cursor::new(vec![0x10u8, 0x20]));
        let mut buf = [0u8; 3];
        let err = reader.read_bytes(&mut buf).unwrap_err();
        assert!(matches!(err, Error::ShortRead { expected: 3, actual: 2 }));
    }

    #[test]
    fn test_read_scalars_native() {
        let mut data = Vec::new();
        data.extend_from_slice(&0x1234u16.to_ne_bytes());
        data.extend_from_slice(&0xDEAD_BEEFu32.to_ne_bytes());
        let mut reader = RawReader::new(Cursor::new(data));
        assert_eq!(reader.read_u16().unwrap(), 0x1234);
        assert_eq!(reader.read_u32().unwrap(), 0xDEAD_BEEF);
    }

    #[test]
    fn test_seek_and_position() {
        let mut reader = RawReader::new(Cursor::new(vec![0u8, 1, 2, 3, 4, 5]));
        reader.seek(4).unwrap();
        assert_eq!(reader.position().unwrap(), 4);
        let buf: [u8; 2] = reader.read_array().unwrap();
        assert_eq!(buf, [4, 5]);
    }

    #[test]
    fn test_swap16_mode() {
        let mut reader = RawReader::new(Cursor::new(vec![0x01u8, 0x02, 0x03, 0x04]));
        reader.set_swap_mode(SwapMode::Swap16);
        let mut buf = [0u8; 4];
        reader.read_bytes(&mut buf).unwrap();
        assert_eq!(buf, [0x02, 0x01, 0x04, 0x03]);
    }

    #[test]
    fn test_swap32_mode() {
        let mut reader = RawReader::new(Cursor::new(vec![0x01u8, 0x02, 0x03, 0x04]));
        reader.set_swap_mode(SwapMode::Swap32);
        let mut buf = [0u8; 4];
        reader.read_bytes(&mut buf).unwrap();
        assert_eq!(buf, [0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_read_u16_samples_across_chunks() {
        let values: Vec<u16> = (0..5000u16).collect();
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
        let mut reader = RawReader::new(Cursor::new(bytes));

        let mut out = vec![0u16; values.len()];
        reader.read_u16_samples(&mut out).unwrap();
        assert_eq!(out, values);
    }

    #[test]
    fn test_read_f32_samples_with_swap() {
        let values = [1.5f32, -2.25, 1024.0];
        let foreign: Vec<u8> = values
            .iter()
            .flat_map(|v| {
                let mut b = v.to_ne_bytes();
                b.reverse();
                b
            })
            .collect();
        let mut reader = RawReader::new(Cursor::new(foreign));
        reader.set_swap_mode(SwapMode::Swap32);

        let mut out = [0f32; 3];
        reader.read_f32_samples(&mut out).unwrap();
        assert_eq!(out, values);
    }

    #[test]
    fn test_read_u32_samples_with_swap() {
        let values = [0x0102_0304u32, 0xDEAD_BEEF, 7];
        let foreign: Vec<u8> = values.iter().flat_map(|v| v.swap_bytes().to_ne_bytes()).collect();
        let mut reader = RawReader::new(Cursor::new(foreign));
        reader.set_swap_mode(SwapMode::Swap32);

        let mut out = [0u32; 3];
        reader.read_u32_samples(&mut out).unwrap();
        assert_eq!(out, values);
        assert_eq!(reader.bytes_read(), 12);
    }

    #[test]
    fn test_swap_mode_for_bits() {
        assert_eq!(SwapMode::for_bits(8), SwapMode::None);
        assert_eq!(SwapMode::for_bits(16), SwapMode::Swap16);
        assert_eq!(SwapMode::for_bits(32), SwapMode::Swap32);
    }
}
