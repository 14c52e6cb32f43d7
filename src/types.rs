//! Core data types for minitiff

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::formats::tiff::tags::values;
use crate::io::ByteOrder;

/// Represents component data types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DataType {
    /// Unsigned 8-bit integer
    U8,
    /// Unsigned 16-bit integer
    U16,
    /// Unsigned 32-bit integer
    U32,
    /// 32-bit floating point
    F32,
}

impl DataType {
    /// Returns the size in bytes for this data type
    pub fn size(&self) -> usize {
        match self {
            DataType::U8 => 1,
            DataType::U16 => 2,
            DataType::U32 | DataType::F32 => 4,
        }
    }

    /// Returns the name of this data type
    pub fn name(&self) -> &'static str {
        match self {
            DataType::U8 => "U8",
            DataType::U16 => "U16",
            DataType::U32 => "U32",
            DataType::F32 => "F32",
        }
    }
}

/// Image dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Dimensions {
    /// Creates new dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the total number of pixels
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Returns true for the component widths the codec handles
pub fn is_supported_bits(bits_per_component: u32) -> bool {
    matches!(bits_per_component, 8 | 16 | 32)
}

/// Returns true for the component counts the codec handles
pub fn is_supported_components(components: u32) -> bool {
    matches!(components, 1 | 3 | 4)
}

/// Validated shape of an interleaved, single-strip raster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RasterLayout {
    pub width: u32,
    pub height: u32,
    /// Interleaved components per pixel: 1, 3 or 4
    pub components: u32,
    /// 8, 16 or 32
    pub bits_per_component: u32,
}

impl RasterLayout {
    /// Checks the parameters against the supported subset
    pub fn new(width: u32, height: u32, components: u32, bits_per_component: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidParameter(format!(
                "dimensions must be non-zero, got {}x{}",
                width, height
            )));
        }
        if !is_supported_components(components) {
            return Err(Error::InvalidParameter(format!(
                "component count must be 1, 3 or 4, got {}",
                components
            )));
        }
        if !is_supported_bits(bits_per_component) {
            return Err(Error::InvalidParameter(format!(
                "bits per component must be 8, 16 or 32, got {}",
                bits_per_component
            )));
        }
        let layout = Self {
            width,
            height,
            components,
            bits_per_component,
        };
        if layout.data_len() > u32::MAX as u64 {
            return Err(Error::InvalidParameter(format!(
                "pixel data of {} bytes does not fit a 32-bit offset",
                layout.data_len()
            )));
        }
        Ok(layout)
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    pub fn bytes_per_component(&self) -> u32 {
        self.bits_per_component / 8
    }

    /// Total pixel data length in bytes
    pub fn data_len(&self) -> u64 {
        self.dimensions().pixel_count() * self.components as u64 * self.bytes_per_component() as u64
    }

    /// Photometric interpretation written for this layout
    pub fn photometric(&self) -> u32 {
        if self.components == 1 {
            values::PHOTOMETRIC_BLACK_IS_ZERO
        } else {
            values::PHOTOMETRIC_RGB
        }
    }
}

/// Everything the directory reader resolved about a file's pixel data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RasterDescriptor {
    pub layout: RasterLayout,
    /// Absolute offset of the first pixel byte
    pub data_offset: u32,
    /// Declared pixel data length in bytes
    pub data_len: u32,
    /// Byte order declared by the header
    pub byte_order: ByteOrder,
    /// FillOrder tag value, when present
    pub fill_order: Option<u32>,
    /// SampleFormat tag value, when present
    pub sample_format: Option<u32>,
}

impl RasterDescriptor {
    pub fn width(&self) -> u32 {
        self.layout.width
    }

    pub fn height(&self) -> u32 {
        self.layout.height
    }

    pub fn components(&self) -> u32 {
        self.layout.components
    }

    pub fn bits_per_component(&self) -> u32 {
        self.layout.bits_per_component
    }

    /// Component data type, combining width with SampleFormat
    pub fn data_type(&self) -> DataType {
        match self.layout.bits_per_component {
            8 => DataType::U8,
            16 => DataType::U16,
            _ if self.sample_format == Some(values::SAMPLE_FORMAT_IEEE_FP) => DataType::F32,
            _ => DataType::U32,
        }
    }
}

impl fmt::Display for RasterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Raster:")?;
        writeln!(f, "  Dimensions: {} x {}", self.width(), self.height())?;
        writeln!(f, "  Components: {}", self.components())?;
        writeln!(
            f,
            "  Bits per component: {} ({})",
            self.bits_per_component(),
            self.data_type().name()
        )?;
        writeln!(f, "  Byte order: {}", self.byte_order.name())?;
        if let Some(fill_order) = self.fill_order {
            writeln!(f, "  Fill order: {}", fill_order)?;
        }
        write!(
            f,
            "  Data: {} bytes at offset {}",
            self.data_len, self.data_offset
        )
    }
}
