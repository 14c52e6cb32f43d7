//! TIFF tag constants

/// Subfile type (0 = full resolution image)
pub const NEW_SUBFILE_TYPE: u16 = 254;

/// Image width in pixels
pub const IMAGE_WIDTH: u16 = 256;

/// Image height in pixels
pub const IMAGE_LENGTH: u16 = 257;

/// Bits per sample, inline or an offset to per-sample values
pub const BITS_PER_SAMPLE: u16 = 258;

/// Compression scheme
pub const COMPRESSION: u16 = 259;

/// Photometric interpretation
pub const PHOTOMETRIC_INTERPRETATION: u16 = 262;

/// Fill order
pub const FILL_ORDER: u16 = 266;

/// Strip offsets
pub const STRIP_OFFSETS: u16 = 273;

/// Orientation
pub const ORIENTATION: u16 = 274;

/// Samples per pixel
pub const SAMPLES_PER_PIXEL: u16 = 277;

/// Rows per strip
pub const ROWS_PER_STRIP: u16 = 278;

/// Strip byte counts
pub const STRIP_BYTE_COUNTS: u16 = 279;

/// X resolution
pub const X_RESOLUTION: u16 = 282;

/// Y resolution
pub const Y_RESOLUTION: u16 = 283;

/// Planar configuration
pub const PLANAR_CONFIGURATION: u16 = 284;

/// Resolution unit
pub const RESOLUTION_UNIT: u16 = 296;

/// Software
pub const SOFTWARE: u16 = 305;

/// Date/time
pub const DATE_TIME: u16 = 306;

/// Palette for paletted images, 3 * 2^bits SHORTs
pub const COLOR_MAP: u16 = 320;

/// Meaning of extra (alpha) samples
pub const EXTRA_SAMPLES: u16 = 338;

/// Sample format (1=unsigned, 2=signed, 3=float)
pub const SAMPLE_FORMAT: u16 = 339;

/// XMP packet
pub const XML_PACKET: u16 = 700;

/// Photoshop image resources
pub const PHOTOSHOP: u16 = 34377;

/// Exif IFD pointer
pub const EXIF_IFD: u16 = 34665;

/// ICC profile
pub const ICC_PROFILE: u16 = 34675;

/// Values accepted or emitted for the tags above
pub mod values {
    /// Compression: none
    pub const COMPRESSION_NONE: u32 = 1;

    /// Photometric: grayscale, black is zero
    pub const PHOTOMETRIC_BLACK_IS_ZERO: u32 = 1;

    /// Photometric: RGB
    pub const PHOTOMETRIC_RGB: u32 = 2;

    /// Planar configuration: components interleaved
    pub const PLANAR_CHUNKY: u32 = 1;

    /// Sample format: IEEE float
    pub const SAMPLE_FORMAT_IEEE_FP: u32 = 3;

    /// Fill order value that requests component swapping under the legacy rule
    pub const FILL_ORDER_SWAP_HINT: u32 = 1;
}

/// Returns the name of a TIFF tag
pub fn tag_name(tag: u16) -> &'static str {
    match tag {
        NEW_SUBFILE_TYPE => "NewSubfileType",
        IMAGE_WIDTH => "ImageWidth",
        IMAGE_LENGTH => "ImageLength",
        BITS_PER_SAMPLE => "BitsPerSample",
        COMPRESSION => "Compression",
        PHOTOMETRIC_INTERPRETATION => "PhotometricInterpretation",
        FILL_ORDER => "FillOrder",
        STRIP_OFFSETS => "StripOffsets",
        ORIENTATION => "Orientation",
        SAMPLES_PER_PIXEL => "SamplesPerPixel",
        ROWS_PER_STRIP => "RowsPerStrip",
        STRIP_BYTE_COUNTS => "StripByteCounts",
        X_RESOLUTION => "XResolution",
        Y_RESOLUTION => "YResolution",
        PLANAR_CONFIGURATION => "PlanarConfiguration",
        RESOLUTION_UNIT => "ResolutionUnit",
        SOFTWARE => "Software",
        DATE_TIME => "DateTime",
        COLOR_MAP => "ColorMap",
        EXTRA_SAMPLES => "ExtraSamples",
        SAMPLE_FORMAT => "SampleFormat",
        XML_PACKET => "XMLPacket",
        PHOTOSHOP => "Photoshop",
        EXIF_IFD => "ExifIFD",
        ICC_PROFILE => "ICCProfile",
        _ => "Unknown",
    }
}

/// Field type constants
pub mod field_types {
    /// BYTE (8-bit unsigned)
    pub const BYTE: u16 = 1;

    /// ASCII string
    pub const ASCII: u16 = 2;

    /// SHORT (16-bit unsigned)
    pub const SHORT: u16 = 3;

    /// LONG (32-bit unsigned)
    pub const LONG: u16 = 4;

    /// RATIONAL (two LONGs: numerator, denominator)
    pub const RATIONAL: u16 = 5;

    /// UNDEFINED (8-bit)
    pub const UNDEFINED: u16 = 7;

    /// FLOAT (32-bit IEEE float)
    pub const FLOAT: u16 = 11;

    /// DOUBLE (64-bit IEEE double)
    pub const DOUBLE: u16 = 12;
}

/// Returns the name of a field type
pub fn field_type_name(field_type: u16) -> &'static str {
    match field_type {
        field_types::BYTE => "BYTE",
        field_types::ASCII => "ASCII",
        field_types::SHORT => "SHORT",
        field_types::LONG => "LONG",
        field_types::RATIONAL => "RATIONAL",
        field_types::UNDEFINED => "UNDEFINED",
        field_types::FLOAT => "FLOAT",
        field_types::DOUBLE => "DOUBLE",
        _ => "Unknown",
    }
}
