//! Constants describing the STL binary layout

/// Header layout constants
pub mod header {
    /// Size of the fixed header; pixel samples start right after it
    pub const HEADER_SIZE: usize = 1337;

    /// Offset of the little-endian u16 logical width (informational)
    pub const LOGICAL_WIDTH_OFFSET: usize = 0;

    /// Offset of the little-endian u16 stored column count
    pub const STORED_COLS_OFFSET: usize = 2;

    /// Bytes occupied by the two geometry words
    pub const GEOMETRY_PREFIX_SIZE: usize = 4;

    /// Smallest byte source a handle accepts
    pub const MIN_FILE_SIZE: u64 = (HEADER_SIZE + GEOMETRY_PREFIX_SIZE) as u64;
}

/// Pixel body constants
pub mod pixels {
    /// Bytes per stored sample (u16)
    pub const BYTES_PER_SAMPLE: usize = 2;

    /// Fraction of the columns skipped on each side during seam detection
    pub const SEAM_MARGIN_DIVISOR: usize = 20;

    /// Lower percentile of the contrast window
    pub const LOW_PERCENTILE: f64 = 0.005;

    /// Upper percentile of the contrast window
    pub const HIGH_PERCENTILE: f64 = 0.995;

    /// Largest output intensity
    pub const MAX_INTENSITY: f64 = 255.0;
}

/// File naming constants
pub mod file {
    /// Expected file extension, compared case-insensitively
    pub const EXTENSION: &str = "stl";
}
