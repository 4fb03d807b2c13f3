//! STL image decoder
//!
//! Reconstructs the viewable picture from the raw sample body:
//! 1. Derive the stored geometry from the header prefix
//! 2. Read the u16 samples
//! 3. Detect and undo the column seam left by the capture hardware
//! 4. Stretch the 0.5th..99.5th percentile range onto 0..255
//! 5. Transpose and flip into the viewing orientation

use byteorder::{ByteOrder, LittleEndian};
use log::{debug, info};

use crate::stl::constants::{header, pixels};
use crate::stl::errors::{StlError, StlResult};
use crate::stl::raster::Raster;
use crate::stl::validation;

/// Sample layout derived from the header prefix and file length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Width recorded by the scanner; not used for decoding
    pub logical_width: u16,
    /// Samples per stored row (height of the final image)
    pub stored_cols: usize,
    /// Number of stored rows (width of the final image)
    pub stored_rows: usize,
}

impl Geometry {
    /// Derives the geometry of a complete STL byte source
    ///
    /// Fails with a format error when the source is shorter than the
    /// header, declares zero columns, holds no full row, or is missing
    /// part of the pixel body.
    pub fn from_bytes(bytes: &[u8]) -> StlResult<Self> {
        validation::validate_min_size(bytes.len() as u64)?;

        let logical_width = LittleEndian::read_u16(&bytes[header::LOGICAL_WIDTH_OFFSET..]);
        let stored_cols = LittleEndian::read_u16(&bytes[header::STORED_COLS_OFFSET..]) as usize;

        if stored_cols == 0 {
            return Err(StlError::FormatError("stored column count is zero".to_string()));
        }

        let row_len = stored_cols * pixels::BYTES_PER_SAMPLE;
        let stored_rows = (bytes.len() - header::HEADER_SIZE) / row_len;

        if stored_rows == 0 {
            return Err(StlError::FormatError(format!(
                "no pixel rows: {} columns do not fit in {} body bytes",
                stored_cols,
                bytes.len() - header::HEADER_SIZE
            )));
        }

        let geometry = Geometry {
            logical_width,
            stored_cols,
            stored_rows,
        };
        validation::validate_pixel_body(bytes.len(), geometry.body_len())?;

        Ok(geometry)
    }

    /// Total number of stored samples
    pub fn sample_count(&self) -> usize {
        self.stored_rows * self.stored_cols
    }

    /// Bytes occupied by the sample body
    pub fn body_len(&self) -> usize {
        self.sample_count() * pixels::BYTES_PER_SAMPLE
    }

    /// Dimensions of the decoded raster as (width, height)
    pub fn output_dimensions(&self) -> (usize, usize) {
        (self.stored_rows, self.stored_cols)
    }
}

/// Linear intensity mapping from samples to 8-bit output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastWindow {
    pub lo: u16,
    pub hi: u16,
    pub scale: f64,
}

impl ContrastWindow {
    /// Builds the window for a low/high pair; a flat window maps 1:1
    pub fn new(lo: u16, hi: u16) -> Self {
        let scale = if hi > lo {
            pixels::MAX_INTENSITY / f64::from(hi - lo)
        } else {
            1.0
        };
        ContrastWindow { lo, hi, scale }
    }

    /// Maps one sample into 0..=255
    pub fn apply(&self, sample: u16) -> u8 {
        let value = (f64::from(sample) - f64::from(self.lo)) * self.scale;
        value.round().clamp(0.0, pixels::MAX_INTENSITY) as u8
    }
}

/// Intermediate results of one decode, for diagnostics
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeReport {
    pub geometry: Geometry,
    /// Column the rows were rolled by; 0 when no seam was found
    pub seam_col: usize,
    pub window: ContrastWindow,
}

/// Decoder for the STL pixel body
pub struct ImageDecoder;

impl ImageDecoder {
    /// Decodes a complete STL byte source into a raster
    pub fn decode(bytes: &[u8]) -> StlResult<Raster> {
        Self::decode_with_report(bytes).map(|(raster, _)| raster)
    }

    /// Decodes a complete STL byte source, also returning what was detected
    ///
    /// Either the whole raster is produced or an error is returned;
    /// there are no partial results.
    ///
    /// # Arguments
    /// * `bytes` - The entire file, header included
    ///
    /// # Returns
    /// The corrected raster and a report of the geometry, seam and window
    pub fn decode_with_report(bytes: &[u8]) -> StlResult<(Raster, DecodeReport)> {
        let geometry = Geometry::from_bytes(bytes)?;
        info!(
            "Decoding STL image: {} stored rows x {} stored columns (logical width {})",
            geometry.stored_rows, geometry.stored_cols, geometry.logical_width
        );

        let mut samples = read_samples(bytes, &geometry);

        let seam_col = detect_seam(&samples, geometry.stored_rows, geometry.stored_cols);
        if seam_col > 0 {
            debug!("Rolling rows left by {} columns", seam_col);
            roll_columns(&mut samples, geometry.stored_cols, seam_col);
        } else {
            debug!("No column seam detected");
        }

        let window = contrast_window(&samples);
        debug!("Contrast window: lo={}, hi={}, scale={}", window.lo, window.hi, window.scale);

        let raster = assemble_raster(&samples, &geometry, &window)?;

        Ok((raster, DecodeReport { geometry, seam_col, window }))
    }
}

/// Reads the stored u16 samples, row-major
pub fn read_samples(bytes: &[u8], geometry: &Geometry) -> Vec<u16> {
    let body = &bytes[header::HEADER_SIZE..header::HEADER_SIZE + geometry.body_len()];
    let mut samples = vec![0u16; geometry.sample_count()];
    LittleEndian::read_u16_into(body, &mut samples);
    samples
}

/// Finds the column where the capture buffer wrapped around
///
/// Scores every boundary between column `c` and `c + 1`, skipping the
/// outer twentieth of the columns on each side, by the mean absolute
/// difference across all rows. The first strictly largest score wins.
///
/// # Returns
/// The first column right of the winning boundary, or 0 when no
/// boundary shows any difference
pub fn detect_seam(samples: &[u16], rows: usize, cols: usize) -> usize {
    let margin = cols / pixels::SEAM_MARGIN_DIVISOR;
    if rows == 0 || cols < margin + 2 {
        return 0;
    }

    let last_candidate = cols - margin - 2;
    let mut best_score = 0.0f64;
    let mut seam_col = 0;

    for c in margin..=last_candidate {
        let total: u64 = samples
            .chunks_exact(cols)
            .map(|row| u64::from(row[c].abs_diff(row[c + 1])))
            .sum();
        let score = total as f64 / rows as f64;

        if score > best_score {
            best_score = score;
            seam_col = c + 1;
        }
    }

    if seam_col > 0 {
        debug!("Seam at column {} (mean difference {:.2})", seam_col, best_score);
    }
    seam_col
}

/// Rolls every row left so that column `seam_col` becomes column 0
pub fn roll_columns(samples: &mut [u16], cols: usize, seam_col: usize) {
    if cols == 0 || seam_col % cols == 0 {
        return;
    }

    for row in samples.chunks_exact_mut(cols) {
        row.rotate_left(seam_col % cols);
    }
}

/// Computes the 0.5th/99.5th percentile window of the samples
pub fn contrast_window(samples: &[u16]) -> ContrastWindow {
    if samples.is_empty() {
        return ContrastWindow::new(0, 0);
    }

    let mut sorted = samples.to_vec();
    sorted.sort_unstable();

    let last = (sorted.len() - 1) as f64;
    let lo = sorted[(pixels::LOW_PERCENTILE * last).floor() as usize];
    let hi = sorted[(pixels::HIGH_PERCENTILE * last).floor() as usize];

    ContrastWindow::new(lo, hi)
}

/// Builds the output raster from corrected samples
///
/// Stored sample (row r, column c) lands at output pixel
/// (x = rows - 1 - r, y = c): the picture is transposed and flipped
/// horizontally.
pub fn assemble_raster(samples: &[u16], geometry: &Geometry, window: &ContrastWindow) -> StlResult<Raster> {
    let (width, height) = geometry.output_dimensions();
    let cols = geometry.stored_cols;

    let out_width = u32::try_from(width)
        .map_err(|_| StlError::FormatError(format!("image width {} is too large", width)))?;
    let out_height = u32::try_from(height)
        .map_err(|_| StlError::FormatError(format!("image height {} is too large", height)))?;

    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let sample = samples[(width - 1 - x) * cols + y];
            pixels.push(window.apply(sample));
        }
    }

    Ok(Raster::new(out_width, out_height, pixels))
}
