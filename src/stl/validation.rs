//! STL size validation
//!
//! Cheap checks run before any decoding so that obviously broken
//! byte sources are rejected early.

use log::{debug, warn};
use std::io::{Seek, SeekFrom};

use crate::io::seekable::SeekableReader;
use crate::stl::constants::header;
use crate::stl::errors::{StlError, StlResult};

/// Gets the length of a byte source without moving its read position
///
/// # Arguments
/// * `reader` - The seekable reader to measure
///
/// # Returns
/// The total length in bytes
pub fn get_file_size(reader: &mut dyn SeekableReader) -> StlResult<u64> {
    let current_position = reader.stream_position()?;
    let file_size = reader.seek(SeekFrom::End(0))?;
    reader.seek(SeekFrom::Start(current_position))?;

    debug!("Byte source length: {}", file_size);
    Ok(file_size)
}

/// Validates that a byte source can hold the header and geometry words
///
/// An empty source is rejected as an invalid argument; anything else
/// shorter than the header plus the geometry prefix is a format error.
pub fn validate_min_size(file_size: u64) -> StlResult<()> {
    if file_size == 0 {
        return Err(StlError::InvalidArgument("byte source is empty".to_string()));
    }

    if file_size < header::MIN_FILE_SIZE {
        warn!("Byte source of {} bytes is too small for an STL header", file_size);
        return Err(StlError::FormatError(format!(
            "file is {} bytes, at least {} are required",
            file_size,
            header::MIN_FILE_SIZE
        )));
    }

    Ok(())
}

/// Validates that the pixel body is fully present
///
/// # Arguments
/// * `file_size` - Total length of the byte source
/// * `body_len` - Bytes the declared geometry needs after the header
pub fn validate_pixel_body(file_size: usize, body_len: usize) -> StlResult<()> {
    let required = header::HEADER_SIZE.checked_add(body_len).ok_or_else(|| {
        StlError::FormatError("pixel body size overflows".to_string())
    })?;

    if file_size < required {
        return Err(StlError::FormatError(format!(
            "truncated pixel data: need {} bytes, file has {}",
            required, file_size
        )));
    }

    Ok(())
}
