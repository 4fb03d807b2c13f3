//! Raster encoding
//!
//! Hands decoded rasters to the `image` crate, which produces the final
//! lossless file.

use image::GrayImage;
use log::info;
use std::path::Path;

use crate::stl::errors::{StlError, StlResult};
use crate::stl::raster::Raster;

/// Converts a raster into an `image` buffer
pub fn to_gray_image(raster: &Raster) -> StlResult<GrayImage> {
    GrayImage::from_raw(raster.width, raster.height, raster.pixels.clone()).ok_or_else(|| {
        StlError::EncodeError(format!(
            "pixel buffer of {} bytes does not match {}x{}",
            raster.pixels.len(),
            raster.width,
            raster.height
        ))
    })
}

/// Saves a raster to disk
///
/// The format follows the output extension; it should be a lossless one
/// such as `.png`, `.tif` or `.bmp`.
///
/// # Arguments
/// * `raster` - The decoded raster
/// * `output_path` - Where to write the image
pub fn save_raster<P: AsRef<Path>>(raster: &Raster, output_path: P) -> StlResult<()> {
    let output_path = output_path.as_ref();
    let image = to_gray_image(raster)?;
    image.save(output_path)?;

    info!("Saved {} to {}", raster, output_path.display());
    Ok(())
}
