use log::info;

use crate::stl::errors::StlResult;
use crate::stl::fields::FieldValue;
use crate::stl::handle::StlFile;
use crate::stl::raster::Raster;
use crate::utils::image_utils;
use crate::utils::logger::Logger;

/// Main interface to the stlview library
pub struct StlKit {
    logger: Logger,
}

impl StlKit {
    /// Create a new StlKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "stlview.log"
    ///
    /// # Returns
    /// A StlKit instance or an error if the log file cannot be created
    pub fn new(log_file: Option<&str>) -> StlResult<Self> {
        let log_path = log_file.unwrap_or("stlview.log");
        let logger = Logger::new(log_path)?;
        Ok(StlKit { logger })
    }

    /// Read the header fields of an STL file
    ///
    /// # Arguments
    /// * `input_path` - Path to the STL file
    ///
    /// # Returns
    /// The 13 header fields in display order
    pub fn read_metadata(&self, input_path: &str) -> StlResult<Vec<FieldValue>> {
        let mut stl = StlFile::open(input_path)?;
        let values = stl.extract_metadata()?;
        stl.close();

        self.logger.print_field_table(&values, false)?;
        Ok(values)
    }

    /// Decode the image of an STL file
    ///
    /// # Arguments
    /// * `input_path` - Path to the STL file
    ///
    /// # Returns
    /// The corrected grayscale raster
    pub fn decode(&self, input_path: &str) -> StlResult<Raster> {
        let mut stl = StlFile::open(input_path)?;
        let raster = stl.get_raster()?;
        stl.close();

        self.logger.log(&format!("Decoded {} from {}", raster, input_path))?;
        Ok(raster)
    }

    /// Analyze an STL file and return a printable summary
    ///
    /// # Arguments
    /// * `input_path` - Path to the STL file
    ///
    /// # Returns
    /// Header fields followed by the decoded image geometry
    pub fn analyze(&self, input_path: &str) -> StlResult<String> {
        let mut stl = StlFile::open(input_path)?;
        let values = stl.extract_metadata()?;
        let (raster, report) = stl.get_raster_with_report()?;
        stl.close();

        let mut result = String::from("STL Analysis Results:\n");
        result.push_str(&format!("  File size: {} bytes\n", stl.file_size()));
        for value in &values {
            result.push_str(&format!("  {}: {}\n", value.id, value.formatted_text));
        }
        result.push_str(&format!("  Logical width: {}\n", report.geometry.logical_width));
        result.push_str(&format!("  Stored layout: {} rows x {} columns\n",
                                 report.geometry.stored_rows, report.geometry.stored_cols));
        result.push_str(&format!("  Image: {}x{}\n", raster.width, raster.height));
        result.push_str(&format!("  Seam column: {}\n", report.seam_col));
        result.push_str(&format!("  Contrast window: {}..{}\n", report.window.lo, report.window.hi));

        self.logger.log(&result)?;
        Ok(result)
    }

    /// Decode an STL file and save the image
    ///
    /// # Arguments
    /// * `input_path` - Path to the STL file
    /// * `output_path` - Where to save the image; the extension picks the format
    ///
    /// # Returns
    /// Result indicating success or an error
    pub fn extract(&self, input_path: &str, output_path: &str) -> StlResult<()> {
        let raster = self.decode(input_path)?;
        image_utils::save_raster(&raster, output_path)?;

        info!("Extracted image from {} to {}", input_path, output_path);
        self.logger.log(&format!("Saved image to {}", output_path))?;
        Ok(())
    }
}
