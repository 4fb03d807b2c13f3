//! Image extraction command
//!
//! Decodes the STL image and writes it as a lossless grayscale file.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::stl::errors::{StlError, StlResult};
use crate::stl::handle::StlFile;
use crate::utils::image_utils;
use crate::utils::logger::Logger;

/// Command for extracting the image from an STL file
pub struct ExtractCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Path to the output image
    output_file: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> StlResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| StlError::InvalidArgument("Missing input file".to_string()))?
            .clone();

        let output_file = args.get_one::<String>("output")
            .ok_or_else(|| StlError::InvalidArgument("Missing output file path for extraction".to_string()))?
            .clone();

        info!("Extracting {} to {}", input_file, output_file);

        Ok(ExtractCommand {
            input_file,
            output_file,
            logger,
        })
    }
}

impl<'a> Command for ExtractCommand<'a> {
    fn execute(&self) -> StlResult<()> {
        let mut stl = StlFile::open(&self.input_file)?;
        let raster = stl.get_raster()?;
        stl.close();

        image_utils::save_raster(&raster, &self.output_file)?;

        self.logger.log(&format!("Extracted {} to {}", raster, self.output_file))?;
        info!("Image extraction successful");
        Ok(())
    }
}
