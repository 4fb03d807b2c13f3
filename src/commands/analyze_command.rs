//! Header analysis command
//!
//! Prints the decoded header fields of an STL file and, in verbose
//! mode, what the image decoder detected.

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::stl::errors::{StlError, StlResult};
use crate::stl::fields::FieldValue;
use crate::stl::handle::StlFile;
use crate::stl::decoder::DecodeReport;
use crate::utils::logger::Logger;

/// Command for displaying STL header fields
pub struct AnalyzeCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Whether to show raw text and decode diagnostics
    verbose: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> AnalyzeCommand<'a> {
    /// Create a new analyze command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> StlResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| StlError::InvalidArgument("Missing input file".to_string()))?
            .clone();

        let verbose = args.get_flag("verbose");

        Ok(AnalyzeCommand {
            input_file,
            verbose,
            logger,
        })
    }

    fn display_fields(&self, values: &[FieldValue]) {
        info!("STL Header ({} fields):", values.len());
        for value in values {
            info!("  {}: {}", value.id, value.formatted_text);
            if self.verbose && value.raw_text != value.formatted_text {
                debug!("    raw: {}", value.raw_text);
            }
        }
    }

    fn display_decode_report(&self, report: &DecodeReport) {
        let (width, height) = report.geometry.output_dimensions();
        info!("Image:");
        info!("  Logical width: {}", report.geometry.logical_width);
        info!("  Stored layout: {} rows x {} columns",
              report.geometry.stored_rows, report.geometry.stored_cols);
        info!("  Output dimensions: {}x{}", width, height);
        if report.seam_col > 0 {
            info!("  Seam corrected at column {}", report.seam_col);
        } else {
            info!("  No seam detected");
        }
        info!("  Contrast window: {}..{} (scale {:.4})",
              report.window.lo, report.window.hi, report.window.scale);
    }
}

impl<'a> Command for AnalyzeCommand<'a> {
    fn execute(&self) -> StlResult<()> {
        let mut stl = StlFile::open(&self.input_file)?;
        info!("File size: {} bytes", stl.file_size());

        let values = stl.extract_metadata()?;
        self.display_fields(&values);
        self.logger.print_field_table(&values, self.verbose)?;

        if self.verbose {
            let (_, report) = stl.get_raster_with_report()?;
            self.display_decode_report(&report);
        }

        stl.close();
        Ok(())
    }
}
