//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod analyze_command;
pub mod extract_command;

pub use command_traits::{Command, CommandFactory};
pub use analyze_command::AnalyzeCommand;
pub use extract_command::ExtractCommand;

use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::stl::errors::StlResult;

/// Factory for creating command instances based on CLI arguments
pub struct StlCommandFactory;

impl StlCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        StlCommandFactory
    }
}

impl Default for StlCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for StlCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> StlResult<Box<dyn Command + 'a>> {
        if args.get_flag("extract") {
            Ok(Box::new(ExtractCommand::new(args, logger)?))
        } else {
            // Default to analyze command
            Ok(Box::new(AnalyzeCommand::new(args, logger)?))
        }
    }
}
