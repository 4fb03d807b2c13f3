//! Utility modules for common functionality
//!
//! This module provides the logger, text and date helpers, and the
//! raster encoder used by the commands.

pub mod logger;
pub(crate) mod string_utils;
pub(crate) mod format_utils;
pub mod image_utils;
