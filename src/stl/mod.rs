//! STL scanner dump decoding
//!
//! This module provides the header field catalog and reader, the image
//! decoder, and the file handle tying them together.

pub mod errors;
pub(crate) mod constants;
pub mod fields;
pub mod field_reader;
pub mod decoder;
pub mod raster;
pub mod handle;
pub(crate) mod validation;
#[cfg(test)]
mod tests;

pub use decoder::{ContrastWindow, DecodeReport, Geometry, ImageDecoder};
pub use errors::{StlError, StlResult};
pub use fields::{FieldDescriptor, FieldId, FieldValue, FormattingRule, TextEncoding, FIELDS};
pub use handle::StlFile;
pub use raster::Raster;

/// Size of the fixed STL header in bytes
pub const HEADER_SIZE: usize = constants::header::HEADER_SIZE;
