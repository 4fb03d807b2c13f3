pub mod io;
pub mod stl;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::StlKit;

pub use stl::{FieldId, FieldValue, Raster, StlError, StlFile, StlResult};
