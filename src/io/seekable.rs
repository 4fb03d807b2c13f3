//! Seekable reader trait
//!
//! STL handles need to re-read their source from the start for each
//! operation, so they accept anything that can both read and seek.

use std::io::{Read, Seek};

/// Trait for byte sources that can both read and seek
///
/// Files, buffered files and in-memory cursors all qualify.
pub trait SeekableReader: Read + Seek + Send + Sync {}

// Blanket implementation for any type that implements the required traits
impl<T: Read + Seek + Send + Sync> SeekableReader for T {}
