//! I/O abstractions for byte sources

pub mod seekable;
