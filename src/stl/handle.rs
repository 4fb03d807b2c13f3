//! STL file handle
//!
//! `StlFile` owns one byte source for its whole lifetime and exposes
//! the two independent operations a viewer needs: reading the header
//! fields and decoding the image.

use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use crate::io::seekable::SeekableReader;
use crate::stl::constants::{file, header};
use crate::stl::decoder::{DecodeReport, ImageDecoder};
use crate::stl::errors::{StlError, StlResult};
use crate::stl::field_reader;
use crate::stl::fields::FieldValue;
use crate::stl::raster::Raster;
use crate::stl::validation;

/// Handle to an open STL byte source
///
/// The source is released exactly once, either by `close` or when the
/// handle is dropped. Every operation after `close` fails with
/// `StlError::UseAfterDispose`.
pub struct StlFile<R: SeekableReader = BufReader<File>> {
    /// The owned byte source; None once closed
    source: Option<R>,
    /// Length measured at open time
    file_size: u64,
}

impl StlFile<BufReader<File>> {
    /// Opens an STL file from disk
    ///
    /// # Arguments
    /// * `path` - Path to a file with the `.stl` extension
    ///
    /// # Returns
    /// An open handle, or InvalidArgument/NotFound/FormatError
    pub fn open<P: AsRef<Path>>(path: P) -> StlResult<Self> {
        let path = path.as_ref();
        info!("Opening STL file: {}", path.display());

        let has_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case(file::EXTENSION))
            .unwrap_or(false);
        if !has_extension {
            return Err(StlError::InvalidArgument(format!(
                "{} does not have the .{} extension",
                path.display(),
                file::EXTENSION
            )));
        }

        if !path.is_file() {
            return Err(StlError::NotFound(path.to_path_buf()));
        }

        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl<R: SeekableReader> StlFile<R> {
    /// Takes ownership of a byte source and validates its minimum size
    ///
    /// Fails before any decoding when the source is empty or too short
    /// to hold the header and geometry words.
    pub fn new(mut source: R) -> StlResult<Self> {
        let file_size = validation::get_file_size(&mut source)?;
        validation::validate_min_size(file_size)?;

        debug!("STL source accepted ({} bytes)", file_size);
        Ok(StlFile {
            source: Some(source),
            file_size,
        })
    }

    /// Length of the byte source, as measured at open time
    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    /// Whether `close` has been called
    pub fn is_closed(&self) -> bool {
        self.source.is_none()
    }

    /// Reads every header field, in declaration order
    ///
    /// Individual fields never fail; only a failure to read the header
    /// window itself is reported.
    pub fn extract_metadata(&mut self) -> StlResult<Vec<FieldValue>> {
        let header = self.read_header()?;
        let values = field_reader::read_all_fields(&header);

        info!("Extracted {} header fields", values.len());
        Ok(values)
    }

    /// Decodes the corrected grayscale raster
    ///
    /// Pixel body completeness is only checked here, not at open time.
    pub fn get_raster(&mut self) -> StlResult<Raster> {
        self.get_raster_with_report().map(|(raster, _)| raster)
    }

    /// Decodes the raster and reports the geometry, seam and window used
    pub fn get_raster_with_report(&mut self) -> StlResult<(Raster, DecodeReport)> {
        let bytes = self.read_all()?;
        ImageDecoder::decode_with_report(&bytes)
    }

    /// Releases the byte source
    ///
    /// Calling this more than once is harmless.
    pub fn close(&mut self) {
        if self.source.take().is_some() {
            debug!("STL source released");
        }
    }

    fn source_mut(&mut self) -> StlResult<&mut R> {
        self.source.as_mut().ok_or(StlError::UseAfterDispose)
    }

    /// Reads the fixed header window from the start of the source
    fn read_header(&mut self) -> StlResult<Vec<u8>> {
        let source = self.source_mut()?;
        source.seek(SeekFrom::Start(0))?;

        let mut buffer = vec![0u8; header::HEADER_SIZE];
        source.read_exact(&mut buffer)?;
        Ok(buffer)
    }

    /// Reads the entire source from the start
    fn read_all(&mut self) -> StlResult<Vec<u8>> {
        let capacity = usize::try_from(self.file_size).unwrap_or(0);
        let source = self.source_mut()?;
        source.seek(SeekFrom::Start(0))?;

        let mut buffer = Vec::with_capacity(capacity);
        source.read_to_end(&mut buffer)?;
        Ok(buffer)
    }
}
