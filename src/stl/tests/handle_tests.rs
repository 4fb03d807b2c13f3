//! Tests for the STL file handle

extern crate std;

use std::io::Write;

use crate::stl::errors::StlError;
use crate::stl::fields::{FieldId, FIELDS};
use crate::stl::handle::StlFile;
use crate::stl::tests::test_utils::{build_stl, cursor, put_field};

fn sample_file() -> Vec<u8> {
    let mut bytes = build_stl(2, 2, &[10, 61, 20, 30]);
    put_field(&mut bytes, 44, b"City Hospital");
    put_field(&mut bytes, 272, b"01022023");
    bytes
}

#[test]
fn test_open_rejects_empty_source() {
    let result = StlFile::new(cursor(Vec::new()));
    std::assert!(matches!(result, Err(StlError::InvalidArgument(_))));
}

#[test]
fn test_open_rejects_short_source() {
    let result = StlFile::new(cursor(vec![0u8; 1340]));
    std::assert!(matches!(result, Err(StlError::FormatError(_))));
}

#[test]
fn test_open_accepts_minimum_size() {
    let stl = StlFile::new(cursor(vec![0u8; 1341])).unwrap();
    std::assert_eq!(stl.file_size(), 1341);
    std::assert!(!stl.is_closed());
}

#[test]
fn test_extract_metadata() {
    let mut stl = StlFile::new(cursor(sample_file())).unwrap();
    let values = stl.extract_metadata().unwrap();

    std::assert_eq!(values.len(), FIELDS.len());
    std::assert_eq!(values[1].id, FieldId::Institution);
    std::assert_eq!(values[1].formatted_text, "City Hospital");
    std::assert_eq!(values[7].id, FieldId::ExposureDate);
    std::assert_eq!(values[7].formatted_text, "2023-02-01");
}

#[test]
fn test_operations_are_independent() {
    let mut stl = StlFile::new(cursor(sample_file())).unwrap();

    let raster_first = stl.get_raster().unwrap();
    let metadata_first = stl.extract_metadata().unwrap();
    let metadata_again = stl.extract_metadata().unwrap();
    let raster_again = stl.get_raster().unwrap();

    std::assert_eq!(metadata_first, metadata_again);
    std::assert_eq!(raster_first, raster_again);
    std::assert_eq!(raster_first.pixels, vec![255, 255, 128, 0]);
}

#[test]
fn test_body_errors_surface_at_decode_time() {
    // Declares more columns than the body can hold a single row of
    let bytes = build_stl(0, 100, &[1, 2]);
    let mut stl = StlFile::new(cursor(bytes)).unwrap();

    std::assert_eq!(stl.extract_metadata().unwrap().len(), 13);
    std::assert!(matches!(stl.get_raster(), Err(StlError::FormatError(_))));
}

#[test]
fn test_use_after_close() {
    let mut stl = StlFile::new(cursor(sample_file())).unwrap();
    stl.close();

    std::assert!(stl.is_closed());
    std::assert!(matches!(stl.extract_metadata(), Err(StlError::UseAfterDispose)));
    std::assert!(matches!(stl.get_raster(), Err(StlError::UseAfterDispose)));

    // A second close is harmless
    stl.close();
    std::assert!(stl.is_closed());
}

#[test]
fn test_open_path_requires_extension() {
    let result = StlFile::open("scan.png");
    std::assert!(matches!(result, Err(StlError::InvalidArgument(_))));

    let result = StlFile::open("scan");
    std::assert!(matches!(result, Err(StlError::InvalidArgument(_))));
}

#[test]
fn test_open_path_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = StlFile::open(dir.path().join("missing.stl"));
    std::assert!(matches!(result, Err(StlError::NotFound(_))));
}

#[test]
fn test_open_path_from_disk() {
    let mut file = tempfile::Builder::new().suffix(".STL").tempfile().unwrap();
    file.write_all(&sample_file()).unwrap();
    file.flush().unwrap();

    let mut stl = StlFile::open(file.path()).unwrap();
    std::assert_eq!(stl.extract_metadata().unwrap()[1].formatted_text, "City Hospital");
    std::assert_eq!(stl.get_raster().unwrap().dimensions(), (2, 2));
    stl.close();
}
