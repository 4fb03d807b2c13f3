//! Integration tests for STL decoding

use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Cursor;

use stlview::stl::{FieldId, StlError, StlFile, HEADER_SIZE};
use stlview::StlKit;

/// Builds a small STL file with a patient name, a birth date and a
/// 40-column body whose rows wrap around at column 12.
fn synthetic_stl() -> Vec<u8> {
    let cols = 40u16;
    let rows = 6u16;

    let mut buffer = Vec::new();
    buffer.write_u16::<LittleEndian>(rows).unwrap();
    buffer.write_u16::<LittleEndian>(cols).unwrap();
    buffer.resize(HEADER_SIZE, 0);

    // "Петров" in Windows-1251
    buffer[114..120].copy_from_slice(&[0xCF, 0xE5, 0xF2, 0xF0, 0xEE, 0xE2]);
    buffer[264..272].copy_from_slice(b"29111970");
    buffer[513..521].copy_from_slice(b"notadate");

    for r in 0..rows {
        for c in 0..cols {
            // A smooth ramp per row, stored rolled right by 12 columns
            let source_col = (c + cols - 12) % cols;
            let value = 1000 + source_col * 50 + r;
            buffer.write_u16::<LittleEndian>(value).unwrap();
        }
    }

    buffer
}

#[test]
fn test_complete_stl_workflow() {
    let mut stl = StlFile::new(Cursor::new(synthetic_stl())).unwrap();

    let values = stl.extract_metadata().unwrap();
    assert_eq!(values.len(), 13);
    assert_eq!(values[3].id, FieldId::PatientName);
    assert_eq!(values[3].formatted_text, "Петров");
    assert_eq!(values[6].id, FieldId::BirthDate);
    assert_eq!(values[6].formatted_text, "1970-11-29");
    assert_eq!(values[12].formatted_text, "notadate");

    let (raster, report) = stl.get_raster_with_report().unwrap();
    assert_eq!(report.geometry.stored_rows, 6);
    assert_eq!(report.seam_col, 12);
    assert_eq!(raster.dimensions(), (6, 40));

    // Stored row 0 ends up in the last output column; the ramp rises along y
    assert_eq!(raster.get_pixel(5, 0), Some(0));
    assert_eq!(raster.get_pixel(0, 39), Some(255));

    stl.close();
    assert!(matches!(stl.get_raster(), Err(StlError::UseAfterDispose)));
}

#[test]
fn test_extract_to_png() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scan.stl");
    let output = dir.path().join("scan.png");
    let log = dir.path().join("stlview.log");
    std::fs::write(&input, synthetic_stl()).unwrap();

    let kit = StlKit::new(log.to_str()).unwrap();
    kit.extract(input.to_str().unwrap(), output.to_str().unwrap()).unwrap();

    let decoded = kit.decode(input.to_str().unwrap()).unwrap();
    let image = image::open(&output).unwrap().to_luma8();
    assert_eq!(image.dimensions(), (decoded.width, decoded.height));
    assert_eq!(image.into_raw(), decoded.pixels);

    let summary = kit.analyze(input.to_str().unwrap()).unwrap();
    assert!(summary.contains("PatientName: Петров"));
    assert!(summary.contains("Seam column: 12"));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let kit = StlKit::new(dir.path().join("stlview.log").to_str()).unwrap();

    let result = kit.read_metadata(dir.path().join("absent.stl").to_str().unwrap());
    assert!(matches!(result, Err(StlError::NotFound(_))));
}
