//! Tests for the header field catalog and reader

extern crate std;

use crate::stl::constants::header::HEADER_SIZE;
use crate::stl::field_reader::{apply_rule, read_all_fields, read_field};
use crate::stl::fields::{descriptor, FieldId, FormattingRule, TextEncoding, FIELDS};
use crate::stl::tests::test_utils::put_field;

fn blank_header() -> Vec<u8> {
    vec![0u8; HEADER_SIZE]
}

#[test]
fn test_catalog_layout() {
    let expected = [
        (FieldId::TubeConfig, 14, 40),
        (FieldId::Institution, 44, 94),
        (FieldId::Unknown1, 94, 114),
        (FieldId::PatientName, 114, 194),
        (FieldId::CareType, 194, 214),
        (FieldId::PatientAddress, 214, 264),
        (FieldId::BirthDate, 264, 272),
        (FieldId::ExposureDate, 272, 280),
        (FieldId::Projection, 280, 300),
        (FieldId::Radiologist, 300, 350),
        (FieldId::Sex, 350, 483),
        (FieldId::FileId, 483, 513),
        (FieldId::Date, 513, 521),
    ];

    std::assert_eq!(FIELDS.len(), expected.len());
    for (descriptor, (id, start, end)) in FIELDS.iter().zip(expected) {
        std::assert_eq!(descriptor.id, id);
        std::assert_eq!(descriptor.offset, start);
        std::assert_eq!(descriptor.end(), end);
        std::assert!(descriptor.end() <= HEADER_SIZE);
    }
}

#[test]
fn test_date_fields_are_ascii() {
    for descriptor in FIELDS.iter() {
        match descriptor.rule {
            FormattingRule::Date => std::assert_eq!(descriptor.encoding, TextEncoding::Ascii),
            FormattingRule::Generic => std::assert_eq!(descriptor.encoding, TextEncoding::Cp1251),
        }
    }
}

#[test]
fn test_field_names() {
    std::assert_eq!(FieldId::FileId.name(), "FileID");
    std::assert_eq!(FieldId::Unknown1.to_string(), "Unknown1");
}

#[test]
fn test_string_ends_at_first_zero() {
    let mut header = blank_header();
    put_field(&mut header, 14, b"ABC\0XYZ");

    let value = read_field(descriptor(FieldId::TubeConfig).unwrap(), &header);
    std::assert_eq!(value.raw_text, "ABC");
}

#[test]
fn test_string_without_zero_fills_window() {
    let mut header = blank_header();
    put_field(&mut header, 14, &[b'A'; 26]);
    // First byte past the window is not part of the field
    header[40] = b'B';

    let value = read_field(descriptor(FieldId::TubeConfig).unwrap(), &header);
    std::assert_eq!(value.raw_text, "A".repeat(26));
}

#[test]
fn test_cp1251_decoding() {
    let mut header = blank_header();
    // "Иван Петров" in Windows-1251
    put_field(&mut header, 114, &[0xC8, 0xE2, 0xE0, 0xED, 0x20, 0xCF, 0xE5, 0xF2, 0xF0, 0xEE, 0xE2]);

    let value = read_field(descriptor(FieldId::PatientName).unwrap(), &header);
    std::assert_eq!(value.raw_text, "Иван Петров");
    std::assert_eq!(value.formatted_text, value.raw_text);
}

#[test]
fn test_whitespace_is_trimmed() {
    let mut header = blank_header();
    put_field(&mut header, 280, b"  AP view \t");

    let value = read_field(descriptor(FieldId::Projection).unwrap(), &header);
    std::assert_eq!(value.raw_text, "AP view");
}

#[test]
fn test_date_field_is_formatted() {
    let mut header = blank_header();
    put_field(&mut header, 264, b"29111970");

    let value = read_field(descriptor(FieldId::BirthDate).unwrap(), &header);
    std::assert_eq!(value.raw_text, "29111970");
    std::assert_eq!(value.formatted_text, "1970-11-29");
}

#[test]
fn test_invalid_dates_pass_through() {
    for raw in ["31021970", "2911197", "29.11.70", "2911197A", "00001970", ""] {
        std::assert_eq!(apply_rule(FormattingRule::Date, raw), raw);
    }
}

#[test]
fn test_generic_rule_keeps_text() {
    std::assert_eq!(apply_rule(FormattingRule::Generic, "29111970"), "29111970");
}

#[test]
fn test_non_ascii_in_date_field_degrades() {
    let mut header = blank_header();
    put_field(&mut header, 513, &[b'0', b'1', 0xFF, b'2']);

    let value = read_field(descriptor(FieldId::Date).unwrap(), &header);
    std::assert_eq!(value.raw_text, "01?2");
    std::assert_eq!(value.formatted_text, "01?2");
}

#[test]
fn test_read_all_fields_in_order() {
    let mut header = blank_header();
    put_field(&mut header, 94, b"opaque");

    let values = read_all_fields(&header);
    std::assert_eq!(values.len(), 13);
    for (value, descriptor) in values.iter().zip(FIELDS.iter()) {
        std::assert_eq!(value.id, descriptor.id);
    }
    std::assert_eq!(values[2].id, FieldId::Unknown1);
    std::assert_eq!(values[2].formatted_text, "opaque");
}

#[test]
fn test_short_header_does_not_panic() {
    let mut header = vec![0u8; 120];
    put_field(&mut header, 114, b"Ivan");

    let values = read_all_fields(&header);
    std::assert_eq!(values.len(), 13);
    std::assert_eq!(values[3].raw_text, "Ivan");
    std::assert_eq!(values[12].raw_text, "");
}
