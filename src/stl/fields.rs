//! Header field catalog
//!
//! The STL header stores its text metadata as fixed-width, null-padded
//! fields at hard-coded offsets. This module lists them in the order
//! they are presented to the user.

use std::fmt;

use self::FormattingRule::{Date, Generic};
use self::TextEncoding::{Ascii, Cp1251};

/// Identifies one header field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    TubeConfig,
    Institution,
    /// Meaning unknown; shown verbatim
    Unknown1,
    PatientName,
    CareType,
    PatientAddress,
    BirthDate,
    ExposureDate,
    Projection,
    Radiologist,
    Sex,
    FileId,
    Date,
}

impl FieldId {
    /// Returns the stable name of this field
    pub fn name(&self) -> &'static str {
        match self {
            FieldId::TubeConfig => "TubeConfig",
            FieldId::Institution => "Institution",
            FieldId::Unknown1 => "Unknown1",
            FieldId::PatientName => "PatientName",
            FieldId::CareType => "CareType",
            FieldId::PatientAddress => "PatientAddress",
            FieldId::BirthDate => "BirthDate",
            FieldId::ExposureDate => "ExposureDate",
            FieldId::Projection => "Projection",
            FieldId::Radiologist => "Radiologist",
            FieldId::Sex => "Sex",
            FieldId::FileId => "FileID",
            FieldId::Date => "Date",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Text encoding of a field's bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// Windows code page 1251 (Cyrillic)
    Cp1251,
    /// 7-bit ASCII
    Ascii,
}

/// How a decoded field is turned into display text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormattingRule {
    /// Trimmed text, shown as is
    Generic,
    /// `DDMMYYYY` calendar date
    Date,
}

/// Location and interpretation of one header field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub id: FieldId,
    /// Byte offset from the start of the file
    pub offset: usize,
    /// Width of the fixed field in bytes
    pub max_len: usize,
    pub encoding: TextEncoding,
    pub rule: FormattingRule,
}

impl FieldDescriptor {
    const fn new(id: FieldId, offset: usize, end: usize, encoding: TextEncoding, rule: FormattingRule) -> Self {
        FieldDescriptor {
            id,
            offset,
            max_len: end - offset,
            encoding,
            rule,
        }
    }

    /// Exclusive end offset of the field window
    pub fn end(&self) -> usize {
        self.offset + self.max_len
    }
}

/// A decoded header field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValue {
    pub id: FieldId,
    /// Decoded text with surrounding whitespace trimmed
    pub raw_text: String,
    /// `raw_text` after the field's formatting rule
    pub formatted_text: String,
}

/// Every header field, in display order
pub static FIELDS: [FieldDescriptor; 13] = [
    FieldDescriptor::new(FieldId::TubeConfig, 14, 40, Cp1251, Generic),
    FieldDescriptor::new(FieldId::Institution, 44, 94, Cp1251, Generic),
    FieldDescriptor::new(FieldId::Unknown1, 94, 114, Cp1251, Generic),
    FieldDescriptor::new(FieldId::PatientName, 114, 194, Cp1251, Generic),
    FieldDescriptor::new(FieldId::CareType, 194, 214, Cp1251, Generic),
    FieldDescriptor::new(FieldId::PatientAddress, 214, 264, Cp1251, Generic),
    FieldDescriptor::new(FieldId::BirthDate, 264, 272, Ascii, Date),
    FieldDescriptor::new(FieldId::ExposureDate, 272, 280, Ascii, Date),
    FieldDescriptor::new(FieldId::Projection, 280, 300, Cp1251, Generic),
    FieldDescriptor::new(FieldId::Radiologist, 300, 350, Cp1251, Generic),
    FieldDescriptor::new(FieldId::Sex, 350, 483, Cp1251, Generic),
    FieldDescriptor::new(FieldId::FileId, 483, 513, Cp1251, Generic),
    FieldDescriptor::new(FieldId::Date, 513, 521, Ascii, Date),
];

/// Looks up the descriptor of a field
pub fn descriptor(id: FieldId) -> Option<&'static FieldDescriptor> {
    FIELDS.iter().find(|d| d.id == id)
}
