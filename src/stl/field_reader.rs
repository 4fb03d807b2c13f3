//! Header field reader
//!
//! Turns the raw header bytes into display text, one field at a time.

use log::debug;

use crate::stl::fields::{FieldDescriptor, FieldValue, FormattingRule, FIELDS};
use crate::utils::format_utils;
use crate::utils::string_utils;

/// Reads and formats a single header field
///
/// This never fails. Bytes that make no sense in the field's encoding
/// still produce a (possibly garbled) string, and a header shorter than
/// the field window yields whatever part of the window is present.
///
/// # Arguments
/// * `descriptor` - Where the field lives and how to interpret it
/// * `header` - Header bytes, starting at file offset 0
pub fn read_field(descriptor: &FieldDescriptor, header: &[u8]) -> FieldValue {
    let bytes = string_utils::null_terminated(header, descriptor.offset, descriptor.max_len);
    let decoded = string_utils::decode_text(bytes, descriptor.encoding);
    let raw_text = decoded.trim().to_string();
    let formatted_text = apply_rule(descriptor.rule, &raw_text);

    debug!("Field {} ({} bytes at {}): {:?}", descriptor.id, bytes.len(), descriptor.offset, raw_text);

    FieldValue {
        id: descriptor.id,
        raw_text,
        formatted_text,
    }
}

/// Reads every catalogued field in declaration order
pub fn read_all_fields(header: &[u8]) -> Vec<FieldValue> {
    FIELDS.iter().map(|descriptor| read_field(descriptor, header)).collect()
}

/// Applies a formatting rule to trimmed field text
pub fn apply_rule(rule: FormattingRule, raw_text: &str) -> String {
    match rule {
        FormattingRule::Generic => raw_text.to_string(),
        FormattingRule::Date => {
            format_utils::format_header_date(raw_text).unwrap_or_else(|| raw_text.to_string())
        }
    }
}
