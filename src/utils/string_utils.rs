//! String utility functions
//!
//! Utilities for working with fixed-width text fields.

use encoding_rs::WINDOWS_1251;

use crate::stl::fields::TextEncoding;

/// Returns the null-terminated part of a fixed-width field
///
/// The field spans `max_len` bytes from `offset`; it ends at the first
/// zero byte, or at the end of the window when there is none. Windows
/// reaching past the end of `bytes` are cut short.
pub fn null_terminated(bytes: &[u8], offset: usize, max_len: usize) -> &[u8] {
    let start = offset.min(bytes.len());
    let end = offset.saturating_add(max_len).min(bytes.len());
    let window = &bytes[start..end];

    match window.iter().position(|&b| b == 0) {
        Some(nul) => &window[..nul],
        None => window,
    }
}

/// Decodes bytes with the given text encoding
///
/// Decoding never fails: unmappable bytes come out as replacement
/// characters.
pub fn decode_text(bytes: &[u8], encoding: TextEncoding) -> String {
    match encoding {
        TextEncoding::Cp1251 => {
            let (text, _) = WINDOWS_1251.decode_without_bom_handling(bytes);
            text.into_owned()
        }
        TextEncoding::Ascii => bytes
            .iter()
            .map(|&b| if b.is_ascii() { b as char } else { '?' })
            .collect(),
    }
}
