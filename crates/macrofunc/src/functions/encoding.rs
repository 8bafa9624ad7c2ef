//! Encoding, decoding and case functions.
//!
//! None of these take parameters; see [`super::expect_no_parameters`].

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use html_escape::decode_html_entities;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use super::{expect_no_parameters, normalize_utf8};
use crate::error::EvalError;
use crate::function::MacroFunction;

/// Characters escaped by raw URL encoding: everything except
/// `A-Z a-z 0-9 - _ . ~`.
const RAW_URL: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Base64 encode the value (standard alphabet, padded).
pub fn btoa(value: &str, parameters: &[String]) -> Result<String, EvalError> {
    expect_no_parameters(MacroFunction::Btoa, parameters)?;
    Ok(STANDARD.encode(value))
}

/// Percent-encode the value. Spaces become `%20`.
pub fn urlencode(value: &str, parameters: &[String]) -> Result<String, EvalError> {
    expect_no_parameters(MacroFunction::Urlencode, parameters)?;
    Ok(utf8_percent_encode(value, RAW_URL).to_string())
}

/// Decode `%XX` sequences, treating `+` as a space.
pub fn urldecode(value: &str, parameters: &[String]) -> Result<String, EvalError> {
    expect_no_parameters(MacroFunction::Urldecode, parameters)?;
    let spaced = value.replace('+', " ");
    let decoded: Vec<u8> = percent_decode_str(&spaced).collect();
    Ok(normalize_utf8(&decoded))
}

/// Encode `& < > " '` as HTML entities, with `'` rendered as `&#39;`.
pub fn htmlencode(value: &str, parameters: &[String]) -> Result<String, EvalError> {
    expect_no_parameters(MacroFunction::Htmlencode, parameters)?;
    let mut encoded = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => encoded.push_str("&amp;"),
            '<' => encoded.push_str("&lt;"),
            '>' => encoded.push_str("&gt;"),
            '"' => encoded.push_str("&quot;"),
            '\'' => encoded.push_str("&#39;"),
            other => encoded.push(other),
        }
    }
    Ok(encoded)
}

/// Decode named and numeric HTML entities.
pub fn htmldecode(value: &str, parameters: &[String]) -> Result<String, EvalError> {
    expect_no_parameters(MacroFunction::Htmldecode, parameters)?;
    Ok(decode_html_entities(value).into_owned())
}

/// Lowercase ASCII letters; other characters are unchanged.
pub fn lowercase(value: &str, parameters: &[String]) -> Result<String, EvalError> {
    expect_no_parameters(MacroFunction::Lowercase, parameters)?;
    Ok(value.to_ascii_lowercase())
}

/// Uppercase ASCII letters; other characters are unchanged.
pub fn uppercase(value: &str, parameters: &[String]) -> Result<String, EvalError> {
    expect_no_parameters(MacroFunction::Uppercase, parameters)?;
    Ok(value.to_ascii_uppercase())
}
