//! Character transliteration (`tr`).

use std::collections::HashMap;

use super::expand::expand_parameter;
use super::{normalize_utf8, parameter_count};
use crate::error::EvalError;
use crate::function::MacroFunction;

/// Replace every character of the value found in the search list with the
/// character at the same position in the replacement list.
///
/// Both lists support escapes and ranges (see [`expand_parameter`]). When
/// either expanded list contains non-ASCII text the translation runs on
/// bytes instead of characters.
pub fn tr(value: &str, parameters: &[String]) -> Result<String, EvalError> {
    let [search, replacement] = parameters else {
        return Err(parameter_count(MacroFunction::Tr, "2", parameters));
    };
    if search.is_empty() || replacement.is_empty() {
        return Ok(value.to_string());
    }

    let search = expand_parameter(search)?;
    let replacement = expand_parameter(replacement)?;
    if search.is_empty() {
        return Ok(value.to_string());
    }
    if replacement.is_empty() {
        return Err(EvalError::InvalidParameter {
            function: MacroFunction::Tr,
            parameter: parameters[1].clone(),
        });
    }

    if search.is_ascii() && replacement.is_ascii() {
        Ok(translate_chars(value, &search, &replacement))
    } else {
        Ok(translate_bytes(value, search.as_bytes(), replacement.as_bytes()))
    }
}

fn translate_chars(value: &str, search: &str, replacement: &str) -> String {
    let search: Vec<char> = search.chars().collect();
    let replacement = fit_to(replacement.chars().collect(), search.len());
    let map: HashMap<char, char> = search.into_iter().zip(replacement).collect();

    value
        .chars()
        .map(|c| map.get(&c).copied().unwrap_or(c))
        .collect()
}

/// Byte-wise translation. A multi-byte character in the value can be
/// partially rewritten when only some of its bytes are mapped; the result
/// is then repaired with `?` in place of each broken sequence.
fn translate_bytes(value: &str, search: &[u8], replacement: &[u8]) -> String {
    let replacement = fit_to(replacement.to_vec(), search.len());
    let map: HashMap<u8, u8> = search.iter().copied().zip(replacement).collect();

    let translated: Vec<u8> = value
        .bytes()
        .map(|b| map.get(&b).copied().unwrap_or(b))
        .collect();
    normalize_utf8(&translated)
}

/// Pad `units` with its last element, or truncate it, to `len` elements.
fn fit_to<T: Copy>(mut units: Vec<T>, len: usize) -> Vec<T> {
    if let Some(&last) = units.last() {
        units.resize(len, last);
    }
    units
}
