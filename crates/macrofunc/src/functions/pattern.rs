//! Regular expression functions: `regsub`, `iregsub` and `regrepl`.

use regex::bytes::RegexBuilder as BytesRegexBuilder;
use regex::{Captures, RegexBuilder, Replacer};

use super::{normalize_utf8, parameter_count};
use crate::error::EvalError;
use crate::function::MacroFunction;

/// Match `pattern` once against the value and substitute `\0`..`\9` in the
/// output template with the captured groups.
///
/// The pattern is the body of a `/.../` expression and is matched byte-wise.
/// Groups that did not participate, and every group when nothing matched,
/// substitute as the empty string.
pub fn regsub(
    value: &str,
    parameters: &[String],
    case_insensitive: bool,
) -> Result<String, EvalError> {
    let function = if case_insensitive {
        MacroFunction::Iregsub
    } else {
        MacroFunction::Regsub
    };
    let [pattern, output] = parameters else {
        return Err(parameter_count(function, "2", parameters));
    };

    check_delimited_body(pattern)?;
    let regex = BytesRegexBuilder::new(pattern)
        .unicode(false)
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|e| invalid_pattern(pattern, &e))?;
    let captures = regex.captures(value.as_bytes());

    let template = output.as_bytes();
    let mut substituted = Vec::with_capacity(template.len());
    let mut i = 0;
    while i < template.len() {
        if template[i] == b'\\' {
            if let Some(&digit) = template.get(i + 1).filter(|b| b.is_ascii_digit()) {
                let group = captures
                    .as_ref()
                    .and_then(|c| c.get(usize::from(digit - b'0')));
                if let Some(group) = group {
                    substituted.extend_from_slice(group.as_bytes());
                }
                i += 2;
                continue;
            }
        }
        substituted.push(template[i]);
        i += 1;
    }

    Ok(normalize_utf8(&substituted))
}

/// Apply `(pattern, replacement)` pairs in order, each replacing every
/// match in the output of the previous pair.
///
/// Empty patterns are skipped. A pattern that fails to compile, or that
/// escapes `/` itself, leaves the whole call unresolved.
pub fn regrepl(value: &str, parameters: &[String]) -> Result<String, EvalError> {
    if parameters.is_empty() || parameters.len() % 2 != 0 {
        return Err(parameter_count(
            MacroFunction::Regrepl,
            "an even, non-zero number of",
            parameters,
        ));
    }

    let mut value = value.to_string();
    for pair in parameters.chunks_exact(2) {
        let (pattern, replacement) = (&pair[0], &pair[1]);
        if pattern.is_empty() {
            continue;
        }

        check_unescaped_slashes(pattern)?;
        let escaped = pattern.replace('/', "\\/");
        let regex = RegexBuilder::new(&escaped)
            .unicode(true)
            .build()
            .map_err(|e| invalid_pattern(pattern, &e))?;
        value = regex
            .replace_all(&value, ReferenceTemplate(replacement))
            .into_owned();
    }

    Ok(value)
}

fn invalid_pattern(pattern: &str, error: &regex::Error) -> EvalError {
    EvalError::InvalidPattern {
        pattern: pattern.to_string(),
        message: error.to_string(),
    }
}

/// Reject a pattern that would not survive being wrapped as `/pattern/`:
/// an unescaped `/` ends the expression early, and a trailing lone
/// backslash escapes the closing delimiter.
fn check_delimited_body(pattern: &str) -> Result<(), EvalError> {
    let bytes = pattern.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if i + 1 < bytes.len() => i += 2,
            b'\\' => {
                return Err(EvalError::InvalidPattern {
                    pattern: pattern.to_string(),
                    message: "no ending delimiter '/' found".to_string(),
                });
            }
            b'/' => {
                return Err(EvalError::InvalidPattern {
                    pattern: pattern.to_string(),
                    message: "unescaped delimiter '/' in pattern".to_string(),
                });
            }
            _ => i += 1,
        }
    }
    Ok(())
}

/// Reject a `/` that is already escaped. Escaping it again for the
/// `/.../` wrapper turns the backslash into a literal and ends the
/// expression early.
fn check_unescaped_slashes(pattern: &str) -> Result<(), EvalError> {
    let bytes = pattern.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if bytes.get(i + 1) == Some(&b'/') => {
                return Err(EvalError::InvalidPattern {
                    pattern: pattern.to_string(),
                    message: "escaped delimiter '\\/' in pattern".to_string(),
                });
            }
            b'\\' => i += 2,
            _ => i += 1,
        }
    }
    Ok(())
}

/// Replacement template using `\N`, `$N` and `${N}` group references.
///
/// `N` is one or two digits. References to groups that do not exist or did
/// not participate in the match expand to nothing. A backslash before `\`
/// or `$` makes that character literal.
struct ReferenceTemplate<'a>(&'a str);

impl Replacer for ReferenceTemplate<'_> {
    fn replace_append(&mut self, caps: &Captures<'_>, dst: &mut String) {
        let template = self.0;
        let bytes = template.as_bytes();
        let mut after_backslash = false;
        let mut i = 0;

        while i < bytes.len() {
            let b = bytes[i];
            if b == b'\\' || b == b'$' {
                if after_backslash {
                    dst.pop();
                    dst.push(char::from(b));
                    after_backslash = false;
                    i += 1;
                    continue;
                }
                if let Some((group, consumed)) = group_reference(&bytes[i..]) {
                    if let Some(matched) = caps.get(group) {
                        dst.push_str(matched.as_str());
                    }
                    i += consumed;
                    continue;
                }
            }

            let Some(c) = template[i..].chars().next() else {
                break;
            };
            dst.push(c);
            after_backslash = c == '\\';
            i += c.len_utf8();
        }
    }
}

/// Parse a group reference at the start of `bytes`, returning the group
/// number and the number of bytes it spans.
fn group_reference(bytes: &[u8]) -> Option<(usize, usize)> {
    if bytes.len() < 2 {
        return None;
    }
    let braced = bytes[0] == b'$' && bytes[1] == b'{';
    let mut pos = if braced { 2 } else { 1 };

    let first = *bytes.get(pos).filter(|b| b.is_ascii_digit())?;
    let mut group = usize::from(first - b'0');
    pos += 1;

    if let Some(&second) = bytes.get(pos).filter(|b| b.is_ascii_digit()) {
        group = group * 10 + usize::from(second - b'0');
        pos += 1;
    }

    if braced {
        if bytes.get(pos) != Some(&b'}') {
            return None;
        }
        pos += 1;
    }

    Some((group, pos))
}
