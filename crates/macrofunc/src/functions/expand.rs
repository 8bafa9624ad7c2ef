//! Escape and range expansion for transliteration lists.

use crate::error::EvalError;

/// Expand backslash escapes and `a-z` style ranges in a raw list.
///
/// The scan walks code points left to right:
/// - `\a \b \f \n \r \t \v` produce control characters, any other escaped
///   character produces itself, and a trailing lone backslash is dropped.
/// - `-` with a character on each side appends the range continuation (the
///   start was already emitted). The bounds are the raw neighbouring
///   characters, and the character right after a range is emitted verbatim.
/// - A leading `-` is literal, and so is the character following it.
/// - A leading `--` drops the first dash; the second dash can still open a
///   range starting at `-`.
pub fn expand_parameter(raw: &str) -> Result<String, EvalError> {
    let chars: Vec<char> = raw.chars().collect();
    let len = chars.len();
    let mut expanded = String::with_capacity(raw.len());
    let mut i = 0;

    while i < len {
        // An escaped character is consumed by the escape itself.
        let mut available = true;

        if chars[i] == '\\' {
            i += 1;
            if let Some(&escaped) = chars.get(i) {
                expanded.push(unescape(escaped));
            }
            available = false;
        }

        if available && chars[i] == '-' && i + 1 != len {
            if i == 0 && chars[1] == '-' {
                i += 1;
                continue;
            }

            if i >= 1 {
                let start = chars[i - 1];
                let end = chars[i + 1];
                if start > end {
                    return Err(EvalError::InvalidRange { start, end });
                }
                expanded
                    .extend((u32::from(start) + 1..=u32::from(end)).filter_map(char::from_u32));
                i += 2;
            } else {
                expanded.push('-');
                i += 1;
            }
        }

        if available {
            if let Some(&c) = chars.get(i) {
                expanded.push(c);
            }
        }

        i += 1;
    }

    Ok(expanded)
}

fn unescape(c: char) -> char {
    match c {
        'a' => '\x07',
        'b' => '\x08',
        'f' => '\x0C',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\x0B',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(raw: &str) -> String {
        expand_parameter(raw).unwrap()
    }

    #[test]
    fn plain_characters_pass_through() {
        assert_eq!(expand("abc"), "abc");
        assert_eq!(expand(""), "");
    }

    #[test]
    fn ranges() {
        assert_eq!(expand("a-e"), "abcde");
        assert_eq!(expand("0-9"), "0123456789");
        assert_eq!(expand("xa-c"), "xabc");
        assert_eq!(expand("a-a"), "a");
    }

    #[test]
    fn character_after_range_is_verbatim() {
        assert_eq!(expand("a-c-e"), "abc-e");
        assert_eq!(expand("a-c\\n"), "abc\\n");
        assert_eq!(expand("a-cA-C"), "abcABC");
    }

    #[test]
    fn escapes() {
        assert_eq!(expand("\\n\\t\\r"), "\n\t\r");
        assert_eq!(expand("\\a\\b\\f\\v"), "\x07\x08\x0C\x0B");
        assert_eq!(expand("\\\\"), "\\");
        assert_eq!(expand("\\q"), "q");
        assert_eq!(expand("abc\\"), "abc");
    }

    #[test]
    fn escaped_dash_is_literal() {
        assert_eq!(expand("\\-"), "-");
        assert_eq!(expand("a\\-z"), "a-z");
    }

    #[test]
    fn range_start_is_the_raw_preceding_character() {
        // The range runs from the raw 'n', not from the newline it produced.
        assert_eq!(expand("\\n-p"), "\nop");
    }

    #[test]
    fn dashes_at_the_edges() {
        assert_eq!(expand("-"), "-");
        assert_eq!(expand("a-"), "a-");
        assert_eq!(expand("-a"), "-a");
        assert_eq!(expand("-\\n"), "-\\n");
        assert_eq!(expand("-a-c"), "-abc");
    }

    #[test]
    fn leading_double_dash() {
        assert_eq!(expand("--"), "-");
        assert_eq!(expand("--/"), "./");
    }

    #[test]
    fn descending_range_is_rejected() {
        assert_eq!(
            expand_parameter("z-a"),
            Err(EvalError::InvalidRange {
                start: 'z',
                end: 'a'
            })
        );
        assert!(expand_parameter("ab-9").is_err());
    }

    #[test]
    fn multibyte_ranges_use_code_points() {
        assert_eq!(expand("α-γ"), "αβγ");
    }
}
