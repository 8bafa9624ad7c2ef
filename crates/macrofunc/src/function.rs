//! Macro function identifiers and call descriptors.
//!
//! The set of functions is closed: every supported name resolves to one
//! [`MacroFunction`] variant, and everything else is an unknown function.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use strsim::levenshtein;

/// Canonical macro function identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacroFunction {
    Regsub,
    Iregsub,
    Fmtnum,
    Fmttime,
    Regrepl,
    Tr,
    Btoa,
    Urlencode,
    Htmlencode,
    Urldecode,
    Htmldecode,
    Lowercase,
    Uppercase,
}

impl MacroFunction {
    /// Every supported function, in the order they are documented.
    pub const ALL: [MacroFunction; 13] = [
        MacroFunction::Regsub,
        MacroFunction::Iregsub,
        MacroFunction::Fmtnum,
        MacroFunction::Fmttime,
        MacroFunction::Regrepl,
        MacroFunction::Tr,
        MacroFunction::Btoa,
        MacroFunction::Urlencode,
        MacroFunction::Htmlencode,
        MacroFunction::Urldecode,
        MacroFunction::Htmldecode,
        MacroFunction::Lowercase,
        MacroFunction::Uppercase,
    ];

    /// Resolve a function name. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<MacroFunction> {
        match name {
            "regsub" => Some(MacroFunction::Regsub),
            "iregsub" => Some(MacroFunction::Iregsub),
            "fmtnum" => Some(MacroFunction::Fmtnum),
            "fmttime" => Some(MacroFunction::Fmttime),
            "regrepl" => Some(MacroFunction::Regrepl),
            "tr" => Some(MacroFunction::Tr),
            "btoa" => Some(MacroFunction::Btoa),
            "urlencode" => Some(MacroFunction::Urlencode),
            "htmlencode" => Some(MacroFunction::Htmlencode),
            "urldecode" => Some(MacroFunction::Urldecode),
            "htmldecode" => Some(MacroFunction::Htmldecode),
            "lowercase" => Some(MacroFunction::Lowercase),
            "uppercase" => Some(MacroFunction::Uppercase),
            _ => None,
        }
    }

    /// The name this function is invoked by.
    pub fn name(self) -> &'static str {
        match self {
            MacroFunction::Regsub => "regsub",
            MacroFunction::Iregsub => "iregsub",
            MacroFunction::Fmtnum => "fmtnum",
            MacroFunction::Fmttime => "fmttime",
            MacroFunction::Regrepl => "regrepl",
            MacroFunction::Tr => "tr",
            MacroFunction::Btoa => "btoa",
            MacroFunction::Urlencode => "urlencode",
            MacroFunction::Htmlencode => "htmlencode",
            MacroFunction::Urldecode => "urldecode",
            MacroFunction::Htmldecode => "htmldecode",
            MacroFunction::Lowercase => "lowercase",
            MacroFunction::Uppercase => "uppercase",
        }
    }

    /// Human-readable description of the accepted parameter list.
    pub fn parameters(self) -> &'static str {
        match self {
            MacroFunction::Regsub | MacroFunction::Iregsub => "<pattern>,<output>",
            MacroFunction::Fmtnum => "<digits>",
            MacroFunction::Fmttime => "<format>[,<time_shift>]",
            MacroFunction::Regrepl => "<pattern>,<replacement>[,...]",
            MacroFunction::Tr => "<characters>,<replacement>",
            MacroFunction::Btoa
            | MacroFunction::Urlencode
            | MacroFunction::Htmlencode
            | MacroFunction::Urldecode
            | MacroFunction::Htmldecode
            | MacroFunction::Lowercase
            | MacroFunction::Uppercase => "",
        }
    }

    /// One-line summary of what the function does.
    pub fn summary(self) -> &'static str {
        match self {
            MacroFunction::Regsub => "Substitute regular expression match groups into output",
            MacroFunction::Iregsub => {
                "Case-insensitive substitution of regular expression match groups"
            }
            MacroFunction::Fmtnum => "Format a number with a fixed count of decimal digits",
            MacroFunction::Fmttime => "Format a time value, optionally shifted",
            MacroFunction::Regrepl => "Replace all regular expression matches, pair by pair",
            MacroFunction::Tr => "Transliterate characters",
            MacroFunction::Btoa => "Encode to base64",
            MacroFunction::Urlencode => "Percent-encode for use in URLs",
            MacroFunction::Htmlencode => "Encode HTML special characters",
            MacroFunction::Urldecode => "Decode a percent-encoded string",
            MacroFunction::Htmldecode => "Decode HTML entities",
            MacroFunction::Lowercase => "Convert ASCII letters to lowercase",
            MacroFunction::Uppercase => "Convert ASCII letters to uppercase",
        }
    }
}

impl Display for MacroFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

/// A single macro function occurrence: the function name and its already
/// split and unescaped parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroFunctionCall {
    #[serde(rename = "function")]
    pub function_name: String,
    #[serde(default)]
    pub parameters: Vec<String>,
}

impl MacroFunctionCall {
    pub fn new<I, S>(function_name: impl Into<String>, parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            function_name: function_name.into(),
            parameters: parameters.into_iter().map(Into::into).collect(),
        }
    }
}

/// Compute up to three function names close to `name` (by edit distance).
///
/// Names of three characters or fewer tolerate one edit, longer names two.
/// Results are ordered by distance, then alphabetically.
pub fn compute_suggestions(name: &str) -> Vec<String> {
    let max_distance = if name.chars().count() <= 3 { 1 } else { 2 };
    let mut candidates: Vec<(usize, &'static str)> = MacroFunction::ALL
        .iter()
        .map(|function| (levenshtein(name, function.name()), function.name()))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    candidates.sort();
    candidates
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
