//! Codec errors and lenient-mode warnings

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{path}: unknown resource type '{name}'")]
    UnknownResourceType { name: String, path: String },

    #[error("{path}: missing required field")]
    MissingRequiredField { path: String },

    #[error("{path}: expected {expected}, found {actual}")]
    WrongType {
        path: String,
        expected: String,
        actual: String,
    },

    #[error("{path}: more than one variant present ({})", .variants.join(", "))]
    AmbiguousChoice { path: String, variants: Vec<String> },

    #[error("{path}: '{value}' is not a permitted code")]
    InvalidEnumeration {
        path: String,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("{path}: {actual} item(s) where the cardinality is {bound}")]
    CardinalityViolation {
        path: String,
        actual: usize,
        bound: String,
    },

    #[error("{path}: unknown field")]
    UnknownField { path: String },

    #[error("{path}: nesting exceeds the limit of {limit}")]
    RecursionTooDeep { path: String, limit: usize },

    #[error("malformed JSON at byte {offset}: {reason}")]
    MalformedJson { offset: usize, reason: String },

    #[error("{path}: invalid extension, {detail}")]
    InvalidExtension { path: String, detail: String },

    #[error("{path}: datatype '{name}' is not registered")]
    UnknownDatatype { name: String, path: String },
}

pub type Result<T> = std::result::Result<T, Error>;

/// The kind of an [`Error`] or [`Warning`], without its details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnknownResourceType,
    MissingRequiredField,
    WrongType,
    AmbiguousChoice,
    InvalidEnumeration,
    CardinalityViolation,
    UnknownField,
    RecursionTooDeep,
    MalformedJson,
    InvalidExtension,
    UnknownDatatype,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::UnknownResourceType => "unknown-resource-type",
            ErrorKind::MissingRequiredField => "missing-required-field",
            ErrorKind::WrongType => "wrong-type",
            ErrorKind::AmbiguousChoice => "ambiguous-choice",
            ErrorKind::InvalidEnumeration => "invalid-enumeration",
            ErrorKind::CardinalityViolation => "cardinality-violation",
            ErrorKind::UnknownField => "unknown-field",
            ErrorKind::RecursionTooDeep => "recursion-too-deep",
            ErrorKind::MalformedJson => "malformed-json",
            ErrorKind::InvalidExtension => "invalid-extension",
            ErrorKind::UnknownDatatype => "unknown-datatype",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnknownResourceType { .. } => ErrorKind::UnknownResourceType,
            Error::MissingRequiredField { .. } => ErrorKind::MissingRequiredField,
            Error::WrongType { .. } => ErrorKind::WrongType,
            Error::AmbiguousChoice { .. } => ErrorKind::AmbiguousChoice,
            Error::InvalidEnumeration { .. } => ErrorKind::InvalidEnumeration,
            Error::CardinalityViolation { .. } => ErrorKind::CardinalityViolation,
            Error::UnknownField { .. } => ErrorKind::UnknownField,
            Error::RecursionTooDeep { .. } => ErrorKind::RecursionTooDeep,
            Error::MalformedJson { .. } => ErrorKind::MalformedJson,
            Error::InvalidExtension { .. } => ErrorKind::InvalidExtension,
            Error::UnknownDatatype { .. } => ErrorKind::UnknownDatatype,
        }
    }

    /// Structural path of the offending element. `None` for malformed JSON,
    /// which is located by byte offset instead.
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::UnknownResourceType { path, .. }
            | Error::MissingRequiredField { path }
            | Error::WrongType { path, .. }
            | Error::AmbiguousChoice { path, .. }
            | Error::InvalidEnumeration { path, .. }
            | Error::CardinalityViolation { path, .. }
            | Error::UnknownField { path }
            | Error::RecursionTooDeep { path, .. }
            | Error::InvalidExtension { path, .. }
            | Error::UnknownDatatype { path, .. } => Some(path),
            Error::MalformedJson { .. } => None,
        }
    }

    /// Maps a `serde_json` parse failure to [`Error::MalformedJson`].
    pub(crate) fn from_json(err: &serde_json::Error, input: &[u8]) -> Self {
        Error::MalformedJson {
            offset: byte_offset(input, err.line(), err.column()),
            reason: err.to_string(),
        }
    }
}

/// Path used for problems found before the resource type is known.
pub(crate) const DOCUMENT: &str = "Resource";

/// Converts serde_json's 1-based line and column into a byte offset.
fn byte_offset(input: &[u8], line: usize, column: usize) -> usize {
    let line_start = if line <= 1 {
        0
    } else {
        input
            .iter()
            .enumerate()
            .filter(|(_, b)| **b == b'\n')
            .nth(line - 2)
            .map_or(input.len(), |(i, _)| i + 1)
    };
    (line_start + column.saturating_sub(1)).min(input.len())
}

/// A problem lenient mode let through.
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub kind: ErrorKind,
    pub path: String,
    pub detail: String,
}

impl Warning {
    pub(crate) fn new(kind: ErrorKind, path: String, detail: impl Into<String>) -> Self {
        Self {
            kind,
            path,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.kind, self.path, self.detail)
    }
}

/// A decoded value together with the warnings lenient mode collected.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub value: T,
    pub warnings: Vec<Warning>,
}

impl<T> Decoded<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Decoded<U> {
        Decoded {
            value: f(self.value),
            warnings: self.warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_render_kebab_case() {
        let err = Error::AmbiguousChoice {
            path: "Observation.value[x]".into(),
            variants: vec!["valueQuantity".into(), "valueString".into()],
        };
        assert_eq!(err.kind().as_str(), "ambiguous-choice");
        assert_eq!(err.path(), Some("Observation.value[x]"));
        assert_eq!(
            err.to_string(),
            "Observation.value[x]: more than one variant present (valueQuantity, valueString)"
        );
    }

    #[test]
    fn offsets_follow_lines() {
        let input = b"{\n  \"a\": 1,\n  oops\n}";
        assert_eq!(byte_offset(input, 1, 1), 0);
        assert_eq!(byte_offset(input, 2, 3), 4);
        assert_eq!(byte_offset(input, 3, 3), 14);
        assert_eq!(byte_offset(input, 0, 0), 0);
    }

    #[test]
    fn malformed_json_has_no_path() {
        let input = b"{\"resourceType\": }";
        let err = serde_json::from_slice::<serde_json::Value>(input).unwrap_err();
        let err = Error::from_json(&err, input);
        assert_eq!(err.kind(), ErrorKind::MalformedJson);
        assert_eq!(err.path(), None);
        match err {
            Error::MalformedJson { offset, .. } => assert!(offset > 0 && offset <= input.len()),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn decoded_map_keeps_warnings() {
        let mut decoded = Decoded::new(1);
        decoded.warnings.push(Warning::new(
            ErrorKind::UnknownField,
            "Patient.foo".into(),
            "skipped",
        ));
        let mapped = decoded.map(|v| v + 1);
        assert_eq!(mapped.value, 2);
        assert!(!mapped.is_clean());
        assert_eq!(mapped.warnings[0].to_string(), "unknown-field at Patient.foo: skipped");
    }
}
