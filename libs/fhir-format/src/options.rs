//! Codec options
//!
//! Options deserialize from camelCase JSON with every key optional, so an
//! application can embed them in its own configuration file:
//!
//! ```json
//! { "strictUnknownFields": false, "maxRecursionDepth": 32 }
//! ```

use serde::{Deserialize, Serialize};

/// Nesting limit used when no other is configured.
pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodecOptions {
    /// Fail on object keys the shape does not declare. When off, they are
    /// skipped with a warning on decode and dropped on encode.
    pub strict_unknown_fields: bool,
    /// Fail on codes outside a required binding. When off, the code is kept
    /// and a warning recorded.
    pub strict_enumerations: bool,
    /// Fail on an embedded resource whose `resourceType` is not registered.
    /// When off, it is kept as an opaque JSON object.
    pub strict_resource_types: bool,
    /// Maximum number of nested JSON objects below the top-level resource.
    /// It also bounds raw JSON nesting, which the parser checks first.
    pub max_recursion_depth: usize,
    /// Keep decimals exactly as written. When off, decoded decimals are
    /// normalised through `f64`.
    pub preserve_decimal_precision: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            strict_unknown_fields: true,
            strict_enumerations: true,
            strict_resource_types: true,
            max_recursion_depth: DEFAULT_MAX_RECURSION_DEPTH,
            preserve_decimal_precision: true,
        }
    }
}

impl CodecOptions {
    pub fn strict() -> Self {
        Self::default()
    }

    /// Unknown fields, codes and resource types become warnings.
    pub fn lenient() -> Self {
        Self {
            strict_unknown_fields: false,
            strict_enumerations: false,
            strict_resource_types: false,
            ..Self::default()
        }
    }

    pub fn with_strict_unknown_fields(mut self, strict: bool) -> Self {
        self.strict_unknown_fields = strict;
        self
    }

    pub fn with_strict_enumerations(mut self, strict: bool) -> Self {
        self.strict_enumerations = strict;
        self
    }

    pub fn with_strict_resource_types(mut self, strict: bool) -> Self {
        self.strict_resource_types = strict;
        self
    }

    pub fn with_max_recursion_depth(mut self, depth: usize) -> Self {
        self.max_recursion_depth = depth;
        self
    }

    pub fn with_preserve_decimal_precision(mut self, preserve: bool) -> Self {
        self.preserve_decimal_precision = preserve;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_strict() {
        let options = CodecOptions::default();
        assert!(options.strict_unknown_fields);
        assert!(options.strict_enumerations);
        assert!(options.strict_resource_types);
        assert!(options.preserve_decimal_precision);
        assert_eq!(options.max_recursion_depth, 64);
        assert_eq!(options, CodecOptions::strict());
    }

    #[test]
    fn lenient_keeps_depth_and_decimals() {
        let options = CodecOptions::lenient();
        assert!(!options.strict_unknown_fields);
        assert!(!options.strict_enumerations);
        assert!(!options.strict_resource_types);
        assert_eq!(options.max_recursion_depth, DEFAULT_MAX_RECURSION_DEPTH);
        assert!(options.preserve_decimal_precision);
    }

    #[test]
    fn deserializes_partial_camel_case() {
        let options: CodecOptions = serde_json::from_str(
            r#"{"strictEnumerations": false, "maxRecursionDepth": 8}"#,
        )
        .unwrap();
        assert!(!options.strict_enumerations);
        assert!(options.strict_unknown_fields);
        assert_eq!(options.max_recursion_depth, 8);

        let empty: CodecOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, CodecOptions::default());
    }

    #[test]
    fn builders_chain() {
        let options = CodecOptions::default()
            .with_max_recursion_depth(2)
            .with_preserve_decimal_precision(false)
            .with_strict_unknown_fields(false);
        assert_eq!(options.max_recursion_depth, 2);
        assert!(!options.preserve_decimal_precision);
        assert!(!options.strict_unknown_fields);
        assert!(options.strict_enumerations);
    }
}
