//! FHIR R4 JSON codec
//!
//! Decodes FHIR JSON into the `cinnabar-models` element tree and encodes it
//! back, checking every key against the shape catalog:
//! - The root object and every embedded resource are tagged by `resourceType`.
//! - `value[x]` groups hold one concrete variant (`valueQuantity`, ...).
//! - Primitive metadata (`id`, `extension`) travels in `_field` siblings,
//!   with aligned arrays for repeating primitives.
//! - Nesting is bounded by [`CodecOptions::max_recursion_depth`].
//!
//! ```rust
//! use cinnabar_format::{parse_resource, serialize_resource, CodecOptions};
//!
//! let input = br#"{"resourceType":"Patient","id":"p1","gender":"female"}"#;
//! let options = CodecOptions::default();
//! let patient = parse_resource(input, &options).unwrap().value;
//! assert_eq!(patient.resource_type(), "Patient");
//!
//! let output = serialize_resource(&patient, &options).unwrap();
//! assert_eq!(output, input.to_vec());
//! ```

mod decode;
mod encode;
mod error;
mod options;
mod path;
mod rules;
mod stream;

pub use error::{Decoded, Error, ErrorKind, Result, Warning};
pub use options::{CodecOptions, DEFAULT_MAX_RECURSION_DEPTH};
pub use stream::NdjsonDecoder;

use cinnabar_models::{AnyResource, Registry, Resource, StructureShape};
use decode::Decoder;
use encode::Encoder;
use path::Path;
use serde::Deserialize;
use serde_json::Value as JsonValue;

/// A JSON codec bound to a registry and a set of options.
///
/// The codec is immutable and `Send + Sync`; one instance can serve any
/// number of threads.
#[derive(Debug, Clone, Copy)]
pub struct JsonCodec<'r> {
    registry: &'r Registry,
    options: CodecOptions,
}

impl JsonCodec<'static> {
    /// A codec over the shared R4 registry.
    pub fn r4(options: CodecOptions) -> Self {
        Self::new(cinnabar_models::r4(), options)
    }
}

impl Default for JsonCodec<'static> {
    fn default() -> Self {
        Self::r4(CodecOptions::default())
    }
}

impl<'r> JsonCodec<'r> {
    pub fn new(registry: &'r Registry, options: CodecOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Decodes a resource of whatever type the document declares.
    pub fn decode(&self, input: &[u8]) -> Result<Decoded<Resource>> {
        let json = self.parse(input)?;
        self.decode_json(&json, None)
    }

    /// Decodes a resource that must be of the given shape.
    pub fn decode_as(
        &self,
        input: &[u8],
        expected: &'static StructureShape,
    ) -> Result<Decoded<Resource>> {
        let json = self.parse(input)?;
        self.decode_json(&json, Some(expected))
    }

    /// Decodes a document of any type. An unregistered `resourceType` comes
    /// back as [`AnyResource::Opaque`] with a warning unless
    /// [`CodecOptions::strict_resource_types`] is set.
    pub fn decode_any(&self, input: &[u8]) -> Result<Decoded<AnyResource>> {
        let json = self.parse(input)?;
        let mut decoder = Decoder::new(self.registry, self.options);
        let resource = decoder.root_any(&json)?;
        tracing::debug!(
            resource_type = resource.resource_type(),
            "decoded resource"
        );
        Ok(decoder.finish(resource))
    }

    /// Decodes an already parsed document.
    pub fn decode_value(&self, json: &JsonValue) -> Result<Decoded<Resource>> {
        self.decode_json(json, None)
    }

    /// Decodes newline-delimited JSON, one resource per value.
    pub fn decode_ndjson<'a>(&'a self, input: &'a [u8]) -> NdjsonDecoder<'a, 'r> {
        NdjsonDecoder::new(self, input)
    }

    pub fn encode(&self, resource: &Resource) -> Result<Vec<u8>> {
        Ok(self.encode_value(resource)?.to_string().into_bytes())
    }

    /// Encodes with two-space indentation.
    pub fn encode_pretty(&self, resource: &Resource) -> Result<String> {
        Ok(format!("{:#}", self.encode_value(resource)?))
    }

    pub fn encode_value(&self, resource: &Resource) -> Result<JsonValue> {
        let json = Encoder::new(self.registry, self.options).root(resource)?;
        tracing::debug!(
            resource_type = resource.resource_type(),
            "encoded resource"
        );
        Ok(json)
    }

    /// Encodes a known or opaque resource.
    pub fn encode_any(&self, resource: &AnyResource) -> Result<Vec<u8>> {
        match resource {
            AnyResource::Known(resource) => self.encode(resource),
            AnyResource::Opaque(_) => {
                let path = Path::root(resource.resource_type());
                let json = Encoder::new(self.registry, self.options).any(resource, &path, 0)?;
                Ok(json.to_string().into_bytes())
            }
        }
    }

    /// Parses a whole document. Nesting is bounded here by the decoder limit
    /// rather than the parser's fixed one.
    fn parse(&self, input: &[u8]) -> Result<JsonValue> {
        self.check_nesting(input)?;
        let mut de = serde_json::Deserializer::from_slice(input);
        de.disable_recursion_limit();
        let json = JsonValue::deserialize(&mut de).map_err(|err| Error::from_json(&err, input))?;
        de.end().map_err(|err| Error::from_json(&err, input))?;
        Ok(json)
    }

    /// Rejects a value nested too deep for the decoder to ever accept.
    pub(crate) fn check_nesting(&self, input: &[u8]) -> Result<rules::Nesting> {
        let limit = self.options.max_recursion_depth;
        let measured = rules::nesting(input);
        if measured.deepest > rules::json_nesting_limit(limit) {
            tracing::debug!(deepest = measured.deepest, limit, "document nested too deep");
            return Err(Error::RecursionTooDeep {
                path: error::DOCUMENT.to_string(),
                limit,
            });
        }
        Ok(measured)
    }

    fn decode_json(
        &self,
        json: &JsonValue,
        expected: Option<&'static StructureShape>,
    ) -> Result<Decoded<Resource>> {
        let mut decoder = Decoder::new(self.registry, self.options);
        let resource = decoder.root(json, expected)?;
        let decoded = decoder.finish(resource);
        tracing::debug!(
            resource_type = decoded.value.resource_type(),
            warnings = decoded.warnings.len(),
            "decoded resource"
        );
        Ok(decoded)
    }
}

/// Decodes a resource with the shared R4 registry.
pub fn parse_resource(input: &[u8], options: &CodecOptions) -> Result<Decoded<Resource>> {
    JsonCodec::r4(*options).decode(input)
}

/// Decodes a resource that must have the given `resourceType`.
pub fn parse_resource_as(
    input: &[u8],
    resource_type: &str,
    options: &CodecOptions,
) -> Result<Decoded<Resource>> {
    let shape = cinnabar_models::r4()
        .resource(resource_type)
        .ok_or_else(|| Error::UnknownResourceType {
            name: resource_type.to_string(),
            path: resource_type.to_string(),
        })?;
    JsonCodec::r4(*options).decode_as(input, shape)
}

pub fn serialize_resource(resource: &Resource, options: &CodecOptions) -> Result<Vec<u8>> {
    JsonCodec::r4(*options).encode(resource)
}

pub fn serialize_resource_pretty(resource: &Resource, options: &CodecOptions) -> Result<String> {
    JsonCodec::r4(*options).encode_pretty(resource)
}

/// The discriminator of a decoded resource.
pub fn resource_type_of(resource: &AnyResource) -> &str {
    resource.resource_type()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinnabar_models::catalog::PATIENT;

    #[test]
    fn codec_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JsonCodec<'static>>();
    }

    #[test]
    fn parse_as_unknown_type() {
        let err = parse_resource_as(b"{}", "Widget", &CodecOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownResourceType);
    }

    #[test]
    fn decode_as_checks_the_discriminator() {
        let codec = JsonCodec::default();
        let ok = codec
            .decode_as(br#"{"resourceType":"Patient"}"#, &PATIENT)
            .unwrap();
        assert_eq!(resource_type_of(&ok.value.into()), "Patient");
        let err = codec
            .decode_as(br#"{"resourceType":"Group"}"#, &PATIENT)
            .unwrap_err();
        assert_eq!(err.path(), Some("Patient.resourceType"));
    }

    #[test]
    fn pretty_output_is_indented() {
        let patient = Resource::new(&PATIENT).with("id", "p1");
        let text = serialize_resource_pretty(&patient, &CodecOptions::default()).unwrap();
        assert_eq!(text, "{\n  \"resourceType\": \"Patient\",\n  \"id\": \"p1\"\n}");
    }

    #[test]
    fn opaque_resources_encode_verbatim() {
        let input = br#"{"resourceType":"Widget","size":3}"#;
        let json: JsonValue = serde_json::from_slice(input).unwrap();
        let opaque = AnyResource::Opaque(cinnabar_models::OpaqueResource {
            resource_type: "Widget".into(),
            json: json.as_object().unwrap().clone(),
        });
        let out = JsonCodec::default().encode_any(&opaque).unwrap();
        assert_eq!(out, input.to_vec());
    }

    #[test]
    fn decode_any_keeps_unknown_types_when_lenient() {
        let input = br#"{"resourceType":"Widget","id":"w1","size":3}"#;
        let err = JsonCodec::default().decode_any(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownResourceType);

        let lenient = JsonCodec::r4(CodecOptions::lenient());
        let decoded = lenient.decode_any(input).unwrap();
        assert!(matches!(decoded.value, AnyResource::Opaque(_)));
        assert_eq!(decoded.value.id(), Some("w1"));
        assert_eq!(decoded.warnings.len(), 1);
        assert_eq!(decoded.warnings[0].path, "Widget");
        assert_eq!(lenient.encode_any(&decoded.value).unwrap(), input.to_vec());

        let known = lenient.decode_any(br#"{"resourceType":"Patient","id":"p1"}"#).unwrap();
        assert!(matches!(known.value, AnyResource::Known(_)));
        assert!(known.warnings.is_empty());
    }
}
