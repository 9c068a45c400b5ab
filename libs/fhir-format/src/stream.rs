//! NDJSON decoding
//!
//! Bulk exports put one resource per line. The stream decoder reads
//! concatenated or newline-separated JSON values and decodes each one on its
//! own, so a bad resource does not stop the ones after it. A value nested
//! past the depth limit is skipped the same way. Malformed JSON is not: the
//! parser cannot resynchronise, so it ends the stream.

use crate::error::{Decoded, Error, Result};
use crate::JsonCodec;
use cinnabar_models::Resource;
use serde_json::de::SliceRead;
use serde_json::{StreamDeserializer, Value as JsonValue};

type Values<'a> = StreamDeserializer<'a, SliceRead<'a>, JsonValue>;

pub struct NdjsonDecoder<'a, 'r> {
    codec: &'a JsonCodec<'r>,
    input: &'a [u8],
    /// Where `values` started reading.
    base: usize,
    values: Values<'a>,
    failed: bool,
}

fn values_from(input: &[u8]) -> Values<'_> {
    let mut de = serde_json::Deserializer::from_slice(input);
    de.disable_recursion_limit();
    de.into_iter()
}

impl<'a, 'r> NdjsonDecoder<'a, 'r> {
    pub(crate) fn new(codec: &'a JsonCodec<'r>, input: &'a [u8]) -> Self {
        Self {
            codec,
            input,
            base: 0,
            values: values_from(input),
            failed: false,
        }
    }

    /// Bytes consumed so far.
    pub fn byte_offset(&self) -> usize {
        self.base + self.values.byte_offset()
    }

    fn malformed(&self, err: &serde_json::Error) -> Error {
        match Error::from_json(err, &self.input[self.base..]) {
            Error::MalformedJson { offset, reason } => Error::MalformedJson {
                offset: self.base + offset,
                reason,
            },
            other => other,
        }
    }
}

impl Iterator for NdjsonDecoder<'_, '_> {
    type Item = Result<Decoded<Resource>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let input = self.input;
        let start = self.byte_offset();
        if let Err(err) = self.codec.check_nesting(&input[start..]) {
            self.base = start + crate::rules::nesting(&input[start..]).end;
            self.values = values_from(&input[self.base..]);
            return Some(Err(err));
        }
        match self.values.next()? {
            Ok(json) => Some(self.codec.decode_value(&json)),
            Err(err) => {
                self.failed = true;
                Some(Err(self.malformed(&err)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::JsonCodec;

    #[test]
    fn decodes_each_line() {
        let input = br#"{"resourceType": "Patient", "id": "a"}
{"resourceType": "Patient", "id": "b", "gender": "robot"}

{"resourceType": "Observation", "status": "final", "code": {"text": "t"}}
"#;
        let codec = JsonCodec::default();
        let results: Vec<_> = codec.decode_ndjson(input).collect();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().value.id(), Some("a"));
        assert_eq!(
            results[1].as_ref().unwrap_err().kind(),
            ErrorKind::InvalidEnumeration
        );
        assert_eq!(
            results[2].as_ref().unwrap().value.resource_type(),
            "Observation"
        );
    }

    #[test]
    fn malformed_line_ends_the_stream() {
        let input = b"{\"resourceType\": \"Patient\"}\n{\"resourceType\": \n{\"resourceType\": \"Patient\"}";
        let codec = JsonCodec::default();
        let mut stream = codec.decode_ndjson(input);
        assert!(stream.next().unwrap().is_ok());
        let err = stream.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedJson);
        assert!(stream.next().is_none());
    }

    #[test]
    fn deep_line_is_skipped() {
        let deep = format!("{}{}", "[".repeat(300), "]".repeat(300));
        let input = format!(
            "{{\"resourceType\": \"Patient\", \"id\": \"a\"}}\n{deep}\n{{\"resourceType\": \"Patient\", \"id\": \"b\"}}\n"
        );
        let codec = JsonCodec::default();
        let mut stream = codec.decode_ndjson(input.as_bytes());
        assert_eq!(stream.next().unwrap().unwrap().value.id(), Some("a"));
        let err = stream.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RecursionTooDeep);
        assert_eq!(stream.next().unwrap().unwrap().value.id(), Some("b"));
        assert_eq!(stream.byte_offset(), input.trim_end().len());
        assert!(stream.next().is_none());
    }
}
