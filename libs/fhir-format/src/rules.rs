//! Checks shared by the decoder and the encoder

use crate::error::{Error, Result};
use crate::path::Path;
use cinnabar_models::{
    FieldDef, FieldKind, FieldMatch, JsonForm, Node, PrimitiveType, PrimitiveValue, Registry,
    StructureShape,
};
use serde_json::Value as JsonValue;

/// What a JSON key holds once its declared type is resolved.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Target {
    Primitive(PrimitiveType),
    Structure(&'static StructureShape),
    Resource,
}

pub(crate) fn target(
    registry: &Registry,
    field: FieldMatch<'static>,
    path: &Path<'_>,
) -> Result<Target> {
    let type_name = match field.def.kind {
        FieldKind::Primitive(ty) => return Ok(Target::Primitive(ty)),
        FieldKind::Backbone(shape) => return Ok(Target::Structure(shape)),
        FieldKind::Resource => return Ok(Target::Resource),
        FieldKind::Complex(name) => name,
        FieldKind::Choice(_) => field.choice.unwrap_or_default(),
    };
    if let Some(ty) = PrimitiveType::from_code(type_name) {
        return Ok(Target::Primitive(ty));
    }
    datatype(registry, type_name, path).map(Target::Structure)
}

pub(crate) fn datatype(
    registry: &Registry,
    name: &str,
    path: &Path<'_>,
) -> Result<&'static StructureShape> {
    registry.datatype(name).ok_or_else(|| Error::UnknownDatatype {
        name: name.to_string(),
        path: path.render(),
    })
}

/// Validates a primitive value against its declared type.
///
/// On mismatch returns a short description of what was found.
pub(crate) fn check_primitive(
    ty: PrimitiveType,
    value: &PrimitiveValue,
) -> std::result::Result<(), String> {
    match (ty.json_form(), value) {
        (JsonForm::Boolean, PrimitiveValue::Boolean(_)) => Ok(()),
        (JsonForm::Integer | JsonForm::Decimal, PrimitiveValue::Integer(i)) => {
            match ty.integer_range() {
                Some((min, max)) if *i < min || *i > max => Err(i.to_string()),
                _ => Ok(()),
            }
        }
        (JsonForm::Decimal, PrimitiveValue::Decimal(_)) => Ok(()),
        (JsonForm::String, PrimitiveValue::String(s)) => {
            if ty.is_lexically_valid(s) {
                Ok(())
            } else {
                Err(format!("\"{s}\""))
            }
        }
        (_, other) => Err(other.kind_name().to_string()),
    }
}

/// An extension carries a value or nested extensions, never both.
pub(crate) fn check_extension(
    shape: &StructureShape,
    node: &Node,
) -> std::result::Result<(), &'static str> {
    let Some(value) = shape.field("value") else {
        return Ok(());
    };
    let has_value = node.keys().any(|key| value.choice_type(key).is_some());
    let has_children = !node.list("extension").is_empty();
    match (has_value, has_children) {
        (true, true) => Err("it has both a value and nested extensions"),
        (false, false) => Err("it has neither a value nor nested extensions"),
        _ => Ok(()),
    }
}

pub(crate) fn is_extension(shape: &StructureShape) -> bool {
    shape.name == "Extension"
}

/// First required field the node leaves empty.
pub(crate) fn missing_required(shape: &StructureShape, node: &Node) -> Option<&'static FieldDef> {
    shape
        .all_fields()
        .filter(|def| def.cardinality.is_required())
        .find(|def| {
            if def.is_choice() {
                !node.keys().any(|key| def.choice_type(key).is_some())
            } else {
                !node.contains_key(def.name)
            }
        })
}

/// Path of a declared field: `value[x]` for choice groups.
pub(crate) fn def_path(path: &Path<'_>, def: &FieldDef) -> String {
    if def.is_choice() {
        path.choice(def.name).render()
    } else {
        path.field(def.name).render()
    }
}

pub(crate) fn describe(json: &JsonValue) -> &'static str {
    match json {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

pub(crate) fn cardinality(path: &Path<'_>, def: &FieldDef, actual: usize) -> Error {
    Error::CardinalityViolation {
        path: path.render(),
        actual,
        bound: def.cardinality.to_string(),
    }
}

/// Deepest JSON container nesting a decoder limit of `max` can still reach.
///
/// A node at decoder depth `d` sits at most `2d + 1` containers deep (every
/// repeating field adds an array), so the first node past the limit is at
/// `2 * max + 3`. Anything deeper is rejected before the parser runs.
pub(crate) fn json_nesting_limit(max: usize) -> usize {
    max.saturating_mul(2).saturating_add(3)
}

/// Container nesting of the first JSON value in `input`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Nesting {
    pub deepest: usize,
    /// Offset just past the value, or where scanning gave up.
    pub end: usize,
}

/// Measures the first value in `input` without building it.
///
/// Only brackets and string boundaries are tracked; anything else is left for
/// the parser to reject.
pub(crate) fn nesting(input: &[u8]) -> Nesting {
    let (mut depth, mut deepest) = (0usize, 0usize);
    let (mut in_string, mut escaped) = (false, false);
    for (i, &b) in input.iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
                if depth == 0 {
                    return Nesting { deepest, end: i + 1 };
                }
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b'}' | b']' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Nesting { deepest, end: i + 1 };
                }
            }
            b' ' | b'\t' | b'\n' | b'\r' => {}
            _ if depth == 0 => return Nesting { deepest, end: i },
            _ => {}
        }
    }
    Nesting {
        deepest,
        end: input.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinnabar_models::catalog::{EXTENSION, OBSERVATION, PATIENT};
    use cinnabar_models::{r4, Decimal};

    #[test]
    fn choice_variants_resolve_to_primitives_or_datatypes() {
        let root = Path::root("Observation");
        let quantity = OBSERVATION.resolve_key("valueQuantity").unwrap();
        assert!(matches!(
            target(r4(), quantity, &root).unwrap(),
            Target::Structure(shape) if shape.name == "Quantity"
        ));
        let text = OBSERVATION.resolve_key("valueString").unwrap();
        assert!(matches!(
            target(r4(), text, &root).unwrap(),
            Target::Primitive(PrimitiveType::String)
        ));
        let contained = OBSERVATION.resolve_key("contained").unwrap();
        assert!(matches!(target(r4(), contained, &root).unwrap(), Target::Resource));
    }

    #[test]
    fn unregistered_datatypes_are_reported() {
        let empty = Registry::new();
        let root = Path::root("Patient");
        let name = PATIENT.resolve_key("name").unwrap();
        let err = target(&empty, name, &root.field("name")).unwrap_err();
        assert_eq!(
            err,
            Error::UnknownDatatype {
                name: "HumanName".into(),
                path: "Patient.name".into()
            }
        );
    }

    #[test]
    fn primitive_checks() {
        assert!(check_primitive(PrimitiveType::Boolean, &true.into()).is_ok());
        assert_eq!(
            check_primitive(PrimitiveType::Boolean, &"true".into()),
            Err("string".to_string())
        );
        assert_eq!(
            check_primitive(PrimitiveType::PositiveInt, &0.into()),
            Err("0".to_string())
        );
        assert!(check_primitive(PrimitiveType::Decimal, &7.into()).is_ok());
        let decimal = Decimal::parse("1.50").unwrap();
        assert!(check_primitive(PrimitiveType::Decimal, &decimal.into()).is_ok());
        assert_eq!(
            check_primitive(PrimitiveType::Date, &"1974-13-25".into()),
            Err("\"1974-13-25\"".to_string())
        );
    }

    #[test]
    fn extensions_need_exactly_one_of_value_or_children() {
        let valued = Node::extension("http://a", "valueString", "x");
        assert!(check_extension(&EXTENSION, &valued).is_ok());

        let nested = Node::complex_extension("http://a", vec![valued.clone()]);
        assert!(check_extension(&EXTENSION, &nested).is_ok());

        let both = nested.clone().with("valueBoolean", true);
        assert!(check_extension(&EXTENSION, &both).is_err());

        let neither = Node::new().with("url", "http://a");
        assert!(check_extension(&EXTENSION, &neither).is_err());
    }

    #[test]
    fn required_fields_and_choice_groups() {
        let node = Node::new().with("status", "final");
        let missing = missing_required(&OBSERVATION, &node).unwrap();
        assert_eq!(missing.name, "code");
        assert_eq!(
            def_path(&Path::root("Observation"), missing),
            "Observation.code"
        );
        let value = OBSERVATION.field("value").unwrap();
        assert_eq!(def_path(&Path::root("Observation"), value), "Observation.value[x]");
    }

    #[test]
    fn nesting_counts_containers_outside_strings() {
        let input = br#"{"a": [{"b": "]]}}\"[["}], "c": {}} trailing"#;
        let measured = nesting(input);
        assert_eq!(measured.deepest, 3);
        assert_eq!(&input[measured.end..], b" trailing");

        assert_eq!(nesting(b"  42").deepest, 0);
        assert_eq!(nesting(b"[[[").deepest, 3);
        assert_eq!(nesting(b"[[[").end, 3);
        assert_eq!(json_nesting_limit(64), 131);
    }
}
