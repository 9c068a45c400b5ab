//! Element tree to JSON
//!
//! Output follows shape order: `resourceType` first, then the base fields,
//! then the fields the shape declares. A primitive's `_name` sibling is
//! written right after it. The whole document is built before anything is
//! serialized, so a failed encode produces no output.

use crate::error::{Error, Result};
use crate::options::CodecOptions;
use crate::path::Path;
use crate::rules::{self, Target};
use cinnabar_models::{
    AnyResource, Element, FieldDef, FieldMatch, JsonForm, Node, PrimitiveType, PrimitiveValue,
    Registry, Resource, StructureShape, Value,
};
use serde_json::{Map, Number, Value as JsonValue};

type Object = Map<String, JsonValue>;

pub(crate) struct Encoder<'r> {
    registry: &'r Registry,
    options: CodecOptions,
}

impl<'r> Encoder<'r> {
    pub(crate) fn new(registry: &'r Registry, options: CodecOptions) -> Self {
        Self { registry, options }
    }

    pub(crate) fn root(&self, resource: &Resource) -> Result<JsonValue> {
        let path = Path::root(resource.resource_type());
        self.known(resource, &path, 0)
    }

    pub(crate) fn any(&self, resource: &AnyResource, path: &Path<'_>, depth: usize) -> Result<JsonValue> {
        match resource {
            AnyResource::Known(resource) => self.known(resource, path, depth),
            AnyResource::Opaque(opaque) => {
                let mut out = Object::with_capacity(opaque.json.len() + 1);
                out.insert(
                    "resourceType".to_string(),
                    JsonValue::String(opaque.resource_type.clone()),
                );
                for (key, value) in &opaque.json {
                    if key != "resourceType" {
                        out.insert(key.clone(), value.clone());
                    }
                }
                Ok(JsonValue::Object(out))
            }
        }
    }

    fn known(&self, resource: &Resource, path: &Path<'_>, depth: usize) -> Result<JsonValue> {
        let mut out = Object::new();
        out.insert(
            "resourceType".to_string(),
            JsonValue::String(resource.resource_type().to_string()),
        );
        self.fields(resource.shape(), resource.body(), path, depth, &mut out)?;
        Ok(JsonValue::Object(out))
    }

    fn structure(
        &self,
        shape: &'static StructureShape,
        node: &Node,
        path: &Path<'_>,
        depth: usize,
    ) -> Result<JsonValue> {
        let depth = self.descend(depth, path)?;
        let mut out = Object::new();
        self.fields(shape, node, path, depth, &mut out)?;
        if rules::is_extension(shape) {
            rules::check_extension(shape, node).map_err(|detail| Error::InvalidExtension {
                path: path.render(),
                detail: detail.to_string(),
            })?;
        }
        Ok(JsonValue::Object(out))
    }

    fn fields(
        &self,
        shape: &'static StructureShape,
        node: &Node,
        path: &Path<'_>,
        depth: usize,
        out: &mut Object,
    ) -> Result<()> {
        for key in node.keys() {
            if shape.resolve_key(key).is_none() {
                let path = path.field(key);
                if self.options.strict_unknown_fields {
                    return Err(Error::UnknownField {
                        path: path.render(),
                    });
                }
                tracing::warn!(%path, "dropping field unknown to {}", shape.name);
            }
        }

        for def in shape.all_fields() {
            let Some((key, value)) = entry(def, node, path)? else {
                if def.cardinality.is_required() {
                    return Err(Error::MissingRequiredField {
                        path: rules::def_path(path, def),
                    });
                }
                continue;
            };
            let field = FieldMatch {
                def,
                choice: def.choice_type(key),
            };
            let field_path = path.field(key);
            let written = match rules::target(self.registry, field, &field_path)? {
                Target::Primitive(ty) => self.primitive_field(def, ty, key, value, &field_path, depth, out)?,
                Target::Structure(child) => {
                    let json = self.field_values(def, value, &field_path, |value, path| match value {
                        Value::Node(node) => self.structure(child, node, path, depth),
                        other => Err(Error::WrongType {
                            path: path.render(),
                            expected: child.name.to_string(),
                            actual: other.kind_name().to_string(),
                        }),
                    })?;
                    insert(out, key, json)
                }
                Target::Resource => {
                    let json = self.field_values(def, value, &field_path, |value, path| match value {
                        Value::Resource(resource) => {
                            let depth = self.descend(depth, path)?;
                            self.any(resource, path, depth)
                        }
                        other => Err(Error::WrongType {
                            path: path.render(),
                            expected: "Resource".to_string(),
                            actual: other.kind_name().to_string(),
                        }),
                    })?;
                    insert(out, key, json)
                }
            };
            if !written && def.cardinality.is_required() {
                return Err(Error::MissingRequiredField {
                    path: rules::def_path(path, def),
                });
            }
        }
        Ok(())
    }

    /// Applies a field's cardinality to a node value and encodes each item.
    fn field_values(
        &self,
        def: &FieldDef,
        value: &Value,
        path: &Path<'_>,
        item: impl Fn(&Value, &Path<'_>) -> Result<JsonValue>,
    ) -> Result<Option<JsonValue>> {
        match (def.cardinality.is_list(), value) {
            (true, Value::List(items)) if items.is_empty() => empty_list(def, path),
            (true, values) => {
                let items = values.as_slice();
                let mut out = Vec::with_capacity(items.len());
                for (i, value) in items.iter().enumerate() {
                    out.push(item(value, &path.index(i))?);
                }
                Ok(Some(JsonValue::Array(out)))
            }
            (false, Value::List(items)) if items.is_empty() => Ok(None),
            (false, Value::List(items)) => Err(rules::cardinality(path, def, items.len())),
            (false, value) => item(value, path).map(Some),
        }
    }

    /// Writes `key` and, when any item carries an id or extensions, `_key`.
    #[allow(clippy::too_many_arguments)]
    fn primitive_field(
        &self,
        def: &FieldDef,
        ty: PrimitiveType,
        key: &str,
        value: &Value,
        path: &Path<'_>,
        depth: usize,
        out: &mut Object,
    ) -> Result<bool> {
        let is_list = def.cardinality.is_list();
        let items = value.as_slice();
        if !is_list && items.len() > 1 {
            return Err(rules::cardinality(path, def, items.len()));
        }

        let mut values = Vec::with_capacity(items.len());
        let mut elements = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let item_path = if is_list { path.index(i) } else { *path };
            let Value::Primitive(primitive) = item else {
                return Err(Error::WrongType {
                    path: item_path.render(),
                    expected: ty.code().to_string(),
                    actual: item.kind_name().to_string(),
                });
            };
            if primitive.is_empty() {
                continue;
            }
            values.push(match &primitive.value {
                Some(value) => self.primitive_value(def, ty, value, &item_path)?,
                None => JsonValue::Null,
            });
            elements.push(match &primitive.element {
                Some(element) if !element.is_empty() => self.element(element, &item_path, depth)?,
                _ => JsonValue::Null,
            });
        }

        if values.is_empty() {
            if is_list && def.cardinality.is_required() {
                return Err(rules::cardinality(path, def, 0));
            }
            return Ok(false);
        }
        let has_values = values.iter().any(|v| !v.is_null());
        let has_elements = elements.iter().any(|e| !e.is_null());
        let (value, element) = if is_list {
            (JsonValue::Array(values), JsonValue::Array(elements))
        } else {
            (
                values.into_iter().next().unwrap_or_default(),
                elements.into_iter().next().unwrap_or_default(),
            )
        };
        if has_values {
            out.insert(key.to_string(), value);
        }
        if has_elements {
            out.insert(format!("_{key}"), element);
        }
        Ok(true)
    }

    fn primitive_value(
        &self,
        def: &FieldDef,
        ty: PrimitiveType,
        value: &PrimitiveValue,
        path: &Path<'_>,
    ) -> Result<JsonValue> {
        rules::check_primitive(ty, value).map_err(|actual| Error::WrongType {
            path: path.render(),
            expected: ty.code().to_string(),
            actual,
        })?;
        if let (Some(codes), PrimitiveValue::String(code)) = (def.binding, value) {
            if !codes.contains(&code.as_str()) {
                if self.options.strict_enumerations {
                    return Err(Error::InvalidEnumeration {
                        path: path.render(),
                        value: code.clone(),
                        allowed: codes,
                    });
                }
                tracing::warn!(%path, code = %code, "writing code outside its binding");
            }
        }
        Ok(match value {
            PrimitiveValue::Boolean(b) => JsonValue::Bool(*b),
            PrimitiveValue::Integer(i) if ty.json_form() == JsonForm::Decimal => {
                number(&i.to_string(), path)?
            }
            PrimitiveValue::Integer(i) => JsonValue::from(*i),
            PrimitiveValue::Decimal(d) if self.options.preserve_decimal_precision => {
                number(d.as_str(), path)?
            }
            PrimitiveValue::Decimal(d) => number(d.lossy().as_str(), path)?,
            PrimitiveValue::String(s) => JsonValue::String(s.clone()),
        })
    }

    fn element(&self, element: &Element, path: &Path<'_>, depth: usize) -> Result<JsonValue> {
        let depth = self.descend(depth, path)?;
        let mut out = Object::new();
        if let Some(id) = &element.id {
            out.insert("id".to_string(), JsonValue::String(id.clone()));
        }
        if !element.extension.is_empty() {
            let path = path.field("extension");
            let shape = rules::datatype(self.registry, "Extension", &path)?;
            let mut extensions = Vec::with_capacity(element.extension.len());
            for (i, extension) in element.extension.iter().enumerate() {
                extensions.push(self.structure(shape, extension, &path.index(i), depth)?);
            }
            out.insert("extension".to_string(), JsonValue::Array(extensions));
        }
        Ok(JsonValue::Object(out))
    }

    fn descend(&self, depth: usize, path: &Path<'_>) -> Result<usize> {
        let next = depth + 1;
        if next > self.options.max_recursion_depth {
            return Err(Error::RecursionTooDeep {
                path: path.render(),
                limit: self.options.max_recursion_depth,
            });
        }
        Ok(next)
    }
}

/// The node entry for a field. A choice group may hold one variant at most.
fn entry<'n>(
    def: &FieldDef,
    node: &'n Node,
    path: &Path<'_>,
) -> Result<Option<(&'n str, &'n Value)>> {
    if !def.is_choice() {
        return Ok(node.get(def.name).map(|value| (def.name, value)));
    }
    let mut variants = node.iter().filter(|(key, _)| def.choice_type(key).is_some());
    match (variants.next(), variants.next()) {
        (None, _) => Ok(None),
        (Some(variant), None) => Ok(Some(variant)),
        (Some(_), Some(_)) => Err(Error::AmbiguousChoice {
            path: path.choice(def.name).render(),
            variants: node
                .keys()
                .filter(|key| def.choice_type(key).is_some())
                .map(str::to_string)
                .collect(),
        }),
    }
}

fn empty_list(def: &FieldDef, path: &Path<'_>) -> Result<Option<JsonValue>> {
    if def.cardinality.is_required() {
        return Err(rules::cardinality(path, def, 0));
    }
    Ok(None)
}

fn insert(out: &mut Object, key: &str, json: Option<JsonValue>) -> bool {
    match json {
        Some(json) => {
            out.insert(key.to_string(), json);
            true
        }
        None => false,
    }
}

/// A JSON number carrying the exact decimal text.
fn number(text: &str, path: &Path<'_>) -> Result<JsonValue> {
    serde_json::from_str::<Number>(text)
        .map(JsonValue::Number)
        .map_err(|_| Error::WrongType {
            path: path.render(),
            expected: "decimal".to_string(),
            actual: format!("\"{text}\""),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use cinnabar_models::catalog::{OBSERVATION, PATIENT};
    use cinnabar_models::{r4, Decimal, Primitive};

    fn encode(resource: &Resource) -> Result<JsonValue> {
        Encoder::new(r4(), CodecOptions::default()).root(resource)
    }

    fn observation() -> Resource {
        Resource::new(&OBSERVATION)
            .with("status", "final")
            .with("code", Node::new().with("text", "weight"))
    }

    #[test]
    fn resource_type_comes_first() {
        let patient = Resource::new(&PATIENT)
            .with("gender", "female")
            .with("active", true)
            .with("id", "p1");
        let json = encode(&patient).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["resourceType", "id", "active", "gender"]);
    }

    #[test]
    fn sibling_follows_value() {
        let birth = Primitive::new("1974-12-25").with_element(Element::new().with_id("bd"));
        let patient = Resource::new(&PATIENT)
            .with("birthDate", birth)
            .with("deceasedBoolean", false);
        let json = encode(&patient).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["resourceType", "birthDate", "_birthDate", "deceasedBoolean"]);
        assert_eq!(json["_birthDate"]["id"], "bd");
    }

    #[test]
    fn list_siblings_are_aligned() {
        let mut name = Node::new();
        name.push("given", "Peter");
        name.push(
            "given",
            Primitive::from_element(
                Element::new().with_extension(Node::extension("http://x", "valueString", "J")),
            ),
        );
        let patient = Resource::new(&PATIENT).with("name", Value::List(vec![name.into()]));
        let json = encode(&patient).unwrap();
        let given = &json["name"][0];
        assert_eq!(given["given"], serde_json::json!(["Peter", null]));
        assert!(given["_given"][0].is_null());
        assert_eq!(given["_given"][1]["extension"][0]["valueString"], "J");
    }

    #[test]
    fn ambiguous_choice_fails() {
        let obs = observation()
            .with("valueString", "70 kg")
            .with("valueQuantity", Node::new().with("value", Decimal::from(70)));
        let err = encode(&obs).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AmbiguousChoice);
        assert_eq!(err.path(), Some("Observation.value[x]"));
    }

    #[test]
    fn required_fields_are_enforced() {
        let obs = Resource::new(&OBSERVATION).with("status", "final");
        let err = encode(&obs).unwrap_err();
        assert_eq!(
            err,
            Error::MissingRequiredField {
                path: "Observation.code".into()
            }
        );
    }

    #[test]
    fn integer_accepted_for_decimal() {
        let obs = observation().with("valueQuantity", Node::new().with("value", 70));
        let json = encode(&obs).unwrap();
        assert_eq!(json["valueQuantity"]["value"].to_string(), "70");
    }

    #[test]
    fn decimals_keep_their_text() {
        let value = Decimal::parse("72.50").unwrap();
        let obs = observation().with("valueQuantity", Node::new().with("value", value));
        let json = encode(&obs).unwrap();
        assert!(json.to_string().contains("\"value\":72.50"));
    }

    #[test]
    fn unknown_keys() {
        let patient = Resource::new(&PATIENT).with("favouriteColour", "blue");
        let err = encode(&patient).unwrap_err();
        assert_eq!(err.path(), Some("Patient.favouriteColour"));

        let lenient = Encoder::new(r4(), CodecOptions::lenient());
        let json = lenient.root(&patient).unwrap();
        assert!(json.get("favouriteColour").is_none());
    }

    #[test]
    fn wrong_value_kind() {
        let patient = Resource::new(&PATIENT).with("active", "yes");
        let err = encode(&patient).unwrap_err();
        assert_eq!(
            err,
            Error::WrongType {
                path: "Patient.active".into(),
                expected: "boolean".into(),
                actual: "string".into()
            }
        );
    }

    #[test]
    fn list_on_single_field() {
        let mut patient = Resource::new(&PATIENT);
        patient.push("gender", "male");
        patient.push("gender", "female");
        let err = encode(&patient).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CardinalityViolation);
    }

    #[test]
    fn depth_limit_applies() {
        let mut concept = Node::new().with("code", "c");
        for _ in 0..3 {
            concept = Node::new().with("code", "c").with("concept", Value::List(vec![concept.into()]));
        }
        let system = r4()
            .new_resource("CodeSystem")
            .unwrap()
            .with("status", "active")
            .with("content", "complete")
            .with("concept", Value::List(vec![concept.into()]));
        let shallow = Encoder::new(r4(), CodecOptions::default().with_max_recursion_depth(3));
        let err = shallow.root(&system).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RecursionTooDeep);
        assert!(Encoder::new(r4(), CodecOptions::default()).root(&system).is_ok());
    }
}
