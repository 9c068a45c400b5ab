//! JSON to element tree
//!
//! The decoder walks a parsed `serde_json::Value` against the shape named by
//! its `resourceType`. Every key is resolved to a declared field (concrete
//! choice keys such as `valueQuantity` included), `_name` siblings are merged
//! into the primitive they describe, and each nested object increments the
//! depth counter.

use crate::error::{Decoded, Error, ErrorKind, Result, Warning, DOCUMENT};
use crate::options::CodecOptions;
use crate::path::Path;
use crate::rules::{self, Target};
use cinnabar_models::{
    AnyResource, Decimal, Element, FieldDef, JsonForm, Node, OpaqueResource, Primitive,
    PrimitiveType, PrimitiveValue, Registry, Resource, StructureShape, Value,
};
use serde_json::{Map, Value as JsonValue};

type Object = Map<String, JsonValue>;

pub(crate) struct Decoder<'r> {
    registry: &'r Registry,
    options: CodecOptions,
    warnings: Vec<Warning>,
}

impl<'r> Decoder<'r> {
    pub(crate) fn new(registry: &'r Registry, options: CodecOptions) -> Self {
        Self {
            registry,
            options,
            warnings: Vec::new(),
        }
    }

    pub(crate) fn finish<T>(self, value: T) -> Decoded<T> {
        Decoded {
            value,
            warnings: self.warnings,
        }
    }

    /// Decodes a top-level resource. With `expected` set, the document must
    /// carry that `resourceType`.
    pub(crate) fn root(
        &mut self,
        json: &JsonValue,
        expected: Option<&'static StructureShape>,
    ) -> Result<Resource> {
        let root = Path::root(expected.map_or(DOCUMENT, |shape| shape.name));
        let obj = json
            .as_object()
            .ok_or_else(|| wrong_type(&root, "object", json))?;
        let name = resource_type(obj, &root)?;
        let shape = match expected {
            Some(shape) if shape.name == name => shape,
            Some(shape) => {
                return Err(Error::WrongType {
                    path: root.field("resourceType").render(),
                    expected: shape.name.to_string(),
                    actual: name.to_string(),
                })
            }
            None => self
                .registry
                .resource(name)
                .ok_or_else(|| Error::UnknownResourceType {
                    name: name.to_string(),
                    path: root.render(),
                })?,
        };
        let path = Path::root(shape.name);
        let body = self.node(shape, obj, &path, 0)?;
        Ok(Resource::from_parts(shape, body))
    }

    /// Like [`Decoder::root`], but an unregistered top-level type is kept as
    /// opaque JSON when resource types are not strict.
    pub(crate) fn root_any(&mut self, json: &JsonValue) -> Result<AnyResource> {
        let root = Path::root(DOCUMENT);
        let obj = json
            .as_object()
            .ok_or_else(|| wrong_type(&root, "object", json))?;
        let name = resource_type(obj, &root)?;
        if self.options.strict_resource_types || self.registry.resource(name).is_some() {
            return self.root(json, None).map(AnyResource::Known);
        }
        self.warn(
            ErrorKind::UnknownResourceType,
            Path::root(name).render(),
            format!("kept '{name}' as opaque JSON"),
        );
        Ok(AnyResource::Opaque(OpaqueResource {
            resource_type: name.to_string(),
            json: obj.clone(),
        }))
    }

    fn node(
        &mut self,
        shape: &'static StructureShape,
        obj: &Object,
        path: &Path<'_>,
        depth: usize,
    ) -> Result<Node> {
        let mut node = Node::new();
        // (choice group, selected type) pairs seen so far
        let mut chosen: Vec<(&'static str, &'static str)> = Vec::new();

        for (key, json) in obj {
            if key == "resourceType" && shape.is_resource() {
                continue;
            }
            let (name, is_sibling) = match key.strip_prefix('_') {
                Some(name) => (name, true),
                None => (key.as_str(), false),
            };
            let Some(field) = shape.resolve_key(name) else {
                self.unknown_field(path, key)?;
                continue;
            };
            let field_path = path.field(name);
            let target = rules::target(self.registry, field, &field_path)?;
            if is_sibling && !matches!(target, Target::Primitive(_)) {
                self.unknown_field(path, key)?;
                continue;
            }

            if let Some(ty) = field.choice {
                match chosen.iter().find(|(group, _)| *group == field.def.name) {
                    Some((_, seen)) if *seen != ty => {
                        return Err(ambiguous_choice(field.def, obj, path));
                    }
                    Some(_) => {}
                    None => chosen.push((field.def.name, ty)),
                }
            }

            let value = match target {
                Target::Primitive(ty) => {
                    if is_sibling && obj.contains_key(name) {
                        // merged when the value key is visited
                        continue;
                    }
                    let (value, element) = if is_sibling {
                        (None, Some(json))
                    } else {
                        (Some(json), obj.get(&format!("_{name}")))
                    };
                    self.primitive_field(field.def, ty, value, element, &field_path, depth)?
                }
                Target::Structure(child) => {
                    self.field_values(field.def, json, &field_path, |this, json, path| {
                        this.structure(child, json, path, depth).map(Value::Node)
                    })?
                }
                Target::Resource => {
                    self.field_values(field.def, json, &field_path, |this, json, path| {
                        this.embedded_resource(json, path, depth).map(Value::from)
                    })?
                }
            };
            if let Some(value) = value {
                node.set(name, value);
            }
        }

        if let Some(def) = rules::missing_required(shape, &node) {
            return Err(Error::MissingRequiredField {
                path: rules::def_path(path, def),
            });
        }
        if rules::is_extension(shape) {
            rules::check_extension(shape, &node).map_err(|detail| Error::InvalidExtension {
                path: path.render(),
                detail: detail.to_string(),
            })?;
        }
        Ok(node)
    }

    /// Applies a field's cardinality to its JSON value and decodes each item.
    fn field_values(
        &mut self,
        def: &FieldDef,
        json: &JsonValue,
        path: &Path<'_>,
        mut item: impl FnMut(&mut Self, &JsonValue, &Path<'_>) -> Result<Value>,
    ) -> Result<Option<Value>> {
        match (def.cardinality.is_list(), json) {
            (true, JsonValue::Array(items)) => {
                if items.is_empty() {
                    return empty_list(def, path);
                }
                check_max(def, items.len(), path)?;
                let mut values = Vec::with_capacity(items.len());
                for (i, json) in items.iter().enumerate() {
                    values.push(item(self, json, &path.index(i))?);
                }
                Ok(Some(Value::List(values)))
            }
            (true, other) => Err(wrong_type(path, "array", other)),
            (false, JsonValue::Array(items)) => Err(rules::cardinality(path, def, items.len())),
            (false, json) => item(self, json, path).map(Some),
        }
    }

    /// A primitive field and its `_name` sibling. Repeating primitives use
    /// two aligned arrays where `null` marks a missing half.
    fn primitive_field(
        &mut self,
        def: &FieldDef,
        ty: PrimitiveType,
        value: Option<&JsonValue>,
        element: Option<&JsonValue>,
        path: &Path<'_>,
        depth: usize,
    ) -> Result<Option<Value>> {
        if !def.cardinality.is_list() {
            for json in [value, element].into_iter().flatten() {
                if let JsonValue::Array(items) = json {
                    return Err(rules::cardinality(path, def, items.len()));
                }
            }
            let primitive = self.primitive(def, ty, value, element, path, depth)?;
            return Ok(Some(Value::Primitive(primitive)));
        }

        let values = match value {
            Some(JsonValue::Array(items)) => Some(items),
            Some(other) => return Err(wrong_type(path, "array", other)),
            None => None,
        };
        let elements = match element {
            Some(JsonValue::Array(items)) => Some(items),
            Some(other) => return Err(wrong_type(path, "array", other)),
            None => None,
        };
        if let (Some(values), Some(elements)) = (values, elements) {
            if values.len() != elements.len() {
                return Err(Error::WrongType {
                    path: path.render(),
                    expected: format!("{} sibling entries", values.len()),
                    actual: format!("{} sibling entries", elements.len()),
                });
            }
        }
        let len = values.or(elements).map_or(0, Vec::len);
        if len == 0 {
            return empty_list(def, path);
        }
        check_max(def, len, path)?;

        let mut items = Vec::with_capacity(len);
        for i in 0..len {
            let item_path = path.index(i);
            let value = values.and_then(|v| v.get(i)).filter(|j| !j.is_null());
            let element = elements.and_then(|e| e.get(i)).filter(|j| !j.is_null());
            if value.is_none() && element.is_none() {
                return Err(Error::WrongType {
                    path: item_path.render(),
                    expected: ty.code().to_string(),
                    actual: "null".to_string(),
                });
            }
            let primitive = self.primitive(def, ty, value, element, &item_path, depth)?;
            items.push(Value::Primitive(primitive));
        }
        Ok(Some(Value::List(items)))
    }

    fn primitive(
        &mut self,
        def: &FieldDef,
        ty: PrimitiveType,
        value: Option<&JsonValue>,
        element: Option<&JsonValue>,
        path: &Path<'_>,
        depth: usize,
    ) -> Result<Primitive> {
        let value = value
            .map(|json| self.primitive_value(def, ty, json, path))
            .transpose()?;
        let element = element
            .map(|json| self.element(json, path, depth))
            .transpose()?;
        Ok(Primitive { value, element })
    }

    fn primitive_value(
        &mut self,
        def: &FieldDef,
        ty: PrimitiveType,
        json: &JsonValue,
        path: &Path<'_>,
    ) -> Result<PrimitiveValue> {
        let value = match (ty.json_form(), json) {
            (JsonForm::Boolean, JsonValue::Bool(b)) => PrimitiveValue::Boolean(*b),
            (JsonForm::Integer, JsonValue::Number(n)) => match n.as_i64() {
                Some(i) => PrimitiveValue::Integer(i),
                None => {
                    return Err(Error::WrongType {
                        path: path.render(),
                        expected: ty.code().to_string(),
                        actual: n.to_string(),
                    })
                }
            },
            (JsonForm::Decimal, JsonValue::Number(n)) => {
                let decimal = Decimal::parse(&n.to_string()).map_err(|_| Error::WrongType {
                    path: path.render(),
                    expected: ty.code().to_string(),
                    actual: n.to_string(),
                })?;
                if self.options.preserve_decimal_precision {
                    PrimitiveValue::Decimal(decimal)
                } else {
                    PrimitiveValue::Decimal(decimal.lossy())
                }
            }
            (JsonForm::String, JsonValue::String(s)) => PrimitiveValue::String(s.clone()),
            _ => return Err(wrong_type(path, ty.code(), json)),
        };
        rules::check_primitive(ty, &value).map_err(|actual| Error::WrongType {
            path: path.render(),
            expected: ty.code().to_string(),
            actual,
        })?;
        if let (Some(codes), PrimitiveValue::String(code)) = (def.binding, &value) {
            if !codes.contains(&code.as_str()) {
                self.invalid_code(path, code, codes)?;
            }
        }
        Ok(value)
    }

    /// The `_name` half of a primitive: an id and extensions.
    fn element(&mut self, json: &JsonValue, path: &Path<'_>, depth: usize) -> Result<Element> {
        let obj = json
            .as_object()
            .ok_or_else(|| wrong_type(path, "Element", json))?;
        let depth = self.descend(depth, path)?;
        let mut element = Element::new();
        for (key, value) in obj {
            match key.as_str() {
                "id" => {
                    let id = value
                        .as_str()
                        .ok_or_else(|| wrong_type(&path.field("id"), "string", value))?;
                    element.id = Some(id.to_string());
                }
                "extension" => {
                    element.extension = self.extensions(value, &path.field("extension"), depth)?;
                }
                _ => self.unknown_field(path, key)?,
            }
        }
        Ok(element)
    }

    fn extensions(&mut self, json: &JsonValue, path: &Path<'_>, depth: usize) -> Result<Vec<Node>> {
        let items = json
            .as_array()
            .ok_or_else(|| wrong_type(path, "array", json))?;
        let shape = rules::datatype(self.registry, "Extension", path)?;
        let mut extensions = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            extensions.push(self.structure(shape, item, &path.index(i), depth)?);
        }
        Ok(extensions)
    }

    fn structure(
        &mut self,
        shape: &'static StructureShape,
        json: &JsonValue,
        path: &Path<'_>,
        depth: usize,
    ) -> Result<Node> {
        let obj = json
            .as_object()
            .ok_or_else(|| wrong_type(path, shape.name, json))?;
        let depth = self.descend(depth, path)?;
        self.node(shape, obj, path, depth)
    }

    /// A resource slot: contained resources, bundle entries, parameters.
    fn embedded_resource(
        &mut self,
        json: &JsonValue,
        path: &Path<'_>,
        depth: usize,
    ) -> Result<AnyResource> {
        let obj = json
            .as_object()
            .ok_or_else(|| wrong_type(path, "Resource", json))?;
        let depth = self.descend(depth, path)?;
        let name = resource_type(obj, path)?;
        match self.registry.resource(name) {
            Some(shape) => {
                let body = self.node(shape, obj, path, depth)?;
                Ok(AnyResource::Known(Resource::from_parts(shape, body)))
            }
            None if !self.options.strict_resource_types => {
                self.warn(
                    ErrorKind::UnknownResourceType,
                    path.render(),
                    format!("kept '{name}' as opaque JSON"),
                );
                Ok(AnyResource::Opaque(OpaqueResource {
                    resource_type: name.to_string(),
                    json: obj.clone(),
                }))
            }
            None => Err(Error::UnknownResourceType {
                name: name.to_string(),
                path: path.render(),
            }),
        }
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

    fn unknown_field(&mut self, path: &Path<'_>, key: &str) -> Result<()> {
        let path = path.field(key).render();
        if self.options.strict_unknown_fields {
            return Err(Error::UnknownField { path });
        }
        self.warn(ErrorKind::UnknownField, path, "skipped");
        Ok(())
    }

    fn invalid_code(
        &mut self,
        path: &Path<'_>,
        code: &str,
        allowed: &'static [&'static str],
    ) -> Result<()> {
        if self.options.strict_enumerations {
            return Err(Error::InvalidEnumeration {
                path: path.render(),
                value: code.to_string(),
                allowed,
            });
        }
        self.warn(
            ErrorKind::InvalidEnumeration,
            path.render(),
            format!("kept unknown code '{code}'"),
        );
        Ok(())
    }

    fn warn(&mut self, kind: ErrorKind, path: String, detail: impl Into<String>) {
        let warning = Warning::new(kind, path, detail);
        tracing::warn!(kind = %warning.kind, path = %warning.path, "{}", warning.detail);
        self.warnings.push(warning);
    }
}

fn resource_type<'j>(obj: &'j Object, path: &Path<'_>) -> Result<&'j str> {
    match obj.get("resourceType") {
        Some(JsonValue::String(name)) => Ok(name.as_str()),
        Some(other) => Err(wrong_type(&path.field("resourceType"), "string", other)),
        None => Err(Error::MissingRequiredField {
            path: path.field("resourceType").render(),
        }),
    }
}

fn ambiguous_choice(def: &FieldDef, obj: &Object, path: &Path<'_>) -> Error {
    let mut variants: Vec<String> = Vec::new();
    for key in obj.keys() {
        let name = key.strip_prefix('_').unwrap_or(key);
        if def.choice_type(name).is_some() && !variants.iter().any(|v| v == name) {
            variants.push(name.to_string());
        }
    }
    Error::AmbiguousChoice {
        path: path.choice(def.name).render(),
        variants,
    }
}

fn empty_list(def: &FieldDef, path: &Path<'_>) -> Result<Option<Value>> {
    if def.cardinality.is_required() {
        return Err(rules::cardinality(path, def, 0));
    }
    Ok(None)
}

fn check_max(def: &FieldDef, len: usize, path: &Path<'_>) -> Result<()> {
    match def.cardinality.max {
        Some(max) if len > max as usize => Err(rules::cardinality(path, def, len)),
        _ => Ok(()),
    }
}

fn wrong_type(path: &Path<'_>, expected: &str, json: &JsonValue) -> Error {
    Error::WrongType {
        path: path.render(),
        expected: expected.to_string(),
        actual: rules::describe(json).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinnabar_models::catalog::PATIENT;
    use cinnabar_models::r4;
    use serde_json::json;

    fn decode(json: JsonValue, options: CodecOptions) -> Result<Decoded<Resource>> {
        let mut decoder = Decoder::new(r4(), options);
        let resource = decoder.root(&json, None)?;
        Ok(decoder.finish(resource))
    }

    fn strict(json: JsonValue) -> Result<Resource> {
        decode(json, CodecOptions::default()).map(Decoded::into_inner)
    }

    #[test]
    fn missing_resource_type() {
        let err = strict(json!({"id": "x"})).unwrap_err();
        assert_eq!(
            err,
            Error::MissingRequiredField {
                path: "Resource.resourceType".into()
            }
        );
    }

    #[test]
    fn expected_shape_must_match() {
        let mut decoder = Decoder::new(r4(), CodecOptions::default());
        let err = decoder
            .root(&json!({"resourceType": "Observation"}), Some(&PATIENT))
            .unwrap_err();
        assert_eq!(
            err,
            Error::WrongType {
                path: "Patient.resourceType".into(),
                expected: "Patient".into(),
                actual: "Observation".into()
            }
        );
    }

    #[test]
    fn null_is_wrong_type() {
        let err = strict(json!({"resourceType": "Patient", "active": null})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WrongType);
        assert_eq!(err.path(), Some("Patient.active"));
    }

    #[test]
    fn array_on_single_field() {
        let err = strict(json!({"resourceType": "Patient", "gender": ["male"]})).unwrap_err();
        assert_eq!(
            err,
            Error::CardinalityViolation {
                path: "Patient.gender".into(),
                actual: 1,
                bound: "0..1".into()
            }
        );
    }

    #[test]
    fn empty_array_on_required_list() {
        let err = strict(json!({
            "resourceType": "Bundle",
            "type": "batch",
            "signature": {"type": [], "when": "2020-01-01T00:00:00Z", "who": {"display": "x"}}
        }))
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CardinalityViolation);
        assert_eq!(err.path(), Some("Bundle.signature.type"));
    }

    #[test]
    fn empty_optional_list_is_dropped() {
        let patient = strict(json!({"resourceType": "Patient", "name": []})).unwrap();
        assert!(patient.get("name").is_none());
    }

    #[test]
    fn integer_bounds() {
        let err = strict(json!({
            "resourceType": "Patient",
            "multipleBirthInteger": 2147483648_i64
        }))
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WrongType);

        let err = strict(json!({"resourceType": "Bundle", "type": "searchset", "total": -1}))
            .unwrap_err();
        assert_eq!(err.path(), Some("Bundle.total"));
    }

    #[test]
    fn aligned_sibling_arrays() {
        let patient = strict(json!({
            "resourceType": "Patient",
            "name": [{
                "given": ["Peter", null],
                "_given": [null, {"extension": [{"url": "http://x", "valueString": "J"}]}]
            }]
        }))
        .unwrap();
        let name = patient.nodes("name").next().unwrap();
        let given = name.list("given");
        assert_eq!(given.len(), 2);
        let second = given[1].as_primitive().unwrap();
        assert!(second.value.is_none());
        assert_eq!(second.element.as_ref().unwrap().extension.len(), 1);

        let err = strict(json!({
            "resourceType": "Patient",
            "name": [{"given": ["a", "b"], "_given": [null]}]
        }))
        .unwrap_err();
        assert_eq!(err.path(), Some("Patient.name[0].given"));
    }

    #[test]
    fn sibling_on_complex_field_is_unknown() {
        let err = strict(json!({"resourceType": "Patient", "_maritalStatus": {"id": "a"}}))
            .unwrap_err();
        assert_eq!(
            err,
            Error::UnknownField {
                path: "Patient._maritalStatus".into()
            }
        );
    }

    #[test]
    fn lenient_keeps_opaque_resources() {
        let decoded = decode(
            json!({
                "resourceType": "Bundle",
                "type": "collection",
                "entry": [{"resource": {"resourceType": "Widget", "size": 3}}]
            }),
            CodecOptions::lenient(),
        )
        .unwrap();
        let entry = decoded.value.nodes("entry").next().unwrap();
        let resource = entry.resource("resource").unwrap();
        assert_eq!(resource.resource_type(), "Widget");
        assert!(resource.as_known().is_none());
        assert_eq!(decoded.warnings.len(), 1);
        assert_eq!(decoded.warnings[0].kind, ErrorKind::UnknownResourceType);
        assert_eq!(decoded.warnings[0].path, "Bundle.entry[0].resource");
    }

    #[test]
    fn extension_invariant() {
        let err = strict(json!({
            "resourceType": "Patient",
            "extension": [{"url": "http://x"}]
        }))
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidExtension);
        assert_eq!(err.path(), Some("Patient.extension[0]"));
    }

    #[test]
    fn lossy_decimals() {
        // parsed from text so the number keeps its trailing zero
        let json: JsonValue = serde_json::from_str(
            r#"{
                "resourceType": "Observation",
                "status": "final",
                "code": {"text": "x"},
                "valueQuantity": {"value": 1.50}
            }"#,
        )
        .unwrap();
        let exact = strict(json.clone()).unwrap();
        let quantity = exact.node("valueQuantity").unwrap();
        assert_eq!(quantity.decimal("value").unwrap().as_str(), "1.50");

        let options = CodecOptions::default().with_preserve_decimal_precision(false);
        let lossy = decode(json, options).unwrap().value;
        let quantity = lossy.node("valueQuantity").unwrap();
        assert_eq!(quantity.decimal("value").unwrap().as_str(), "1.5");
    }
}
