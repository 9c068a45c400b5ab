//! Resources
//!
//! A [`Resource`] is a [`Node`] body tagged with the shape it conforms to.
//! The shape fixes the `resourceType`, so the discriminator can never drift
//! from the content. [`AnyResource`] is the slot type for contained
//! resources, bundle entries and parameter values, and can also hold a
//! resource of a type the registry does not know.

use crate::element::Node;
use crate::shape::StructureShape;
use serde_json::{Map, Value as JsonValue};
use std::fmt;
use std::ops::{Deref, DerefMut};

#[derive(Clone)]
pub struct Resource {
    shape: &'static StructureShape,
    body: Node,
}

impl Resource {
    pub fn new(shape: &'static StructureShape) -> Self {
        debug_assert!(shape.is_resource(), "{} is not a resource shape", shape.name);
        Self {
            shape,
            body: Node::new(),
        }
    }

    pub fn from_parts(shape: &'static StructureShape, body: Node) -> Self {
        Self { shape, body }
    }

    pub fn resource_type(&self) -> &'static str {
        self.shape.name
    }

    pub fn shape(&self) -> &'static StructureShape {
        self.shape
    }

    pub fn body(&self) -> &Node {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Node {
        &mut self.body
    }

    pub fn into_body(self) -> Node {
        self.body
    }

    pub fn with(mut self, key: &str, value: impl Into<crate::element::Value>) -> Self {
        self.body.set(key, value);
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.body.str("id")
    }
}

impl Deref for Resource {
    type Target = Node;

    fn deref(&self) -> &Node {
        &self.body
    }
}

impl DerefMut for Resource {
    fn deref_mut(&mut self) -> &mut Node {
        &mut self.body
    }
}

impl PartialEq for Resource {
    fn eq(&self, other: &Self) -> bool {
        self.shape.name == other.shape.name && self.body == other.body
    }
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("resourceType", &self.shape.name)
            .field("body", &self.body)
            .finish()
    }
}

/// A resource whose type is not in the registry, kept as raw JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct OpaqueResource {
    pub resource_type: String,
    pub json: Map<String, JsonValue>,
}

impl OpaqueResource {
    pub fn id(&self) -> Option<&str> {
        self.json.get("id").and_then(JsonValue::as_str)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnyResource {
    Known(Resource),
    Opaque(OpaqueResource),
}

impl AnyResource {
    pub fn resource_type(&self) -> &str {
        match self {
            AnyResource::Known(r) => r.resource_type(),
            AnyResource::Opaque(o) => &o.resource_type,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            AnyResource::Known(r) => r.id(),
            AnyResource::Opaque(o) => o.id(),
        }
    }

    pub fn as_known(&self) -> Option<&Resource> {
        match self {
            AnyResource::Known(r) => Some(r),
            AnyResource::Opaque(_) => None,
        }
    }

    pub fn into_known(self) -> Option<Resource> {
        match self {
            AnyResource::Known(r) => Some(r),
            AnyResource::Opaque(_) => None,
        }
    }
}

impl From<Resource> for AnyResource {
    fn from(value: Resource) -> Self {
        AnyResource::Known(value)
    }
}

impl From<OpaqueResource> for AnyResource {
    fn from(value: OpaqueResource) -> Self {
        AnyResource::Opaque(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{OBSERVATION, PATIENT};

    #[test]
    fn resource_type_comes_from_shape() {
        let patient = Resource::new(&PATIENT).with("id", "p1");
        assert_eq!(patient.resource_type(), "Patient");
        assert_eq!(patient.id(), Some("p1"));

        let any = AnyResource::from(patient.clone());
        assert_eq!(any.resource_type(), "Patient");
        assert_eq!(any.as_known(), Some(&patient));
    }

    #[test]
    fn equality_includes_type() {
        let a = Resource::new(&PATIENT).with("id", "x");
        let b = Resource::new(&OBSERVATION).with("id", "x");
        assert_ne!(a, b);
    }

    #[test]
    fn opaque_keeps_json() {
        let json = serde_json::json!({"resourceType": "Foo", "id": "f"});
        let opaque = OpaqueResource {
            resource_type: "Foo".into(),
            json: json.as_object().unwrap().clone(),
        };
        let any = AnyResource::from(opaque);
        assert_eq!(any.resource_type(), "Foo");
        assert_eq!(any.id(), Some("f"));
        assert!(any.as_known().is_none());
    }
}
