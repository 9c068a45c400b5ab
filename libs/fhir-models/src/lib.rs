//! FHIR R4 data model
//!
//! This crate describes the FHIR R4 (4.0.1) resources and datatypes as static
//! shapes and provides the in-memory element tree the JSON codec produces.
//!
//! # Module Organization
//!
//! - `primitive`: primitive types, exact decimals, `_name` sibling pairing
//! - `element`: `Element`, `Node` and `Value`, the element tree
//! - `resource`: resources tagged by shape, plus opaque unknown resources
//! - `shape`: shape descriptors and the `fhir_shape!` macro
//! - `catalog`: every R4 resource, datatype and backbone element
//! - `registry`: lookup from `resourceType` / datatype name to shape
//!
//! # Example
//!
//! ```rust
//! use cinnabar_models::{r4, Node};
//!
//! let mut patient = r4().new_resource("Patient").unwrap();
//! patient.set("active", true);
//! patient.push("name", Node::new().with("family", "Chalmers"));
//!
//! assert_eq!(patient.resource_type(), "Patient");
//! assert_eq!(patient.nodes("name").count(), 1);
//! ```

#[macro_use]
pub mod shape;

pub mod catalog;
pub mod element;
pub mod error;
pub mod primitive;
pub mod registry;
pub mod resource;

pub use element::{Element, Node, Value};
pub use error::{Error, Result};
pub use primitive::{Decimal, JsonForm, Primitive, PrimitiveType, PrimitiveValue};
pub use registry::Registry;
pub use resource::{AnyResource, OpaqueResource, Resource};
pub use shape::{Base, Cardinality, FieldDef, FieldKind, FieldMatch, ShapeKind, StructureShape};

use once_cell::sync::Lazy;

static R4: Lazy<Registry> = Lazy::new(Registry::r4);

/// The shared, read-only R4 registry.
pub fn r4() -> &'static Registry {
    &R4
}
