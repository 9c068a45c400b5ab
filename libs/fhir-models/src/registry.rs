//! Resource registry
//!
//! Maps `resourceType` values and datatype names to their shapes. The codec
//! consults it whenever it meets a `resourceType` tag or a named complex
//! datatype. A registry is filled once and then only read; [`crate::r4`]
//! hands out a shared, immutable instance holding the full R4 catalog.

use crate::catalog;
use crate::error::{Error, Result};
use crate::resource::Resource;
use crate::shape::{ShapeKind, StructureShape};
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct Registry {
    resources: HashMap<&'static str, &'static StructureShape>,
    datatypes: HashMap<&'static str, &'static StructureShape>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every R4 resource and datatype.
    pub fn r4() -> Self {
        let mut registry = Self {
            resources: HashMap::with_capacity(catalog::RESOURCES.len()),
            datatypes: HashMap::with_capacity(catalog::DATATYPES.len()),
        };
        for (name, shape) in catalog::RESOURCES.entries() {
            registry.resources.insert(*name, *shape);
        }
        for (name, shape) in catalog::DATATYPES.entries() {
            registry.datatypes.insert(*name, *shape);
        }
        tracing::debug!(
            resources = registry.resources.len(),
            datatypes = registry.datatypes.len(),
            "built R4 registry"
        );
        registry
    }

    pub fn register_resource(&mut self, shape: &'static StructureShape) -> Result<()> {
        Self::insert(&mut self.resources, ShapeKind::Resource, shape)
    }

    pub fn register_datatype(&mut self, shape: &'static StructureShape) -> Result<()> {
        Self::insert(&mut self.datatypes, ShapeKind::ComplexType, shape)
    }

    fn insert(
        map: &mut HashMap<&'static str, &'static StructureShape>,
        expected: ShapeKind,
        shape: &'static StructureShape,
    ) -> Result<()> {
        if shape.kind != expected {
            return Err(Error::WrongShapeKind {
                name: shape.name.to_string(),
                expected,
                actual: shape.kind,
            });
        }
        if map.contains_key(shape.name) {
            return Err(Error::DuplicateShape(shape.name.to_string()));
        }
        map.insert(shape.name, shape);
        Ok(())
    }

    pub fn resource(&self, resource_type: &str) -> Option<&'static StructureShape> {
        self.resources.get(resource_type).copied()
    }

    pub fn datatype(&self, name: &str) -> Option<&'static StructureShape> {
        self.datatypes.get(name).copied()
    }

    pub fn contains_resource(&self, resource_type: &str) -> bool {
        self.resources.contains_key(resource_type)
    }

    /// An empty resource of the given type.
    pub fn new_resource(&self, resource_type: &str) -> Option<Resource> {
        self.resource(resource_type).map(Resource::new)
    }

    /// Registered resource types, sorted.
    pub fn resource_types(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.resources.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Registered datatype names, sorted.
    pub fn datatype_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.datatypes.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PATIENT, PATIENT_CONTACT, QUANTITY};

    #[test]
    fn duplicates_are_rejected() {
        let mut registry = Registry::new();
        registry.register_resource(&PATIENT).unwrap();
        let err = registry.register_resource(&PATIENT).unwrap_err();
        assert_eq!(err, Error::DuplicateShape("Patient".into()));
    }

    #[test]
    fn wrong_kinds_are_rejected() {
        let mut registry = Registry::new();
        assert!(matches!(
            registry.register_resource(&QUANTITY),
            Err(Error::WrongShapeKind { .. })
        ));
        assert!(matches!(
            registry.register_datatype(&PATIENT_CONTACT),
            Err(Error::WrongShapeKind { .. })
        ));
        registry.register_datatype(&QUANTITY).unwrap();
        assert!(registry.datatype("Quantity").is_some());
    }

    #[test]
    fn r4_lookup() {
        let registry = Registry::r4();
        assert_eq!(registry.resource("Patient").map(|s| s.name), Some("Patient"));
        assert!(registry.resource("Quantity").is_none());
        assert!(registry.datatype("Quantity").is_some());
        assert!(registry.resource("NotAResource").is_none());
        assert_eq!(
            registry.new_resource("Observation").map(|r| r.resource_type()),
            Some("Observation")
        );
        let types = registry.resource_types();
        assert!(types.windows(2).all(|w| w[0] < w[1]));
    }
}
