//! Structure shapes
//!
//! A [`StructureShape`] is the static description of a resource, complex
//! datatype or backbone element: its name, its base, and the ordered list of
//! fields it adds. The codec walks these descriptions instead of generated
//! per-type code. Recursive structures point back at their own static, e.g.
//! `CodeSystem.concept.concept` is a backbone field of `CODE_SYSTEM_CONCEPT`.

use crate::primitive::PrimitiveType;
use std::fmt;

/// What a shape describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Resource,
    ComplexType,
    Backbone,
}

/// The inherited part of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    Element,
    BackboneElement,
    Resource,
    DomainResource,
}

impl Base {
    /// Fields contributed by the base, in the order they are emitted.
    pub fn fields(self) -> &'static [FieldDef] {
        match self {
            Base::Element => ELEMENT_FIELDS,
            Base::BackboneElement => BACKBONE_FIELDS,
            Base::Resource => RESOURCE_FIELDS,
            Base::DomainResource => DOMAIN_RESOURCE_FIELDS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Base::Element => "Element",
            Base::BackboneElement => "BackboneElement",
            Base::Resource => "Resource",
            Base::DomainResource => "DomainResource",
        }
    }
}

static ELEMENT_FIELDS: &[FieldDef] = &[build::string("id"), build::extension("extension")];

static BACKBONE_FIELDS: &[FieldDef] = &[
    build::string("id"),
    build::extension("extension"),
    build::extension("modifierExtension"),
];

static RESOURCE_FIELDS: &[FieldDef] = &[
    build::id("id"),
    build::meta("meta"),
    build::uri("implicitRules"),
    build::code("language"),
];

static DOMAIN_RESOURCE_FIELDS: &[FieldDef] = &[
    build::id("id"),
    build::meta("meta"),
    build::uri("implicitRules"),
    build::code("language"),
    build::narrative("text"),
    build::resource("contained").many(),
    build::extension("extension"),
    build::extension("modifierExtension"),
];

/// Minimum and maximum occurrences. `max: None` is `*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cardinality {
    pub min: u32,
    pub max: Option<u32>,
}

impl Cardinality {
    pub const OPTIONAL: Cardinality = Cardinality { min: 0, max: Some(1) };
    pub const REQUIRED: Cardinality = Cardinality { min: 1, max: Some(1) };
    pub const MANY: Cardinality = Cardinality { min: 0, max: None };
    pub const AT_LEAST_ONE: Cardinality = Cardinality { min: 1, max: None };

    /// Repeating fields are JSON arrays.
    pub const fn is_list(self) -> bool {
        !matches!(self.max, Some(1))
    }

    pub const fn is_required(self) -> bool {
        self.min > 0
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}..{}", self.min, max),
            None => write!(f, "{}..*", self.min),
        }
    }
}

/// Declared type of a field.
#[derive(Clone, Copy)]
pub enum FieldKind {
    Primitive(PrimitiveType),
    /// A named complex datatype, resolved through the registry.
    Complex(&'static str),
    /// An inline backbone element.
    Backbone(&'static StructureShape),
    /// Any resource, tagged by `resourceType`.
    Resource,
    /// A `name[x]` group; the listed type codes are the permitted variants.
    Choice(&'static [&'static str]),
}

impl fmt::Debug for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Primitive(p) => write!(f, "Primitive({p})"),
            FieldKind::Complex(name) => write!(f, "Complex({name})"),
            // Backbones can be recursive, print the name only.
            FieldKind::Backbone(shape) => write!(f, "Backbone({})", shape.name),
            FieldKind::Resource => f.write_str("Resource"),
            FieldKind::Choice(types) => write!(f, "Choice({})", types.join("|")),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    /// JSON key, or the choice prefix without `[x]`.
    pub name: &'static str,
    pub cardinality: Cardinality,
    pub kind: FieldKind,
    /// Closed set of codes for a required binding.
    pub binding: Option<&'static [&'static str]>,
}

impl FieldDef {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            cardinality: Cardinality::OPTIONAL,
            kind,
            binding: None,
        }
    }

    /// Sets min to 1.
    pub const fn required(self) -> Self {
        Self {
            cardinality: Cardinality {
                min: 1,
                max: self.cardinality.max,
            },
            ..self
        }
    }

    /// Sets max to `*`.
    pub const fn many(self) -> Self {
        Self {
            cardinality: Cardinality {
                min: self.cardinality.min,
                max: None,
            },
            ..self
        }
    }

    pub const fn bind(self, codes: &'static [&'static str]) -> Self {
        Self {
            binding: Some(codes),
            ..self
        }
    }

    pub const fn is_choice(&self) -> bool {
        matches!(self.kind, FieldKind::Choice(_))
    }

    /// For a choice field, the type code selected by a concrete JSON key.
    ///
    /// `valueDateTime` on `value[x]` yields `dateTime`.
    pub fn choice_type(&self, key: &str) -> Option<&'static str> {
        let FieldKind::Choice(types) = self.kind else {
            return None;
        };
        let suffix = key.strip_prefix(self.name)?;
        types
            .iter()
            .copied()
            .find(|ty| matches_capitalized(suffix, ty))
    }

    /// The concrete JSON key for one choice variant.
    pub fn choice_key(&self, type_code: &str) -> String {
        let mut key = String::with_capacity(self.name.len() + type_code.len());
        key.push_str(self.name);
        let mut chars = type_code.chars();
        if let Some(first) = chars.next() {
            key.extend(first.to_uppercase());
            key.push_str(chars.as_str());
        }
        key
    }

    /// Name as shown in paths: `value[x]` for choices.
    pub fn display_name(&self) -> String {
        if self.is_choice() {
            format!("{}[x]", self.name)
        } else {
            self.name.to_string()
        }
    }
}

fn matches_capitalized(suffix: &str, type_code: &str) -> bool {
    let (Some(s), Some(t)) = (suffix.chars().next(), type_code.chars().next()) else {
        return false;
    };
    s.is_uppercase()
        && s.to_lowercase().eq(t.to_lowercase())
        && suffix[s.len_utf8()..] == type_code[t.len_utf8()..]
}

/// Static description of a resource, datatype or backbone element.
pub struct StructureShape {
    /// Resource type, datatype name, or dotted path for backbones.
    pub name: &'static str,
    pub kind: ShapeKind,
    pub base: Base,
    /// Fields declared by this shape, after the base fields.
    pub fields: &'static [FieldDef],
}

/// A JSON key resolved against a shape.
#[derive(Debug, Clone, Copy)]
pub struct FieldMatch<'s> {
    pub def: &'s FieldDef,
    /// Set when the key selects a choice variant.
    pub choice: Option<&'static str>,
}

impl StructureShape {
    pub fn is_resource(&self) -> bool {
        self.kind == ShapeKind::Resource
    }

    /// Base fields first, then own fields.
    pub fn all_fields(&self) -> impl Iterator<Item = &'static FieldDef> {
        let own: &'static [FieldDef] = self.fields;
        self.base.fields().iter().chain(own.iter())
    }

    /// Looks up a field by its declared name (choice prefix for choices).
    pub fn field(&self, name: &str) -> Option<&'static FieldDef> {
        self.all_fields().find(|f| f.name == name)
    }

    /// Resolves a JSON key, including concrete choice keys.
    pub fn resolve_key(&self, key: &str) -> Option<FieldMatch<'static>> {
        self.all_fields().find_map(|def| {
            if def.is_choice() {
                def.choice_type(key).map(|ty| FieldMatch {
                    def,
                    choice: Some(ty),
                })
            } else if def.name == key {
                Some(FieldMatch { def, choice: None })
            } else {
                None
            }
        })
    }
}

impl fmt::Debug for StructureShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructureShape")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("base", &self.base)
            .field("fields", &self.fields)
            .finish()
    }
}

impl PartialEq for StructureShape {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || (self.name == other.name && self.kind == other.kind)
    }
}

impl Eq for StructureShape {}

/// Declares one or more static shapes.
///
/// ```ignore
/// fhir_shape! {
///     resource PATIENT = "Patient" [
///         identifier("identifier").many(),
///         boolean("active"),
///     ]
///     backbone PATIENT_LINK = "Patient.link" [
///         reference("other").required(),
///     ]
/// }
/// ```
///
/// Kinds: `resource` (DomainResource base), `base_resource` (Resource base),
/// `datatype` (Element base), `backbone_datatype` (BackboneElement base),
/// `backbone`, and `element` for nested parts of datatypes, which have no
/// `modifierExtension`.
#[macro_export]
macro_rules! fhir_shape {
    (@emit $ident:ident, $name:literal, $kind:ident, $base:ident, [$($field:expr),*]) => {
        pub static $ident: $crate::shape::StructureShape = $crate::shape::StructureShape {
            name: $name,
            kind: $crate::shape::ShapeKind::$kind,
            base: $crate::shape::Base::$base,
            fields: &[$($field),*],
        };
    };
    (@one resource $ident:ident, $name:literal, [$($field:expr),*]) => {
        $crate::fhir_shape!(@emit $ident, $name, Resource, DomainResource, [$($field),*]);
    };
    (@one base_resource $ident:ident, $name:literal, [$($field:expr),*]) => {
        $crate::fhir_shape!(@emit $ident, $name, Resource, Resource, [$($field),*]);
    };
    (@one datatype $ident:ident, $name:literal, [$($field:expr),*]) => {
        $crate::fhir_shape!(@emit $ident, $name, ComplexType, Element, [$($field),*]);
    };
    (@one backbone_datatype $ident:ident, $name:literal, [$($field:expr),*]) => {
        $crate::fhir_shape!(@emit $ident, $name, ComplexType, BackboneElement, [$($field),*]);
    };
    (@one element $ident:ident, $name:literal, [$($field:expr),*]) => {
        $crate::fhir_shape!(@emit $ident, $name, Backbone, Element, [$($field),*]);
    };
    (@one backbone $ident:ident, $name:literal, [$($field:expr),*]) => {
        $crate::fhir_shape!(@emit $ident, $name, Backbone, BackboneElement, [$($field),*]);
    };
    ($($kind:ident $ident:ident = $name:literal [$($field:expr),* $(,)?])*) => {
        $(
            $crate::fhir_shape!(@one $kind $ident, $name, [$($field),*]);
        )*
    };
}

/// Field constructors used by the catalog.
pub mod build {
    use super::{FieldDef, FieldKind, StructureShape};
    use crate::primitive::PrimitiveType;

    const fn primitive(name: &'static str, ty: PrimitiveType) -> FieldDef {
        FieldDef::new(name, FieldKind::Primitive(ty))
    }

    pub const fn boolean(name: &'static str) -> FieldDef {
        primitive(name, PrimitiveType::Boolean)
    }
    pub const fn integer(name: &'static str) -> FieldDef {
        primitive(name, PrimitiveType::Integer)
    }
    pub const fn unsigned_int(name: &'static str) -> FieldDef {
        primitive(name, PrimitiveType::UnsignedInt)
    }
    pub const fn positive_int(name: &'static str) -> FieldDef {
        primitive(name, PrimitiveType::PositiveInt)
    }
    pub const fn decimal(name: &'static str) -> FieldDef {
        primitive(name, PrimitiveType::Decimal)
    }
    pub const fn string(name: &'static str) -> FieldDef {
        primitive(name, PrimitiveType::String)
    }
    pub const fn code(name: &'static str) -> FieldDef {
        primitive(name, PrimitiveType::Code)
    }
    pub const fn id(name: &'static str) -> FieldDef {
        primitive(name, PrimitiveType::Id)
    }
    pub const fn markdown(name: &'static str) -> FieldDef {
        primitive(name, PrimitiveType::Markdown)
    }
    pub const fn uri(name: &'static str) -> FieldDef {
        primitive(name, PrimitiveType::Uri)
    }
    pub const fn url(name: &'static str) -> FieldDef {
        primitive(name, PrimitiveType::Url)
    }
    pub const fn canonical(name: &'static str) -> FieldDef {
        primitive(name, PrimitiveType::Canonical)
    }
    pub const fn oid(name: &'static str) -> FieldDef {
        primitive(name, PrimitiveType::Oid)
    }
    pub const fn uuid(name: &'static str) -> FieldDef {
        primitive(name, PrimitiveType::Uuid)
    }
    pub const fn date(name: &'static str) -> FieldDef {
        primitive(name, PrimitiveType::Date)
    }
    pub const fn date_time(name: &'static str) -> FieldDef {
        primitive(name, PrimitiveType::DateTime)
    }
    pub const fn instant(name: &'static str) -> FieldDef {
        primitive(name, PrimitiveType::Instant)
    }
    pub const fn time(name: &'static str) -> FieldDef {
        primitive(name, PrimitiveType::Time)
    }
    pub const fn base64_binary(name: &'static str) -> FieldDef {
        primitive(name, PrimitiveType::Base64Binary)
    }
    pub const fn xhtml(name: &'static str) -> FieldDef {
        primitive(name, PrimitiveType::Xhtml)
    }

    pub const fn complex(name: &'static str, datatype: &'static str) -> FieldDef {
        FieldDef::new(name, FieldKind::Complex(datatype))
    }

    /// Extension lists are always `0..*`.
    pub const fn extension(name: &'static str) -> FieldDef {
        complex(name, "Extension").many()
    }

    pub const fn backbone(name: &'static str, shape: &'static StructureShape) -> FieldDef {
        FieldDef::new(name, FieldKind::Backbone(shape))
    }

    pub const fn resource(name: &'static str) -> FieldDef {
        FieldDef::new(name, FieldKind::Resource)
    }

    pub const fn choice(name: &'static str, types: &'static [&'static str]) -> FieldDef {
        FieldDef::new(name, FieldKind::Choice(types))
    }

    macro_rules! datatype_fields {
        ($($fn_name:ident => $datatype:literal),* $(,)?) => {
            $(
                pub const fn $fn_name(name: &'static str) -> FieldDef {
                    complex(name, $datatype)
                }
            )*
        };
    }

    datatype_fields! {
        address => "Address",
        age => "Age",
        annotation => "Annotation",
        attachment => "Attachment",
        codeable_concept => "CodeableConcept",
        coding => "Coding",
        contact_detail => "ContactDetail",
        contact_point => "ContactPoint",
        contributor => "Contributor",
        count => "Count",
        data_requirement => "DataRequirement",
        distance => "Distance",
        dosage => "Dosage",
        duration => "Duration",
        element_definition => "ElementDefinition",
        expression => "Expression",
        human_name => "HumanName",
        identifier => "Identifier",
        marketing_status => "MarketingStatus",
        meta => "Meta",
        money => "Money",
        narrative => "Narrative",
        parameter_definition => "ParameterDefinition",
        period => "Period",
        population => "Population",
        prod_characteristic => "ProdCharacteristic",
        product_shelf_life => "ProductShelfLife",
        quantity => "Quantity",
        range => "Range",
        ratio => "Ratio",
        reference => "Reference",
        related_artifact => "RelatedArtifact",
        sampled_data => "SampledData",
        signature => "Signature",
        simple_quantity => "SimpleQuantity",
        substance_amount => "SubstanceAmount",
        timing => "Timing",
        trigger_definition => "TriggerDefinition",
        usage_context => "UsageContext",
    }
}

#[cfg(test)]
mod tests {
    use super::build::*;
    use super::*;

    static VALUE: FieldDef = choice("value", &["Quantity", "string", "dateTime"]);

    #[test]
    fn choice_keys_resolve_to_type_codes() {
        assert_eq!(VALUE.choice_type("valueQuantity"), Some("Quantity"));
        assert_eq!(VALUE.choice_type("valueDateTime"), Some("dateTime"));
        assert_eq!(VALUE.choice_type("valueString"), Some("string"));
        assert_eq!(VALUE.choice_type("valuestring"), None);
        assert_eq!(VALUE.choice_type("valueBoolean"), None);
        assert_eq!(VALUE.choice_type("value"), None);
        assert_eq!(VALUE.choice_key("dateTime"), "valueDateTime");
        assert_eq!(VALUE.display_name(), "value[x]");
    }

    #[test]
    fn builders_adjust_cardinality() {
        let field = code("status").required();
        assert_eq!(field.cardinality, Cardinality::REQUIRED);
        let field = reference("performer").many();
        assert!(field.cardinality.is_list());
        assert_eq!(field.cardinality.to_string(), "0..*");
        let field = coding("code").required().many();
        assert_eq!(field.cardinality, Cardinality::AT_LEAST_ONE);
    }

    fhir_shape! {
        backbone NODE = "Test.node" [
            string("label").required(),
            backbone("node", &NODE).many(),
        ]
    }

    #[test]
    fn shapes_can_recurse() {
        let child = NODE.field("node").unwrap();
        let FieldKind::Backbone(shape) = child.kind else {
            panic!("expected backbone");
        };
        assert!(std::ptr::eq(shape, &NODE));
        assert_eq!(NODE.all_fields().count(), 5);
        assert!(format!("{NODE:?}").contains("Backbone(Test.node)"));
    }

    #[test]
    fn resolve_key_finds_base_fields() {
        let m = NODE.resolve_key("modifierExtension").unwrap();
        assert_eq!(m.def.name, "modifierExtension");
        assert!(NODE.resolve_key("unknown").is_none());
    }
}
