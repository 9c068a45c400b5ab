//! Complex datatypes
//!
//! One shape per datatype concept. Quantity and its constrained profiles
//! (Age, Count, Distance, Duration, MoneyQuantity, SimpleQuantity) share a
//! field list, since R4 JSON writes them identically.

use super::codes;
use crate::shape::build::*;
use crate::shape::{Base, FieldDef, ShapeKind, StructureShape};

/// Types permitted for open `[x]` elements (`Extension.value[x]`,
/// `ElementDefinition.fixed[x]`, ...).
pub const OPEN_TYPES: &[&str] = &[
    "base64Binary",
    "boolean",
    "canonical",
    "code",
    "date",
    "dateTime",
    "decimal",
    "id",
    "instant",
    "integer",
    "markdown",
    "oid",
    "positiveInt",
    "string",
    "time",
    "unsignedInt",
    "uri",
    "url",
    "uuid",
    "Address",
    "Age",
    "Annotation",
    "Attachment",
    "CodeableConcept",
    "Coding",
    "ContactPoint",
    "Count",
    "Distance",
    "Duration",
    "HumanName",
    "Identifier",
    "Money",
    "Period",
    "Quantity",
    "Range",
    "Ratio",
    "Reference",
    "SampledData",
    "Signature",
    "Timing",
    "ContactDetail",
    "Contributor",
    "DataRequirement",
    "Expression",
    "ParameterDefinition",
    "RelatedArtifact",
    "TriggerDefinition",
    "UsageContext",
    "Dosage",
    "Meta",
];

const QUANTITY_FIELDS: &[FieldDef] = &[
    decimal("value"),
    code("comparator").bind(codes::QUANTITY_COMPARATOR),
    string("unit"),
    uri("system"),
    code("code"),
];

const SIMPLE_QUANTITY_FIELDS: &[FieldDef] = &[
    decimal("value"),
    string("unit"),
    uri("system"),
    code("code"),
];

macro_rules! quantity_profile {
    ($($ident:ident = $name:literal => $fields:ident),* $(,)?) => {
        $(
            pub static $ident: StructureShape = StructureShape {
                name: $name,
                kind: ShapeKind::ComplexType,
                base: Base::Element,
                fields: $fields,
            };
        )*
    };
}

quantity_profile! {
    QUANTITY = "Quantity" => QUANTITY_FIELDS,
    AGE = "Age" => QUANTITY_FIELDS,
    COUNT = "Count" => QUANTITY_FIELDS,
    DISTANCE = "Distance" => QUANTITY_FIELDS,
    DURATION = "Duration" => QUANTITY_FIELDS,
    MONEY_QUANTITY = "MoneyQuantity" => QUANTITY_FIELDS,
    SIMPLE_QUANTITY = "SimpleQuantity" => SIMPLE_QUANTITY_FIELDS,
}

fhir_shape! {
    // Carrier for `_name` siblings: only the inherited id and extension.
    datatype ELEMENT = "Element" []

    datatype EXTENSION = "Extension" [
        uri("url").required(),
        choice("value", OPEN_TYPES),
    ]

    datatype NARRATIVE = "Narrative" [
        code("status").required().bind(codes::NARRATIVE_STATUS),
        xhtml("div").required(),
    ]

    datatype META = "Meta" [
        id("versionId"),
        instant("lastUpdated"),
        uri("source"),
        canonical("profile").many(),
        coding("security").many(),
        coding("tag").many(),
    ]

    datatype CODING = "Coding" [
        uri("system"),
        string("version"),
        code("code"),
        string("display"),
        boolean("userSelected"),
    ]

    datatype CODEABLE_CONCEPT = "CodeableConcept" [
        coding("coding").many(),
        string("text"),
    ]

    datatype IDENTIFIER = "Identifier" [
        code("use").bind(codes::IDENTIFIER_USE),
        codeable_concept("type"),
        uri("system"),
        string("value"),
        period("period"),
        reference("assigner"),
    ]

    datatype REFERENCE = "Reference" [
        string("reference"),
        uri("type"),
        identifier("identifier"),
        string("display"),
    ]

    datatype PERIOD = "Period" [
        date_time("start"),
        date_time("end"),
    ]

    datatype RANGE = "Range" [
        simple_quantity("low"),
        simple_quantity("high"),
    ]

    datatype RATIO = "Ratio" [
        quantity("numerator"),
        quantity("denominator"),
    ]

    datatype MONEY = "Money" [
        decimal("value"),
        code("currency"),
    ]

    datatype ANNOTATION = "Annotation" [
        choice("author", &["Reference", "string"]),
        date_time("time"),
        markdown("text").required(),
    ]

    datatype ATTACHMENT = "Attachment" [
        code("contentType"),
        code("language"),
        base64_binary("data"),
        url("url"),
        unsigned_int("size"),
        base64_binary("hash"),
        string("title"),
        date_time("creation"),
    ]

    datatype CONTACT_POINT = "ContactPoint" [
        code("system").bind(codes::CONTACT_POINT_SYSTEM),
        string("value"),
        code("use").bind(codes::CONTACT_POINT_USE),
        positive_int("rank"),
        period("period"),
    ]

    datatype CONTACT_DETAIL = "ContactDetail" [
        string("name"),
        contact_point("telecom").many(),
    ]

    datatype ADDRESS = "Address" [
        code("use").bind(codes::ADDRESS_USE),
        code("type").bind(codes::ADDRESS_TYPE),
        string("text"),
        string("line").many(),
        string("city"),
        string("district"),
        string("state"),
        string("postalCode"),
        string("country"),
        period("period"),
    ]

    datatype HUMAN_NAME = "HumanName" [
        code("use").bind(codes::NAME_USE),
        string("text"),
        string("family"),
        string("given").many(),
        string("prefix").many(),
        string("suffix").many(),
        period("period"),
    ]

    datatype SAMPLED_DATA = "SampledData" [
        simple_quantity("origin").required(),
        decimal("period").required(),
        decimal("factor"),
        decimal("lowerLimit"),
        decimal("upperLimit"),
        positive_int("dimensions").required(),
        string("data"),
    ]

    datatype SIGNATURE = "Signature" [
        coding("type").required().many(),
        instant("when").required(),
        reference("who").required(),
        reference("onBehalfOf"),
        code("targetFormat"),
        code("sigFormat"),
        base64_binary("data"),
    ]

    backbone_datatype TIMING = "Timing" [
        date_time("event").many(),
        backbone("repeat", &TIMING_REPEAT),
        codeable_concept("code"),
    ]
    element TIMING_REPEAT = "Timing.repeat" [
        choice("bounds", &["Duration", "Range", "Period"]),
        positive_int("count"),
        positive_int("countMax"),
        decimal("duration"),
        decimal("durationMax"),
        code("durationUnit").bind(codes::UNITS_OF_TIME),
        positive_int("frequency"),
        positive_int("frequencyMax"),
        decimal("period"),
        decimal("periodMax"),
        code("periodUnit").bind(codes::UNITS_OF_TIME),
        code("dayOfWeek").many().bind(codes::DAYS_OF_WEEK),
        time("timeOfDay").many(),
        code("when").many().bind(codes::EVENT_TIMING),
        unsigned_int("offset"),
    ]

    datatype USAGE_CONTEXT = "UsageContext" [
        coding("code").required(),
        choice("value", &["CodeableConcept", "Quantity", "Range", "Reference"]).required(),
    ]

    datatype CONTRIBUTOR = "Contributor" [
        code("type").required().bind(codes::CONTRIBUTOR_TYPE),
        string("name").required(),
        contact_detail("contact").many(),
    ]

    datatype DATA_REQUIREMENT = "DataRequirement" [
        code("type").required(),
        canonical("profile").many(),
        choice("subject", &["CodeableConcept", "Reference"]),
        string("mustSupport").many(),
        backbone("codeFilter", &DATA_REQUIREMENT_CODE_FILTER).many(),
        backbone("dateFilter", &DATA_REQUIREMENT_DATE_FILTER).many(),
        positive_int("limit"),
        backbone("sort", &DATA_REQUIREMENT_SORT).many(),
    ]
    element DATA_REQUIREMENT_CODE_FILTER = "DataRequirement.codeFilter" [
        string("path"),
        string("searchParam"),
        canonical("valueSet"),
        coding("code").many(),
    ]
    element DATA_REQUIREMENT_DATE_FILTER = "DataRequirement.dateFilter" [
        string("path"),
        string("searchParam"),
        choice("value", &["dateTime", "Period", "Duration"]),
    ]
    element DATA_REQUIREMENT_SORT = "DataRequirement.sort" [
        string("path").required(),
        code("direction").required().bind(codes::SORT_DIRECTION),
    ]

    datatype EXPRESSION = "Expression" [
        string("description"),
        id("name"),
        code("language").required(),
        string("expression"),
        uri("reference"),
    ]

    datatype PARAMETER_DEFINITION = "ParameterDefinition" [
        code("name"),
        code("use").required().bind(codes::OPERATION_PARAMETER_USE),
        integer("min"),
        string("max"),
        string("documentation"),
        code("type").required(),
        canonical("profile"),
    ]

    datatype RELATED_ARTIFACT = "RelatedArtifact" [
        code("type").required().bind(codes::RELATED_ARTIFACT_TYPE),
        string("label"),
        string("display"),
        markdown("citation"),
        url("url"),
        attachment("document"),
        canonical("resource"),
    ]

    datatype TRIGGER_DEFINITION = "TriggerDefinition" [
        code("type").required().bind(codes::TRIGGER_TYPE),
        string("name"),
        choice("timing", &["Timing", "Reference", "date", "dateTime"]),
        data_requirement("data").many(),
        expression("condition"),
    ]

    backbone_datatype DOSAGE = "Dosage" [
        integer("sequence"),
        string("text"),
        codeable_concept("additionalInstruction").many(),
        string("patientInstruction"),
        timing("timing"),
        choice("asNeeded", &["boolean", "CodeableConcept"]),
        codeable_concept("site"),
        codeable_concept("route"),
        codeable_concept("method"),
        backbone("doseAndRate", &DOSAGE_DOSE_AND_RATE).many(),
        ratio("maxDosePerPeriod"),
        simple_quantity("maxDosePerAdministration"),
        simple_quantity("maxDosePerLifetime"),
    ]
    element DOSAGE_DOSE_AND_RATE = "Dosage.doseAndRate" [
        codeable_concept("type"),
        choice("dose", &["Range", "Quantity"]),
        choice("rate", &["Ratio", "Range", "Quantity"]),
    ]

    backbone_datatype MARKETING_STATUS = "MarketingStatus" [
        codeable_concept("country").required(),
        codeable_concept("jurisdiction"),
        codeable_concept("status").required(),
        period("dateRange").required(),
        date_time("restoreDate"),
    ]

    backbone_datatype POPULATION = "Population" [
        choice("age", &["Range", "CodeableConcept"]),
        codeable_concept("gender"),
        codeable_concept("race"),
        codeable_concept("physiologicalCondition"),
    ]

    backbone_datatype PROD_CHARACTERISTIC = "ProdCharacteristic" [
        quantity("height"),
        quantity("width"),
        quantity("depth"),
        quantity("weight"),
        quantity("nominalVolume"),
        quantity("externalDiameter"),
        string("shape"),
        string("color").many(),
        string("imprint").many(),
        attachment("image").many(),
        codeable_concept("scoring"),
    ]

    backbone_datatype PRODUCT_SHELF_LIFE = "ProductShelfLife" [
        identifier("identifier"),
        codeable_concept("type").required(),
        quantity("period").required(),
        codeable_concept("specialPrecautionsForStorage").many(),
    ]

    backbone_datatype SUBSTANCE_AMOUNT = "SubstanceAmount" [
        choice("amount", &["Quantity", "Range", "string"]),
        codeable_concept("amountType"),
        string("amountText"),
        backbone("referenceRange", &SUBSTANCE_AMOUNT_REFERENCE_RANGE),
    ]
    element SUBSTANCE_AMOUNT_REFERENCE_RANGE = "SubstanceAmount.referenceRange" [
        quantity("lowLimit"),
        quantity("highLimit"),
    ]

    backbone_datatype ELEMENT_DEFINITION = "ElementDefinition" [
        string("path").required(),
        code("representation").many().bind(codes::PROPERTY_REPRESENTATION),
        string("sliceName"),
        boolean("sliceIsConstraining"),
        string("label"),
        coding("code").many(),
        backbone("slicing", &ELEMENT_DEFINITION_SLICING),
        string("short"),
        markdown("definition"),
        markdown("comment"),
        markdown("requirements"),
        string("alias").many(),
        unsigned_int("min"),
        string("max"),
        backbone("base", &ELEMENT_DEFINITION_BASE),
        uri("contentReference"),
        backbone("type", &ELEMENT_DEFINITION_TYPE).many(),
        choice("defaultValue", OPEN_TYPES),
        markdown("meaningWhenMissing"),
        string("orderMeaning"),
        choice("fixed", OPEN_TYPES),
        choice("pattern", OPEN_TYPES),
        backbone("example", &ELEMENT_DEFINITION_EXAMPLE).many(),
        choice("minValue", MIN_MAX_VALUE_TYPES),
        choice("maxValue", MIN_MAX_VALUE_TYPES),
        integer("maxLength"),
        id("condition").many(),
        backbone("constraint", &ELEMENT_DEFINITION_CONSTRAINT).many(),
        boolean("mustSupport"),
        boolean("isModifier"),
        string("isModifierReason"),
        boolean("isSummary"),
        backbone("binding", &ELEMENT_DEFINITION_BINDING),
        backbone("mapping", &ELEMENT_DEFINITION_MAPPING).many(),
    ]
    element ELEMENT_DEFINITION_SLICING = "ElementDefinition.slicing" [
        backbone("discriminator", &ELEMENT_DEFINITION_DISCRIMINATOR).many(),
        string("description"),
        boolean("ordered"),
        code("rules").required().bind(codes::SLICING_RULES),
    ]
    element ELEMENT_DEFINITION_DISCRIMINATOR = "ElementDefinition.slicing.discriminator" [
        code("type").required().bind(codes::DISCRIMINATOR_TYPE),
        string("path").required(),
    ]
    element ELEMENT_DEFINITION_BASE = "ElementDefinition.base" [
        string("path").required(),
        unsigned_int("min").required(),
        string("max").required(),
    ]
    element ELEMENT_DEFINITION_TYPE = "ElementDefinition.type" [
        uri("code").required(),
        canonical("profile").many(),
        canonical("targetProfile").many(),
        code("aggregation").many().bind(codes::AGGREGATION_MODE),
        code("versioning").bind(codes::REFERENCE_VERSION_RULES),
    ]
    element ELEMENT_DEFINITION_EXAMPLE = "ElementDefinition.example" [
        string("label").required(),
        choice("value", OPEN_TYPES).required(),
    ]
    element ELEMENT_DEFINITION_CONSTRAINT = "ElementDefinition.constraint" [
        id("key").required(),
        string("requirements"),
        code("severity").required().bind(codes::CONSTRAINT_SEVERITY),
        string("human").required(),
        string("expression"),
        string("xpath"),
        canonical("source"),
    ]
    element ELEMENT_DEFINITION_BINDING = "ElementDefinition.binding" [
        code("strength").required().bind(codes::BINDING_STRENGTH),
        string("description"),
        canonical("valueSet"),
    ]
    element ELEMENT_DEFINITION_MAPPING = "ElementDefinition.mapping" [
        id("identity").required(),
        code("language"),
        string("map").required(),
        string("comment"),
    ]
}

const MIN_MAX_VALUE_TYPES: &[&str] = &[
    "date",
    "dateTime",
    "instant",
    "time",
    "decimal",
    "integer",
    "positiveInt",
    "unsignedInt",
    "Quantity",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_profiles_share_fields() {
        assert_eq!(AGE.fields.len(), QUANTITY.fields.len());
        assert!(SIMPLE_QUANTITY.field("comparator").is_none());
        assert!(DURATION.field("comparator").is_some());
    }

    #[test]
    fn extension_value_is_open() {
        let value = EXTENSION.field("value").unwrap();
        assert_eq!(value.choice_type("valueCodeableConcept"), Some("CodeableConcept"));
        assert_eq!(value.choice_type("valueBase64Binary"), Some("base64Binary"));
        assert_eq!(value.choice_type("valuePatient"), None);
    }

    #[test]
    fn timing_repeat_has_no_modifier_extension() {
        assert!(TIMING.field("modifierExtension").is_some());
        assert!(TIMING_REPEAT.field("modifierExtension").is_none());
    }
}
