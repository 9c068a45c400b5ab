//! Terminology resources.

use super::codes;
use crate::shape::build::*;

fhir_shape! {
    resource CODE_SYSTEM = "CodeSystem" [
        uri("url"),
        identifier("identifier").many(),
        string("version"),
        string("name"),
        string("title"),
        code("status").required().bind(codes::PUBLICATION_STATUS),
        boolean("experimental"),
        date_time("date"),
        string("publisher"),
        contact_detail("contact").many(),
        markdown("description"),
        usage_context("useContext").many(),
        codeable_concept("jurisdiction").many(),
        markdown("purpose"),
        markdown("copyright"),
        boolean("caseSensitive"),
        canonical("valueSet"),
        code("hierarchyMeaning").bind(codes::CODE_SYSTEM_HIERARCHY_MEANING),
        boolean("compositional"),
        boolean("versionNeeded"),
        code("content").required().bind(codes::CODE_SYSTEM_CONTENT_MODE),
        canonical("supplements"),
        unsigned_int("count"),
        backbone("filter", &CODE_SYSTEM_FILTER).many(),
        backbone("property", &CODE_SYSTEM_PROPERTY).many(),
        backbone("concept", &CODE_SYSTEM_CONCEPT).many(),
    ]
    backbone CODE_SYSTEM_FILTER = "CodeSystem.filter" [
        code("code").required(),
        string("description"),
        code("operator").required().many().bind(codes::FILTER_OPERATOR),
        string("value").required(),
    ]
    backbone CODE_SYSTEM_PROPERTY = "CodeSystem.property" [
        code("code").required(),
        uri("uri"),
        string("description"),
        code("type").required().bind(codes::CONCEPT_PROPERTY_TYPE),
    ]
    backbone CODE_SYSTEM_CONCEPT = "CodeSystem.concept" [
        code("code").required(),
        string("display"),
        string("definition"),
        backbone("designation", &CODE_SYSTEM_CONCEPT_DESIGNATION).many(),
        backbone("property", &CODE_SYSTEM_CONCEPT_PROPERTY).many(),
        backbone("concept", &CODE_SYSTEM_CONCEPT).many(),
    ]
    backbone CODE_SYSTEM_CONCEPT_DESIGNATION = "CodeSystem.concept.designation" [
        code("language"),
        coding("use"),
        string("value").required(),
    ]
    backbone CODE_SYSTEM_CONCEPT_PROPERTY = "CodeSystem.concept.property" [
        code("code").required(),
        choice(
            "value",
            &["code", "Coding", "string", "integer", "boolean", "dateTime", "decimal"]
        )
        .required(),
    ]

    resource VALUE_SET = "ValueSet" [
        uri("url"),
        identifier("identifier").many(),
        string("version"),
        string("name"),
        string("title"),
        code("status").required().bind(codes::PUBLICATION_STATUS),
        boolean("experimental"),
        date_time("date"),
        string("publisher"),
        contact_detail("contact").many(),
        markdown("description"),
        usage_context("useContext").many(),
        codeable_concept("jurisdiction").many(),
        boolean("immutable"),
        markdown("purpose"),
        markdown("copyright"),
        backbone("compose", &VALUE_SET_COMPOSE),
        backbone("expansion", &VALUE_SET_EXPANSION),
    ]
    backbone VALUE_SET_COMPOSE = "ValueSet.compose" [
        date("lockedDate"),
        boolean("inactive"),
        backbone("include", &VALUE_SET_COMPOSE_INCLUDE).required().many(),
        backbone("exclude", &VALUE_SET_COMPOSE_INCLUDE).many(),
    ]
    backbone VALUE_SET_COMPOSE_INCLUDE = "ValueSet.compose.include" [
        uri("system"),
        string("version"),
        backbone("concept", &VALUE_SET_COMPOSE_INCLUDE_CONCEPT).many(),
        backbone("filter", &VALUE_SET_COMPOSE_INCLUDE_FILTER).many(),
        canonical("valueSet").many(),
    ]
    backbone VALUE_SET_COMPOSE_INCLUDE_CONCEPT = "ValueSet.compose.include.concept" [
        code("code").required(),
        string("display"),
        backbone("designation", &VALUE_SET_DESIGNATION).many(),
    ]
    backbone VALUE_SET_DESIGNATION = "ValueSet.compose.include.concept.designation" [
        code("language"),
        coding("use"),
        string("value").required(),
    ]
    backbone VALUE_SET_COMPOSE_INCLUDE_FILTER = "ValueSet.compose.include.filter" [
        code("property").required(),
        code("op").required().bind(codes::FILTER_OPERATOR),
        string("value").required(),
    ]
    backbone VALUE_SET_EXPANSION = "ValueSet.expansion" [
        uri("identifier"),
        date_time("timestamp").required(),
        integer("total"),
        integer("offset"),
        backbone("parameter", &VALUE_SET_EXPANSION_PARAMETER).many(),
        backbone("contains", &VALUE_SET_EXPANSION_CONTAINS).many(),
    ]
    backbone VALUE_SET_EXPANSION_PARAMETER = "ValueSet.expansion.parameter" [
        string("name").required(),
        choice(
            "value",
            &["string", "boolean", "integer", "decimal", "uri", "code", "dateTime"]
        ),
    ]
    backbone VALUE_SET_EXPANSION_CONTAINS = "ValueSet.expansion.contains" [
        uri("system"),
        boolean("abstract"),
        boolean("inactive"),
        string("version"),
        code("code"),
        string("display"),
        backbone("designation", &VALUE_SET_DESIGNATION).many(),
        backbone("contains", &VALUE_SET_EXPANSION_CONTAINS).many(),
    ]

    resource CONCEPT_MAP = "ConceptMap" [
        uri("url"),
        identifier("identifier"),
        string("version"),
        string("name"),
        string("title"),
        code("status").required().bind(codes::PUBLICATION_STATUS),
        boolean("experimental"),
        date_time("date"),
        string("publisher"),
        contact_detail("contact").many(),
        markdown("description"),
        usage_context("useContext").many(),
        codeable_concept("jurisdiction").many(),
        markdown("purpose"),
        markdown("copyright"),
        choice("source", &["uri", "canonical"]),
        choice("target", &["uri", "canonical"]),
        backbone("group", &CONCEPT_MAP_GROUP).many(),
    ]
    backbone CONCEPT_MAP_GROUP = "ConceptMap.group" [
        uri("source"),
        string("sourceVersion"),
        uri("target"),
        string("targetVersion"),
        backbone("element", &CONCEPT_MAP_GROUP_ELEMENT).required().many(),
        backbone("unmapped", &CONCEPT_MAP_GROUP_UNMAPPED),
    ]
    backbone CONCEPT_MAP_GROUP_ELEMENT = "ConceptMap.group.element" [
        code("code"),
        string("display"),
        backbone("target", &CONCEPT_MAP_GROUP_ELEMENT_TARGET).many(),
    ]
    backbone CONCEPT_MAP_GROUP_ELEMENT_TARGET = "ConceptMap.group.element.target" [
        code("code"),
        string("display"),
        code("equivalence").required().bind(codes::CONCEPT_MAP_EQUIVALENCE),
        string("comment"),
        backbone("dependsOn", &CONCEPT_MAP_DEPENDS_ON).many(),
        backbone("product", &CONCEPT_MAP_DEPENDS_ON).many(),
    ]
    backbone CONCEPT_MAP_DEPENDS_ON = "ConceptMap.group.element.target.dependsOn" [
        uri("property").required(),
        canonical("system"),
        string("value").required(),
        string("display"),
    ]
    backbone CONCEPT_MAP_GROUP_UNMAPPED = "ConceptMap.group.unmapped" [
        code("mode").required().bind(codes::CONCEPT_MAP_UNMAPPED_MODE),
        code("code"),
        string("display"),
        canonical("url"),
    ]

    resource NAMING_SYSTEM = "NamingSystem" [
        string("name").required(),
        code("status").required().bind(codes::PUBLICATION_STATUS),
        code("kind").required().bind(codes::NAMING_SYSTEM_TYPE),
        date_time("date").required(),
        string("publisher"),
        contact_detail("contact").many(),
        string("responsible"),
        codeable_concept("type"),
        markdown("description"),
        usage_context("useContext").many(),
        codeable_concept("jurisdiction").many(),
        string("usage"),
        backbone("uniqueId", &NAMING_SYSTEM_UNIQUE_ID).required().many(),
    ]
    backbone NAMING_SYSTEM_UNIQUE_ID = "NamingSystem.uniqueId" [
        code("type").required().bind(codes::NAMING_SYSTEM_IDENTIFIER_TYPE),
        string("value").required(),
        boolean("preferred"),
        string("comment"),
        period("period"),
    ]

    resource TERMINOLOGY_CAPABILITIES = "TerminologyCapabilities" [
        uri("url"),
        string("version"),
        string("name"),
        string("title"),
        code("status").required().bind(codes::PUBLICATION_STATUS),
        boolean("experimental"),
        date_time("date").required(),
        string("publisher"),
        contact_detail("contact").many(),
        markdown("description"),
        usage_context("useContext").many(),
        codeable_concept("jurisdiction").many(),
        markdown("purpose"),
        markdown("copyright"),
        code("kind").required().bind(codes::CAPABILITY_STATEMENT_KIND),
        backbone("software", &TERMINOLOGY_CAPABILITIES_SOFTWARE),
        backbone("implementation", &TERMINOLOGY_CAPABILITIES_IMPLEMENTATION),
        boolean("lockedDate"),
        backbone("codeSystem", &TERMINOLOGY_CAPABILITIES_CODE_SYSTEM).many(),
        backbone("expansion", &TERMINOLOGY_CAPABILITIES_EXPANSION),
        code("codeSearch").bind(codes::CODE_SEARCH_SUPPORT),
        backbone("validateCode", &TERMINOLOGY_CAPABILITIES_VALIDATE_CODE),
        backbone("translation", &TERMINOLOGY_CAPABILITIES_TRANSLATION),
        backbone("closure", &TERMINOLOGY_CAPABILITIES_CLOSURE),
    ]
    backbone TERMINOLOGY_CAPABILITIES_SOFTWARE = "TerminologyCapabilities.software" [
        string("name").required(),
        string("version"),
    ]
    backbone TERMINOLOGY_CAPABILITIES_IMPLEMENTATION = "TerminologyCapabilities.implementation" [
        string("description").required(),
        url("url"),
    ]
    backbone TERMINOLOGY_CAPABILITIES_CODE_SYSTEM = "TerminologyCapabilities.codeSystem" [
        canonical("uri"),
        backbone("version", &TERMINOLOGY_CAPABILITIES_CODE_SYSTEM_VERSION).many(),
        boolean("subsumption"),
    ]
    backbone TERMINOLOGY_CAPABILITIES_CODE_SYSTEM_VERSION = "TerminologyCapabilities.codeSystem.version" [
        string("code"),
        boolean("isDefault"),
        boolean("compositional"),
        code("language").many(),
        backbone("filter", &TERMINOLOGY_CAPABILITIES_FILTER).many(),
        code("property").many(),
    ]
    backbone TERMINOLOGY_CAPABILITIES_FILTER = "TerminologyCapabilities.codeSystem.version.filter" [
        code("code").required(),
        code("op").required().many(),
    ]
    backbone TERMINOLOGY_CAPABILITIES_EXPANSION = "TerminologyCapabilities.expansion" [
        boolean("hierarchical"),
        boolean("paging"),
        boolean("incomplete"),
        backbone("parameter", &TERMINOLOGY_CAPABILITIES_EXPANSION_PARAMETER).many(),
        markdown("textFilter"),
    ]
    backbone TERMINOLOGY_CAPABILITIES_EXPANSION_PARAMETER = "TerminologyCapabilities.expansion.parameter" [
        code("name").required(),
        string("documentation"),
    ]
    backbone TERMINOLOGY_CAPABILITIES_VALIDATE_CODE = "TerminologyCapabilities.validateCode" [
        boolean("translations").required(),
    ]
    backbone TERMINOLOGY_CAPABILITIES_TRANSLATION = "TerminologyCapabilities.translation" [
        boolean("needsMap").required(),
    ]
    backbone TERMINOLOGY_CAPABILITIES_CLOSURE = "TerminologyCapabilities.closure" [
        boolean("translation"),
    ]
}
