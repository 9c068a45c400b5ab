use cinnabar_format::{
    parse_resource, parse_resource_as, serialize_resource, CodecOptions, Error, ErrorKind,
    JsonCodec,
};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

/// Helper to get test data directory
fn test_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
}

/// Helper to load a fixture
fn load(name: &str) -> Vec<u8> {
    let path = test_data_dir().join(name);
    fs::read(&path).unwrap_or_else(|_| panic!("Failed to read {}", path.display()))
}

/// The fixture re-serialized without whitespace, keys in file order
fn compact(bytes: &[u8]) -> String {
    serde_json::from_slice::<Value>(bytes)
        .expect("fixture is valid JSON")
        .to_string()
}

fn strict() -> CodecOptions {
    CodecOptions::default()
}

// ============================================================================
// Minimal Patient
// ============================================================================

#[test]
fn minimal_patient_round_trips() {
    let input = load("patient-minimal.json");
    let decoded = parse_resource(&input, &strict()).unwrap();
    assert!(decoded.is_clean());

    let patient = decoded.value;
    assert_eq!(patient.resource_type(), "Patient");
    assert_eq!(patient.id(), Some("p1"));
    assert_eq!(patient.bool("active"), Some(true));
    let names: Vec<_> = patient.nodes("name").collect();
    assert_eq!(names.len(), 1);
    assert_eq!(names[0].str("family"), Some("Doe"));
    let given: Vec<_> = names[0]
        .list("given")
        .iter()
        .filter_map(|v| v.as_primitive()?.as_str())
        .collect();
    assert_eq!(given, ["Jane"]);

    let output = serialize_resource(&patient, &strict()).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), compact(&input));
}

// ============================================================================
// Search-set Bundle
// ============================================================================

#[test]
fn searchset_bundle_dispatches_on_resource_type() {
    let input = load("bundle-searchset.json");
    let bundle = parse_resource_as(&input, "Bundle", &strict()).unwrap().value;

    let entries: Vec<_> = bundle.nodes("entry").collect();
    assert_eq!(entries.len(), 2);

    let patient = entries[0].resource("resource").unwrap().as_known().unwrap();
    assert_eq!(patient.resource_type(), "Patient");
    assert_eq!(patient.bool("active"), Some(true));

    let observation = entries[1].resource("resource").unwrap().as_known().unwrap();
    assert_eq!(observation.resource_type(), "Observation");
    let quantity = observation.node("valueQuantity").unwrap();
    assert_eq!(quantity.decimal("value").unwrap().as_str(), "72.50");
    assert_eq!(quantity.str("unit"), Some("kg"));
}

#[test]
fn searchset_bundle_encodes_byte_for_byte() {
    let input = load("bundle-searchset.json");
    let bundle = parse_resource(&input, &strict()).unwrap().value;
    let output = serialize_resource(&bundle, &strict()).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), compact(&input));
}

#[test]
fn bundle_entry_errors_carry_the_entry_path() {
    let input = br#"{
        "resourceType": "Bundle",
        "type": "searchset",
        "entry": [
            {"resource": {"resourceType": "Patient"}},
            {"resource": {
                "resourceType": "Observation",
                "status": "final",
                "code": {"text": "weight"},
                "valueQuantity": {"value": "heavy"}
            }}
        ]
    }"#;
    let err = parse_resource(input, &strict()).unwrap_err();
    assert_eq!(
        err,
        Error::WrongType {
            path: "Bundle.entry[1].resource.valueQuantity.value".into(),
            expected: "decimal".into(),
            actual: "string".into(),
        }
    );
}

// ============================================================================
// Observation choice ambiguity
// ============================================================================

#[test]
fn observation_with_a_second_value_variant_fails_to_encode() {
    let input = load("observation-quantity.json");
    let mut observation = parse_resource(&input, &strict()).unwrap().value;
    let quantity = observation.node("valueQuantity").unwrap();
    assert_eq!(quantity.decimal("value").unwrap().as_str(), "5.4");
    assert_eq!(quantity.str("unit"), Some("mg/dL"));

    observation.set("valueString", "high");
    let err = serialize_resource(&observation, &strict()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AmbiguousChoice);
    assert_eq!(err.path(), Some("Observation.value[x]"));
}

#[test]
fn observation_with_two_value_variants_is_rejected() {
    let input = load("observation-ambiguous.json");
    let err = parse_resource(&input, &strict()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AmbiguousChoice);
    assert_eq!(err.path(), Some("Observation.value[x]"));
    match err {
        Error::AmbiguousChoice { variants, .. } => {
            assert_eq!(variants, vec!["valueQuantity", "valueString"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // lenient mode does not relax choice uniqueness
    let err = parse_resource(&input, &CodecOptions::lenient()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AmbiguousChoice);
}

// ============================================================================
// CodeSystem recursion
// ============================================================================

#[test]
fn nested_concepts_decode_three_levels_deep() {
    let input = load("codesystem-nested.json");
    let system = parse_resource(&input, &strict()).unwrap().value;

    let trunk = system.nodes("concept").next().unwrap();
    let thorax = trunk.nodes("concept").next().unwrap();
    let heart = thorax.nodes("concept").next().unwrap();
    assert_eq!(heart.str("code"), Some("heart"));
    assert!(heart.get("concept").is_none());
}

#[test]
fn nested_concepts_exceed_a_depth_of_two() {
    let input = load("codesystem-nested.json");
    let options = strict().with_max_recursion_depth(2);
    let err = parse_resource(&input, &options).unwrap_err();
    assert_eq!(
        err,
        Error::RecursionTooDeep {
            path: "CodeSystem.concept[0].concept[0].concept[0]".into(),
            limit: 2,
        }
    );
}

// ============================================================================
// Unknown enumeration value
// ============================================================================

#[test]
fn unknown_gender_fails_in_strict_mode() {
    let input = load("patient-unknown-gender.json");
    let err = parse_resource(&input, &strict()).unwrap_err();
    match err {
        Error::InvalidEnumeration {
            path,
            value,
            allowed,
        } => {
            assert_eq!(path, "Patient.gender");
            assert_eq!(value, "martian");
            assert!(allowed.contains(&"unknown"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unknown_gender_warns_in_lenient_mode() {
    let input = load("patient-unknown-gender.json");
    let lenient = CodecOptions::lenient();
    let decoded = parse_resource(&input, &lenient).unwrap();
    assert_eq!(decoded.warnings.len(), 1);
    assert_eq!(decoded.warnings[0].kind, ErrorKind::InvalidEnumeration);
    assert_eq!(decoded.warnings[0].path, "Patient.gender");
    assert_eq!(decoded.value.str("gender"), Some("martian"));

    let output = serialize_resource(&decoded.value, &lenient).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), compact(&input));
}

// ============================================================================
// Primitive extension sibling
// ============================================================================

#[test]
fn birth_date_sibling_is_preserved() {
    let input = load("patient-birthdate-extension.json");
    let patient = parse_resource(&input, &strict()).unwrap().value;

    let birth_date = patient.primitive("birthDate").unwrap();
    assert_eq!(birth_date.as_str(), Some("1970-01-01"));
    let element = birth_date.element.as_ref().unwrap();
    assert_eq!(element.extension.len(), 1);
    assert_eq!(
        element.extension[0].str("url"),
        Some("http://hl7.org/fhir/StructureDefinition/patient-birthTime")
    );
    assert_eq!(
        element.extension[0].str("valueDateTime"),
        Some("1970-01-01T08:30:00+01:00")
    );

    let output = serialize_resource(&patient, &strict()).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), compact(&input));
}

#[test]
fn partial_birth_date_keeps_its_precision_extension() {
    let input = load("patient-birthdate-precision.json");
    let patient = parse_resource(&input, &strict()).unwrap().value;

    let birth_date = patient.primitive("birthDate").unwrap();
    assert_eq!(birth_date.as_str(), Some("1970"));
    let extension = &birth_date.element.as_ref().unwrap().extension[0];
    assert_eq!(extension.str("url"), Some("http://example/precision"));
    assert_eq!(extension.str("valueCode"), Some("year"));

    let output = serialize_resource(&patient, &strict()).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), compact(&input));
}

#[test]
fn sibling_alone_satisfies_a_value() {
    let input = br#"{
        "resourceType": "Patient",
        "_gender": {"extension": [{"url": "http://example.org/why", "valueString": "withheld"}]}
    }"#;
    let patient = parse_resource(input, &strict()).unwrap().value;
    let gender = patient.primitive("gender").unwrap();
    assert!(gender.value.is_none());
    assert!(gender.element.is_some());

    let output = JsonCodec::default().encode_value(&patient).unwrap();
    assert!(output.get("gender").is_none());
    assert_eq!(output["_gender"]["extension"][0]["valueString"], "withheld");
}

// ============================================================================
// Required fields
// ============================================================================

fn decode_error(input: serde_json::Value) -> Error {
    JsonCodec::default().decode_value(&input).unwrap_err()
}

#[test]
fn observation_without_status_is_rejected() {
    let err = decode_error(serde_json::json!({
        "resourceType": "Observation",
        "code": {"text": "x"}
    }));
    assert_eq!(err.kind(), ErrorKind::MissingRequiredField);
    assert_eq!(err.path(), Some("Observation.status"));
}

#[test]
fn operation_outcome_needs_an_issue() {
    let err = decode_error(serde_json::json!({"resourceType": "OperationOutcome"}));
    assert_eq!(err.kind(), ErrorKind::MissingRequiredField);
    assert_eq!(err.path(), Some("OperationOutcome.issue"));

    let err = decode_error(serde_json::json!({"resourceType": "OperationOutcome", "issue": []}));
    assert_eq!(err.kind(), ErrorKind::CardinalityViolation);
    assert_eq!(err.path(), Some("OperationOutcome.issue"));

    let ok = JsonCodec::default().decode_value(&serde_json::json!({
        "resourceType": "OperationOutcome",
        "issue": [{"severity": "error", "code": "processing"}]
    }));
    assert!(ok.is_ok());
}

#[test]
fn audit_event_needs_recorded_and_agent() {
    let complete = serde_json::json!({
        "resourceType": "AuditEvent",
        "type": {"system": "http://dicom.nema.org/resources/ontology/DCM", "code": "110110"},
        "recorded": "2020-01-01T10:00:00Z",
        "agent": [{"requestor": true}],
        "source": {"observer": {"reference": "Device/d1"}}
    });
    assert!(JsonCodec::default().decode_value(&complete).is_ok());

    for (field, path) in [
        ("recorded", "AuditEvent.recorded"),
        ("agent", "AuditEvent.agent"),
    ] {
        let mut input = complete.clone();
        input.as_object_mut().unwrap().remove(field);
        let err = decode_error(input);
        assert_eq!(err.kind(), ErrorKind::MissingRequiredField, "{field}");
        assert_eq!(err.path(), Some(path));
    }
}

#[test]
fn provenance_needs_recorded_and_agent() {
    let complete = serde_json::json!({
        "resourceType": "Provenance",
        "target": [{"reference": "Patient/p1"}],
        "recorded": "2020-01-01T10:00:00Z",
        "agent": [{"who": {"reference": "Practitioner/pr1"}}]
    });
    assert!(JsonCodec::default().decode_value(&complete).is_ok());

    for (field, path) in [
        ("recorded", "Provenance.recorded"),
        ("agent", "Provenance.agent"),
    ] {
        let mut input = complete.clone();
        input.as_object_mut().unwrap().remove(field);
        let err = decode_error(input);
        assert_eq!(err.kind(), ErrorKind::MissingRequiredField, "{field}");
        assert_eq!(err.path(), Some(path));
    }

    let mut empty_agents = complete;
    empty_agents["agent"] = serde_json::json!([]);
    assert_eq!(decode_error(empty_agents).kind(), ErrorKind::CardinalityViolation);
}

// ============================================================================
// Contract valued items
// ============================================================================

#[test]
fn contract_valued_item_decodes_under_term_asset() {
    let input = serde_json::json!({
        "resourceType": "Contract",
        "term": [{
            "offer": {"text": "lease"},
            "asset": [{
                "valuedItem": [{
                    "entityCodeableConcept": {"text": "car"},
                    "unitPrice": {"value": 100, "currency": "EUR"}
                }]
            }]
        }]
    });
    let codec = JsonCodec::default();
    let contract = codec.decode_value(&input).unwrap().value;
    let term = contract.nodes("term").next().unwrap();
    let asset = term.nodes("asset").next().unwrap();
    let item = asset.nodes("valuedItem").next().unwrap();
    assert!(item.node("entityCodeableConcept").is_some());
    assert_eq!(codec.encode_value(&contract).unwrap(), input);

    let err = decode_error(serde_json::json!({
        "resourceType": "Contract",
        "valuedItem": [{"entityCodeableConcept": {"text": "car"}}]
    }));
    assert_eq!(err.kind(), ErrorKind::UnknownField);
    assert_eq!(err.path(), Some("Contract.valuedItem"));
}

// ============================================================================
// Unknown top-level resource types
// ============================================================================

#[test]
fn unknown_top_level_type_is_opaque_only_when_lenient() {
    let input = br#"{"resourceType":"Widget","size":3}"#;
    let err = parse_resource(input, &CodecOptions::lenient()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownResourceType);

    let lenient = JsonCodec::r4(CodecOptions::lenient());
    let decoded = lenient.decode_any(input).unwrap();
    assert_eq!(decoded.value.resource_type(), "Widget");
    assert_eq!(decoded.warnings[0].kind, ErrorKind::UnknownResourceType);

    let strict_types = JsonCodec::r4(CodecOptions::lenient().with_strict_resource_types(true));
    assert!(strict_types.decode_any(input).is_err());
}
