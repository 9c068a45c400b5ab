use cinnabar_format::{CodecOptions, ErrorKind, JsonCodec};
use cinnabar_models::{catalog, r4, Node, Resource, Value};
use serde_json::json;
use std::fs;
use std::path::PathBuf;

fn test_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
}

/// Fixtures that decode cleanly in strict mode
fn valid_fixtures() -> Vec<(String, Vec<u8>)> {
    let mut fixtures = Vec::new();
    for entry in fs::read_dir(test_data_dir()).unwrap().flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(".json") {
            continue;
        }
        let bytes = fs::read(entry.path()).unwrap();
        if JsonCodec::default().decode(&bytes).is_ok() {
            fixtures.push((name, bytes));
        }
    }
    fixtures.sort();
    assert!(fixtures.len() >= 4, "expected valid fixtures in tests/data");
    fixtures
}

/// Nested CodeSystem concepts, `levels` deep
fn nested_code_system(levels: usize) -> String {
    let mut concept = r#"{"code":"leaf"}"#.to_string();
    for i in 1..levels {
        concept = format!(r#"{{"code":"c{i}","concept":[{concept}]}}"#);
    }
    format!(
        r#"{{"resourceType":"CodeSystem","status":"active","content":"complete","concept":[{concept}]}}"#
    )
}

#[test]
fn decode_encode_decode_is_stable() {
    let codec = JsonCodec::default();
    for (name, bytes) in valid_fixtures() {
        let first = codec.decode(&bytes).unwrap().value;
        let encoded = codec.encode(&first).unwrap();
        let second = codec
            .decode(&encoded)
            .unwrap_or_else(|e| panic!("{name}: re-decode failed: {e}"))
            .value;
        assert_eq!(first, second, "{name}: round trip changed the tree");
    }
}

#[test]
fn emission_is_idempotent() {
    let codec = JsonCodec::default();
    for (name, bytes) in valid_fixtures() {
        let once = codec.encode(&codec.decode(&bytes).unwrap().value).unwrap();
        let twice = codec.encode(&codec.decode(&once).unwrap().value).unwrap();
        assert_eq!(once, twice, "{name}: second emission differs");
    }
}

#[test]
fn discriminator_matches_the_shape() {
    let codec = JsonCodec::default();
    for resource_type in r4().resource_types() {
        let resource = r4().new_resource(resource_type).unwrap();
        let json = codec.encode_value(&resource);
        // Empty resources fail on required fields; those that encode must be tagged.
        if let Ok(json) = json {
            assert_eq!(json["resourceType"], resource_type);
            assert_eq!(json.as_object().unwrap().keys().next().unwrap(), "resourceType");
        }
    }
}

#[test]
fn contained_resources_keep_their_type() {
    let input = json!({
        "resourceType": "Observation",
        "contained": [{"resourceType": "Patient", "id": "pat"}],
        "status": "final",
        "code": {"text": "weight"},
        "subject": {"reference": "#pat"}
    });
    let codec = JsonCodec::default();
    let observation = codec.decode_value(&input).unwrap().value;
    let contained = &observation.list("contained")[0];
    let patient = contained.as_resource().unwrap();
    assert_eq!(patient.resource_type(), "Patient");
    assert_eq!(patient.id(), Some("pat"));
    assert_eq!(codec.encode_value(&observation).unwrap(), input);
}

#[test]
fn enumerations_are_closed_in_strict_mode() {
    let codec = JsonCodec::default();
    let patient = Resource::new(&catalog::PATIENT).with("gender", "robot");
    let err = codec.encode(&patient).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidEnumeration);

    let bad = json!({"resourceType": "Observation", "status": "done", "code": {}});
    let err = codec.decode_value(&bad).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidEnumeration);
    assert_eq!(err.path(), Some("Observation.status"));
}

#[test]
fn choice_uniqueness_is_enforced_on_encode() {
    let observation = Resource::new(&catalog::OBSERVATION)
        .with("status", "final")
        .with("code", Node::new().with("text", "x"))
        .with("valueBoolean", true)
        .with("valueInteger", 3);
    let err = JsonCodec::default().encode(&observation).unwrap_err();
    assert_eq!(err.path(), Some("Observation.value[x]"));
}

#[test]
fn unknown_fields_are_rejected_or_skipped() {
    let input = br#"{"resourceType":"Patient","id":"p","favouriteColour":"blue","_active":{"id":"a"}}"#;

    let err = JsonCodec::default().decode(input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownField);
    assert_eq!(err.path(), Some("Patient.favouriteColour"));

    let lenient = JsonCodec::r4(CodecOptions::lenient());
    let decoded = lenient.decode(input).unwrap();
    assert_eq!(decoded.warnings.len(), 1);
    assert_eq!(decoded.warnings[0].path, "Patient.favouriteColour");
    assert!(decoded.value.get("favouriteColour").is_none());
    assert_eq!(
        decoded.value.primitive("active").unwrap().element.as_ref().unwrap().id.as_deref(),
        Some("a")
    );
}

#[test]
fn depth_limit_is_configurable() {
    let input = nested_code_system(10);
    let codec = JsonCodec::default();
    assert!(codec.decode(input.as_bytes()).is_ok());

    let shallow = JsonCodec::r4(CodecOptions::default().with_max_recursion_depth(9));
    let err = shallow.decode(input.as_bytes()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RecursionTooDeep);
}

#[test]
fn default_depth_limit_is_the_only_limit() {
    let codec = JsonCodec::default();
    let at_limit = nested_code_system(64);
    let decoded = codec.decode(at_limit.as_bytes()).unwrap().value;
    let mut concept = decoded.nodes("concept").next().unwrap();
    let mut levels = 1;
    while let Some(child) = concept.nodes("concept").next() {
        concept = child;
        levels += 1;
    }
    assert_eq!(levels, 64);
    assert_eq!(concept.str("code"), Some("leaf"));

    let err = codec
        .decode(nested_code_system(65).as_bytes())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RecursionTooDeep);
    assert!(err.path().unwrap().starts_with("CodeSystem.concept[0].concept[0]"));
}

#[test]
fn raised_depth_limit_is_honoured() {
    let deep = JsonCodec::r4(CodecOptions::default().with_max_recursion_depth(100));
    assert!(deep.decode(nested_code_system(70).as_bytes()).is_ok());
    assert!(deep.decode(nested_code_system(100).as_bytes()).is_ok());

    let err = deep.decode(nested_code_system(101).as_bytes()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RecursionTooDeep);

    let deeper = JsonCodec::r4(CodecOptions::default().with_max_recursion_depth(200));
    assert!(deeper.decode(nested_code_system(150).as_bytes()).is_ok());
}

#[test]
fn adversarial_nesting_fails_cleanly() {
    let input = nested_code_system(500);
    let err = JsonCodec::default().decode(input.as_bytes()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RecursionTooDeep);
}

#[test]
fn malformed_input_reports_an_offset() {
    let input = b"{\"resourceType\": \"Patient\", \"id\": }";
    let err = JsonCodec::default().decode(input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedJson);
    assert!(err.path().is_none());
}

#[test]
fn built_trees_encode_in_shape_order() {
    let mut patient = r4().new_resource("Patient").unwrap();
    patient.set("birthDate", "1980-02-29");
    patient.push("name", Node::new().with("family", "Doe"));
    patient.set("active", true);
    patient.push(
        "identifier",
        Node::new()
            .with("system", "http://example.org/mrn")
            .with("value", "12345"),
    );
    let out = JsonCodec::default().encode(&patient).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        concat!(
            r#"{"resourceType":"Patient","identifier":[{"system":"http://example.org/mrn","value":"12345"}],"#,
            r#""active":true,"name":[{"family":"Doe"}],"birthDate":"1980-02-29"}"#
        )
    );
}

#[test]
fn built_trees_survive_a_round_trip() {
    let codec = JsonCodec::default();

    let mut patient = r4().new_resource("Patient").unwrap();
    patient.set("name", Node::new().with("family", "Doe").with("given", "Jane"));
    patient.set("identifier", Vec::<Value>::new());
    patient.set("active", true);
    let decoded = codec.decode(&codec.encode(&patient).unwrap()).unwrap().value;
    assert_eq!(decoded, patient);
    assert!(matches!(decoded.get("name"), Some(Value::List(_))));
    assert!(decoded.get("identifier").is_none());

    let mut observation = r4().new_resource("Observation").unwrap();
    observation.set("status", "final");
    observation.set("code", Node::new().with("text", "Body weight"));
    observation.set(
        "valueQuantity",
        Node::new()
            .with("value", 70)
            .with("unit", "kg")
            .with("system", "http://unitsofmeasure.org")
            .with("code", "kg"),
    );
    let encoded = codec.encode(&observation).unwrap();
    let decoded = codec.decode(&encoded).unwrap().value;
    assert_eq!(decoded, observation);
    assert_eq!(codec.encode(&decoded).unwrap(), encoded);
}

#[test]
fn lists_of_resources_in_parameters() {
    let input = json!({
        "resourceType": "Parameters",
        "parameter": [
            {"name": "count", "valueInteger": 2},
            {"name": "patient", "resource": {"resourceType": "Patient", "active": false}},
            {"name": "nested", "part": [{"name": "inner", "valueString": "x"}]}
        ]
    });
    let codec = JsonCodec::default();
    let parameters = codec.decode_value(&input).unwrap().value;
    let items: Vec<_> = parameters.nodes("parameter").collect();
    assert_eq!(items[0].integer("valueInteger"), Some(2));
    assert_eq!(
        items[1].resource("resource").map(|r| r.resource_type()),
        Some("Patient")
    );
    let part = items[2].nodes("part").next().unwrap();
    assert_eq!(part.str("valueString"), Some("x"));
    assert!(matches!(items[2].get("part"), Some(Value::List(_))));
    assert_eq!(codec.encode_value(&parameters).unwrap(), input);
}
