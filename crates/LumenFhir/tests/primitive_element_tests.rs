//! Primitive element fusion: `_field` siblings, positional arrays, null
//! padding and alignment failures.

mod common;

use common::{as_json, load_fixture};
use lumen_fhir_lib::r5::Resource;
use lumen_fhir_lib::{emit_resource, parse_resource, ErrorKind};

#[test]
fn scalar_sibling_fuses_into_one_element() {
    let input = load_fixture("patient-example.json");
    let parsed = parse_resource(&input).unwrap();
    let Resource::Patient(patient) = &parsed.value else {
        panic!("expected a Patient");
    };

    let birth = patient.birth_date.as_ref().unwrap();
    assert!(birth.value.is_some());
    let extensions = birth.extension.as_ref().unwrap();
    assert_eq!(extensions.len(), 1);
    assert_eq!(
        extensions[0].url,
        "http://hl7.org/fhir/StructureDefinition/patient-birthTime"
    );
}

#[test]
fn positional_array_entries_pair_by_index() {
    let input = load_fixture("patient-example.json");
    let parsed = parse_resource(&input).unwrap();
    let Resource::Patient(patient) = &parsed.value else {
        panic!("expected a Patient");
    };

    let given = patient.name.as_ref().unwrap()[0].given.as_ref().unwrap();
    assert_eq!(given.len(), 3);

    assert_eq!(given[0].value.as_deref(), Some("Jim"));
    assert!(given[0].extension.is_none());

    // The middle entry has no value, only an id and an extension.
    assert!(given[1].value.is_none());
    assert_eq!(given[1].id.as_deref(), Some("middle"));
    assert!(given[1].extension.is_some());

    assert_eq!(given[2].value.as_deref(), Some("Peter"));
}

#[test]
fn null_padding_is_reconstructed_on_emission() {
    let input = load_fixture("patient-example.json");
    let parsed = parse_resource(&input).unwrap();
    let output = emit_resource(&parsed.value);
    let tree = as_json(&output);

    let name = &tree["name"][0];
    assert_eq!(name["given"][1], serde_json::Value::Null);
    assert_eq!(name["_given"][0], serde_json::Value::Null);
    assert_eq!(name["_given"][2], serde_json::Value::Null);
    assert_eq!(name["_given"][1]["id"], "middle");
}

#[test]
fn misaligned_sibling_arrays_are_rejected() {
    let doc = br#"{
        "resourceType": "Patient",
        "name": [{
            "given": ["Jim", "Peter"],
            "_given": [null, null, {"id": "x"}]
        }]
    }"#;
    let err = parse_resource(doc).unwrap_err();
    assert_eq!(err.kind, ErrorKind::PrimitiveSiblingMisalignment);
    assert!(err.path.contains("given"), "path was {}", err.path);
}

#[test]
fn sibling_without_value_still_parses() {
    let doc = br#"{
        "resourceType": "Patient",
        "_birthDate": {
            "extension": [{
                "url": "http://hl7.org/fhir/StructureDefinition/data-absent-reason",
                "valueCode": "unknown"
            }]
        }
    }"#;
    let parsed = parse_resource(doc).unwrap();
    let Resource::Patient(patient) = &parsed.value else {
        panic!("expected a Patient");
    };
    let birth = patient.birth_date.as_ref().unwrap();
    assert!(birth.value.is_none());
    assert!(birth.extension.is_some());

    // Emission puts the carrier back under the underscore key, with no
    // bare value key beside it.
    let tree = as_json(&emit_resource(&parsed.value));
    assert!(tree.get("birthDate").is_none());
    assert!(tree.get("_birthDate").is_some());
}

#[test]
fn integer64_travels_as_a_json_string() {
    let doc = br#"{
        "resourceType": "Group",
        "type": "person",
        "membership": "definitional",
        "extension": [{
            "url": "http://example.org/fhir/StructureDefinition/big-count",
            "valueInteger64": "9007199254740993"
        }]
    }"#;
    let parsed = parse_resource(doc).unwrap();
    let tree = as_json(&emit_resource(&parsed.value));
    assert_eq!(tree["extension"][0]["valueInteger64"], "9007199254740993");
}

#[test]
fn malformed_date_is_rejected() {
    let doc = br#"{"resourceType": "Patient", "birthDate": "1974-13"}"#;
    let err = parse_resource(doc).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidLexicalForm);
}
