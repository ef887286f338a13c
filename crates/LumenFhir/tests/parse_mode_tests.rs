//! Strict versus lenient treatment of content the model does not declare,
//! and the structural failures both modes share.

mod common;

use common::{as_json, load_fixture};
use lumen_fhir_lib::r5::{Patient, Resource};
use lumen_fhir_lib::{
    emit_resource, parse_resource, parse_resource_of, parse_resource_of_with, parse_resource_with,
    ErrorKind, ParseMode,
};

#[test]
fn lenient_mode_replays_unknown_fields() {
    let doc = br#"{
        "resourceType": "Patient",
        "id": "p1",
        "favouriteColour": "teal",
        "nested": {"anything": [1, 2, 3]}
    }"#;
    let parsed = parse_resource_with(doc, ParseMode::Lenient).unwrap();
    let Resource::Patient(patient) = &parsed.value else {
        panic!("expected a Patient");
    };
    let extra = patient.extra_fields.as_ref().unwrap();
    assert!(extra.contains_key("favouriteColour"));
    assert!(extra.contains_key("nested"));

    let tree = as_json(&emit_resource(&parsed.value));
    assert_eq!(tree["favouriteColour"], "teal");
    assert_eq!(tree["nested"]["anything"][1], 2);
}

#[test]
fn strict_mode_rejects_unknown_fields() {
    let doc = br#"{"resourceType": "Patient", "favouriteColour": "teal"}"#;
    let err = parse_resource_with(doc, ParseMode::Strict).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownField);
    assert!(err.detail.contains("favouriteColour"));
}

#[test]
fn strict_mode_accepts_clean_fixtures() {
    for fixture in [
        "patient-example.json",
        "observation-example.json",
        "bundle-searchset.json",
        "parameters-example.json",
    ] {
        let input = load_fixture(fixture);
        parse_resource_with(&input, ParseMode::Strict)
            .unwrap_or_else(|e| panic!("{fixture} failed in strict mode: {e}"));
    }
}

#[test]
fn unknown_resource_type_fails_in_both_modes() {
    let doc = br#"{"resourceType": "FrobnicationRecord"}"#;
    for mode in [ParseMode::Lenient, ParseMode::Strict] {
        let err = parse_resource_with(doc, mode).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownResourceType);
    }
}

#[test]
fn missing_resource_type_is_an_unknown_resource_type() {
    let doc = br#"{"id": "p1"}"#;
    let err = parse_resource(doc).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownResourceType);
    assert!(err.detail.contains("resourceType"));
}

#[test]
fn typed_parse_checks_the_declared_type() {
    let input = load_fixture("patient-example.json");
    let parsed = parse_resource_of::<Patient>(&input).unwrap();
    assert_eq!(parsed.value.id.as_ref().unwrap().value.as_deref(), Some("example"));

    let observation = load_fixture("observation-example.json");
    let err = parse_resource_of_with::<Patient>(&observation, ParseMode::Lenient).unwrap_err();
    assert_eq!(err.kind, ErrorKind::ResourceTypeMismatch);
}

#[test]
fn missing_required_field_is_reported_with_its_path() {
    let doc = br#"{
        "resourceType": "Observation",
        "code": {"text": "Body Weight"}
    }"#;
    let err = parse_resource(doc).unwrap_err();
    assert_eq!(err.kind, ErrorKind::MissingRequiredField);
    assert!(err.detail.contains("status"), "detail was {}", err.detail);
}

#[test]
fn mandatory_choice_parses_and_round_trips() {
    let doc = br#"{
        "resourceType": "Group",
        "type": "person",
        "membership": "definitional",
        "characteristic": [{
            "code": {"text": "smoker"},
            "valueBoolean": true,
            "exclude": false
        }]
    }"#;
    let parsed = parse_resource(doc).unwrap();
    let Resource::Group(group) = &parsed.value else {
        panic!("expected a Group");
    };
    let characteristic = &group.characteristic.as_ref().unwrap()[0];
    assert!(characteristic.value.is_some());

    let tree = as_json(&emit_resource(&parsed.value));
    assert_eq!(tree["characteristic"][0]["valueBoolean"], true);
}

#[test]
fn absent_mandatory_choice_is_rejected() {
    let doc = br#"{
        "resourceType": "Group",
        "type": "person",
        "membership": "definitional",
        "characteristic": [{
            "code": {"text": "smoker"},
            "exclude": false
        }]
    }"#;
    let err = parse_resource(doc).unwrap_err();
    assert_eq!(err.kind, ErrorKind::MissingRequiredField);
    assert!(err.detail.contains("value"), "detail was {}", err.detail);
}

#[test]
fn two_variants_of_one_choice_are_rejected() {
    let doc = br#"{
        "resourceType": "Patient",
        "deceasedBoolean": false,
        "deceasedDateTime": "2020-01-01"
    }"#;
    let err = parse_resource(doc).unwrap_err();
    assert_eq!(err.kind, ErrorKind::MultipleChoiceVariants);
}

#[test]
fn unknown_code_in_a_required_binding_is_rejected() {
    let doc = br#"{
        "resourceType": "Observation",
        "status": "finalized",
        "code": {"text": "Body Weight"}
    }"#;
    let err = parse_resource(doc).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownCodeForRequiredBinding);
    assert!(err.detail.contains("finalized"));
}

#[test]
fn error_paths_are_json_pointers() {
    let doc = br#"{
        "resourceType": "Patient",
        "name": [{"use": "official"}, {"use": "sometimes"}]
    }"#;
    let err = parse_resource(doc).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownCodeForRequiredBinding);
    assert_eq!(err.path, "/name/1/use");
}
