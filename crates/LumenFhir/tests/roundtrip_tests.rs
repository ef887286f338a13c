//! Whole-document round trips over the fixture corpus: parse, emit, and
//! compare the emitted tree against the input tree.

mod common;

use common::{as_json, load_fixture};
use lumen_fhir_lib::r5::{PatientDeceased, Resource};
use lumen_fhir_lib::{emit_resource, parse_resource};

fn round_trip(fixture: &str) -> (Vec<u8>, Vec<u8>) {
    let input = load_fixture(fixture);
    let parsed = parse_resource(&input).unwrap_or_else(|e| panic!("{fixture}: {e}"));
    let output = emit_resource(&parsed.value);
    (input, output)
}

#[test]
fn patient_round_trips() {
    let (input, output) = round_trip("patient-example.json");
    assert_eq!(as_json(&input), as_json(&output));
}

#[test]
fn observation_round_trips() {
    let (input, output) = round_trip("observation-example.json");
    assert_eq!(as_json(&input), as_json(&output));
}

#[test]
fn bundle_round_trips() {
    let (input, output) = round_trip("bundle-searchset.json");
    assert_eq!(as_json(&input), as_json(&output));
}

#[test]
fn contained_patient_round_trips() {
    let (input, output) = round_trip("patient-contained.json");
    assert_eq!(as_json(&input), as_json(&output));
}

#[test]
fn parameters_round_trip() {
    let (input, output) = round_trip("parameters-example.json");
    assert_eq!(as_json(&input), as_json(&output));
}

#[test]
fn resource_type_is_emitted_first() {
    let (_, output) = round_trip("patient-example.json");
    let text = std::str::from_utf8(&output).unwrap();
    assert!(
        text.starts_with("{\"resourceType\":\"Patient\""),
        "emission must lead with resourceType, got: {}",
        &text[..40.min(text.len())]
    );
}

#[test]
fn decimal_lexical_form_survives_the_round_trip() {
    let (_, output) = round_trip("observation-example.json");
    let text = std::str::from_utf8(&output).unwrap();
    // 66.30 must not collapse to 66.3; the trailing zero is significant.
    assert!(text.contains("66.30"), "decimal token was rewritten: {text}");
    assert!(text.contains("50.0"));
}

#[test]
fn partial_datetime_keeps_its_precision() {
    let (_, output) = round_trip("observation-example.json");
    let text = std::str::from_utf8(&output).unwrap();
    assert!(text.contains("\"effectiveDateTime\":\"2024-03\""));
}

#[test]
fn patient_model_shape() {
    let input = load_fixture("patient-example.json");
    let parsed = parse_resource(&input).unwrap();
    let Resource::Patient(patient) = &parsed.value else {
        panic!("expected a Patient, got {:?}", parsed.value);
    };

    assert_eq!(patient.id.as_ref().unwrap().value.as_deref(), Some("example"));
    assert_eq!(
        patient.gender.as_ref().unwrap().value.unwrap().as_str(),
        "male"
    );
    let birth = patient.birth_date.as_ref().unwrap();
    assert_eq!(birth.value.as_ref().unwrap().to_string(), "1974-12");
    assert_eq!(
        patient.deceased,
        Some(PatientDeceased::Boolean(lumen_fhir_lib::Element::new(false)))
    );

    let name = &patient.name.as_ref().unwrap()[0];
    assert_eq!(name.family.as_ref().unwrap().value.as_deref(), Some("Chalmers"));
}
