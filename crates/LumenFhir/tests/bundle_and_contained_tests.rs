//! Bundle dispatch, advisory diagnostics, contained-resource rules and
//! Parameters exclusivity.

mod common;

use common::{as_json, load_fixture};
use lumen_fhir_lib::r5::Resource;
use lumen_fhir_lib::{emit_resource, parse_resource, ErrorKind};

#[test]
fn bundle_entries_dispatch_to_typed_resources() {
    let input = load_fixture("bundle-searchset.json");
    let parsed = parse_resource(&input).unwrap();
    let Resource::Bundle(bundle) = &parsed.value else {
        panic!("expected a Bundle");
    };

    let entries = bundle.entry.as_ref().unwrap();
    assert_eq!(entries.len(), 2);
    assert!(matches!(
        entries[0].resource.as_deref(),
        Some(Resource::Patient(_))
    ));
    assert!(matches!(
        entries[1].resource.as_deref(),
        Some(Resource::Observation(_))
    ));
}

#[test]
fn searchset_entry_without_search_component_warns() {
    let input = load_fixture("bundle-searchset.json");
    let parsed = parse_resource(&input).unwrap();
    // The second entry has no search component.
    assert!(
        parsed
            .warnings
            .iter()
            .any(|w| w.path.contains("/entry/1") && w.message.contains("search")),
        "warnings were {:?}",
        parsed.warnings
    );
}

#[test]
fn contained_resources_parse_and_round_trip() {
    let input = load_fixture("patient-contained.json");
    let parsed = parse_resource(&input).unwrap();
    let Resource::Patient(patient) = &parsed.value else {
        panic!("expected a Patient");
    };
    let contained = patient.contained.as_ref().unwrap();
    assert_eq!(contained.len(), 1);
    let Resource::Organization(org) = &contained[0] else {
        panic!("expected a contained Organization");
    };
    assert_eq!(org.name.as_ref().unwrap().value.as_deref(), Some("Acme Healthcare"));
}

#[test]
fn contained_resource_without_id_is_rejected() {
    let doc = br#"{
        "resourceType": "Patient",
        "contained": [{"resourceType": "Organization", "name": "Acme"}]
    }"#;
    let err = parse_resource(doc).unwrap_err();
    assert_eq!(err.kind, ErrorKind::MissingRequiredField);
    assert!(err.path.contains("contained"), "path was {}", err.path);
}

#[test]
fn duplicate_contained_ids_are_rejected() {
    let doc = br#"{
        "resourceType": "Patient",
        "contained": [
            {"resourceType": "Organization", "id": "x"},
            {"resourceType": "Organization", "id": "x"}
        ]
    }"#;
    let err = parse_resource(doc).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Structural);
    assert!(err.detail.contains("duplicate"));
}

#[test]
fn nested_containment_is_rejected() {
    let doc = br#"{
        "resourceType": "Patient",
        "contained": [{
            "resourceType": "Patient",
            "id": "inner",
            "contained": [{"resourceType": "Organization", "id": "org"}]
        }]
    }"#;
    let err = parse_resource(doc).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Structural);
    assert!(err.detail.contains("contained"));
}

#[test]
fn parameters_accept_value_resource_and_parts() {
    let input = load_fixture("parameters-example.json");
    let parsed = parse_resource(&input).unwrap();
    let Resource::Parameters(parameters) = &parsed.value else {
        panic!("expected Parameters");
    };
    let params = parameters.parameter.as_ref().unwrap();
    assert_eq!(params.len(), 3);
    assert!(params[0].value.is_some());
    assert!(matches!(
        params[1].resource.as_deref(),
        Some(Resource::Patient(_))
    ));
    assert_eq!(params[2].part.as_ref().unwrap().len(), 2);
}

#[test]
fn a_parameter_cannot_carry_both_value_and_resource() {
    let doc = br#"{
        "resourceType": "Parameters",
        "parameter": [{
            "name": "broken",
            "valueBoolean": true,
            "resource": {"resourceType": "Patient", "id": "p"}
        }]
    }"#;
    let err = parse_resource(doc).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Structural);
    assert!(err.detail.contains("at most one"));
}

#[test]
fn transaction_entry_without_request_warns() {
    let doc = br#"{
        "resourceType": "Bundle",
        "type": "transaction",
        "entry": [{
            "resource": {"resourceType": "Patient", "id": "p1"}
        }]
    }"#;
    let parsed = parse_resource(doc).unwrap();
    assert!(
        parsed
            .warnings
            .iter()
            .any(|w| w.message.contains("request")),
        "warnings were {:?}",
        parsed.warnings
    );
}

#[test]
fn period_out_of_order_is_rejected() {
    let doc = br#"{
        "resourceType": "Patient",
        "name": [{
            "family": "Chalmers",
            "period": {"start": "2024-06-01", "end": "2023-01-01"}
        }]
    }"#;
    let err = parse_resource(doc).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Structural);
    assert!(err.detail.contains("period start"));
}

#[test]
fn extension_with_both_value_and_nesting_is_malformed() {
    let doc = br#"{
        "resourceType": "Patient",
        "extension": [{
            "url": "http://example.org/x",
            "valueString": "v",
            "extension": [{"url": "inner", "valueBoolean": true}]
        }]
    }"#;
    let err = parse_resource(doc).unwrap_err();
    assert_eq!(err.kind, ErrorKind::MalformedExtension);
}

#[test]
fn resource_enum_payloads_are_boxed() {
    // Parse frames carry the enum by value; it must stay pointer-sized
    // (tag + box) so document depth costs stack in pointers, not resources.
    assert!(std::mem::size_of::<Resource>() <= 2 * std::mem::size_of::<usize>());
}

#[test]
fn deeply_nested_bundles_parse_and_round_trip() {
    let mut doc = String::from(r#"{"resourceType":"Patient","id":"leaf"}"#);
    for _ in 0..64 {
        doc = format!(
            r#"{{"resourceType":"Bundle","type":"collection","entry":[{{"resource":{doc}}}]}}"#
        );
    }
    let parsed = parse_resource(doc.as_bytes()).unwrap();

    let mut depth = 0;
    let mut current = &parsed.value;
    while let Resource::Bundle(bundle) = current {
        depth += 1;
        current = bundle.entry.as_ref().unwrap()[0].resource.as_deref().unwrap();
    }
    assert_eq!(depth, 64);
    assert!(matches!(current, Resource::Patient(_)));

    let output = emit_resource(&parsed.value);
    assert_eq!(as_json(doc.as_bytes()), as_json(&output));
}

#[test]
fn emitted_bundle_keeps_entry_resource_types() {
    let input = load_fixture("bundle-searchset.json");
    let parsed = parse_resource(&input).unwrap();
    let tree = as_json(&emit_resource(&parsed.value));
    assert_eq!(tree["entry"][0]["resource"]["resourceType"], "Patient");
    assert_eq!(tree["entry"][1]["resource"]["resourceType"], "Observation");
}
