use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A request for a patient to use or be provided a device.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct DeviceRequest {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub instantiates_canonical: Option<Vec<Canonical>>,
    pub instantiates_uri: Option<Vec<Uri>>,
    pub based_on: Option<Vec<Reference>>,
    pub replaces: Option<Vec<Reference>>,
    pub group_identifier: Option<Identifier>,
    pub status: Option<Coded<RequestStatus>>,
    pub intent: Coded<RequestIntent>,
    pub priority: Option<Coded<RequestPriority>>,
    pub do_not_perform: Option<Boolean>,
    pub code: CodeableReference,
    pub quantity: Option<Integer>,
    pub parameter: Option<Vec<DeviceRequestParameter>>,
    pub subject: Reference,
    pub encounter: Option<Reference>,
    #[fhir(flatten)]
    pub occurrence: Option<DeviceRequestOccurrence>,
    pub authored_on: Option<DateTime>,
    pub requester: Option<Reference>,
    pub performer: Option<CodeableReference>,
    pub reason: Option<Vec<CodeableReference>>,
    pub as_needed: Option<Boolean>,
    pub as_needed_for: Option<CodeableConcept>,
    pub insurance: Option<Vec<Reference>>,
    pub supporting_info: Option<Vec<Reference>>,
    pub note: Option<Vec<Annotation>>,
    pub relevant_history: Option<Vec<Reference>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct DeviceRequestParameter {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: Option<CodeableConcept>,
    #[fhir(flatten)]
    pub value: Option<DeviceRequestParameterValue>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum DeviceRequestParameterValue {
    #[fhir(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[fhir(rename = "valueQuantity")]
    Quantity(Quantity),
    #[fhir(rename = "valueRange")]
    Range(Range),
    #[fhir(rename = "valueBoolean")]
    Boolean(Boolean),
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum DeviceRequestOccurrence {
    #[fhir(rename = "occurrenceDateTime")]
    DateTime(DateTime),
    #[fhir(rename = "occurrencePeriod")]
    Period(Period),
    #[fhir(rename = "occurrenceTiming")]
    Timing(Timing),
}
