use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// An order for a procedure, diagnostic or other service.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct ServiceRequest {
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
    pub requisition: Option<Identifier>,
    pub status: Coded<RequestStatus>,
    pub intent: Coded<RequestIntent>,
    pub category: Option<Vec<CodeableConcept>>,
    pub priority: Option<Coded<RequestPriority>>,
    pub do_not_perform: Option<Boolean>,
    pub code: Option<CodeableReference>,
    pub order_detail: Option<Vec<ServiceRequestOrderDetail>>,
    #[fhir(flatten)]
    pub quantity: Option<ServiceRequestQuantity>,
    pub subject: Reference,
    pub focus: Option<Vec<Reference>>,
    pub encounter: Option<Reference>,
    #[fhir(flatten)]
    pub occurrence: Option<ServiceRequestOccurrence>,
    #[fhir(flatten)]
    pub as_needed: Option<ServiceRequestAsNeeded>,
    pub authored_on: Option<DateTime>,
    pub requester: Option<Reference>,
    pub performer_type: Option<CodeableConcept>,
    pub performer: Option<Vec<Reference>>,
    pub location: Option<Vec<CodeableReference>>,
    pub reason: Option<Vec<CodeableReference>>,
    pub insurance: Option<Vec<Reference>>,
    pub supporting_info: Option<Vec<CodeableReference>>,
    pub specimen: Option<Vec<Reference>>,
    pub body_site: Option<Vec<CodeableConcept>>,
    pub body_structure: Option<Reference>,
    pub note: Option<Vec<Annotation>>,
    pub patient_instruction: Option<Vec<ServiceRequestPatientInstruction>>,
    pub relevant_history: Option<Vec<Reference>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ServiceRequestOrderDetail {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub parameter_focus: Option<CodeableReference>,
    pub parameter: Vec<ServiceRequestOrderDetailParameter>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ServiceRequestOrderDetailParameter {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: CodeableConcept,
    #[fhir(flatten, required)]
    pub value: Option<ServiceRequestParameterValue>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum ServiceRequestParameterValue {
    #[fhir(rename = "valueQuantity")]
    Quantity(Quantity),
    #[fhir(rename = "valueRatio")]
    Ratio(Ratio),
    #[fhir(rename = "valueRange")]
    Range(Range),
    #[fhir(rename = "valueBoolean")]
    Boolean(Boolean),
    #[fhir(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[fhir(rename = "valueString")]
    String(String),
    #[fhir(rename = "valuePeriod")]
    Period(Period),
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum ServiceRequestQuantity {
    #[fhir(rename = "quantityQuantity")]
    Quantity(Quantity),
    #[fhir(rename = "quantityRatio")]
    Ratio(Ratio),
    #[fhir(rename = "quantityRange")]
    Range(Range),
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum ServiceRequestOccurrence {
    #[fhir(rename = "occurrenceDateTime")]
    DateTime(DateTime),
    #[fhir(rename = "occurrencePeriod")]
    Period(Period),
    #[fhir(rename = "occurrenceTiming")]
    Timing(Timing),
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum ServiceRequestAsNeeded {
    #[fhir(rename = "asNeededBoolean")]
    Boolean(Boolean),
    #[fhir(rename = "asNeededCodeableConcept")]
    CodeableConcept(CodeableConcept),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ServiceRequestPatientInstruction {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    #[fhir(flatten)]
    pub instruction: Option<ServiceRequestInstruction>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum ServiceRequestInstruction {
    #[fhir(rename = "instructionMarkdown")]
    Markdown(Markdown),
    #[fhir(rename = "instructionReference")]
    Reference(Reference),
}
