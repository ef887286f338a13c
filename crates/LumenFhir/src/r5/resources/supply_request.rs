use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A request that a supply be provided.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct SupplyRequest {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub status: Option<Coded<RequestStatus>>,
    pub based_on: Option<Vec<Reference>>,
    pub category: Option<CodeableConcept>,
    pub priority: Option<Coded<RequestPriority>>,
    pub deliver_for: Option<Reference>,
    pub item: CodeableReference,
    pub quantity: Quantity,
    pub parameter: Option<Vec<SupplyRequestParameter>>,
    #[fhir(flatten)]
    pub occurrence: Option<SupplyRequestOccurrence>,
    pub authored_on: Option<DateTime>,
    pub requester: Option<Reference>,
    pub supplier: Option<Vec<Reference>>,
    pub reason: Option<Vec<CodeableReference>>,
    pub deliver_from: Option<Reference>,
    pub deliver_to: Option<Reference>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct SupplyRequestParameter {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: Option<CodeableConcept>,
    #[fhir(flatten)]
    pub value: Option<SupplyRequestParameterValue>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum SupplyRequestParameterValue {
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
pub enum SupplyRequestOccurrence {
    #[fhir(rename = "occurrenceDateTime")]
    DateTime(DateTime),
    #[fhir(rename = "occurrencePeriod")]
    Period(Period),
    #[fhir(rename = "occurrenceTiming")]
    Timing(Timing),
}
