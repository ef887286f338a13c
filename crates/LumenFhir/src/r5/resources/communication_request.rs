use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A proposal or order that a communication be sent.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct CommunicationRequest {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub based_on: Option<Vec<Reference>>,
    pub replaces: Option<Vec<Reference>>,
    pub group_identifier: Option<Identifier>,
    pub status: Coded<RequestStatus>,
    pub status_reason: Option<CodeableConcept>,
    pub intent: Coded<RequestIntent>,
    pub category: Option<Vec<CodeableConcept>>,
    pub priority: Option<Coded<RequestPriority>>,
    pub do_not_perform: Option<Boolean>,
    pub medium: Option<Vec<CodeableConcept>>,
    pub subject: Option<Reference>,
    pub about: Option<Vec<Reference>>,
    pub encounter: Option<Reference>,
    pub payload: Option<Vec<CommunicationRequestPayload>>,
    #[fhir(flatten)]
    pub occurrence: Option<CommunicationRequestOccurrence>,
    pub authored_on: Option<DateTime>,
    pub requester: Option<Reference>,
    pub recipient: Option<Vec<Reference>>,
    pub information_provider: Option<Vec<Reference>>,
    pub reason: Option<Vec<CodeableReference>>,
    pub note: Option<Vec<Annotation>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct CommunicationRequestPayload {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    #[fhir(flatten, required)]
    pub content: Option<CommunicationRequestContent>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum CommunicationRequestContent {
    #[fhir(rename = "contentAttachment")]
    Attachment(Attachment),
    #[fhir(rename = "contentReference")]
    Reference(Reference),
    #[fhir(rename = "contentCodeableConcept")]
    CodeableConcept(CodeableConcept),
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum CommunicationRequestOccurrence {
    #[fhir(rename = "occurrenceDateTime")]
    DateTime(DateTime),
    #[fhir(rename = "occurrencePeriod")]
    Period(Period),
}
