use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A conveyance of information from a sender to receivers.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct Communication {
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
    pub part_of: Option<Vec<Reference>>,
    pub in_response_to: Option<Vec<Reference>>,
    pub status: Coded<EventStatus>,
    pub status_reason: Option<CodeableConcept>,
    pub category: Option<Vec<CodeableConcept>>,
    pub priority: Option<Coded<RequestPriority>>,
    pub medium: Option<Vec<CodeableConcept>>,
    pub subject: Option<Reference>,
    pub topic: Option<CodeableConcept>,
    pub about: Option<Vec<Reference>>,
    pub encounter: Option<Reference>,
    pub sent: Option<DateTime>,
    pub received: Option<DateTime>,
    pub recipient: Option<Vec<Reference>>,
    pub sender: Option<Reference>,
    pub reason: Option<Vec<CodeableReference>>,
    pub payload: Option<Vec<CommunicationPayload>>,
    pub note: Option<Vec<Annotation>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct CommunicationPayload {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    #[fhir(flatten, required)]
    pub content: Option<CommunicationContent>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum CommunicationContent {
    #[fhir(rename = "contentAttachment")]
    Attachment(Attachment),
    #[fhir(rename = "contentReference")]
    Reference(Reference),
    #[fhir(rename = "contentCodeableConcept")]
    CodeableConcept(CodeableConcept),
}
