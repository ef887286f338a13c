use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// The header of a message exchanged between systems.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct MessageHeader {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    #[fhir(flatten, required)]
    pub event: Option<MessageHeaderEvent>,
    pub destination: Option<Vec<MessageHeaderDestination>>,
    pub sender: Option<Reference>,
    pub author: Option<Reference>,
    pub source: MessageHeaderSource,
    pub responsible: Option<Reference>,
    pub reason: Option<CodeableConcept>,
    pub response: Option<MessageHeaderResponse>,
    pub focus: Option<Vec<Reference>>,
    pub definition: Option<Canonical>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum MessageHeaderEvent {
    #[fhir(rename = "eventCoding")]
    Coding(Coding),
    #[fhir(rename = "eventCanonical")]
    Canonical(Canonical),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct MessageHeaderDestination {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    #[fhir(flatten)]
    pub endpoint: Option<MessageHeaderEndpoint>,
    pub name: Option<String>,
    pub target: Option<Reference>,
    pub receiver: Option<Reference>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum MessageHeaderEndpoint {
    #[fhir(rename = "endpointUrl")]
    Url(Url),
    #[fhir(rename = "endpointReference")]
    Reference(Reference),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct MessageHeaderSource {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    #[fhir(flatten)]
    pub endpoint: Option<MessageHeaderEndpoint>,
    pub name: Option<String>,
    pub software: Option<String>,
    pub version: Option<String>,
    pub contact: Option<ContactPoint>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum ResponseType {
    Ok,
    TransientError,
    FatalError,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct MessageHeaderResponse {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Identifier,
    pub code: Coded<ResponseType>,
    pub details: Option<Reference>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
