use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// Technical details of a network endpoint that offers services.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct Endpoint {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub status: Coded<EndpointStatus>,
    pub connection_type: Vec<CodeableConcept>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub environment_type: Option<Vec<CodeableConcept>>,
    pub managing_organization: Option<Reference>,
    pub contact: Option<Vec<ContactPoint>>,
    pub period: Option<Period>,
    pub payload: Option<Vec<EndpointPayload>>,
    pub address: Url,
    pub header: Option<Vec<String>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum EndpointStatus {
    Active,
    Suspended,
    Error,
    Off,
    EnteredInError,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct EndpointPayload {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub r#type: Option<Vec<CodeableConcept>>,
    pub mime_type: Option<Vec<Code>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
