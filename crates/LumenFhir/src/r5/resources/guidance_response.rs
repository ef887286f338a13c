use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// The formal response of a decision support engine to a guidance request.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct GuidanceResponse {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub request_identifier: Option<Identifier>,
    pub identifier: Option<Vec<Identifier>>,
    #[fhir(flatten, required)]
    pub module: Option<GuidanceResponseModule>,
    pub status: Coded<GuidanceResponseStatus>,
    pub subject: Option<Reference>,
    pub encounter: Option<Reference>,
    pub occurrence_date_time: Option<DateTime>,
    pub performer: Option<Reference>,
    pub reason: Option<Vec<CodeableReference>>,
    pub note: Option<Vec<Annotation>>,
    pub evaluation_message: Option<Reference>,
    pub output_parameters: Option<Reference>,
    pub result: Option<Vec<Reference>>,
    pub data_requirement: Option<Vec<DataRequirement>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum GuidanceResponseStatus {
    Success,
    DataRequested,
    DataRequired,
    InProgress,
    Failure,
    EnteredInError,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum GuidanceResponseModule {
    #[fhir(rename = "moduleUri")]
    Uri(Uri),
    #[fhir(rename = "moduleCanonical")]
    Canonical(Canonical),
    #[fhir(rename = "moduleCodeableConcept")]
    CodeableConcept(CodeableConcept),
}
