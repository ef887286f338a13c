use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// An association between a patient and a managing organization over time.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct EpisodeOfCare {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub status: Coded<EpisodeOfCareStatus>,
    pub status_history: Option<Vec<EpisodeOfCareStatusHistory>>,
    pub r#type: Option<Vec<CodeableConcept>>,
    pub reason: Option<Vec<EpisodeOfCareReason>>,
    pub diagnosis: Option<Vec<EpisodeOfCareDiagnosis>>,
    pub patient: Reference,
    pub managing_organization: Option<Reference>,
    pub period: Option<Period>,
    pub referral_request: Option<Vec<Reference>>,
    pub care_manager: Option<Reference>,
    pub care_team: Option<Vec<Reference>>,
    pub account: Option<Vec<Reference>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum EpisodeOfCareStatus {
    Planned,
    Waitlist,
    Active,
    Onhold,
    Finished,
    Cancelled,
    EnteredInError,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct EpisodeOfCareStatusHistory {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub status: Coded<EpisodeOfCareStatus>,
    pub period: Period,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct EpisodeOfCareReason {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub r#use: Option<CodeableConcept>,
    pub value: Option<Vec<CodeableReference>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct EpisodeOfCareDiagnosis {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub condition: Option<Vec<CodeableReference>>,
    pub r#use: Option<CodeableConcept>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
