use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// The people and organizations planning or participating in a patient's
/// care.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct CareTeam {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub status: Option<Coded<CareTeamStatus>>,
    pub category: Option<Vec<CodeableConcept>>,
    pub name: Option<String>,
    pub subject: Option<Reference>,
    pub period: Option<Period>,
    pub participant: Option<Vec<CareTeamParticipant>>,
    pub reason: Option<Vec<CodeableReference>>,
    pub managing_organization: Option<Vec<Reference>>,
    pub telecom: Option<Vec<ContactPoint>>,
    pub note: Option<Vec<Annotation>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum CareTeamStatus {
    Proposed,
    Active,
    Suspended,
    Inactive,
    EnteredInError,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct CareTeamParticipant {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub role: Option<CodeableConcept>,
    pub member: Option<Reference>,
    pub on_behalf_of: Option<Reference>,
    #[fhir(flatten)]
    pub coverage: Option<CareTeamCoverage>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum CareTeamCoverage {
    #[fhir(rename = "coveragePeriod")]
    Period(Period),
    #[fhir(rename = "coverageTiming")]
    Timing(Timing),
}
