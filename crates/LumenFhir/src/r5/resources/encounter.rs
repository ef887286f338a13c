use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// An interaction between a patient and healthcare providers.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct Encounter {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub status: Coded<EncounterStatus>,
    pub class: Option<Vec<CodeableConcept>>,
    pub priority: Option<CodeableConcept>,
    pub r#type: Option<Vec<CodeableConcept>>,
    pub service_type: Option<Vec<CodeableReference>>,
    pub subject: Option<Reference>,
    pub subject_status: Option<CodeableConcept>,
    pub episode_of_care: Option<Vec<Reference>>,
    pub based_on: Option<Vec<Reference>>,
    pub care_team: Option<Vec<Reference>>,
    pub part_of: Option<Reference>,
    pub service_provider: Option<Reference>,
    pub participant: Option<Vec<EncounterParticipant>>,
    pub appointment: Option<Vec<Reference>>,
    pub virtual_service: Option<Vec<VirtualServiceDetail>>,
    pub actual_period: Option<Period>,
    pub planned_start_date: Option<DateTime>,
    pub planned_end_date: Option<DateTime>,
    pub length: Option<Duration>,
    pub reason: Option<Vec<EncounterReason>>,
    pub diagnosis: Option<Vec<EncounterDiagnosis>>,
    pub account: Option<Vec<Reference>>,
    pub diet_preference: Option<Vec<CodeableConcept>>,
    pub special_arrangement: Option<Vec<CodeableConcept>>,
    pub special_courtesy: Option<Vec<CodeableConcept>>,
    pub admission: Option<EncounterAdmission>,
    pub location: Option<Vec<EncounterLocation>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum EncounterStatus {
    Planned,
    InProgress,
    OnHold,
    Discharged,
    Completed,
    Cancelled,
    Discontinued,
    EnteredInError,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct EncounterParticipant {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub r#type: Option<Vec<CodeableConcept>>,
    pub period: Option<Period>,
    pub actor: Option<Reference>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct EncounterReason {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub r#use: Option<Vec<CodeableConcept>>,
    pub value: Option<Vec<CodeableReference>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct EncounterDiagnosis {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub condition: Option<Vec<CodeableReference>>,
    pub r#use: Option<Vec<CodeableConcept>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct EncounterAdmission {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub pre_admission_identifier: Option<Identifier>,
    pub origin: Option<Reference>,
    pub admit_source: Option<CodeableConcept>,
    pub re_admission: Option<CodeableConcept>,
    pub destination: Option<Reference>,
    pub discharge_disposition: Option<CodeableConcept>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum EncounterLocationStatus {
    Planned,
    Active,
    Reserved,
    Completed,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct EncounterLocation {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub location: Reference,
    pub status: Option<Coded<EncounterLocationStatus>>,
    pub form: Option<CodeableConcept>,
    pub period: Option<Period>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
