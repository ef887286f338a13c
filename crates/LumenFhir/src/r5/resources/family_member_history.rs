use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// Significant health conditions of a patient's relative.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct FamilyMemberHistory {
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
    pub status: Coded<FamilyHistoryStatus>,
    pub data_absent_reason: Option<CodeableConcept>,
    pub patient: Reference,
    pub date: Option<DateTime>,
    pub participant: Option<Vec<FamilyMemberHistoryParticipant>>,
    pub name: Option<String>,
    pub relationship: CodeableConcept,
    pub sex: Option<CodeableConcept>,
    #[fhir(flatten)]
    pub born: Option<FamilyMemberHistoryBorn>,
    #[fhir(flatten)]
    pub age: Option<FamilyMemberHistoryAge>,
    pub estimated_age: Option<Boolean>,
    #[fhir(flatten)]
    pub deceased: Option<FamilyMemberHistoryDeceased>,
    pub reason: Option<Vec<CodeableReference>>,
    pub note: Option<Vec<Annotation>>,
    pub condition: Option<Vec<FamilyMemberHistoryCondition>>,
    pub procedure: Option<Vec<FamilyMemberHistoryProcedure>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum FamilyHistoryStatus {
    Partial,
    Completed,
    EnteredInError,
    HealthUnknown,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct FamilyMemberHistoryParticipant {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub function: Option<CodeableConcept>,
    pub actor: Reference,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum FamilyMemberHistoryBorn {
    #[fhir(rename = "bornPeriod")]
    Period(Period),
    #[fhir(rename = "bornDate")]
    Date(Date),
    #[fhir(rename = "bornString")]
    String(String),
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum FamilyMemberHistoryAge {
    #[fhir(rename = "ageAge")]
    Age(Age),
    #[fhir(rename = "ageRange")]
    Range(Range),
    #[fhir(rename = "ageString")]
    String(String),
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum FamilyMemberHistoryDeceased {
    #[fhir(rename = "deceasedBoolean")]
    Boolean(Boolean),
    #[fhir(rename = "deceasedAge")]
    Age(Age),
    #[fhir(rename = "deceasedRange")]
    Range(Range),
    #[fhir(rename = "deceasedDate")]
    Date(Date),
    #[fhir(rename = "deceasedString")]
    String(String),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct FamilyMemberHistoryCondition {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: CodeableConcept,
    pub outcome: Option<CodeableConcept>,
    pub contributed_to_death: Option<Boolean>,
    #[fhir(flatten)]
    pub onset: Option<FamilyMemberHistoryConditionOnset>,
    pub note: Option<Vec<Annotation>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum FamilyMemberHistoryConditionOnset {
    #[fhir(rename = "onsetAge")]
    Age(Age),
    #[fhir(rename = "onsetRange")]
    Range(Range),
    #[fhir(rename = "onsetPeriod")]
    Period(Period),
    #[fhir(rename = "onsetString")]
    String(String),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct FamilyMemberHistoryProcedure {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: CodeableConcept,
    pub outcome: Option<CodeableConcept>,
    pub contributed_to_death: Option<Boolean>,
    #[fhir(flatten)]
    pub performed: Option<FamilyMemberHistoryProcedurePerformed>,
    pub note: Option<Vec<Annotation>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum FamilyMemberHistoryProcedurePerformed {
    #[fhir(rename = "performedAge")]
    Age(Age),
    #[fhir(rename = "performedRange")]
    Range(Range),
    #[fhir(rename = "performedPeriod")]
    Period(Period),
    #[fhir(rename = "performedString")]
    String(String),
    #[fhir(rename = "performedDateTime")]
    DateTime(DateTime),
}
