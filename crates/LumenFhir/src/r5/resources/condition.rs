use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A clinical condition, problem or diagnosis.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct Condition {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub clinical_status: CodeableConcept,
    pub verification_status: Option<CodeableConcept>,
    pub category: Option<Vec<CodeableConcept>>,
    pub severity: Option<CodeableConcept>,
    pub code: Option<CodeableConcept>,
    pub body_site: Option<Vec<CodeableConcept>>,
    pub body_structure: Option<Reference>,
    pub subject: Reference,
    pub encounter: Option<Reference>,
    #[fhir(flatten)]
    pub onset: Option<ConditionOnset>,
    #[fhir(flatten)]
    pub abatement: Option<ConditionAbatement>,
    pub recorded_date: Option<DateTime>,
    pub participant: Option<Vec<ConditionParticipant>>,
    pub stage: Option<Vec<ConditionStage>>,
    pub evidence: Option<Vec<CodeableReference>>,
    pub note: Option<Vec<Annotation>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum ConditionOnset {
    #[fhir(rename = "onsetDateTime")]
    DateTime(DateTime),
    #[fhir(rename = "onsetAge")]
    Age(Age),
    #[fhir(rename = "onsetPeriod")]
    Period(Period),
    #[fhir(rename = "onsetRange")]
    Range(Range),
    #[fhir(rename = "onsetString")]
    String(String),
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum ConditionAbatement {
    #[fhir(rename = "abatementDateTime")]
    DateTime(DateTime),
    #[fhir(rename = "abatementAge")]
    Age(Age),
    #[fhir(rename = "abatementPeriod")]
    Period(Period),
    #[fhir(rename = "abatementRange")]
    Range(Range),
    #[fhir(rename = "abatementString")]
    String(String),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ConditionParticipant {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub function: Option<CodeableConcept>,
    pub actor: Reference,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ConditionStage {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub summary: Option<CodeableConcept>,
    pub assessment: Option<Vec<Reference>>,
    pub r#type: Option<CodeableConcept>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
