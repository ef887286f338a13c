use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// A propensity to an adverse reaction to a substance.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct AllergyIntolerance {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub clinical_status: Option<CodeableConcept>,
    pub verification_status: Option<CodeableConcept>,
    pub r#type: Option<CodeableConcept>,
    pub category: Option<Vec<Coded<AllergyIntoleranceCategory>>>,
    pub criticality: Option<Coded<AllergyIntoleranceCriticality>>,
    pub code: Option<CodeableConcept>,
    pub patient: Reference,
    pub encounter: Option<Reference>,
    #[fhir(flatten)]
    pub onset: Option<AllergyIntoleranceOnset>,
    pub recorded_date: Option<DateTime>,
    pub participant: Option<Vec<AllergyIntoleranceParticipant>>,
    pub last_occurrence: Option<DateTime>,
    pub note: Option<Vec<Annotation>>,
    pub reaction: Option<Vec<AllergyIntoleranceReaction>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum AllergyIntoleranceCategory {
    Food,
    Medication,
    Environment,
    Biologic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum AllergyIntoleranceCriticality {
    Low,
    High,
    UnableToAssess,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum AllergyIntoleranceOnset {
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

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct AllergyIntoleranceParticipant {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub function: Option<CodeableConcept>,
    pub actor: Reference,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum AllergyIntoleranceSeverity {
    Mild,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct AllergyIntoleranceReaction {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub substance: Option<CodeableConcept>,
    pub manifestation: Vec<CodeableReference>,
    pub description: Option<String>,
    pub onset: Option<DateTime>,
    pub severity: Option<Coded<AllergyIntoleranceSeverity>>,
    pub exposure_route: Option<CodeableConcept>,
    pub note: Option<Vec<Annotation>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
