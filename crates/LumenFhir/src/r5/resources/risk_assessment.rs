use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A predicted outcome and its likelihood for a subject.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct RiskAssessment {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub based_on: Option<Reference>,
    pub parent: Option<Reference>,
    pub status: Coded<ObservationStatus>,
    pub method: Option<CodeableConcept>,
    pub code: Option<CodeableConcept>,
    pub subject: Reference,
    pub encounter: Option<Reference>,
    #[fhir(flatten)]
    pub occurrence: Option<RiskAssessmentOccurrence>,
    pub condition: Option<Reference>,
    pub performer: Option<Reference>,
    pub reason: Option<Vec<CodeableReference>>,
    pub basis: Option<Vec<Reference>>,
    pub prediction: Option<Vec<RiskAssessmentPrediction>>,
    pub mitigation: Option<String>,
    pub note: Option<Vec<Annotation>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum RiskAssessmentOccurrence {
    #[fhir(rename = "occurrenceDateTime")]
    DateTime(DateTime),
    #[fhir(rename = "occurrencePeriod")]
    Period(Period),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct RiskAssessmentPrediction {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub outcome: Option<CodeableConcept>,
    #[fhir(flatten)]
    pub probability: Option<RiskAssessmentProbability>,
    pub qualitative_risk: Option<CodeableConcept>,
    pub relative_risk: Option<Decimal>,
    #[fhir(flatten)]
    pub when: Option<RiskAssessmentWhen>,
    pub rationale: Option<String>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum RiskAssessmentProbability {
    #[fhir(rename = "probabilityDecimal")]
    Decimal(Decimal),
    #[fhir(rename = "probabilityRange")]
    Range(Range),
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum RiskAssessmentWhen {
    #[fhir(rename = "whenPeriod")]
    Period(Period),
    #[fhir(rename = "whenRange")]
    Range(Range),
}
