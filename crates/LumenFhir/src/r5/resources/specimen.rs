use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// A sample for analysis.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct Specimen {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub accession_identifier: Option<Identifier>,
    pub status: Option<Coded<SpecimenStatus>>,
    pub r#type: Option<CodeableConcept>,
    pub subject: Option<Reference>,
    pub received_time: Option<DateTime>,
    pub parent: Option<Vec<Reference>>,
    pub request: Option<Vec<Reference>>,
    pub combined: Option<Coded<SpecimenCombined>>,
    pub role: Option<Vec<CodeableConcept>>,
    pub feature: Option<Vec<SpecimenFeature>>,
    pub collection: Option<SpecimenCollection>,
    pub processing: Option<Vec<SpecimenProcessing>>,
    pub container: Option<Vec<SpecimenContainer>>,
    pub condition: Option<Vec<CodeableConcept>>,
    pub note: Option<Vec<Annotation>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum SpecimenStatus {
    Available,
    Unavailable,
    Unsatisfactory,
    EnteredInError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum SpecimenCombined {
    Grouped,
    Pooled,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct SpecimenFeature {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub r#type: CodeableConcept,
    pub description: String,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct SpecimenCollection {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub collector: Option<Reference>,
    #[fhir(flatten)]
    pub collected: Option<SpecimenCollected>,
    pub duration: Option<Duration>,
    pub quantity: Option<Quantity>,
    pub method: Option<CodeableConcept>,
    pub device: Option<CodeableReference>,
    pub procedure: Option<Reference>,
    pub body_site: Option<CodeableReference>,
    #[fhir(flatten)]
    pub fasting_status: Option<SpecimenFastingStatus>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum SpecimenCollected {
    #[fhir(rename = "collectedDateTime")]
    DateTime(DateTime),
    #[fhir(rename = "collectedPeriod")]
    Period(Period),
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum SpecimenFastingStatus {
    #[fhir(rename = "fastingStatusCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[fhir(rename = "fastingStatusDuration")]
    Duration(Duration),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct SpecimenProcessing {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub description: Option<String>,
    pub method: Option<CodeableConcept>,
    pub additive: Option<Vec<Reference>>,
    #[fhir(flatten)]
    pub time: Option<SpecimenProcessingTime>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum SpecimenProcessingTime {
    #[fhir(rename = "timeDateTime")]
    DateTime(DateTime),
    #[fhir(rename = "timePeriod")]
    Period(Period),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct SpecimenContainer {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub device: Reference,
    pub location: Option<Reference>,
    pub specimen_quantity: Option<Quantity>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
