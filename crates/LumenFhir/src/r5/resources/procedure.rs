use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// An action performed on or for a patient.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct Procedure {
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
    pub based_on: Option<Vec<Reference>>,
    pub part_of: Option<Vec<Reference>>,
    pub status: Coded<EventStatus>,
    pub status_reason: Option<CodeableConcept>,
    pub category: Option<Vec<CodeableConcept>>,
    pub code: Option<CodeableConcept>,
    pub subject: Reference,
    pub focus: Option<Reference>,
    pub encounter: Option<Reference>,
    #[fhir(flatten)]
    pub occurrence: Option<ProcedureOccurrence>,
    pub recorded: Option<DateTime>,
    pub recorder: Option<Reference>,
    #[fhir(flatten)]
    pub reported: Option<ProcedureReported>,
    pub performer: Option<Vec<ProcedurePerformer>>,
    pub location: Option<Reference>,
    pub reason: Option<Vec<CodeableReference>>,
    pub body_site: Option<Vec<CodeableConcept>>,
    pub outcome: Option<CodeableConcept>,
    pub report: Option<Vec<Reference>>,
    pub complication: Option<Vec<CodeableReference>>,
    pub follow_up: Option<Vec<CodeableConcept>>,
    pub note: Option<Vec<Annotation>>,
    pub focal_device: Option<Vec<ProcedureFocalDevice>>,
    pub used: Option<Vec<CodeableReference>>,
    pub supporting_info: Option<Vec<Reference>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum ProcedureOccurrence {
    #[fhir(rename = "occurrenceDateTime")]
    DateTime(DateTime),
    #[fhir(rename = "occurrencePeriod")]
    Period(Period),
    #[fhir(rename = "occurrenceString")]
    String(String),
    #[fhir(rename = "occurrenceAge")]
    Age(Age),
    #[fhir(rename = "occurrenceRange")]
    Range(Range),
    #[fhir(rename = "occurrenceTiming")]
    Timing(Timing),
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum ProcedureReported {
    #[fhir(rename = "reportedBoolean")]
    Boolean(Boolean),
    #[fhir(rename = "reportedReference")]
    Reference(Reference),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ProcedurePerformer {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub function: Option<CodeableConcept>,
    pub actor: Reference,
    pub on_behalf_of: Option<Reference>,
    pub period: Option<Period>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ProcedureFocalDevice {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub action: Option<CodeableConcept>,
    pub manipulated: Reference,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
