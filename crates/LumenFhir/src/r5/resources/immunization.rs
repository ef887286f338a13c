use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// The administration of a vaccine.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct Immunization {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub based_on: Option<Vec<Reference>>,
    pub status: Coded<ImmunizationStatus>,
    pub status_reason: Option<CodeableConcept>,
    pub vaccine_code: CodeableConcept,
    pub administered_product: Option<CodeableReference>,
    pub manufacturer: Option<CodeableReference>,
    pub lot_number: Option<String>,
    pub expiration_date: Option<Date>,
    pub patient: Reference,
    pub encounter: Option<Reference>,
    pub supporting_information: Option<Vec<Reference>>,
    #[fhir(flatten)]
    pub occurrence: Option<ImmunizationOccurrence>,
    pub primary_source: Option<Boolean>,
    pub information_source: Option<CodeableReference>,
    pub location: Option<Reference>,
    pub site: Option<CodeableConcept>,
    pub route: Option<CodeableConcept>,
    pub dose_quantity: Option<Quantity>,
    pub performer: Option<Vec<ImmunizationPerformer>>,
    pub note: Option<Vec<Annotation>>,
    pub reason: Option<Vec<CodeableReference>>,
    pub is_subpotent: Option<Boolean>,
    pub subpotent_reason: Option<Vec<CodeableConcept>>,
    pub program_eligibility: Option<Vec<ImmunizationProgramEligibility>>,
    pub funding_source: Option<CodeableConcept>,
    pub reaction: Option<Vec<ImmunizationReaction>>,
    pub protocol_applied: Option<Vec<ImmunizationProtocolApplied>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum ImmunizationStatus {
    Completed,
    EnteredInError,
    NotDone,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum ImmunizationOccurrence {
    #[fhir(rename = "occurrenceDateTime")]
    DateTime(DateTime),
    #[fhir(rename = "occurrenceString")]
    String(String),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ImmunizationPerformer {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub function: Option<CodeableConcept>,
    pub actor: Reference,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ImmunizationProgramEligibility {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub program: CodeableConcept,
    pub program_status: CodeableConcept,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ImmunizationReaction {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub date: Option<DateTime>,
    pub manifestation: Option<CodeableReference>,
    pub reported: Option<Boolean>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ImmunizationProtocolApplied {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub series: Option<String>,
    pub authority: Option<Reference>,
    pub target_disease: Option<Vec<CodeableConcept>>,
    pub dose_number: Option<String>,
    pub series_doses: Option<String>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
