use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// The event of a medication being given to a patient.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct MedicationAdministration {
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
    pub part_of: Option<Vec<Reference>>,
    pub status: Coded<MedicationAdministrationStatus>,
    pub status_reason: Option<Vec<CodeableConcept>>,
    pub category: Option<Vec<CodeableConcept>>,
    pub medication: CodeableReference,
    pub subject: Reference,
    pub encounter: Option<Reference>,
    pub supporting_information: Option<Vec<Reference>>,
    #[fhir(flatten, required)]
    pub occurence: Option<MedicationAdministrationOccurence>,
    pub recorded: Option<DateTime>,
    pub is_sub_potent: Option<Boolean>,
    pub sub_potent_reason: Option<Vec<CodeableConcept>>,
    pub performer: Option<Vec<MedicationAdministrationPerformer>>,
    pub reason: Option<Vec<CodeableReference>>,
    pub request: Option<Reference>,
    pub device: Option<Vec<CodeableReference>>,
    pub note: Option<Vec<Annotation>>,
    pub dosage: Option<MedicationAdministrationDosage>,
    pub event_history: Option<Vec<Reference>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum MedicationAdministrationStatus {
    InProgress,
    NotDone,
    OnHold,
    Completed,
    EnteredInError,
    Stopped,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum MedicationAdministrationOccurence {
    #[fhir(rename = "occurenceDateTime")]
    DateTime(DateTime),
    #[fhir(rename = "occurencePeriod")]
    Period(Period),
    #[fhir(rename = "occurenceTiming")]
    Timing(Timing),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct MedicationAdministrationPerformer {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub function: Option<CodeableConcept>,
    pub actor: CodeableReference,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct MedicationAdministrationDosage {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub text: Option<String>,
    pub site: Option<CodeableConcept>,
    pub route: Option<CodeableConcept>,
    pub method: Option<CodeableConcept>,
    pub dose: Option<Quantity>,
    #[fhir(flatten)]
    pub rate: Option<MedicationAdministrationRate>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum MedicationAdministrationRate {
    #[fhir(rename = "rateRatio")]
    Ratio(Ratio),
    #[fhir(rename = "rateQuantity")]
    Quantity(Quantity),
}
