use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// A record of a medication being taken by a patient, from any source of
/// information.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct MedicationStatement {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub part_of: Option<Vec<Reference>>,
    pub status: Coded<MedicationStatementStatus>,
    pub category: Option<Vec<CodeableConcept>>,
    pub medication: CodeableReference,
    pub subject: Reference,
    pub encounter: Option<Reference>,
    #[fhir(flatten)]
    pub effective: Option<MedicationStatementEffective>,
    pub date_asserted: Option<DateTime>,
    pub information_source: Option<Vec<Reference>>,
    pub derived_from: Option<Vec<Reference>>,
    pub reason: Option<Vec<CodeableReference>>,
    pub note: Option<Vec<Annotation>>,
    pub related_clinical_information: Option<Vec<Reference>>,
    pub rendered_dosage_instruction: Option<Markdown>,
    pub dosage: Option<Vec<Dosage>>,
    pub adherence: Option<MedicationStatementAdherence>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum MedicationStatementStatus {
    Recorded,
    EnteredInError,
    Draft,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum MedicationStatementEffective {
    #[fhir(rename = "effectiveDateTime")]
    DateTime(DateTime),
    #[fhir(rename = "effectivePeriod")]
    Period(Period),
    #[fhir(rename = "effectiveTiming")]
    Timing(Timing),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct MedicationStatementAdherence {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: CodeableConcept,
    pub reason: Option<CodeableConcept>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
