use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// An order or request for supply and administration of a medication.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct MedicationRequest {
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
    pub prior_prescription: Option<Reference>,
    pub group_identifier: Option<Identifier>,
    pub status: Coded<MedicationRequestStatus>,
    pub status_reason: Option<CodeableConcept>,
    pub status_changed: Option<DateTime>,
    pub intent: Coded<RequestIntent>,
    pub category: Option<Vec<CodeableConcept>>,
    pub priority: Option<Coded<RequestPriority>>,
    pub do_not_perform: Option<Boolean>,
    pub medication: CodeableReference,
    pub subject: Reference,
    pub information_source: Option<Vec<Reference>>,
    pub encounter: Option<Reference>,
    pub supporting_information: Option<Vec<Reference>>,
    pub authored_on: Option<DateTime>,
    pub requester: Option<Reference>,
    pub reported: Option<Boolean>,
    pub performer_type: Option<CodeableConcept>,
    pub performer: Option<Vec<Reference>>,
    pub device: Option<Vec<CodeableReference>>,
    pub recorder: Option<Reference>,
    pub reason: Option<Vec<CodeableReference>>,
    pub course_of_therapy_type: Option<CodeableConcept>,
    pub insurance: Option<Vec<Reference>>,
    pub note: Option<Vec<Annotation>>,
    pub rendered_dosage_instruction: Option<Markdown>,
    pub effective_dose_period: Option<Period>,
    pub dosage_instruction: Option<Vec<Dosage>>,
    pub dispense_request: Option<MedicationRequestDispenseRequest>,
    pub substitution: Option<MedicationRequestSubstitution>,
    pub event_history: Option<Vec<Reference>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum MedicationRequestStatus {
    Active,
    OnHold,
    Ended,
    Stopped,
    Completed,
    Cancelled,
    EnteredInError,
    Draft,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct MedicationRequestDispenseRequest {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub initial_fill: Option<MedicationRequestInitialFill>,
    pub dispense_interval: Option<Duration>,
    pub validity_period: Option<Period>,
    pub number_of_repeats_allowed: Option<UnsignedInt>,
    pub quantity: Option<Quantity>,
    pub expected_supply_duration: Option<Duration>,
    pub dispenser: Option<Reference>,
    pub dispenser_instruction: Option<Vec<Annotation>>,
    pub dose_administration_aid: Option<CodeableConcept>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct MedicationRequestInitialFill {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub quantity: Option<Quantity>,
    pub duration: Option<Duration>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct MedicationRequestSubstitution {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    #[fhir(flatten)]
    pub allowed: Option<MedicationRequestSubstitutionAllowed>,
    pub reason: Option<CodeableConcept>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum MedicationRequestSubstitutionAllowed {
    #[fhir(rename = "allowedBoolean")]
    Boolean(Boolean),
    #[fhir(rename = "allowedCodeableConcept")]
    CodeableConcept(CodeableConcept),
}
