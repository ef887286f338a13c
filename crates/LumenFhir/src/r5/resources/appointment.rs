use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// A booking of a healthcare event among patients, practitioners and
/// locations.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct Appointment {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub status: Coded<AppointmentStatus>,
    pub cancellation_reason: Option<CodeableConcept>,
    pub class: Option<Vec<CodeableConcept>>,
    pub service_category: Option<Vec<CodeableConcept>>,
    pub service_type: Option<Vec<CodeableReference>>,
    pub specialty: Option<Vec<CodeableConcept>>,
    pub appointment_type: Option<CodeableConcept>,
    pub reason: Option<Vec<CodeableReference>>,
    pub priority: Option<CodeableConcept>,
    pub description: Option<String>,
    pub replaces: Option<Vec<Reference>>,
    pub virtual_service: Option<Vec<VirtualServiceDetail>>,
    pub supporting_information: Option<Vec<Reference>>,
    pub previous_appointment: Option<Reference>,
    pub originating_appointment: Option<Reference>,
    pub start: Option<Instant>,
    pub end: Option<Instant>,
    pub minutes_duration: Option<PositiveInt>,
    pub requested_period: Option<Vec<Period>>,
    pub slot: Option<Vec<Reference>>,
    pub account: Option<Vec<Reference>>,
    pub created: Option<DateTime>,
    pub cancellation_date: Option<DateTime>,
    pub note: Option<Vec<Annotation>>,
    pub patient_instruction: Option<Vec<CodeableReference>>,
    pub based_on: Option<Vec<Reference>>,
    pub subject: Option<Reference>,
    pub participant: Vec<AppointmentParticipant>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum AppointmentStatus {
    Proposed,
    Pending,
    Booked,
    Arrived,
    Fulfilled,
    Cancelled,
    Noshow,
    EnteredInError,
    CheckedIn,
    Waitlist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum ParticipationStatus {
    Accepted,
    Declined,
    Tentative,
    NeedsAction,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct AppointmentParticipant {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub r#type: Option<Vec<CodeableConcept>>,
    pub period: Option<Period>,
    pub actor: Option<Reference>,
    pub required: Option<Boolean>,
    pub status: Coded<ParticipationStatus>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
