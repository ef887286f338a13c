use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// A reply to an appointment request.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct AppointmentResponse {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub appointment: Reference,
    pub proposed_new_time: Option<Boolean>,
    pub start: Option<Instant>,
    pub end: Option<Instant>,
    pub participant_type: Option<Vec<CodeableConcept>>,
    pub actor: Option<Reference>,
    pub participant_status: Coded<AppointmentResponseStatus>,
    pub comment: Option<Markdown>,
    pub recurring: Option<Boolean>,
    pub occurrence_date: Option<Date>,
    pub recurrence_id: Option<PositiveInt>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum AppointmentResponseStatus {
    Accepted,
    Declined,
    Tentative,
    NeedsAction,
    EnteredInError,
}
