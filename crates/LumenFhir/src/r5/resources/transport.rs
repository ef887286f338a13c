use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// The physical movement of an item, patient or equipment.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct Transport {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub instantiates_canonical: Option<Canonical>,
    pub instantiates_uri: Option<Uri>,
    pub based_on: Option<Vec<Reference>>,
    pub group_identifier: Option<Identifier>,
    pub part_of: Option<Vec<Reference>>,
    pub status: Option<Coded<TransportStatus>>,
    pub status_reason: Option<CodeableConcept>,
    pub intent: Coded<TransportIntent>,
    pub priority: Option<Coded<RequestPriority>>,
    pub code: Option<CodeableConcept>,
    pub description: Option<String>,
    pub focus: Option<Reference>,
    pub r#for: Option<Reference>,
    pub encounter: Option<Reference>,
    pub completion_time: Option<DateTime>,
    pub authored_on: Option<DateTime>,
    pub last_modified: Option<DateTime>,
    pub requester: Option<Reference>,
    pub performer_type: Option<Vec<CodeableConcept>>,
    pub owner: Option<Reference>,
    pub location: Option<Reference>,
    pub insurance: Option<Vec<Reference>>,
    pub note: Option<Vec<Annotation>>,
    pub relevant_history: Option<Vec<Reference>>,
    pub restriction: Option<TransportRestriction>,
    pub input: Option<Vec<TransportInput>>,
    pub output: Option<Vec<TransportOutput>>,
    pub requested_location: Reference,
    pub current_location: Reference,
    pub reason: Option<CodeableReference>,
    pub history: Option<Reference>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum TransportStatus {
    InProgress,
    Completed,
    Abandoned,
    Cancelled,
    Planned,
    EnteredInError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum TransportIntent {
    Unknown,
    Proposal,
    Plan,
    Order,
    OriginalOrder,
    ReflexOrder,
    FillerOrder,
    InstanceOrder,
    Option,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct TransportRestriction {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub repetitions: Option<PositiveInt>,
    pub period: Option<Period>,
    pub recipient: Option<Vec<Reference>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct TransportInput {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub r#type: CodeableConcept,
    #[fhir(flatten, required)]
    pub value: Option<ExtensionValue>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct TransportOutput {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub r#type: CodeableConcept,
    #[fhir(flatten, required)]
    pub value: Option<ExtensionValue>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
