use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// A unit of workflow to be performed, tracked through its lifecycle.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct Task {
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
    pub status: Coded<TaskStatus>,
    pub status_reason: Option<CodeableReference>,
    pub business_status: Option<CodeableConcept>,
    pub intent: Coded<TaskIntent>,
    pub priority: Option<Coded<RequestPriority>>,
    pub do_not_perform: Option<Boolean>,
    pub code: Option<CodeableConcept>,
    pub description: Option<String>,
    pub focus: Option<Reference>,
    pub r#for: Option<Reference>,
    pub encounter: Option<Reference>,
    pub requested_period: Option<Period>,
    pub execution_period: Option<Period>,
    pub authored_on: Option<DateTime>,
    pub last_modified: Option<DateTime>,
    pub requester: Option<Reference>,
    pub requested_performer: Option<Vec<CodeableReference>>,
    pub owner: Option<Reference>,
    pub performer: Option<Vec<TaskPerformer>>,
    pub location: Option<Reference>,
    pub reason: Option<Vec<CodeableReference>>,
    pub insurance: Option<Vec<Reference>>,
    pub note: Option<Vec<Annotation>>,
    pub relevant_history: Option<Vec<Reference>>,
    pub restriction: Option<TaskRestriction>,
    pub input: Option<Vec<TaskInput>>,
    pub output: Option<Vec<TaskOutput>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum TaskStatus {
    Draft,
    Requested,
    Received,
    Accepted,
    Rejected,
    Ready,
    Cancelled,
    InProgress,
    OnHold,
    Failed,
    Completed,
    EnteredInError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum TaskIntent {
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
pub struct TaskPerformer {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub function: Option<CodeableConcept>,
    pub actor: Reference,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct TaskRestriction {
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
pub struct TaskInput {
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
pub struct TaskOutput {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub r#type: CodeableConcept,
    #[fhir(flatten, required)]
    pub value: Option<ExtensionValue>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
