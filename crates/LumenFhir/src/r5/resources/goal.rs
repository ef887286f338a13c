use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// A desired health state to be achieved by a subject.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct Goal {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub lifecycle_status: Coded<GoalLifecycleStatus>,
    pub achievement_status: Option<CodeableConcept>,
    pub category: Option<Vec<CodeableConcept>>,
    pub continuous: Option<Boolean>,
    pub priority: Option<CodeableConcept>,
    pub description: CodeableConcept,
    pub subject: Reference,
    #[fhir(flatten)]
    pub start: Option<GoalStart>,
    pub target: Option<Vec<GoalTarget>>,
    pub status_date: Option<Date>,
    pub status_reason: Option<String>,
    pub source: Option<Reference>,
    pub addresses: Option<Vec<Reference>>,
    pub note: Option<Vec<Annotation>>,
    pub outcome: Option<Vec<CodeableReference>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum GoalLifecycleStatus {
    Proposed,
    Planned,
    Accepted,
    Active,
    OnHold,
    Completed,
    Cancelled,
    EnteredInError,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum GoalStart {
    #[fhir(rename = "startDate")]
    Date(Date),
    #[fhir(rename = "startCodeableConcept")]
    CodeableConcept(CodeableConcept),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct GoalTarget {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub measure: Option<CodeableConcept>,
    #[fhir(flatten)]
    pub detail: Option<GoalTargetDetail>,
    #[fhir(flatten)]
    pub due: Option<GoalTargetDue>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum GoalTargetDetail {
    #[fhir(rename = "detailQuantity")]
    Quantity(Quantity),
    #[fhir(rename = "detailRange")]
    Range(Range),
    #[fhir(rename = "detailCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[fhir(rename = "detailString")]
    String(String),
    #[fhir(rename = "detailBoolean")]
    Boolean(Boolean),
    #[fhir(rename = "detailInteger")]
    Integer(Integer),
    #[fhir(rename = "detailRatio")]
    Ratio(Ratio),
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum GoalTargetDue {
    #[fhir(rename = "dueDate")]
    Date(Date),
    #[fhir(rename = "dueDuration")]
    Duration(Duration),
}
