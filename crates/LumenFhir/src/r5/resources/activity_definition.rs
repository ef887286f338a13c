use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A reusable definition of an activity to be performed.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct ActivityDefinition {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub url: Option<Uri>,
    pub identifier: Option<Vec<Identifier>>,
    pub version: Option<String>,
    #[fhir(flatten)]
    pub version_algorithm: Option<VersionAlgorithm>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub status: Coded<PublicationStatus>,
    pub experimental: Option<Boolean>,
    #[fhir(flatten)]
    pub subject: Option<ActivityDefinitionSubject>,
    pub date: Option<DateTime>,
    pub publisher: Option<String>,
    pub contact: Option<Vec<ContactDetail>>,
    pub description: Option<Markdown>,
    pub use_context: Option<Vec<UsageContext>>,
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    pub purpose: Option<Markdown>,
    pub usage: Option<Markdown>,
    pub copyright: Option<Markdown>,
    pub copyright_label: Option<String>,
    pub approval_date: Option<Date>,
    pub last_review_date: Option<Date>,
    pub effective_period: Option<Period>,
    pub topic: Option<Vec<CodeableConcept>>,
    pub author: Option<Vec<ContactDetail>>,
    pub editor: Option<Vec<ContactDetail>>,
    pub reviewer: Option<Vec<ContactDetail>>,
    pub endorser: Option<Vec<ContactDetail>>,
    pub related_artifact: Option<Vec<RelatedArtifact>>,
    pub library: Option<Vec<Canonical>>,
    pub kind: Option<Code>,
    pub profile: Option<Canonical>,
    pub code: Option<CodeableConcept>,
    pub intent: Option<Coded<RequestIntent>>,
    pub priority: Option<Coded<RequestPriority>>,
    pub do_not_perform: Option<Boolean>,
    #[fhir(flatten)]
    pub timing: Option<ActivityDefinitionTiming>,
    #[fhir(flatten)]
    pub as_needed: Option<ActivityDefinitionAsNeeded>,
    pub location: Option<CodeableReference>,
    pub participant: Option<Vec<ActivityDefinitionParticipant>>,
    #[fhir(flatten)]
    pub product: Option<ActivityDefinitionProduct>,
    pub quantity: Option<Quantity>,
    pub dosage: Option<Vec<Dosage>>,
    pub body_site: Option<Vec<CodeableConcept>>,
    pub specimen_requirement: Option<Vec<Canonical>>,
    pub observation_requirement: Option<Vec<Canonical>>,
    pub observation_result_requirement: Option<Vec<Canonical>>,
    pub transform: Option<Canonical>,
    pub dynamic_value: Option<Vec<ActivityDefinitionDynamicValue>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum ActivityDefinitionSubject {
    #[fhir(rename = "subjectCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[fhir(rename = "subjectReference")]
    Reference(Reference),
    #[fhir(rename = "subjectCanonical")]
    Canonical(Canonical),
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum ActivityDefinitionTiming {
    #[fhir(rename = "timingTiming")]
    Timing(Timing),
    #[fhir(rename = "timingAge")]
    Age(Age),
    #[fhir(rename = "timingRange")]
    Range(Range),
    #[fhir(rename = "timingDuration")]
    Duration(Duration),
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum ActivityDefinitionAsNeeded {
    #[fhir(rename = "asNeededBoolean")]
    Boolean(Boolean),
    #[fhir(rename = "asNeededCodeableConcept")]
    CodeableConcept(CodeableConcept),
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum ActivityDefinitionProduct {
    #[fhir(rename = "productReference")]
    Reference(Reference),
    #[fhir(rename = "productCodeableConcept")]
    CodeableConcept(CodeableConcept),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ActivityDefinitionParticipant {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub r#type: Option<Code>,
    pub type_canonical: Option<Canonical>,
    pub type_reference: Option<Reference>,
    pub role: Option<CodeableConcept>,
    pub function: Option<CodeableConcept>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ActivityDefinitionDynamicValue {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub path: String,
    pub expression: Expression,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
