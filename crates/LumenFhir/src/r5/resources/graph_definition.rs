use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// A formal description of a graph of resources reached by following
/// references from a starting node.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct GraphDefinition {
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
    pub name: String,
    pub title: Option<String>,
    pub status: Coded<PublicationStatus>,
    pub experimental: Option<Boolean>,
    pub date: Option<DateTime>,
    pub publisher: Option<String>,
    pub contact: Option<Vec<ContactDetail>>,
    pub description: Option<Markdown>,
    pub use_context: Option<Vec<UsageContext>>,
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    pub purpose: Option<Markdown>,
    pub copyright: Option<Markdown>,
    pub copyright_label: Option<String>,
    pub start: Option<Id>,
    pub node: Option<Vec<GraphDefinitionNode>>,
    pub link: Option<Vec<GraphDefinitionLink>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct GraphDefinitionNode {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub node_id: Id,
    pub description: Option<Markdown>,
    pub r#type: Code,
    pub profile: Option<Canonical>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct GraphDefinitionLink {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub description: Option<Markdown>,
    pub min: Option<Integer>,
    pub max: Option<String>,
    pub source_id: Id,
    pub path: Option<String>,
    pub slice_name: Option<String>,
    pub target_id: Id,
    pub params: Option<String>,
    pub compartment: Option<Vec<GraphDefinitionCompartment>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum GraphCompartmentUse {
    Where,
    Requires,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum GraphCompartmentRule {
    Identical,
    Matching,
    Different,
    Custom,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct GraphDefinitionCompartment {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub r#use: Coded<GraphCompartmentUse>,
    pub rule: Coded<GraphCompartmentRule>,
    pub code: Code,
    pub expression: Option<String>,
    pub description: Option<String>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
