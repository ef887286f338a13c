use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// A formal definition of an operation or named query.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct OperationDefinition {
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
    pub kind: Coded<OperationKind>,
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
    pub affects_state: Option<Boolean>,
    pub code: Code,
    pub comment: Option<Markdown>,
    pub base: Option<Canonical>,
    pub resource: Option<Vec<Code>>,
    pub system: Boolean,
    pub r#type: Boolean,
    pub instance: Boolean,
    pub input_profile: Option<Canonical>,
    pub output_profile: Option<Canonical>,
    pub parameter: Option<Vec<OperationDefinitionParameter>>,
    pub overload: Option<Vec<OperationDefinitionOverload>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum OperationKind {
    Operation,
    Query,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct OperationDefinitionParameter {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub name: Code,
    pub r#use: Coded<OperationParameterUse>,
    pub scope: Option<Vec<Code>>,
    pub min: Integer,
    pub max: String,
    pub documentation: Option<Markdown>,
    pub r#type: Option<Code>,
    pub allowed_type: Option<Vec<Code>>,
    pub target_profile: Option<Vec<Canonical>>,
    pub search_type: Option<Coded<SearchParamType>>,
    pub binding: Option<OperationDefinitionBinding>,
    pub referenced_from: Option<Vec<OperationDefinitionReferencedFrom>>,
    pub part: Option<Vec<OperationDefinitionParameter>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum BindingStrength {
    Required,
    Extensible,
    Preferred,
    Example,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct OperationDefinitionBinding {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub strength: Coded<BindingStrength>,
    pub value_set: Canonical,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct OperationDefinitionReferencedFrom {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub source: String,
    pub source_id: Option<String>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct OperationDefinitionOverload {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub parameter_name: Option<Vec<String>>,
    pub comment: Option<String>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
