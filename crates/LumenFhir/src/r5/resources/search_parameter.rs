use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// Defines a search parameter over a resource type.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct SearchParameter {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub url: Uri,
    pub identifier: Option<Vec<Identifier>>,
    pub version: Option<String>,
    #[fhir(flatten)]
    pub version_algorithm: Option<VersionAlgorithm>,
    pub name: String,
    pub title: Option<String>,
    pub derived_from: Option<Canonical>,
    pub status: Coded<PublicationStatus>,
    pub experimental: Option<Boolean>,
    pub date: Option<DateTime>,
    pub publisher: Option<String>,
    pub contact: Option<Vec<ContactDetail>>,
    pub description: Markdown,
    pub use_context: Option<Vec<UsageContext>>,
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    pub purpose: Option<Markdown>,
    pub copyright: Option<Markdown>,
    pub copyright_label: Option<String>,
    pub code: Code,
    pub base: Vec<Code>,
    pub r#type: Coded<SearchParamType>,
    pub expression: Option<String>,
    pub processing_mode: Option<Coded<SearchProcessingMode>>,
    pub constraint: Option<String>,
    pub target: Option<Vec<Code>>,
    pub multiple_or: Option<Boolean>,
    pub multiple_and: Option<Boolean>,
    pub comparator: Option<Vec<Coded<SearchComparator>>>,
    pub modifier: Option<Vec<Coded<SearchModifierCode>>>,
    pub chain: Option<Vec<String>>,
    pub component: Option<Vec<SearchParameterComponent>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum SearchParamType {
    Number,
    Date,
    String,
    Token,
    Reference,
    Composite,
    Quantity,
    Uri,
    Special,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum SearchProcessingMode {
    Normal,
    Phonetic,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum SearchComparator {
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
    Sa,
    Eb,
    Ap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum SearchModifierCode {
    Missing,
    Exact,
    Contains,
    Not,
    Text,
    In,
    NotIn,
    Below,
    Above,
    Type,
    Identifier,
    OfType,
    CodeText,
    TextAdvanced,
    Iterate,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct SearchParameterComponent {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub definition: Canonical,
    pub expression: String,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
