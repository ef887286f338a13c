use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// A mapping between concepts of two terminology systems.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct ConceptMap {
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
    pub property: Option<Vec<ConceptMapProperty>>,
    pub additional_attribute: Option<Vec<ConceptMapAdditionalAttribute>>,
    #[fhir(flatten)]
    pub source_scope: Option<ConceptMapSourceScope>,
    #[fhir(flatten)]
    pub target_scope: Option<ConceptMapTargetScope>,
    pub group: Option<Vec<ConceptMapGroup>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ConceptMapProperty {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: Code,
    pub uri: Option<Uri>,
    pub description: Option<String>,
    pub r#type: Code,
    pub system: Option<Canonical>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ConceptMapAdditionalAttribute {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: Code,
    pub uri: Option<Uri>,
    pub description: Option<String>,
    pub r#type: Code,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum ConceptMapSourceScope {
    #[fhir(rename = "sourceScopeUri")]
    Uri(Uri),
    #[fhir(rename = "sourceScopeCanonical")]
    Canonical(Canonical),
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum ConceptMapTargetScope {
    #[fhir(rename = "targetScopeUri")]
    Uri(Uri),
    #[fhir(rename = "targetScopeCanonical")]
    Canonical(Canonical),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ConceptMapGroup {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub source: Option<Canonical>,
    pub target: Option<Canonical>,
    pub element: Vec<ConceptMapElement>,
    pub unmapped: Option<ConceptMapUnmapped>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ConceptMapElement {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: Option<Code>,
    pub display: Option<String>,
    pub value_set: Option<Canonical>,
    pub no_map: Option<Boolean>,
    pub target: Option<Vec<ConceptMapTarget>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum ConceptMapRelationship {
    RelatedTo,
    Equivalent,
    SourceIsNarrowerThanTarget,
    SourceIsBroaderThanTarget,
    NotRelatedTo,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ConceptMapTarget {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: Option<Code>,
    pub display: Option<String>,
    pub value_set: Option<Canonical>,
    pub relationship: Coded<ConceptMapRelationship>,
    pub comment: Option<String>,
    pub depends_on: Option<Vec<ConceptMapDependsOn>>,
    pub product: Option<Vec<ConceptMapDependsOn>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ConceptMapDependsOn {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub attribute: Code,
    #[fhir(flatten)]
    pub value: Option<ConceptMapAttributeValue>,
    pub value_set: Option<Canonical>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum ConceptMapAttributeValue {
    #[fhir(rename = "valueCode")]
    Code(Code),
    #[fhir(rename = "valueCoding")]
    Coding(Coding),
    #[fhir(rename = "valueString")]
    String(String),
    #[fhir(rename = "valueBoolean")]
    Boolean(Boolean),
    #[fhir(rename = "valueQuantity")]
    Quantity(Quantity),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum ConceptMapUnmappedMode {
    UseSourceCode,
    Fixed,
    OtherMap,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ConceptMapUnmapped {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub mode: Coded<ConceptMapUnmappedMode>,
    pub code: Option<Code>,
    pub display: Option<String>,
    pub value_set: Option<Canonical>,
    pub relationship: Option<Coded<ConceptMapRelationship>>,
    pub other_map: Option<Canonical>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
