use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// Declares a code system and optionally enumerates its concepts.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct CodeSystem {
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
    pub approval_date: Option<Date>,
    pub last_review_date: Option<Date>,
    pub effective_period: Option<Period>,
    pub topic: Option<Vec<CodeableConcept>>,
    pub author: Option<Vec<ContactDetail>>,
    pub editor: Option<Vec<ContactDetail>>,
    pub reviewer: Option<Vec<ContactDetail>>,
    pub endorser: Option<Vec<ContactDetail>>,
    pub related_artifact: Option<Vec<RelatedArtifact>>,
    pub case_sensitive: Option<Boolean>,
    pub value_set: Option<Canonical>,
    pub hierarchy_meaning: Option<Coded<HierarchyMeaning>>,
    pub compositional: Option<Boolean>,
    pub version_needed: Option<Boolean>,
    pub content: Coded<CodeSystemContentMode>,
    pub supplements: Option<Canonical>,
    pub count: Option<UnsignedInt>,
    pub filter: Option<Vec<CodeSystemFilter>>,
    pub property: Option<Vec<CodeSystemProperty>>,
    pub concept: Option<Vec<CodeSystemConcept>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

/// The `versionAlgorithm[x]` choice shared by the definitional resources.
#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum VersionAlgorithm {
    #[fhir(rename = "versionAlgorithmString")]
    String(String),
    #[fhir(rename = "versionAlgorithmCoding")]
    Coding(Coding),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum HierarchyMeaning {
    GroupedBy,
    IsA,
    PartOf,
    ClassifiedWith,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum CodeSystemContentMode {
    NotPresent,
    Example,
    Fragment,
    Complete,
    Supplement,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct CodeSystemFilter {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: Code,
    pub description: Option<String>,
    pub operator: Vec<Code>,
    pub value: String,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum PropertyType {
    Code,
    Coding,
    String,
    Integer,
    Boolean,
    DateTime,
    Decimal,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct CodeSystemProperty {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: Code,
    pub uri: Option<Uri>,
    pub description: Option<String>,
    pub r#type: Coded<PropertyType>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct CodeSystemConcept {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: Code,
    pub display: Option<String>,
    pub definition: Option<String>,
    pub designation: Option<Vec<CodeSystemDesignation>>,
    pub property: Option<Vec<CodeSystemConceptProperty>>,
    pub concept: Option<Vec<CodeSystemConcept>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct CodeSystemDesignation {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub language: Option<Code>,
    pub r#use: Option<Coding>,
    pub additional_use: Option<Vec<Coding>>,
    pub value: String,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct CodeSystemConceptProperty {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: Code,
    #[fhir(flatten, required)]
    pub value: Option<CodeSystemPropertyValue>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum CodeSystemPropertyValue {
    #[fhir(rename = "valueCode")]
    Code(Code),
    #[fhir(rename = "valueCoding")]
    Coding(Coding),
    #[fhir(rename = "valueString")]
    String(String),
    #[fhir(rename = "valueInteger")]
    Integer(Integer),
    #[fhir(rename = "valueBoolean")]
    Boolean(Boolean),
    #[fhir(rename = "valueDateTime")]
    DateTime(DateTime),
    #[fhir(rename = "valueDecimal")]
    Decimal(Decimal),
}
