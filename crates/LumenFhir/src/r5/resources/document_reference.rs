use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// Metadata about a document of any kind, with pointers to its content.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct DocumentReference {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub version: Option<String>,
    pub based_on: Option<Vec<Reference>>,
    pub status: Coded<DocumentReferenceStatus>,
    pub doc_status: Option<Coded<CompositionStatus>>,
    pub modality: Option<Vec<CodeableConcept>>,
    pub r#type: Option<CodeableConcept>,
    pub category: Option<Vec<CodeableConcept>>,
    pub subject: Option<Reference>,
    pub context: Option<Vec<Reference>>,
    pub event: Option<Vec<CodeableReference>>,
    pub body_site: Option<Vec<CodeableReference>>,
    pub facility_type: Option<CodeableConcept>,
    pub practice_setting: Option<CodeableConcept>,
    pub period: Option<Period>,
    pub date: Option<Instant>,
    pub author: Option<Vec<Reference>>,
    pub attester: Option<Vec<DocumentReferenceAttester>>,
    pub custodian: Option<Reference>,
    pub relates_to: Option<Vec<DocumentReferenceRelatesTo>>,
    pub description: Option<Markdown>,
    pub security_label: Option<Vec<CodeableConcept>>,
    pub content: Vec<DocumentReferenceContent>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum DocumentReferenceStatus {
    Current,
    Superseded,
    EnteredInError,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct DocumentReferenceAttester {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub mode: CodeableConcept,
    pub time: Option<DateTime>,
    pub party: Option<Reference>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct DocumentReferenceRelatesTo {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: CodeableConcept,
    pub target: Reference,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct DocumentReferenceContent {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub attachment: Attachment,
    pub profile: Option<Vec<DocumentReferenceProfile>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct DocumentReferenceProfile {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    #[fhir(flatten, required)]
    pub value: Option<DocumentReferenceProfileValue>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum DocumentReferenceProfileValue {
    #[fhir(rename = "valueCoding")]
    Coding(Coding),
    #[fhir(rename = "valueUri")]
    Uri(Uri),
    #[fhir(rename = "valueCanonical")]
    Canonical(Canonical),
}
