use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// A curated collection of references, such as a problem or allergy list.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct List {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub status: Coded<ListStatus>,
    pub mode: Coded<ListMode>,
    pub title: Option<String>,
    pub code: Option<CodeableConcept>,
    pub subject: Option<Vec<Reference>>,
    pub encounter: Option<Reference>,
    pub date: Option<DateTime>,
    pub source: Option<Reference>,
    pub ordered_by: Option<CodeableConcept>,
    pub note: Option<Vec<Annotation>>,
    pub entry: Option<Vec<ListEntry>>,
    pub empty_reason: Option<CodeableConcept>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum ListStatus {
    Current,
    Retired,
    EnteredInError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum ListMode {
    Working,
    Snapshot,
    Changes,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ListEntry {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub flag: Option<CodeableConcept>,
    pub deleted: Option<Boolean>,
    pub date: Option<DateTime>,
    pub item: Reference,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
