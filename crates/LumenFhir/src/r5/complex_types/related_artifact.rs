use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A citation, predecessor or other related knowledge artifact.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct RelatedArtifact {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub r#type: Option<Coded<RelatedArtifactType>>,
    pub classifier: Option<Vec<CodeableConcept>>,
    pub label: Option<String>,
    pub display: Option<String>,
    pub citation: Option<Markdown>,
    pub document: Option<Attachment>,
    pub resource: Option<Canonical>,
    pub resource_reference: Option<Reference>,
    pub publication_status: Option<Coded<PublicationStatus>>,
    pub publication_date: Option<Date>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
