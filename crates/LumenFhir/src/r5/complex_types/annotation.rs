use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A timestamped, attributed text note.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct Annotation {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir(flatten)]
    pub author: Option<AnnotationAuthor>,
    pub time: Option<DateTime>,
    pub text: Markdown,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum AnnotationAuthor {
    #[fhir(rename = "authorReference")]
    Reference(Reference),
    #[fhir(rename = "authorString")]
    String(String),
}
