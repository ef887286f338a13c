use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A concept, expressed as codings and/or free text.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct CodeableConcept {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub coding: Option<Vec<Coding>>,
    pub text: Option<String>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
