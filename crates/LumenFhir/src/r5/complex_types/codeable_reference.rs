use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// Either a concept or a reference to a resource carrying one.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct CodeableReference {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub concept: Option<CodeableConcept>,
    pub reference: Option<Reference>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
