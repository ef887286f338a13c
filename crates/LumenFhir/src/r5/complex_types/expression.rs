use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// An executable expression in a named language.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct Expression {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub description: Option<String>,
    pub name: Option<Code>,
    pub language: Option<Code>,
    pub expression: Option<String>,
    pub reference: Option<Uri>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
