use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A name of a human, decomposed into parts.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct HumanName {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub r#use: Option<Coded<NameUse>>,
    pub text: Option<String>,
    pub family: Option<String>,
    pub given: Option<Vec<String>>,
    pub prefix: Option<Vec<String>>,
    pub suffix: Option<Vec<String>>,
    pub period: Option<Period>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
