use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A business identifier.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct Identifier {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub r#use: Option<Coded<IdentifierUse>>,
    pub r#type: Option<CodeableConcept>,
    pub system: Option<Uri>,
    pub value: Option<String>,
    pub period: Option<Period>,
    pub assigner: Option<Reference>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
