use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// The human-readable rendering of a resource.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct Narrative {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub status: Coded<NarrativeStatus>,
    pub div: Xhtml,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
