use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A code from a terminology system.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(invariant = "crate::codec::checks::coding_advisories")]
pub struct Coding {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub system: Option<Uri>,
    pub version: Option<String>,
    pub code: Option<Code>,
    pub display: Option<String>,
    pub user_selected: Option<Boolean>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
