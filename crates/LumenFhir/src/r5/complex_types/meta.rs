use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// Infrastructure metadata about a resource instance.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct Meta {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub version_id: Option<Id>,
    pub last_updated: Option<Instant>,
    pub source: Option<Uri>,
    pub profile: Option<Vec<Canonical>>,
    pub security: Option<Vec<Coding>>,
    pub tag: Option<Vec<Coding>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
