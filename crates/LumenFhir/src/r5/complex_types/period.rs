use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A time range. When both ends are present and comparable, the start must
/// not follow the end.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(invariant = "crate::codec::checks::period_order")]
pub struct Period {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub start: Option<DateTime>,
    pub end: Option<DateTime>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
