use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A low/high pair of quantities.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct Range {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub low: Option<Quantity>,
    pub high: Option<Quantity>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
