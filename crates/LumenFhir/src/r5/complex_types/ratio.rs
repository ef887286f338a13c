use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A numerator/denominator pair.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct Ratio {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub numerator: Option<Quantity>,
    pub denominator: Option<Quantity>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
