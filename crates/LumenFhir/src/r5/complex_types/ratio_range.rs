use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A range of ratios over a common denominator.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct RatioRange {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub low_numerator: Option<Quantity>,
    pub high_numerator: Option<Quantity>,
    pub denominator: Option<Quantity>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
