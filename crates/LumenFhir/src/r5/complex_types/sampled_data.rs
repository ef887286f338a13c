use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A stream of measurements sampled from a device.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct SampledData {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub origin: Quantity,
    pub interval: Option<Decimal>,
    pub interval_unit: Code,
    pub factor: Option<Decimal>,
    pub lower_limit: Option<Decimal>,
    pub upper_limit: Option<Decimal>,
    pub dimensions: PositiveInt,
    pub code_map: Option<Canonical>,
    pub offsets: Option<String>,
    pub data: Option<String>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
