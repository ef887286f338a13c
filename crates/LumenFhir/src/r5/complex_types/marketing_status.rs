use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// Where and under what status a medicinal product is marketed. A
/// backbone-pattern data type.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct MarketingStatus {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub country: Option<CodeableConcept>,
    pub jurisdiction: Option<CodeableConcept>,
    pub status: CodeableConcept,
    pub date_range: Option<Period>,
    pub restore_date: Option<DateTime>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
