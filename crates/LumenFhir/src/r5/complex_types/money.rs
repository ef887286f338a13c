use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// An amount of currency.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct Money {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub value: Option<Decimal>,
    pub currency: Option<Code>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
