use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A measured amount.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct Quantity {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub value: Option<Decimal>,
    pub comparator: Option<Coded<QuantityComparator>>,
    pub unit: Option<String>,
    pub system: Option<Uri>,
    pub code: Option<Code>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
