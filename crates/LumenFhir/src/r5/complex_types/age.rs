use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A duration since birth. Structurally a `Quantity` profile.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct Age {
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
