use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A dimension along which a definitional artifact applies, such as a
/// clinical venue or patient population.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct UsageContext {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub code: Coding,
    #[fhir(flatten, required)]
    pub value: Option<UsageContextValue>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum UsageContextValue {
    #[fhir(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[fhir(rename = "valueQuantity")]
    Quantity(Quantity),
    #[fhir(rename = "valueRange")]
    Range(Range),
    #[fhir(rename = "valueReference")]
    Reference(Reference),
}
