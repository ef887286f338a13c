use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// The act of delivering supplied items.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct SupplyDelivery {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub based_on: Option<Vec<Reference>>,
    pub part_of: Option<Vec<Reference>>,
    pub status: Option<Coded<SupplyDeliveryStatus>>,
    pub patient: Option<Reference>,
    pub r#type: Option<CodeableConcept>,
    pub supplied_item: Option<Vec<SupplyDeliverySuppliedItem>>,
    #[fhir(flatten)]
    pub occurrence: Option<SupplyDeliveryOccurrence>,
    pub supplier: Option<Reference>,
    pub destination: Option<Reference>,
    pub receiver: Option<Vec<Reference>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum SupplyDeliveryStatus {
    InProgress,
    Completed,
    Abandoned,
    EnteredInError,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct SupplyDeliverySuppliedItem {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub quantity: Option<Quantity>,
    #[fhir(flatten)]
    pub item: Option<SupplyDeliveryItem>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum SupplyDeliveryItem {
    #[fhir(rename = "itemCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[fhir(rename = "itemReference")]
    Reference(Reference),
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum SupplyDeliveryOccurrence {
    #[fhir(rename = "occurrenceDateTime")]
    DateTime(DateTime),
    #[fhir(rename = "occurrencePeriod")]
    Period(Period),
    #[fhir(rename = "occurrenceTiming")]
    Timing(Timing),
}
