use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// Shelf life and storage of a packaged product. A backbone-pattern data
/// type.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ProductShelfLife {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub r#type: Option<CodeableConcept>,
    #[fhir(flatten)]
    pub period: Option<ProductShelfLifePeriod>,
    pub special_precautions_for_storage: Option<Vec<CodeableConcept>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum ProductShelfLifePeriod {
    #[fhir(rename = "periodDuration")]
    Duration(Duration),
    #[fhir(rename = "periodString")]
    String(String),
}
