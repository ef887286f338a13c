use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A postal address.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct Address {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub r#use: Option<Coded<AddressUse>>,
    pub r#type: Option<Coded<AddressType>>,
    pub text: Option<String>,
    pub line: Option<Vec<String>>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub period: Option<Period>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
