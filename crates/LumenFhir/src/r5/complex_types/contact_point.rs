use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A telecommunication endpoint such as a phone number or email address.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ContactPoint {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub system: Option<Coded<ContactPointSystem>>,
    pub value: Option<String>,
    pub r#use: Option<Coded<ContactPointUse>>,
    pub rank: Option<PositiveInt>,
    pub period: Option<Period>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
