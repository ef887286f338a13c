use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// Contact information with purpose, address and organizational context.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ExtendedContactDetail {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub purpose: Option<CodeableConcept>,
    pub name: Option<Vec<HumanName>>,
    pub telecom: Option<Vec<ContactPoint>>,
    pub address: Option<Address>,
    pub organization: Option<Reference>,
    pub period: Option<Period>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
