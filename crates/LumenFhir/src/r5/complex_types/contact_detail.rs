use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A named set of contact points for a definitional artifact.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ContactDetail {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub name: Option<String>,
    pub telecom: Option<Vec<ContactPoint>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
