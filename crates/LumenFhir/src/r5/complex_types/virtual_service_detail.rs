use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// How to reach a virtual service such as a video call.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct VirtualServiceDetail {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub channel_type: Option<Coding>,
    #[fhir(flatten)]
    pub address: Option<VirtualServiceDetailAddress>,
    pub additional_info: Option<Vec<Url>>,
    pub max_participants: Option<PositiveInt>,
    pub session_key: Option<String>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum VirtualServiceDetailAddress {
    #[fhir(rename = "addressUrl")]
    Url(Url),
    #[fhir(rename = "addressString")]
    String(String),
    #[fhir(rename = "addressContactPoint")]
    ContactPoint(ContactPoint),
    #[fhir(rename = "addressExtendedContactDetail")]
    ExtendedContactDetail(ExtendedContactDetail),
}
