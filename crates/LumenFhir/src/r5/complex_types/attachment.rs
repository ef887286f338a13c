use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// Content either carried inline as base64 data or referenced by URL.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(invariant = "crate::codec::checks::attachment_advisories")]
pub struct Attachment {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub content_type: Option<Code>,
    pub language: Option<Code>,
    pub data: Option<Base64Binary>,
    pub url: Option<Url>,
    pub size: Option<Integer64>,
    pub hash: Option<Base64Binary>,
    pub title: Option<String>,
    pub creation: Option<DateTime>,
    pub height: Option<PositiveInt>,
    pub width: Option<PositiveInt>,
    pub frames: Option<PositiveInt>,
    pub duration: Option<Decimal>,
    pub pages: Option<PositiveInt>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
