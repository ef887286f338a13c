use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A digital signature over some content.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct Signature {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub r#type: Option<Vec<Coding>>,
    pub when: Option<Instant>,
    pub who: Option<Reference>,
    pub on_behalf_of: Option<Reference>,
    pub target_format: Option<Code>,
    pub sig_format: Option<Code>,
    pub data: Option<Base64Binary>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
