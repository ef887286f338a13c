use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// Raw content under a content type, outside the FHIR data model proper.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct Binary {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub content_type: Code,
    pub security_context: Option<Reference>,
    pub data: Option<Base64Binary>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
