use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A catch-all resource for concepts with no dedicated resource type.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct Basic {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub code: CodeableConcept,
    pub subject: Option<Reference>,
    pub created: Option<DateTime>,
    pub author: Option<Reference>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
