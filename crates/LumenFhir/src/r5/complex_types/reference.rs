use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A typed pointer to another resource, unresolved at this layer. The
/// boxed identifier breaks the `Reference`/`Identifier` type cycle.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct Reference {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub reference: Option<String>,
    pub r#type: Option<Uri>,
    pub identifier: Option<Box<Identifier>>,
    pub display: Option<String>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
