use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A bag of named in/out parameters for operation invocations.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct Parameters {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub parameter: Option<Vec<ParametersParameter>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

/// A single parameter, carrying at most one of a value, a whole resource
/// or nested parts.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(invariant = "crate::codec::checks::parameter_exclusivity")]
pub struct ParametersParameter {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub name: String,
    #[fhir(flatten)]
    pub value: Option<ExtensionValue>,
    pub resource: Option<Box<Resource>>,
    pub part: Option<Vec<ParametersParameter>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
