use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A parameter slot of an invocable knowledge artifact. As with
/// `DataRequirement.type`, the `type` binding spans every FHIR type name
/// and stays an open code.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ParameterDefinition {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub name: Option<Code>,
    pub r#use: Coded<OperationParameterUse>,
    pub min: Option<Integer>,
    pub max: Option<String>,
    pub documentation: Option<String>,
    pub r#type: Code,
    pub profile: Option<Canonical>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
