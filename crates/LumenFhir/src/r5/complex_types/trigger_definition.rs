use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A condition under which some definitional logic fires.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct TriggerDefinition {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub r#type: Option<Coded<TriggerType>>,
    pub name: Option<String>,
    pub code: Option<CodeableConcept>,
    pub subscription_topic: Option<Canonical>,
    #[fhir(flatten)]
    pub timing: Option<TriggerDefinitionTiming>,
    pub data: Option<Vec<DataRequirement>>,
    pub condition: Option<Expression>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum TriggerDefinitionTiming {
    #[fhir(rename = "timingTiming")]
    Timing(Timing),
    #[fhir(rename = "timingReference")]
    Reference(Reference),
    #[fhir(rename = "timingDate")]
    Date(Date),
    #[fhir(rename = "timingDateTime")]
    DateTime(DateTime),
}
