use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A container of slots for booking against an actor.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct Schedule {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub active: Option<Boolean>,
    pub service_category: Option<Vec<CodeableConcept>>,
    pub service_type: Option<Vec<CodeableReference>>,
    pub specialty: Option<Vec<CodeableConcept>>,
    pub name: Option<String>,
    pub actor: Vec<Reference>,
    pub planning_horizon: Option<Period>,
    pub comment: Option<Markdown>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
