use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A record of the activities and agents behind a resource version.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct Provenance {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub target: Vec<Reference>,
    #[fhir(flatten)]
    pub occurred: Option<ProvenanceOccurred>,
    pub recorded: Option<Instant>,
    pub policy: Option<Vec<Uri>>,
    pub location: Option<Reference>,
    pub authorization: Option<Vec<CodeableReference>>,
    pub activity: Option<CodeableConcept>,
    pub based_on: Option<Vec<Reference>>,
    pub patient: Option<Reference>,
    pub encounter: Option<Reference>,
    pub agent: Vec<ProvenanceAgent>,
    pub entity: Option<Vec<ProvenanceEntity>>,
    pub signature: Option<Vec<Signature>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum ProvenanceOccurred {
    #[fhir(rename = "occurredPeriod")]
    Period(Period),
    #[fhir(rename = "occurredDateTime")]
    DateTime(DateTime),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ProvenanceAgent {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub r#type: Option<CodeableConcept>,
    pub role: Option<Vec<CodeableConcept>>,
    pub who: Reference,
    pub on_behalf_of: Option<Reference>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ProvenanceEntity {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub role: Code,
    pub what: Reference,
    pub agent: Option<Vec<ProvenanceAgent>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
