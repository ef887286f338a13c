use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// An intended plan of care for a patient or group.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct CarePlan {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub instantiates_canonical: Option<Vec<Canonical>>,
    pub instantiates_uri: Option<Vec<Uri>>,
    pub based_on: Option<Vec<Reference>>,
    pub replaces: Option<Vec<Reference>>,
    pub part_of: Option<Vec<Reference>>,
    pub status: Coded<RequestStatus>,
    pub intent: Coded<RequestIntent>,
    pub category: Option<Vec<CodeableConcept>>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub subject: Reference,
    pub encounter: Option<Reference>,
    pub period: Option<Period>,
    pub created: Option<DateTime>,
    pub custodian: Option<Reference>,
    pub contributor: Option<Vec<Reference>>,
    pub care_team: Option<Vec<Reference>>,
    pub addresses: Option<Vec<CodeableReference>>,
    pub supporting_info: Option<Vec<Reference>>,
    pub goal: Option<Vec<Reference>>,
    pub activity: Option<Vec<CarePlanActivity>>,
    pub note: Option<Vec<Annotation>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct CarePlanActivity {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub performed_activity: Option<Vec<CodeableReference>>,
    pub progress: Option<Vec<Annotation>>,
    pub planned_activity_reference: Option<Reference>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
