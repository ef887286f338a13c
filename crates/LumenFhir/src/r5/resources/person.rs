use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// A generic person record, independent of any healthcare role.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct Person {
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
    pub name: Option<Vec<HumanName>>,
    pub telecom: Option<Vec<ContactPoint>>,
    pub gender: Option<Coded<AdministrativeGender>>,
    pub birth_date: Option<Date>,
    #[fhir(flatten)]
    pub deceased: Option<PersonDeceased>,
    pub address: Option<Vec<Address>>,
    pub marital_status: Option<CodeableConcept>,
    pub photo: Option<Vec<Attachment>>,
    pub communication: Option<Vec<PersonCommunication>>,
    pub managing_organization: Option<Reference>,
    pub link: Option<Vec<PersonLink>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum PersonDeceased {
    #[fhir(rename = "deceasedBoolean")]
    Boolean(Boolean),
    #[fhir(rename = "deceasedDateTime")]
    DateTime(DateTime),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct PersonCommunication {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub language: CodeableConcept,
    pub preferred: Option<Boolean>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum IdentityAssuranceLevel {
    Level1,
    Level2,
    Level3,
    Level4,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct PersonLink {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub target: Reference,
    pub assurance: Option<Coded<IdentityAssuranceLevel>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
