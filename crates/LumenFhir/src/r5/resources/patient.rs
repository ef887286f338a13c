use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// Demographics and administrative details of a person receiving care.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct Patient {
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
    pub deceased: Option<PatientDeceased>,
    pub address: Option<Vec<Address>>,
    pub marital_status: Option<CodeableConcept>,
    #[fhir(flatten)]
    pub multiple_birth: Option<PatientMultipleBirth>,
    pub photo: Option<Vec<Attachment>>,
    pub contact: Option<Vec<PatientContact>>,
    pub communication: Option<Vec<PatientCommunication>>,
    pub general_practitioner: Option<Vec<Reference>>,
    pub managing_organization: Option<Reference>,
    pub link: Option<Vec<PatientLink>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum PatientDeceased {
    #[fhir(rename = "deceasedBoolean")]
    Boolean(Boolean),
    #[fhir(rename = "deceasedDateTime")]
    DateTime(DateTime),
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum PatientMultipleBirth {
    #[fhir(rename = "multipleBirthBoolean")]
    Boolean(Boolean),
    #[fhir(rename = "multipleBirthInteger")]
    Integer(Integer),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct PatientContact {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub relationship: Option<Vec<CodeableConcept>>,
    pub name: Option<HumanName>,
    pub telecom: Option<Vec<ContactPoint>>,
    pub address: Option<Address>,
    pub gender: Option<Coded<AdministrativeGender>>,
    pub organization: Option<Reference>,
    pub period: Option<Period>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct PatientCommunication {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub language: CodeableConcept,
    pub preferred: Option<Boolean>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum PatientLinkType {
    ReplacedBy,
    Replaces,
    Refer,
    Seealso,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct PatientLink {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub other: Reference,
    pub r#type: Coded<PatientLinkType>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
