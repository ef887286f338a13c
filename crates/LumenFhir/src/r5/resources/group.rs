use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// A defined collection of people, animals, devices or other entities.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct Group {
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
    pub r#type: Coded<GroupType>,
    pub membership: Coded<GroupMembershipBasis>,
    pub code: Option<CodeableConcept>,
    pub name: Option<String>,
    pub description: Option<Markdown>,
    pub quantity: Option<UnsignedInt>,
    pub managing_entity: Option<Reference>,
    pub characteristic: Option<Vec<GroupCharacteristic>>,
    pub member: Option<Vec<GroupMember>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum GroupType {
    Person,
    Animal,
    Practitioner,
    Device,
    Careteam,
    Healthcareservice,
    Location,
    Organization,
    Relatedperson,
    Specimen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum GroupMembershipBasis {
    Definitional,
    Enumerated,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct GroupCharacteristic {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: CodeableConcept,
    #[fhir(flatten, required)]
    pub value: Option<GroupCharacteristicValue>,
    pub exclude: Boolean,
    pub period: Option<Period>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum GroupCharacteristicValue {
    #[fhir(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[fhir(rename = "valueBoolean")]
    Boolean(Boolean),
    #[fhir(rename = "valueQuantity")]
    Quantity(Quantity),
    #[fhir(rename = "valueRange")]
    Range(Range),
    #[fhir(rename = "valueReference")]
    Reference(Reference),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct GroupMember {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub entity: Reference,
    pub period: Option<Period>,
    pub inactive: Option<Boolean>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
