use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// A physical place where services are provided or resources are stored.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct Location {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub status: Option<Coded<LocationStatus>>,
    pub operational_status: Option<Coding>,
    pub name: Option<String>,
    pub alias: Option<Vec<String>>,
    pub description: Option<Markdown>,
    pub mode: Option<Coded<LocationMode>>,
    pub r#type: Option<Vec<CodeableConcept>>,
    pub contact: Option<Vec<ExtendedContactDetail>>,
    pub address: Option<Address>,
    pub form: Option<CodeableConcept>,
    pub position: Option<LocationPosition>,
    pub managing_organization: Option<Reference>,
    pub part_of: Option<Reference>,
    pub characteristic: Option<Vec<CodeableConcept>>,
    pub hours_of_operation: Option<Vec<Availability>>,
    pub virtual_service: Option<Vec<VirtualServiceDetail>>,
    pub endpoint: Option<Vec<Reference>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum LocationStatus {
    Active,
    Suspended,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum LocationMode {
    Instance,
    Kind,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct LocationPosition {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub longitude: Decimal,
    pub latitude: Decimal,
    pub altitude: Option<Decimal>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
