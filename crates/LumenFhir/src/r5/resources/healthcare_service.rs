use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A service offered at a location by an organization.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct HealthcareService {
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
    pub provided_by: Option<Reference>,
    pub offered_in: Option<Vec<Reference>>,
    pub category: Option<Vec<CodeableConcept>>,
    pub r#type: Option<Vec<CodeableConcept>>,
    pub specialty: Option<Vec<CodeableConcept>>,
    pub location: Option<Vec<Reference>>,
    pub name: Option<String>,
    pub comment: Option<Markdown>,
    pub extra_details: Option<Markdown>,
    pub photo: Option<Attachment>,
    pub contact: Option<Vec<ExtendedContactDetail>>,
    pub coverage_area: Option<Vec<Reference>>,
    pub service_provision_code: Option<Vec<CodeableConcept>>,
    pub eligibility: Option<Vec<HealthcareServiceEligibility>>,
    pub program: Option<Vec<CodeableConcept>>,
    pub characteristic: Option<Vec<CodeableConcept>>,
    pub communication: Option<Vec<CodeableConcept>>,
    pub referral_method: Option<Vec<CodeableConcept>>,
    pub appointment_required: Option<Boolean>,
    pub availability: Option<Vec<Availability>>,
    pub endpoint: Option<Vec<Reference>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct HealthcareServiceEligibility {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: Option<CodeableConcept>,
    pub comment: Option<Markdown>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
