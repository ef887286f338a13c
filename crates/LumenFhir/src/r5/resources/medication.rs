use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// Definition of a medication for the purposes of prescribing, dispensing
/// and administering.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct Medication {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub code: Option<CodeableConcept>,
    pub status: Option<Coded<MedicationStatus>>,
    pub marketing_authorization_holder: Option<Reference>,
    pub dose_form: Option<CodeableConcept>,
    pub total_volume: Option<Quantity>,
    pub ingredient: Option<Vec<MedicationIngredient>>,
    pub batch: Option<MedicationBatch>,
    pub definition: Option<Reference>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum MedicationStatus {
    Active,
    Inactive,
    EnteredInError,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct MedicationIngredient {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub item: CodeableReference,
    pub is_active: Option<Boolean>,
    #[fhir(flatten)]
    pub strength: Option<MedicationIngredientStrength>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum MedicationIngredientStrength {
    #[fhir(rename = "strengthRatio")]
    Ratio(Ratio),
    #[fhir(rename = "strengthCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[fhir(rename = "strengthQuantity")]
    Quantity(Quantity),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct MedicationBatch {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub lot_number: Option<String>,
    pub expiration_date: Option<DateTime>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
