use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// A homogeneous material with a definite composition.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct Substance {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub instance: Boolean,
    pub status: Option<Coded<SubstanceStatus>>,
    pub category: Option<Vec<CodeableConcept>>,
    pub code: CodeableReference,
    pub description: Option<Markdown>,
    pub expiry: Option<DateTime>,
    pub quantity: Option<Quantity>,
    pub ingredient: Option<Vec<SubstanceIngredient>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum SubstanceStatus {
    Active,
    Inactive,
    EnteredInError,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct SubstanceIngredient {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub quantity: Option<Ratio>,
    #[fhir(flatten, required)]
    pub substance: Option<SubstanceIngredientSubstance>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum SubstanceIngredientSubstance {
    #[fhir(rename = "substanceCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[fhir(rename = "substanceReference")]
    Reference(Reference),
}
