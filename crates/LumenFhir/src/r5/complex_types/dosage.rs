use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// How a medication is or should be taken. A backbone-pattern data type.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct Dosage {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub sequence: Option<Integer>,
    pub text: Option<String>,
    pub additional_instruction: Option<Vec<CodeableConcept>>,
    pub patient_instruction: Option<String>,
    pub timing: Option<Timing>,
    pub as_needed: Option<Boolean>,
    pub as_needed_for: Option<Vec<CodeableConcept>>,
    pub site: Option<CodeableConcept>,
    pub route: Option<CodeableConcept>,
    pub method: Option<CodeableConcept>,
    pub dose_and_rate: Option<Vec<DosageDoseAndRate>>,
    pub max_dose_per_period: Option<Vec<Ratio>>,
    pub max_dose_per_administration: Option<Quantity>,
    pub max_dose_per_lifetime: Option<Quantity>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct DosageDoseAndRate {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub r#type: Option<CodeableConcept>,
    #[fhir(flatten)]
    pub dose: Option<DosageDose>,
    #[fhir(flatten)]
    pub rate: Option<DosageRate>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum DosageDose {
    #[fhir(rename = "doseRange")]
    Range(Range),
    #[fhir(rename = "doseQuantity")]
    Quantity(Quantity),
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum DosageRate {
    #[fhir(rename = "rateRatio")]
    Ratio(Ratio),
    #[fhir(rename = "rateRange")]
    Range(Range),
    #[fhir(rename = "rateQuantity")]
    Quantity(Quantity),
}
