use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// An authorization for corrective lenses.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct VisionPrescription {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub status: Coded<FinancialResourceStatus>,
    pub created: DateTime,
    pub patient: Reference,
    pub encounter: Option<Reference>,
    pub date_written: DateTime,
    pub prescriber: Reference,
    pub lens_specification: Vec<VisionPrescriptionLensSpecification>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum FinancialResourceStatus {
    Active,
    Cancelled,
    Draft,
    EnteredInError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum VisionEye {
    Right,
    Left,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct VisionPrescriptionLensSpecification {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub product: CodeableConcept,
    pub eye: Coded<VisionEye>,
    pub sphere: Option<Decimal>,
    pub cylinder: Option<Decimal>,
    pub axis: Option<Integer>,
    pub prism: Option<Vec<VisionPrescriptionPrism>>,
    pub add: Option<Decimal>,
    pub power: Option<Decimal>,
    pub back_curve: Option<Decimal>,
    pub diameter: Option<Decimal>,
    pub duration: Option<Quantity>,
    pub color: Option<String>,
    pub brand: Option<String>,
    pub note: Option<Vec<Annotation>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum VisionBase {
    Up,
    Down,
    In,
    Out,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct VisionPrescriptionPrism {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub amount: Decimal,
    pub base: Coded<VisionBase>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
