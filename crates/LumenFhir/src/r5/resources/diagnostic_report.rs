use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// Findings and interpretation of diagnostic tests.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct DiagnosticReport {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub based_on: Option<Vec<Reference>>,
    pub status: Coded<DiagnosticReportStatus>,
    pub category: Option<Vec<CodeableConcept>>,
    pub code: CodeableConcept,
    pub subject: Option<Reference>,
    pub encounter: Option<Reference>,
    #[fhir(flatten)]
    pub effective: Option<DiagnosticReportEffective>,
    pub issued: Option<Instant>,
    pub performer: Option<Vec<Reference>>,
    pub results_interpreter: Option<Vec<Reference>>,
    pub specimen: Option<Vec<Reference>>,
    pub result: Option<Vec<Reference>>,
    pub note: Option<Vec<Annotation>>,
    pub study: Option<Vec<Reference>>,
    pub supporting_info: Option<Vec<DiagnosticReportSupportingInfo>>,
    pub media: Option<Vec<DiagnosticReportMedia>>,
    pub composition: Option<Reference>,
    pub conclusion: Option<Markdown>,
    pub conclusion_code: Option<Vec<CodeableConcept>>,
    pub presented_form: Option<Vec<Attachment>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum DiagnosticReportStatus {
    Registered,
    Partial,
    Preliminary,
    Modified,
    Final,
    Amended,
    Corrected,
    Appended,
    Cancelled,
    EnteredInError,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum DiagnosticReportEffective {
    #[fhir(rename = "effectiveDateTime")]
    DateTime(DateTime),
    #[fhir(rename = "effectivePeriod")]
    Period(Period),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct DiagnosticReportSupportingInfo {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub r#type: CodeableConcept,
    pub reference: Reference,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct DiagnosticReportMedia {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub comment: Option<String>,
    pub link: Reference,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
