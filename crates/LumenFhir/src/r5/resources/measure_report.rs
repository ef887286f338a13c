use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// The results of evaluating a measure.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct MeasureReport {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub status: Coded<MeasureReportStatus>,
    pub r#type: Coded<MeasureReportType>,
    pub data_update_type: Option<Coded<SubmitDataUpdateType>>,
    pub measure: Option<Canonical>,
    pub subject: Option<Reference>,
    pub date: Option<DateTime>,
    pub reporter: Option<Reference>,
    pub reporting_vendor: Option<Reference>,
    pub location: Option<Reference>,
    pub period: Period,
    pub input_parameters: Option<Reference>,
    pub scoring: Option<CodeableConcept>,
    pub improvement_notation: Option<CodeableConcept>,
    pub group: Option<Vec<MeasureReportGroup>>,
    pub supplemental_data: Option<Vec<Reference>>,
    pub evaluated_resource: Option<Vec<Reference>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum MeasureReportStatus {
    Complete,
    Pending,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum MeasureReportType {
    Individual,
    SubjectList,
    Summary,
    DataExchange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum SubmitDataUpdateType {
    Incremental,
    Snapshot,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct MeasureReportGroup {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub link_id: Option<String>,
    pub code: Option<CodeableConcept>,
    pub subject: Option<Reference>,
    pub population: Option<Vec<MeasureReportPopulation>>,
    #[fhir(flatten)]
    pub measure_score: Option<MeasureScore>,
    pub stratifier: Option<Vec<MeasureReportStratifier>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum MeasureScore {
    #[fhir(rename = "measureScoreQuantity")]
    Quantity(Quantity),
    #[fhir(rename = "measureScoreDateTime")]
    DateTime(DateTime),
    #[fhir(rename = "measureScoreCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[fhir(rename = "measureScorePeriod")]
    Period(Period),
    #[fhir(rename = "measureScoreRange")]
    Range(Range),
    #[fhir(rename = "measureScoreDuration")]
    Duration(Duration),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct MeasureReportPopulation {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub link_id: Option<String>,
    pub code: Option<CodeableConcept>,
    pub count: Option<Integer>,
    pub subject_results: Option<Reference>,
    pub subject_report: Option<Vec<Reference>>,
    pub subjects: Option<Reference>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct MeasureReportStratifier {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub link_id: Option<String>,
    pub code: Option<CodeableConcept>,
    pub stratum: Option<Vec<MeasureReportStratum>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum MeasureReportValue {
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
pub struct MeasureReportStratum {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    #[fhir(flatten)]
    pub value: Option<MeasureReportValue>,
    pub component: Option<Vec<MeasureReportComponent>>,
    pub population: Option<Vec<MeasureReportPopulation>>,
    #[fhir(flatten)]
    pub measure_score: Option<MeasureScore>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct MeasureReportComponent {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub link_id: Option<String>,
    pub code: CodeableConcept,
    #[fhir(flatten, required)]
    pub value: Option<MeasureReportValue>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
