use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A machine-processable description of the data a knowledge artifact
/// needs. The `type` binding is the full resource-and-datatype list, so it
/// stays an open code here.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct DataRequirement {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub r#type: Code,
    pub profile: Option<Vec<Canonical>>,
    #[fhir(flatten)]
    pub subject: Option<DataRequirementSubject>,
    pub must_support: Option<Vec<String>>,
    pub code_filter: Option<Vec<DataRequirementCodeFilter>>,
    pub date_filter: Option<Vec<DataRequirementDateFilter>>,
    pub value_filter: Option<Vec<DataRequirementValueFilter>>,
    pub limit: Option<PositiveInt>,
    pub sort: Option<Vec<DataRequirementSort>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum DataRequirementSubject {
    #[fhir(rename = "subjectCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[fhir(rename = "subjectReference")]
    Reference(Reference),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct DataRequirementCodeFilter {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub path: Option<String>,
    pub search_param: Option<String>,
    pub value_set: Option<Canonical>,
    pub code: Option<Vec<Coding>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct DataRequirementDateFilter {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub path: Option<String>,
    pub search_param: Option<String>,
    #[fhir(flatten)]
    pub value: Option<DataRequirementFilterValue>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct DataRequirementValueFilter {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub path: Option<String>,
    pub search_param: Option<String>,
    pub comparator: Option<Code>,
    #[fhir(flatten)]
    pub value: Option<DataRequirementFilterValue>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum DataRequirementFilterValue {
    #[fhir(rename = "valueDateTime")]
    DateTime(DateTime),
    #[fhir(rename = "valuePeriod")]
    Period(Period),
    #[fhir(rename = "valueDuration")]
    Duration(Duration),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct DataRequirementSort {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub path: String,
    pub direction: Coded<SortDirection>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
