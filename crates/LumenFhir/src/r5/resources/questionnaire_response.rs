use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// A completed or partial set of answers to a questionnaire.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct QuestionnaireResponse {
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
    pub part_of: Option<Vec<Reference>>,
    pub questionnaire: Canonical,
    pub status: Coded<QuestionnaireResponseStatus>,
    pub subject: Option<Reference>,
    pub encounter: Option<Reference>,
    pub authored: Option<DateTime>,
    pub author: Option<Reference>,
    pub source: Option<Reference>,
    pub item: Option<Vec<QuestionnaireResponseItem>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum QuestionnaireResponseStatus {
    InProgress,
    Completed,
    Amended,
    EnteredInError,
    Stopped,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct QuestionnaireResponseItem {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub link_id: String,
    pub definition: Option<Uri>,
    pub text: Option<String>,
    pub answer: Option<Vec<QuestionnaireResponseAnswer>>,
    pub item: Option<Vec<QuestionnaireResponseItem>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct QuestionnaireResponseAnswer {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    #[fhir(flatten, required)]
    pub value: Option<QuestionnaireResponseAnswerValue>,
    pub item: Option<Vec<QuestionnaireResponseItem>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum QuestionnaireResponseAnswerValue {
    #[fhir(rename = "valueBoolean")]
    Boolean(Boolean),
    #[fhir(rename = "valueDecimal")]
    Decimal(Decimal),
    #[fhir(rename = "valueInteger")]
    Integer(Integer),
    #[fhir(rename = "valueDate")]
    Date(Date),
    #[fhir(rename = "valueDateTime")]
    DateTime(DateTime),
    #[fhir(rename = "valueTime")]
    Time(Time),
    #[fhir(rename = "valueString")]
    String(String),
    #[fhir(rename = "valueUri")]
    Uri(Uri),
    #[fhir(rename = "valueAttachment")]
    Attachment(Attachment),
    #[fhir(rename = "valueCoding")]
    Coding(Coding),
    #[fhir(rename = "valueQuantity")]
    Quantity(Quantity),
    #[fhir(rename = "valueReference")]
    Reference(Reference),
}
