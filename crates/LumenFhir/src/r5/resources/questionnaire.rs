use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// A structured set of questions to guide data collection.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct Questionnaire {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub url: Option<Uri>,
    pub identifier: Option<Vec<Identifier>>,
    pub version: Option<String>,
    #[fhir(flatten)]
    pub version_algorithm: Option<VersionAlgorithm>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub derived_from: Option<Vec<Canonical>>,
    pub status: Coded<PublicationStatus>,
    pub experimental: Option<Boolean>,
    pub subject_type: Option<Vec<Code>>,
    pub date: Option<DateTime>,
    pub publisher: Option<String>,
    pub contact: Option<Vec<ContactDetail>>,
    pub description: Option<Markdown>,
    pub use_context: Option<Vec<UsageContext>>,
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    pub purpose: Option<Markdown>,
    pub copyright: Option<Markdown>,
    pub copyright_label: Option<String>,
    pub approval_date: Option<Date>,
    pub last_review_date: Option<Date>,
    pub effective_period: Option<Period>,
    pub code: Option<Vec<Coding>>,
    pub item: Option<Vec<QuestionnaireItem>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum QuestionnaireItemType {
    Group,
    Display,
    Question,
    Boolean,
    Decimal,
    Integer,
    Date,
    DateTime,
    Time,
    String,
    Text,
    Url,
    Coding,
    Attachment,
    Reference,
    Quantity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum EnableWhenBehavior {
    All,
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum QuestionnaireItemDisabledDisplay {
    Hidden,
    Protected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum QuestionnaireAnswerConstraint {
    OptionsOnly,
    OptionsOrType,
    OptionsOrString,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct QuestionnaireItem {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub link_id: String,
    pub definition: Option<Uri>,
    pub code: Option<Vec<Coding>>,
    pub prefix: Option<String>,
    pub text: Option<String>,
    pub r#type: Coded<QuestionnaireItemType>,
    pub enable_when: Option<Vec<QuestionnaireEnableWhen>>,
    pub enable_behavior: Option<Coded<EnableWhenBehavior>>,
    pub disabled_display: Option<Coded<QuestionnaireItemDisabledDisplay>>,
    pub required: Option<Boolean>,
    pub repeats: Option<Boolean>,
    pub read_only: Option<Boolean>,
    pub max_length: Option<Integer>,
    pub answer_constraint: Option<Coded<QuestionnaireAnswerConstraint>>,
    pub answer_value_set: Option<Canonical>,
    pub answer_option: Option<Vec<QuestionnaireAnswerOption>>,
    pub initial: Option<Vec<QuestionnaireInitial>>,
    pub item: Option<Vec<QuestionnaireItem>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum QuestionnaireItemOperator {
    Exists,
    #[fhir(rename = "=")]
    Equals,
    #[fhir(rename = "!=")]
    NotEquals,
    #[fhir(rename = ">")]
    GreaterThan,
    #[fhir(rename = "<")]
    LessThan,
    #[fhir(rename = ">=")]
    GreaterOrEqual,
    #[fhir(rename = "<=")]
    LessOrEqual,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum QuestionnaireEnableWhenAnswer {
    #[fhir(rename = "answerBoolean")]
    Boolean(Boolean),
    #[fhir(rename = "answerDecimal")]
    Decimal(Decimal),
    #[fhir(rename = "answerInteger")]
    Integer(Integer),
    #[fhir(rename = "answerDate")]
    Date(Date),
    #[fhir(rename = "answerDateTime")]
    DateTime(DateTime),
    #[fhir(rename = "answerTime")]
    Time(Time),
    #[fhir(rename = "answerString")]
    String(String),
    #[fhir(rename = "answerCoding")]
    Coding(Coding),
    #[fhir(rename = "answerQuantity")]
    Quantity(Quantity),
    #[fhir(rename = "answerReference")]
    Reference(Reference),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct QuestionnaireEnableWhen {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub question: String,
    pub operator: Coded<QuestionnaireItemOperator>,
    #[fhir(flatten, required)]
    pub answer: Option<QuestionnaireEnableWhenAnswer>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum QuestionnaireAnswerOptionValue {
    #[fhir(rename = "valueInteger")]
    Integer(Integer),
    #[fhir(rename = "valueDate")]
    Date(Date),
    #[fhir(rename = "valueTime")]
    Time(Time),
    #[fhir(rename = "valueString")]
    String(String),
    #[fhir(rename = "valueCoding")]
    Coding(Coding),
    #[fhir(rename = "valueReference")]
    Reference(Reference),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct QuestionnaireAnswerOption {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    #[fhir(flatten, required)]
    pub value: Option<QuestionnaireAnswerOptionValue>,
    pub initial_selected: Option<Boolean>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum QuestionnaireInitialValue {
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

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct QuestionnaireInitial {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    #[fhir(flatten, required)]
    pub value: Option<QuestionnaireInitialValue>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
