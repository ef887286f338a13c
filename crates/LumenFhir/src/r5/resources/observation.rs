use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// A measurement or assertion made about a subject.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct Observation {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    #[fhir(flatten)]
    pub instantiates: Option<ObservationInstantiates>,
    pub based_on: Option<Vec<Reference>>,
    pub triggered_by: Option<Vec<ObservationTriggeredBy>>,
    pub part_of: Option<Vec<Reference>>,
    pub status: Coded<ObservationStatus>,
    pub category: Option<Vec<CodeableConcept>>,
    pub code: CodeableConcept,
    pub subject: Option<Reference>,
    pub focus: Option<Vec<Reference>>,
    pub encounter: Option<Reference>,
    #[fhir(flatten)]
    pub effective: Option<ObservationEffective>,
    pub issued: Option<Instant>,
    pub performer: Option<Vec<Reference>>,
    #[fhir(flatten)]
    pub value: Option<ObservationValue>,
    pub data_absent_reason: Option<CodeableConcept>,
    pub interpretation: Option<Vec<CodeableConcept>>,
    pub note: Option<Vec<Annotation>>,
    pub body_site: Option<CodeableConcept>,
    pub body_structure: Option<Reference>,
    pub method: Option<CodeableConcept>,
    pub specimen: Option<Reference>,
    pub device: Option<Reference>,
    pub reference_range: Option<Vec<ObservationReferenceRange>>,
    pub has_member: Option<Vec<Reference>>,
    pub derived_from: Option<Vec<Reference>>,
    pub component: Option<Vec<ObservationComponent>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum ObservationInstantiates {
    #[fhir(rename = "instantiatesCanonical")]
    Canonical(Canonical),
    #[fhir(rename = "instantiatesReference")]
    Reference(Reference),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum TriggeredByType {
    Reflex,
    Repeat,
    ReRun,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ObservationTriggeredBy {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub observation: Reference,
    pub r#type: Coded<TriggeredByType>,
    pub reason: Option<String>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum ObservationEffective {
    #[fhir(rename = "effectiveDateTime")]
    DateTime(DateTime),
    #[fhir(rename = "effectivePeriod")]
    Period(Period),
    #[fhir(rename = "effectiveTiming")]
    Timing(Timing),
    #[fhir(rename = "effectiveInstant")]
    Instant(Instant),
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum ObservationValue {
    #[fhir(rename = "valueQuantity")]
    Quantity(Quantity),
    #[fhir(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[fhir(rename = "valueString")]
    String(String),
    #[fhir(rename = "valueBoolean")]
    Boolean(Boolean),
    #[fhir(rename = "valueInteger")]
    Integer(Integer),
    #[fhir(rename = "valueRange")]
    Range(Range),
    #[fhir(rename = "valueRatio")]
    Ratio(Ratio),
    #[fhir(rename = "valueSampledData")]
    SampledData(SampledData),
    #[fhir(rename = "valueTime")]
    Time(Time),
    #[fhir(rename = "valueDateTime")]
    DateTime(DateTime),
    #[fhir(rename = "valuePeriod")]
    Period(Period),
    #[fhir(rename = "valueAttachment")]
    Attachment(Attachment),
    #[fhir(rename = "valueReference")]
    Reference(Reference),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ObservationReferenceRange {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub low: Option<Quantity>,
    pub high: Option<Quantity>,
    pub normal_value: Option<CodeableConcept>,
    pub r#type: Option<CodeableConcept>,
    pub applies_to: Option<Vec<CodeableConcept>>,
    pub age: Option<Range>,
    pub text: Option<Markdown>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct ObservationComponent {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: CodeableConcept,
    #[fhir(flatten)]
    pub value: Option<ObservationValue>,
    pub data_absent_reason: Option<CodeableConcept>,
    pub interpretation: Option<Vec<CodeableConcept>>,
    pub reference_range: Option<Vec<ObservationReferenceRange>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
