use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A definition of a quality measure.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct Measure {
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
    pub subtitle: Option<String>,
    pub status: Coded<PublicationStatus>,
    pub experimental: Option<Boolean>,
    #[fhir(flatten)]
    pub subject: Option<MeasureSubject>,
    pub basis: Option<Code>,
    pub date: Option<DateTime>,
    pub publisher: Option<String>,
    pub contact: Option<Vec<ContactDetail>>,
    pub description: Option<Markdown>,
    pub use_context: Option<Vec<UsageContext>>,
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    pub purpose: Option<Markdown>,
    pub usage: Option<Markdown>,
    pub copyright: Option<Markdown>,
    pub copyright_label: Option<String>,
    pub approval_date: Option<Date>,
    pub last_review_date: Option<Date>,
    pub effective_period: Option<Period>,
    pub topic: Option<Vec<CodeableConcept>>,
    pub author: Option<Vec<ContactDetail>>,
    pub editor: Option<Vec<ContactDetail>>,
    pub reviewer: Option<Vec<ContactDetail>>,
    pub endorser: Option<Vec<ContactDetail>>,
    pub related_artifact: Option<Vec<RelatedArtifact>>,
    pub library: Option<Vec<Canonical>>,
    pub disclaimer: Option<Markdown>,
    pub scoring: Option<CodeableConcept>,
    pub scoring_unit: Option<CodeableConcept>,
    pub composite_scoring: Option<CodeableConcept>,
    pub r#type: Option<Vec<CodeableConcept>>,
    pub risk_adjustment: Option<Markdown>,
    pub rate_aggregation: Option<Markdown>,
    pub rationale: Option<Markdown>,
    pub clinical_recommendation_statement: Option<Markdown>,
    pub improvement_notation: Option<CodeableConcept>,
    pub term: Option<Vec<MeasureTerm>>,
    pub guidance: Option<Markdown>,
    pub group: Option<Vec<MeasureGroup>>,
    pub supplemental_data: Option<Vec<MeasureSupplementalData>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum MeasureSubject {
    #[fhir(rename = "subjectCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[fhir(rename = "subjectReference")]
    Reference(Reference),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct MeasureTerm {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: Option<CodeableConcept>,
    pub definition: Option<Markdown>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct MeasureGroup {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub link_id: Option<String>,
    pub code: Option<CodeableConcept>,
    pub description: Option<Markdown>,
    pub r#type: Option<Vec<CodeableConcept>>,
    #[fhir(flatten)]
    pub subject: Option<MeasureSubject>,
    pub basis: Option<Code>,
    pub scoring: Option<CodeableConcept>,
    pub scoring_unit: Option<CodeableConcept>,
    pub rate_aggregation: Option<Markdown>,
    pub improvement_notation: Option<CodeableConcept>,
    pub library: Option<Vec<Canonical>>,
    pub population: Option<Vec<MeasurePopulation>>,
    pub stratifier: Option<Vec<MeasureStratifier>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct MeasurePopulation {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub link_id: Option<String>,
    pub code: Option<CodeableConcept>,
    pub description: Option<Markdown>,
    pub criteria: Option<Expression>,
    pub group_definition: Option<Reference>,
    pub input_population_id: Option<String>,
    pub aggregate_method: Option<CodeableConcept>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct MeasureStratifier {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub link_id: Option<String>,
    pub code: Option<CodeableConcept>,
    pub description: Option<Markdown>,
    pub criteria: Option<Expression>,
    pub group_definition: Option<Reference>,
    pub component: Option<Vec<MeasureStratifierComponent>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct MeasureStratifierComponent {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub link_id: Option<String>,
    pub code: Option<CodeableConcept>,
    pub description: Option<Markdown>,
    pub criteria: Option<Expression>,
    pub group_definition: Option<Reference>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct MeasureSupplementalData {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub link_id: Option<String>,
    pub code: Option<CodeableConcept>,
    pub usage: Option<Vec<CodeableConcept>>,
    pub description: Option<Markdown>,
    pub criteria: Expression,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
