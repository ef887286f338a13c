use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// A structured composition of evidence and related artifacts.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct EvidenceReport {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub url: Option<Uri>,
    pub status: Coded<PublicationStatus>,
    pub use_context: Option<Vec<UsageContext>>,
    pub identifier: Option<Vec<Identifier>>,
    pub related_identifier: Option<Vec<Identifier>>,
    #[fhir(flatten)]
    pub cite_as: Option<EvidenceReportCiteAs>,
    pub r#type: Option<CodeableConcept>,
    pub note: Option<Vec<Annotation>>,
    pub related_artifact: Option<Vec<RelatedArtifact>>,
    pub subject: EvidenceReportSubject,
    pub publisher: Option<String>,
    pub contact: Option<Vec<ContactDetail>>,
    pub author: Option<Vec<ContactDetail>>,
    pub editor: Option<Vec<ContactDetail>>,
    pub reviewer: Option<Vec<ContactDetail>>,
    pub endorser: Option<Vec<ContactDetail>>,
    pub relates_to: Option<Vec<EvidenceReportRelatesTo>>,
    pub section: Option<Vec<EvidenceReportSection>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum EvidenceReportCiteAs {
    #[fhir(rename = "citeAsReference")]
    Reference(Reference),
    #[fhir(rename = "citeAsMarkdown")]
    Markdown(Markdown),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct EvidenceReportSubject {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub characteristic: Option<Vec<EvidenceReportCharacteristic>>,
    pub note: Option<Vec<Annotation>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum EvidenceReportCharacteristicValue {
    #[fhir(rename = "valueReference")]
    Reference(Reference),
    #[fhir(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[fhir(rename = "valueBoolean")]
    Boolean(Boolean),
    #[fhir(rename = "valueQuantity")]
    Quantity(Quantity),
    #[fhir(rename = "valueRange")]
    Range(Range),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct EvidenceReportCharacteristic {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: CodeableConcept,
    #[fhir(flatten, required)]
    pub value: Option<EvidenceReportCharacteristicValue>,
    pub exclude: Option<Boolean>,
    pub period: Option<Period>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum ReportRelationshipType {
    Replaces,
    Amends,
    Appends,
    Transforms,
    ReplacedWith,
    AmendedWith,
    AppendedWith,
    TransformedWith,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct EvidenceReportRelatesTo {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: Coded<ReportRelationshipType>,
    pub target: EvidenceReportRelatesToTarget,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct EvidenceReportRelatesToTarget {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub url: Option<Uri>,
    pub identifier: Option<Identifier>,
    pub display: Option<Markdown>,
    pub resource: Option<Reference>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct EvidenceReportSection {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub title: Option<String>,
    pub focus: Option<CodeableConcept>,
    pub focus_reference: Option<Reference>,
    pub author: Option<Vec<Reference>>,
    pub text: Option<Narrative>,
    pub mode: Option<Coded<ListMode>>,
    pub ordered_by: Option<CodeableConcept>,
    pub entry_classifier: Option<Vec<CodeableConcept>>,
    pub entry_reference: Option<Vec<Reference>>,
    pub entry_quantity: Option<Vec<Quantity>>,
    pub empty_reason: Option<CodeableConcept>,
    pub section: Option<Vec<EvidenceReportSection>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
