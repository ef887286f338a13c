use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// A record of a security- or privacy-relevant system event.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct AuditEvent {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub category: Option<Vec<CodeableConcept>>,
    pub code: CodeableConcept,
    pub action: Option<Coded<AuditEventAction>>,
    pub severity: Option<Coded<AuditEventSeverity>>,
    #[fhir(flatten)]
    pub occurred: Option<AuditEventOccurred>,
    pub recorded: Instant,
    pub outcome: Option<AuditEventOutcome>,
    pub authorization: Option<Vec<CodeableConcept>>,
    pub based_on: Option<Vec<Reference>>,
    pub patient: Option<Reference>,
    pub encounter: Option<Reference>,
    pub agent: Vec<AuditEventAgent>,
    pub source: AuditEventSource,
    pub entity: Option<Vec<AuditEventEntity>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum AuditEventAction {
    #[fhir(rename = "C")]
    Create,
    #[fhir(rename = "R")]
    Read,
    #[fhir(rename = "U")]
    Update,
    #[fhir(rename = "D")]
    Delete,
    #[fhir(rename = "E")]
    Execute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum AuditEventSeverity {
    Emergency,
    Alert,
    Critical,
    Error,
    Warning,
    Notice,
    Informational,
    Debug,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum AuditEventOccurred {
    #[fhir(rename = "occurredPeriod")]
    Period(Period),
    #[fhir(rename = "occurredDateTime")]
    DateTime(DateTime),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct AuditEventOutcome {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: Coding,
    pub detail: Option<Vec<CodeableConcept>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct AuditEventAgent {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub r#type: Option<CodeableConcept>,
    pub role: Option<Vec<CodeableConcept>>,
    pub who: Reference,
    pub requestor: Option<Boolean>,
    pub location: Option<Reference>,
    pub policy: Option<Vec<Uri>>,
    #[fhir(flatten)]
    pub network: Option<AuditEventNetwork>,
    pub authorization: Option<Vec<CodeableConcept>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum AuditEventNetwork {
    #[fhir(rename = "networkReference")]
    Reference(Reference),
    #[fhir(rename = "networkUri")]
    Uri(Uri),
    #[fhir(rename = "networkString")]
    String(String),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct AuditEventSource {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub site: Option<Reference>,
    pub observer: Reference,
    pub r#type: Option<Vec<CodeableConcept>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct AuditEventEntity {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub what: Option<Reference>,
    pub role: Option<CodeableConcept>,
    pub security_label: Option<Vec<CodeableConcept>>,
    pub query: Option<Base64Binary>,
    pub detail: Option<Vec<AuditEventDetail>>,
    pub agent: Option<Vec<AuditEventAgent>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct AuditEventDetail {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub r#type: CodeableConcept,
    #[fhir(flatten, required)]
    pub value: Option<AuditEventDetailValue>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum AuditEventDetailValue {
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
    #[fhir(rename = "valueTime")]
    Time(Time),
    #[fhir(rename = "valueDateTime")]
    DateTime(DateTime),
    #[fhir(rename = "valuePeriod")]
    Period(Period),
    #[fhir(rename = "valueBase64Binary")]
    Base64Binary(Base64Binary),
}
