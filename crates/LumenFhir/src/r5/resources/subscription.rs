use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// A request to be notified when data matching a topic changes.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct Subscription {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub name: Option<String>,
    pub status: Coded<SubscriptionStatusCode>,
    pub topic: Canonical,
    pub contact: Option<Vec<ContactPoint>>,
    pub end: Option<Instant>,
    pub managing_entity: Option<Reference>,
    pub reason: Option<String>,
    pub filter_by: Option<Vec<SubscriptionFilterBy>>,
    pub channel_type: Coding,
    pub endpoint: Option<Url>,
    pub parameter: Option<Vec<SubscriptionParameter>>,
    pub heartbeat_period: Option<UnsignedInt>,
    pub timeout: Option<UnsignedInt>,
    pub content_type: Option<Code>,
    pub content: Option<Coded<SubscriptionPayloadContent>>,
    pub max_count: Option<PositiveInt>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum SubscriptionStatusCode {
    Requested,
    Active,
    Error,
    Off,
    EnteredInError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum SubscriptionPayloadContent {
    Empty,
    IdOnly,
    FullResource,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct SubscriptionFilterBy {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub resource_type: Option<Uri>,
    pub filter_parameter: String,
    pub comparator: Option<Coded<SearchComparator>>,
    pub modifier: Option<Coded<SearchModifierCode>>,
    pub value: String,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct SubscriptionParameter {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub name: String,
    pub value: String,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
