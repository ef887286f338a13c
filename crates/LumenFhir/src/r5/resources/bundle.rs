use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// A container of resources: a search result page, a transaction, a
/// message or a document.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
#[fhir(invariant = "crate::codec::checks::bundle_advisories")]
pub struct Bundle {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub identifier: Option<Identifier>,
    pub r#type: Coded<BundleType>,
    pub timestamp: Option<Instant>,
    pub total: Option<UnsignedInt>,
    pub link: Option<Vec<BundleLink>>,
    pub entry: Option<Vec<BundleEntry>>,
    pub signature: Option<Signature>,
    pub issues: Option<Box<OperationOutcome>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum BundleType {
    Document,
    Message,
    Transaction,
    TransactionResponse,
    Batch,
    BatchResponse,
    History,
    Searchset,
    Collection,
    SubscriptionNotification,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct BundleLink {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub relation: Code,
    pub url: Uri,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct BundleEntry {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub link: Option<Vec<BundleLink>>,
    pub full_url: Option<Uri>,
    pub resource: Option<Box<Resource>>,
    pub search: Option<BundleEntrySearch>,
    pub request: Option<BundleEntryRequest>,
    pub response: Option<BundleEntryResponse>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum SearchEntryMode {
    Match,
    Include,
    Outcome,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct BundleEntrySearch {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub mode: Option<Coded<SearchEntryMode>>,
    pub score: Option<Decimal>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum HttpVerb {
    #[fhir(rename = "GET")]
    Get,
    #[fhir(rename = "HEAD")]
    Head,
    #[fhir(rename = "POST")]
    Post,
    #[fhir(rename = "PUT")]
    Put,
    #[fhir(rename = "DELETE")]
    Delete,
    #[fhir(rename = "PATCH")]
    Patch,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct BundleEntryRequest {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub method: Coded<HttpVerb>,
    pub url: Uri,
    pub if_none_match: Option<String>,
    pub if_modified_since: Option<Instant>,
    pub if_match: Option<String>,
    pub if_none_exist: Option<String>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct BundleEntryResponse {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub status: String,
    pub location: Option<Uri>,
    pub etag: Option<String>,
    pub last_modified: Option<Instant>,
    pub outcome: Option<Box<Resource>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
