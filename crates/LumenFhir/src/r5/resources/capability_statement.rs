use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// The capabilities of a FHIR server or client implementation.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct CapabilityStatement {
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
    pub status: Coded<PublicationStatus>,
    pub experimental: Option<Boolean>,
    pub date: DateTime,
    pub publisher: Option<String>,
    pub contact: Option<Vec<ContactDetail>>,
    pub description: Option<Markdown>,
    pub use_context: Option<Vec<UsageContext>>,
    pub jurisdiction: Option<Vec<CodeableConcept>>,
    pub purpose: Option<Markdown>,
    pub copyright: Option<Markdown>,
    pub copyright_label: Option<String>,
    pub kind: Coded<CapabilityStatementKind>,
    pub instantiates: Option<Vec<Canonical>>,
    pub imports: Option<Vec<Canonical>>,
    pub software: Option<CapabilityStatementSoftware>,
    pub implementation: Option<CapabilityStatementImplementation>,
    pub fhir_version: Coded<FhirVersion>,
    pub format: Vec<Code>,
    pub patch_format: Option<Vec<Code>>,
    pub accept_language: Option<Vec<Code>>,
    pub implementation_guide: Option<Vec<Canonical>>,
    pub rest: Option<Vec<CapabilityStatementRest>>,
    pub messaging: Option<Vec<CapabilityStatementMessaging>>,
    pub document: Option<Vec<CapabilityStatementDocument>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum CapabilityStatementKind {
    Instance,
    Capability,
    Requirements,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct CapabilityStatementSoftware {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub name: String,
    pub version: Option<String>,
    pub release_date: Option<DateTime>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct CapabilityStatementImplementation {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub description: Markdown,
    pub url: Option<Url>,
    pub custodian: Option<Reference>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum RestfulCapabilityMode {
    Client,
    Server,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct CapabilityStatementRest {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub mode: Coded<RestfulCapabilityMode>,
    pub documentation: Option<Markdown>,
    pub security: Option<CapabilityStatementSecurity>,
    pub resource: Option<Vec<CapabilityStatementResource>>,
    pub interaction: Option<Vec<CapabilityStatementSystemInteraction>>,
    pub search_param: Option<Vec<CapabilityStatementSearchParam>>,
    pub operation: Option<Vec<CapabilityStatementOperation>>,
    pub compartment: Option<Vec<Canonical>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct CapabilityStatementSecurity {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub cors: Option<Boolean>,
    pub service: Option<Vec<CodeableConcept>>,
    pub description: Option<Markdown>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum TypeRestfulInteraction {
    Read,
    Vread,
    Update,
    Patch,
    Delete,
    HistoryInstance,
    HistoryType,
    Create,
    SearchType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum SystemRestfulInteraction {
    Transaction,
    Batch,
    SearchSystem,
    HistorySystem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum ConditionalDeleteStatus {
    NotSupported,
    Single,
    Multiple,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum ConditionalReadStatus {
    NotSupported,
    ModifiedSince,
    NotMatch,
    FullSupport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum ReferenceHandlingPolicy {
    Literal,
    Logical,
    Resolves,
    Enforced,
    Local,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum ResourceVersionPolicy {
    NoVersion,
    Versioned,
    VersionedUpdate,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct CapabilityStatementResource {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub r#type: Code,
    pub profile: Option<Canonical>,
    pub supported_profile: Option<Vec<Canonical>>,
    pub documentation: Option<Markdown>,
    pub interaction: Option<Vec<CapabilityStatementInteraction>>,
    pub versioning: Option<Coded<ResourceVersionPolicy>>,
    pub read_history: Option<Boolean>,
    pub update_create: Option<Boolean>,
    pub conditional_create: Option<Boolean>,
    pub conditional_read: Option<Coded<ConditionalReadStatus>>,
    pub conditional_update: Option<Boolean>,
    pub conditional_patch: Option<Boolean>,
    pub conditional_delete: Option<Coded<ConditionalDeleteStatus>>,
    pub reference_policy: Option<Vec<Coded<ReferenceHandlingPolicy>>>,
    pub search_include: Option<Vec<String>>,
    pub search_rev_include: Option<Vec<String>>,
    pub search_param: Option<Vec<CapabilityStatementSearchParam>>,
    pub operation: Option<Vec<CapabilityStatementOperation>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct CapabilityStatementInteraction {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: Coded<TypeRestfulInteraction>,
    pub documentation: Option<Markdown>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct CapabilityStatementSystemInteraction {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: Coded<SystemRestfulInteraction>,
    pub documentation: Option<Markdown>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct CapabilityStatementSearchParam {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub name: String,
    pub definition: Option<Canonical>,
    pub r#type: Coded<SearchParamType>,
    pub documentation: Option<Markdown>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct CapabilityStatementOperation {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub name: String,
    pub definition: Canonical,
    pub documentation: Option<Markdown>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum EventCapabilityMode {
    Sender,
    Receiver,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct CapabilityStatementMessaging {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub endpoint: Option<Vec<CapabilityStatementEndpoint>>,
    pub reliable_cache: Option<UnsignedInt>,
    pub documentation: Option<Markdown>,
    pub supported_message: Option<Vec<CapabilityStatementSupportedMessage>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct CapabilityStatementEndpoint {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub protocol: Coding,
    pub address: Url,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct CapabilityStatementSupportedMessage {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub mode: Coded<EventCapabilityMode>,
    pub definition: Canonical,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum DocumentMode {
    Producer,
    Consumer,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct CapabilityStatementDocument {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub mode: Coded<DocumentMode>,
    pub documentation: Option<Markdown>,
    pub profile: Canonical,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
