//! Required-binding code enums shared across the catalogue.
//!
//! Bindings used by a single resource live next to that resource; the enums
//! here back the general-purpose data types or recur across many resources.
//! Wire names are the kebab-case variant name unless renamed.

use lumen_macros::FhirCode;

/// `PublicationStatus`: lifecycle of definitional artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum PublicationStatus {
    Draft,
    Active,
    Retired,
    Unknown,
}

/// `AdministrativeGender`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum AdministrativeGender {
    Male,
    Female,
    Other,
    Unknown,
}

/// `RequestStatus`: lifecycle of request-pattern resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum RequestStatus {
    Draft,
    Active,
    OnHold,
    Revoked,
    Completed,
    EnteredInError,
    Unknown,
}

/// `RequestIntent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum RequestIntent {
    Proposal,
    Plan,
    Directive,
    Order,
    OriginalOrder,
    ReflexOrder,
    FillerOrder,
    InstanceOrder,
    Option,
}

/// `RequestPriority`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum RequestPriority {
    Routine,
    Urgent,
    Asap,
    Stat,
}

/// `EventStatus`: lifecycle of event-pattern resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum EventStatus {
    Preparation,
    InProgress,
    NotDone,
    OnHold,
    Stopped,
    Completed,
    EnteredInError,
    Unknown,
}

/// `ObservationStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum ObservationStatus {
    Registered,
    Preliminary,
    Final,
    Amended,
    Corrected,
    Cancelled,
    EnteredInError,
    Unknown,
}

/// `NarrativeStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum NarrativeStatus {
    Generated,
    Extensions,
    Additional,
    Empty,
}

/// `QuantityComparator`: the symbols need explicit wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum QuantityComparator {
    #[fhir(rename = "<")]
    LessThan,
    #[fhir(rename = "<=")]
    LessOrEqual,
    #[fhir(rename = ">=")]
    GreaterOrEqual,
    #[fhir(rename = ">")]
    GreaterThan,
    Ad,
}

/// `IdentifierUse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum IdentifierUse {
    Usual,
    Official,
    Temp,
    Secondary,
    Old,
}

/// `NameUse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum NameUse {
    Usual,
    Official,
    Temp,
    Nickname,
    Anonymous,
    Old,
    Maiden,
}

/// `ContactPointSystem`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum ContactPointSystem {
    Phone,
    Fax,
    Email,
    Pager,
    Url,
    Sms,
    Other,
}

/// `ContactPointUse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum ContactPointUse {
    Home,
    Work,
    Temp,
    Old,
    Mobile,
}

/// `AddressUse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum AddressUse {
    Home,
    Work,
    Temp,
    Old,
    Billing,
}

/// `AddressType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum AddressType {
    Postal,
    Physical,
    Both,
}

/// `DaysOfWeek`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum DaysOfWeek {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

/// `UnitsOfTime`: UCUM calendar units used by `Timing.repeat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum UnitsOfTime {
    S,
    Min,
    H,
    D,
    Wk,
    Mo,
    A,
}

/// `SortDirection` for `DataRequirement.sort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// `OperationParameterUse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum OperationParameterUse {
    In,
    Out,
}

/// `RelatedArtifactType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum RelatedArtifactType {
    Documentation,
    Justification,
    Citation,
    Predecessor,
    Successor,
    DerivedFrom,
    DependsOn,
    ComposedOf,
    PartOf,
    Amends,
    AmendedWith,
    Appends,
    AppendedWith,
    Cites,
    CitedBy,
    CommentsOn,
    CommentIn,
    Contains,
    ContainedIn,
    Corrects,
    CorrectionIn,
    Replaces,
    ReplacedWith,
    Retracts,
    RetractedBy,
    Signs,
    SimilarTo,
    Supports,
    SupportedWith,
    Transforms,
    TransformedInto,
    TransformedWith,
    Documents,
    SpecificationOf,
    CreatedWith,
    CiteAs,
}

/// `TriggerType` for `TriggerDefinition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum TriggerType {
    NamedEvent,
    Periodic,
    DataChanged,
    DataAdded,
    DataModified,
    DataRemoved,
    DataAccessed,
    DataAccessEnded,
}

/// `FHIRVersion`, restricted to the published releases this crate can
/// meaningfully interoperate with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum FhirVersion {
    #[fhir(rename = "3.0.2")]
    V3_0_2,
    #[fhir(rename = "4.0.1")]
    V4_0_1,
    #[fhir(rename = "4.3.0")]
    V4_3_0,
    #[fhir(rename = "5.0.0")]
    V5_0_0,
}
