use lumen_macros::{FhirCode, FhirCodec};

use crate::codec::JsonObject;
use crate::r5::*;

/// An instance of a manufactured item used in healthcare.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct Device {
    pub id: Option<Id>,
    pub meta: Option<Meta>,
    pub implicit_rules: Option<Uri>,
    pub language: Option<Code>,
    pub text: Option<Narrative>,
    pub contained: Option<Vec<Resource>>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub display_name: Option<String>,
    pub definition: Option<CodeableReference>,
    pub udi_carrier: Option<Vec<DeviceUdiCarrier>>,
    pub status: Option<Coded<DeviceStatus>>,
    pub availability_status: Option<CodeableConcept>,
    pub biological_source_event: Option<Identifier>,
    pub manufacturer: Option<String>,
    pub manufacture_date: Option<DateTime>,
    pub expiration_date: Option<DateTime>,
    pub lot_number: Option<String>,
    pub serial_number: Option<String>,
    pub name: Option<Vec<DeviceName>>,
    pub model_number: Option<String>,
    pub part_number: Option<String>,
    pub category: Option<Vec<CodeableConcept>>,
    pub r#type: Option<Vec<CodeableConcept>>,
    pub version: Option<Vec<DeviceVersion>>,
    pub conforms_to: Option<Vec<DeviceConformsTo>>,
    pub property: Option<Vec<DeviceProperty>>,
    pub mode: Option<CodeableConcept>,
    pub cycle: Option<Count>,
    pub duration: Option<Duration>,
    pub owner: Option<Reference>,
    pub contact: Option<Vec<ContactPoint>>,
    pub location: Option<Reference>,
    pub url: Option<Uri>,
    pub endpoint: Option<Vec<Reference>>,
    pub gateway: Option<Vec<CodeableReference>>,
    pub note: Option<Vec<Annotation>>,
    pub safety: Option<Vec<CodeableConcept>>,
    pub parent: Option<Reference>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum DeviceStatus {
    Active,
    Inactive,
    EnteredInError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum UdiEntryType {
    Barcode,
    Rfid,
    Manual,
    Card,
    SelfReported,
    ElectronicTransmission,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct DeviceUdiCarrier {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub device_identifier: String,
    pub issuer: Uri,
    pub jurisdiction: Option<Uri>,
    pub carrier_aidc: Option<Base64Binary>,
    pub carrier_hrf: Option<String>,
    pub entry_type: Option<Coded<UdiEntryType>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FhirCode)]
pub enum DeviceNameType {
    RegisteredName,
    UserFriendlyName,
    PatientReportedName,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct DeviceName {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub value: String,
    pub r#type: Coded<DeviceNameType>,
    pub display: Option<Boolean>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct DeviceVersion {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub r#type: Option<CodeableConcept>,
    pub component: Option<Identifier>,
    pub install_date: Option<DateTime>,
    pub value: String,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct DeviceConformsTo {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub category: Option<CodeableConcept>,
    pub specification: CodeableConcept,
    pub version: Option<String>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct DeviceProperty {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub r#type: CodeableConcept,
    #[fhir(flatten, required)]
    pub value: Option<DevicePropertyValue>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum DevicePropertyValue {
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
    #[fhir(rename = "valueAttachment")]
    Attachment(Attachment),
}
