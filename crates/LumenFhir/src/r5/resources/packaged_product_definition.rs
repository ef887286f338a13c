use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A medically related item or items, in a container or package.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(resource)]
pub struct PackagedProductDefinition {
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
    pub r#type: Option<CodeableConcept>,
    pub package_for: Option<Vec<Reference>>,
    pub status: Option<CodeableConcept>,
    pub status_date: Option<DateTime>,
    pub contained_item_quantity: Option<Vec<Quantity>>,
    pub description: Option<Markdown>,
    pub legal_status_of_supply: Option<Vec<PackagedProductDefinitionLegalStatusOfSupply>>,
    pub marketing_status: Option<Vec<MarketingStatus>>,
    pub copackaged_indicator: Option<Boolean>,
    pub manufacturer: Option<Vec<Reference>>,
    pub attached_document: Option<Vec<Reference>>,
    pub packaging: Option<PackagedProductDefinitionPackaging>,
    pub characteristic: Option<Vec<PackagedProductDefinitionProperty>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct PackagedProductDefinitionLegalStatusOfSupply {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub code: Option<CodeableConcept>,
    pub jurisdiction: Option<CodeableConcept>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct PackagedProductDefinitionPackaging {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub identifier: Option<Vec<Identifier>>,
    pub r#type: Option<CodeableConcept>,
    pub component_part: Option<Boolean>,
    pub quantity: Option<Integer>,
    pub material: Option<Vec<CodeableConcept>>,
    pub alternate_material: Option<Vec<CodeableConcept>>,
    pub shelf_life_storage: Option<Vec<ProductShelfLife>>,
    pub manufacturer: Option<Vec<Reference>>,
    pub property: Option<Vec<PackagedProductDefinitionProperty>>,
    pub contained_item: Option<Vec<PackagedProductDefinitionContainedItem>>,
    pub packaging: Option<Vec<PackagedProductDefinitionPackaging>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum PackagedProductDefinitionPropertyValue {
    #[fhir(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[fhir(rename = "valueQuantity")]
    Quantity(Quantity),
    #[fhir(rename = "valueDate")]
    Date(Date),
    #[fhir(rename = "valueBoolean")]
    Boolean(Boolean),
    #[fhir(rename = "valueAttachment")]
    Attachment(Attachment),
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct PackagedProductDefinitionProperty {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub r#type: CodeableConcept,
    #[fhir(flatten)]
    pub value: Option<PackagedProductDefinitionPropertyValue>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct PackagedProductDefinitionContainedItem {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub item: CodeableReference,
    pub amount: Option<Quantity>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
