use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// Open content attached to any element: a URL naming the meaning plus
/// either a single `value[x]` or nested extensions, never both and never
/// neither.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
#[fhir(invariant = "crate::codec::checks::extension_value_rules")]
pub struct Extension {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub url: std::string::String,
    #[fhir(flatten)]
    pub value: Option<ExtensionValue>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

/// The `Extension.value[x]` choice, spanning every type an extension may
/// carry.
#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum ExtensionValue {
    #[fhir(rename = "valueBase64Binary")]
    Base64Binary(Base64Binary),
    #[fhir(rename = "valueBoolean")]
    Boolean(Boolean),
    #[fhir(rename = "valueCanonical")]
    Canonical(Canonical),
    #[fhir(rename = "valueCode")]
    Code(Code),
    #[fhir(rename = "valueDate")]
    Date(Date),
    #[fhir(rename = "valueDateTime")]
    DateTime(DateTime),
    #[fhir(rename = "valueDecimal")]
    Decimal(Decimal),
    #[fhir(rename = "valueId")]
    Id(Id),
    #[fhir(rename = "valueInstant")]
    Instant(Instant),
    #[fhir(rename = "valueInteger")]
    Integer(Integer),
    #[fhir(rename = "valueInteger64")]
    Integer64(Integer64),
    #[fhir(rename = "valueMarkdown")]
    Markdown(Markdown),
    #[fhir(rename = "valueOid")]
    Oid(Oid),
    #[fhir(rename = "valuePositiveInt")]
    PositiveInt(PositiveInt),
    #[fhir(rename = "valueString")]
    String(String),
    #[fhir(rename = "valueTime")]
    Time(Time),
    #[fhir(rename = "valueUnsignedInt")]
    UnsignedInt(UnsignedInt),
    #[fhir(rename = "valueUri")]
    Uri(Uri),
    #[fhir(rename = "valueUrl")]
    Url(Url),
    #[fhir(rename = "valueUuid")]
    Uuid(Uuid),
    #[fhir(rename = "valueAddress")]
    Address(Address),
    #[fhir(rename = "valueAge")]
    Age(Age),
    #[fhir(rename = "valueAnnotation")]
    Annotation(Annotation),
    #[fhir(rename = "valueAttachment")]
    Attachment(Attachment),
    #[fhir(rename = "valueAvailability")]
    Availability(Availability),
    #[fhir(rename = "valueCodeableConcept")]
    CodeableConcept(CodeableConcept),
    #[fhir(rename = "valueCodeableReference")]
    CodeableReference(CodeableReference),
    #[fhir(rename = "valueCoding")]
    Coding(Coding),
    #[fhir(rename = "valueContactPoint")]
    ContactPoint(ContactPoint),
    #[fhir(rename = "valueCount")]
    Count(Count),
    #[fhir(rename = "valueDistance")]
    Distance(Distance),
    #[fhir(rename = "valueDuration")]
    Duration(Duration),
    #[fhir(rename = "valueHumanName")]
    HumanName(HumanName),
    #[fhir(rename = "valueIdentifier")]
    Identifier(Identifier),
    #[fhir(rename = "valueMoney")]
    Money(Money),
    #[fhir(rename = "valuePeriod")]
    Period(Period),
    #[fhir(rename = "valueQuantity")]
    Quantity(Quantity),
    #[fhir(rename = "valueRange")]
    Range(Range),
    #[fhir(rename = "valueRatio")]
    Ratio(Ratio),
    #[fhir(rename = "valueRatioRange")]
    RatioRange(RatioRange),
    #[fhir(rename = "valueReference")]
    Reference(Reference),
    #[fhir(rename = "valueSampledData")]
    SampledData(SampledData),
    #[fhir(rename = "valueSignature")]
    Signature(Signature),
    #[fhir(rename = "valueTiming")]
    Timing(Timing),
    #[fhir(rename = "valueContactDetail")]
    ContactDetail(ContactDetail),
    #[fhir(rename = "valueDataRequirement")]
    DataRequirement(DataRequirement),
    #[fhir(rename = "valueExpression")]
    Expression(Expression),
    #[fhir(rename = "valueExtendedContactDetail")]
    ExtendedContactDetail(ExtendedContactDetail),
    #[fhir(rename = "valueParameterDefinition")]
    ParameterDefinition(ParameterDefinition),
    #[fhir(rename = "valueRelatedArtifact")]
    RelatedArtifact(RelatedArtifact),
    #[fhir(rename = "valueTriggerDefinition")]
    TriggerDefinition(TriggerDefinition),
    #[fhir(rename = "valueUsageContext")]
    UsageContext(UsageContext),
    #[fhir(rename = "valueDosage")]
    Dosage(Dosage),
    #[fhir(rename = "valueMeta")]
    Meta(Meta),
}
