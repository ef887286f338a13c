//! A strongly typed in-memory model of FHIR R5 with a bidirectional JSON
//! codec.
//!
//! Every FHIR primitive field is an [`Element`] pairing the value with its
//! optional id and extensions; decimals and partial-precision dates keep
//! their original wire tokens so documents round-trip byte-for-byte. The
//! resource catalogue lives under [`r5`], with [`r5::Resource`] as the
//! closed sum over all supported resource types.
//!
//! Parsing is strict about structure (cardinality, choice exclusivity,
//! required bindings) and configurable about unknown content: the default
//! [`ParseMode::Lenient`] captures undeclared keys and replays them on
//! emission, [`ParseMode::Strict`] rejects them.
//!
//! ```no_run
//! use lumen_fhir_lib::{parse_resource, emit_resource};
//!
//! let bytes = std::fs::read("patient.json").unwrap();
//! let parsed = parse_resource(&bytes).unwrap();
//! for warning in &parsed.warnings {
//!     eprintln!("{}: {}", warning.path, warning.message);
//! }
//! let round_tripped = emit_resource(&parsed.value);
//! ```

pub mod codec;
pub mod date_time;
pub mod element;
pub mod precise_decimal;
pub mod r5;

pub use codec::{
    CodeValue, CodecError, Context, Diagnostic, ErrorKind, FhirResource, FromFhir,
    Integer64Value, JsonObject, JsonValue, ParseMode, Parsed, PositiveIntValue, ToFhir,
    UnsignedIntValue,
};
pub use date_time::{
    DatePrecision, DateTimePrecision, PrecisionDate, PrecisionDateTime, PrecisionInstant,
    PrecisionTime, TimePrecision,
};
pub use element::Element;
pub use precise_decimal::PreciseDecimal;

/// Parses a resource document in the default lenient mode.
pub fn parse_resource(bytes: &[u8]) -> Result<Parsed<r5::Resource>, CodecError> {
    parse_resource_with(bytes, ParseMode::default())
}

/// Parses a resource document, dispatching on its `resourceType`.
pub fn parse_resource_with(
    bytes: &[u8],
    mode: ParseMode,
) -> Result<Parsed<r5::Resource>, CodecError> {
    let document = codec::decode_document(bytes)?;
    let mut ctx = Context::new(mode);
    let value = r5::Resource::from_fhir(&document, &mut ctx)?;
    Ok(Parsed {
        value,
        warnings: ctx.take_warnings(),
    })
}

/// Parses a document known to be a specific resource type, in lenient mode.
pub fn parse_resource_of<T: FhirResource>(bytes: &[u8]) -> Result<Parsed<T>, CodecError> {
    parse_resource_of_with(bytes, ParseMode::default())
}

/// Parses a document known to be a specific resource type. A document
/// declaring a different `resourceType` fails with `ResourceTypeMismatch`.
pub fn parse_resource_of_with<T: FhirResource>(
    bytes: &[u8],
    mode: ParseMode,
) -> Result<Parsed<T>, CodecError> {
    let document = codec::decode_document(bytes)?;
    let mut ctx = Context::new(mode);
    let obj = codec::expect_object(&document, &mut ctx)?;
    let declared = codec::resource_type_of(obj, &mut ctx)?;
    if declared != T::TYPE {
        let detail = format!(
            "expected a {} but the document declares {declared}",
            T::TYPE
        );
        return Err(ctx.error_at("resourceType", ErrorKind::ResourceTypeMismatch, detail));
    }
    let value = T::from_object(obj, &mut ctx)?;
    Ok(Parsed {
        value,
        warnings: ctx.take_warnings(),
    })
}

/// Parses an already-extracted JSON object as a resource, as found in
/// `Bundle.entry.resource` slots handled outside the typed model.
pub fn parse_bundle_entry_resource(obj: &JsonObject) -> Result<Parsed<r5::Resource>, CodecError> {
    let mut ctx = Context::new(ParseMode::default());
    let value = r5::Resource::from_fhir_object(obj, &mut ctx)?;
    Ok(Parsed {
        value,
        warnings: ctx.take_warnings(),
    })
}

/// Emits a resource as UTF-8 JSON, `resourceType` first. Emission is
/// infallible: every model value has a wire form.
pub fn emit_resource(resource: &r5::Resource) -> Vec<u8> {
    emit_value(resource.to_fhir())
}

/// Emits a concrete resource type as UTF-8 JSON.
pub fn emit_resource_of<T: FhirResource>(resource: &T) -> Vec<u8> {
    emit_value(resource.to_fhir())
}

fn emit_value(value: JsonValue) -> Vec<u8> {
    serde_json::to_vec(&value).expect("a JSON tree always serializes")
}
