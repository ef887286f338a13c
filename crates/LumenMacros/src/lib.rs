//! Derive macros backing the FHIR R5 JSON codec.
//!
//! `FhirCodec` is derived by every model struct, choice enum and the
//! `Resource` sum type; it generates `FromFhir`/`ToFhir` implementations as
//! thin calls into the shared engine in `codec/`. `FhirCode` is derived by
//! required-binding code enums and generates the closed string mapping.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod code_impl;
mod codec_impl;
mod field_helpers;
mod type_helpers;

/// Derives the JSON codec for a model type.
///
/// Supported attributes:
/// - `#[fhir(resource)]` on a struct: adds the `resourceType` discriminator
///   and a `FhirResource` implementation.
/// - `#[fhir(resource_enum)]` on an enum: generates `resourceType` dispatch
///   over all resource variants.
/// - `#[fhir(invariant = "path::to::check")]` on a struct: runs the named
///   check after the fields have been decoded.
/// - `#[fhir(rename = "wireName")]` on a field or choice variant.
/// - `#[fhir(flatten)]` on a field holding a choice enum.
/// - `#[fhir(required)]` on a flattened choice that has cardinality 1..1.
/// - `#[fhir(extra)]` on the side-map field holding unknown keys.
#[proc_macro_derive(FhirCodec, attributes(fhir))]
pub fn derive_fhir_codec(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    codec_impl::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derives the closed code mapping for a required-binding enum.
///
/// Wire names default to the kebab-case form of the variant name
/// (`EnteredInError` becomes `entered-in-error`); `#[fhir(rename = "...")]`
/// overrides that for codes like `<=` or `5.0.0`.
#[proc_macro_derive(FhirCode, attributes(fhir))]
pub fn derive_fhir_code(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    code_impl::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
