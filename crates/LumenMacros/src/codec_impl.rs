//! `FhirCodec` expansion.
//!
//! Three shapes are handled: model structs (resources, datatypes, backbones),
//! choice enums (one JSON key out of a closed set), and the resource sum type.
//! All generated bodies are declarative calls into `crate::codec`; the engine
//! owns path tracking, sibling fusion, cardinality errors and mode handling.

use proc_macro2::TokenStream;
use quote::quote;
use syn::spanned::Spanned;

use crate::field_helpers::{self, FieldAttrs, TypeAttrs};
use crate::type_helpers::{self, ValueKind};

pub(crate) fn expand(input: syn::DeriveInput) -> syn::Result<TokenStream> {
    let attrs = field_helpers::type_attrs(&input.attrs)?;
    match &input.data {
        syn::Data::Struct(data) => expand_struct(&input, data, &attrs),
        syn::Data::Enum(data) if attrs.resource_enum => expand_resource_enum(&input, data),
        syn::Data::Enum(data) => expand_choice_enum(&input, data),
        syn::Data::Union(_) => Err(syn::Error::new(
            input.span(),
            "FhirCodec cannot be derived for unions",
        )),
    }
}

enum FieldRole<'a> {
    /// Ordinary value field: primitive element, complex type or raw string.
    Value {
        name: String,
        shape: type_helpers::FieldShape<'a>,
    },
    /// Flattened choice enum.
    Choice {
        name: String,
        ty: &'a syn::Type,
        required: bool,
    },
    /// `contained` on a resource: decoded with the nesting and id rules.
    Contained,
    /// The unknown-key side-map.
    Extra,
}

struct StructField<'a> {
    ident: &'a syn::Ident,
    role: FieldRole<'a>,
}

fn classify_field<'a>(
    field: &'a syn::Field,
    attrs: &FieldAttrs,
    is_resource: bool,
) -> syn::Result<StructField<'a>> {
    let ident = field
        .ident
        .as_ref()
        .ok_or_else(|| syn::Error::new(field.span(), "FhirCodec requires named fields"))?;
    let name = field_helpers::wire_name(ident, attrs.rename.as_deref());
    let role = if attrs.extra {
        FieldRole::Extra
    } else if attrs.flatten {
        let (_, ty) = type_helpers::strip_option(&field.ty);
        FieldRole::Choice {
            name,
            ty,
            required: attrs.required,
        }
    } else if is_resource && name == "contained" {
        FieldRole::Contained
    } else {
        FieldRole::Value {
            name,
            shape: type_helpers::field_shape(&field.ty),
        }
    };
    Ok(StructField { ident, role })
}

fn expand_struct(
    input: &syn::DeriveInput,
    data: &syn::DataStruct,
    attrs: &TypeAttrs,
) -> syn::Result<TokenStream> {
    let syn::Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new(
            input.span(),
            "FhirCodec requires a struct with named fields",
        ));
    };

    let mut classified = Vec::new();
    for field in &fields.named {
        let field_attrs = field_helpers::field_attrs(&field.attrs)?;
        classified.push(classify_field(field, &field_attrs, attrs.resource)?);
    }

    let mut field_names = Vec::new();
    let mut choice_types = Vec::new();
    let mut inits = Vec::new();
    let mut emits = Vec::new();
    let mut has_extra = false;

    for field in &classified {
        let ident = field.ident;
        match &field.role {
            FieldRole::Value { name, shape } => {
                field_names.push(name.clone());
                let parse = match (&shape.kind, shape.list) {
                    (ValueKind::Primitive, false) => {
                        quote! { crate::codec::fuse_primitive(obj, #name, ctx)? }
                    }
                    (ValueKind::Primitive, true) => {
                        quote! { crate::codec::fuse_primitive_list(obj, #name, ctx)? }
                    }
                    (ValueKind::Complex, false) => {
                        quote! { crate::codec::complex(obj, #name, ctx)? }
                    }
                    (ValueKind::Complex, true) => {
                        quote! { crate::codec::complex_list(obj, #name, ctx)? }
                    }
                    (ValueKind::RawString, false) => {
                        quote! { crate::codec::string_field(obj, #name, ctx)? }
                    }
                    (ValueKind::RawString, true) => {
                        return Err(syn::Error::new(
                            ident.span(),
                            "lists of raw strings are not part of the model; use an Element alias",
                        ));
                    }
                };
                let parse = if shape.optional {
                    parse
                } else if shape.list {
                    quote! { crate::codec::require_list(#parse, #name, ctx)? }
                } else {
                    quote! { crate::codec::require(#parse, #name, ctx)? }
                };
                inits.push(quote! { #ident: #parse, });

                let emit = match (&shape.kind, shape.list, shape.optional) {
                    (ValueKind::Primitive, false, true) => quote! {
                        if let ::std::option::Option::Some(element) = self.#ident.as_ref() {
                            crate::codec::emit_primitive(&mut out, #name, element);
                        }
                    },
                    (ValueKind::Primitive, false, false) => quote! {
                        crate::codec::emit_primitive(&mut out, #name, &self.#ident);
                    },
                    (ValueKind::Primitive, true, true) => quote! {
                        if let ::std::option::Option::Some(items) = self.#ident.as_ref() {
                            crate::codec::emit_primitive_list(&mut out, #name, items);
                        }
                    },
                    (ValueKind::Primitive, true, false) => quote! {
                        crate::codec::emit_primitive_list(&mut out, #name, &self.#ident);
                    },
                    (ValueKind::Complex, false, true) => quote! {
                        if let ::std::option::Option::Some(item) = self.#ident.as_ref() {
                            crate::codec::emit_complex(&mut out, #name, item);
                        }
                    },
                    (ValueKind::Complex, false, false) => quote! {
                        crate::codec::emit_complex(&mut out, #name, &self.#ident);
                    },
                    (ValueKind::Complex, true, true) => quote! {
                        if let ::std::option::Option::Some(items) = self.#ident.as_ref() {
                            crate::codec::emit_complex_list(&mut out, #name, items);
                        }
                    },
                    (ValueKind::Complex, true, false) => quote! {
                        crate::codec::emit_complex_list(&mut out, #name, &self.#ident);
                    },
                    (ValueKind::RawString, _, true) => quote! {
                        if let ::std::option::Option::Some(text) = self.#ident.as_deref() {
                            crate::codec::emit_string(&mut out, #name, text);
                        }
                    },
                    (ValueKind::RawString, _, false) => quote! {
                        crate::codec::emit_string(&mut out, #name, &self.#ident);
                    },
                };
                emits.push(emit);
            }
            FieldRole::Choice { name, ty, required } => {
                choice_types.push((*ty).clone());
                let parse = if *required {
                    quote! {
                        ::std::option::Option::Some(
                            crate::codec::require(<#ty>::from_fhir_object(obj, ctx)?, #name, ctx)?,
                        )
                    }
                } else {
                    quote! { <#ty>::from_fhir_object(obj, ctx)? }
                };
                inits.push(quote! { #ident: #parse, });
                emits.push(quote! {
                    if let ::std::option::Option::Some(choice) = self.#ident.as_ref() {
                        choice.to_fhir_object(&mut out);
                    }
                });
            }
            FieldRole::Contained => {
                field_names.push("contained".to_string());
                inits.push(quote! { #ident: crate::codec::parse_contained(obj, ctx)?, });
                emits.push(quote! {
                    if let ::std::option::Option::Some(items) = self.#ident.as_ref() {
                        crate::codec::emit_complex_list(&mut out, "contained", items);
                    }
                });
            }
            FieldRole::Extra => {
                has_extra = true;
                inits.push(quote! { #ident: __extra, });
                emits.push(quote! {
                    crate::codec::emit_extra(&mut out, &self.#ident);
                });
            }
        }
    }

    let name = &input.ident;
    let is_resource = attrs.resource;
    let discard_extra = if has_extra {
        quote! {}
    } else {
        quote! { let _ = __extra; }
    };
    let invariant_calls = attrs.invariants.iter().map(|path| {
        quote! { #path(&value, ctx)?; }
    });
    let resource_type_insert = if is_resource {
        let type_name = name.to_string();
        quote! {
            out.insert(
                ::std::string::String::from("resourceType"),
                crate::codec::JsonValue::String(::std::string::String::from(#type_name)),
            );
        }
    } else {
        quote! {}
    };
    let resource_impl = if is_resource {
        let type_name = name.to_string();
        quote! {
            impl crate::codec::FhirResource for #name {
                const TYPE: &'static str = #type_name;

                fn from_object(
                    obj: &crate::codec::JsonObject,
                    ctx: &mut crate::codec::Context,
                ) -> ::std::result::Result<Self, crate::codec::CodecError> {
                    Self::from_fhir_object(obj, ctx)
                }

                fn to_object(&self) -> crate::codec::JsonObject {
                    self.to_fhir_object()
                }
            }
        }
    } else {
        quote! {}
    };

    Ok(quote! {
        impl #name {
            pub(crate) const FIELD_NAMES: &'static [&'static str] = &[#(#field_names),*];

            pub(crate) fn from_fhir_object(
                obj: &crate::codec::JsonObject,
                ctx: &mut crate::codec::Context,
            ) -> ::std::result::Result<Self, crate::codec::CodecError> {
                let __extra = crate::codec::collect_unknown_fields(
                    obj,
                    Self::FIELD_NAMES,
                    &[#(<#choice_types>::CHOICE_KEYS),*],
                    #is_resource,
                    ctx,
                )?;
                #discard_extra
                let value = Self { #(#inits)* };
                #(#invariant_calls)*
                ::std::result::Result::Ok(value)
            }

            pub(crate) fn to_fhir_object(&self) -> crate::codec::JsonObject {
                let mut out = crate::codec::JsonObject::new();
                #resource_type_insert
                #(#emits)*
                out
            }
        }

        impl crate::codec::FromFhir for #name {
            fn from_fhir(
                value: &crate::codec::JsonValue,
                ctx: &mut crate::codec::Context,
            ) -> ::std::result::Result<Self, crate::codec::CodecError> {
                let obj = crate::codec::expect_object(value, ctx)?;
                Self::from_fhir_object(obj, ctx)
            }
        }

        impl crate::codec::ToFhir for #name {
            fn to_fhir(&self) -> crate::codec::JsonValue {
                crate::codec::JsonValue::Object(self.to_fhir_object())
            }
        }

        #resource_impl
    })
}

struct ChoiceVariant<'a> {
    ident: &'a syn::Ident,
    key: String,
    primitive: bool,
}

fn choice_variants<'a>(data: &'a syn::DataEnum) -> syn::Result<Vec<ChoiceVariant<'a>>> {
    let mut out = Vec::new();
    for variant in &data.variants {
        let syn::Fields::Unnamed(fields) = &variant.fields else {
            return Err(syn::Error::new(
                variant.span(),
                "choice variants carry exactly one unnamed payload",
            ));
        };
        if fields.unnamed.len() != 1 {
            return Err(syn::Error::new(
                variant.span(),
                "choice variants carry exactly one unnamed payload",
            ));
        }
        let attrs = field_helpers::field_attrs(&variant.attrs)?;
        let key = field_helpers::wire_name(&variant.ident, attrs.rename.as_deref());
        let primitive = matches!(
            type_helpers::value_kind(&fields.unnamed[0].ty),
            ValueKind::Primitive
        );
        out.push(ChoiceVariant {
            ident: &variant.ident,
            key,
            primitive,
        });
    }
    Ok(out)
}

fn expand_choice_enum(input: &syn::DeriveInput, data: &syn::DataEnum) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let variants = choice_variants(data)?;

    let keys: Vec<&str> = variants.iter().map(|v| v.key.as_str()).collect();
    let presence_checks = variants.iter().map(|v| {
        let key = &v.key;
        if v.primitive {
            quote! {
                if obj.contains_key(#key) || crate::codec::has_sibling_key(obj, #key) {
                    present.push(#key);
                }
            }
        } else {
            quote! {
                if obj.contains_key(#key) {
                    present.push(#key);
                }
            }
        }
    });
    let parse_arms = variants.iter().map(|v| {
        let key = &v.key;
        let ident = v.ident;
        if v.primitive {
            quote! {
                #key => ::std::result::Result::Ok(
                    crate::codec::fuse_primitive(obj, #key, ctx)?.map(Self::#ident),
                ),
            }
        } else {
            quote! {
                #key => ::std::result::Result::Ok(
                    crate::codec::complex(obj, #key, ctx)?.map(Self::#ident),
                ),
            }
        }
    });
    let emit_arms = variants.iter().map(|v| {
        let key = &v.key;
        let ident = v.ident;
        if v.primitive {
            quote! { Self::#ident(value) => crate::codec::emit_primitive(out, #key, value), }
        } else {
            quote! { Self::#ident(value) => crate::codec::emit_complex(out, #key, value), }
        }
    });

    Ok(quote! {
        impl #name {
            pub(crate) const CHOICE_KEYS: &'static [&'static str] = &[#(#keys),*];

            pub(crate) fn from_fhir_object(
                obj: &crate::codec::JsonObject,
                ctx: &mut crate::codec::Context,
            ) -> ::std::result::Result<::std::option::Option<Self>, crate::codec::CodecError> {
                let mut present: ::std::vec::Vec<&'static str> = ::std::vec::Vec::new();
                #(#presence_checks)*
                if present.is_empty() {
                    return ::std::result::Result::Ok(::std::option::Option::None);
                }
                if present.len() > 1 {
                    return ::std::result::Result::Err(ctx.error(
                        crate::codec::ErrorKind::MultipleChoiceVariants,
                        ::std::format!(
                            "more than one variant of a choice element is populated: {}",
                            present.join(", "),
                        ),
                    ));
                }
                match present[0] {
                    #(#parse_arms)*
                    _ => ::std::result::Result::Ok(::std::option::Option::None),
                }
            }

            pub(crate) fn to_fhir_object(&self, out: &mut crate::codec::JsonObject) {
                match self {
                    #(#emit_arms)*
                }
            }
        }
    })
}

fn expand_resource_enum(
    input: &syn::DeriveInput,
    data: &syn::DataEnum,
) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let mut idents = Vec::new();
    let mut names = Vec::new();
    let mut types = Vec::new();
    let mut parse_arms = Vec::new();
    let mut from_bodies = Vec::new();
    for variant in &data.variants {
        let syn::Fields::Unnamed(fields) = &variant.fields else {
            return Err(syn::Error::new(
                variant.span(),
                "resource variants carry exactly one unnamed payload",
            ));
        };
        if fields.unnamed.len() != 1 {
            return Err(syn::Error::new(
                variant.span(),
                "resource variants carry exactly one unnamed payload",
            ));
        }
        let variant_ident = &variant.ident;
        idents.push(variant_ident);
        names.push(variant_ident.to_string());
        // Payloads are boxed to keep the enum small; parse and convert
        // through the inner type.
        let (boxed, inner) = type_helpers::strip_box(&fields.unnamed[0].ty);
        types.push(inner);
        parse_arms.push(if boxed {
            quote! {
                ::std::boxed::Box::new(<#inner>::from_fhir_object(obj, ctx)?)
            }
        } else {
            quote! { <#inner>::from_fhir_object(obj, ctx)? }
        });
        from_bodies.push(if boxed {
            quote! { Self::#variant_ident(::std::boxed::Box::new(resource)) }
        } else {
            quote! { Self::#variant_ident(resource) }
        });
    }
    Ok(quote! {
        impl #name {
            /// The `resourceType` discriminator of the wrapped resource.
            pub fn resource_type_name(&self) -> &'static str {
                match self {
                    #(Self::#idents(_) => #names,)*
                }
            }

            /// The logical id of the wrapped resource, when present.
            pub fn id_value(&self) -> ::std::option::Option<&str> {
                match self {
                    #(Self::#idents(resource) => {
                        resource.id.as_ref().and_then(|element| element.value.as_deref())
                    })*
                }
            }

            pub(crate) fn from_fhir_object(
                obj: &crate::codec::JsonObject,
                ctx: &mut crate::codec::Context,
            ) -> ::std::result::Result<Self, crate::codec::CodecError> {
                let resource_type = crate::codec::resource_type_of(obj, ctx)?.to_string();
                match resource_type.as_str() {
                    #(#names => ::std::result::Result::Ok(
                        Self::#idents(#parse_arms),
                    ),)*
                    other => ::std::result::Result::Err(ctx.error(
                        crate::codec::ErrorKind::UnknownResourceType,
                        ::std::format!("unknown resource type `{}`", other),
                    )),
                }
            }

            pub(crate) fn to_fhir_object(&self) -> crate::codec::JsonObject {
                match self {
                    #(Self::#idents(resource) => resource.to_fhir_object(),)*
                }
            }
        }

        impl crate::codec::FromFhir for #name {
            fn from_fhir(
                value: &crate::codec::JsonValue,
                ctx: &mut crate::codec::Context,
            ) -> ::std::result::Result<Self, crate::codec::CodecError> {
                let obj = crate::codec::expect_object(value, ctx)?;
                Self::from_fhir_object(obj, ctx)
            }
        }

        impl crate::codec::ToFhir for #name {
            fn to_fhir(&self) -> crate::codec::JsonValue {
                crate::codec::JsonValue::Object(self.to_fhir_object())
            }
        }

        #(
            impl ::std::convert::From<#types> for #name {
                fn from(resource: #types) -> Self {
                    #from_bodies
                }
            }
        )*
    })
}
