//! Field type classification.
//!
//! The model encodes what the codec needs directly in the field types:
//! primitive fields use the `Element` aliases (`Boolean`, `Code`, `Date`,
//! ...), raw JSON strings are spelled `std::string::String`, and everything
//! else is a complex datatype, backbone or resource. The derive only has to
//! unwrap `Option`/`Vec` and look at the remaining path.

/// Every alias of `Element<V>` used by the generated model. These are always
/// written as a bare single-segment ident in model files, which is what keeps
/// them distinguishable from `std::string::String`.
pub(crate) const ELEMENT_ALIASES: &[&str] = &[
    "Base64Binary",
    "Boolean",
    "Canonical",
    "Code",
    "Coded",
    "Date",
    "DateTime",
    "Decimal",
    "Element",
    "Id",
    "Instant",
    "Integer",
    "Integer64",
    "Markdown",
    "Oid",
    "PositiveInt",
    "String",
    "Time",
    "UnsignedInt",
    "Uri",
    "Url",
    "Uuid",
    "Xhtml",
];

pub(crate) enum ValueKind {
    /// An `Element<V>` alias: fused with its `_field` sibling.
    Primitive,
    /// A complex datatype, backbone struct or resource (including `Box`ed ones).
    Complex,
    /// A plain `std::string::String` with no extension carrier (`Extension.url`).
    RawString,
}

pub(crate) struct FieldShape<'a> {
    pub optional: bool,
    pub list: bool,
    pub kind: ValueKind,
    #[allow(dead_code)]
    pub inner: &'a syn::Type,
}

fn generic_inner<'a>(ty: &'a syn::Type, wrapper: &str) -> Option<&'a syn::Type> {
    let syn::Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }
    let segment = type_path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }
    match args.args.first()? {
        syn::GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

pub(crate) fn strip_option(ty: &syn::Type) -> (bool, &syn::Type) {
    match generic_inner(ty, "Option") {
        Some(inner) => (true, inner),
        None => (false, ty),
    }
}

pub(crate) fn strip_box(ty: &syn::Type) -> (bool, &syn::Type) {
    match generic_inner(ty, "Box") {
        Some(inner) => (true, inner),
        None => (false, ty),
    }
}

pub(crate) fn value_kind(ty: &syn::Type) -> ValueKind {
    let syn::Type::Path(type_path) = ty else {
        return ValueKind::Complex;
    };
    if type_path.qself.is_none() {
        let segments = &type_path.path.segments;
        if segments.len() == 1 {
            let ident = segments[0].ident.to_string();
            if ELEMENT_ALIASES.contains(&ident.as_str()) {
                return ValueKind::Primitive;
            }
        } else if segments.last().is_some_and(|s| s.ident == "String") {
            return ValueKind::RawString;
        }
    }
    ValueKind::Complex
}

pub(crate) fn field_shape(ty: &syn::Type) -> FieldShape<'_> {
    let (optional, ty) = strip_option(ty);
    let (list, ty) = match generic_inner(ty, "Vec") {
        Some(inner) => (true, inner),
        None => (false, ty),
    };
    FieldShape {
        optional,
        list,
        kind: value_kind(ty),
        inner: ty,
    }
}
