//! Attribute parsing and wire-name derivation for the codec derives.

use heck::ToLowerCamelCase;
use syn::ext::IdentExt;

/// Attributes that appear on a struct or enum as a whole.
pub(crate) struct TypeAttrs {
    pub resource: bool,
    pub resource_enum: bool,
    pub invariants: Vec<syn::Path>,
}

/// Attributes that appear on a single field or enum variant.
pub(crate) struct FieldAttrs {
    pub rename: Option<String>,
    pub flatten: bool,
    pub required: bool,
    pub extra: bool,
}

pub(crate) fn type_attrs(attrs: &[syn::Attribute]) -> syn::Result<TypeAttrs> {
    let mut out = TypeAttrs {
        resource: false,
        resource_enum: false,
        invariants: Vec::new(),
    };
    for attr in attrs {
        if !attr.path().is_ident("fhir") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("resource") {
                out.resource = true;
                Ok(())
            } else if meta.path.is_ident("resource_enum") {
                out.resource_enum = true;
                Ok(())
            } else if meta.path.is_ident("invariant") {
                let lit: syn::LitStr = meta.value()?.parse()?;
                out.invariants.push(lit.parse()?);
                Ok(())
            } else {
                Err(meta.error("unsupported fhir container attribute"))
            }
        })?;
    }
    Ok(out)
}

pub(crate) fn field_attrs(attrs: &[syn::Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs {
        rename: None,
        flatten: false,
        required: false,
        extra: false,
    };
    for attr in attrs {
        if !attr.path().is_ident("fhir") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let lit: syn::LitStr = meta.value()?.parse()?;
                out.rename = Some(lit.value());
                Ok(())
            } else if meta.path.is_ident("flatten") {
                out.flatten = true;
                Ok(())
            } else if meta.path.is_ident("required") {
                out.required = true;
                Ok(())
            } else if meta.path.is_ident("extra") {
                out.extra = true;
                Ok(())
            } else {
                Err(meta.error("unsupported fhir field attribute"))
            }
        })?;
    }
    Ok(out)
}

/// The JSON key a field is read from and written to. Rust keywords are
/// escaped in the model (`r#type`, `r#use`), so the raw identifier is the
/// source of truth, camel-cased unless an explicit rename is present.
pub(crate) fn wire_name(ident: &syn::Ident, rename: Option<&str>) -> String {
    match rename {
        Some(name) => name.to_string(),
        None => ident.unraw().to_string().to_lower_camel_case(),
    }
}
