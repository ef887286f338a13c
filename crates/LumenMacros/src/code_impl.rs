//! `FhirCode` expansion for required-binding code enums.

use heck::ToKebabCase;
use proc_macro2::TokenStream;
use quote::quote;
use syn::spanned::Spanned;

use crate::field_helpers;

pub(crate) fn expand(input: syn::DeriveInput) -> syn::Result<TokenStream> {
    let syn::Data::Enum(data) = &input.data else {
        return Err(syn::Error::new(
            input.span(),
            "FhirCode can only be derived for enums",
        ));
    };

    let mut idents = Vec::new();
    let mut codes = Vec::new();
    for variant in &data.variants {
        if !matches!(variant.fields, syn::Fields::Unit) {
            return Err(syn::Error::new(
                variant.span(),
                "FhirCode variants must be unit variants",
            ));
        }
        let attrs = field_helpers::field_attrs(&variant.attrs)?;
        let code = match attrs.rename {
            Some(code) => code,
            None => variant.ident.to_string().to_kebab_case(),
        };
        idents.push(&variant.ident);
        codes.push(code);
    }

    let name = &input.ident;
    Ok(quote! {
        impl #name {
            /// The wire form of this code.
            pub fn as_str(&self) -> &'static str {
                match self {
                    #(Self::#idents => #codes,)*
                }
            }

            /// Looks a wire code up in the closed binding.
            pub fn from_code(code: &str) -> ::std::option::Option<Self> {
                match code {
                    #(#codes => ::std::option::Option::Some(Self::#idents),)*
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl ::std::fmt::Display for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl crate::codec::FhirScalar for #name {
            fn from_scalar(
                value: &crate::codec::JsonValue,
                ctx: &mut crate::codec::Context,
            ) -> ::std::result::Result<Self, crate::codec::CodecError> {
                let code = match value {
                    crate::codec::JsonValue::String(code) => code.as_str(),
                    _ => {
                        return ::std::result::Result::Err(ctx.error(
                            crate::codec::ErrorKind::Structural,
                            "expected a JSON string carrying a code",
                        ));
                    }
                };
                Self::from_code(code).ok_or_else(|| {
                    ctx.error(
                        crate::codec::ErrorKind::UnknownCodeForRequiredBinding,
                        ::std::format!("code `{}` is not in the required binding", code),
                    )
                })
            }

            fn to_scalar(&self) -> crate::codec::JsonValue {
                crate::codec::JsonValue::String(::std::string::String::from(self.as_str()))
            }
        }
    })
}
