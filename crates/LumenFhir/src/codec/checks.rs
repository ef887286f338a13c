//! Parse-time invariant checks and advisory diagnostics.
//!
//! Model types opt in with `#[fhir(invariant = "crate::codec::checks::...")]`;
//! the derive calls the named function after the fields have been decoded,
//! with the context still positioned at the owning object. Hard rules return
//! errors, SHOULD-level findings become warnings on the context.

use std::cmp::Ordering;

use super::{CodecError, Context, ErrorKind};
use crate::r5::{
    Attachment, Bundle, BundleType, Coding, Extension, ParametersParameter, Period,
};

/// An extension carries exactly one of a `value[x]` or nested extensions.
pub(crate) fn extension_value_rules(
    extension: &Extension,
    ctx: &mut Context,
) -> Result<(), CodecError> {
    let has_value = extension.value.is_some();
    let has_nested = extension
        .extension
        .as_ref()
        .is_some_and(|nested| !nested.is_empty());
    if has_value && has_nested {
        return Err(ctx.error(
            ErrorKind::MalformedExtension,
            "an extension must not carry both a value and nested extensions",
        ));
    }
    if !has_value && !has_nested {
        return Err(ctx.error(
            ErrorKind::MalformedExtension,
            "an extension must carry either a value or nested extensions",
        ));
    }
    Ok(())
}

/// `Period.start` must not follow `Period.end` when the two are comparable
/// under the union of their precisions.
pub(crate) fn period_order(period: &Period, ctx: &mut Context) -> Result<(), CodecError> {
    let (Some(start), Some(end)) = (
        period.start.as_ref().and_then(|e| e.value.as_ref()),
        period.end.as_ref().and_then(|e| e.value.as_ref()),
    ) else {
        return Ok(());
    };
    if start.compare(end) == Some(Ordering::Greater) {
        return Err(ctx.error(
            ErrorKind::Structural,
            format!("period start `{start}` is after its end `{end}`"),
        ));
    }
    Ok(())
}

/// `Coding.version` without `Coding.system` is permitted but flagged.
pub(crate) fn coding_advisories(coding: &Coding, ctx: &mut Context) -> Result<(), CodecError> {
    let has_version = coding.version.as_ref().is_some_and(|e| e.value.is_some());
    let has_system = coding.system.as_ref().is_some_and(|e| e.value.is_some());
    if has_version && !has_system {
        ctx.warn_at("version", "coding carries a version but no system");
    }
    Ok(())
}

/// Inline attachment data SHOULD declare its content type.
pub(crate) fn attachment_advisories(
    attachment: &Attachment,
    ctx: &mut Context,
) -> Result<(), CodecError> {
    let has_data = attachment.data.as_ref().is_some_and(|e| e.value.is_some());
    let has_content_type = attachment
        .content_type
        .as_ref()
        .is_some_and(|e| e.value.is_some());
    if has_data && !has_content_type {
        ctx.warn_at("data", "attachment carries inline data but no contentType");
    }
    Ok(())
}

/// `Bundle.type` constrains which entry components SHOULD be present. These
/// are advisory: a transaction entry without a request is suspect but legal.
pub(crate) fn bundle_advisories(bundle: &Bundle, ctx: &mut Context) -> Result<(), CodecError> {
    let Some(bundle_type) = bundle.r#type.value else {
        return Ok(());
    };
    let Some(entries) = bundle.entry.as_ref() else {
        return Ok(());
    };
    for (index, entry) in entries.iter().enumerate() {
        let missing = match bundle_type {
            BundleType::Transaction | BundleType::Batch if entry.request.is_none() => {
                Some("entry has no request component")
            }
            BundleType::TransactionResponse | BundleType::BatchResponse
                if entry.response.is_none() =>
            {
                Some("entry has no response component")
            }
            BundleType::Searchset if entry.search.is_none() => {
                Some("searchset entry has no search component")
            }
            _ => None,
        };
        if let Some(message) = missing {
            ctx.push_key("entry");
            ctx.push_index(index);
            ctx.warn(format!("{message} in a {} bundle", bundle_type.as_str()));
            ctx.pop();
            ctx.pop();
        }
    }
    Ok(())
}

/// A `Parameters.parameter` carries at most one of a value, a resource or a
/// list of parts.
pub(crate) fn parameter_exclusivity(
    parameter: &ParametersParameter,
    ctx: &mut Context,
) -> Result<(), CodecError> {
    let mut populated = 0;
    if parameter.value.is_some() {
        populated += 1;
    }
    if parameter.resource.is_some() {
        populated += 1;
    }
    if parameter.part.as_ref().is_some_and(|part| !part.is_empty()) {
        populated += 1;
    }
    if populated > 1 {
        return Err(ctx.error(
            ErrorKind::Structural,
            "a parameter carries at most one of value, resource or part",
        ));
    }
    Ok(())
}
