//! The FHIR JSON codec engine.
//!
//! The derive in `lumen-macros` turns every model type into declarative
//! calls against this module: field fusion, choice dispatch, cardinality
//! checks and unknown-key handling all live here so that behavior is uniform
//! across the whole catalogue. The engine works on a `serde_json` tree
//! rather than streaming tokens; `preserve_order` keeps emission order equal
//! to declaration order and `arbitrary_precision` keeps decimal tokens
//! intact.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

use crate::element::Element;
use crate::r5::Extension;

pub mod checks;
pub mod scalar;

pub use scalar::{CodeValue, Integer64Value, PositiveIntValue, UnsignedIntValue};

pub type JsonValue = serde_json::Value;
pub type JsonObject = serde_json::Map<std::string::String, serde_json::Value>;

/// How the parser treats content the model does not declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Unknown keys are captured into the owning type's side-map and
    /// replayed on emission. The default.
    #[default]
    Lenient,
    /// Unknown keys fail the parse with `UnknownField`.
    Strict,
}

/// Classification of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The JSON shape does not match the model (wrong value type, broken
    /// document, or a violated structural invariant).
    Structural,
    MissingRequiredField,
    MultipleChoiceVariants,
    /// A primitive failed its lexical rules (regex or range).
    InvalidLexicalForm,
    UnknownResourceType,
    /// The document's `resourceType` does not match the requested type.
    ResourceTypeMismatch,
    UnknownCodeForRequiredBinding,
    /// Primitive value and `_field` sibling arrays disagree.
    PrimitiveSiblingMisalignment,
    UnknownField,
    MalformedExtension,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Structural => "structural",
            Self::MissingRequiredField => "missing-required-field",
            Self::MultipleChoiceVariants => "multiple-choice-variants",
            Self::InvalidLexicalForm => "invalid-lexical-form",
            Self::UnknownResourceType => "unknown-resource-type",
            Self::ResourceTypeMismatch => "resource-type-mismatch",
            Self::UnknownCodeForRequiredBinding => "unknown-code-for-required-binding",
            Self::PrimitiveSiblingMisalignment => "primitive-sibling-misalignment",
            Self::UnknownField => "unknown-field",
            Self::MalformedExtension => "malformed-extension",
        };
        f.write_str(name)
    }
}

/// A parse failure. `path` is a JSON Pointer into the offending document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} error at {path}: {detail}")]
pub struct CodecError {
    pub kind: ErrorKind,
    pub path: std::string::String,
    pub detail: std::string::String,
}

/// A non-fatal finding: content the schema permits but discourages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub path: std::string::String,
    pub message: std::string::String,
}

/// A successful parse plus any advisory diagnostics collected on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    pub value: T,
    pub warnings: Vec<Diagnostic>,
}

enum PathSegment {
    Key(Cow<'static, str>),
    Index(usize),
}

/// Per-parse state: the mode, the position in the document and the warning
/// list. One context lives for exactly one top-level parse.
pub struct Context {
    mode: ParseMode,
    path: Vec<PathSegment>,
    warnings: Vec<Diagnostic>,
    pub(crate) in_contained: bool,
}

fn escape_pointer_segment(out: &mut std::string::String, segment: &str) {
    for c in segment.chars() {
        match c {
            '~' => out.push_str("~0"),
            '/' => out.push_str("~1"),
            other => out.push(other),
        }
    }
}

impl Context {
    pub fn new(mode: ParseMode) -> Self {
        Self {
            mode,
            path: Vec::new(),
            warnings: Vec::new(),
            in_contained: false,
        }
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    pub(crate) fn push_key(&mut self, key: &'static str) {
        self.path.push(PathSegment::Key(Cow::Borrowed(key)));
    }

    pub(crate) fn push_key_owned(&mut self, key: std::string::String) {
        self.path.push(PathSegment::Key(Cow::Owned(key)));
    }

    pub(crate) fn push_index(&mut self, index: usize) {
        self.path.push(PathSegment::Index(index));
    }

    pub(crate) fn pop(&mut self) {
        self.path.pop();
    }

    /// The current position as a JSON Pointer; the document root is `/`.
    pub fn pointer(&self) -> std::string::String {
        if self.path.is_empty() {
            return std::string::String::from("/");
        }
        let mut out = std::string::String::new();
        for segment in &self.path {
            out.push('/');
            match segment {
                PathSegment::Key(key) => escape_pointer_segment(&mut out, key),
                PathSegment::Index(index) => out.push_str(&index.to_string()),
            }
        }
        out
    }

    fn pointer_with(&self, key: &str) -> std::string::String {
        let mut out = if self.path.is_empty() {
            std::string::String::new()
        } else {
            self.pointer()
        };
        out.push('/');
        escape_pointer_segment(&mut out, key);
        out
    }

    /// An error at the current position.
    pub fn error(&self, kind: ErrorKind, detail: impl Into<std::string::String>) -> CodecError {
        CodecError {
            kind,
            path: self.pointer(),
            detail: detail.into(),
        }
    }

    /// An error one key below the current position.
    pub fn error_at(
        &self,
        key: &str,
        kind: ErrorKind,
        detail: impl Into<std::string::String>,
    ) -> CodecError {
        CodecError {
            kind,
            path: self.pointer_with(key),
            detail: detail.into(),
        }
    }

    pub(crate) fn warn(&mut self, message: impl Into<std::string::String>) {
        let path = self.pointer();
        self.warnings.push(Diagnostic {
            path,
            message: message.into(),
        });
    }

    pub(crate) fn warn_at(&mut self, key: &str, message: impl Into<std::string::String>) {
        let path = self.pointer_with(key);
        self.warnings.push(Diagnostic {
            path,
            message: message.into(),
        });
    }

    pub(crate) fn take_warnings(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.warnings)
    }
}

/// Decoding from a JSON tree position.
pub trait FromFhir: Sized {
    fn from_fhir(value: &JsonValue, ctx: &mut Context) -> Result<Self, CodecError>;
}

/// Encoding to a JSON tree. Infallible: every well-formed model value has a
/// wire form.
pub trait ToFhir {
    fn to_fhir(&self) -> JsonValue;
}

/// The scalar half of a primitive: everything under the plain field key,
/// with the `_field` sibling handled by the engine.
pub trait FhirScalar: Sized {
    fn from_scalar(value: &JsonValue, ctx: &mut Context) -> Result<Self, CodecError>;
    fn to_scalar(&self) -> JsonValue;
}

/// A concrete resource type with its `resourceType` discriminator.
pub trait FhirResource: FromFhir + ToFhir {
    const TYPE: &'static str;

    fn from_object(obj: &JsonObject, ctx: &mut Context) -> Result<Self, CodecError>;
    fn to_object(&self) -> JsonObject;
}

impl<T: FromFhir> FromFhir for Box<T> {
    fn from_fhir(value: &JsonValue, ctx: &mut Context) -> Result<Self, CodecError> {
        Ok(Box::new(T::from_fhir(value, ctx)?))
    }
}

impl<T: ToFhir> ToFhir for Box<T> {
    fn to_fhir(&self) -> JsonValue {
        (**self).to_fhir()
    }
}

/// Decodes document bytes into a JSON tree. UTF-8 only; a byte order mark
/// is rejected rather than skipped.
pub(crate) fn decode_document(bytes: &[u8]) -> Result<JsonValue, CodecError> {
    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        return Err(CodecError {
            kind: ErrorKind::Structural,
            path: std::string::String::from("/"),
            detail: std::string::String::from("document starts with a byte order mark"),
        });
    }
    serde_json::from_slice(bytes).map_err(|err| CodecError {
        kind: ErrorKind::Structural,
        path: std::string::String::from("/"),
        detail: format!("invalid JSON document: {err}"),
    })
}

pub(crate) fn expect_object<'a>(
    value: &'a JsonValue,
    ctx: &mut Context,
) -> Result<&'a JsonObject, CodecError> {
    match value {
        JsonValue::Object(obj) => Ok(obj),
        other => Err(ctx.error(
            ErrorKind::Structural,
            format!("expected a JSON object, found {}", json_type_name(other)),
        )),
    }
}

pub(crate) fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

/// Reads the `_field` sibling object: element id plus extensions.
fn parse_sibling(
    value: &JsonValue,
    ctx: &mut Context,
) -> Result<(Option<std::string::String>, Option<Vec<Extension>>), CodecError> {
    let obj = expect_object(value, ctx)?;
    if ctx.mode == ParseMode::Strict {
        for key in obj.keys() {
            if key != "id" && key != "extension" {
                return Err(ctx.error_at(
                    key,
                    ErrorKind::UnknownField,
                    format!("unknown field `{key}` in a primitive extension object"),
                ));
            }
        }
    }
    let id = string_field(obj, "id", ctx)?;
    let extension = complex_list::<Extension>(obj, "extension", ctx)?;
    Ok((id, extension))
}

/// Fuses `name` and `_name` into one element. Absent on both sides means an
/// absent field, not an empty element.
pub(crate) fn fuse_primitive<V: FhirScalar>(
    obj: &JsonObject,
    name: &'static str,
    ctx: &mut Context,
) -> Result<Option<Element<V>>, CodecError> {
    let sibling_key = format!("_{name}");
    let value_part = obj.get(name).filter(|v| !v.is_null());
    let sibling_part = obj.get(sibling_key.as_str()).filter(|v| !v.is_null());
    if value_part.is_none() && sibling_part.is_none() {
        return Ok(None);
    }
    let value = match value_part {
        Some(raw) => {
            ctx.push_key(name);
            let parsed = V::from_scalar(raw, ctx);
            ctx.pop();
            Some(parsed?)
        }
        None => None,
    };
    let (id, extension) = match sibling_part {
        Some(raw) => {
            ctx.push_key_owned(sibling_key);
            let parsed = parse_sibling(raw, ctx);
            ctx.pop();
            parsed?
        }
        None => (None, None),
    };
    Ok(Some(Element {
        id,
        extension,
        value,
    }))
}

/// Fuses parallel `name` / `_name` arrays positionally. Both arrays, when
/// present, must agree in length, and no position may be null on both sides.
pub(crate) fn fuse_primitive_list<V: FhirScalar>(
    obj: &JsonObject,
    name: &'static str,
    ctx: &mut Context,
) -> Result<Option<Vec<Element<V>>>, CodecError> {
    let sibling_key = format!("_{name}");
    let values = match obj.get(name) {
        None | Some(JsonValue::Null) => None,
        Some(JsonValue::Array(items)) => Some(items),
        Some(other) => {
            return Err(ctx.error_at(
                name,
                ErrorKind::Structural,
                format!("expected a JSON array, found {}", json_type_name(other)),
            ));
        }
    };
    let siblings = match obj.get(sibling_key.as_str()) {
        None | Some(JsonValue::Null) => None,
        Some(JsonValue::Array(items)) => Some(items),
        Some(other) => {
            return Err(ctx.error_at(
                &sibling_key,
                ErrorKind::Structural,
                format!("expected a JSON array, found {}", json_type_name(other)),
            ));
        }
    };
    if values.is_none() && siblings.is_none() {
        return Ok(None);
    }
    if let (Some(value_items), Some(sibling_items)) = (values, siblings) {
        if value_items.len() != sibling_items.len() {
            return Err(ctx.error_at(
                name,
                ErrorKind::PrimitiveSiblingMisalignment,
                format!(
                    "value array has {} entries but the sibling array has {}",
                    value_items.len(),
                    sibling_items.len()
                ),
            ));
        }
    }
    let len = values
        .map_or(0, Vec::len)
        .max(siblings.map_or(0, Vec::len));
    let mut out = Vec::with_capacity(len);
    for index in 0..len {
        let raw_value = values
            .and_then(|items| items.get(index))
            .filter(|v| !v.is_null());
        let raw_sibling = siblings
            .and_then(|items| items.get(index))
            .filter(|v| !v.is_null());
        if raw_value.is_none() && raw_sibling.is_none() {
            ctx.push_key(name);
            ctx.push_index(index);
            let err = ctx.error(
                ErrorKind::PrimitiveSiblingMisalignment,
                "null in both the value and sibling arrays",
            );
            ctx.pop();
            ctx.pop();
            return Err(err);
        }
        let value = match raw_value {
            Some(raw) => {
                ctx.push_key(name);
                ctx.push_index(index);
                let parsed = V::from_scalar(raw, ctx);
                ctx.pop();
                ctx.pop();
                Some(parsed?)
            }
            None => None,
        };
        let (id, extension) = match raw_sibling {
            Some(raw) => {
                ctx.push_key_owned(sibling_key.clone());
                ctx.push_index(index);
                let parsed = parse_sibling(raw, ctx);
                ctx.pop();
                ctx.pop();
                parsed?
            }
            None => (None, None),
        };
        out.push(Element {
            id,
            extension,
            value,
        });
    }
    Ok(Some(out))
}

pub(crate) fn complex<T: FromFhir>(
    obj: &JsonObject,
    name: &'static str,
    ctx: &mut Context,
) -> Result<Option<T>, CodecError> {
    match obj.get(name) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(raw) => {
            ctx.push_key(name);
            let parsed = T::from_fhir(raw, ctx);
            ctx.pop();
            Ok(Some(parsed?))
        }
    }
}

pub(crate) fn complex_list<T: FromFhir>(
    obj: &JsonObject,
    name: &'static str,
    ctx: &mut Context,
) -> Result<Option<Vec<T>>, CodecError> {
    let items = match obj.get(name) {
        None | Some(JsonValue::Null) => return Ok(None),
        Some(JsonValue::Array(items)) => items,
        Some(other) => {
            return Err(ctx.error_at(
                name,
                ErrorKind::Structural,
                format!("expected a JSON array, found {}", json_type_name(other)),
            ));
        }
    };
    ctx.push_key(name);
    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        ctx.push_index(index);
        let parsed = T::from_fhir(item, ctx);
        ctx.pop();
        match parsed {
            Ok(value) => out.push(value),
            Err(err) => {
                ctx.pop();
                return Err(err);
            }
        }
    }
    ctx.pop();
    Ok(Some(out))
}

/// A raw JSON string field with no `_field` sibling (`Extension.url`, the
/// element ids inside complex types).
pub(crate) fn string_field(
    obj: &JsonObject,
    name: &'static str,
    ctx: &mut Context,
) -> Result<Option<std::string::String>, CodecError> {
    match obj.get(name) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(text)) => Ok(Some(text.clone())),
        Some(other) => Err(ctx.error_at(
            name,
            ErrorKind::Structural,
            format!("expected a JSON string, found {}", json_type_name(other)),
        )),
    }
}

pub(crate) fn require<T>(
    value: Option<T>,
    name: &str,
    ctx: &mut Context,
) -> Result<T, CodecError> {
    value.ok_or_else(|| {
        ctx.error_at(
            name,
            ErrorKind::MissingRequiredField,
            format!("required field `{name}` is missing"),
        )
    })
}

pub(crate) fn require_list<T>(
    value: Option<Vec<T>>,
    name: &str,
    ctx: &mut Context,
) -> Result<Vec<T>, CodecError> {
    match value {
        Some(items) if !items.is_empty() => Ok(items),
        _ => Err(ctx.error_at(
            name,
            ErrorKind::MissingRequiredField,
            format!("required field `{name}` needs at least one entry"),
        )),
    }
}

/// Scans an object for keys the model does not declare. Strict mode rejects
/// them; lenient mode collects them into the owning type's side-map.
/// `_`-prefixed strays are always collected, never rejected: the sibling
/// convention makes them structural noise rather than unknown content.
pub(crate) fn collect_unknown_fields(
    obj: &JsonObject,
    declared: &[&str],
    choice_keys: &[&[&str]],
    is_resource: bool,
    ctx: &mut Context,
) -> Result<Option<JsonObject>, CodecError> {
    let mut extra = JsonObject::new();
    for (key, value) in obj {
        if is_resource && key == "resourceType" {
            continue;
        }
        let base = key.strip_prefix('_').unwrap_or(key.as_str());
        let known = declared.contains(&base) || choice_keys.iter().any(|set| set.contains(&base));
        if known {
            continue;
        }
        if ctx.mode == ParseMode::Strict && !key.starts_with('_') {
            return Err(ctx.error_at(
                key,
                ErrorKind::UnknownField,
                format!("unknown field `{key}`"),
            ));
        }
        extra.insert(key.clone(), value.clone());
    }
    Ok(if extra.is_empty() { None } else { Some(extra) })
}

pub(crate) fn has_sibling_key(obj: &JsonObject, key: &str) -> bool {
    obj.contains_key(format!("_{key}").as_str())
}

pub(crate) fn resource_type_of<'a>(
    obj: &'a JsonObject,
    ctx: &mut Context,
) -> Result<&'a str, CodecError> {
    match obj.get("resourceType") {
        Some(JsonValue::String(name)) => Ok(name),
        Some(other) => Err(ctx.error_at(
            "resourceType",
            ErrorKind::Structural,
            format!("resourceType must be a string, found {}", json_type_name(other)),
        )),
        None => Err(ctx.error(
            ErrorKind::UnknownResourceType,
            "missing resourceType discriminator",
        )),
    }
}

/// Parses the `contained` list of a resource, enforcing the contained-id
/// rules: every contained resource has an id, ids are unique within the
/// container, and contained resources never nest further containment.
pub(crate) fn parse_contained(
    obj: &JsonObject,
    ctx: &mut Context,
) -> Result<Option<Vec<crate::r5::Resource>>, CodecError> {
    if !obj.contains_key("contained") {
        return Ok(None);
    }
    if ctx.in_contained {
        return Err(ctx.error_at(
            "contained",
            ErrorKind::Structural,
            "contained resources must not carry contained resources of their own",
        ));
    }
    ctx.in_contained = true;
    let parsed = complex_list::<crate::r5::Resource>(obj, "contained", ctx);
    ctx.in_contained = false;
    let parsed = parsed?;
    if let Some(resources) = parsed.as_ref() {
        let mut seen: HashSet<&str> = HashSet::new();
        for (index, resource) in resources.iter().enumerate() {
            ctx.push_key("contained");
            ctx.push_index(index);
            let outcome = match resource.id_value() {
                None => Err(ctx.error_at(
                    "id",
                    ErrorKind::MissingRequiredField,
                    "contained resources must carry an id",
                )),
                Some(id) if !seen.insert(id) => Err(ctx.error_at(
                    "id",
                    ErrorKind::Structural,
                    format!("duplicate contained resource id `{id}`"),
                )),
                Some(_) => Ok(()),
            };
            ctx.pop();
            ctx.pop();
            outcome?;
        }
    }
    Ok(parsed)
}

fn sibling_object<V>(element: &Element<V>) -> Option<JsonObject> {
    let has_extensions = element.extension.as_ref().is_some_and(|ext| !ext.is_empty());
    if element.id.is_none() && !has_extensions {
        return None;
    }
    let mut obj = JsonObject::new();
    if let Some(id) = element.id.as_ref() {
        obj.insert(
            std::string::String::from("id"),
            JsonValue::String(id.clone()),
        );
    }
    if has_extensions {
        if let Some(extensions) = element.extension.as_ref() {
            obj.insert(
                std::string::String::from("extension"),
                JsonValue::Array(extensions.iter().map(ToFhir::to_fhir).collect()),
            );
        }
    }
    Some(obj)
}

pub(crate) fn emit_primitive<V: FhirScalar>(
    out: &mut JsonObject,
    name: &str,
    element: &Element<V>,
) {
    if let Some(value) = element.value.as_ref() {
        out.insert(name.to_string(), value.to_scalar());
    }
    if let Some(sibling) = sibling_object(element) {
        out.insert(format!("_{name}"), JsonValue::Object(sibling));
    }
}

/// Emits a primitive list as positionally padded value / sibling arrays. An
/// all-null array is omitted entirely.
pub(crate) fn emit_primitive_list<V: FhirScalar>(
    out: &mut JsonObject,
    name: &str,
    items: &[Element<V>],
) {
    if items.is_empty() {
        return;
    }
    let mut values = Vec::with_capacity(items.len());
    let mut siblings = Vec::with_capacity(items.len());
    let mut any_value = false;
    let mut any_sibling = false;
    for element in items {
        match element.value.as_ref() {
            Some(value) => {
                any_value = true;
                values.push(value.to_scalar());
            }
            None => values.push(JsonValue::Null),
        }
        match sibling_object(element) {
            Some(obj) => {
                any_sibling = true;
                siblings.push(JsonValue::Object(obj));
            }
            None => siblings.push(JsonValue::Null),
        }
    }
    if any_value {
        out.insert(name.to_string(), JsonValue::Array(values));
    }
    if any_sibling {
        out.insert(format!("_{name}"), JsonValue::Array(siblings));
    }
}

pub(crate) fn emit_complex<T: ToFhir>(out: &mut JsonObject, name: &str, value: &T) {
    out.insert(name.to_string(), value.to_fhir());
}

pub(crate) fn emit_complex_list<T: ToFhir>(out: &mut JsonObject, name: &str, items: &[T]) {
    if items.is_empty() {
        return;
    }
    out.insert(
        name.to_string(),
        JsonValue::Array(items.iter().map(ToFhir::to_fhir).collect()),
    );
}

pub(crate) fn emit_string(out: &mut JsonObject, name: &str, value: &str) {
    out.insert(name.to_string(), JsonValue::String(value.to_string()));
}

/// Replays the lenient-mode side-map on emission, unchanged.
pub(crate) fn emit_extra(out: &mut JsonObject, extra: &Option<JsonObject>) {
    if let Some(extra) = extra {
        for (key, value) in extra {
            out.insert(key.clone(), value.clone());
        }
    }
}
