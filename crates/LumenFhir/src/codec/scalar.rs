//! `FhirScalar` implementations for the primitive value types.
//!
//! Range- and grammar-restricted primitives get value newtypes so the
//! restriction lives in one place; the plain string family and boolean map
//! straight onto std types. Wrong JSON value types are `Structural` errors,
//! in-range-but-wrong content is `InvalidLexicalForm`.

use std::fmt;

use super::{CodecError, Context, ErrorKind, FhirScalar, JsonValue, json_type_name};
use crate::date_time::{PrecisionDate, PrecisionDateTime, PrecisionInstant, PrecisionTime};
use crate::precise_decimal::PreciseDecimal;

/// `positiveInt`: a 32-bit integer of at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PositiveIntValue(pub i32);

impl Default for PositiveIntValue {
    fn default() -> Self {
        Self(1)
    }
}

/// `unsignedInt`: a 32-bit integer of at least 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UnsignedIntValue(pub i32);

/// `integer64`: carried as a JSON string on the wire, since 64-bit values
/// exceed the interoperable JSON number range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Integer64Value(pub i64);

/// `code`: a token with no leading, trailing or doubled whitespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CodeValue(pub std::string::String);

impl CodeValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for a well-formed code token: non-empty, no surrounding
    /// whitespace, internal whitespace limited to single spaces.
    pub fn is_valid_token(token: &str) -> bool {
        !token.is_empty()
            && !token.starts_with(' ')
            && !token.ends_with(' ')
            && !token.contains("  ")
            && !token.chars().any(|c| c.is_whitespace() && c != ' ')
    }
}

impl From<&str> for CodeValue {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl fmt::Display for CodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for PositiveIntValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Display for UnsignedIntValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Display for Integer64Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

fn integral(value: &JsonValue, ctx: &mut Context) -> Result<i64, CodecError> {
    match value {
        JsonValue::Number(number) => number.as_i64().ok_or_else(|| {
            ctx.error(
                ErrorKind::InvalidLexicalForm,
                format!("`{number}` is not an integral value"),
            )
        }),
        other => Err(ctx.error(
            ErrorKind::Structural,
            format!("expected a JSON number, found {}", json_type_name(other)),
        )),
    }
}

impl FhirScalar for bool {
    fn from_scalar(value: &JsonValue, ctx: &mut Context) -> Result<Self, CodecError> {
        match value {
            JsonValue::Bool(flag) => Ok(*flag),
            other => Err(ctx.error(
                ErrorKind::Structural,
                format!("expected a JSON boolean, found {}", json_type_name(other)),
            )),
        }
    }

    fn to_scalar(&self) -> JsonValue {
        JsonValue::Bool(*self)
    }
}

impl FhirScalar for i32 {
    fn from_scalar(value: &JsonValue, ctx: &mut Context) -> Result<Self, CodecError> {
        let wide = integral(value, ctx)?;
        i32::try_from(wide).map_err(|_| {
            ctx.error(
                ErrorKind::InvalidLexicalForm,
                format!("`{wide}` is outside the 32-bit integer range"),
            )
        })
    }

    fn to_scalar(&self) -> JsonValue {
        JsonValue::Number((*self).into())
    }
}

impl FhirScalar for PositiveIntValue {
    fn from_scalar(value: &JsonValue, ctx: &mut Context) -> Result<Self, CodecError> {
        let parsed = i32::from_scalar(value, ctx)?;
        if parsed < 1 {
            return Err(ctx.error(
                ErrorKind::InvalidLexicalForm,
                format!("positiveInt must be 1 or greater, found {parsed}"),
            ));
        }
        Ok(Self(parsed))
    }

    fn to_scalar(&self) -> JsonValue {
        JsonValue::Number(self.0.into())
    }
}

impl FhirScalar for UnsignedIntValue {
    fn from_scalar(value: &JsonValue, ctx: &mut Context) -> Result<Self, CodecError> {
        let parsed = i32::from_scalar(value, ctx)?;
        if parsed < 0 {
            return Err(ctx.error(
                ErrorKind::InvalidLexicalForm,
                format!("unsignedInt must be 0 or greater, found {parsed}"),
            ));
        }
        Ok(Self(parsed))
    }

    fn to_scalar(&self) -> JsonValue {
        JsonValue::Number(self.0.into())
    }
}

impl FhirScalar for Integer64Value {
    fn from_scalar(value: &JsonValue, ctx: &mut Context) -> Result<Self, CodecError> {
        match value {
            // The R5 wire form is a string; integral numbers are accepted
            // because widely deployed emitters still produce them.
            JsonValue::String(token) => token.parse::<i64>().map(Self).map_err(|_| {
                ctx.error(
                    ErrorKind::InvalidLexicalForm,
                    format!("`{token}` is not a 64-bit integer"),
                )
            }),
            JsonValue::Number(_) => Ok(Self(integral(value, ctx)?)),
            other => Err(ctx.error(
                ErrorKind::Structural,
                format!(
                    "expected a JSON string or number, found {}",
                    json_type_name(other)
                ),
            )),
        }
    }

    fn to_scalar(&self) -> JsonValue {
        JsonValue::String(self.0.to_string())
    }
}

impl FhirScalar for std::string::String {
    fn from_scalar(value: &JsonValue, ctx: &mut Context) -> Result<Self, CodecError> {
        match value {
            JsonValue::String(text) => Ok(text.clone()),
            other => Err(ctx.error(
                ErrorKind::Structural,
                format!("expected a JSON string, found {}", json_type_name(other)),
            )),
        }
    }

    fn to_scalar(&self) -> JsonValue {
        JsonValue::String(self.clone())
    }
}

impl FhirScalar for CodeValue {
    fn from_scalar(value: &JsonValue, ctx: &mut Context) -> Result<Self, CodecError> {
        let token = std::string::String::from_scalar(value, ctx)?;
        if !Self::is_valid_token(&token) {
            return Err(ctx.error(
                ErrorKind::InvalidLexicalForm,
                format!("`{token}` is not a valid code token"),
            ));
        }
        Ok(Self(token))
    }

    fn to_scalar(&self) -> JsonValue {
        JsonValue::String(self.0.clone())
    }
}

impl FhirScalar for PreciseDecimal {
    fn from_scalar(value: &JsonValue, ctx: &mut Context) -> Result<Self, CodecError> {
        match value {
            JsonValue::Number(number) => {
                // With arbitrary_precision the number keeps its source
                // token, trailing zeros included.
                let token = number.to_string();
                Self::parse(&token).ok_or_else(|| {
                    ctx.error(
                        ErrorKind::InvalidLexicalForm,
                        format!("`{token}` is not a representable decimal"),
                    )
                })
            }
            other => Err(ctx.error(
                ErrorKind::Structural,
                format!("expected a JSON number, found {}", json_type_name(other)),
            )),
        }
    }

    fn to_scalar(&self) -> JsonValue {
        if let Ok(number) = self.original_string().parse::<serde_json::Number>() {
            return JsonValue::Number(number);
        }
        // A hand-built token that is not valid JSON falls back to the
        // canonical form of the numeric value.
        let canonical = self
            .value()
            .map(|value| value.to_string())
            .unwrap_or_else(|| std::string::String::from("0"));
        match canonical.parse::<serde_json::Number>() {
            Ok(number) => JsonValue::Number(number),
            Err(_) => JsonValue::Null,
        }
    }
}

fn lexical_string<'a>(value: &'a JsonValue, ctx: &mut Context) -> Result<&'a str, CodecError> {
    match value {
        JsonValue::String(text) => Ok(text),
        other => Err(ctx.error(
            ErrorKind::Structural,
            format!("expected a JSON string, found {}", json_type_name(other)),
        )),
    }
}

impl FhirScalar for PrecisionDate {
    fn from_scalar(value: &JsonValue, ctx: &mut Context) -> Result<Self, CodecError> {
        let token = lexical_string(value, ctx)?;
        Self::parse(token).ok_or_else(|| {
            ctx.error(
                ErrorKind::InvalidLexicalForm,
                format!("`{token}` is not a valid date"),
            )
        })
    }

    fn to_scalar(&self) -> JsonValue {
        JsonValue::String(self.original_string().to_string())
    }
}

impl FhirScalar for PrecisionDateTime {
    fn from_scalar(value: &JsonValue, ctx: &mut Context) -> Result<Self, CodecError> {
        let token = lexical_string(value, ctx)?;
        Self::parse(token).ok_or_else(|| {
            ctx.error(
                ErrorKind::InvalidLexicalForm,
                format!("`{token}` is not a valid dateTime"),
            )
        })
    }

    fn to_scalar(&self) -> JsonValue {
        JsonValue::String(self.original_string().to_string())
    }
}

impl FhirScalar for PrecisionTime {
    fn from_scalar(value: &JsonValue, ctx: &mut Context) -> Result<Self, CodecError> {
        let token = lexical_string(value, ctx)?;
        Self::parse(token).ok_or_else(|| {
            ctx.error(
                ErrorKind::InvalidLexicalForm,
                format!("`{token}` is not a valid time"),
            )
        })
    }

    fn to_scalar(&self) -> JsonValue {
        JsonValue::String(self.original_string().to_string())
    }
}

impl FhirScalar for PrecisionInstant {
    fn from_scalar(value: &JsonValue, ctx: &mut Context) -> Result<Self, CodecError> {
        let token = lexical_string(value, ctx)?;
        Self::parse(token).ok_or_else(|| {
            ctx.error(
                ErrorKind::InvalidLexicalForm,
                format!("`{token}` is not a valid instant"),
            )
        })
    }

    fn to_scalar(&self) -> JsonValue {
        JsonValue::String(self.original_string().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::ParseMode;

    fn ctx() -> Context {
        Context::new(ParseMode::Lenient)
    }

    #[test]
    fn code_token_rules() {
        assert!(CodeValue::is_valid_token("final"));
        assert!(CodeValue::is_valid_token("entered-in-error"));
        assert!(CodeValue::is_valid_token("two words"));
        assert!(!CodeValue::is_valid_token(""));
        assert!(!CodeValue::is_valid_token(" leading"));
        assert!(!CodeValue::is_valid_token("trailing "));
        assert!(!CodeValue::is_valid_token("two  spaces"));
        assert!(!CodeValue::is_valid_token("tab\tseparated"));
    }

    #[test]
    fn positive_int_rejects_zero() {
        let mut ctx = ctx();
        let err = PositiveIntValue::from_scalar(&serde_json::json!(0), &mut ctx).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidLexicalForm);
        assert!(PositiveIntValue::from_scalar(&serde_json::json!(1), &mut ctx).is_ok());
    }

    #[test]
    fn integer64_round_trips_as_string() {
        let mut ctx = ctx();
        let value =
            Integer64Value::from_scalar(&serde_json::json!("9007199254740993"), &mut ctx).unwrap();
        assert_eq!(value.0, 9_007_199_254_740_993);
        assert_eq!(value.to_scalar(), serde_json::json!("9007199254740993"));
    }

    #[test]
    fn integer_rejects_fractions() {
        let mut ctx = ctx();
        let err = i32::from_scalar(&serde_json::json!(1.5), &mut ctx).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidLexicalForm);
    }

    #[test]
    fn decimal_token_preserved_through_scalar() {
        let mut ctx = ctx();
        let raw: JsonValue = serde_json::from_str("1.200").unwrap();
        let decimal = PreciseDecimal::from_scalar(&raw, &mut ctx).unwrap();
        assert_eq!(decimal.original_string(), "1.200");
        assert_eq!(serde_json::to_string(&decimal.to_scalar()).unwrap(), "1.200");
    }

    #[test]
    fn wrong_json_type_is_structural() {
        let mut ctx = ctx();
        let err = bool::from_scalar(&serde_json::json!("true"), &mut ctx).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Structural);
    }
}
