use crate::element::Element;

/// FHIR `integer`: a signed 32-bit integer.
pub type Integer = Element<i32>;
