use crate::codec::Integer64Value;
use crate::element::Element;

/// FHIR `integer64`: 64-bit, carried as a JSON string on the wire.
pub type Integer64 = Element<Integer64Value>;
