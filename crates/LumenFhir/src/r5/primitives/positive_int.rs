use crate::codec::PositiveIntValue;
use crate::element::Element;

/// FHIR `positiveInt`: an integer of at least 1.
pub type PositiveInt = Element<PositiveIntValue>;
