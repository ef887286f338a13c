use crate::codec::UnsignedIntValue;
use crate::element::Element;

/// FHIR `unsignedInt`: an integer of at least 0.
pub type UnsignedInt = Element<UnsignedIntValue>;
