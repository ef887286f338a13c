use crate::element::Element;

/// FHIR `boolean`.
pub type Boolean = Element<bool>;
