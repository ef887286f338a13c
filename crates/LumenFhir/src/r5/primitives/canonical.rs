use crate::element::Element;

/// FHIR `canonical`: a canonical URL reference, possibly versioned.
pub type Canonical = Element<std::string::String>;
