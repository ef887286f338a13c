use crate::element::Element;

/// FHIR `uri`.
pub type Uri = Element<std::string::String>;
