use crate::element::Element;

/// FHIR `id`: a logical identifier token.
pub type Id = Element<std::string::String>;
