use crate::element::Element;

/// FHIR `markdown`.
pub type Markdown = Element<std::string::String>;
