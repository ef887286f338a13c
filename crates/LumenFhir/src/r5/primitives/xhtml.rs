use crate::element::Element;

/// FHIR `xhtml`: the narrative payload, kept as its source text.
pub type Xhtml = Element<std::string::String>;
