use crate::element::Element;

/// FHIR `url`: a URI that is always a locator.
pub type Url = Element<std::string::String>;
