use crate::element::Element;

/// FHIR `uuid`: a UUID expressed as a `urn:uuid:` URI.
pub type Uuid = Element<std::string::String>;
