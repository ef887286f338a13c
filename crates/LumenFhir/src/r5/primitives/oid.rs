use crate::element::Element;

/// FHIR `oid`: an OID expressed as a `urn:oid:` URI.
pub type Oid = Element<std::string::String>;
