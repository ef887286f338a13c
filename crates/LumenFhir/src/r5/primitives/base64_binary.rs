use crate::element::Element;

/// FHIR `base64Binary`: base64 content, kept encoded at this layer.
pub type Base64Binary = Element<std::string::String>;
