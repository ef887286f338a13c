use crate::element::Element;

/// FHIR `string`. Within model files this alias shadows the std type; raw
/// JSON strings with no element carrier are written `std::string::String`.
pub type String = Element<std::string::String>;
