use crate::date_time::PrecisionDateTime;
use crate::element::Element;

/// FHIR `dateTime`: partial-precision date, optionally with time and zone.
pub type DateTime = Element<PrecisionDateTime>;
