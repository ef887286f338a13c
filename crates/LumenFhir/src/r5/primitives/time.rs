use crate::date_time::PrecisionTime;
use crate::element::Element;

/// FHIR `time`: a time of day, no timezone.
pub type Time = Element<PrecisionTime>;
