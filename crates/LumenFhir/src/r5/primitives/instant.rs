use crate::date_time::PrecisionInstant;
use crate::element::Element;

/// FHIR `instant`: a fully specified moment with timezone.
pub type Instant = Element<PrecisionInstant>;
