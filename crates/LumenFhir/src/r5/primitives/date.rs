use crate::date_time::PrecisionDate;
use crate::element::Element;

/// FHIR `date`: year, year-month or full date.
pub type Date = Element<PrecisionDate>;
