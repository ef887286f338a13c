use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// When something is available, as recurring hours plus exceptions.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct Availability {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub available_time: Option<Vec<AvailabilityAvailableTime>>,
    pub not_available_time: Option<Vec<AvailabilityNotAvailableTime>>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct AvailabilityAvailableTime {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub days_of_week: Option<Vec<Coded<DaysOfWeek>>>,
    pub all_day: Option<Boolean>,
    pub available_start_time: Option<Time>,
    pub available_end_time: Option<Time>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct AvailabilityNotAvailableTime {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub description: Option<String>,
    pub during: Option<Period>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}
