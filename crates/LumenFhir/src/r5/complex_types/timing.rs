use lumen_macros::FhirCodec;

use crate::codec::JsonObject;
use crate::r5::*;

/// A schedule of events, either enumerated or described by a repeat rule.
/// One of the backbone-pattern data types, so it carries modifier
/// extensions of its own.
#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct Timing {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    pub modifier_extension: Option<Vec<Extension>>,
    pub event: Option<Vec<DateTime>>,
    pub repeat: Option<TimingRepeat>,
    pub code: Option<CodeableConcept>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec, Default)]
pub struct TimingRepeat {
    pub id: Option<std::string::String>,
    pub extension: Option<Vec<Extension>>,
    #[fhir(flatten)]
    pub bounds: Option<TimingRepeatBounds>,
    pub count: Option<PositiveInt>,
    pub count_max: Option<PositiveInt>,
    pub duration: Option<Decimal>,
    pub duration_max: Option<Decimal>,
    pub duration_unit: Option<Coded<UnitsOfTime>>,
    pub frequency: Option<PositiveInt>,
    pub frequency_max: Option<PositiveInt>,
    pub period: Option<Decimal>,
    pub period_max: Option<Decimal>,
    pub period_unit: Option<Coded<UnitsOfTime>>,
    pub day_of_week: Option<Vec<Coded<DaysOfWeek>>>,
    pub time_of_day: Option<Vec<Time>>,
    pub when: Option<Vec<Code>>,
    pub offset: Option<UnsignedInt>,
    #[fhir(extra)]
    pub extra_fields: Option<JsonObject>,
}

#[derive(Debug, Clone, PartialEq, FhirCodec)]
pub enum TimingRepeatBounds {
    #[fhir(rename = "boundsDuration")]
    Duration(Duration),
    #[fhir(rename = "boundsRange")]
    Range(Range),
    #[fhir(rename = "boundsPeriod")]
    Period(Period),
}
