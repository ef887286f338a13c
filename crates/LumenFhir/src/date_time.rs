//! Precision-aware date and time types.
//!
//! FHIR temporal primitives allow partial precision: a `date` may be a bare
//! year, a `dateTime` may stop at any component, and comparison across
//! different precisions can be indeterminate. Each type here keeps the
//! original lexical form alongside the decoded components so that values
//! round-trip byte-for-byte.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime as ChronoDateTime, NaiveDate, NaiveTime, Utc};

/// Precision of a FHIR `date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePrecision {
    /// `YYYY`
    Year,
    /// `YYYY-MM`
    YearMonth,
    /// `YYYY-MM-DD`
    Full,
}

/// Precision of a FHIR `time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimePrecision {
    /// `HH:MM:SS`
    Second,
    /// `HH:MM:SS.sss`
    Fraction,
}

/// Precision of a FHIR `dateTime`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DateTimePrecision {
    /// `YYYY`
    Year,
    /// `YYYY-MM`
    YearMonth,
    /// `YYYY-MM-DD`
    Date,
    /// `YYYY-MM-DDTHH:MM:SS` with timezone
    Second,
    /// `YYYY-MM-DDTHH:MM:SS.sss` with timezone
    Full,
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// A FHIR `date`: year, year-month or full date, original form preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecisionDate {
    year: i32,
    month: Option<u32>,
    day: Option<u32>,
    precision: DatePrecision,
    original_string: Arc<str>,
}

impl Default for PrecisionDate {
    fn default() -> Self {
        Self::from_ymd(1970, 1, 1)
    }
}

impl PrecisionDate {
    pub fn from_year(year: i32) -> Self {
        Self {
            year,
            month: None,
            day: None,
            precision: DatePrecision::Year,
            original_string: Arc::from(format!("{:04}", year)),
        }
    }

    pub fn from_year_month(year: i32, month: u32) -> Self {
        Self {
            year,
            month: Some(month),
            day: None,
            precision: DatePrecision::YearMonth,
            original_string: Arc::from(format!("{:04}-{:02}", year, month)),
        }
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month: Some(month),
            day: Some(day),
            precision: DatePrecision::Full,
            original_string: Arc::from(format!("{:04}-{:02}-{:02}", year, month, day)),
        }
    }

    /// Parses a FHIR date, preserving precision. The year must be four
    /// digits, month and day two; full dates are checked against the
    /// calendar, so `2023-02-30` is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split('-').collect();
        match parts.as_slice() {
            [year] => {
                if year.len() != 4 || !all_digits(year) {
                    return None;
                }
                Some(Self {
                    year: year.parse().ok()?,
                    month: None,
                    day: None,
                    precision: DatePrecision::Year,
                    original_string: Arc::from(s),
                })
            }
            [year, month] => {
                if year.len() != 4 || month.len() != 2 || !all_digits(year) || !all_digits(month) {
                    return None;
                }
                let month: u32 = month.parse().ok()?;
                if !(1..=12).contains(&month) {
                    return None;
                }
                Some(Self {
                    year: year.parse().ok()?,
                    month: Some(month),
                    day: None,
                    precision: DatePrecision::YearMonth,
                    original_string: Arc::from(s),
                })
            }
            [year, month, day] => {
                if year.len() != 4
                    || month.len() != 2
                    || day.len() != 2
                    || !all_digits(year)
                    || !all_digits(month)
                    || !all_digits(day)
                {
                    return None;
                }
                let year: i32 = year.parse().ok()?;
                let month: u32 = month.parse().ok()?;
                let day: u32 = day.parse().ok()?;
                NaiveDate::from_ymd_opt(year, month, day)?;
                Some(Self {
                    year,
                    month: Some(month),
                    day: Some(day),
                    precision: DatePrecision::Full,
                    original_string: Arc::from(s),
                })
            }
            _ => None,
        }
    }

    pub fn precision(&self) -> DatePrecision {
        self.precision
    }

    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Option<u32> {
        self.month
    }

    pub fn day(&self) -> Option<u32> {
        self.day
    }

    /// Converts to a `NaiveDate`, substituting January / the 1st for
    /// missing components.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.unwrap_or(1), self.day.unwrap_or(1))
    }

    /// Compares two dates. Returns `None` when the precisions diverge before
    /// the values do, which makes the ordering indeterminate.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match self.year.cmp(&other.year) {
            Ordering::Equal => match (self.month, other.month) {
                (None, None) => Some(Ordering::Equal),
                (None, Some(_)) | (Some(_), None) => None,
                (Some(m1), Some(m2)) => match m1.cmp(&m2) {
                    Ordering::Equal => match (self.day, other.day) {
                        (None, None) => Some(Ordering::Equal),
                        (None, Some(_)) | (Some(_), None) => None,
                        (Some(d1), Some(d2)) => Some(d1.cmp(&d2)),
                    },
                    unequal => Some(unequal),
                },
            },
            unequal => Some(unequal),
        }
    }
}

/// A FHIR `time`: `HH:MM:SS` with an optional fractional second, no
/// timezone. The wire grammar requires all three components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecisionTime {
    hour: u32,
    minute: u32,
    second: u32,
    /// Fraction in nanoseconds; precision `Fraction` when present.
    nanosecond: Option<u32>,
    precision: TimePrecision,
    original_string: Arc<str>,
}

impl Default for PrecisionTime {
    fn default() -> Self {
        Self::from_hms(0, 0, 0)
    }
}

impl PrecisionTime {
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            nanosecond: None,
            precision: TimePrecision::Second,
            original_string: Arc::from(format!("{:02}:{:02}:{:02}", hour, minute, second)),
        }
    }

    pub fn from_hms_milli(hour: u32, minute: u32, second: u32, millisecond: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            nanosecond: Some(millisecond * 1_000_000),
            precision: TimePrecision::Fraction,
            original_string: Arc::from(format!(
                "{:02}:{:02}:{:02}.{:03}",
                hour, minute, second, millisecond
            )),
        }
    }

    /// Parses a FHIR time. Timezone designators are not part of the grammar
    /// and are rejected.
    pub fn parse(s: &str) -> Option<Self> {
        if s.contains('+') || s.contains('-') || s.ends_with('Z') {
            return None;
        }
        let parts: Vec<&str> = s.split(':').collect();
        let [hour, minute, second] = parts.as_slice() else {
            return None;
        };
        if hour.len() != 2 || minute.len() != 2 || !all_digits(hour) || !all_digits(minute) {
            return None;
        }
        let (second_digits, fraction) = match second.split_once('.') {
            Some((whole, frac)) => (whole, Some(frac)),
            None => (*second, None),
        };
        if second_digits.len() != 2 || !all_digits(second_digits) {
            return None;
        }
        let hour: u32 = hour.parse().ok()?;
        let minute: u32 = minute.parse().ok()?;
        let second_value: u32 = second_digits.parse().ok()?;
        if hour > 23 || minute > 59 || second_value > 60 {
            return None;
        }
        let (nanosecond, precision) = match fraction {
            Some(frac) => {
                if !all_digits(frac) || frac.len() > 9 {
                    return None;
                }
                let scale = 10u32.pow(9 - frac.len() as u32);
                let nanos: u32 = frac.parse().ok()?;
                (Some(nanos * scale), TimePrecision::Fraction)
            }
            None => (None, TimePrecision::Second),
        };
        Some(Self {
            hour,
            minute,
            second: second_value,
            nanosecond,
            precision,
            original_string: Arc::from(s),
        })
    }

    pub fn precision(&self) -> TimePrecision {
        self.precision
    }

    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_nano_opt(
            self.hour,
            self.minute,
            self.second,
            self.nanosecond.unwrap_or(0),
        )
    }

    /// Compares two times. Second and sub-second counts are folded into a
    /// single precision level, so `10:30:00` equals `10:30:00.000`.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        let left = (
            self.hour,
            self.minute,
            self.second,
            self.nanosecond.unwrap_or(0),
        );
        let right = (
            other.hour,
            other.minute,
            other.second,
            other.nanosecond.unwrap_or(0),
        );
        Some(left.cmp(&right))
    }
}

/// A FHIR `dateTime`: any date precision, optionally extended with a full
/// time and timezone. When a time is present the timezone is required by the
/// grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecisionDateTime {
    date: PrecisionDate,
    time: Option<PrecisionTime>,
    /// Offset from UTC in minutes. Present exactly when a time is present.
    timezone_offset: Option<i32>,
    precision: DateTimePrecision,
    original_string: Arc<str>,
}

impl Default for PrecisionDateTime {
    fn default() -> Self {
        Self::from_date(1970, 1, 1)
    }
}

impl PrecisionDateTime {
    pub fn from_date(year: i32, month: u32, day: u32) -> Self {
        let date = PrecisionDate::from_ymd(year, month, day);
        Self {
            original_string: Arc::from(date.original_string()),
            date,
            time: None,
            timezone_offset: None,
            precision: DateTimePrecision::Date,
        }
    }

    pub fn from_precision_date(date: PrecisionDate) -> Self {
        let precision = match date.precision() {
            DatePrecision::Year => DateTimePrecision::Year,
            DatePrecision::YearMonth => DateTimePrecision::YearMonth,
            DatePrecision::Full => DateTimePrecision::Date,
        };
        Self {
            original_string: Arc::from(date.original_string()),
            date,
            time: None,
            timezone_offset: None,
            precision,
        }
    }

    /// Parses a FHIR dateTime. A time component requires a full `YYYY-MM-DD`
    /// date and a timezone designator (`Z` or `+HH:MM`/`-HH:MM`).
    pub fn parse(s: &str) -> Option<Self> {
        let Some((date_part, time_and_tz)) = s.split_once('T') else {
            let date = PrecisionDate::parse(s)?;
            let mut parsed = Self::from_precision_date(date);
            parsed.original_string = Arc::from(s);
            return Some(parsed);
        };

        let date = PrecisionDate::parse(date_part)?;
        if date.precision() != DatePrecision::Full {
            return None;
        }

        let (time_part, timezone_offset) = if let Some(stripped) = time_and_tz.strip_suffix('Z') {
            (stripped, 0)
        } else if let Some(plus) = time_and_tz.rfind('+') {
            (
                &time_and_tz[..plus],
                Self::parse_timezone_offset(&time_and_tz[plus + 1..])?,
            )
        } else if let Some(minus) = time_and_tz.rfind('-') {
            (
                &time_and_tz[..minus],
                -Self::parse_timezone_offset(&time_and_tz[minus + 1..])?,
            )
        } else {
            return None;
        };

        let time = PrecisionTime::parse(time_part)?;
        let precision = match time.precision() {
            TimePrecision::Second => DateTimePrecision::Second,
            TimePrecision::Fraction => DateTimePrecision::Full,
        };
        Some(Self {
            date,
            time: Some(time),
            timezone_offset: Some(timezone_offset),
            precision,
            original_string: Arc::from(s),
        })
    }

    fn parse_timezone_offset(s: &str) -> Option<i32> {
        let (hours, minutes) = s.split_once(':')?;
        if hours.len() != 2 || minutes.len() != 2 || !all_digits(hours) || !all_digits(minutes) {
            return None;
        }
        let hours: i32 = hours.parse().ok()?;
        let minutes: i32 = minutes.parse().ok()?;
        if hours > 14 || minutes > 59 {
            return None;
        }
        Some(hours * 60 + minutes)
    }

    pub fn precision(&self) -> DateTimePrecision {
        self.precision
    }

    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    pub fn date(&self) -> &PrecisionDate {
        &self.date
    }

    pub fn time(&self) -> Option<&PrecisionTime> {
        self.time.as_ref()
    }

    pub fn timezone_offset_minutes(&self) -> Option<i32> {
        self.timezone_offset
    }

    /// Converts to UTC, substituting the earliest value for missing
    /// components. A value without a timezone is taken as UTC.
    pub fn to_chrono_datetime(&self) -> Option<ChronoDateTime<Utc>> {
        let naive_date = self.date.to_naive_date()?;
        let naive_time = match self.time.as_ref() {
            Some(time) => time.to_naive_time()?,
            None => NaiveTime::from_hms_opt(0, 0, 0)?,
        };
        let naive = naive_date.and_time(naive_time)
            - chrono::Duration::minutes(i64::from(self.timezone_offset.unwrap_or(0)));
        Some(ChronoDateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
    }

    /// Compares two dateTimes. When both carry timezones and at least
    /// second precision they are compared as instants; otherwise comparison
    /// is componentwise and indeterminate across differing precisions.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        if self.timezone_offset.is_some()
            && other.timezone_offset.is_some()
            && self.time.is_some()
            && other.time.is_some()
        {
            return Some(self.to_chrono_datetime()?.cmp(&other.to_chrono_datetime()?));
        }
        if self.timezone_offset.is_some() != other.timezone_offset.is_some() {
            return None;
        }
        match self.date.compare(&other.date) {
            Some(Ordering::Equal) => match (&self.time, &other.time) {
                (None, None) => Some(Ordering::Equal),
                (None, Some(_)) | (Some(_), None) => None,
                (Some(t1), Some(t2)) => t1.compare(t2),
            },
            unequal => unequal,
        }
    }
}

/// A FHIR `instant`: a fully specified point in time. Unlike `dateTime`,
/// partial precision is not allowed; seconds and a timezone are mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrecisionInstant {
    inner: PrecisionDateTime,
}

impl PrecisionInstant {
    pub fn parse(s: &str) -> Option<Self> {
        let inner = PrecisionDateTime::parse(s)?;
        if inner.time.is_none() || inner.timezone_offset.is_none() {
            return None;
        }
        Some(Self { inner })
    }

    pub fn original_string(&self) -> &str {
        self.inner.original_string()
    }

    pub fn as_datetime(&self) -> &PrecisionDateTime {
        &self.inner
    }

    pub fn to_chrono_datetime(&self) -> Option<ChronoDateTime<Utc>> {
        self.inner.to_chrono_datetime()
    }
}

impl fmt::Display for PrecisionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_string)
    }
}

impl fmt::Display for PrecisionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_string)
    }
}

impl fmt::Display for PrecisionDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_string)
    }
}

impl fmt::Display for PrecisionInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_partial_precision_round_trips() {
        for input in ["2023", "2023-03", "2023-03-15"] {
            let date = PrecisionDate::parse(input).unwrap();
            assert_eq!(date.original_string(), input);
        }
        assert_eq!(
            PrecisionDate::parse("2023").unwrap().precision(),
            DatePrecision::Year
        );
    }

    #[test]
    fn date_rejects_bad_lexical_forms() {
        for input in ["23", "2023-3", "2023-13", "2023-02-30", "2023-03-15T10"] {
            assert!(PrecisionDate::parse(input).is_none(), "accepted {input}");
        }
    }

    #[test]
    fn time_requires_all_three_components() {
        assert!(PrecisionTime::parse("10:30:00").is_some());
        assert!(PrecisionTime::parse("10:30:00.123").is_some());
        assert!(PrecisionTime::parse("10:30").is_none());
        assert!(PrecisionTime::parse("10:30:00Z").is_none());
        assert!(PrecisionTime::parse("10:30:00+01:00").is_none());
    }

    #[test]
    fn datetime_with_time_requires_timezone() {
        assert!(PrecisionDateTime::parse("2015-02-07T13:28:17-05:00").is_some());
        assert!(PrecisionDateTime::parse("2015-02-07T13:28:17Z").is_some());
        assert!(PrecisionDateTime::parse("2015-02-07T13:28:17").is_none());
        assert!(PrecisionDateTime::parse("2015-02").is_some());
    }

    #[test]
    fn datetime_comparison_across_zones() {
        let a = PrecisionDateTime::parse("2023-01-01T12:00:00Z").unwrap();
        let b = PrecisionDateTime::parse("2023-01-01T07:00:00-05:00").unwrap();
        assert_eq!(a.compare(&b), Some(Ordering::Equal));
    }

    #[test]
    fn date_comparison_indeterminate_across_precisions() {
        let year = PrecisionDate::parse("2023").unwrap();
        let month = PrecisionDate::parse("2023-05").unwrap();
        assert_eq!(year.compare(&month), None);
        assert_eq!(
            PrecisionDate::parse("2022").unwrap().compare(&month),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn instant_requires_seconds_and_timezone() {
        assert!(PrecisionInstant::parse("2015-02-07T13:28:17.239+02:00").is_some());
        assert!(PrecisionInstant::parse("2015-02-07").is_none());
        assert!(PrecisionInstant::parse("2015-02-07T13:28:17").is_none());
    }
}
