use serde::{Deserialize, Serialize};
use std::fmt;

use crate::AppError;

/// Search mode for a trip. Only these two options are selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TripType {
    #[default]
    #[serde(rename = "One way")]
    OneWay,
    #[serde(rename = "Round trip")]
    RoundTrip,
}

/// All trip types in the order they appear in the selector.
pub const ALL_TRIP_TYPES: &[TripType] = &[TripType::OneWay, TripType::RoundTrip];

impl TripType {
    /// Option value carried by the `<select>` and reported on submit.
    pub fn as_str(&self) -> &'static str {
        match self {
            TripType::OneWay => "One way",
            TripType::RoundTrip => "Round trip",
        }
    }

    /// Label shown to the user inside the selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            TripType::OneWay => "One Way",
            TripType::RoundTrip => "Round Trip",
        }
    }

    /// Map an option value back to its variant.
    pub fn from_value(s: &str) -> Option<Self> {
        ALL_TRIP_TYPES.iter().copied().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Passenger count as read from a numeric input.
///
/// Clearing the field (or typing something that is not a number) yields
/// `NotANumber`. That state is kept as-is and never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<i64>", into = "Option<i64>")]
pub enum PassengerCount {
    Count(i64),
    NotANumber,
}

impl Default for PassengerCount {
    fn default() -> Self {
        PassengerCount::Count(1)
    }
}

impl PassengerCount {
    /// Parse the raw text of a numeric control.
    ///
    /// Reads the leading integer: whitespace is skipped, one optional sign is
    /// accepted, then decimal digits up to the first non-digit. Anything after
    /// the digits is ignored, so `"2.5"` reads as 2. Out-of-range values
    /// saturate at the `i64` bounds. No hex prefix: `"0x10"` reads as 0, which
    /// a numeric control never produces anyway.
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim_start();
        let (negative, rest) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len == 0 {
            return PassengerCount::NotANumber;
        }

        let value = rest[..digits_len]
            .bytes()
            .fold(0i64, |acc, d| {
                let d = i64::from(d - b'0');
                if negative {
                    acc.saturating_mul(10).saturating_sub(d)
                } else {
                    acc.saturating_mul(10).saturating_add(d)
                }
            });
        PassengerCount::Count(value)
    }

    /// The parsed value, or `None` when the field held no number.
    pub fn value(&self) -> Option<i64> {
        match self {
            PassengerCount::Count(n) => Some(*n),
            PassengerCount::NotANumber => None,
        }
    }
}

impl fmt::Display for PassengerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassengerCount::Count(n) => write!(f, "{n}"),
            PassengerCount::NotANumber => f.write_str("NaN"),
        }
    }
}

impl From<Option<i64>> for PassengerCount {
    fn from(value: Option<i64>) -> Self {
        value.map_or(PassengerCount::NotANumber, PassengerCount::Count)
    }
}

impl From<PassengerCount> for Option<i64> {
    fn from(count: PassengerCount) -> Self {
        count.value()
    }
}

/// The five values collected by the trip search form.
///
/// Serialises to the record reported on submit:
/// `{departure, arrival, date, passengers, tripType}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub departure: String,
    pub arrival: String,
    /// Raw value of the date control (`YYYY-MM-DD`), empty when unset.
    pub date: String,
    pub passengers: PassengerCount,
    pub trip_type: TripType,
}

impl SearchQuery {
    /// JSON record of the query as reported on submit.
    pub fn to_record(&self) -> Result<serde_json::Value, AppError> {
        Ok(serde_json::to_value(self)?)
    }
}
