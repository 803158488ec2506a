//! Presence records as returned by the detail endpoints.
//!
//! Second counts arrive as JSON numbers which the backend sometimes emits as
//! floats (`34745.0`); they are truncated to whole seconds on decode.

use pa_utils::intervals::whole_seconds;
use serde::{Deserialize, Deserializer, Serialize};

fn de_seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    Ok(whole_seconds(raw))
}

#[derive(Deserialize)]
struct StartEnd {
    #[serde(deserialize_with = "de_seconds")]
    start: i64,
    #[serde(deserialize_with = "de_seconds")]
    end: i64,
}

/// `[weekday_label, {"start": s, "end": s}]`
#[derive(Deserialize)]
struct WeekdayIntervalWire(String, StartEnd);

/// Mean start and end of presence for one weekday of one user.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(from = "WeekdayIntervalWire")]
pub struct WeekdayInterval {
    pub weekday: String,
    /// Seconds since midnight
    pub start: i64,
    /// Seconds since midnight
    pub end: i64,
}

impl From<WeekdayIntervalWire> for WeekdayInterval {
    fn from(wire: WeekdayIntervalWire) -> Self {
        WeekdayInterval {
            weekday: wire.0,
            start: wire.1.start,
            end: wire.1.end,
        }
    }
}

/// Mean daily presence of one of the top users in a month.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct MonthlyMean {
    pub name: String,
    /// Mean presence duration in seconds
    #[serde(deserialize_with = "de_seconds")]
    pub mean: i64,
    /// Avatar image URL
    pub avatar: String,
}

/// A per-weekday aggregate (mean or total presence, in seconds).
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct WeekdayTotal {
    pub weekday: String,
    pub seconds: i64,
}

/// Decode `/api/v1/presence_start_end/{user_id}`.
pub fn decode_weekday_intervals(body: &str) -> serde_json::Result<Vec<WeekdayInterval>> {
    serde_json::from_str(body)
}

/// Decode `/api/v1/top5monthly/{month}`.
pub fn decode_monthly_means(body: &str) -> serde_json::Result<Vec<MonthlyMean>> {
    serde_json::from_str(body)
}

/// Decode `[[weekday, seconds], ...]` bodies.
///
/// A leading `["Weekday", "Presence (s)"]` header row (string in the value
/// column) is skipped. Any other row without a numeric value is an error.
pub fn decode_weekday_totals(body: &str) -> serde_json::Result<Vec<WeekdayTotal>> {
    let rows: Vec<(String, serde_json::Value)> = serde_json::from_str(body)?;
    rows.into_iter()
        .enumerate()
        .filter(|(index, (_, value))| !(*index == 0 && value.is_string()))
        .map(|(_, (weekday, value))| match value.as_f64() {
            Some(raw) => Ok(WeekdayTotal {
                weekday,
                seconds: whole_seconds(raw),
            }),
            None => Err(serde::de::Error::custom(format!(
                "presence for {} is not a number: {}",
                weekday, value
            ))),
        })
        .collect()
}
