//! Normalized timeline rows consumed by the chart renderer.

use crate::presence::{MonthlyMean, WeekdayInterval};
use chrono::NaiveTime;
use pa_utils::intervals::{
    format_hms, parse_interval, seconds_since_midnight, SECONDS_PER_DAY, WORKDAY_START_SECS,
};
use serde::Serialize;

/// One bar of a timeline chart: a label spanning `start..end` time of day.
///
/// Serializes times as `"HH:MM:SS"` strings for the JS bridge.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct ChartRow {
    pub label: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl ChartRow {
    /// Bar from `start_secs` to `end_secs`, both seconds since midnight.
    ///
    /// The start wraps into the day like any interval. The end never precedes
    /// the start: a negative span collapses to a zero-length bar, and a bar
    /// running past midnight is cut at `23:59:59`.
    pub fn spanning(label: String, start_secs: i64, end_secs: i64) -> Self {
        let start = parse_interval(start_secs);
        let span = end_secs.saturating_sub(start_secs).max(0);
        let end_of_span = seconds_since_midnight(&start).saturating_add(span);
        let end = parse_interval(end_of_span.min(SECONDS_PER_DAY - 1));
        ChartRow { label, start, end }
    }

    /// `(label, "HH:MM:SS", "HH:MM:SS")`
    pub fn display_tuple(&self) -> (String, String, String) {
        (
            self.label.clone(),
            format_hms(&self.start),
            format_hms(&self.end),
        )
    }
}

impl From<&WeekdayInterval> for ChartRow {
    fn from(record: &WeekdayInterval) -> Self {
        ChartRow::spanning(record.weekday.clone(), record.start, record.end)
    }
}

impl From<&MonthlyMean> for ChartRow {
    /// The bar starts at the assumed workday start and lasts `mean` seconds.
    fn from(record: &MonthlyMean) -> Self {
        ChartRow::spanning(
            record.name.clone(),
            WORKDAY_START_SECS,
            WORKDAY_START_SECS.saturating_add(record.mean),
        )
    }
}

/// Convert detail records into chart rows, one row per record, same order.
pub fn to_chart_rows<'a, T>(records: &'a [T]) -> Vec<ChartRow>
where
    ChartRow: From<&'a T>,
{
    records.iter().map(ChartRow::from).collect()
}

/// The two timeline flavours the dashboard draws.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TimelineKind {
    /// Mean start/end per weekday for one user
    WeekdayStartEnd,
    /// Mean presence of the top users of a month, from 09:00
    MonthlyTop,
}

/// Table layout handed to the charting library along with the rows.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineConfig {
    pub label_column: &'static str,
    pub start_column: &'static str,
    pub end_column: &'static str,
    pub time_pattern: &'static str,
    pub language: &'static str,
}

impl TimelineKind {
    pub fn config(&self) -> TimelineConfig {
        let label_column = match self {
            TimelineKind::WeekdayStartEnd => "Weekday",
            TimelineKind::MonthlyTop => "User",
        };
        TimelineConfig {
            label_column,
            start_column: "Start",
            end_column: "End",
            time_pattern: "HH:mm:ss",
            language: "pl",
        }
    }
}
