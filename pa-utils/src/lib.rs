//! Shared utility functions for presence analyzer crates.

/// Time-of-day helpers for second counts coming from the presence API.
pub mod intervals {
    use chrono::{NaiveTime, Timelike};

    pub const SECONDS_PER_DAY: i64 = 86_400;

    /// Assumed start of a workday (09:00:00), used by the monthly timeline.
    pub const WORKDAY_START_SECS: i64 = 32_400;

    /// Convert a count of seconds since midnight into a time of day.
    ///
    /// Every integer is accepted. Values outside `0..86400` wrap around the
    /// day, so `-1` is `23:59:59` and `86400` is `00:00:00`.
    pub fn parse_interval(seconds: i64) -> NaiveTime {
        let wrapped = seconds.rem_euclid(SECONDS_PER_DAY) as u32;
        NaiveTime::from_num_seconds_from_midnight_opt(wrapped, 0).unwrap_or_default()
    }

    /// Truncate a JSON number of seconds (possibly fractional) to whole seconds.
    /// Non-finite values map to 0.
    pub fn whole_seconds(value: f64) -> i64 {
        if value.is_finite() {
            value.floor() as i64
        } else {
            0
        }
    }

    /// Seconds elapsed since midnight for a time of day.
    pub fn seconds_since_midnight(time: &NaiveTime) -> i64 {
        i64::from(time.num_seconds_from_midnight())
    }

    /// Format a time of day as "HH:MM:SS"
    pub fn format_hms(time: &NaiveTime) -> String {
        time.format("%H:%M:%S").to_string()
    }

    /// Format a duration in seconds as "HH:MM:SS" without wrapping at 24h.
    /// Negative durations get a leading '-'.
    pub fn format_duration(seconds: i64) -> String {
        let sign = if seconds < 0 { "-" } else { "" };
        let total = seconds.unsigned_abs();
        format!(
            "{}{:02}:{:02}:{:02}",
            sign,
            total / 3600,
            (total % 3600) / 60,
            total % 60
        )
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_interval_examples() {
            assert_eq!(format_hms(&parse_interval(32400)), "09:00:00");
            assert_eq!(format_hms(&parse_interval(0)), "00:00:00");
            assert_eq!(format_hms(&parse_interval(86399)), "23:59:59");
            assert_eq!(format_hms(&parse_interval(3723)), "01:02:03");
        }

        #[test]
        fn test_parse_interval_wraps() {
            assert_eq!(format_hms(&parse_interval(86400)), "00:00:00");
            assert_eq!(format_hms(&parse_interval(90000)), "01:00:00");
            assert_eq!(format_hms(&parse_interval(-1)), "23:59:59");
            assert_eq!(format_hms(&parse_interval(-86400)), "00:00:00");
        }

        #[test]
        fn test_parse_interval_matches_modulo() {
            for s in (0..400_000i64).step_by(997) {
                let time = parse_interval(s);
                assert_eq!(seconds_since_midnight(&time), s % SECONDS_PER_DAY);
            }
            let time = parse_interval(i64::MAX);
            assert_eq!(seconds_since_midnight(&time), i64::MAX % SECONDS_PER_DAY);
        }

        #[test]
        fn test_whole_seconds() {
            assert_eq!(whole_seconds(34745.0), 34745);
            assert_eq!(whole_seconds(30047.9), 30047);
            assert_eq!(whole_seconds(-0.5), -1);
            assert_eq!(whole_seconds(f64::NAN), 0);
        }

        #[test]
        fn test_format_duration() {
            assert_eq!(format_duration(0), "00:00:00");
            assert_eq!(format_duration(30047), "08:20:47");
            assert_eq!(format_duration(90061), "25:01:01");
            assert_eq!(format_duration(-3720), "-01:02:00");
        }
    }
}

/// Error types
pub mod error {
    use std::fmt;

    /// Why a request against the presence API did not produce usable data.
    #[derive(Debug, Clone, PartialEq)]
    pub enum FetchError {
        /// The request never produced a response
        Network(String),
        /// The server answered with a non-success status
        Status(u16),
        /// The body could not be decoded into the expected shape
        Decode(String),
    }

    impl fmt::Display for FetchError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                FetchError::Network(msg) => write!(f, "Network error: {}", msg),
                FetchError::Status(code) => write!(f, "Bad response status: {}", code),
                FetchError::Decode(msg) => write!(f, "Decode error: {}", msg),
            }
        }
    }

    impl std::error::Error for FetchError {}

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_display() {
            assert_eq!(FetchError::Status(404).to_string(), "Bad response status: 404");
            assert_eq!(
                FetchError::Network("connection refused".to_string()).to_string(),
                "Network error: connection refused"
            );
        }
    }
}
