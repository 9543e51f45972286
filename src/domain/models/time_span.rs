use chrono::Duration;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const NANOS_PER_TICK: i64 = 100;

static TIME_SPAN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(\d+)\.)?(\d{1,2}):(\d{1,2}):(\d{1,2})(?:\.(\d{1,7}))?$").expect("valid regex")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeSpanError {
    #[error("Malformed time span: {0:?}")]
    Malformed(String),
    #[error("Time span component out of range: {0:?}")]
    OutOfRange(String),
}

/// Non-negative duration exchanged as `[d.]hh:mm:ss[.fffffff]` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSpan(Duration);

impl TimeSpan {
    pub fn new(duration: Duration) -> Option<Self> {
        if duration < Duration::zero() {
            None
        } else {
            Some(Self(duration))
        }
    }

    pub fn from_parts(days: i64, hours: i64, minutes: i64, seconds: i64) -> Option<Self> {
        let total = Duration::try_days(days)?
            .checked_add(&Duration::try_hours(hours)?)?
            .checked_add(&Duration::try_minutes(minutes)?)?
            .checked_add(&Duration::try_seconds(seconds)?)?;
        Self::new(total)
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

impl FromStr for TimeSpan {
    type Err = TimeSpanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = TIME_SPAN_PATTERN
            .captures(s.trim())
            .ok_or_else(|| TimeSpanError::Malformed(s.to_string()))?;

        let out_of_range = || TimeSpanError::OutOfRange(s.to_string());
        let component = |idx: usize| -> Result<i64, TimeSpanError> {
            match caps.get(idx) {
                Some(m) => m.as_str().parse::<i64>().map_err(|_| out_of_range()),
                None => Ok(0),
            }
        };

        let days = component(1)?;
        let hours = component(2)?;
        let minutes = component(3)?;
        let seconds = component(4)?;

        if hours > 23 || minutes > 59 || seconds > 59 {
            return Err(out_of_range());
        }

        // Fraction digits are a fraction of a second, padded to 100ns ticks.
        let ticks = match caps.get(5) {
            Some(m) => {
                let digits = m.as_str();
                let padded = format!("{:0<7}", digits);
                padded.parse::<i64>().map_err(|_| out_of_range())?
            }
            None => 0,
        };

        let whole = Self::from_parts(days, hours, minutes, seconds).ok_or_else(out_of_range)?;
        let total = whole
            .0
            .checked_add(&Duration::nanoseconds(ticks * NANOS_PER_TICK))
            .ok_or_else(out_of_range)?;

        Ok(Self(total))
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_seconds = self.0.num_seconds();
        let days = total_seconds / 86_400;
        let hours = (total_seconds % 86_400) / 3_600;
        let minutes = (total_seconds % 3_600) / 60;
        let seconds = total_seconds % 60;
        let ticks = i64::from(self.0.subsec_nanos()) / NANOS_PER_TICK;

        if days > 0 {
            write!(f, "{}.", days)?;
        }
        write!(f, "{:02}:{:02}:{:02}", hours, minutes, seconds)?;
        if ticks > 0 {
            write!(f, ".{:07}", ticks)?;
        }
        Ok(())
    }
}

impl Serialize for TimeSpan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeSpan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_all_components() {
        let span: TimeSpan = "1.02:03:04".parse().unwrap();
        let expected = Duration::days(1) + Duration::hours(2) + Duration::minutes(3) + Duration::seconds(4);
        assert_eq!(span.as_duration(), expected);
    }

    #[test]
    fn test_days_and_fraction_are_optional() {
        let span: TimeSpan = "02:03:04".parse().unwrap();
        assert_eq!(span.as_duration(), Duration::seconds(2 * 3600 + 3 * 60 + 4));

        let span: TimeSpan = "00:00:01.5".parse().unwrap();
        assert_eq!(span.as_duration(), Duration::milliseconds(1500));

        let span: TimeSpan = "00:00:00.123".parse().unwrap();
        assert_eq!(span.as_duration(), Duration::milliseconds(123));
    }

    #[test]
    fn test_rejects_malformed_text() {
        assert!(matches!("not-a-span".parse::<TimeSpan>(), Err(TimeSpanError::Malformed(_))));
        assert!(matches!("-01:00:00".parse::<TimeSpan>(), Err(TimeSpanError::Malformed(_))));
        assert!(matches!("01:00".parse::<TimeSpan>(), Err(TimeSpanError::Malformed(_))));
        assert!(matches!("".parse::<TimeSpan>(), Err(TimeSpanError::Malformed(_))));
    }

    #[test]
    fn test_rejects_out_of_range_components() {
        assert!(matches!("24:00:00".parse::<TimeSpan>(), Err(TimeSpanError::OutOfRange(_))));
        assert!(matches!("00:60:00".parse::<TimeSpan>(), Err(TimeSpanError::OutOfRange(_))));
        assert!(matches!("99999999999999999999.00:00:00".parse::<TimeSpan>(), Err(TimeSpanError::OutOfRange(_))));
    }

    #[test]
    fn test_display_uses_canonical_form() {
        let span: TimeSpan = "1.2:3:4".parse().unwrap();
        assert_eq!(span.to_string(), "1.02:03:04");

        let span: TimeSpan = "00:30:00.25".parse().unwrap();
        assert_eq!(span.to_string(), "00:30:00.2500000");
    }

    #[test]
    fn test_serializes_as_string() {
        let span: TimeSpan = "01:30:00".parse().unwrap();
        assert_eq!(serde_json::to_string(&span).unwrap(), "\"01:30:00\"");

        let back: TimeSpan = serde_json::from_str("\"01:30:00\"").unwrap();
        assert_eq!(back, span);

        assert!(serde_json::from_str::<TimeSpan>("\"garbage\"").is_err());
    }

    #[test]
    fn test_negative_durations_are_not_spans() {
        assert!(TimeSpan::new(Duration::seconds(-1)).is_none());
        assert!(TimeSpan::new(Duration::zero()).is_some());
    }
}
