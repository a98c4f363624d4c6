//! Range-vector windows in Prometheus duration syntax.
//!
//! Formatting matches the Prometheus duration printer: units from years down
//! to milliseconds, years and weeks only used when they divide the value
//! exactly (`90d` rather than `12w6d`), and `0s` for an empty window.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: u64 = 24 * MILLIS_PER_HOUR;
const MILLIS_PER_WEEK: u64 = 7 * MILLIS_PER_DAY;
const MILLIS_PER_YEAR: u64 = 365 * MILLIS_PER_DAY;

/// Units in descending order: (suffix, milliseconds, only when exact)
const UNITS: &[(&str, u64, bool)] = &[
    ("y", MILLIS_PER_YEAR, true),
    ("w", MILLIS_PER_WEEK, true),
    ("d", MILLIS_PER_DAY, false),
    ("h", MILLIS_PER_HOUR, false),
    ("m", MILLIS_PER_MINUTE, false),
    ("s", MILLIS_PER_SECOND, false),
    ("ms", 1, false),
];

/// Errors that can occur while parsing a duration string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("empty duration string")]
    Empty,
    #[error("not a valid duration string: {0:?}")]
    Invalid(String),
    #[error("duration out of range: {0:?}")]
    Overflow(String),
}

/// A query window, millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PromDuration(Duration);

impl PromDuration {
    pub const fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    pub const fn from_secs(secs: u64) -> Self {
        Self(Duration::from_secs(secs))
    }

    pub const fn from_minutes(minutes: u64) -> Self {
        Self(Duration::from_secs(minutes * 60))
    }

    pub const fn as_duration(&self) -> Duration {
        self.0
    }
}

impl From<Duration> for PromDuration {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

impl From<PromDuration> for Duration {
    fn from(duration: PromDuration) -> Self {
        duration.0
    }
}

impl fmt::Display for PromDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ms = u64::try_from(self.0.as_millis()).unwrap_or(u64::MAX);
        if ms == 0 {
            return f.write_str("0s");
        }

        for &(suffix, mult, exact) in UNITS {
            if exact && ms % mult != 0 {
                continue;
            }
            let value = ms / mult;
            if value > 0 {
                write!(f, "{value}{suffix}")?;
                ms -= value * mult;
            }
        }

        Ok(())
    }
}

impl FromStr for PromDuration {
    type Err = DurationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DurationParseError::Empty);
        }
        // A bare zero is allowed without a unit.
        if s == "0" {
            return Ok(Self::default());
        }

        let invalid = || DurationParseError::Invalid(s.to_string());
        let overflow = || DurationParseError::Overflow(s.to_string());

        let mut rest = s;
        let mut next_unit = 0;
        let mut total: u64 = 0;

        while !rest.is_empty() {
            let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
            if digits == 0 {
                return Err(invalid());
            }
            let value: u64 = rest[..digits].parse().map_err(|_| overflow())?;
            rest = &rest[digits..];

            let letters = rest.bytes().take_while(u8::is_ascii_alphabetic).count();
            let suffix = &rest[..letters];
            rest = &rest[letters..];

            // Units must appear at most once, largest first.
            let position = UNITS[next_unit..]
                .iter()
                .position(|(unit, _, _)| *unit == suffix)
                .ok_or_else(invalid)?;
            let (_, mult, _) = UNITS[next_unit + position];
            next_unit += position + 1;

            let millis = value.checked_mul(mult).ok_or_else(overflow)?;
            total = total.checked_add(millis).ok_or_else(overflow)?;
        }

        Ok(Self::from_millis(total))
    }
}

impl Serialize for PromDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PromDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
