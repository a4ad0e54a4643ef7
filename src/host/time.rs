//! Proxy time values (`<digits>[unit]`, milliseconds when the unit is omitted).

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unit suffix of a proxy time value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Micros,
    Millis,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Micros => "us",
            TimeUnit::Millis => "ms",
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "m",
            TimeUnit::Hours => "h",
            TimeUnit::Days => "d",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "us" => Some(TimeUnit::Micros),
            "ms" => Some(TimeUnit::Millis),
            "s" => Some(TimeUnit::Seconds),
            "m" => Some(TimeUnit::Minutes),
            "h" => Some(TimeUnit::Hours),
            "d" => Some(TimeUnit::Days),
            _ => None,
        }
    }
}

/// Errors produced while parsing a time value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("empty time value")]
    Empty,

    #[error("missing numeric amount in '{0}'")]
    MissingAmount(String),

    #[error("amount out of range in '{0}'")]
    OutOfRange(String),

    #[error("unknown time unit '{unit}' in '{value}'")]
    UnknownUnit { value: String, unit: String },
}

/// A validated time value as rendered into the proxy configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProxyTime {
    pub amount: u64,
    pub unit: TimeUnit,
}

impl ProxyTime {
    pub fn new(amount: u64, unit: TimeUnit) -> Self {
        Self { amount, unit }
    }

    /// Equivalent duration, saturating on overflow.
    pub fn as_duration(&self) -> Duration {
        let micros_per_unit: u64 = match self.unit {
            TimeUnit::Micros => 1,
            TimeUnit::Millis => 1_000,
            TimeUnit::Seconds => 1_000_000,
            TimeUnit::Minutes => 60 * 1_000_000,
            TimeUnit::Hours => 3_600 * 1_000_000,
            TimeUnit::Days => 86_400 * 1_000_000,
        };
        Duration::from_micros(self.amount.saturating_mul(micros_per_unit))
    }
}

impl FromStr for ProxyTime {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(TimeParseError::Empty);
        }
        let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let (digits, suffix) = s.split_at(split);
        if digits.is_empty() {
            return Err(TimeParseError::MissingAmount(s.to_string()));
        }
        let unit = if suffix.is_empty() {
            TimeUnit::Millis
        } else {
            TimeUnit::from_suffix(suffix).ok_or_else(|| TimeParseError::UnknownUnit {
                value: s.to_string(),
                unit: suffix.to_string(),
            })?
        };
        let amount = digits
            .parse::<u64>()
            .map_err(|_| TimeParseError::OutOfRange(s.to_string()))?;
        Ok(Self { amount, unit })
    }
}

impl TryFrom<String> for ProxyTime {
    type Error = TimeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProxyTime> for String {
    fn from(time: ProxyTime) -> Self {
        time.to_string()
    }
}

impl fmt::Display for ProxyTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.unit.suffix())
    }
}
