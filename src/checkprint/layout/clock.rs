use chrono::{Local, NaiveDateTime};

use crate::error::{CheckprintError, Result};

/// Format used for the `Printed:` line and for parsing pinned timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Source of the current local wall-clock time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the local time of the machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Parses `YYYY-MM-DD HH:MM`.
    pub fn parse(value: &str) -> Result<Self> {
        NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT)
            .map(FixedClock)
            .map_err(|e| {
                CheckprintError::InvalidArgument(format!(
                    "Invalid timestamp '{}' (expected YYYY-MM-DD HH:MM): {}",
                    value, e
                ))
            })
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pinned_timestamp() {
        let clock = FixedClock::parse("2024-03-09 07:05").unwrap();
        assert_eq!(
            clock.now().format(TIMESTAMP_FORMAT).to_string(),
            "2024-03-09 07:05"
        );
    }

    #[test]
    fn rejects_malformed_timestamp() {
        let err = FixedClock::parse("yesterday").unwrap_err();
        assert!(matches!(err, CheckprintError::InvalidArgument(_)));
    }

    #[test]
    fn fixed_clock_is_stable() {
        let clock = FixedClock::parse("2024-01-01 00:00").unwrap();
        assert_eq!(clock.now(), clock.now());
    }
}
