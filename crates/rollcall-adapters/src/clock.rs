//! Clock adapters.

use chrono::{Local, NaiveDateTime};

use rollcall_core::application::ports::Clock;

/// Production clock: reads the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Test clock pinned to a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: NaiveDateTime,
}

impl FixedClock {
    /// Pin the clock to the given instant.
    pub const fn at(instant: NaiveDateTime) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.instant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn fixed_clock_always_returns_its_instant() {
        let instant = NaiveDate::from_ymd_opt(2026, 8, 27)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let clock = FixedClock::at(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
    }
}
