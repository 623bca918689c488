//! Calendar decomposition of elapsed seconds.
//!
//! Two calendar conventions exist: the home world's short day (6 hours,
//! 426-day year) and the Earth-like convention (24 hours, 365-day year).
//! The mode decides how a raw seconds count splits into a year/day/clock
//! breakdown; everything downstream (duration text, date tokens, the `UT`
//! stamp) works from the resulting [`Clock`].

use serde::{Deserialize, Serialize};

/// Which year/day length convention to decompose seconds under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarMode {
    /// 6-hour days, 426-day years.
    Kerbin,
    /// 24-hour days, 365-day years.
    Earth,
}

impl CalendarMode {
    /// Seconds in one day under this calendar.
    pub fn seconds_per_day(self) -> u64 {
        match self {
            CalendarMode::Kerbin => 6 * 3600,
            CalendarMode::Earth => 24 * 3600,
        }
    }

    /// Seconds in one year under this calendar.
    pub fn seconds_per_year(self) -> u64 {
        match self {
            CalendarMode::Kerbin => 426 * self.seconds_per_day(),
            CalendarMode::Earth => 365 * self.seconds_per_day(),
        }
    }

    /// Default display base year for this calendar.
    pub fn default_base_year(self) -> i32 {
        match self {
            CalendarMode::Kerbin => 1,
            CalendarMode::Earth => 1940,
        }
    }
}

/// A calendar-decomposed time breakdown. `day` and `year` are zero-based;
/// presentation offsets are applied by the consumers, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Clock {
    pub second: u64,
    pub minute: u64,
    pub hour: u64,
    pub day: u64,
    pub year: u64,
}

impl Clock {
    /// Decomposes a seconds count under the given calendar. Negative or
    /// non-finite input clamps to zero.
    pub fn decompose(seconds: f64, mode: CalendarMode) -> Self {
        let total = if seconds.is_finite() && seconds > 0.0 {
            seconds as u64
        } else {
            0
        };

        let year = total / mode.seconds_per_year();
        let mut rest = total % mode.seconds_per_year();
        let day = rest / mode.seconds_per_day();
        rest %= mode.seconds_per_day();

        Self {
            second: rest % 60,
            minute: (rest / 60) % 60,
            hour: rest / 3600,
            day,
            year,
        }
    }
}
