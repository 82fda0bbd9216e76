//! Backfill scheduling
//!
//! A schedule decides which calendar days receive commits and at which time of
//! day each commit is stamped:
//!
//! - `DateRange`: the span of days, either trailing back from the end date or
//!   running forward from a fixed start date
//! - `Weekdays`: days of the week to leave empty
//! - `HourWindow`: the inclusive hour range a commit time is drawn from

pub mod weekdays;

use chrono::{Days, NaiveDate, NaiveDateTime};
use derive_new::new;
use fake::rand;
use fake::rand::Rng;
pub use weekdays::Weekdays;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    /// `end - 1`, `end - 2`, ..., `end - days_back`. The end date itself is
    /// never included.
    Trailing { days_back: u32 },
    /// Every day from `start` to the end date, both inclusive.
    Since { start: NaiveDate },
}

impl DateRange {
    pub fn days(&self, end: NaiveDate) -> Vec<NaiveDate> {
        match self {
            DateRange::Trailing { days_back } => (1..=u64::from(*days_back))
                .map_while(|offset| end.checked_sub_days(Days::new(offset)))
                .collect(),
            DateRange::Since { start } => start
                .iter_days()
                .take_while(|date| date <= &end)
                .collect(),
        }
    }
}

/// Inclusive hour range, minutes are always drawn from the whole hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourWindow {
    first_hour: u32,
    last_hour: u32,
}

impl HourWindow {
    pub fn try_new(first_hour: u32, last_hour: u32) -> anyhow::Result<Self> {
        if first_hour > last_hour || last_hour > 23 {
            anyhow::bail!("invalid hour window: {first_hour}..={last_hour}");
        }

        Ok(HourWindow {
            first_hour,
            last_hour,
        })
    }

    pub fn contains(&self, timestamp: &NaiveDateTime) -> bool {
        use chrono::Timelike;

        (self.first_hour..=self.last_hour).contains(&timestamp.hour()) && timestamp.second() == 0
    }

    pub fn pick<R: Rng>(&self, rng: &mut R, date: NaiveDate) -> NaiveDateTime {
        let hour = rng.random_range(self.first_hour..=self.last_hour);
        let minute = rng.random_range(0..=59);

        // in range by construction
        date.and_hms_opt(hour, minute, 0)
            .unwrap_or_else(|| date.and_time(chrono::NaiveTime::MIN))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Schedule {
    range: DateRange,
    skip: Weekdays,
    window: HourWindow,
}

impl Schedule {
    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn skip(&self) -> Weekdays {
        self.skip
    }

    pub fn window(&self) -> HourWindow {
        self.window
    }

    /// Days that receive commits, in processing order.
    pub fn days(&self, end: NaiveDate) -> Vec<NaiveDate> {
        self.range
            .days(end)
            .into_iter()
            .filter(|date| !self.skip.contains_date(*date))
            .collect()
    }

    pub fn timestamp(&self, date: NaiveDate) -> NaiveDateTime {
        self.window.pick(&mut rand::rng(), date)
    }
}
