//! Backfill policies
//!
//! The bounded and year backfills differ only in the values collected here.
//! Presets build the two stock policies; the `with_*` methods override single
//! knobs on top of a preset.

use crate::artifacts::category::CategorySet;
use crate::artifacts::content::ContentGenerator;
use crate::artifacts::pacing::Pacing;
use crate::artifacts::schedule::{DateRange, HourWindow, Schedule, Weekdays};
use chrono::NaiveDate;
use std::time::Duration;

pub const DEFAULT_DAYS_BACK: u32 = 30;
pub const DEFAULT_COMMITS_PER_DAY: u32 = 2;
pub const YEAR_MAX_COMMITS_PER_DAY: u32 = 5;
pub const PROGRESS_EVERY_DAYS: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Recent,
    Year,
}

/// How much the driver prints while running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reporting {
    /// A header per day and a line per commit.
    PerCommit,
    /// A progress line every `every_days` days, failures only otherwise.
    Periodic { every_days: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackfillPolicy {
    variant: Variant,
    schedule: Schedule,
    generator: ContentGenerator,
    pacing: Pacing,
    reporting: Reporting,
    max_commits_per_day: Option<u32>,
}

impl BackfillPolicy {
    /// Weekdays only, 09:00-22:59, 2s between commits.
    pub fn recent(days_back: u32) -> anyhow::Result<Self> {
        Ok(BackfillPolicy {
            variant: Variant::Recent,
            schedule: Schedule::new(
                DateRange::Trailing { days_back },
                Weekdays::WEEKEND,
                HourWindow::try_new(9, 22)?,
            ),
            generator: ContentGenerator::new(CategorySet::Core, 4),
            pacing: Pacing::new(Duration::from_secs(2)),
            reporting: Reporting::PerCommit,
            max_commits_per_day: None,
        })
    }

    /// Every day since `start`, 08:00-23:59, 0.5s between commits.
    pub fn year(start: NaiveDate) -> anyhow::Result<Self> {
        Ok(BackfillPolicy {
            variant: Variant::Year,
            schedule: Schedule::new(
                DateRange::Since { start },
                Weekdays::empty(),
                HourWindow::try_new(8, 23)?,
            ),
            generator: ContentGenerator::new(CategorySet::Extended, 5),
            pacing: Pacing::from_millis(500),
            reporting: Reporting::Periodic {
                every_days: PROGRESS_EVERY_DAYS,
            },
            max_commits_per_day: Some(YEAR_MAX_COMMITS_PER_DAY),
        })
    }

    pub fn with_skip(mut self, skip: Weekdays) -> Self {
        self.schedule = Schedule::new(self.schedule.range(), skip, self.schedule.window());
        self
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn generator(&self) -> &ContentGenerator {
        &self.generator
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    pub fn reporting(&self) -> Reporting {
        self.reporting
    }

    pub fn clamp_commits_per_day(&self, requested: u32) -> u32 {
        match self.max_commits_per_day {
            Some(max) => requested.min(max),
            None => requested,
        }
    }
}
