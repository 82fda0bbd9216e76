//! Interactive backfill session
//!
//! Drives one run through its states: configuring (prompts for the values not
//! given up front), confirmation, running the commit loop and the final push.
//! Anything but an explicit `yes` cancels before a single file is touched.

use crate::areas::git::VersionControl;
use crate::areas::repository::Repository;
use crate::artifacts::pacing::Pacing;
use crate::artifacts::policy::{
    BackfillPolicy, DEFAULT_COMMITS_PER_DAY, DEFAULT_DAYS_BACK, Variant,
    YEAR_MAX_COMMITS_PER_DAY,
};
use crate::artifacts::remote::PushTarget;
use crate::artifacts::schedule::Weekdays;
use crate::commands::backfill::BackfillReport;
use crate::commands::prompt::Prompter;
use chrono::NaiveDate;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Everything known about a run before the operator is asked anything.
#[derive(Debug, Clone)]
pub struct BackfillRequest {
    pub variant: Variant,
    pub days_back: Option<u32>,
    pub commits_per_day: Option<u32>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub skip: Option<Weekdays>,
    pub pacing: Option<Pacing>,
    pub push: Option<PushTarget>,
    pub token_detected: bool,
}

impl BackfillRequest {
    pub fn new(variant: Variant, start: NaiveDate, end: NaiveDate) -> Self {
        BackfillRequest {
            variant,
            days_back: None,
            commits_per_day: None,
            start,
            end,
            skip: None,
            pacing: None,
            push: Some(PushTarget::default()),
            token_detected: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Cancelled,
    Completed {
        report: BackfillReport,
        pushed: Option<bool>,
    },
}

/// Resolved configuration, ready to run.
#[derive(Debug, Clone, Copy)]
struct Plan {
    policy: BackfillPolicy,
    days: u64,
    commits_per_day: u32,
}

impl<V: VersionControl> Repository<V> {
    pub async fn run_session<R: BufRead>(
        &self,
        request: &BackfillRequest,
        prompter: &mut Prompter<R>,
    ) -> anyhow::Result<SessionOutcome> {
        let plan = self.configure(request, prompter)?;

        if !self.confirm(request, &plan, prompter)? {
            let label = match plan.policy.variant() {
                Variant::Recent => "Backfill cancelled",
                Variant::Year => "Year backfill cancelled",
            };
            writeln!(self.writer(), "{}", label.red())?;
            return Ok(SessionOutcome::Cancelled);
        }

        self.announce_start(request, &plan)?;
        let report = self
            .backfill(&plan.policy, plan.commits_per_day, request.end)
            .await?;
        self.announce_completion(request, &report)?;

        let pushed = match &request.push {
            Some(target) => Some(self.push_backfill(target).await?),
            None => None,
        };

        Ok(SessionOutcome::Completed { report, pushed })
    }

    fn configure<R: BufRead>(
        &self,
        request: &BackfillRequest,
        prompter: &mut Prompter<R>,
    ) -> anyhow::Result<Plan> {
        let mut writer = self.writer();

        let (mut policy, days_back, commits_per_day) = match request.variant {
            Variant::Recent => {
                let days_back = match request.days_back {
                    Some(days_back) => days_back,
                    None => prompter.ask_count(
                        &mut **writer,
                        "How many days back to fill? (default 30): ",
                        DEFAULT_DAYS_BACK,
                    )?,
                };
                let commits_per_day = match request.commits_per_day {
                    Some(commits_per_day) => commits_per_day,
                    None => prompter.ask_count(
                        &mut **writer,
                        "Commits per day? (default 2): ",
                        DEFAULT_COMMITS_PER_DAY,
                    )?,
                };
                (BackfillPolicy::recent(days_back)?, Some(days_back), commits_per_day)
            }
            Variant::Year => {
                let commits_per_day = match request.commits_per_day {
                    Some(commits_per_day) => commits_per_day,
                    None => prompter.ask_count(
                        &mut **writer,
                        &format!(
                            "Commits per day? (default {DEFAULT_COMMITS_PER_DAY}, max {YEAR_MAX_COMMITS_PER_DAY}): "
                        ),
                        DEFAULT_COMMITS_PER_DAY,
                    )?,
                };
                (BackfillPolicy::year(request.start)?, None, commits_per_day)
            }
        };

        if let Some(skip) = request.skip {
            policy = policy.with_skip(skip);
        }
        if let Some(pacing) = request.pacing {
            policy = policy.with_pacing(pacing);
        }

        // the bounded variant reports the requested span, skipped days included
        let days = match days_back {
            Some(days_back) => u64::from(days_back),
            None => policy.schedule().days(request.end).len() as u64,
        };

        Ok(Plan {
            commits_per_day: policy.clamp_commits_per_day(commits_per_day),
            policy,
            days,
        })
    }

    fn confirm<R: BufRead>(
        &self,
        request: &BackfillRequest,
        plan: &Plan,
        prompter: &mut Prompter<R>,
    ) -> anyhow::Result<bool> {
        let mut writer = self.writer();
        let total_commits = plan.days * u64::from(plan.commits_per_day);

        let question = match request.variant {
            Variant::Recent => {
                writeln!(
                    writer,
                    "\n{} This will create {} commits with past dates",
                    "WARNING:".yellow(),
                    total_commits
                )?;
                "Are you sure you want to continue? (yes/no): "
            }
            Variant::Year => {
                writeln!(
                    writer,
                    "\n{} This will create {} commits for the entire range!",
                    "WARNING:".yellow(),
                    total_commits
                )?;
                writeln!(writer, "From: {}", request.start)?;
                writeln!(writer, "To: {}", request.end)?;
                writeln!(writer, "Days: {}", plan.days)?;
                writeln!(writer, "Commits: {}", total_commits)?;
                "\nAre you sure you want to backfill the ENTIRE range? (yes/no): "
            }
        };

        if request.token_detected {
            writeln!(
                writer,
                "GITHUB_TOKEN detected; the push relies on git's configured credentials"
            )?;
        }

        prompter.confirm(&mut **writer, question)
    }

    fn announce_start(&self, request: &BackfillRequest, plan: &Plan) -> anyhow::Result<()> {
        let mut writer = self.writer();

        match request.variant {
            Variant::Recent => {
                writeln!(
                    writer,
                    "{} {} days with {} commits per day",
                    "Starting backfill for".cyan(),
                    plan.days,
                    plan.commits_per_day
                )?;
                writeln!(writer, "{}", "=".repeat(60))?;
            }
            Variant::Year => {
                writeln!(
                    writer,
                    "{} with {} commits per day",
                    "Starting YEAR BACKFILL".cyan(),
                    plan.commits_per_day
                )?;
                writeln!(writer, "{}", "=".repeat(70))?;
                writeln!(writer, "Backfilling from {} to {}", request.start, request.end)?;
                writeln!(writer, "Total days: {}", plan.days)?;
                writeln!(
                    writer,
                    "Estimated commits: {}\n",
                    plan.days * u64::from(plan.commits_per_day)
                )?;
            }
        }

        Ok(())
    }

    fn announce_completion(
        &self,
        request: &BackfillRequest,
        report: &BackfillReport,
    ) -> anyhow::Result<()> {
        let mut writer = self.writer();

        match request.variant {
            Variant::Recent => {
                writeln!(
                    writer,
                    "\n{} Created {} commits",
                    "Backfill completed!".green(),
                    report.successful_commits
                )?;
            }
            Variant::Year => {
                writeln!(writer, "\n{}", "YEAR BACKFILL COMPLETED!".green())?;
                writeln!(writer, "Created {} commits", report.successful_commits)?;
                writeln!(writer, "Covered {} days", report.days)?;
            }
        }

        Ok(())
    }
}
