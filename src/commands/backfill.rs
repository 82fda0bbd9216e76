use crate::areas::git::VersionControl;
use crate::areas::repository::Repository;
use crate::artifacts::policy::{BackfillPolicy, Reporting};
use chrono::NaiveDate;
use colored::Colorize;
use derive_new::new;
use std::io::Write;

/// Counters accumulated over one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, new)]
pub struct BackfillReport {
    pub days: usize,
    pub attempted_commits: usize,
    pub successful_commits: usize,
}

impl<V: VersionControl> Repository<V> {
    /// Run the commit loop for every scheduled day up to `end`.
    ///
    /// A failed commit is reported and counted as missing; the loop always
    /// moves on to the next slot.
    pub async fn backfill(
        &self,
        policy: &BackfillPolicy,
        commits_per_day: u32,
        end: NaiveDate,
    ) -> anyhow::Result<BackfillReport> {
        let schedule = policy.schedule();
        let days = schedule.days(end);
        let mut report = BackfillReport::new(days.len(), 0, 0);

        for (day_index, date) in days.iter().enumerate() {
            match policy.reporting() {
                Reporting::PerCommit => {
                    writeln!(
                        self.writer(),
                        "\n{} {} ({})",
                        "Backfilling".cyan(),
                        date.format("%Y-%m-%d"),
                        date.format("%A")
                    )?;
                }
                Reporting::Periodic { every_days } => {
                    if every_days > 0 && day_index % every_days == 0 {
                        let progress = day_index as f64 / days.len() as f64 * 100.0;
                        writeln!(
                            self.writer(),
                            "{} {:.1}% - Processing {}",
                            "Progress:".cyan(),
                            progress,
                            date.format("%Y-%m-%d")
                        )?;
                    }
                }
            }

            for commit_num in 0..commits_per_day {
                let timestamp = schedule.timestamp(*date);

                if policy.reporting() == Reporting::PerCommit {
                    writeln!(
                        self.writer(),
                        "  Creating commit {}/{} for {}",
                        commit_num + 1,
                        commits_per_day,
                        timestamp.format("%H:%M")
                    )?;
                }

                report.attempted_commits += 1;
                if self
                    .create_backfill_commit(
                        policy.generator(),
                        timestamp,
                        policy.reporting() == Reporting::PerCommit,
                    )
                    .await?
                {
                    report.successful_commits += 1;
                }

                policy.pacing().pause().await;
            }
        }

        Ok(report)
    }
}
