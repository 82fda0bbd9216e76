use crate::areas::git::{GitCommandError, VersionControl};
use crate::areas::repository::Repository;
use crate::artifacts::content::ContentGenerator;
use chrono::NaiveDateTime;
use colored::Colorize;
use std::io::Write;

impl<V: VersionControl> Repository<V> {
    /// Generate a change for `timestamp`, write it, stage it and commit it
    /// with forged author/committer dates.
    ///
    /// Returns the commit message on success. Nothing written or staged is
    /// rolled back when a later step fails.
    pub async fn backfill_commit(
        &self,
        generator: &ContentGenerator,
        timestamp: NaiveDateTime,
    ) -> anyhow::Result<String> {
        let change = generator.generate(timestamp);

        self.workspace()
            .write_file(&change.file_path, &change.content)?;
        self.vcs().stage(&change.file_path).await?;

        let message = change.commit_message(timestamp);
        self.vcs().commit_at(&message, timestamp).await?;

        Ok(message)
    }

    /// Same as [`Repository::backfill_commit`], but every failure is reported
    /// on the writer and turned into `false`.
    pub async fn create_backfill_commit(
        &self,
        generator: &ContentGenerator,
        timestamp: NaiveDateTime,
        announce: bool,
    ) -> anyhow::Result<bool> {
        match self.backfill_commit(generator, timestamp).await {
            Ok(message) => {
                if announce {
                    writeln!(
                        self.writer(),
                        "  {} {}",
                        "Created backfill commit:".green(),
                        message
                    )?;
                }
                Ok(true)
            }
            Err(e) if e.downcast_ref::<GitCommandError>().is_some() => {
                writeln!(
                    self.writer(),
                    "  {} {}",
                    "Error creating backfill commit:".red(),
                    e
                )?;
                Ok(false)
            }
            Err(e) => {
                writeln!(self.writer(), "  {} {:#}", "Unexpected error:".red(), e)?;
                Ok(false)
            }
        }
    }
}
