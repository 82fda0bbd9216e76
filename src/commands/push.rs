use crate::areas::git::VersionControl;
use crate::areas::repository::Repository;
use crate::artifacts::remote::PushTarget;
use colored::Colorize;
use std::io::Write;

impl<V: VersionControl> Repository<V> {
    /// Push once; a failure leaves the local commits in place and tells the
    /// operator how to push by hand.
    pub async fn push_backfill(&self, target: &PushTarget) -> anyhow::Result<bool> {
        writeln!(
            self.writer(),
            "\n{} {}/{}...",
            "Pushing all commits to".cyan(),
            target.remote(),
            target.branch()
        )?;

        match self.vcs().push(target).await {
            Ok(()) => {
                writeln!(self.writer(), "{}", "All commits pushed successfully!".green())?;
                Ok(true)
            }
            Err(e) => {
                writeln!(self.writer(), "{} {}", "Error pushing commits:".red(), e)?;
                writeln!(
                    self.writer(),
                    "You may need to push manually: git push {} {}",
                    target.remote(),
                    target.branch()
                )?;
                Ok(false)
            }
        }
    }
}
