//! Version-control collaborator
//!
//! The backfill never reimplements git; it shells out to the git binary for
//! the three operations it needs. `VersionControl` is the seam the driver is
//! written against so tests can substitute a recording double.

use crate::artifacts::remote::PushTarget;
use anyhow::Context;
use chrono::NaiveDateTime;
use std::path::Path;
use std::process::ExitStatus;

pub const GIT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DEFAULT_GIT_PROGRAM: &str = "git";

pub trait VersionControl {
    /// Stage a single file, given relative to the working copy.
    fn stage(&self, file_path: &Path) -> impl Future<Output = anyhow::Result<()>>;

    /// Commit the index with author and committer dates forced to `timestamp`.
    fn commit_at(
        &self,
        message: &str,
        timestamp: NaiveDateTime,
    ) -> impl Future<Output = anyhow::Result<()>>;

    fn push(&self, target: &PushTarget) -> impl Future<Output = anyhow::Result<()>>;
}

/// A git invocation that ran but exited non-zero.
#[derive(Debug)]
pub struct GitCommandError {
    args: Vec<String>,
    status: ExitStatus,
    stderr: String,
}

impl std::fmt::Display for GitCommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Command 'git {}' returned non-zero exit status {}",
            self.args.join(" "),
            self.status.code().map_or("unknown".to_string(), |c| c.to_string())
        )?;

        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            write!(f, ": {stderr}")?;
        }

        Ok(())
    }
}

impl std::error::Error for GitCommandError {}

/// Runs the git binary inside the working copy.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    work_dir: Box<Path>,
}

impl GitCli {
    pub fn new(program: impl Into<String>, work_dir: Box<Path>) -> Self {
        GitCli {
            program: program.into(),
            work_dir,
        }
    }

    async fn run(&self, args: &[&str], envs: &[(&str, String)]) -> anyhow::Result<()> {
        let output = tokio::process::Command::new(&self.program)
            .args(args)
            .envs(envs.iter().map(|(key, value)| (*key, value.as_str())))
            .current_dir(&self.work_dir)
            .stdin(std::process::Stdio::null())
            .output()
            .await
            .with_context(|| format!("Failed to run {}", self.program))?;

        if output.status.success() {
            Ok(())
        } else {
            Err(GitCommandError {
                args: args.iter().map(|arg| arg.to_string()).collect(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            }
            .into())
        }
    }
}

impl VersionControl for GitCli {
    async fn stage(&self, file_path: &Path) -> anyhow::Result<()> {
        let file_path = file_path.to_string_lossy();
        self.run(&["add", file_path.as_ref()], &[]).await?;

        Ok(())
    }

    async fn commit_at(&self, message: &str, timestamp: NaiveDateTime) -> anyhow::Result<()> {
        let date = timestamp.format(GIT_DATE_FORMAT).to_string();
        self.run(
            &["commit", "-m", message],
            &[
                ("GIT_AUTHOR_DATE", date.clone()),
                ("GIT_COMMITTER_DATE", date),
            ],
        )
        .await?;

        Ok(())
    }

    async fn push(&self, target: &PushTarget) -> anyhow::Result<()> {
        self.run(&["push", target.remote(), target.branch().as_ref()], &[])
            .await?;

        Ok(())
    }
}
