use crate::common::command::{git_log, run_backfill_command};
use crate::common::file::{list_workspace_files, write_rejecting_hook};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[cfg(unix)]
#[rstest]
fn failing_commit_hook_keeps_counter_at_zero(
    #[from(crate::common::command::init_repository_dir)] init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_rejecting_hook(dir, "pre-commit");

    let output = run_backfill_command(
        dir,
        &[
            "recent",
            "--days",
            "1",
            "--commits-per-day",
            "2",
            "--end-date",
            "2025-03-13",
            "--no-push",
        ],
    )
    .write_stdin("yes\n")
    .assert()
    .success()
    .stdout(predicate::str::contains("Created 0 commits"))
    .stdout(predicate::str::contains("Pushing").not())
    .get_output()
    .stdout
    .clone();

    let stdout = String::from_utf8(output)?;
    assert_eq!(stdout.matches("Error creating backfill commit").count(), 2);
    assert!(stdout.contains("rejected by test hook"));

    assert_eq!(git_log(dir, "%H")?, Vec::<String>::new());
    // the edits were written before the hook refused them
    assert!(!list_workspace_files(dir).is_empty());

    Ok(())
}
