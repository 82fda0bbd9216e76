use crate::common::command::{git_log, run_backfill_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::skip_days(&["recent", "--skip-days", "XYZ"], "invalid weekday letters")]
#[case::end_date(&["recent", "--end-date", "2025-13-01"], "--end-date")]
#[case::branch(&["recent", "--branch", "bad..name"], "--branch")]
#[case::unknown_variant(&["decade"], "unrecognized subcommand")]
fn invalid_arguments_are_rejected(
    #[from(crate::common::command::init_repository_dir)] init_repository_dir: TempDir,
    #[case] args: &[&str],
    #[case] message: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_backfill_command(dir, args)
        .write_stdin("yes\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains(message));

    assert_eq!(git_log(dir, "%H")?, Vec::<String>::new());

    Ok(())
}

#[rstest]
fn missing_working_copy_is_a_startup_error(
    #[from(crate::common::command::repository_dir)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let missing = repository_dir.path().join("does-not-exist");

    run_backfill_command(
        repository_dir.path(),
        &["recent", "--repo", &missing.to_string_lossy()],
    )
    .write_stdin("1\n1\nyes\n")
    .assert()
    .failure()
    .stdout(predicate::str::contains("How many days back").not());

    Ok(())
}
