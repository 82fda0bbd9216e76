use crate::common::command::{git_log, run_backfill_command};
use assert_fs::TempDir;
use chrono::NaiveDateTime;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn every_day_in_range_gets_a_commit(
    #[from(crate::common::command::init_repository_dir)] init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    // the range spans a weekend, which the year variant keeps
    run_backfill_command(
        dir,
        &[
            "year",
            "--start",
            "2025-02-26",
            "--end-date",
            "2025-03-02",
            "--commits-per-day",
            "1",
            "--no-push",
        ],
    )
    .write_stdin("yes\n")
    .assert()
    .success()
    .stdout(predicate::str::contains("From: 2025-02-26"))
    .stdout(predicate::str::contains("To: 2025-03-02"))
    .stdout(predicate::str::contains("Days: 5"))
    .stdout(predicate::str::contains("YEAR BACKFILL COMPLETED!"))
    .stdout(predicate::str::contains("Created 5 commits"));

    let mut timestamps = git_log(dir, "%ad")?
        .iter()
        .map(|line| NaiveDateTime::parse_from_str(line, "%Y-%m-%d %H:%M:%S"))
        .collect::<Result<Vec<_>, _>>()?;
    timestamps.sort();

    let days = timestamps
        .iter()
        .map(|ts| ts.format("%Y-%m-%d").to_string())
        .collect::<Vec<_>>();
    assert_eq!(
        days,
        vec![
            "2025-02-26",
            "2025-02-27",
            "2025-02-28",
            "2025-03-01",
            "2025-03-02"
        ]
    );
    assert!(
        timestamps
            .iter()
            .all(|ts| (8..=23).contains(&chrono::Timelike::hour(ts)))
    );

    Ok(())
}
