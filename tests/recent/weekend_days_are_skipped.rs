use crate::common::command::{git_log, run_backfill_command};
use assert_fs::TempDir;
use chrono::{Datelike, NaiveDate, Weekday};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn weekend_days_are_skipped(
    #[from(crate::common::command::init_repository_dir)] init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    // seven days before Monday 2025-03-17 cover Mon 03-10 through Sun 03-16
    run_backfill_command(
        dir,
        &[
            "recent",
            "--days",
            "7",
            "--commits-per-day",
            "1",
            "--end-date",
            "2025-03-17",
            "--no-push",
        ],
    )
    .write_stdin("yes\n")
    .assert()
    .success();

    let mut dates = git_log(dir, "%ad")?
        .iter()
        .map(|line| NaiveDate::parse_from_str(&line[..10], "%Y-%m-%d"))
        .collect::<Result<Vec<_>, _>>()?;
    dates.sort();

    assert_eq!(dates.len(), 5);
    assert!(
        dates
            .iter()
            .all(|date| !matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
    );
    assert_eq!(dates.first(), NaiveDate::from_ymd_opt(2025, 3, 10).as_ref());
    assert_eq!(dates.last(), NaiveDate::from_ymd_opt(2025, 3, 14).as_ref());

    Ok(())
}
