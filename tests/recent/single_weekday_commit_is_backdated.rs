use crate::common::command::{git_log, run_backfill_command, tracked_files};
use crate::common::file::list_workspace_files;
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn single_weekday_commit_is_backdated(
    #[from(crate::common::command::init_repository_dir)] init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    // 2025-03-13 is a Thursday, so one day back lands on Wednesday 2025-03-12
    run_backfill_command(dir, &["recent", "--end-date", "2025-03-13"])
        .write_stdin("1\n1\nyes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("How many days back to fill?"))
        .stdout(predicate::str::contains("This will create 1 commits"))
        .stdout(predicate::str::contains("Backfilling 2025-03-12 (Wednesday)"))
        .stdout(predicate::str::contains("Created 1 commits"))
        // the temp repository has no remote, so the push attempt fails
        .stdout(predicate::str::contains("Error pushing commits:"))
        .stdout(predicate::str::contains(
            "You may need to push manually: git push origin main",
        ));

    let commits = git_log(dir, "%ad|%cd|%s")?;
    assert_eq!(commits.len(), 1);

    let fields = commits[0].split('|').collect::<Vec<_>>();
    let (author_date, committer_date, subject) = (fields[0], fields[1], fields[2]);
    assert_eq!(author_date, committer_date);
    assert!(author_date.starts_with("2025-03-12 "));
    assert!(author_date.ends_with(":00"));

    // the subject carries the same timestamp at minute precision
    let (category, stamped) = subject
        .rsplit_once(" - ")
        .ok_or("commit subject should be '<category> - <timestamp>'")?;
    assert!(!category.is_empty());
    assert_eq!(format!("{stamped}:00"), author_date);

    let hour = author_date[11..13].parse::<u32>()?;
    assert!((9..=22).contains(&hour));

    let files = list_workspace_files(dir);
    assert_eq!(files.len(), 1);
    assert!(files[0].to_string_lossy().contains("20250312"));
    assert_eq!(tracked_files(dir)?, vec![files[0].to_string_lossy().to_string()]);

    Ok(())
}
