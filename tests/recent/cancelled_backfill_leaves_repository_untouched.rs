use crate::common::command::{git_log, run_backfill_command};
use crate::common::file::list_workspace_files;
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::no("no\n")]
#[case::short_yes("y\n")]
#[case::blank("\n")]
fn cancelled_backfill_leaves_repository_untouched(
    #[from(crate::common::command::init_repository_dir)] init_repository_dir: TempDir,
    #[case] answer: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    run_backfill_command(dir, &["recent", "--end-date", "2025-03-17"])
        .write_stdin(format!("2\n2\n{answer}"))
        .assert()
        .success()
        .stdout(predicate::str::contains("This will create 4 commits"))
        .stdout(predicate::str::contains("Backfill cancelled"))
        .stdout(predicate::str::contains("Starting backfill").not());

    assert_eq!(git_log(dir, "%H")?, Vec::<String>::new());
    assert!(list_workspace_files(dir).is_empty());

    Ok(())
}
