use crate::common::command::run_backfill_command;
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn non_numeric_input_falls_back_to_defaults(
    #[from(crate::common::command::init_repository_dir)] init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_backfill_command(init_repository_dir.path(), &["recent"])
        .write_stdin("abc\nxyz\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "This will create 60 commits with past dates",
        ))
        .stdout(predicate::str::contains("Backfill cancelled"));

    Ok(())
}
