use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_git_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    run_git_command(repository_dir.path(), &["config", "user.name", "fake_user"])
        .assert()
        .success();
    run_git_command(
        repository_dir.path(),
        &["config", "user.email", "fake_email@email.com"],
    )
    .assert()
    .success();
    run_git_command(repository_dir.path(), &["config", "commit.gpgsign", "false"])
        .assert()
        .success();

    repository_dir
}

/// Runs the backfill binary against `dir` with no pause between commits.
pub fn run_backfill_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("backfill").expect("Failed to find backfill binary");
    cmd.env_remove("GITHUB_TOKEN");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd.args(["--delay-ms", "0"]);
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// One line per commit, newest first, rendered with `git log --format`.
pub fn git_log(dir: &Path, format: &str) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let output = run_git_command(
        dir,
        &[
            "log",
            &format!("--format={format}"),
            "--date=format:%Y-%m-%d %H:%M:%S",
        ],
    )
    .output()?;

    if !output.status.success() {
        // no commits yet
        return Ok(Vec::new());
    }

    Ok(String::from_utf8(output.stdout)?
        .lines()
        .map(|line| line.to_string())
        .collect())
}

pub fn tracked_files(dir: &Path) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let output = run_git_command(dir, &["ls-files"]).output()?;

    Ok(String::from_utf8(output.stdout)?
        .lines()
        .map(|line| line.to_string())
        .collect())
}
