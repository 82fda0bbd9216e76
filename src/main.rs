use anyhow::Result;
use backfill::areas::git::DEFAULT_GIT_PROGRAM;
use backfill::areas::repository::Repository;
use backfill::artifacts::pacing::Pacing;
use backfill::artifacts::policy::Variant;
use backfill::artifacts::remote::{BranchName, PushTarget};
use backfill::artifacts::schedule::Weekdays;
use backfill::commands::prompt::Prompter;
use backfill::commands::session::BackfillRequest;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use std::io::Write;

const DEFAULT_YEAR_START: &str = "2025-01-01";

#[derive(Parser)]
#[command(
    name = "backfill",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Create backdated commits in a git working copy",
    long_about = "This tool writes synthetic file edits into a git working copy, \
    commits each one with author and committer dates set in the past, \
    and finally pushes the branch to a remote.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(long, global = true, default_value = ".", help = "Path to the working copy")]
    repo: String,
    #[arg(long, global = true, default_value = DEFAULT_GIT_PROGRAM, help = "The git binary to run")]
    git: String,
    #[arg(long, global = true, default_value = "origin", help = "Remote to push to")]
    remote: String,
    #[arg(long, global = true, default_value = "main", help = "Branch to push")]
    branch: BranchName,
    #[arg(long, global = true, help = "Skip the final push")]
    no_push: bool,
    #[arg(long, global = true, help = "Treat this date (YYYY-MM-DD) as today")]
    end_date: Option<NaiveDate>,
    #[arg(
        long,
        global = true,
        value_parser = parse_weekdays,
        help = "Weekdays to leave empty, as letters M T W R F S U (e.g. SU)"
    )]
    skip_days: Option<Weekdays>,
    #[arg(long, global = true, help = "Pause between commits in milliseconds")]
    delay_ms: Option<u64>,
    #[arg(long, env = "GITHUB_TOKEN", hide = true, hide_env_values = true)]
    github_token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "recent",
        about = "Backfill the last N days",
        long_about = "This command fills the days before today, weekdays only by default, \
        with commits between 09:00 and 22:59."
    )]
    Recent {
        #[arg(long, help = "How many days back to fill (prompted when omitted)")]
        days: Option<u32>,
        #[arg(long, help = "Commits per day (prompted when omitted)")]
        commits_per_day: Option<u32>,
    },
    #[command(
        name = "year",
        about = "Backfill every day since a start date",
        long_about = "This command fills every day from the start date through today, \
        weekends included, with commits between 08:00 and 23:59."
    )]
    Year {
        #[arg(long, default_value = DEFAULT_YEAR_START, help = "First day to fill (YYYY-MM-DD)")]
        start: NaiveDate,
        #[arg(long, help = "Commits per day, at most 5 (prompted when omitted)")]
        commits_per_day: Option<u32>,
    },
}

fn parse_weekdays(s: &str) -> Result<Weekdays, String> {
    Weekdays::try_parse(s).ok_or_else(|| format!("invalid weekday letters: {s}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    colored::control::set_override(std::io::stdout().is_terminal());

    let end = cli
        .end_date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let repository = Repository::new(&cli.repo, &cli.git, Box::new(std::io::stdout()))?;

    let mut request = match cli.command {
        Commands::Recent {
            days,
            commits_per_day,
        } => {
            writeln!(repository.writer(), "Contribution Backfill")?;
            writeln!(
                repository.writer(),
                "This will create commits with past dates to fill your contribution graph\n"
            )?;

            let mut request = BackfillRequest::new(Variant::Recent, end, end);
            request.days_back = days;
            request.commits_per_day = commits_per_day;
            request
        }
        Commands::Year {
            start,
            commits_per_day,
        } => {
            writeln!(repository.writer(), "Contribution YEAR BACKFILL")?;
            writeln!(
                repository.writer(),
                "This will create commits for every day from {start} to {end}"
            )?;
            writeln!(repository.writer(), "{}", "=".repeat(60))?;

            let mut request = BackfillRequest::new(Variant::Year, start, end);
            request.commits_per_day = commits_per_day;
            request
        }
    };

    request.skip = cli.skip_days;
    request.pacing = cli.delay_ms.map(Pacing::from_millis);
    request.push = (!cli.no_push).then(|| PushTarget::new(cli.remote, cli.branch));
    request.token_detected = cli.github_token.is_some_and(|token| !token.is_empty());

    let mut prompter = Prompter::new(std::io::stdin().lock());
    repository.run_session(&request, &mut prompter).await?;

    Ok(())
}
