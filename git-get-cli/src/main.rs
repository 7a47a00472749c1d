//! git-get - Clone git repositories to a fixed path under the source root
//!
//! `git-get org/repo` clones `git@github.com:org/repo` into
//! `~/src/github.com/org/repo`, whatever the current working directory.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use git_get_core::{ClonePlan, Config, Overrides};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Clone a repository with an implicitly relative URL to a path under the source root
#[derive(Parser, Debug)]
#[command(name = "git-get")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Repository to clone: PROJECT/REPO shorthand or absolute clone URL
    reference: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print the git command instead of running it
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Git executable to run (overrides config and env)
    #[arg(long, env = "GIT_GET_GIT")]
    git: Option<String>,

    /// Prefix for PROJECT/REPO shorthand (overrides config and env)
    #[arg(long, env = "GIT_GET_PREFIX")]
    prefix: Option<String>,

    /// Directory clones are placed under (overrides config and env)
    #[arg(long, env = "GIT_GET_ROOT")]
    root: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            git: self.git.clone(),
            default_prefix: self.prefix.clone(),
            source_root: self.root.clone(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", report(&err));
            ExitCode::FAILURE
        }
    }
}

/// Format a fatal error with its cause chain on one line
fn report(err: &anyhow::Error) -> String {
    format!("git-get: {:#}", err)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = Config::load_with_overrides(cli.config.as_deref(), cli.overrides())?;

    tracing::debug!(
        git = %config.clone.git,
        default_prefix = %config.clone.default_prefix,
        source_root = %config.clone.source_root,
        "Configuration loaded"
    );

    let plan = ClonePlan::resolve(&cli.reference, &config)?;

    if cli.dry_run {
        println!("{}", plan);
        return Ok(());
    }

    match plan.handoff()? {}
}
