//! CLI for pr-updater.
//!
//! Updates the authenticated bot's open pull request whose title matches
//! `--match-title`, or opens a new one from `--source` into `--branch`.

use clap::Parser;
use pr_updater::{
    ensure_pr, read_body_file, ConfigError, DryRunClient, EnsureClient, EnsureError,
    GitHubClient, PrOptions,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// PR Creator - Update a bot's matching pull request or open a new one.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    github_token: String,

    /// Load all PR options from a TOML file instead of flags.
    #[arg(long, conflicts_with_all = ["org", "repo", "title", "body", "body_file", "source", "branch", "match_title"])]
    config: Option<PathBuf>,

    /// Organization or user owning the repository.
    #[arg(long, required_unless_present = "config")]
    org: Option<String>,

    /// Repository name.
    #[arg(long, required_unless_present = "config")]
    repo: Option<String>,

    /// PR title.
    #[arg(long, required_unless_present = "config")]
    title: Option<String>,

    /// PR body.
    #[arg(long, conflicts_with = "body_file")]
    body: Option<String>,

    /// Read the PR body from a file.
    #[arg(long)]
    body_file: Option<PathBuf>,

    /// Head branch, as `branch` or `user:branch`.
    #[arg(long, required_unless_present = "config")]
    source: Option<String>,

    /// Base branch to merge into.
    #[arg(long, default_value = "main")]
    branch: String,

    /// Reuse an open PR authored by the bot whose title matches this. Empty disables reuse.
    #[arg(long, default_value = "")]
    match_title: String,

    /// Actually update or create the PR. Without it, only logs what would happen.
    #[arg(long)]
    confirm: bool,
}

/// Errors ending the run.
#[derive(Debug)]
enum RunError {
    Config(ConfigError),
    Client(pr_updater::ClientError),
    Ensure(EnsureError),
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    // Explicitly install aws-lc-rs as the default crypto provider for rustls
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::from(0),
        Err(RunError::Config(e)) => {
            error!(error = %e, "Invalid options");
            ExitCode::from(1)
        }
        Err(RunError::Client(e)) => {
            error!(error = %e, "Failed to create GitHub client");
            ExitCode::from(2)
        }
        Err(RunError::Ensure(e)) => {
            error!(error = %e, "Failed to ensure PR");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with compact output, filtered via `RUST_LOG` (default "info").
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<(), RunError> {
    let options = options_from_args(&args).map_err(RunError::Config)?;
    let github = GitHubClient::from_token(args.github_token).map_err(RunError::Client)?;

    if args.confirm {
        ensure(&github, &options, false).await
    } else {
        warn!("Running without --confirm, no changes will be made");
        ensure(&DryRunClient::new(github), &options, true).await
    }
}

async fn ensure<C: EnsureClient>(
    client: &C,
    options: &PrOptions,
    dry_run: bool,
) -> Result<(), RunError> {
    let number = ensure_pr(
        client,
        &options.org,
        &options.repo,
        &options.title,
        &options.body,
        &options.source,
        &options.branch,
        &options.match_title,
    )
    .await
    .map_err(RunError::Ensure)?;

    if dry_run {
        info!("Dry run complete");
    } else {
        info!(pr_number = number, "PR is up to date");
        println!(
            "https://github.com/{}/{}/pull/{number}",
            options.org, options.repo
        );
    }

    Ok(())
}

/// Builds options from `--config` or from the individual flags.
fn options_from_args(args: &Args) -> Result<PrOptions, ConfigError> {
    if let Some(path) = &args.config {
        return PrOptions::load(path);
    }

    let body = match (&args.body, &args.body_file) {
        (Some(body), _) => body.clone(),
        (None, Some(path)) => read_body_file(path)?,
        (None, None) => String::new(),
    };

    let options = PrOptions {
        org: args.org.clone().unwrap_or_default(),
        repo: args.repo.clone().unwrap_or_default(),
        title: args.title.clone().unwrap_or_default(),
        body,
        source: args.source.clone().unwrap_or_default(),
        branch: args.branch.clone(),
        match_title: args.match_title.clone(),
    };
    options.validate()?;
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_options_from_flags() {
        let args = Args::parse_from([
            "pr-creator",
            "--github-token",
            "token",
            "--org",
            "kubernetes",
            "--repo",
            "test-infra",
            "--title",
            "Bump deps",
            "--body",
            "auto",
            "--source",
            "bump-branch",
            "--match-title",
            "Bump deps",
        ]);

        let options = options_from_args(&args).unwrap();

        assert_eq!(options.org, "kubernetes");
        assert_eq!(options.branch, "main");
        assert_eq!(options.body, "auto");
        assert!(!args.confirm);
    }

    #[test]
    fn requires_source_without_config() {
        let result = Args::try_parse_from([
            "pr-creator",
            "--github-token",
            "token",
            "--org",
            "kubernetes",
            "--repo",
            "test-infra",
            "--title",
            "Bump deps",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn rejects_config_mixed_with_flags() {
        let result = Args::try_parse_from([
            "pr-creator",
            "--github-token",
            "token",
            "--config",
            "pr.toml",
            "--org",
            "kubernetes",
        ]);

        assert!(result.is_err());
    }
}
