//! standup - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dialoguer::{Input, Select};
use tracing_subscriber::EnvFilter;

use standup::config::{self, Config};
use standup::git::{collect_logs, open_repository, DEFAULT_LIMIT};
use standup::llm::{self, claude::check_claude_installed, Provider};
use standup::report::render_log_text;

/// Generate a daily standup report from your git history.
#[derive(Parser, Debug)]
#[command(name = "standup")]
#[command(about = "Generate a daily standup report from your git history")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize commits from HEAD back to the given commit, inclusive
    Run {
        /// Commit hash (full or abbreviated) at which the walk stops
        target: String,

        /// Repository path (defaults to the current directory, searching upward)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Maximum number of commits to visit before giving up on the target
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        /// Print the aggregated git log without calling the LLM backend
        #[arg(long)]
        dry_run: bool,
    },
    /// Interactively configure the LLM backend
    Configure,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            target,
            path,
            limit,
            dry_run,
        } => run(&target, path.as_deref(), limit, dry_run).await,
        Command::Configure => configure(),
    }
}

async fn run(
    target: &str,
    path: Option<&std::path::Path>,
    limit: usize,
    dry_run: bool,
) -> Result<()> {
    let config = config::load().context("Failed to load configuration")?;

    let repo = open_repository(path)?;

    let entries = collect_logs(&repo, target, Some(limit)).context("Failed to collect git logs")?;

    if entries.is_empty() {
        println!("No commits found between HEAD and {target}. Nothing to report.");
        return Ok(());
    }

    println!("Found {} commits", entries.len());

    let full_log = render_log_text(&entries);

    if dry_run {
        println!("\n--- Dry Run Output ---\n");
        println!("{full_log}");
        return Ok(());
    }

    if config.provider == Provider::Claude {
        check_claude_installed()
            .await
            .context("Claude Code CLI is required")?;
    }

    println!("Generating standup report with {}...", config.provider);

    let summarizer = llm::from_config(&config)?;
    let report = llm::summarize_log(summarizer.as_ref(), &full_log, &config)
        .await
        .context("Failed to generate the standup report")?;

    println!("{report}");

    Ok(())
}

fn configure() -> Result<()> {
    let mut config = config::load().context("Failed to load configuration")?;

    let providers = [Provider::Claude, Provider::Ollama];
    let current = providers
        .iter()
        .position(|p| *p == config.provider)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Select LLM backend")
        .items(&providers)
        .default(current)
        .interact()
        .context("Backend selection failed")?;
    config.provider = providers[selection];

    if config.provider == Provider::Ollama {
        config.model = Input::<String>::new()
            .with_prompt("Model name")
            .default(config.model.clone())
            .interact_text()
            .context("Model prompt failed")?;

        config.base_url = Input::<String>::new()
            .with_prompt("Ollama base URL")
            .default(config.base_url.clone())
            .interact_text()
            .context("Base URL prompt failed")?;
    }

    print_config_summary(&config);

    config::save(&config).context("Failed to save configuration")?;
    println!(
        "Configuration saved to {}",
        config::config_path()?.display()
    );

    Ok(())
}

fn print_config_summary(config: &Config) {
    println!("Backend: {}", config.provider);
    if config.provider == Provider::Ollama {
        println!("Model:   {}", config.model);
        println!("Server:  {}", config.base_url);
    }
}
