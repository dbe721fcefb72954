use std::error::Error;

use clap::Parser;
use github_endpoints::{Args, Environment, GitHubProvider};
use indicatif::{ProgressBar, ProgressStyle};
use tokio::time::Duration;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let args = Args::parse();

    // Initialize the tracing logger; RUST_LOG wins over --verbose
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // A token on the command line takes precedence over GITHUB_TOKEN / .env
    let environment = match &args.token {
        Some(t) if !t.trim().is_empty() => Environment::with_token(Some(t.clone())),
        _ => Environment::load(),
    };
    if !environment.token_exists() {
        debug!("No GitHub token configured; sending unauthenticated requests");
    }

    let provider = GitHubProvider::builder()
        .base_url(args.base_url.clone())
        .environment(environment)
        .verbose(args.verbose)
        .build()?;

    let target = args.command.target();

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")?
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.set_message(format!("Requesting {}", target));
    pb.enable_steady_tick(Duration::from_millis(80));

    let result = provider.request(&target).await;
    pb.finish_and_clear();

    match result {
        Ok(response) => {
            if args.raw {
                println!("{}", response.text());
            } else {
                println!("{}", response.pretty());
            }
            Ok(())
        }
        Err(e) => {
            error!("{} failed: {}", target, e);
            Err(e.into())
        }
    }
}
