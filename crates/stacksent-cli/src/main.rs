use std::path::PathBuf;

use clap::Parser;

mod output;
mod pipeline;
mod report;

/// Search Stack Overflow for questions and annotate them with sentiment.
#[derive(Debug, Parser)]
#[command(name = "stacksent")]
#[command(about = "Collect Stack Overflow questions and enrich them with sentiment")]
struct Cli {
    /// Term to match against question titles
    search_term: String,

    /// Number of unique questions to collect (the API may supply fewer)
    target_count: usize,

    /// Path of the JSON output file; overwritten if it already exists
    #[arg(long, default_value = "stackoverflow.json")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = stacksent_core::load_app_config()?;
    let enriched = pipeline::run(&config, &cli.search_term, cli.target_count, &cli.output).await?;
    report::print_report(&enriched);

    Ok(())
}

#[cfg(test)]
mod tests;
