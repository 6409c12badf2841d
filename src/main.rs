//! `ingredient-checkr` — scan a cosmetic ingredient list and flag harmful ingredients.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load the denylist and description config ([`config::load_config`]).
//! 3. Read the raw text from argument, file, or stdin ([`input`]).
//! 4. Normalize the text into ingredient candidates ([`normalize`]).
//! 5. Classify each candidate, either locally against the denylist
//!    ([`safety::classifier`]) or via the remote backend (`--online`,
//!    [`remote`]). The two strategies are mutually exclusive.
//! 6. Summarize and render the requested report ([`report`]).
//! 7. Exit `0` (no harmful ingredients) or `1` (at least one harmful verdict).

mod cli;
mod config;
mod input;
mod models;
mod normalize;
mod remote;
mod report;
mod safety;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use cli::{Cli, ReportFormat};
use config::{load_config, Config};
use models::Ingredient;
use normalize::Normalizer;
use safety::classifier;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    let raw = input::read_raw_text(cli.text.as_deref(), cli.file.as_deref())?;
    let candidates = Normalizer::new().normalize(&raw);

    if candidates.is_empty() {
        // Empty or garbage input is not an error
        eprintln!("No ingredients detected");
        return Ok(());
    }

    if !cli.quiet {
        eprintln!(
            "  {} {} ingredient candidates",
            "→".cyan(),
            candidates.len()
        );
    }

    let ingredients = if cli.online {
        check_online(&cli.endpoint, &candidates, &config, cli.quiet).await?
    } else {
        classifier::classify(&candidates, &config)
    };

    let summary = classifier::summarize(&ingredients);

    match cli.report {
        ReportFormat::Terminal => {
            report::terminal::render(&ingredients, &summary, cli.verbose, cli.quiet)?;
        }
        ReportFormat::Json => {
            let document = serde_json::json!({
                "ingredients": ingredients,
                "summary": summary,
            });
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
    }

    // Exit code: 1 if anything harmful was found
    if summary.harmful > 0 {
        std::process::exit(1);
    }

    Ok(())
}

/// Remote classification: one `POST /check_ingredients` round trip, with a
/// spinner while the request is in flight.
async fn check_online(
    endpoint: &str,
    candidates: &[String],
    config: &Config,
    quiet: bool,
) -> Result<Vec<Ingredient>> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()?;

    let pb = if !quiet {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb.set_message(format!(
            "Checking {} ingredients against {}",
            candidates.len(),
            endpoint
        ));
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    if !remote::health(&client, endpoint).await {
        if let Some(pb) = &pb {
            pb.suspend(|| {
                eprintln!(
                    "  {} backend health check failed, trying anyway",
                    "⚠".yellow()
                )
            });
        }
    }

    let result = remote::check_ingredients(&client, endpoint, candidates).await;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let response = result?;
    Ok(remote::interpret_response(candidates, &response, config))
}
