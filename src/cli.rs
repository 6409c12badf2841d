use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "ingredient-checkr",
    about = "Scan cosmetic ingredient lists and flag harmful ingredients",
    version
)]
pub struct Cli {
    /// Ingredient text to analyze; reads stdin when neither TEXT nor --file is given
    pub text: Option<String>,

    /// Read the ingredient text from a file
    #[arg(long, value_name = "FILE", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Check ingredients against a remote backend instead of the local denylist
    #[arg(long)]
    pub online: bool,

    /// Base URL of the remote backend
    #[arg(long, value_name = "URL", default_value = "http://127.0.0.1:5000")]
    pub endpoint: String,

    /// Config file [default: ./.ingredient-checkr/config.toml, fallback ~/.config/ingredient-checkr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Show all ingredients (not just harmful/neutral ones)
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
