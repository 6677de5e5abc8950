#![warn(clippy::all)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod display;
mod interactive;
mod session;

use billscope_analysis::GroqProvider;
use billscope_common::{logging, util, Config};
use billscope_extract::{DocumentFetcher, DocumentSource};
use session::Session;

/// Billscope - policy bill insight from the command line.
#[derive(Parser, Debug)]
#[command(name = "billscope")]
#[command(version = "0.1.0")]
#[command(about = "Analyze government bills with a hosted language model", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an interactive analysis session
    Interactive,

    /// Run the pipeline once and print the analysis
    Analyze {
        /// Path to a bill PDF
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// URL of a bill document
        #[arg(short, long)]
        url: Option<String>,
    },

    /// Print the resolved configuration (API key redacted)
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The one required credential is resolved before any command runs;
    // a missing key halts startup here.
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => bail!("{e}"),
    };

    logging::init_logging(&config.log_level, &config.log_format);

    match cli.command {
        Commands::Interactive => interactive::run(&config).await,
        Commands::Analyze { file, url } => analyze_once(&config, file, url).await,
        Commands::Config => {
            print_config(&config);
            Ok(())
        }
    }
}

/// Single-shot mode: extract, gate, analyze, print.
async fn analyze_once(config: &Config, file: Option<PathBuf>, url: Option<String>) -> Result<()> {
    let source = match (file, url) {
        (Some(path), None) => DocumentSource::Upload {
            bytes: tokio::fs::read(&path)
                .await
                .with_context(|| format!("Cannot read {}", path.display()))?,
        },
        (None, Some(url)) if !url.trim().is_empty() => DocumentSource::Url { url },
        _ => bail!("Provide exactly one of --file or --url"),
    };

    let fetcher = DocumentFetcher::from_config(config);
    let provider = GroqProvider::from_config(config);
    let mut session = Session::new();

    if !session.load(&fetcher, source).await? {
        bail!("{}", session::REJECTION_MESSAGE);
    }
    println!("✅ Valid government bill detected.");

    println!("Analyzing...");
    let analysis = session.request_analysis(&provider).await?.to_string();
    display::print_report(&analysis);

    Ok(())
}

/// Show the resolved configuration with the secret masked.
fn print_config(config: &Config) {
    if let Some(path) = Config::config_path() {
        println!("# config file: {}", path.display());
    }

    let mut shown = config.clone();
    shown.api_key = shown.api_key.as_deref().map(util::mask_secret);

    match serde_json::to_string_pretty(&shown) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => println!("Cannot render config: {e}"),
    }
}
