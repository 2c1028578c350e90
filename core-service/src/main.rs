//! URL Risk Scanner - Command Line Entry Point

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use urlrisk_core::constants::{self, APP_NAME, APP_VERSION};
use urlrisk_core::{export_dataset, extract_features, load_model, ClassifierAdapter, RiskScorer};

/// Score URLs with heuristics and a trained classifier.
#[derive(Debug, Parser)]
#[command(name = "urlrisk")]
#[command(about = "URL risk scoring: heuristics + trained classifier", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score one or more URLs and print the reports as JSON.
    Score {
        /// URLs to score.
        #[arg(required = true)]
        urls: Vec<String>,

        /// Model artifact (.onnx or .json). Defaults to $URLRISK_MODEL_PATH or ml/model.onnx.
        #[arg(long, value_name = "PATH")]
        model: Option<PathBuf>,
    },

    /// Print the extracted feature record for a URL.
    Features {
        url: String,
    },

    /// Convert labeled URLs (JSONL: {"url", "label"}) into feature rows for training.
    ExportDataset {
        /// Labeled input file.
        input: PathBuf,

        /// Output JSONL file. Defaults to a timestamped file in the local data dir.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn build_scorer(model: Option<PathBuf>) -> RiskScorer {
    let path = model.unwrap_or_else(|| PathBuf::from(constants::get_model_path()));

    let model = match load_model(&path) {
        Ok(model) => Some(model),
        Err(e) => {
            log::warn!("Model unavailable ({}), classifier results will be degraded", e);
            None
        }
    };

    RiskScorer::new(ClassifierAdapter::new(model))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Score { urls, model } => {
            let scorer = build_scorer(model);
            let lowered: Vec<String> = urls.iter().map(|u| u.to_lowercase()).collect();
            let reports = scorer.score_batch(&lowered);

            let json = if reports.len() == 1 {
                serde_json::to_string_pretty(&reports[0])
            } else {
                serde_json::to_string_pretty(&reports)
            }
            .context("failed to serialize report")?;
            println!("{}", json);
        }
        Command::Features { url } => {
            let record = extract_features(&url);
            println!("{}", serde_json::to_string_pretty(&record).context("failed to serialize features")?);
        }
        Command::ExportDataset { input, output } => {
            let summary = export_dataset(&input, output.as_deref())
                .with_context(|| format!("failed to export {}", input.display()))?;
            println!("{}", serde_json::to_string_pretty(&summary).context("failed to serialize summary")?);
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::debug!("{} v{}", APP_NAME, APP_VERSION);

    if let Err(err) = run(Cli::parse()) {
        eprintln!("urlrisk error: {:#}", err);
        std::process::exit(1);
    }
}
