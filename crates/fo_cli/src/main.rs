//! FO Detector command-line driver.
//!
//! Drives the analysis workflow end to end against a running analysis
//! service: upload a capture, then run any of the four analysis operations
//! on it. Results are printed to stdout; duration plots are decoded and
//! written to the configured plot folder.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fo_core::api::{AnalysisBackend, HttpAnalysisClient};
use fo_core::config::AppConfig;
use fo_core::models::{decode_plot_png, GeneratorId, SignalProperty, DISPLAY_GENERATORS};
use fo_core::session::{AnalysisSession, ViewState};

#[derive(Parser)]
#[command(name = "fo-detector", about = "Forced-oscillation analysis client", version)]
struct Cli {
    /// Path to the settings file (default: ./settings.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the analysis service base URL
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Upload a signal capture (CSV or XLSX) and print the issued file id
    Upload {
        /// Path to the capture file
        file: PathBuf,
    },
    /// Fetch the selected time-series columns for an uploaded capture
    Analyze {
        /// File id issued by upload
        #[arg(long)]
        file_id: String,

        /// Generator ids as shown on the grid diagram (e.g. G2,G5)
        #[arg(long, value_delimiter = ',')]
        generators: Vec<String>,

        /// Property codes: P, Q, V, A
        #[arg(long, value_delimiter = ',')]
        properties: Vec<String>,
    },
    /// Detect the oscillation window and save the four plots
    DetectDuration {
        /// File id issued by upload
        #[arg(long)]
        file_id: String,
    },
    /// Classify the oscillation as natural or forced
    PredictClass {
        /// File id issued by upload
        #[arg(long)]
        file_id: String,
    },
    /// Locate the generator driving the oscillation
    LocateSource {
        /// File id issued by upload
        #[arg(long)]
        file_id: String,
    },
    /// Delete every capture stored on the service
    ClearFiles,
    /// List the selectable generators and properties
    ListOptions,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fo_core=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::default_path);
    let mut config = AppConfig::load(&config_path)
        .with_context(|| format!("failed to load settings from {}", config_path.display()))?;
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }

    let client = Arc::new(HttpAnalysisClient::from_config(&config)?);

    match cli.command {
        Command::Upload { file } => upload(client, &file).await,
        Command::Analyze {
            file_id,
            generators,
            properties,
        } => analyze(client, &file_id, generators, properties).await,
        Command::DetectDuration { file_id } => detect_duration(client, &file_id, &config).await,
        Command::PredictClass { file_id } => predict_class(client, &file_id).await,
        Command::LocateSource { file_id } => locate_source(client, &file_id).await,
        Command::ClearFiles => clear_files(client).await,
        Command::ListOptions => {
            list_options();
            Ok(())
        }
    }
}

async fn upload(client: Arc<HttpAnalysisClient>, file: &PathBuf) -> Result<()> {
    let file_name = file
        .file_name()
        .and_then(|name| name.to_str())
        .context("capture path has no file name")?
        .to_string();
    let content = std::fs::read(file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    let response = client.upload(&file_name, content).await?;
    println!("{}", response.message);
    println!("file id: {}", response.file_id);
    Ok(())
}

async fn analyze(
    client: Arc<HttpAnalysisClient>,
    file_id: &str,
    generators: Vec<String>,
    properties: Vec<String>,
) -> Result<()> {
    let mut session = AnalysisSession::new(client);
    session.state_mut().set_file_id(file_id);

    for gen in generators {
        let id = GeneratorId::new(gen);
        if !id.is_known() {
            tracing::warn!(generator = %id, "not a known generator id; passing through");
        }
        session.state_mut().toggle_generator(id);
    }
    for code in &properties {
        let property = SignalProperty::from_code(code)
            .with_context(|| format!("unknown property code '{code}', expected P, Q, V or A"))?;
        session.state_mut().toggle_property(property);
    }

    session.run_analysis().await;

    match session.state().view() {
        ViewState::Chart(records) => {
            println!("{}", serde_json::to_string_pretty(records)?);
            eprintln!("{} rows", records.len());
            Ok(())
        }
        ViewState::Error(message) => bail!("{message}"),
        other => bail!("unexpected view state: {other:?}"),
    }
}

async fn detect_duration(
    client: Arc<HttpAnalysisClient>,
    file_id: &str,
    config: &AppConfig,
) -> Result<()> {
    let mut session = AnalysisSession::new(client);
    session.state_mut().set_file_id(file_id);
    session.detect_duration().await;

    match session.state().view() {
        ViewState::DurationPlots(result) => {
            println!("start time: {:.2}s", result.start_time);
            println!("end time:   {:.2}s", result.end_time);
            println!("duration:   {:.2}s", result.duration);

            config.ensure_directories()?;
            let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
            for (label, uri) in [
                ("original", &result.plots.original),
                ("detrended", &result.plots.detrended),
                ("filtered", &result.plots.filtered),
                ("cwt", &result.plots.cwt),
            ] {
                let path = config
                    .plot_output_folder
                    .join(format!("{label}_{stamp}.png"));
                let bytes = decode_plot_png(uri)
                    .with_context(|| format!("failed to decode {label} plot"))?;
                std::fs::write(&path, bytes)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("wrote {}", path.display());
            }
            Ok(())
        }
        ViewState::Error(message) => bail!("{message}"),
        other => bail!("unexpected view state: {other:?}"),
    }
}

async fn predict_class(client: Arc<HttpAnalysisClient>, file_id: &str) -> Result<()> {
    let mut session = AnalysisSession::new(client);
    session.state_mut().set_file_id(file_id);
    session.predict_class().await;

    match session.state().view() {
        ViewState::Classification(class) => {
            println!("{class}");
            Ok(())
        }
        ViewState::Error(message) => bail!("{message}"),
        other => bail!("unexpected view state: {other:?}"),
    }
}

async fn locate_source(client: Arc<HttpAnalysisClient>, file_id: &str) -> Result<()> {
    let mut session = AnalysisSession::new(client);
    session.state_mut().set_file_id(file_id);
    session.locate_source().await;

    match session.state().view() {
        ViewState::Source(result) => {
            println!("source generator: {}", result.predicted_source);
            for (key, value) in &result.extra {
                println!("{key}: {value}");
            }
            Ok(())
        }
        ViewState::Error(message) => bail!("{message}"),
        other => bail!("unexpected view state: {other:?}"),
    }
}

async fn clear_files(client: Arc<HttpAnalysisClient>) -> Result<()> {
    let message = client.clear_files().await?;
    println!("{message}");
    Ok(())
}

fn list_options() {
    println!("generators:");
    for gen in DISPLAY_GENERATORS {
        println!("  {gen}");
    }
    println!("properties:");
    for prop in SignalProperty::all() {
        println!("  {} - {}", prop.code(), prop.label());
    }
}
