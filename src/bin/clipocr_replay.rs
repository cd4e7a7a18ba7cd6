//! clipocr-replay: replay a scripted front-end session.
//!
//! Reads a JSON replay script (see [`clipocr::replay`]), drives a session
//! with scripted collaborators and prints the resulting report as JSON.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use clipocr::Config;
use clipocr::replay::{self, ReplayScript};

/// Replay a scripted clipboard OCR session.
#[derive(Parser)]
#[command(name = "clipocr-replay")]
#[command(version = clipocr::PKG_VERSION)]
#[command(about = "Replay a scripted clipboard OCR session and print the outcome")]
struct Args {
    /// Path to the JSON replay script.
    script: PathBuf,

    /// Path to configuration file.
    #[arg(short, long, env = "CLIPOCR_CONFIG")]
    config: Option<PathBuf>,

    /// Print the report on a single line.
    #[arg(long)]
    compact: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    // RUST_LOG wins over the configured filter; logs go to stderr so the
    // report on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let json = std::fs::read_to_string(&args.script)?;
    let script = ReplayScript::from_json(&json)?;
    info!(
        script = %args.script.display(),
        steps = script.steps.len(),
        "replaying"
    );

    let report = replay::run(&script, &config.session).await?;

    let output = if args.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{output}");
    Ok(())
}
