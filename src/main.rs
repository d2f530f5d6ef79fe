// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use qrscan::{Config, i18n};
use std::path::PathBuf;
use std::process::ExitCode;

mod cli;

#[derive(Parser)]
#[command(name = "qrscan")]
#[command(about = "Scan a QR code and open its link in the browser")]
#[command(version = env!("GIT_VERSION"))]
struct Cli {
    /// UI language code (defaults to the system language)
    #[arg(short, long, global = true)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan an image for a QR code and open the link it carries
    Scan {
        /// Image to scan
        image: PathBuf,

        /// Keep re-reading the image until a code appears (Ctrl-C cancels)
        #[arg(short, long)]
        follow: bool,
    },

    /// Check whether some text would be treated as a link
    Check {
        /// Text to check
        text: String,
    },

    /// Open the configuration directory
    Settings,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=qrscan=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let device_language = cli
        .lang
        .clone()
        .or_else(|| config.language.clone())
        .or_else(i18n::device_language)
        .unwrap_or_default();
    i18n::init(&device_language)?;

    match cli.command {
        Commands::Scan { image, follow } => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(cli::scan(&config, image, follow))
        }
        Commands::Check { text } => Ok(cli::check(&text)),
        Commands::Settings => cli::open_settings(),
    }
}
