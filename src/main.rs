//! Flagdeck - a terminal control panel for server debug flags
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use url::Url;

/// Flagdeck - a terminal control panel for server debug flags
#[derive(Parser, Debug)]
#[command(name = "flagdeck")]
#[command(about = "A terminal control panel for server debug flags", long_about = None)]
struct Args {
    /// Base URL of the debug server (overrides the config file)
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Path to a flagdeck.toml config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Request timeout in milliseconds (overrides the config file)
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // Logging goes to a file; losing it should not stop the panel.
    if let Err(e) = flagdeck_core::logging::init() {
        eprintln!("⚠ Logging disabled: {e}");
    }

    let mut settings = flagdeck_app::load_settings(args.config.as_deref());
    if let Some(url) = args.url {
        settings.server.base_url = url;
    }
    if let Some(ms) = args.timeout_ms {
        settings.server.timeout_ms = ms;
    }

    // Validate the URL while stderr is still readable.
    if let Err(e) = Url::parse(&settings.server.base_url) {
        eprintln!(
            "❌ Invalid server URL '{}': {e}",
            settings.server.base_url
        );
        eprintln!();
        eprintln!("Pass the debug server base URL as an argument:");
        eprintln!("    flagdeck http://localhost:8080/");
        std::process::exit(1);
    }

    flagdeck_tui::run(settings).await?;

    tracing::info!("Flagdeck session ended");
    Ok(())
}
