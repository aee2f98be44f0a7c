use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use price_client::HttpEstimator;
use price_ui::app::EstimatorApp;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// House price estimator.
///
/// Renders the attribute form and submits it to the configured prediction
/// service, displaying the returned estimate.
#[derive(Debug, Parser)]
struct Cli {
    /// Base URL of the prediction service.
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    endpoint: String,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep terminal output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    info!(endpoint = %cli.endpoint, "starting house price estimator");

    let estimator = Arc::new(HttpEstimator::new(cli.endpoint));
    let app = EstimatorApp::new(estimator)?;

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(780.0, 680.0))
        .with_min_inner_size([600.0, 500.0])
        .with_title("Smart House Price Estimator");

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Smart House Price Estimator",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start the UI: {e}"))
}
