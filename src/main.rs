//
// main.rs
// Dicom-Tree-rs
//
// Tokio entry point that sets up logging and hands off execution to the CLI layer.
//
// Thales Matheus Mendonça Santos - October 2026

use dicom_tree::cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `print` and `json` output stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    cli::run().await
}
