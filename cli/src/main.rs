// cli/src/main.rs

// Entry point of the clinic portal command-line client.

use anyhow::Result;
use clinic_cli::cli::start_cli;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    start_cli().await
}
