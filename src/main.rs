use clap::Parser;
use lexicoach::{Cli, init_tracing, run};
use std::error::Error;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let cli = Cli::parse();
    info!("Starting lexicoach");
    debug!(config = ?cli.config, model = ?cli.model, "CLI arguments parsed");
    run(cli).await
}
