use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};

use movierecs::cli::{self, Command, Reply};
use movierecs::{telemetry, Config, FetchController, HttpCatalog};

/// Upper bound on the startup health probe, independent of request timeouts
const HEALTH_PROBE_TIMEOUT: Duration = Duration::from_secs(3);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let config = Config::from_env()?;
    tracing::info!(api_url = %config.api_url, limit = config.result_limit, "Starting movierecs");

    let catalog = HttpCatalog::from_config(&config)?;
    if let Err(e) = catalog.health_within(HEALTH_PROBE_TIMEOUT).await {
        tracing::warn!(error = %e, "Recommendation backend is not healthy");
    }

    let controller = FetchController::from_config(Arc::new(catalog), &config)?;
    controller.attach().await;
    println!("{}", controller.render().await);
    println!("{}", cli::HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match cli::execute(&controller, Command::parse(&line)).await {
            Reply::Exit => break,
            Reply::Message(message) => println!("{}", message),
            Reply::Rendered(page) => println!("{}", page),
        }
    }

    Ok(())
}
