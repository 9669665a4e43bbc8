mod config;
mod error;
mod fetcher;
mod snapshot;
mod types;

use std::path::Path;

use chrono::Utc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::Result;
use crate::fetcher::fetch_odds;
use crate::snapshot::{load_previous, merge, save};

#[tokio::main]
async fn main() {
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cfg.log_level))
        .init();

    if let Err(e) = run(cfg).await {
        error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

/// One scheduled run: fetch → load previous snapshot → merge/expire → save.
/// Any fetch failure returns before the snapshot file is touched, so the
/// frontend keeps serving the last good data.
async fn run(cfg: Config) -> Result<()> {
    info!(sport = %cfg.sport, "Fetching odds");
    let incoming = fetch_odds(&cfg).await?;
    info!("Fetched {} events for {}", incoming.len(), cfg.sport);

    let output_path = Path::new(&cfg.output_file);
    let previous = load_previous(output_path);
    if let Some(prev) = &previous {
        info!(
            "Previous snapshot: {} records from {}",
            prev.game_count, prev.last_updated
        );
    }

    let result = merge(previous, incoming, Utc::now(), &cfg.sport)?;
    save(output_path, &result)?;
    info!("Saved {} games to {}", result.game_count, cfg.output_file);

    Ok(())
}
