use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::{Config, HTTP_TIMEOUT_SECS};
use crate::error::{AppError, Result};
use crate::types::OddsRecord;

/// Fetch current odds for the configured sport from The Odds API.
/// Any non-success status fails the run; the previous snapshot on disk is
/// left untouched by the caller in that case.
pub async fn fetch_odds(cfg: &Config) -> Result<Vec<OddsRecord>> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()?;

    let url = build_odds_url(cfg);
    let resp = client.get(&url).send().await?;

    log_quota_headers(resp.headers());

    let status = resp.status();
    if !status.is_success() {
        match status.as_u16() {
            401 => warn!("Odds API rejected the request (401); check ODDS_API_KEY"),
            422 => warn!(
                "Odds API: sport {:?} is not covered by the current subscription (422)",
                cfg.sport
            ),
            _ => {}
        }
        let body = resp.text().await.unwrap_or_default();
        return Err(AppError::Fetch { status, body });
    }

    let records: Vec<OddsRecord> = resp.json().await?;
    debug!("Odds API returned {} events for {}", records.len(), cfg.sport);
    Ok(records)
}

fn build_odds_url(cfg: &Config) -> String {
    format!(
        "{}/v4/sports/{}/odds/?apiKey={}&regions={}&markets={}&oddsFormat={}&dateFormat=iso",
        cfg.api_base_url, cfg.sport, cfg.api_key, cfg.regions, cfg.markets, cfg.odds_format
    )
}

/// The Odds API reports the monthly credit budget on every response.
fn log_quota_headers(headers: &reqwest::header::HeaderMap) {
    let get = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());
    if let (Some(remaining), Some(used)) = (get("x-requests-remaining"), get("x-requests-used")) {
        info!("Odds API quota: {remaining} requests remaining ({used} used)");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
