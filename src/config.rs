use crate::error::{AppError, Result};

pub const ODDS_API_URL: &str = "https://api.the-odds-api.com";

/// Records whose commence_time is further in the past than this are dropped
/// from the snapshot on merge.
pub const EXPIRY_WINDOW_HOURS: i64 = 24;

/// Upstream request timeout (seconds). The Odds API normally answers in well
/// under a second; a hung call must not block the scheduled run forever.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    /// The Odds API key (ODDS_API_KEY). Required.
    pub api_key: String,
    /// Sport tag, e.g. "baseball_mlb" (SPORT)
    pub sport: String,
    /// Comma-separated bookmaker regions (REGIONS)
    pub regions: String,
    /// Comma-separated market keys (MARKETS)
    pub markets: String,
    /// "american" or "decimal" (ODDS_FORMAT)
    pub odds_format: String,
    /// Snapshot path the frontend reads (OUTPUT_FILE)
    pub output_file: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("ODDS_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                AppError::Config("ODDS_API_KEY must be set to a The Odds API key".to_string())
            })?;

        Ok(Self {
            api_base_url: std::env::var("ODDS_API_URL")
                .unwrap_or_else(|_| ODDS_API_URL.to_string()),
            api_key,
            sport: std::env::var("SPORT").unwrap_or_else(|_| "baseball_mlb".to_string()),
            regions: std::env::var("REGIONS").unwrap_or_else(|_| "us".to_string()),
            markets: std::env::var("MARKETS").unwrap_or_else(|_| "h2h,totals".to_string()),
            odds_format: std::env::var("ODDS_FORMAT")
                .unwrap_or_else(|_| "american".to_string()),
            output_file: std::env::var("OUTPUT_FILE")
                .unwrap_or_else(|_| "data/odds.json".to_string()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
