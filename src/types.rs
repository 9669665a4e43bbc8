use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

// ---------------------------------------------------------------------------
// OddsRecord
// ---------------------------------------------------------------------------

/// One wagering event as returned by The Odds API.
///
/// Only `id` (the merge key) and `commence_time` (the expiry input) are
/// modeled; everything else (sport keys, team names, bookmakers, markets,
/// prices) passes through the flattened map untouched so the snapshot keeps
/// whatever shape the upstream sends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OddsRecord {
    pub id: String,
    /// Raw RFC 3339 UTC timestamp of the scheduled event start.
    pub commence_time: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl OddsRecord {
    /// Parse `commence_time`. Failure is fatal for the run: the expiry
    /// invariant cannot be evaluated on malformed upstream data.
    pub fn commence_time_utc(&self) -> Result<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.commence_time)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|source| AppError::CommenceTime {
                id: self.id.clone(),
                value: self.commence_time.clone(),
                source,
            })
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// The persisted unit of state, written once per run. Field names are the
/// contract with the web frontend and must stay stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub last_updated: DateTime<Utc>,
    pub sport: String,
    /// Always equals `records.len()` at time of write.
    pub game_count: usize,
    pub records: Vec<OddsRecord>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
