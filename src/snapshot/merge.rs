use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::config::EXPIRY_WINDOW_HOURS;
use crate::error::Result;
use crate::types::{OddsRecord, Snapshot};

/// Combine the previous snapshot with a freshly fetched batch.
///
/// Incoming records overwrite stored records with the same id, then every
/// record whose event start lies more than `EXPIRY_WINDOW_HOURS` in the past
/// is dropped. A record whose `commence_time` does not parse aborts the run
/// instead of being silently discarded.
///
/// Pure function of its inputs; the caller supplies the clock.
pub fn merge(
    previous: Option<Snapshot>,
    incoming: Vec<OddsRecord>,
    now: DateTime<Utc>,
    sport: &str,
) -> Result<Snapshot> {
    let mut by_id: HashMap<String, OddsRecord> = HashMap::new();

    if let Some(prev) = previous {
        for record in prev.records {
            by_id.insert(record.id.clone(), record);
        }
    }
    for record in incoming {
        by_id.insert(record.id.clone(), record);
    }

    let cutoff = now - Duration::hours(EXPIRY_WINDOW_HOURS);
    let mut retained: Vec<(DateTime<Utc>, OddsRecord)> = Vec::with_capacity(by_id.len());
    for record in by_id.into_values() {
        let commence = record.commence_time_utc()?;
        if commence > cutoff {
            retained.push((commence, record));
        }
    }

    // Soonest event first, id breaks ties, so consecutive runs diff cleanly.
    retained.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.id.cmp(&b.1.id)));
    let records: Vec<OddsRecord> = retained.into_iter().map(|(_, r)| r).collect();

    Ok(Snapshot {
        last_updated: now,
        sport: sport.to_string(),
        game_count: records.len(),
        records,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
