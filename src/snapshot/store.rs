use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::Result;
use crate::types::Snapshot;

/// Load the snapshot written by the previous run.
/// Missing or unreadable state degrades to `None`: the run proceeds with no
/// prior records rather than failing, but the condition is logged since it
/// discards stale-but-possibly-valid data.
pub fn load_previous(path: &Path) -> Option<Snapshot> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No previous snapshot at {}, first run", path.display());
            return None;
        }
        Err(e) => {
            warn!(
                "Could not read previous snapshot {}: {e}; starting from empty",
                path.display()
            );
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            warn!(
                "Previous snapshot {} is malformed: {e}; starting from empty",
                path.display()
            );
            None
        }
    }
}

/// Write the snapshot as pretty-printed JSON, creating parent directories as
/// needed. The file shape is the contract with the web frontend.
pub fn save(path: &Path, snapshot: &Snapshot) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
