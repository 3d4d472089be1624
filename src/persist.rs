//! Durable gutter state.
//!
//! The pager remembers its gutter widths between runs in a small JSON
//! record. Persistence is best-effort: a missing state directory, an
//! unreadable file, or a write failure never surfaces to the user. The
//! worst outcome is starting over with default gutters.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How long a save request sits before it is written, so bursts of drag
/// updates coalesce into a single write.
pub const SAVE_DEBOUNCE_MS: u64 = 150;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to write state file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// The on-disk mirror of the layout state at the time of the last flush.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PersistedRecord {
    pub padding_left: f64,
    pub padding_right: f64,
    pub active: bool,
}

impl PersistedRecord {
    /// Extract a record from parsed JSON, falling back to the default for
    /// each field independently. Non-finite or negative paddings count as
    /// absent.
    fn from_value(value: &Value) -> Self {
        let padding = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_f64)
                .filter(|v| v.is_finite() && *v >= 0.0)
                .unwrap_or(0.0)
        };
        Self {
            padding_left: padding("padding_left"),
            padding_right: padding("padding_right"),
            active: value
                .get("active")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        }
    }
}

/// Platform default location of the state file, or None when no base
/// directory can be resolved (persistence is then skipped entirely).
pub fn default_state_path() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA")
            .map(|appdata| PathBuf::from(appdata).join("gutters").join("state.json"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|home| {
            PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("gutters")
                .join("state.json")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg).join("gutters").join("state.json"));
        }
        std::env::var_os("HOME").map(|home| {
            PathBuf::from(home)
                .join(".config")
                .join("gutters")
                .join("state.json")
        })
    }
}

/// Load the persisted record, treating any failure as "no prior state".
pub fn load_record(path: &Path) -> PersistedRecord {
    let Ok(content) = fs::read_to_string(path) else {
        return PersistedRecord::default();
    };
    match serde_json::from_str::<Value>(&content) {
        Ok(value) => PersistedRecord::from_value(&value),
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "malformed state file, using defaults");
            PersistedRecord::default()
        }
    }
}

/// Write the record, creating the state directory if needed.
pub fn save_record(path: &Path, record: &PersistedRecord) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(record)?;
    fs::write(path, json)?;
    Ok(())
}

/// Coalesces save requests: the first request starts the window, further
/// requests inside it are absorbed, and the write fires once when the
/// window elapses. The written state is read at fire time, so the latest
/// request always wins.
#[derive(Debug)]
pub struct SaveDebouncer {
    delay_ms: u64,
    queued_at: Option<u64>,
}

impl SaveDebouncer {
    pub const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            queued_at: None,
        }
    }

    /// Request a save. Does nothing if one is already pending: the
    /// pending write will pick up the current state when it fires.
    pub const fn queue(&mut self, now_ms: u64) {
        if self.queued_at.is_none() {
            self.queued_at = Some(now_ms);
        }
    }

    /// True exactly once per window, when the delay has elapsed.
    pub fn take_ready(&mut self, now_ms: u64) -> bool {
        let Some(queued_at) = self.queued_at else {
            return false;
        };
        if now_ms.saturating_sub(queued_at) >= self.delay_ms {
            self.queued_at = None;
            true
        } else {
            false
        }
    }

    /// Drop any pending request; used by the immediate-flush path, which
    /// supersedes the debounced write.
    pub const fn cancel(&mut self) {
        self.queued_at = None;
    }

    pub const fn is_pending(&self) -> bool {
        self.queued_at.is_some()
    }
}
