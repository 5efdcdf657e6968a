// src/file/snapshot.rs
use anyhow::{Result, Context, anyhow, bail};
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};
use uuid::Uuid;

use super::FileHandler;
use crate::state::DataState;

pub const SNAPSHOT_VERSION: &str = "1.0.0";

/// Copy of a session's state, written only when a caller asks for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub version: String,
    pub session_id: Uuid,
    pub saved_at: DateTime<Utc>,
    pub state: DataState,
}

impl StoreSnapshot {
    pub fn new(session_id: Uuid, state: DataState) -> Self {
        Self {
            version: SNAPSHOT_VERSION.to_string(),
            session_id,
            saved_at: Utc::now(),
            state,
        }
    }
}

pub fn snapshot_file_name(session_id: Uuid) -> String {
    format!("session-{}.ron", session_id)
}

#[derive(Debug)]
pub struct SnapshotFileHandler;

impl SnapshotFileHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn to_ron(&self, data: &StoreSnapshot) -> Result<String> {
        let content = ron::ser::to_string_pretty(
            data,
            ron::ser::PrettyConfig::new()
                .new_line("\n".to_string())
                .depth_limit(4)
                .separate_tuple_members(true)
        )?;
        Ok(content)
    }
}

impl Default for SnapshotFileHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl FileHandler<StoreSnapshot> for SnapshotFileHandler {
    fn load(&self, path: &Path) -> Result<StoreSnapshot> {
        if !path.exists() {
            return Err(anyhow!("Snapshot file not found: {}", path.display()));
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
        let snapshot: StoreSnapshot = ron::from_str(&content)
            .with_context(|| format!("Failed to parse snapshot {}", path.display()))?;

        if snapshot.version != SNAPSHOT_VERSION {
            warn!(path = %path.display(), version = %snapshot.version, "rejected snapshot");
            bail!(
                "Unsupported snapshot version {} in {} (expected {})",
                snapshot.version,
                path.display(),
                SNAPSHOT_VERSION
            );
        }

        info!(path = %path.display(), session = %snapshot.session_id, "loaded state snapshot");
        Ok(snapshot)
    }

    fn save(&self, data: &StoreSnapshot, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = self.to_ron(data)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write snapshot {}", path.display()))?;
        Ok(())
    }
}
