//! Project-state inference.
//!
//! Only existence and modification-time checks are performed here. The
//! descriptor, lock file and environment belong to the external tool and are
//! never parsed or written.

use crate::error::{Result, UvflowError};
use crate::paths;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::SystemTime;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectState {
    pub descriptor_present: bool,
    pub lock_present: bool,
    /// Lock file exists and is not older than the descriptor.
    pub lock_fresh: bool,
    pub env_present: bool,
    pub notebook_installed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptor_modified: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock_modified: Option<DateTime<Utc>>,
}

impl ProjectState {
    /// Inspect `root` and report what the external tool has left there.
    pub fn detect(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(UvflowError::NotADirectory(root.display().to_string()));
        }

        let descriptor_mtime = modified(&paths::descriptor_path(root))?;
        let lock_mtime = modified(&paths::lock_path(root))?;
        let env_dir = paths::env_dir(root);
        let env_present = env_dir.is_dir();
        let notebook_installed = env_present
            && paths::NOTEBOOK_LAUNCHERS
                .iter()
                .any(|launcher| env_dir.join(launcher).is_file());

        let lock_fresh = match (descriptor_mtime, lock_mtime) {
            (Some(descriptor), Some(lock)) => lock >= descriptor,
            _ => false,
        };

        let state = Self {
            descriptor_present: descriptor_mtime.is_some(),
            lock_present: lock_mtime.is_some(),
            lock_fresh,
            env_present,
            notebook_installed,
            descriptor_modified: descriptor_mtime.map(DateTime::<Utc>::from),
            lock_modified: lock_mtime.map(DateTime::<Utc>::from),
        };
        tracing::debug!(root = %root.display(), ?state, "detected project state");
        Ok(state)
    }

    /// Descriptor exists but the lock file is missing or older than it.
    pub fn lock_stale(&self) -> bool {
        self.descriptor_present && !self.lock_fresh
    }
}

/// Modification time of a regular file, or `None` when it does not exist.
fn modified(path: &Path) -> Result<Option<SystemTime>> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(Some(meta.modified()?)),
        Ok(_) => Ok(None),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
