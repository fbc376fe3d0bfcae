use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::models::Profile;

/// Key-value persistence of the signed-in profile, backed by a single JSON
/// file. Read once at startup, written on every successful commit, cleared
/// on logout.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The persisted profile, or `None` when no session exists. A corrupt
    /// file is logged and treated as absent rather than blocking startup.
    pub fn load(&self) -> Option<Profile> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!("could not read session file {:?}: {e}", self.path);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::warn!("discarding unreadable session file {:?}: {e}", self.path);
                None
            }
        }
    }

    pub fn save(&self, profile: &Profile) -> Result<()> {
        let raw = serde_json::to_string_pretty(profile)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("writing session file {:?}", self.path))
    }

    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("removing session file {:?}", self.path)),
        }
    }
}
