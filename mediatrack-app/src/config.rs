//! Session configuration (`config.toml`).
//!
//! Every key is optional:
//!
//! ```toml
//! data_dir = "/home/me/.local/share/mediatrack"
//! storage_key = "mediaTrackerData"
//! status_mode = "select"      # or "cycle"
//! missing_total = "unbounded" # or "one"
//! ```

use crate::error::{TrackerError, TrackerResult};
use mediatrack_model::MissingTotal;
use mediatrack_storage::DEFAULT_STORAGE_KEY;
use mediatrack_types::StatusChangeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "mediatrack";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Where the blob lives. Defaults to the platform data directory.
    pub data_dir: Option<PathBuf>,
    /// Blob key.
    pub storage_key: String,
    /// How statuses are changed from the item list.
    pub status_mode: StatusChangeMode,
    /// What a blank total means on the add/edit form.
    pub missing_total: MissingTotal,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            status_mode: StatusChangeMode::default(),
            missing_total: MissingTotal::default(),
        }
    }
}

impl TrackerConfig {
    /// `<config dir>/mediatrack/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// Reads the config at `path`. A missing file gives the defaults.
    pub fn load(path: &Path) -> TrackerResult<Self> {
        match fs::read_to_string(path) {
            Ok(raw) => Self::from_toml(&raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(TrackerError::Config(format!(
                "failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    pub fn from_toml(raw: &str) -> TrackerResult<Self> {
        toml::from_str(raw).map_err(|e| TrackerError::Config(e.to_string()))
    }

    /// The configured data dir, else `<data dir>/mediatrack`, else the
    /// working directory.
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_DIR)))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
