//! Persistent settings — stored as JSON under the user's config directory.
//!
//! Loading never fails: a missing file yields defaults and a malformed file
//! is logged and replaced by defaults, so a corrupt config cannot stop the
//! application from starting.

use crate::error::{Result, SplicerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Length of the silence added to each side of an exported clip.
pub const DEFAULT_PADDING_MS: u32 = 100;

/// Name of the tracking file kept inside each source folder.
pub const USED_FILES_NAME: &str = ".used_files.json";

/// Suffix appended to a source file's stem to suggest an output name.
pub const OUTPUT_SUFFIX: &str = "_spliced";

/// User-adjustable settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplicerConfig {
    /// Silence added before and after the selection, in milliseconds.
    pub padding_ms: u32,
    /// Initial state of the padding checkbox.
    pub padding_enabled: bool,
    /// File extensions (lower case, no dot) shown in the file list.
    pub audio_extensions: Vec<String>,
    /// Tracking file name inside the source folder.
    pub used_files_name: String,
    /// Suffix for suggested output names.
    pub output_suffix: String,
    pub last_source_folder: Option<PathBuf>,
    pub last_output_folder: Option<PathBuf>,
    pub dark_mode: bool,
}

impl Default for SplicerConfig {
    fn default() -> Self {
        Self {
            padding_ms: DEFAULT_PADDING_MS,
            padding_enabled: true,
            audio_extensions: ["wav", "mp3", "flac", "ogg", "m4a"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            used_files_name: USED_FILES_NAME.to_string(),
            output_suffix: OUTPUT_SUFFIX.to_string(),
            last_source_folder: None,
            last_output_folder: None,
            dark_mode: true,
        }
    }
}

/// Get the default config file path.
///
/// Returns: `<config_dir>/audio-splicer/config.json`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("audio-splicer")
        .join("config.json")
}

/// Load configuration from a JSON file, falling back to defaults.
pub fn load_config(path: &Path) -> SplicerConfig {
    if !path.exists() {
        info!("No config at {}, using defaults", path.display());
        return SplicerConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str::<SplicerConfig>(&contents) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Failed to parse config {}: {e}, using defaults", path.display());
                SplicerConfig::default()
            }
        },
        Err(e) => {
            warn!("Failed to read config {}: {e}, using defaults", path.display());
            SplicerConfig::default()
        }
    }
}

/// Write configuration as pretty-printed JSON, creating parent directories.
pub fn save_config(path: &Path, config: &SplicerConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SplicerError::io(parent, e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|source| SplicerError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json).map_err(|e| SplicerError::io(path, e))?;
    info!("Saved config to {}", path.display());
    Ok(())
}
