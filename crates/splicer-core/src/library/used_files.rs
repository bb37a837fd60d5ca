//! `.used_files.json` — remembers which source recordings already produced
//! a clip, so the file list can mark them.
//!
//! The on-disk format is a plain JSON array of file names. A missing,
//! unreadable or malformed file is treated as "nothing used yet".
use crate::error::{Result, SplicerError};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Set of used file names bound to its tracking file.
#[derive(Debug, Clone, Default)]
pub struct UsedFiles {
    path: PathBuf,
    names: BTreeSet<String>,
}

impl UsedFiles {
    /// Load the tracking file at `path`, tolerating every failure.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let names = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Vec<String>>(&contents) {
                Ok(list) => list.into_iter().collect(),
                Err(e) => {
                    warn!("Ignoring malformed {}: {e}", path.display());
                    BTreeSet::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeSet::new(),
            Err(e) => {
                warn!("Could not read {}: {e}", path.display());
                BTreeSet::new()
            }
        };
        debug!("{} used files tracked in {}", names.len(), path.display());
        Self { path, names }
    }

    /// Persist the set as a sorted JSON array.
    pub fn save(&self) -> Result<()> {
        let list: Vec<&str> = self.names.iter().map(String::as_str).collect();
        let json = serde_json::to_string(&list).map_err(|source| SplicerError::Json {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, json).map_err(|e| SplicerError::io(&self.path, e))
    }

    /// Add a name; returns `true` if it was not already tracked.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let used = UsedFiles::load(tmp.path().join(".used_files.json"));
        assert!(used.is_empty());
    }

    #[test]
    fn malformed_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".used_files.json");
        std::fs::write(&path, r#"{"a.wav": true}"#).unwrap();
        assert!(UsedFiles::load(&path).is_empty());
    }

    #[test]
    fn reads_unordered_array() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".used_files.json");
        std::fs::write(&path, r#"["b.wav", "a.mp3", "b.wav"]"#).unwrap();
        let used = UsedFiles::load(&path);
        assert_eq!(used.len(), 2);
        assert!(used.contains("a.mp3"));
        assert!(!used.contains("c.wav"));
    }

    #[test]
    fn insert_and_save_writes_sorted_array() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".used_files.json");
        let mut used = UsedFiles::load(&path);
        assert!(used.insert("z.wav"));
        assert!(used.insert("a.wav"));
        assert!(!used.insert("a.wav"));
        used.save().unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, r#"["a.wav","z.wav"]"#);
        assert_eq!(UsedFiles::load(&path).len(), 2);
    }

    #[test]
    fn save_into_missing_folder_fails() {
        let tmp = TempDir::new().unwrap();
        let mut used = UsedFiles::load(tmp.path().join("gone").join(".used_files.json"));
        used.insert("a.wav");
        assert!(matches!(used.save(), Err(SplicerError::Io { .. })));
    }
}
