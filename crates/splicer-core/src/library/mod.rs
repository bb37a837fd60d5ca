//! Source-folder listing.
//!
//! A source folder is read flat (no recursion). Every regular file whose
//! extension is in the configured list appears, sorted by name, and is
//! flagged if the folder's tracking file says it has already been used.
pub mod used_files;

pub use used_files::UsedFiles;

use crate::config::SplicerConfig;
use crate::error::{Result, SplicerError};
use compact_str::CompactString;
use std::path::{Path, PathBuf};
use tracing::info;

/// One file in the source list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryEntry {
    pub name: CompactString,
    /// A clip has already been exported from this file.
    pub used: bool,
}

/// List audio files directly inside `folder`, sorted by name.
///
/// Extension matching is case-insensitive; `extensions` are given without
/// the leading dot.
pub fn list_audio_files(folder: &Path, extensions: &[String]) -> Result<Vec<CompactString>> {
    let read_dir = std::fs::read_dir(folder).map_err(|e| SplicerError::io(folder, e))?;

    let mut files: Vec<CompactString> = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| SplicerError::io(folder, e))?;
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }
        let path = entry.path();
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)));
        if matches {
            files.push(CompactString::new(entry.file_name().to_string_lossy()));
        }
    }
    files.sort();
    Ok(files)
}

/// Suggested output name for a source file: its stem plus `suffix`.
pub fn suggested_output_name(file_name: &str, suffix: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string());
    format!("{stem}{suffix}")
}

/// The contents of an opened source folder.
#[derive(Debug, Clone)]
pub struct FolderListing {
    pub folder: PathBuf,
    pub entries: Vec<LibraryEntry>,
    pub used: UsedFiles,
    extensions: Vec<String>,
}

impl FolderListing {
    /// Load the tracking file, then list the folder.
    pub fn open(folder: impl Into<PathBuf>, config: &SplicerConfig) -> Result<Self> {
        let folder = folder.into();
        let used = UsedFiles::load(folder.join(&config.used_files_name));
        let mut listing = Self {
            folder,
            entries: Vec::new(),
            used,
            extensions: config.audio_extensions.clone(),
        };
        listing.rescan()?;
        info!(
            "Opened {} ({} audio files, {} used)",
            listing.folder.display(),
            listing.entries.len(),
            listing.used.len()
        );
        Ok(listing)
    }

    /// Re-read the tracking file and the folder contents.
    pub fn refresh(&mut self) -> Result<()> {
        self.used = UsedFiles::load(self.used.path().to_path_buf());
        self.rescan()
    }

    fn rescan(&mut self) -> Result<()> {
        let names = list_audio_files(&self.folder, &self.extensions)?;
        self.entries = names
            .into_iter()
            .map(|name| LibraryEntry {
                used: self.used.contains(&name),
                name,
            })
            .collect();
        Ok(())
    }

    /// Record that a clip was exported from `name` and persist the tracking file.
    pub fn mark_used(&mut self, name: &str) -> Result<()> {
        self.used.insert(name);
        for entry in self.entries.iter_mut().filter(|e| e.name == name) {
            entry.used = true;
        }
        self.used.save()
    }

    pub fn path_of(&self, name: &str) -> PathBuf {
        self.folder.join(name)
    }

    /// Label under the file list, e.g. `"12 files (3 used)"`.
    ///
    /// The used count is the size of the tracking set, which may name files
    /// that have since been removed from the folder.
    pub fn file_count_label(&self) -> String {
        format!("{} files ({} used)", self.entries.len(), self.used.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"x").unwrap();
    }

    fn exts() -> Vec<String> {
        SplicerConfig::default().audio_extensions
    }

    #[test]
    fn lists_only_audio_sorted() {
        let tmp = TempDir::new().unwrap();
        for name in ["b.wav", "a.MP3", "notes.txt", "c.flac", ".used_files.json", "d.Ogg"] {
            touch(tmp.path(), name);
        }
        std::fs::create_dir(tmp.path().join("sub.wav")).unwrap();

        let files = list_audio_files(tmp.path(), &exts()).unwrap();
        assert_eq!(files, vec!["a.MP3", "b.wav", "c.flac", "d.Ogg"]);
    }

    #[test]
    fn missing_folder_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = list_audio_files(&tmp.path().join("missing"), &exts()).unwrap_err();
        assert!(matches!(err, SplicerError::Io { .. }));
    }

    #[test]
    fn suggested_name_uses_stem() {
        assert_eq!(suggested_output_name("001_fatiha.wav", "_spliced"), "001_fatiha_spliced");
        assert_eq!(suggested_output_name("take.2.flac", "_cut"), "take.2_cut");
    }

    #[test]
    fn listing_flags_used_files_and_counts() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.wav");
        touch(tmp.path(), "b.wav");
        std::fs::write(tmp.path().join(".used_files.json"), r#"["b.wav", "gone.wav"]"#).unwrap();

        let listing = FolderListing::open(tmp.path(), &SplicerConfig::default()).unwrap();
        assert_eq!(listing.entries.len(), 2);
        assert!(!listing.entries[0].used);
        assert!(listing.entries[1].used);
        assert_eq!(listing.file_count_label(), "2 files (2 used)");
    }

    #[test]
    fn mark_used_persists() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.wav");
        let config = SplicerConfig::default();

        let mut listing = FolderListing::open(tmp.path(), &config).unwrap();
        listing.mark_used("a.wav").unwrap();
        assert!(listing.entries[0].used);

        let reopened = FolderListing::open(tmp.path(), &config).unwrap();
        assert!(reopened.entries[0].used);
        assert_eq!(reopened.file_count_label(), "1 files (1 used)");
    }
}
