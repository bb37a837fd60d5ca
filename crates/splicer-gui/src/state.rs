//! Application state management.
//!
//! Centralises all mutable state that the UI reads and writes. The loader
//! and playback threads report over channels; `process_load_messages()` and
//! `process_playback_messages()` apply their results once per frame.
//!
//! Every operation here runs without a window or an audio device, which is
//! what the `e2e_state` tests rely on.
use chrono::{DateTime, Local};
use compact_str::CompactString;
use splicer_core::config::SplicerConfig;
use splicer_core::export::{self, ExportRequest};
use splicer_core::library::{suggested_output_name, FolderListing};
use splicer_core::loader::progress::LoadProgress;
use splicer_core::loader::{self, LoadHandle};
use splicer_core::model::{AudioClip, Selection};
use splicer_core::playback::{self, PlaybackEvent, PlaybackHandle};
use splicer_core::splice::{self, OutputLayout, SpliceOptions};
use splicer_core::waveform::{self, Peaks, PREVIEW_HEADROOM, VIEW_HEADROOM};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// The current phase of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    /// No clip loaded yet.
    Empty,
    /// A file is decoding; the previous clip (if any) stays on screen.
    Loading,
    /// A clip is loaded and can be selected, played and saved.
    Ready,
}

/// What the current playback is playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackKind {
    Original,
    Selection,
    /// The selection framed by silence, regardless of the padding checkbox.
    Padded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// A modal message box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// One row of the recent-exports table.
#[derive(Debug, Clone)]
pub struct ExportRecord {
    pub path: PathBuf,
    pub duration_ms: f64,
    pub saved_at: DateTime<Local>,
}

/// Min/max peaks cached for one column count.
#[derive(Debug, Default)]
pub struct PeakCache {
    columns: usize,
    peaks: Peaks,
}

impl PeakCache {
    /// Peaks of `samples` at `columns` resolution, recomputed only when the
    /// column count changes.
    pub fn get(&mut self, samples: &[f32], columns: usize) -> &Peaks {
        if self.columns != columns {
            self.peaks = waveform::compute_peaks(samples, columns);
            self.columns = columns;
        }
        &self.peaks
    }

    fn invalidate(&mut self) {
        self.columns = 0;
        self.peaks = Peaks::default();
    }
}

/// The spliced output as it would be saved right now.
#[derive(Debug)]
pub struct OutputPreview {
    pub samples: Vec<f32>,
    pub layout: OutputLayout,
    /// Vertical half-range for drawing.
    pub limit: f32,
    cache: PeakCache,
}

impl OutputPreview {
    pub fn peaks(&mut self, columns: usize) -> &Peaks {
        self.cache.get(&self.samples, columns)
    }
}

/// Playback in progress and how its buffer maps onto the source clip.
struct ActivePlayback {
    handle: PlaybackHandle,
    kind: PlaybackKind,
    /// Source-clip time at which the played audio begins.
    source_offset_ms: f64,
    /// Silence played before the audio starts.
    lead_ms: f64,
    /// Length of the played audio excluding silence.
    audio_ms: f64,
}

/// Maximum number of loader messages drained from the channel per frame.
const MAX_MESSAGES_PER_FRAME: usize = 64;

/// Maximum rows kept in the recent-exports table.
pub const MAX_RECENT_EXPORTS: usize = 50;

/// Status bar text before anything has happened.
pub const READY_STATUS: &str = "Ready - Select a folder to load audio files";

/// All application state.
pub struct AppState {
    pub config: SplicerConfig,

    // ── Folders ────────────────────────────────────────
    pub source_folder: Option<PathBuf>,
    pub output_folder: Option<PathBuf>,
    pub listing: Option<FolderListing>,

    // ── Clip ───────────────────────────────────────────
    pub phase: AppPhase,
    load_handle: Option<LoadHandle>,
    /// File being decoded right now.
    pub loading_file: Option<CompactString>,
    pub load_frames_decoded: u64,
    /// File whose clip is on screen.
    pub current_file: Option<CompactString>,
    pub clip: Option<AudioClip>,
    /// Channel count of the current file before the downmix.
    pub clip_channels: u16,
    /// Vertical half-range for the main waveform.
    pub view_limit: f32,
    view_peaks: PeakCache,

    // ── Selection & output ─────────────────────────────
    pub selection: Option<Selection>,
    pub padding_enabled: bool,
    preview: Option<OutputPreview>,
    /// Output name without extension.
    pub filename: String,

    // ── Playback ───────────────────────────────────────
    playback: Option<ActivePlayback>,

    // ── Save ───────────────────────────────────────────
    /// Existing file awaiting an overwrite decision.
    pub pending_overwrite: Option<PathBuf>,
    /// Newest first, capped at `MAX_RECENT_EXPORTS`.
    pub recent_exports: Vec<ExportRecord>,

    // ── UI state ───────────────────────────────────────
    pub status: String,
    pub notice: Option<Notice>,
    pub show_about: bool,
    /// `true` = dark mode (default), `false` = light mode.
    pub dark_mode: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SplicerConfig::default())
    }
}

impl AppState {
    /// Create initial application state from persisted settings.
    ///
    /// Folders are not opened here; see `SplicerState::build`.
    pub fn new(config: SplicerConfig) -> Self {
        Self {
            padding_enabled: config.padding_enabled,
            dark_mode: config.dark_mode,
            config,
            source_folder: None,
            output_folder: None,
            listing: None,
            phase: AppPhase::Empty,
            load_handle: None,
            loading_file: None,
            load_frames_decoded: 0,
            current_file: None,
            clip: None,
            clip_channels: 0,
            view_limit: 1.0,
            view_peaks: PeakCache::default(),
            selection: None,
            preview: None,
            filename: String::new(),
            playback: None,
            pending_overwrite: None,
            recent_exports: Vec::new(),
            status: READY_STATUS.to_string(),
            notice: None,
            show_about: false,
        }
    }

    // ── Folders ────────────────────────────────────────────────────────────

    /// Open a source folder: tracking file first, then the listing.
    pub fn set_source_folder(&mut self, path: PathBuf) {
        match FolderListing::open(&path, &self.config) {
            Ok(listing) => {
                self.status = format!("Loaded {} audio files from folder", listing.entries.len());
                self.listing = Some(listing);
                self.source_folder = Some(path);
            }
            Err(e) => {
                warn!("Could not open {}: {e}", path.display());
                self.notice = Some(Notice::error(
                    "Error",
                    format!("Could not open folder:\n{e}"),
                ));
            }
        }
    }

    /// Re-read the source folder and its tracking file.
    pub fn refresh_listing(&mut self) {
        let Some(listing) = self.listing.as_mut() else {
            return;
        };
        if let Err(e) = listing.refresh() {
            warn!("Could not refresh {}: {e}", listing.folder.display());
            self.notice = Some(Notice::error(
                "Error",
                format!("Could not read folder:\n{e}"),
            ));
        }
    }

    pub fn set_output_folder(&mut self, path: PathBuf) {
        info!("Output folder set to {}", path.display());
        self.pending_overwrite = None;
        self.output_folder = Some(path);
    }

    pub fn file_count_label(&self) -> String {
        self.listing
            .as_ref()
            .map_or_else(|| "0 files (0 used)".to_string(), |l| l.file_count_label())
    }

    // ── Loading ────────────────────────────────────────────────────────────

    /// Start decoding `name` from the source folder in the background.
    ///
    /// Stops playback and supersedes any load still in flight. The current
    /// clip stays visible until the new one arrives.
    pub fn select_file(&mut self, name: &str) {
        let Some(listing) = self.listing.as_ref() else {
            return;
        };
        let path = listing.path_of(name);

        self.stop_playback();
        if let Some(old) = self.load_handle.take() {
            old.cancel();
        }

        self.pending_overwrite = None;
        self.loading_file = Some(CompactString::new(name));
        self.load_frames_decoded = 0;
        self.phase = AppPhase::Loading;
        self.load_handle = Some(loader::start_load(path));
    }

    /// Drain loader messages. Returns `true` if anything changed.
    pub fn process_load_messages(&mut self) -> bool {
        let mut changed = false;
        for _ in 0..MAX_MESSAGES_PER_FRAME {
            let msg = match self.load_handle.as_ref() {
                Some(handle) => handle.progress_rx.try_recv(),
                None => break,
            };
            match msg {
                Ok(LoadProgress::Decoding { frames_decoded }) => {
                    self.load_frames_decoded = frames_decoded;
                    changed = true;
                }
                Ok(LoadProgress::Complete { clip, channels, .. }) => {
                    self.load_handle = None;
                    self.install_clip(clip, channels);
                    return true;
                }
                Ok(LoadProgress::Failed { message, .. }) => {
                    self.load_handle = None;
                    self.load_failed(&message);
                    return true;
                }
                Ok(LoadProgress::Cancelled) => {
                    self.load_handle = None;
                    self.loading_file = None;
                    self.phase = self.settled_phase();
                    return true;
                }
                Err(crossbeam_channel::TryRecvError::Empty) => break,
                Err(crossbeam_channel::TryRecvError::Disconnected) => {
                    self.load_handle = None;
                    self.load_failed("loader stopped unexpectedly");
                    return true;
                }
            }
        }
        changed
    }

    fn install_clip(&mut self, clip: AudioClip, channels: u16) {
        let name = self.loading_file.take().unwrap_or_default();

        self.view_limit = waveform::amplitude_limit(clip.samples(), VIEW_HEADROOM);
        self.view_peaks.invalidate();
        self.clip = Some(clip);
        self.clip_channels = channels;
        self.selection = None;
        self.preview = None;
        self.pending_overwrite = None;
        self.filename = suggested_output_name(&name, &self.config.output_suffix);
        self.status = format!("Loaded: {name}");
        self.current_file = Some(name);
        self.phase = AppPhase::Ready;
    }

    fn load_failed(&mut self, message: &str) {
        let name = self.loading_file.take().unwrap_or_default();
        warn!("Could not load {name}: {message}");
        self.notice = Some(Notice::warning(
            "Error",
            format!("Could not load audio file: {name}"),
        ));
        self.phase = self.settled_phase();
    }

    fn settled_phase(&self) -> AppPhase {
        if self.clip.is_some() {
            AppPhase::Ready
        } else {
            AppPhase::Empty
        }
    }

    /// Peaks of the current clip at `columns` resolution.
    pub fn view_peaks(&mut self, columns: usize) -> Option<&Peaks> {
        let clip = self.clip.as_ref()?;
        Some(self.view_peaks.get(clip.samples(), columns))
    }

    // ── Selection & output ─────────────────────────────────────────────────

    /// Select the span between two times on the clip, in either order.
    ///
    /// A span covering no samples clears the selection.
    pub fn set_selection_ms(&mut self, a_ms: f64, b_ms: f64) {
        let Some(clip) = self.clip.as_ref() else {
            return;
        };
        match Selection::from_ms(a_ms, b_ms, clip) {
            Some(selection) => {
                self.status = format!(
                    "Selected: {:.1} - {:.1} ms ({:.1} ms)",
                    selection.start_ms,
                    selection.end_ms,
                    selection.duration_ms()
                );
                self.selection = Some(selection);
                self.preview = None;
                self.pending_overwrite = None;
            }
            None => self.clear_selection(),
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.preview = None;
        self.pending_overwrite = None;
    }

    pub fn set_padding_enabled(&mut self, enabled: bool) {
        if self.padding_enabled != enabled {
            self.padding_enabled = enabled;
            self.preview = None;
            self.pending_overwrite = None;
        }
    }

    /// Options used for the preview and for saving.
    pub fn splice_options(&self) -> SpliceOptions {
        if self.padding_enabled {
            SpliceOptions::padded(self.config.padding_ms)
        } else {
            SpliceOptions::unpadded()
        }
    }

    /// The audio that would be saved right now, and its layout.
    pub fn output_preview(&self) -> Option<(Vec<f32>, OutputLayout)> {
        let clip = self.clip.as_ref()?;
        let selection = self.selection.as_ref()?;
        let options = self.splice_options();
        Some((
            splice::splice(clip, selection, options),
            OutputLayout::new(selection, options),
        ))
    }

    /// Cached preview for drawing, rebuilt after the selection or padding changes.
    pub fn preview_mut(&mut self) -> Option<&mut OutputPreview> {
        if self.preview.is_none() {
            let (samples, layout) = self.output_preview()?;
            let limit = waveform::amplitude_limit(&samples, PREVIEW_HEADROOM);
            self.preview = Some(OutputPreview {
                samples,
                layout,
                limit,
                cache: PeakCache::default(),
            });
        }
        self.preview.as_mut()
    }

    pub fn can_play_original(&self) -> bool {
        self.clip.is_some()
    }

    pub fn can_play_selection(&self) -> bool {
        self.clip.is_some() && self.selection.is_some()
    }

    pub fn can_save(&self) -> bool {
        self.can_play_selection() && self.output_folder.is_some()
    }

    // ── Playback ───────────────────────────────────────────────────────────

    pub fn play_original(&mut self) {
        let Some(clip) = self.clip.as_ref() else {
            return;
        };
        let samples = clip.shared_samples();
        let (rate, duration) = (clip.sample_rate(), clip.duration_ms());
        self.start_playback(PlaybackKind::Original, samples, rate, 0.0, 0.0, duration);
    }

    pub fn play_selection(&mut self) {
        let (Some(clip), Some(selection)) = (self.clip.as_ref(), self.selection) else {
            return;
        };
        let samples: Arc<[f32]> = Arc::from(clip.slice(selection.range()));
        let rate = clip.sample_rate();
        self.start_playback(
            PlaybackKind::Selection,
            samples,
            rate,
            selection.start_sample_ms(),
            0.0,
            selection.duration_ms(),
        );
    }

    /// Play the selection with padding, whether or not padding is enabled
    /// for saving.
    pub fn play_padded(&mut self) {
        let (Some(clip), Some(selection)) = (self.clip.as_ref(), self.selection) else {
            return;
        };
        let options = SpliceOptions::padded(self.config.padding_ms);
        let layout = OutputLayout::new(&selection, options);
        let samples: Arc<[f32]> = splice::splice(clip, &selection, options).into();
        let rate = clip.sample_rate();
        self.start_playback(
            PlaybackKind::Padded,
            samples,
            rate,
            selection.start_sample_ms(),
            layout.lead_ms(),
            layout.audio_ms(),
        );
    }

    fn start_playback(
        &mut self,
        kind: PlaybackKind,
        samples: Arc<[f32]>,
        sample_rate: u32,
        source_offset_ms: f64,
        lead_ms: f64,
        audio_ms: f64,
    ) {
        self.stop_playback();
        match playback::start_playback(samples, sample_rate) {
            Ok(handle) => {
                self.playback = Some(ActivePlayback {
                    handle,
                    kind,
                    source_offset_ms,
                    lead_ms,
                    audio_ms,
                });
                self.status = "Playing...".to_string();
            }
            Err(e) => {
                warn!("Playback failed: {e}");
                self.notice = Some(Notice::error("Error", format!("Could not play audio:\n{e}")));
            }
        }
    }

    pub fn stop_playback(&mut self) {
        if let Some(active) = self.playback.take() {
            active.handle.stop();
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_some()
    }

    pub fn playback_kind(&self) -> Option<PlaybackKind> {
        self.playback.as_ref().map(|p| p.kind)
    }

    /// Drain playback events. Returns `true` if anything changed.
    pub fn process_playback_messages(&mut self) -> bool {
        let mut changed = false;
        loop {
            let event = match self.playback.as_ref() {
                Some(active) => active.handle.event_rx.try_recv(),
                None => break,
            };
            match event {
                Ok(PlaybackEvent::Started { .. }) => changed = true,
                Ok(PlaybackEvent::Finished) => {
                    self.playback = None;
                    self.status = "Playback finished".to_string();
                    return true;
                }
                Ok(PlaybackEvent::Stopped) => {
                    self.playback = None;
                    return true;
                }
                Ok(PlaybackEvent::Error(message)) => {
                    self.playback = None;
                    self.notice = Some(Notice::error(
                        "Error",
                        format!("Playback error:\n{message}"),
                    ));
                    return true;
                }
                Err(crossbeam_channel::TryRecvError::Empty) => break,
                Err(crossbeam_channel::TryRecvError::Disconnected) => {
                    self.playback = None;
                    return true;
                }
            }
        }
        changed
    }

    /// Where the playback is on the source clip's timeline, in milliseconds.
    ///
    /// `None` while nothing plays or while padding silence plays.
    pub fn playback_position_ms(&self) -> Option<f64> {
        let active = self.playback.as_ref()?;
        source_position_ms(
            active.handle.position_ms(),
            active.source_offset_ms,
            active.lead_ms,
            active.audio_ms,
        )
    }

    // ── Save ───────────────────────────────────────────────────────────────

    /// Validate the save inputs and write the file, or ask before
    /// replacing an existing one.
    pub fn request_save(&mut self) {
        let Some(folder) = self.output_folder.clone() else {
            self.notice = Some(Notice::warning("Error", "Please select an output folder first."));
            return;
        };
        if self.clip.is_none() || self.selection.is_none() {
            self.notice = Some(Notice::warning(
                "Error",
                "Please select a portion of the audio first.",
            ));
            return;
        }
        if self.filename.trim().is_empty() {
            self.notice = Some(Notice::warning("Error", "Please enter a filename."));
            return;
        }
        let path = match export::output_path(&folder, &self.filename) {
            Ok(path) => path,
            Err(e) => {
                self.notice = Some(Notice::warning("Error", e.to_string()));
                return;
            }
        };
        if path.exists() {
            self.pending_overwrite = Some(path);
            return;
        }
        self.write_output(false);
    }

    /// Question shown while `pending_overwrite` is set.
    pub fn overwrite_question(&self) -> Option<String> {
        let path = self.pending_overwrite.as_ref()?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Some(format!("File '{name}' already exists. Overwrite?"))
    }

    /// Replace the file the question was about.
    ///
    /// If the filename or output folder changed while the question was
    /// open, the save is re-validated instead, which asks again when the
    /// new target exists too.
    pub fn confirm_overwrite(&mut self) {
        let Some(confirmed) = self.pending_overwrite.take() else {
            return;
        };
        if self.save_target().as_deref() == Some(confirmed.as_path()) {
            self.write_output(true);
        } else {
            self.request_save();
        }
    }

    pub fn cancel_overwrite(&mut self) {
        self.pending_overwrite = None;
    }

    /// Where `Save` would write right now, if the inputs are valid.
    fn save_target(&self) -> Option<PathBuf> {
        let folder = self.output_folder.as_ref()?;
        export::output_path(folder, &self.filename).ok()
    }

    fn write_output(&mut self, overwrite: bool) {
        let (Some(folder), Some(clip), Some(selection)) =
            (self.output_folder.clone(), self.clip.as_ref(), self.selection)
        else {
            return;
        };
        let request = ExportRequest {
            output_folder: folder,
            filename: self.filename.clone(),
            overwrite,
        };

        let outcome = match export::export_clip(&request, clip, &selection, self.splice_options()) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Save failed: {e}");
                self.notice = Some(Notice::error("Error", format!("Failed to save audio:\n{e}")));
                return;
            }
        };

        let shown = outcome.path.display().to_string();
        let tracking = self.mark_current_used();
        self.refresh_listing();

        self.status = format!("Saved: {shown}");
        self.notice = Some(match tracking {
            Ok(()) => Notice::info("Success", format!("Audio saved to:\n{shown}")),
            Err(e) => Notice::warning(
                "Warning",
                format!("Audio saved to:\n{shown}\n\nCould not update used-file tracking:\n{e}"),
            ),
        });

        self.record_export(outcome.path, outcome.duration_ms);
    }

    /// Add a row to the recent-exports table, newest first.
    fn record_export(&mut self, path: PathBuf, duration_ms: f64) {
        self.recent_exports.insert(
            0,
            ExportRecord {
                path,
                duration_ms,
                saved_at: Local::now(),
            },
        );
        self.recent_exports.truncate(MAX_RECENT_EXPORTS);
    }

    fn mark_current_used(&mut self) -> splicer_core::Result<()> {
        match (self.listing.as_mut(), self.current_file.as_deref()) {
            (Some(listing), Some(name)) => listing.mark_used(name),
            _ => Ok(()),
        }
    }

    /// Whether `name` in the listing has already been used.
    pub fn is_used(&self, name: &str) -> bool {
        self.listing
            .as_ref()
            .is_some_and(|l| l.used.contains(name))
    }

    // ── Lifecycle ──────────────────────────────────────────────────────────

    /// Stop background work and return the settings to persist.
    pub fn shutdown(&mut self) -> SplicerConfig {
        self.stop_playback();
        if let Some(handle) = self.load_handle.take() {
            handle.cancel();
        }
        let mut config = self.config.clone();
        config.last_source_folder = self.source_folder.clone();
        config.last_output_folder = self.output_folder.clone();
        config.padding_enabled = self.padding_enabled;
        config.dark_mode = self.dark_mode;
        config
    }

    /// Source folder path for display, if one is open.
    pub fn source_folder_display(&self) -> Option<String> {
        self.source_folder.as_deref().map(display_path)
    }

    pub fn output_folder_display(&self) -> Option<String> {
        self.output_folder.as_deref().map(display_path)
    }
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}

/// Map a position in the played buffer onto the source clip.
///
/// The buffer is `lead_ms` of silence followed by `audio_ms` of audio that
/// starts at `source_offset_ms` in the clip. Positions inside the silence
/// have no source time.
fn source_position_ms(
    played_ms: f64,
    source_offset_ms: f64,
    lead_ms: f64,
    audio_ms: f64,
) -> Option<f64> {
    let into_audio = played_ms - lead_ms;
    if into_audio < 0.0 || into_audio > audio_ms {
        return None;
    }
    Some(source_offset_ms + into_audio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_maps_onto_source_timeline() {
        // Whole clip: the buffer is the clip.
        assert_eq!(source_position_ms(0.0, 0.0, 0.0, 1_000.0), Some(0.0));
        assert_eq!(source_position_ms(420.0, 0.0, 0.0, 1_000.0), Some(420.0));
        // Selection starting at 250 ms.
        assert_eq!(source_position_ms(100.0, 250.0, 0.0, 500.0), Some(350.0));
    }

    #[test]
    fn padding_silence_has_no_position() {
        // 100 ms lead, 500 ms audio from 250 ms, 100 ms tail.
        assert_eq!(source_position_ms(50.0, 250.0, 100.0, 500.0), None);
        assert_eq!(source_position_ms(100.0, 250.0, 100.0, 500.0), Some(250.0));
        assert_eq!(source_position_ms(350.0, 250.0, 100.0, 500.0), Some(500.0));
        assert_eq!(source_position_ms(600.0, 250.0, 100.0, 500.0), Some(750.0));
        assert_eq!(source_position_ms(650.0, 250.0, 100.0, 500.0), None);
    }

    #[test]
    fn recent_exports_keep_newest_first() {
        let mut state = AppState::default();
        for i in 0..MAX_RECENT_EXPORTS + 5 {
            state.record_export(PathBuf::from(format!("clip_{i}.wav")), 100.0);
        }
        assert_eq!(state.recent_exports.len(), MAX_RECENT_EXPORTS);
        assert_eq!(
            state.recent_exports[0].path,
            PathBuf::from(format!("clip_{}.wav", MAX_RECENT_EXPORTS + 4))
        );
        assert_eq!(
            state.recent_exports[MAX_RECENT_EXPORTS - 1].path,
            PathBuf::from("clip_5.wav")
        );
    }
}
