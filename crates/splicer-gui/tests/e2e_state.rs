//! End-to-end tests for `AppState`, the GUI application state machine.
//!
//! These drive the real folder listing, loader thread and WAV export
//! without an egui window and without an audio device, so they are fast
//! and deterministic. Playback is the one area not exercised here since it
//! needs an output device.
use splicer_core::config::SplicerConfig;
use splicer_gui::state::{AppPhase, AppState, NoticeKind, READY_STATUS};
use splicer_gui::SplicerState;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Write one second of a constant 16-bit mono signal at 8 kHz.
fn write_tone(path: &Path, value: i16) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 8_000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    for _ in 0..8_000 {
        writer.write_sample(value).unwrap();
    }
    writer.finalize().unwrap();
}

/// Source folder with two good recordings, one broken file and a stray text file.
fn make_source() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_tone(&tmp.path().join("001.wav"), 16_384);
    write_tone(&tmp.path().join("002.wav"), 8_192);
    std::fs::write(tmp.path().join("broken.wav"), b"not audio").unwrap();
    std::fs::write(tmp.path().join("notes.txt"), b"ignore me").unwrap();
    tmp
}

/// Pump `process_load_messages()` until the phase leaves `Loading`.
fn pump_until_loaded(state: &mut AppState) {
    let deadline = std::time::Instant::now() + Duration::from_secs(30);
    while state.phase == AppPhase::Loading {
        assert!(
            std::time::Instant::now() < deadline,
            "load did not finish within 30 seconds"
        );
        state.process_load_messages();
        std::thread::sleep(Duration::from_millis(5));
    }
}

/// State with `source` opened and `name` loaded.
fn loaded_state(source: &Path, name: &str) -> AppState {
    let mut state = AppState::new(SplicerConfig::default());
    state.set_source_folder(source.to_path_buf());
    state.select_file(name);
    pump_until_loaded(&mut state);
    state
}

fn notice_message(state: &AppState) -> &str {
    state.notice.as_ref().map(|n| n.message.as_str()).unwrap_or("")
}

// ── Folders ───────────────────────────────────────────────────────────────────

#[test]
fn initial_state_is_empty() {
    let state = AppState::new(SplicerConfig::default());
    assert_eq!(state.phase, AppPhase::Empty);
    assert_eq!(state.status, READY_STATUS);
    assert_eq!(state.file_count_label(), "0 files (0 used)");
    assert!(state.padding_enabled);
    assert!(!state.can_play_original());
    assert!(!state.can_save());
}

#[test]
fn opening_a_folder_lists_audio_files() {
    let source = make_source();
    let mut state = AppState::new(SplicerConfig::default());
    state.set_source_folder(source.path().to_path_buf());

    assert_eq!(state.status, "Loaded 3 audio files from folder");
    let names: Vec<&str> = state
        .listing
        .as_ref()
        .unwrap()
        .entries
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, vec!["001.wav", "002.wav", "broken.wav"]);
    assert_eq!(state.file_count_label(), "3 files (0 used)");
}

#[test]
fn missing_folder_raises_error_notice() {
    let tmp = TempDir::new().unwrap();
    let mut state = AppState::new(SplicerConfig::default());
    state.set_source_folder(tmp.path().join("gone"));

    assert!(state.listing.is_none());
    assert!(state.source_folder.is_none());
    assert_eq!(state.notice.as_ref().unwrap().kind, NoticeKind::Error);
}

// ── Loading ───────────────────────────────────────────────────────────────────

#[test]
fn selecting_a_file_loads_it_in_the_background() {
    let source = make_source();
    let mut state = AppState::new(SplicerConfig::default());
    state.set_source_folder(source.path().to_path_buf());
    state.select_file("001.wav");
    assert_eq!(state.phase, AppPhase::Loading);

    pump_until_loaded(&mut state);
    assert_eq!(state.phase, AppPhase::Ready);
    assert_eq!(state.current_file.as_deref(), Some("001.wav"));
    assert_eq!(state.status, "Loaded: 001.wav");
    assert_eq!(state.filename, "001_spliced");

    let clip = state.clip.as_ref().unwrap();
    assert_eq!(clip.sample_rate(), 8_000);
    assert_eq!(clip.len(), 8_000);
    assert!((state.view_limit - 0.55).abs() < 1e-3);
    assert!(state.can_play_original());
    assert!(!state.can_play_selection());
}

#[test]
fn broken_file_without_previous_clip_returns_to_empty() {
    let source = make_source();
    let mut state = AppState::new(SplicerConfig::default());
    state.set_source_folder(source.path().to_path_buf());
    state.select_file("broken.wav");
    pump_until_loaded(&mut state);

    assert_eq!(state.phase, AppPhase::Empty);
    assert!(state.clip.is_none());
    let notice = state.notice.as_ref().unwrap();
    assert_eq!(notice.kind, NoticeKind::Warning);
    assert_eq!(notice.message, "Could not load audio file: broken.wav");
}

#[test]
fn broken_file_keeps_previous_clip_and_selection() {
    let source = make_source();
    let mut state = loaded_state(source.path(), "001.wav");
    state.set_selection_ms(100.0, 300.0);

    state.select_file("broken.wav");
    pump_until_loaded(&mut state);

    assert_eq!(state.phase, AppPhase::Ready);
    assert_eq!(state.current_file.as_deref(), Some("001.wav"));
    assert!(state.selection.is_some());
    assert_eq!(state.filename, "001_spliced");
}

#[test]
fn newer_selection_supersedes_pending_load() {
    let source = make_source();
    let mut state = AppState::new(SplicerConfig::default());
    state.set_source_folder(source.path().to_path_buf());
    state.select_file("001.wav");
    state.select_file("002.wav");
    pump_until_loaded(&mut state);

    assert_eq!(state.current_file.as_deref(), Some("002.wav"));
    let first = state.clip.as_ref().unwrap().samples()[0];
    assert!((first - 0.25).abs() < 1e-3);
}

// ── Selection & preview ─────────────────────────────────────────────────────

#[test]
fn selection_updates_status_and_preview() {
    let source = make_source();
    let mut state = loaded_state(source.path(), "001.wav");

    state.set_selection_ms(750.0, 250.0);
    let selection = state.selection.unwrap();
    assert_eq!(selection.range(), 2_000..6_000);
    assert_eq!(state.status, "Selected: 250.0 - 750.0 ms (500.0 ms)");
    assert!(state.can_play_selection());

    let (samples, layout) = state.output_preview().unwrap();
    assert_eq!(samples.len(), 800 + 4_000 + 800);
    assert_eq!(layout.title(), "Total Output: 700.0ms (100ms + 500.0ms + 100ms)");

    state.set_padding_enabled(false);
    let preview = state.preview_mut().unwrap();
    assert_eq!(preview.samples.len(), 4_000);
    assert_eq!(preview.layout.title(), "Total Output: 500.0ms");
}

#[test]
fn zero_length_selection_clears() {
    let source = make_source();
    let mut state = loaded_state(source.path(), "001.wav");
    state.set_selection_ms(100.0, 300.0);
    state.set_selection_ms(400.0, 400.0);
    assert!(state.selection.is_none());
    assert!(state.output_preview().is_none());
    assert!(state.preview_mut().is_none());
}

#[test]
fn loading_a_new_clip_resets_selection() {
    let source = make_source();
    let mut state = loaded_state(source.path(), "001.wav");
    state.set_selection_ms(100.0, 300.0);

    state.select_file("002.wav");
    pump_until_loaded(&mut state);
    assert!(state.selection.is_none());
    assert_eq!(state.filename, "002_spliced");
}

#[test]
fn nothing_playing_has_no_position() {
    let source = make_source();
    let state = loaded_state(source.path(), "001.wav");
    assert!(!state.is_playing());
    assert!(state.playback_position_ms().is_none());
}

// ── Saving ────────────────────────────────────────────────────────────────────

#[test]
fn save_checks_run_in_order() {
    let source = make_source();
    let output = TempDir::new().unwrap();
    let mut state = loaded_state(source.path(), "001.wav");

    state.request_save();
    assert_eq!(notice_message(&state), "Please select an output folder first.");

    state.set_output_folder(output.path().to_path_buf());
    state.request_save();
    assert_eq!(notice_message(&state), "Please select a portion of the audio first.");

    state.set_selection_ms(100.0, 300.0);
    state.filename = "   ".to_string();
    state.request_save();
    assert_eq!(notice_message(&state), "Please enter a filename.");
    assert_eq!(state.notice.as_ref().unwrap().kind, NoticeKind::Warning);
    assert!(state.recent_exports.is_empty());
}

#[test]
fn save_writes_file_and_marks_source_used() {
    let source = make_source();
    let output = TempDir::new().unwrap();
    let mut state = loaded_state(source.path(), "001.wav");
    state.set_output_folder(output.path().to_path_buf());
    state.set_selection_ms(250.0, 750.0);
    assert!(state.can_save());

    state.request_save();
    let expected = output.path().join("001_spliced.wav");
    assert!(expected.exists());
    assert_eq!(state.status, format!("Saved: {}", expected.display()));
    let notice = state.notice.as_ref().unwrap();
    assert_eq!(notice.kind, NoticeKind::Info);
    assert_eq!(notice.message, format!("Audio saved to:\n{}", expected.display()));

    let reader = hound::WavReader::open(&expected).unwrap();
    assert_eq!(reader.spec().channels, 1);
    assert_eq!(reader.duration(), 5_600);

    assert!(state.is_used("001.wav"));
    assert_eq!(state.file_count_label(), "3 files (1 used)");
    let tracking = std::fs::read_to_string(source.path().join(".used_files.json")).unwrap();
    assert!(tracking.contains("001.wav"));

    assert_eq!(state.recent_exports.len(), 1);
    assert_eq!(state.recent_exports[0].path, expected);
    assert!((state.recent_exports[0].duration_ms - 700.0).abs() < 1e-9);
}

#[test]
fn existing_file_asks_before_overwriting() {
    let source = make_source();
    let output = TempDir::new().unwrap();
    let mut state = loaded_state(source.path(), "001.wav");
    state.set_output_folder(output.path().to_path_buf());
    state.set_selection_ms(250.0, 750.0);
    state.request_save();
    state.notice = None;

    state.set_padding_enabled(false);
    state.request_save();
    assert!(state.notice.is_none());
    assert_eq!(
        state.overwrite_question().as_deref(),
        Some("File '001_spliced.wav' already exists. Overwrite?")
    );

    state.cancel_overwrite();
    assert!(state.pending_overwrite.is_none());
    assert_eq!(state.recent_exports.len(), 1);

    state.request_save();
    state.confirm_overwrite();
    assert!(state.pending_overwrite.is_none());
    assert_eq!(state.recent_exports.len(), 2);
    let reader = hound::WavReader::open(output.path().join("001_spliced.wav")).unwrap();
    assert_eq!(reader.duration(), 4_000);
}

#[test]
fn typed_extension_is_not_doubled() {
    let source = make_source();
    let output = TempDir::new().unwrap();
    let mut state = loaded_state(source.path(), "001.wav");
    state.set_output_folder(output.path().to_path_buf());
    state.set_selection_ms(0.0, 100.0);
    state.filename = "verse.WAV".to_string();

    state.request_save();
    assert!(output.path().join("verse.wav").exists());
}

#[test]
fn confirming_overwrite_never_replaces_a_file_not_asked_about() {
    let source = make_source();
    let output = TempDir::new().unwrap();
    let mut state = loaded_state(source.path(), "001.wav");
    state.set_output_folder(output.path().to_path_buf());
    state.set_selection_ms(250.0, 750.0);
    state.filename = "a".to_string();
    state.request_save();
    std::fs::write(output.path().join("b.wav"), b"keep").unwrap();

    state.request_save();
    assert_eq!(state.pending_overwrite, Some(output.path().join("a.wav")));

    // The name changes while the question about a.wav is open.
    state.filename = "b".to_string();
    state.confirm_overwrite();
    assert_eq!(std::fs::read(output.path().join("b.wav")).unwrap(), b"keep");
    assert_eq!(
        state.overwrite_question().as_deref(),
        Some("File 'b.wav' already exists. Overwrite?")
    );
    assert_eq!(state.recent_exports.len(), 1);

    state.confirm_overwrite();
    assert!(state.pending_overwrite.is_none());
    assert_eq!(state.recent_exports.len(), 2);
    let reader = hound::WavReader::open(output.path().join("b.wav")).unwrap();
    assert_eq!(reader.duration(), 5_600);
}

#[test]
fn renamed_target_that_is_free_saves_without_asking() {
    let source = make_source();
    let output = TempDir::new().unwrap();
    let mut state = loaded_state(source.path(), "001.wav");
    state.set_output_folder(output.path().to_path_buf());
    state.set_selection_ms(250.0, 750.0);
    state.request_save();
    state.request_save();
    assert!(state.pending_overwrite.is_some());

    state.filename = "fresh".to_string();
    state.confirm_overwrite();
    assert!(state.pending_overwrite.is_none());
    assert!(output.path().join("fresh.wav").exists());
    assert_eq!(state.recent_exports[0].path, output.path().join("fresh.wav"));
}

#[test]
fn editing_inputs_drops_pending_overwrite_question() {
    let source = make_source();
    let output = TempDir::new().unwrap();
    let other = TempDir::new().unwrap();
    let mut state = loaded_state(source.path(), "001.wav");
    state.set_output_folder(output.path().to_path_buf());
    state.set_selection_ms(250.0, 750.0);
    state.request_save();

    state.request_save();
    state.set_selection_ms(0.0, 100.0);
    assert!(state.pending_overwrite.is_none());

    state.request_save();
    state.set_padding_enabled(false);
    assert!(state.pending_overwrite.is_none());

    state.request_save();
    state.set_output_folder(other.path().to_path_buf());
    assert!(state.pending_overwrite.is_none());

    state.set_output_folder(output.path().to_path_buf());
    state.request_save();
    state.clear_selection();
    assert!(state.pending_overwrite.is_none());

    // Confirming after the question was dropped writes nothing.
    state.confirm_overwrite();
    assert_eq!(state.recent_exports.len(), 1);
}

#[test]
fn write_failure_raises_error_notice() {
    let source = make_source();
    let output = TempDir::new().unwrap();
    let gone = output.path().join("out");
    std::fs::create_dir(&gone).unwrap();
    let mut state = loaded_state(source.path(), "001.wav");
    state.set_output_folder(gone.clone());
    state.set_selection_ms(250.0, 750.0);
    std::fs::remove_dir(&gone).unwrap();

    state.request_save();
    let notice = state.notice.as_ref().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(notice.message.starts_with("Failed to save audio:\n"));
    assert!(state.recent_exports.is_empty());
    assert!(!state.is_used("001.wav"));
}

#[test]
fn tracking_failure_keeps_audio_and_warns() {
    let source = make_source();
    // A directory where the tracking file should be cannot be written.
    std::fs::create_dir(source.path().join(".used_files.json")).unwrap();
    let output = TempDir::new().unwrap();
    let mut state = loaded_state(source.path(), "001.wav");
    state.set_output_folder(output.path().to_path_buf());
    state.set_selection_ms(250.0, 750.0);

    state.request_save();
    let expected = output.path().join("001_spliced.wav");
    assert!(expected.exists());
    assert_eq!(state.status, format!("Saved: {}", expected.display()));
    let notice = state.notice.as_ref().unwrap();
    assert_eq!(notice.kind, NoticeKind::Warning);
    assert!(notice
        .message
        .starts_with(&format!("Audio saved to:\n{}", expected.display())));
    assert_eq!(state.recent_exports.len(), 1);
}

#[test]
fn refresh_picks_up_new_files() {
    let source = make_source();
    let mut state = AppState::new(SplicerConfig::default());
    state.set_source_folder(source.path().to_path_buf());
    assert_eq!(state.file_count_label(), "3 files (0 used)");

    write_tone(&source.path().join("003.wav"), 4_096);
    state.refresh_listing();
    assert_eq!(state.file_count_label(), "4 files (0 used)");
    assert!(state.notice.is_none());
}

// ── Lifecycle ─────────────────────────────────────────────────────────────────

#[test]
fn build_restores_folders_that_still_exist() {
    let source = make_source();
    let output = TempDir::new().unwrap();
    let config = SplicerConfig {
        last_source_folder: Some(source.path().to_path_buf()),
        last_output_folder: Some(output.path().to_path_buf()),
        ..SplicerConfig::default()
    };

    let built = SplicerState::build(config, output.path().join("config.json"));
    let state = built.app_state();
    assert_eq!(state.source_folder.as_deref(), Some(source.path()));
    assert_eq!(state.output_folder.as_deref(), Some(output.path()));
    assert_eq!(state.file_count_label(), "3 files (0 used)");
}

#[test]
fn build_skips_folders_that_are_gone() {
    let tmp = TempDir::new().unwrap();
    let config = SplicerConfig {
        last_source_folder: Some(tmp.path().join("old_source")),
        last_output_folder: Some(tmp.path().join("old_output")),
        ..SplicerConfig::default()
    };

    let built = SplicerState::build(config, tmp.path().join("config.json"));
    let state = built.app_state();
    assert!(state.source_folder.is_none());
    assert!(state.listing.is_none());
    assert!(state.output_folder.is_none());
    assert!(state.notice.is_none());
    assert_eq!(state.status, READY_STATUS);
}

#[test]
fn shutdown_returns_settings_to_persist() {
    let source = make_source();
    let output = TempDir::new().unwrap();
    let mut state = loaded_state(source.path(), "001.wav");
    state.set_output_folder(output.path().to_path_buf());
    state.set_padding_enabled(false);
    state.dark_mode = false;

    let config = state.shutdown();
    assert_eq!(config.last_source_folder.as_deref(), Some(source.path()));
    assert_eq!(config.last_output_folder.as_deref(), Some(output.path()));
    assert!(!config.padding_enabled);
    assert!(!config.dark_mode);
}
