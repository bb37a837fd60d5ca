//! Audio Splicer Core — decoding, splicing, export and playback.
//!
//! This crate contains all business logic with zero UI dependencies.
//! The GUI crate drives it; nothing here knows about egui.
//!
//! # Modules
//!
//! - [`config`] — Persistent user settings (padding, extensions, last folders).
//! - [`model`] — Mono clips, sample-accurate selections, time formatting.
//! - [`splice`] — Cutting a selection out of a clip with optional silence padding.
//! - [`waveform`] — Min/max peak reduction for drawing long recordings.
//! - [`library`] — Source-folder listing and `.used_files.json` tracking.
//! - [`loader`] — Background decoding via Symphonia with progress reporting.
//! - [`export`] — WAV output naming and writing.
//! - [`playback`] — Audio output on the default device via CPAL.
pub mod config;
pub mod error;
pub mod export;
pub mod library;
pub mod loader;
pub mod model;
pub mod playback;
pub mod splice;
pub mod waveform;

pub use error::{Result, SplicerError};
