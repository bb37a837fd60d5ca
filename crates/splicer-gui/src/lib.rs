//! Audio Splicer GUI — egui-based desktop frontend.
//!
//! This crate contains all UI code. Decoding, splicing, export and playback
//! live in `splicer-core`.
pub mod app;
pub mod icon;
pub mod panels;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::{SplicerApp, SplicerState};
