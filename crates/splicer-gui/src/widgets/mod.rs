//! UI widgets for Audio Splicer.

pub mod output_preview;
pub mod status_bar;
pub mod toolbar;
pub mod waveform;
