//! Data model for loaded audio.
//!
//! Re-exports the clip and selection types and the time formatting helpers.
pub mod clip;
pub mod selection;
pub mod time;

pub use clip::AudioClip;
pub use selection::Selection;
