//! Load progress reporting — messages sent from the decode thread to the
//! UI thread via a crossbeam channel.

use crate::model::AudioClip;
use std::time::Duration;

/// Progress updates sent from the loader thread to the UI.
#[derive(Debug)]
pub enum LoadProgress {
    /// Periodic update while packets are decoded.
    Decoding { frames_decoded: u64 },
    /// Decoding finished; the clip is already mixed down to mono.
    Complete {
        clip: AudioClip,
        /// Channel count of the source file before the downmix.
        channels: u16,
        duration: Duration,
    },
    /// The file could not be opened or decoded.
    Failed { path: String, message: String },
    /// Load was cancelled (a newer file was selected).
    Cancelled,
}
