//! Loader module — decodes a source file on a background thread.
//!
//! The UI never blocks on decoding: [`start_load`] returns a [`LoadHandle`]
//! at once and the decoded, mono-mixed [`AudioClip`] arrives later as a
//! [`LoadProgress::Complete`] message.
pub mod decode;
pub mod progress;

use crate::error::SplicerError;
use crate::model::AudioClip;
use progress::LoadProgress;

use crossbeam_channel::Receiver;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{info, warn};

/// Maximum number of progress messages that may queue up in the channel.
///
/// `Decoding` updates are sent with `try_send` and dropped when the queue is
/// full; only the final message uses a blocking send.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 64;

/// Frames between two `Decoding` updates.
const PROGRESS_INTERVAL_FRAMES: u64 = 200_000;

/// Handle to a running or completed load.
pub struct LoadHandle {
    /// Receiver for progress updates from the loader thread.
    pub progress_rx: Receiver<LoadProgress>,
    path: PathBuf,
    cancel_flag: Arc<AtomicBool>,
    _thread: Option<thread::JoinHandle<()>>,
}

impl LoadHandle {
    /// Request the load to stop as soon as possible.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }

    /// The file being loaded.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Start decoding `path` on a background thread.
pub fn start_load(path: PathBuf) -> LoadHandle {
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<LoadProgress>(PROGRESS_CHANNEL_CAPACITY);
    let cancel_flag = Arc::new(AtomicBool::new(false));
    let cancel_clone = cancel_flag.clone();
    let thread_path = path.clone();

    let thread = thread::Builder::new()
        .name("splicer-loader".into())
        .spawn(move || {
            let start = Instant::now();
            info!("Loading {}", thread_path.display());

            let mut last_report = 0u64;
            let result = decode::decode_file(&thread_path, &cancel_clone, |frames| {
                if frames - last_report >= PROGRESS_INTERVAL_FRAMES {
                    last_report = frames;
                    let _ = progress_tx.try_send(LoadProgress::Decoding {
                        frames_decoded: frames,
                    });
                }
            });

            let msg = match result {
                Ok(decoded) => {
                    let mono = decode::downmix_to_mono(&decoded.samples, decoded.channels);
                    let clip = AudioClip::new(mono, decoded.sample_rate);
                    let duration = start.elapsed();
                    info!(
                        "Loaded {} ({:.1} ms of audio, {} ch) in {:.0?}",
                        thread_path.display(),
                        clip.duration_ms(),
                        decoded.channels,
                        duration
                    );
                    LoadProgress::Complete {
                        clip,
                        channels: decoded.channels,
                        duration,
                    }
                }
                Err(SplicerError::Cancelled) => {
                    info!("Load of {} cancelled", thread_path.display());
                    LoadProgress::Cancelled
                }
                Err(e) => {
                    warn!("Error loading {}: {e}", thread_path.display());
                    LoadProgress::Failed {
                        path: thread_path.to_string_lossy().into_owned(),
                        message: e.to_string(),
                    }
                }
            };
            let _ = progress_tx.send(msg);
        })
        .expect("failed to spawn loader thread");

    LoadHandle {
        progress_rx,
        path,
        cancel_flag,
        _thread: Some(thread),
    }
}
