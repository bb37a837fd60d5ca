//! Playback module — plays a mono buffer on the default output device.
//!
//! A CPAL `Stream` is not `Send` on every platform, so each playback gets a
//! dedicated `splicer-playback` thread that builds, owns and drops the
//! stream. The UI talks to it only through a [`PlaybackHandle`]:
//!
//! ```text
//! UI thread ──stop flag──────────────► playback thread (owns Stream)
//!     ▲                                      │
//!     │ event_rx (Started/Finished/...)      │ audio callback
//!     └──────────────────────────────────────┤ writes position atomic
//! ```
pub mod cursor;

use crate::error::{Result, SplicerError};
use cursor::PlaybackCursor;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, SizedSample, Stream, StreamConfig};
use crossbeam_channel::{Receiver, Sender};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, error, info};

/// How often the playback thread checks for stop / end of clip.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Time allowed for the device to drain its buffer after the last sample.
const DRAIN_DELAY: Duration = Duration::from_millis(80);

/// How long `start_playback` waits for the device to open.
const OPEN_TIMEOUT: Duration = Duration::from_secs(3);

/// Events sent from the playback thread to the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackEvent {
    /// The stream is running.
    Started { device: String, device_rate: u32 },
    /// The whole buffer was played.
    Finished,
    /// Playback was stopped via [`PlaybackHandle::stop`].
    Stopped,
    /// The stream reported an error and was closed.
    Error(String),
}

/// State shared between the handle, the playback thread and the audio callback.
struct Shared {
    stop: AtomicBool,
    active: AtomicBool,
    finished: AtomicBool,
    /// Current read position in source frames.
    position: AtomicUsize,
    stream_error: Mutex<Option<String>>,
}

/// Handle to a running playback. Dropping it stops the audio.
pub struct PlaybackHandle {
    /// Receiver for lifecycle events from the playback thread.
    pub event_rx: Receiver<PlaybackEvent>,
    shared: Arc<Shared>,
    sample_rate: u32,
    total_frames: usize,
    _thread: Option<thread::JoinHandle<()>>,
}

impl PlaybackHandle {
    /// Request playback to stop. Returns immediately.
    pub fn stop(&self) {
        self.shared.stop.store(true, Ordering::Relaxed);
    }

    /// True until the stream has been torn down.
    pub fn is_active(&self) -> bool {
        self.shared.active.load(Ordering::Relaxed)
    }

    /// Frames of the buffer played so far.
    pub fn position_frames(&self) -> usize {
        self.shared.position.load(Ordering::Relaxed)
    }

    /// Playback position in milliseconds from the start of the buffer.
    pub fn position_ms(&self) -> f64 {
        self.position_frames() as f64 / self.sample_rate.max(1) as f64 * 1000.0
    }

    /// Sample rate of the buffer being played.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn total_frames(&self) -> usize {
        self.total_frames
    }
}

impl Drop for PlaybackHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Start playing `samples` (mono, at `sample_rate`) on the default device.
///
/// Blocks until the device is open (or fails to open) so device errors are
/// reported synchronously.
pub fn start_playback(samples: Arc<[f32]>, sample_rate: u32) -> Result<PlaybackHandle> {
    let (event_tx, event_rx) = crossbeam_channel::bounded::<PlaybackEvent>(16);
    let (ready_tx, ready_rx) = crossbeam_channel::bounded::<std::result::Result<(), String>>(1);
    let shared = Arc::new(Shared {
        stop: AtomicBool::new(false),
        active: AtomicBool::new(true),
        finished: AtomicBool::new(false),
        position: AtomicUsize::new(0),
        stream_error: Mutex::new(None),
    });
    let total_frames = samples.len();
    let thread_shared = shared.clone();

    let thread = thread::Builder::new()
        .name("splicer-playback".into())
        .spawn(move || {
            run_playback(samples, sample_rate, &thread_shared, &event_tx, ready_tx);
            thread_shared.active.store(false, Ordering::Relaxed);
        })
        .map_err(|e| SplicerError::Playback(format!("failed to spawn playback thread: {e}")))?;

    match ready_rx.recv_timeout(OPEN_TIMEOUT) {
        Ok(Ok(())) => Ok(PlaybackHandle {
            event_rx,
            shared,
            sample_rate,
            total_frames,
            _thread: Some(thread),
        }),
        Ok(Err(message)) => Err(SplicerError::Playback(message)),
        Err(_) => {
            shared.stop.store(true, Ordering::Relaxed);
            Err(SplicerError::Playback(
                "audio device did not open in time".to_string(),
            ))
        }
    }
}

/// Body of the playback thread.
fn run_playback(
    samples: Arc<[f32]>,
    sample_rate: u32,
    shared: &Arc<Shared>,
    event_tx: &Sender<PlaybackEvent>,
    ready_tx: Sender<std::result::Result<(), String>>,
) {
    let (stream, device, device_rate) = match open_stream(samples, sample_rate, shared) {
        Ok(opened) => opened,
        Err(e) => {
            error!("Could not start playback: {e}");
            let _ = ready_tx.send(Err(e.to_string()));
            return;
        }
    };
    let _ = ready_tx.send(Ok(()));
    info!("Playing on {device} at {device_rate} Hz");
    let _ = event_tx.send(PlaybackEvent::Started {
        device,
        device_rate,
    });

    let event = loop {
        if shared.stop.load(Ordering::Relaxed) {
            break PlaybackEvent::Stopped;
        }
        if let Some(message) = shared.stream_error.lock().take() {
            break PlaybackEvent::Error(message);
        }
        if shared.finished.load(Ordering::Relaxed) {
            thread::sleep(DRAIN_DELAY);
            break PlaybackEvent::Finished;
        }
        thread::sleep(POLL_INTERVAL);
    };

    drop(stream);
    debug!("Playback ended: {event:?}");
    let _ = event_tx.send(event);
}

/// Open the default output device and start a stream fed by a cursor.
fn open_stream(
    samples: Arc<[f32]>,
    sample_rate: u32,
    shared: &Arc<Shared>,
) -> Result<(Stream, String, u32)> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| SplicerError::Playback("no output device available".to_string()))?;
    let device_name = device.name().unwrap_or_else(|_| "Unknown".to_string());

    let supported = choose_output_config(&device, sample_rate)?;
    let sample_format = supported.sample_format();
    let config: StreamConfig = supported.config();
    let device_rate = config.sample_rate.0;

    if device_rate != sample_rate {
        debug!("Device runs at {device_rate} Hz, converting from {sample_rate} Hz");
    }

    let cursor = PlaybackCursor::new(samples, sample_rate, device_rate);
    let stream = match sample_format {
        SampleFormat::F32 => build_stream::<f32>(&device, &config, cursor, shared.clone()),
        SampleFormat::I16 => build_stream::<i16>(&device, &config, cursor, shared.clone()),
        SampleFormat::U16 => build_stream::<u16>(&device, &config, cursor, shared.clone()),
        SampleFormat::I32 => build_stream::<i32>(&device, &config, cursor, shared.clone()),
        other => Err(SplicerError::Playback(format!(
            "unsupported device sample format {other:?}"
        ))),
    }?;

    stream
        .play()
        .map_err(|e| SplicerError::Playback(e.to_string()))?;
    Ok((stream, device_name, device_rate))
}

/// Prefer an f32 config at the clip's own rate, else the device default.
fn choose_output_config(
    device: &cpal::Device,
    sample_rate: u32,
) -> Result<cpal::SupportedStreamConfig> {
    let exact = device
        .supported_output_configs()
        .map_err(|e| SplicerError::Playback(e.to_string()))?
        .filter(|c| c.sample_format() == SampleFormat::F32)
        .find(|c| {
            sample_rate >= c.min_sample_rate().0 && sample_rate <= c.max_sample_rate().0
        })
        .map(|c| c.with_sample_rate(cpal::SampleRate(sample_rate)));

    match exact {
        Some(config) => Ok(config),
        None => device
            .default_output_config()
            .map_err(|e| SplicerError::Playback(e.to_string())),
    }
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &StreamConfig,
    mut cursor: PlaybackCursor,
    shared: Arc<Shared>,
) -> Result<Stream>
where
    T: SizedSample + FromSample<f32>,
{
    let channels = config.channels as usize;
    let error_shared = shared.clone();

    device
        .build_output_stream(
            config,
            move |data: &mut [T], _info: &cpal::OutputCallbackInfo| {
                cursor.fill(data, channels, |s| T::from_sample(s));
                shared.position.store(cursor.position(), Ordering::Relaxed);
                if cursor.is_finished() {
                    shared.finished.store(true, Ordering::Relaxed);
                }
            },
            move |err| {
                error!("Playback stream error: {err}");
                *error_shared.stream_error.lock() = Some(err.to_string());
            },
            None,
        )
        .map_err(|e| SplicerError::Playback(e.to_string()))
}
