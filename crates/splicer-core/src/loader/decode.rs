//! Symphonia-backed decoding of any supported container to f32 samples.

use crate::error::{Result, SplicerError};
use std::fs::File;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use tracing::{debug, warn};

/// Interleaved decoder output.
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    pub samples: Vec<f32>,
    pub channels: u16,
    pub sample_rate: u32,
}

impl DecodedAudio {
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels.max(1) as usize
    }
}

/// Decode the first audio track of `path` into interleaved f32 samples.
///
/// `on_progress` is called with the running frame count after every packet.
/// Checks `cancel` between packets and returns [`SplicerError::Cancelled`]
/// once it is set.
pub fn decode_file(
    path: &Path,
    cancel: &AtomicBool,
    mut on_progress: impl FnMut(u64),
) -> Result<DecodedAudio> {
    let file = File::open(path).map_err(|e| SplicerError::io(path, e))?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
        .map_err(|e| SplicerError::UnsupportedFormat(e.to_string()))?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| SplicerError::UnsupportedFormat("no audio track found".to_string()))?;
    let track_id = track.id;

    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| SplicerError::UnsupportedFormat("unknown sample rate".to_string()))?;
    let mut channels = track.codec_params.channels.map(|c| c.count() as u16);

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| SplicerError::UnsupportedFormat(e.to_string()))?;

    let mut samples: Vec<f32> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;

    loop {
        if cancel.load(Ordering::Relaxed) {
            return Err(SplicerError::Cancelled);
        }

        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                break;
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => return Err(SplicerError::Decode(e.to_string())),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(decoded) => decoded,
            Err(SymphoniaError::DecodeError(e)) => {
                warn!("Skipping corrupt packet in {}: {e}", path.display());
                continue;
            }
            Err(e) => return Err(SplicerError::Decode(e.to_string())),
        };

        let spec = *decoded.spec();
        let ch = spec.channels.count() as u16;
        channels.get_or_insert(ch);

        let needs_new_buf = sample_buf
            .as_ref()
            .map_or(true, |buf| buf.capacity() < decoded.capacity() * ch as usize);
        if needs_new_buf {
            sample_buf = Some(SampleBuffer::new(decoded.capacity() as u64, spec));
        }

        if let Some(buf) = sample_buf.as_mut() {
            buf.copy_interleaved_ref(decoded);
            samples.extend_from_slice(buf.samples());
        }

        on_progress((samples.len() / ch.max(1) as usize) as u64);
    }

    let channels = channels.unwrap_or(1).max(1);
    if samples.len() < channels as usize {
        return Err(SplicerError::NoAudio(path.to_path_buf()));
    }

    debug!(
        "Decoded {}: {} frames, {} ch, {} Hz",
        path.display(),
        samples.len() / channels as usize,
        channels,
        sample_rate
    );

    Ok(DecodedAudio {
        samples,
        channels,
        sample_rate,
    })
}

/// Average interleaved channels into one mono channel.
pub fn downmix_to_mono(samples: &[f32], channels: u16) -> Vec<f32> {
    let channels = channels.max(1) as usize;
    if channels == 1 {
        return samples.to_vec();
    }
    samples
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mono_passes_through() {
        assert_eq!(downmix_to_mono(&[0.1, 0.2, 0.3], 1), vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn stereo_is_averaged() {
        let mono = downmix_to_mono(&[1.0, 0.0, 0.5, -0.5, -1.0, -1.0], 2);
        assert_eq!(mono, vec![0.5, 0.0, -1.0]);
    }

    #[test]
    fn partial_trailing_frame_is_dropped() {
        let mono = downmix_to_mono(&[0.2, 0.4, 0.6, 0.8, 1.0], 2);
        assert_eq!(mono.len(), 2);
    }
}
