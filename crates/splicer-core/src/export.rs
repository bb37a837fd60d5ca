//! WAV export — output naming, overwrite protection and 16-bit PCM writing.
//!
//! Output files are mono at the source sample rate. Existing files are never
//! replaced silently: [`export_clip`] reports [`SplicerError::OutputExists`]
//! and the caller retries with `overwrite = true` once the user agrees.

use crate::error::{Result, SplicerError};
use crate::model::{AudioClip, Selection};
use crate::splice::{splice, SpliceOptions};
use hound::{SampleFormat, WavSpec, WavWriter};
use std::path::{Path, PathBuf};
use tracing::info;

/// Build `folder/<filename>.wav` from user input.
///
/// The name is trimmed, must not be empty, must not contain a path
/// separator, and keeps a single `.wav` extension if the user typed one.
pub fn output_path(folder: &Path, filename: &str) -> Result<PathBuf> {
    let name = filename.trim();
    let name = match name.len().checked_sub(4) {
        Some(cut) if name.is_char_boundary(cut) && name[cut..].eq_ignore_ascii_case(".wav") => {
            name[..cut].trim_end()
        }
        _ => name,
    };
    if name.is_empty() {
        return Err(SplicerError::EmptyFilename);
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(SplicerError::InvalidFilename(name.to_string()));
    }
    Ok(folder.join(format!("{name}.wav")))
}

/// Write mono samples as 16-bit PCM.
pub fn write_wav(path: &Path, samples: &[f32], sample_rate: u32) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(to_pcm16(sample))?;
    }
    writer.finalize()?;
    Ok(())
}

/// Convert a float sample to 16-bit PCM with clipping.
fn to_pcm16(sample: f32) -> i16 {
    let clamped = if sample.is_nan() {
        0.0
    } else {
        sample.clamp(-1.0, 1.0)
    };
    (clamped * i16::MAX as f32).round() as i16
}

/// What the user asked to export.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub output_folder: PathBuf,
    pub filename: String,
    /// Replace an existing file instead of failing.
    pub overwrite: bool,
}

/// Result of a successful export.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub path: PathBuf,
    pub frames: usize,
    pub duration_ms: f64,
}

/// Splice `selection` out of `clip` and write it per `request`.
pub fn export_clip(
    request: &ExportRequest,
    clip: &AudioClip,
    selection: &Selection,
    options: SpliceOptions,
) -> Result<ExportOutcome> {
    let path = output_path(&request.output_folder, &request.filename)?;
    if path.exists() && !request.overwrite {
        return Err(SplicerError::OutputExists(path));
    }

    let audio = splice(clip, selection, options);
    write_wav(&path, &audio, clip.sample_rate())?;

    let duration_ms = audio.len() as f64 / clip.sample_rate() as f64 * 1000.0;
    info!(
        "Exported {} ({} frames, {:.1} ms)",
        path.display(),
        audio.len(),
        duration_ms
    );
    Ok(ExportOutcome {
        path,
        frames: audio.len(),
        duration_ms,
    })
}
