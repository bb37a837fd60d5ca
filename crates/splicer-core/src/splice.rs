//! Cutting a selection out of a clip, optionally framed by silence.
//!
//! The exported clip and the on-screen preview are both produced here so
//! that what the user sees is exactly what gets written.

use crate::model::{AudioClip, Selection};

/// Number of silent samples for `padding_ms` at `sample_rate`.
///
/// Truncates, so 100 ms at 22 050 Hz is 2 205 samples.
pub fn padding_samples(sample_rate: u32, padding_ms: u32) -> usize {
    (sample_rate as u64 * padding_ms as u64 / 1000) as usize
}

/// How a selection is turned into output audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpliceOptions {
    /// Silence added to each side, `None` for a bare cut.
    pub padding_ms: Option<u32>,
}

impl SpliceOptions {
    pub fn padded(padding_ms: u32) -> Self {
        Self {
            padding_ms: Some(padding_ms),
        }
    }

    pub fn unpadded() -> Self {
        Self { padding_ms: None }
    }

    /// Padding length in samples for a given rate (0 when disabled).
    pub fn padding_for(&self, sample_rate: u32) -> usize {
        self.padding_ms
            .map_or(0, |ms| padding_samples(sample_rate, ms))
    }
}

/// Extract `selection` from `clip` and add padding per `options`.
pub fn splice(clip: &AudioClip, selection: &Selection, options: SpliceOptions) -> Vec<f32> {
    let audio = clip.slice(selection.range());
    let pad = options.padding_for(clip.sample_rate());
    let mut out = Vec::with_capacity(audio.len() + 2 * pad);
    out.resize(pad, 0.0);
    out.extend_from_slice(audio);
    out.resize(out.len() + pad, 0.0);
    out
}

/// Where the silence and the audio sit inside a spliced output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputLayout {
    pub lead_samples: usize,
    pub audio_samples: usize,
    pub tail_samples: usize,
    pub sample_rate: u32,
}

impl OutputLayout {
    /// Layout for splicing `selection` with `options`.
    pub fn new(selection: &Selection, options: SpliceOptions) -> Self {
        let pad = options.padding_for(selection.sample_rate);
        Self {
            lead_samples: pad,
            audio_samples: selection.len(),
            tail_samples: pad,
            sample_rate: selection.sample_rate.max(1),
        }
    }

    pub fn total_samples(&self) -> usize {
        self.lead_samples + self.audio_samples + self.tail_samples
    }

    fn to_ms(&self, samples: usize) -> f64 {
        samples as f64 / self.sample_rate as f64 * 1000.0
    }

    pub fn total_ms(&self) -> f64 {
        self.to_ms(self.total_samples())
    }

    pub fn lead_ms(&self) -> f64 {
        self.to_ms(self.lead_samples)
    }

    pub fn audio_ms(&self) -> f64 {
        self.to_ms(self.audio_samples)
    }

    pub fn tail_ms(&self) -> f64 {
        self.to_ms(self.tail_samples)
    }

    /// Where the trailing silence begins.
    pub fn tail_start_ms(&self) -> f64 {
        self.to_ms(self.lead_samples + self.audio_samples)
    }

    pub fn has_padding(&self) -> bool {
        self.lead_samples > 0 || self.tail_samples > 0
    }

    /// Preview heading, e.g. `"Total Output: 700.0ms (100ms + 500.0ms + 100ms)"`.
    pub fn title(&self) -> String {
        let mut title = format!("Total Output: {:.1}ms", self.total_ms());
        if self.has_padding() {
            title.push_str(&format!(
                " ({:.0}ms + {:.1}ms + {:.0}ms)",
                self.lead_ms(),
                self.audio_ms(),
                self.tail_ms()
            ));
        }
        title
    }
}
