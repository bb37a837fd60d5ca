//! A sample-accurate region of a clip chosen by the user.

use super::clip::AudioClip;
use std::ops::Range;

/// A selected span of a clip.
///
/// `start_ms`/`end_ms` keep the bounds exactly as requested (ordered but not
/// clamped) for display, while `start`/`end` are the sample indices actually
/// extracted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub start_ms: f64,
    pub end_ms: f64,
    pub start: usize,
    pub end: usize,
    pub sample_rate: u32,
}

impl Selection {
    /// Build a selection from two times in milliseconds, in either order.
    ///
    /// Returns `None` when the span covers no samples of the clip.
    pub fn from_ms(a_ms: f64, b_ms: f64, clip: &AudioClip) -> Option<Self> {
        if !a_ms.is_finite() || !b_ms.is_finite() {
            return None;
        }
        let (lo, hi) = if a_ms <= b_ms { (a_ms, b_ms) } else { (b_ms, a_ms) };
        let start = clip.ms_to_sample(lo);
        let end = clip.ms_to_sample(hi).min(clip.len());
        if end <= start {
            return None;
        }
        Some(Self {
            start_ms: lo,
            end_ms: hi,
            start,
            end,
            sample_rate: clip.sample_rate(),
        })
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Duration of the extracted samples (not of the requested span).
    pub fn duration_ms(&self) -> f64 {
        self.len() as f64 / self.sample_rate.max(1) as f64 * 1000.0
    }

    /// Start of the extracted samples in milliseconds.
    pub fn start_sample_ms(&self) -> f64 {
        self.start as f64 / self.sample_rate.max(1) as f64 * 1000.0
    }

    /// End of the extracted samples in milliseconds.
    pub fn end_sample_ms(&self) -> f64 {
        self.end as f64 / self.sample_rate.max(1) as f64 * 1000.0
    }
}
