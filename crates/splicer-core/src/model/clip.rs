//! A decoded, mono audio recording held in memory.

use std::ops::Range;
use std::sync::Arc;

/// Mono samples at a fixed sample rate.
///
/// Samples live in an `Arc<[f32]>` so the playback thread and the UI can
/// share one buffer without copying.
#[derive(Debug, Clone)]
pub struct AudioClip {
    samples: Arc<[f32]>,
    sample_rate: u32,
}

impl AudioClip {
    /// Create a clip. A zero sample rate is coerced to 1 Hz so that every
    /// time conversion stays finite.
    pub fn new(samples: impl Into<Arc<[f32]>>, sample_rate: u32) -> Self {
        Self {
            samples: samples.into(),
            sample_rate: sample_rate.max(1),
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Shared handle to the sample buffer.
    pub fn shared_samples(&self) -> Arc<[f32]> {
        Arc::clone(&self.samples)
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Total length in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.sample_to_ms(self.samples.len())
    }

    /// Convert a sample index to milliseconds.
    pub fn sample_to_ms(&self, index: usize) -> f64 {
        index as f64 / self.sample_rate as f64 * 1000.0
    }

    /// Convert milliseconds to a sample index, truncating toward zero.
    /// Negative times map to sample 0. The result is not clamped to the clip.
    pub fn ms_to_sample(&self, ms: f64) -> usize {
        if ms.is_nan() || ms <= 0.0 {
            return 0;
        }
        (ms * self.sample_rate as f64 / 1000.0) as usize
    }

    /// Largest absolute sample value, 0.0 for an empty clip.
    pub fn max_amplitude(&self) -> f32 {
        self.samples.iter().fold(0.0f32, |acc, s| acc.max(s.abs()))
    }

    /// Borrow a range of samples, clamped to the clip bounds.
    pub fn slice(&self, range: Range<usize>) -> &[f32] {
        let end = range.end.min(self.samples.len());
        let start = range.start.min(end);
        &self.samples[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_and_conversions() {
        let clip = AudioClip::new(vec![0.0; 44_100], 44_100);
        assert_eq!(clip.len(), 44_100);
        assert!((clip.duration_ms() - 1000.0).abs() < 1e-9);
        assert_eq!(clip.ms_to_sample(500.0), 22_050);
        assert_eq!(clip.ms_to_sample(-20.0), 0);
        assert!((clip.sample_to_ms(441) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn ms_to_sample_truncates() {
        let clip = AudioClip::new(vec![0.0; 10], 16_000);
        // 0.09 ms * 16 = 1.44 samples.
        assert_eq!(clip.ms_to_sample(0.09), 1);
    }

    #[test]
    fn max_amplitude_uses_absolute_value() {
        let clip = AudioClip::new(vec![0.1, -0.8, 0.5], 8_000);
        assert!((clip.max_amplitude() - 0.8).abs() < f32::EPSILON);
        assert_eq!(AudioClip::new(Vec::<f32>::new(), 8_000).max_amplitude(), 0.0);
    }

    #[test]
    fn slice_is_clamped() {
        let clip = AudioClip::new(vec![1.0, 2.0, 3.0], 8_000);
        assert_eq!(clip.slice(1..10), &[2.0, 3.0]);
        assert!(clip.slice(5..9).is_empty());
    }

    #[test]
    fn zero_sample_rate_is_coerced() {
        let clip = AudioClip::new(vec![0.0; 4], 0);
        assert_eq!(clip.sample_rate(), 1);
        assert!(clip.duration_ms().is_finite());
    }
}
