//! Read position over a mono buffer, stepping at the ratio between the
//! clip's sample rate and the output device's rate.
//!
//! Lives apart from the CPAL stream so the sample math is testable without
//! an audio device.

use std::sync::Arc;

pub struct PlaybackCursor {
    samples: Arc<[f32]>,
    /// Source frames advanced per output frame.
    step: f64,
    pos: f64,
}

impl PlaybackCursor {
    pub fn new(samples: Arc<[f32]>, source_rate: u32, output_rate: u32) -> Self {
        Self {
            samples,
            step: source_rate.max(1) as f64 / output_rate.max(1) as f64,
            pos: 0.0,
        }
    }

    /// Next output sample, linearly interpolated; `None` past the end.
    pub fn next_sample(&mut self) -> Option<f32> {
        let idx = self.pos as usize;
        let s0 = *self.samples.get(idx)?;
        let s1 = self.samples.get(idx + 1).copied().unwrap_or(s0);
        let frac = (self.pos - idx as f64) as f32;
        self.pos += self.step;
        Some(s0 + (s1 - s0) * frac)
    }

    /// Fill an interleaved output buffer, copying each sample to every
    /// channel and writing silence once the clip has ended.
    pub fn fill<T: Copy>(&mut self, data: &mut [T], channels: usize, convert: impl Fn(f32) -> T) {
        let channels = channels.max(1);
        for frame in data.chunks_mut(channels) {
            let value = convert(self.next_sample().unwrap_or(0.0));
            for out in frame.iter_mut() {
                *out = value;
            }
        }
    }

    /// Current position in source frames, clamped to the clip length.
    pub fn position(&self) -> usize {
        (self.pos as usize).min(self.samples.len())
    }

    pub fn is_finished(&self) -> bool {
        self.pos as usize >= self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf(samples: &[f32]) -> Arc<[f32]> {
        Arc::from(samples)
    }

    #[test]
    fn same_rate_plays_samples_verbatim() {
        let mut cursor = PlaybackCursor::new(buf(&[0.1, 0.2, 0.3]), 44_100, 44_100);
        assert_eq!(cursor.next_sample(), Some(0.1));
        assert_eq!(cursor.next_sample(), Some(0.2));
        assert_eq!(cursor.next_sample(), Some(0.3));
        assert_eq!(cursor.next_sample(), None);
        assert!(cursor.is_finished());
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn upsampling_interpolates() {
        let mut cursor = PlaybackCursor::new(buf(&[0.0, 1.0]), 24_000, 48_000);
        let out: Vec<f32> = std::iter::from_fn(|| cursor.next_sample()).collect();
        assert_eq!(out, vec![0.0, 0.5, 1.0, 1.0]);
    }

    #[test]
    fn downsampling_skips() {
        let mut cursor = PlaybackCursor::new(buf(&[0.0, 0.1, 0.2, 0.3]), 48_000, 24_000);
        let out: Vec<f32> = std::iter::from_fn(|| cursor.next_sample()).collect();
        assert_eq!(out, vec![0.0, 0.2]);
    }

    #[test]
    fn fill_duplicates_channels_and_pads_silence() {
        let mut cursor = PlaybackCursor::new(buf(&[0.5, -0.5]), 8_000, 8_000);
        let mut data = [9.0f32; 6];
        cursor.fill(&mut data, 2, |s| s);
        assert_eq!(data, [0.5, 0.5, -0.5, -0.5, 0.0, 0.0]);
        assert!(cursor.is_finished());
    }

    #[test]
    fn fill_converts_sample_type() {
        let mut cursor = PlaybackCursor::new(buf(&[1.0]), 8_000, 8_000);
        let mut data = [0i16; 2];
        cursor.fill(&mut data, 1, |s| (s * 100.0) as i16);
        assert_eq!(data, [100, 0]);
    }
}
