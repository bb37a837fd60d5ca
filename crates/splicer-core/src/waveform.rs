//! Waveform reduction — collapses millions of samples into one min/max pair
//! per screen column so a long recording draws in constant time.
//!
//! Buckets are reduced in parallel with rayon; the UI recomputes peaks only
//! when the clip or the widget width changes.

use rayon::prelude::*;

/// Headroom above the loudest sample in the main waveform view.
pub const VIEW_HEADROOM: f32 = 1.1;

/// Headroom above the loudest sample in the output preview.
pub const PREVIEW_HEADROOM: f32 = 1.15;

/// Minimum and maximum sample value within one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakColumn {
    pub min: f32,
    pub max: f32,
}

/// Reduced waveform.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Peaks {
    pub columns: Vec<PeakColumn>,
    /// Samples represented by each column (the last may hold fewer).
    pub samples_per_column: usize,
}

impl Peaks {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Reduce `samples` into at most `columns` min/max pairs.
pub fn compute_peaks(samples: &[f32], columns: usize) -> Peaks {
    if samples.is_empty() || columns == 0 {
        return Peaks::default();
    }
    let per_column = samples.len().div_ceil(columns).max(1);
    let columns = samples
        .par_chunks(per_column)
        .map(|chunk| {
            chunk.iter().fold(
                PeakColumn {
                    min: f32::INFINITY,
                    max: f32::NEG_INFINITY,
                },
                |acc, &s| PeakColumn {
                    min: acc.min.min(s),
                    max: acc.max.max(s),
                },
            )
        })
        .collect();
    Peaks {
        columns,
        samples_per_column: per_column,
    }
}

/// Vertical half-range for drawing: loudest sample times `headroom`, or 1.0
/// when the signal is silent.
pub fn amplitude_limit(samples: &[f32], headroom: f32) -> f32 {
    let max = samples
        .par_iter()
        .map(|s| s.abs())
        .reduce(|| 0.0f32, f32::max);
    if max > 0.0 {
        max * headroom
    } else {
        1.0
    }
}
