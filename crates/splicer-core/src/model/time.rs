//! Time formatting utilities — millisecond labels for the UI.
//!
//! All positions are `f64` milliseconds; formatting happens only at the
//! display boundary.

/// Format milliseconds with one decimal, e.g. `"1234.5 ms"`.
pub fn format_ms(ms: f64) -> String {
    format!("{ms:.1} ms")
}

/// Compact marker label with no decimals, e.g. `"100ms"`.
pub fn format_ms_compact(ms: f64) -> String {
    format!("{ms:.0}ms")
}

/// Format a duration as `m:ss.mmm`.
pub fn format_duration(ms: f64) -> String {
    let total_ms = if ms.is_finite() && ms > 0.0 {
        ms.round() as u64
    } else {
        0
    };
    let minutes = total_ms / 60_000;
    let seconds = (total_ms % 60_000) / 1_000;
    let millis = total_ms % 1_000;
    format!("{minutes}:{seconds:02}.{millis:03}")
}

/// Pick a grid spacing (ms) giving roughly `target_lines` lines over `span_ms`.
///
/// Steps follow a 1-2-5 progression.
pub fn grid_step_ms(span_ms: f64, target_lines: usize) -> f64 {
    if span_ms.is_nan() || span_ms <= 0.0 || target_lines == 0 {
        return 1.0;
    }
    let raw = span_ms / target_lines as f64;
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|&s| s >= raw)
        .unwrap_or(10.0 * magnitude);
    step.max(0.001)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ms() {
        assert_eq!(format_ms(0.0), "0.0 ms");
        assert_eq!(format_ms(1234.56), "1234.6 ms");
    }

    #[test]
    fn test_format_ms_compact() {
        assert_eq!(format_ms_compact(100.0), "100ms");
        assert_eq!(format_ms_compact(1299.6), "1300ms");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "0:00.000");
        assert_eq!(format_duration(61_234.4), "1:01.234");
        assert_eq!(format_duration(-5.0), "0:00.000");
    }

    #[test]
    fn test_grid_step() {
        assert_eq!(grid_step_ms(1_000.0, 10), 100.0);
        assert_eq!(grid_step_ms(1_500.0, 10), 200.0);
        assert_eq!(grid_step_ms(3_000.0, 10), 500.0);
        assert_eq!(grid_step_ms(0.0, 10), 1.0);
    }
}
