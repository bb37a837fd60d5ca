//! Audio Splicer application icon generator.
//!
//! Produces a procedural icon: a navy rounded tile carrying cyan waveform
//! bars, with the middle bars highlighted as a yellow-framed selection. The
//! icon is rendered at an arbitrary resolution as RGBA pixel data.

/// Generate the icon as egui `IconData`.
pub fn generate_icon(size: u32) -> egui::IconData {
    egui::IconData {
        rgba: render_icon(size),
        width: size,
        height: size,
    }
}

/// Relative bar heights, left to right.
const BARS: [f32; 9] = [0.25, 0.45, 0.35, 0.75, 0.95, 0.65, 0.4, 0.55, 0.2];

/// Bars inside the highlighted selection.
const SELECTED: std::ops::Range<usize> = 3..6;

const TILE: [u8; 3] = [0x16, 0x21, 0x3e];
const WAVE: [u8; 3] = [0x00, 0xd9, 0xff];
const SELECTION: [u8; 3] = [0xff, 0xd7, 0x00];

/// Render the icon into an RGBA pixel buffer (top-to-bottom row order).
pub fn render_icon(size: u32) -> Vec<u8> {
    let s = size as f32;
    let mut pixels = vec![0u8; (size * size * 4) as usize];

    // ── Layout ──────────────────────────────────────────────────
    let margin = s * 0.06;
    let corner = s * 0.2;
    let inner_left = s * 0.16;
    let inner_right = s * 0.84;
    let slot = (inner_right - inner_left) / BARS.len() as f32;
    let bar_half = slot * 0.3;
    let mid_y = s * 0.5;
    let max_half_height = s * 0.32;

    let sel_left = inner_left + slot * SELECTED.start as f32 + slot * 0.05;
    let sel_right = inner_left + slot * SELECTED.end as f32 - slot * 0.05;
    let sel_top = mid_y - max_half_height - s * 0.04;
    let sel_bottom = mid_y + max_half_height + s * 0.04;
    let frame_width = (s * 0.025).max(1.0);

    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            // 1. Rounded tile. ───────────────────────────────────
            let tile_alpha = rounded_rect_coverage(px, py, margin, s - margin, corner);
            if tile_alpha <= 0.0 {
                continue;
            }
            let mut color = TILE;

            // 2. Selection backdrop and frame. ───────────────────
            let in_sel = px >= sel_left && px <= sel_right && py >= sel_top && py <= sel_bottom;
            if in_sel {
                color = mix(color, SELECTION, 0.18);
                let edge = (px - sel_left)
                    .min(sel_right - px)
                    .min(py - sel_top)
                    .min(sel_bottom - py);
                if edge < frame_width {
                    color = mix(color, SELECTION, 0.9);
                }
            }

            // 3. Waveform bars. ──────────────────────────────────
            let rel = (px - inner_left) / slot;
            if rel >= 0.0 && (rel as usize) < BARS.len() {
                let index = rel as usize;
                let centre = inner_left + (index as f32 + 0.5) * slot;
                let half_height = BARS[index] * max_half_height;
                let coverage = smooth_edge((px - centre).abs(), bar_half)
                    * smooth_edge((py - mid_y).abs(), half_height);
                if coverage > 0.0 {
                    let bar = if SELECTED.contains(&index) {
                        mix(WAVE, [0xff, 0xff, 0xff], 0.25)
                    } else {
                        WAVE
                    };
                    color = mix(color, bar, coverage);
                }
            }

            let idx = ((y * size + x) * 4) as usize;
            pixels[idx..idx + 3].copy_from_slice(&color);
            pixels[idx + 3] = (tile_alpha * 255.0).clamp(0.0, 255.0) as u8;
        }
    }

    pixels
}

// ── Helpers ─────────────────────────────────────────────────────

/// Smooth anti-aliased edge (1 → 0 as `dist` crosses `edge`).
fn smooth_edge(dist: f32, edge: f32) -> f32 {
    (0.5 - (dist - edge) * 0.5).clamp(0.0, 1.0)
}

/// Coverage of a square `[lo, hi]²` with rounded corners of radius `r`.
fn rounded_rect_coverage(px: f32, py: f32, lo: f32, hi: f32, r: f32) -> f32 {
    let cx = px.clamp(lo + r, hi - r);
    let cy = py.clamp(lo + r, hi - r);
    let dist = ((px - cx).powi(2) + (py - cy).powi(2)).sqrt();
    smooth_edge(dist, r)
}

fn mix(a: [u8; 3], b: [u8; 3], t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    [0, 1, 2].map(|i| (a[i] as f32 * (1.0 - t) + b[i] as f32 * t).round() as u8)
}
