//! Interactive waveform view of the loaded clip.
//!
//! Draws min/max peaks over a millisecond grid and lets the user pick a span:
//! dragging on empty space starts a new span, dragging inside the selection
//! moves it, and dragging near either edge resizes it. A plain click outside
//! the selection clears it. The span is committed when the drag ends.
use crate::state::{AppPhase, AppState};
use crate::theme::SplicerTheme;
use egui::{Color32, Pos2, Rect, Sense, Stroke, Ui};
use splicer_core::model::time::{format_ms_compact, grid_step_ms};
use splicer_core::waveform::Peaks;

/// Height of the main waveform.
pub const WAVEFORM_HEIGHT: f32 = 300.0;

/// Pointer distance (px) at which a drag grabs a selection edge.
const EDGE_GRAB_PX: f32 = 6.0;

/// Approximate number of vertical grid lines.
const GRID_LINES: usize = 10;

/// What the user did to the selection this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaveformAction {
    Select { start_ms: f64, end_ms: f64 },
    Clear,
}

/// In-progress drag, kept in egui memory between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Drag {
    /// One end is pinned at `anchor_ms`; the other follows the pointer.
    Span { anchor_ms: f64 },
    /// The whole selection follows the pointer.
    Move { grab_ms: f64, start_ms: f64, end_ms: f64 },
}

/// Maps milliseconds to screen x inside a rect.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TimeAxis {
    pub rect: Rect,
    pub start_ms: f64,
    pub end_ms: f64,
}

impl TimeAxis {
    pub fn x(&self, ms: f64) -> f32 {
        let span = (self.end_ms - self.start_ms).max(f64::EPSILON);
        self.rect.left() + ((ms - self.start_ms) / span) as f32 * self.rect.width()
    }

    pub fn ms(&self, x: f32) -> f64 {
        let t = ((x - self.rect.left()) / self.rect.width().max(1.0)) as f64;
        self.start_ms + t * (self.end_ms - self.start_ms)
    }
}

/// Draw the waveform and handle selection input.
pub fn waveform(ui: &mut Ui, state: &mut AppState, theme: &SplicerTheme) -> Option<WaveformAction> {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), WAVEFORM_HEIGHT),
        Sense::click_and_drag(),
    );
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 6.0, theme.surface);

    let loading = state.phase == AppPhase::Loading;
    let Some(duration_ms) = state.clip.as_ref().map(|c| c.duration_ms()) else {
        let message = if loading {
            "Loading..."
        } else {
            "Select a file to view its waveform"
        };
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            message,
            egui::FontId::proportional(14.0),
            theme.text_muted,
        );
        return None;
    };

    let plot = rect.shrink2(egui::vec2(6.0, 6.0));
    let axis = TimeAxis {
        rect: plot,
        start_ms: 0.0,
        end_ms: duration_ms,
    };

    draw_grid(&painter, &axis, theme);
    let limit = state.view_limit;
    if let Some(peaks) = state.view_peaks(plot.width().max(1.0) as usize) {
        draw_peaks(&painter, plot, peaks, limit, theme.accent);
    }

    // ── Selection input ──────────────────────────────────────────────────
    let drag_id = response.id.with("drag");
    let selection_ms = state
        .selection
        .map(|s| (s.start_sample_ms(), s.end_sample_ms()));
    let mut action = None;

    if let Some(pos) = response.hover_pos() {
        if selection_ms.is_some_and(|sel| near_edge(&axis, sel, pos.x)) {
            ui.ctx().set_cursor_icon(egui::CursorIcon::ResizeHorizontal);
        }
    }

    if response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            let drag = begin_drag(&axis, selection_ms, pos.x);
            ui.data_mut(|d| d.insert_temp(drag_id, drag));
        }
    }

    let span_id = drag_id.with("span");
    let drag: Option<Drag> = ui.data(|d| d.get_temp(drag_id));
    let mut pending = selection_ms;
    if let Some(drag) = drag {
        pending = ui.data(|d| d.get_temp(span_id)).or(pending);
        if let Some(pos) = response.interact_pointer_pos() {
            let pointer_ms = axis.ms(pos.x).clamp(0.0, duration_ms);
            let span = drag_span(drag, pointer_ms, duration_ms);
            ui.data_mut(|d| d.insert_temp(span_id, span));
            pending = Some(span);
        }
    }

    if response.drag_stopped() {
        ui.data_mut(|d| {
            d.remove::<Drag>(drag_id);
            d.remove::<(f64, f64)>(span_id);
        });
        if let (Some(_), Some((start_ms, end_ms))) = (drag, pending) {
            action = Some(WaveformAction::Select { start_ms, end_ms });
        }
    } else if response.clicked() {
        let inside = match (selection_ms, response.interact_pointer_pos()) {
            (Some((a, b)), Some(pos)) => (a..=b).contains(&axis.ms(pos.x)),
            _ => false,
        };
        if !inside && selection_ms.is_some() {
            action = Some(WaveformAction::Clear);
        }
    }

    // ── Overlays ─────────────────────────────────────────────────────────
    if let Some((start_ms, end_ms)) = pending {
        let span = Rect::from_x_y_ranges(axis.x(start_ms)..=axis.x(end_ms), plot.y_range());
        painter.rect_filled(span, 0.0, theme.accent.gamma_multiply(0.25));
        let edge = Stroke::new(2.0, theme.accent);
        painter.vline(span.left(), plot.y_range(), edge);
        painter.vline(span.right(), plot.y_range(), edge);
    }

    if let Some(position_ms) = state.playback_position_ms() {
        let x = axis.x(position_ms);
        painter.vline(x, plot.y_range(), Stroke::new(2.0, theme.playhead));
    }

    if loading {
        let name = state.loading_file.as_deref().unwrap_or_default();
        painter.text(
            plot.right_top() + egui::vec2(-4.0, 4.0),
            egui::Align2::RIGHT_TOP,
            format!("Loading {name}..."),
            egui::FontId::proportional(12.0),
            theme.text_muted,
        );
    }

    action
}

/// Draw vertical time lines with labels and the zero line.
pub(crate) fn draw_grid(painter: &egui::Painter, axis: &TimeAxis, theme: &SplicerTheme) {
    let span = axis.end_ms - axis.start_ms;
    let step = grid_step_ms(span, GRID_LINES);
    let stroke = Stroke::new(1.0, theme.grid);
    let rect = axis.rect;

    let mut t = (axis.start_ms / step).ceil() * step;
    while t <= axis.end_ms {
        let x = axis.x(t);
        painter.vline(x, rect.y_range(), stroke);
        painter.text(
            Pos2::new(x + 3.0, rect.bottom() - 2.0),
            egui::Align2::LEFT_BOTTOM,
            format_ms_compact(t),
            egui::FontId::proportional(10.0),
            theme.text_muted,
        );
        t += step;
    }
    painter.hline(rect.x_range(), rect.center().y, stroke);
}

/// Draw one vertical min/max stroke per peak column, spread across `rect`.
pub(crate) fn draw_peaks(
    painter: &egui::Painter,
    rect: Rect,
    peaks: &Peaks,
    limit: f32,
    color: Color32,
) {
    if peaks.is_empty() {
        return;
    }
    let half = rect.height() / 2.0;
    let mid = rect.center().y;
    let col_width = rect.width() / peaks.len() as f32;
    let stroke = Stroke::new(col_width.max(1.0), color);
    let limit = limit.max(f32::EPSILON);

    for (i, col) in peaks.columns.iter().enumerate() {
        let x = rect.left() + (i as f32 + 0.5) * col_width;
        let top = mid - (col.max / limit).clamp(-1.0, 1.0) * half;
        let bottom = mid - (col.min / limit).clamp(-1.0, 1.0) * half;
        // Keep silent stretches visible as a hairline.
        let bottom = bottom.max(top + 1.0);
        painter.line_segment([Pos2::new(x, top), Pos2::new(x, bottom)], stroke);
    }
}

fn near_edge(axis: &TimeAxis, (start_ms, end_ms): (f64, f64), x: f32) -> bool {
    (axis.x(start_ms) - x).abs() <= EDGE_GRAB_PX || (axis.x(end_ms) - x).abs() <= EDGE_GRAB_PX
}

/// Decide what a drag starting at `x` does to the current selection.
fn begin_drag(axis: &TimeAxis, selection: Option<(f64, f64)>, x: f32) -> Drag {
    let pointer_ms = axis.ms(x);
    let Some((start_ms, end_ms)) = selection else {
        return Drag::Span {
            anchor_ms: pointer_ms,
        };
    };
    if (axis.x(start_ms) - x).abs() <= EDGE_GRAB_PX {
        Drag::Span { anchor_ms: end_ms }
    } else if (axis.x(end_ms) - x).abs() <= EDGE_GRAB_PX {
        Drag::Span {
            anchor_ms: start_ms,
        }
    } else if (start_ms..=end_ms).contains(&pointer_ms) {
        Drag::Move {
            grab_ms: pointer_ms,
            start_ms,
            end_ms,
        }
    } else {
        Drag::Span {
            anchor_ms: pointer_ms,
        }
    }
}

/// Span produced by `drag` with the pointer at `pointer_ms`, kept inside the clip.
fn drag_span(drag: Drag, pointer_ms: f64, duration_ms: f64) -> (f64, f64) {
    match drag {
        Drag::Span { anchor_ms } => {
            let anchor = anchor_ms.clamp(0.0, duration_ms);
            (anchor.min(pointer_ms), anchor.max(pointer_ms))
        }
        Drag::Move {
            grab_ms,
            start_ms,
            end_ms,
        } => {
            let len = end_ms - start_ms;
            let start = (start_ms + pointer_ms - grab_ms).clamp(0.0, (duration_ms - len).max(0.0));
            (start, start + len)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis() -> TimeAxis {
        TimeAxis {
            rect: Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1000.0, 100.0)),
            start_ms: 0.0,
            end_ms: 2000.0,
        }
    }

    #[test]
    fn axis_maps_both_ways() {
        let axis = axis();
        assert_eq!(axis.x(1000.0), 500.0);
        assert_eq!(axis.ms(250.0), 500.0);
    }

    #[test]
    fn drag_outside_selection_starts_new_span() {
        let drag = begin_drag(&axis(), Some((200.0, 400.0)), 600.0);
        assert_eq!(drag, Drag::Span { anchor_ms: 1200.0 });
        assert_eq!(drag_span(drag, 900.0, 2000.0), (900.0, 1200.0));
    }

    #[test]
    fn drag_on_edge_resizes() {
        // Start edge at x = 100: the end stays pinned.
        let drag = begin_drag(&axis(), Some((200.0, 400.0)), 103.0);
        assert_eq!(drag, Drag::Span { anchor_ms: 400.0 });
        assert_eq!(drag_span(drag, 100.0, 2000.0), (100.0, 400.0));
        assert_eq!(drag_span(drag, 700.0, 2000.0), (400.0, 700.0));
    }

    #[test]
    fn drag_inside_moves_and_stays_in_clip() {
        let drag = begin_drag(&axis(), Some((200.0, 600.0)), 200.0);
        assert!(matches!(drag, Drag::Move { .. }));
        assert_eq!(drag_span(drag, 500.0, 2000.0), (300.0, 700.0));
        assert_eq!(drag_span(drag, 1990.0, 2000.0), (1600.0, 2000.0));
        assert_eq!(drag_span(drag, 0.0, 2000.0), (0.0, 400.0));
    }

    #[test]
    fn no_selection_always_spans() {
        let drag = begin_drag(&axis(), None, 500.0);
        assert_eq!(drag, Drag::Span { anchor_ms: 1000.0 });
    }
}
