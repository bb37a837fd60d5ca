//! Output preview — the exact audio that "Save" would write.
//!
//! Padding regions are tinted yellow with a SILENCE label, the audio region
//! green, and each boundary gets a millisecond marker.
use super::waveform::{draw_grid, draw_peaks, TimeAxis};
use crate::state::AppState;
use crate::theme::SplicerTheme;
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Shape, Stroke, Ui};
use splicer_core::model::time::format_ms_compact;

pub const PREVIEW_HEIGHT: f32 = 220.0;

/// Draw the output preview, or a hint when nothing is selected.
pub fn output_preview(ui: &mut Ui, state: &mut AppState, theme: &SplicerTheme) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), PREVIEW_HEIGHT),
        Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 6.0, theme.surface);

    let Some(preview) = state.preview_mut() else {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "Select audio to see output preview",
            FontId::proportional(13.0),
            theme.text_muted,
        );
        return;
    };

    let layout = preview.layout;
    let limit = preview.limit;

    painter.text(
        Pos2::new(rect.center().x, rect.top() + 6.0),
        Align2::CENTER_TOP,
        layout.title(),
        FontId::proportional(13.0),
        theme.padding,
    );

    let plot = Rect::from_min_max(
        rect.left_top() + egui::vec2(8.0, 26.0),
        rect.right_bottom() - egui::vec2(8.0, 18.0),
    );
    let axis = TimeAxis {
        rect: plot,
        start_ms: 0.0,
        end_ms: layout.total_ms(),
    };
    let label_y = plot.top() + plot.height() * 0.15;

    if layout.has_padding() {
        let lead_end = axis.x(layout.lead_ms());
        let tail_start = axis.x(layout.tail_start_ms());
        let padding_fill = theme.padding.gamma_multiply(0.25);

        painter.rect_filled(
            Rect::from_x_y_ranges(plot.left()..=lead_end, plot.y_range()),
            0.0,
            padding_fill,
        );
        painter.rect_filled(
            Rect::from_x_y_ranges(tail_start..=plot.right(), plot.y_range()),
            0.0,
            padding_fill,
        );
        painter.rect_filled(
            Rect::from_x_y_ranges(lead_end..=tail_start, plot.y_range()),
            0.0,
            theme.success.gamma_multiply(0.15),
        );
        draw_grid(&painter, &axis, theme);
        draw_peaks(&painter, plot, preview.peaks(plot.width().max(1.0) as usize), limit, theme.accent);

        for x in [lead_end, tail_start] {
            painter.add(Shape::dashed_line(
                &[Pos2::new(x, plot.top()), Pos2::new(x, plot.bottom())],
                Stroke::new(2.0, theme.padding.gamma_multiply(0.8)),
                6.0,
                4.0,
            ));
        }

        let silence = format!("{}\nSILENCE", format_ms_compact(layout.lead_ms()));
        boxed_label(
            &painter,
            Pos2::new((plot.left() + lead_end) / 2.0, label_y),
            &silence,
            theme.padding,
            theme,
        );
        boxed_label(
            &painter,
            Pos2::new((lead_end + tail_start) / 2.0, label_y),
            &format!("AUDIO\n{:.1}ms", layout.audio_ms()),
            theme.success,
            theme,
        );
        boxed_label(
            &painter,
            Pos2::new((tail_start + plot.right()) / 2.0, label_y),
            &silence,
            theme.padding,
            theme,
        );

        let marker_y = plot.bottom() + 2.0;
        let markers = [
            (plot.left(), Align2::LEFT_TOP, 0.0, theme.text_primary),
            (lead_end, Align2::CENTER_TOP, layout.lead_ms(), theme.padding),
            (tail_start, Align2::CENTER_TOP, layout.tail_start_ms(), theme.padding),
            (plot.right(), Align2::RIGHT_TOP, layout.total_ms(), theme.text_primary),
        ];
        for (x, align, ms, color) in markers {
            painter.text(
                Pos2::new(x, marker_y),
                align,
                format_ms_compact(ms),
                FontId::proportional(10.0),
                color,
            );
        }
    } else {
        draw_grid(&painter, &axis, theme);
        draw_peaks(&painter, plot, preview.peaks(plot.width().max(1.0) as usize), limit, theme.accent);
        boxed_label(
            &painter,
            Pos2::new(plot.center().x, label_y),
            &format!("AUDIO\n{:.1}ms", layout.total_ms()),
            theme.accent,
            theme,
        );
    }
}

/// Centered multi-line label in a rounded box outlined with `color`.
fn boxed_label(painter: &Painter, center: Pos2, text: &str, color: Color32, theme: &SplicerTheme) {
    let galley = painter.layout_no_wrap(text.to_string(), FontId::proportional(11.0), color);
    let size = galley.size();
    let rect = Rect::from_center_size(center, size + egui::vec2(12.0, 8.0));
    painter.rect_filled(rect, 4.0, theme.surface);
    painter.rect_stroke(rect, 4.0, Stroke::new(2.0, color), egui::StrokeKind::Inside);
    painter.galley(center - size / 2.0, galley, color);
}
