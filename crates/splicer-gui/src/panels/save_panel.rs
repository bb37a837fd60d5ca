//! Save controls and the recent-exports table.
use crate::state::AppState;
use crate::theme::SplicerTheme;
use egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};
use splicer_core::model::time::format_ms;

/// Rows of the recent-exports table shown before it scrolls.
const VISIBLE_EXPORT_ROWS: f32 = 6.0;

pub fn save_panel(ui: &mut Ui, state: &mut AppState, theme: &SplicerTheme) {
    theme.group(ui, "Save", |ui| {
        ui.horizontal(|ui| {
            ui.label("Filename:");
            let button_width = 200.0;
            ui.add(
                egui::TextEdit::singleline(&mut state.filename)
                    .hint_text("Enter filename (without extension)")
                    .desired_width((ui.available_width() - button_width).max(120.0)),
            );
            let save = ui
                .add_enabled(state.can_save(), egui::Button::new("💾 Save Spliced Audio"))
                .on_disabled_hover_text("Select a portion of the audio and an output folder");
            if save.clicked() {
                state.request_save();
            }
        });
    });

    if state.recent_exports.is_empty() {
        return;
    }

    ui.add_space(8.0);
    theme.group(ui, "Recent Exports", |ui| {
        let row_height = 20.0;
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::exact(70.0))
            .column(Column::exact(90.0))
            .column(Column::remainder().clip(true))
            .max_scroll_height(row_height * VISIBLE_EXPORT_ROWS)
            .header(row_height, |mut header| {
                header.col(|ui| {
                    ui.strong("Time");
                });
                header.col(|ui| {
                    ui.strong("Length");
                });
                header.col(|ui| {
                    ui.strong("File");
                });
            })
            .body(|body| {
                body.rows(row_height, state.recent_exports.len(), |mut row| {
                    let record = &state.recent_exports[row.index()];
                    row.col(|ui| {
                        ui.label(
                            RichText::new(record.saved_at.format("%H:%M:%S").to_string())
                                .color(theme.text_muted),
                        );
                    });
                    row.col(|ui| {
                        ui.label(format_ms(record.duration_ms));
                    });
                    row.col(|ui| {
                        ui.label(record.path.display().to_string())
                            .on_hover_text(record.path.display().to_string());
                    });
                });
            });
    });
}
