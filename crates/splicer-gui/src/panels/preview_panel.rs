//! Output preview section.
use crate::state::AppState;
use crate::theme::SplicerTheme;
use crate::widgets::output_preview::output_preview;
use egui::{RichText, Ui};

pub fn preview_panel(ui: &mut Ui, state: &mut AppState, theme: &SplicerTheme) {
    egui::Frame::new()
        .fill(theme.surface)
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new("📊 OUTPUT PREVIEW (What will be saved)")
                    .size(13.0)
                    .strong()
                    .color(theme.padding),
            );
        });
    ui.add_space(4.0);
    output_preview(ui, state, theme);
}
