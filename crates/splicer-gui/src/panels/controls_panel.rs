//! Playback buttons and the padding option.
use crate::state::AppState;
use crate::theme::SplicerTheme;
use egui::Ui;
use splicer_core::model::time::format_ms_compact;

pub fn controls_panel(ui: &mut Ui, state: &mut AppState, theme: &SplicerTheme) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.set_width((ui.available_width() / 2.0 - 4.0).max(200.0));
            theme.group(ui, "Playback", |ui| {
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(state.can_play_original(), egui::Button::new("▶ Play Original"))
                        .clicked()
                    {
                        state.play_original();
                    }
                    if ui
                        .add_enabled(state.can_play_selection(), egui::Button::new("▶ Play Selection"))
                        .clicked()
                    {
                        state.play_selection();
                    }
                    if ui.button("⏹ Stop").clicked() {
                        state.stop_playback();
                    }
                });
            });
        });

        ui.vertical(|ui| {
            theme.group(ui, "Options", |ui| {
                ui.horizontal(|ui| {
                    let mut padding = state.padding_enabled;
                    let label = format!(
                        "Add {} padding (start & end)",
                        format_ms_compact(state.config.padding_ms as f64)
                    );
                    if ui.checkbox(&mut padding, label).changed() {
                        state.set_padding_enabled(padding);
                    }
                    if ui
                        .add_enabled(
                            state.can_play_selection(),
                            egui::Button::new("▶ Preview with Padding"),
                        )
                        .clicked()
                    {
                        state.play_padded();
                    }
                });
            });
        });
    });
}
