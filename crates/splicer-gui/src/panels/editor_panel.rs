//! Editor panel: current file header, waveform and selection readout.
use crate::state::AppState;
use crate::theme::SplicerTheme;
use crate::widgets::waveform::{self, WaveformAction};
use egui::{RichText, Ui};
use splicer_core::model::time::format_ms;

pub fn editor_panel(ui: &mut Ui, state: &mut AppState, theme: &SplicerTheme) {
    let header = match state.current_file.as_ref() {
        Some(name) => format!("📎 {name}"),
        None => "No file loaded".to_string(),
    };
    egui::Frame::new()
        .fill(theme.surface)
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(header).size(14.0).strong().color(theme.accent));
            });
        });
    ui.add_space(6.0);

    match waveform::waveform(ui, state, theme) {
        Some(WaveformAction::Select { start_ms, end_ms }) => state.set_selection_ms(start_ms, end_ms),
        Some(WaveformAction::Clear) => state.clear_selection(),
        None => {}
    }

    ui.add_space(6.0);
    theme.group(ui, "Selection", |ui| {
        let (start, end, duration) = match state.selection.as_ref() {
            Some(sel) => (
                format_ms(sel.start_ms),
                format_ms(sel.end_ms),
                format_ms(sel.duration_ms()),
            ),
            None => ("-- ms".to_string(), "-- ms".to_string(), "-- ms".to_string()),
        };
        ui.columns(3, |cols| {
            cols[0].label(format!("Start: {start}"));
            cols[1].label(format!("End: {end}"));
            cols[2].label(format!("Duration: {duration}"));
        });
    });
}
