//! Bottom status bar: the last status message plus clip and playback facts.
use crate::state::{AppPhase, AppState, PlaybackKind};
use crate::theme::SplicerTheme;
use egui::{RichText, Ui};
use splicer_core::model::time::format_duration;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &AppState, theme: &SplicerTheme) {
    ui.horizontal(|ui| {
        if state.phase == AppPhase::Loading {
            ui.spinner();
        }
        ui.label(RichText::new(&state.status).size(12.0).color(theme.text_primary));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if let Some(clip) = state.clip.as_ref() {
                ui.label(
                    RichText::new(format!("{} Hz", clip.sample_rate()))
                        .size(11.0)
                        .color(theme.text_muted),
                );
                ui.separator();
                let channels = match state.clip_channels {
                    1 => "mono".to_string(),
                    2 => "stereo → mono".to_string(),
                    n => format!("{n} ch → mono"),
                };
                ui.label(RichText::new(channels).size(11.0).color(theme.text_muted));
                ui.separator();
                ui.label(
                    RichText::new(format_duration(clip.duration_ms()))
                        .size(11.0)
                        .color(theme.accent),
                );
            }

            if let Some(kind) = state.playback_kind() {
                ui.separator();
                let what = match kind {
                    PlaybackKind::Original => "▶ original",
                    PlaybackKind::Selection => "▶ selection",
                    PlaybackKind::Padded => "▶ padded",
                };
                ui.label(RichText::new(what).size(11.0).color(theme.playhead));
            }
        });
    });
}
