//! Top action bar: folder pickers, refresh, theme toggle and branding.
use crate::state::AppState;
use egui::Ui;
use std::path::Path;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("🎵 Audio Splicer")
                .size(18.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );

        ui.separator();

        if ui
            .button("📁 Select Folder")
            .on_hover_text("Choose the folder of source recordings")
            .clicked()
        {
            if let Some(folder) = pick_folder("Select Audio Folder", state.source_folder.as_deref()) {
                state.set_source_folder(folder);
            }
        }

        if ui
            .button("📂 Select Output Folder")
            .on_hover_text("Choose where spliced clips are saved")
            .clicked()
        {
            if let Some(folder) = pick_folder("Select Output Folder", state.output_folder.as_deref()) {
                state.set_output_folder(folder);
            }
        }

        let can_refresh = state.listing.is_some();
        if ui
            .add_enabled(can_refresh, egui::Button::new("🔄 Refresh"))
            .on_hover_text("Re-read the source folder and its used-file list")
            .on_disabled_hover_text("Select a source folder first")
            .clicked()
        {
            state.refresh_listing();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("ℹ").on_hover_text("About Audio Splicer").clicked() {
                state.show_about = true;
            }

            let theme_label = if state.dark_mode { "☀" } else { "🌙" };
            let theme_tip = if state.dark_mode {
                "Switch to light mode"
            } else {
                "Switch to dark mode"
            };
            if ui.button(theme_label).on_hover_text(theme_tip).clicked() {
                state.dark_mode = !state.dark_mode;
            }
        });
    });
}

/// Native folder picker, opened at `start` when it is set.
fn pick_folder(title: &str, start: Option<&Path>) -> Option<std::path::PathBuf> {
    let mut dialog = rfd::FileDialog::new().set_title(title);
    if let Some(start) = start {
        dialog = dialog.set_directory(start);
    }
    dialog.pick_folder()
}
