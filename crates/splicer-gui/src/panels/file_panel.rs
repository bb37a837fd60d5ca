//! File panel: source folder, audio file list and output folder.
use crate::state::AppState;
use crate::theme::SplicerTheme;
use compact_str::CompactString;
use egui::{RichText, Ui};

/// Draw the left sidebar.
pub fn file_panel(ui: &mut Ui, state: &mut AppState, theme: &SplicerTheme) {
    ui.add_space(6.0);
    theme.group(ui, "Source Folder", |ui| {
        let text = state
            .source_folder_display()
            .unwrap_or_else(|| "No folder selected".to_string());
        ui.add(egui::Label::new(RichText::new(text).size(11.0)).wrap());
    });

    ui.add_space(6.0);
    let mut clicked: Option<CompactString> = None;
    // Leave room for the output folder group below the list.
    let list_height = (ui.available_height() - 110.0).max(120.0);
    theme.group(ui, "Audio Files", |ui| {
        egui::ScrollArea::vertical()
            .max_height(list_height)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                let Some(listing) = state.listing.as_ref() else {
                    ui.label(RichText::new("Select a folder to list its audio files").color(theme.text_muted));
                    return;
                };
                let active = state.loading_file.as_ref().or(state.current_file.as_ref());
                for entry in &listing.entries {
                    let selected = active == Some(&entry.name);
                    let text = if entry.used {
                        RichText::new(format!("✓ {}", entry.name)).color(theme.success)
                    } else {
                        RichText::new(entry.name.as_str()).color(theme.text_primary)
                    };
                    let response = ui.selectable_label(selected, text);
                    let response = if entry.used {
                        response.on_hover_text("A clip has already been saved from this file")
                    } else {
                        response
                    };
                    if response.clicked() {
                        clicked = Some(entry.name.clone());
                    }
                }
            });
        ui.add_space(4.0);
        ui.label(RichText::new(state.file_count_label()).size(11.0).color(theme.text_muted));
    });
    if let Some(name) = clicked {
        state.select_file(&name);
    }

    ui.add_space(6.0);
    theme.group(ui, "Output Folder", |ui| {
        let text = state
            .output_folder_display()
            .unwrap_or_else(|| "No output folder selected".to_string());
        ui.add(egui::Label::new(RichText::new(text).size(11.0)).wrap());
    });
}
