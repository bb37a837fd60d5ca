//! Main `eframe::App` implementation for Audio Splicer.
//!
//! This is the top-level UI layout that composes all panels, widgets and
//! dialogs.
use crate::panels;
use crate::state::{AppPhase, AppState, NoticeKind};
use crate::theme::SplicerTheme;
use crate::widgets;
use splicer_core::config::{self, SplicerConfig};
use std::path::PathBuf;

/// Pre-built application state.
///
/// Construct this **before** calling `eframe::run_native` so that folder
/// listing and tracking-file reads complete before the OS window exists.
pub struct SplicerState {
    pub(crate) inner: AppState,
    config_path: PathBuf,
}

impl SplicerState {
    /// Restore the last source and output folders if they still exist.
    pub fn build(config: SplicerConfig, config_path: PathBuf) -> Self {
        let last_source = config.last_source_folder.clone();
        let last_output = config.last_output_folder.clone();
        let mut state = AppState::new(config);

        if let Some(folder) = last_source.filter(|p| p.is_dir()) {
            state.set_source_folder(folder);
        }
        if let Some(folder) = last_output.filter(|p| p.is_dir()) {
            state.set_output_folder(folder);
        }

        Self {
            inner: state,
            config_path,
        }
    }

    /// The state the window will open with.
    pub fn app_state(&self) -> &AppState {
        &self.inner
    }
}

/// The Audio Splicer application.
pub struct SplicerApp {
    state: AppState,
    config_path: PathBuf,
}

impl SplicerApp {
    /// Create a new application instance from pre-built state.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: SplicerState) -> Self {
        SplicerTheme::for_dark_mode(state.inner.dark_mode).apply(&cc.egui_ctx);
        Self {
            state: state.inner,
            config_path: state.config_path,
        }
    }
}

impl eframe::App for SplicerApp {
    /// Override the GPU clear colour to match the active theme background.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [r, g, b, a].map(|c| c as f32 / 255.0)
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Apply theme ───────────────────────────────────────────────────
        let theme = SplicerTheme::for_dark_mode(self.state.dark_mode);
        theme.apply(ctx);

        // ── Process background messages ───────────────────────────────────
        self.state.process_load_messages();
        self.state.process_playback_messages();

        if self.state.phase == AppPhase::Loading || self.state.is_playing() {
            ctx.request_repaint_after(std::time::Duration::from_millis(30));
        }

        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &mut self.state);
                ui.add_space(4.0);
            });

        // ── Dialogs ───────────────────────────────────────────────────────
        about_dialog(ctx, &mut self.state, &theme);
        notice_dialog(ctx, &mut self.state, &theme);
        overwrite_dialog(ctx, &mut self.state, &theme);

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state, &theme);
                ui.add_space(2.0);
            });

        // ── Left sidebar ──────────────────────────────────────────────────
        egui::SidePanel::left("file_panel")
            .default_width(300.0)
            .min_width(220.0)
            .max_width(480.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::file_panel::file_panel(ui, &mut self.state, &theme);
            });

        // ── Central panel ─────────────────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    panels::editor_panel::editor_panel(ui, &mut self.state, &theme);
                    ui.add_space(8.0);
                    panels::preview_panel::preview_panel(ui, &mut self.state, &theme);
                    ui.add_space(8.0);
                    panels::controls_panel::controls_panel(ui, &mut self.state, &theme);
                    ui.add_space(8.0);
                    panels::save_panel::save_panel(ui, &mut self.state, &theme);
                });
        });
    }
}

/// eframe drops the app when the window closes; persist settings then.
impl Drop for SplicerApp {
    fn drop(&mut self) {
        let config = self.state.shutdown();
        if let Err(e) = config::save_config(&self.config_path, &config) {
            tracing::warn!("Could not save settings: {e}");
        }
    }
}

fn about_dialog(ctx: &egui::Context, state: &mut AppState, theme: &SplicerTheme) {
    let mut show_about = state.show_about;
    egui::Window::new("About Audio Splicer")
        .open(&mut show_about)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([340.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("🎵 Audio Splicer")
                        .size(24.0)
                        .strong()
                        .color(theme.accent),
                );
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                        .size(13.0)
                        .color(theme.text_muted),
                );
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new(
                        "Cut clean clips out of long recitation recordings.\n\
                         Select a span, preview it with silence padding,\n\
                         and save it as a mono WAV.",
                    )
                    .size(12.0)
                    .color(theme.text_primary),
                );
                ui.add_space(12.0);
                ui.separator();
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new("Built with Rust & egui")
                        .size(11.0)
                        .color(theme.text_muted),
                );
                ui.add_space(8.0);
            });
        });
    state.show_about = show_about;
}

fn notice_dialog(ctx: &egui::Context, state: &mut AppState, theme: &SplicerTheme) {
    let Some(notice) = state.notice.clone() else {
        return;
    };
    let (icon, color) = match notice.kind {
        NoticeKind::Info => ("ℹ", theme.success),
        NoticeKind::Warning => ("⚠", theme.warning),
        NoticeKind::Error => ("✖", theme.error),
    };

    let mut dismissed = false;
    egui::Window::new(notice.title.as_str())
        .id(egui::Id::new("notice_dialog"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(icon).size(22.0).color(color));
                ui.label(egui::RichText::new(&notice.message).size(13.0));
            });
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });
    if dismissed || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        state.notice = None;
    }
}

fn overwrite_dialog(ctx: &egui::Context, state: &mut AppState, theme: &SplicerTheme) {
    let Some(question) = state.overwrite_question() else {
        return;
    };
    let mut answer = None;
    // Modal so the filename, folders and selection cannot change under the question.
    let modal = egui::Modal::new(egui::Id::new("overwrite_dialog")).show(ctx, |ui| {
        ui.label(egui::RichText::new("File Exists").strong());
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("?").size(22.0).color(theme.warning));
            ui.label(egui::RichText::new(question).size(13.0));
        });
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Yes").clicked() {
                answer = Some(true);
            }
            if ui.button("No").clicked() {
                answer = Some(false);
            }
        });
    });
    if answer.is_none() && modal.should_close() {
        answer = Some(false);
    }
    match answer {
        Some(true) => state.confirm_overwrite(),
        Some(false) => state.cancel_overwrite(),
        None => {}
    }
}
