//! Colour scheme and visual theme for Audio Splicer.
//!
//! All colours live here so the rest of the UI refers to semantic names
//! rather than raw hex codes. The dark palette is the navy/cyan scheme the
//! tool has always shipped with; the light palette mirrors its roles.

use egui::{Color32, CornerRadius, Stroke, Visuals};

/// Semantic colour palette.
#[derive(Debug, Clone)]
pub struct SplicerTheme {
    /// Window background behind the panels.
    pub window: Color32,
    pub background: Color32,
    pub surface: Color32,
    pub surface_hover: Color32,
    pub border: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub text_disabled: Color32,
    /// Waveform and selection colour.
    pub accent: Color32,
    /// Padding regions and the preview heading.
    pub padding: Color32,
    /// Audio region in the preview and used files in the list.
    pub success: Color32,
    pub playhead: Color32,
    pub warning: Color32,
    pub error: Color32,
    pub grid: Color32,
}

impl SplicerTheme {
    /// Dark theme — the default.
    pub fn dark() -> Self {
        Self {
            window: Color32::from_rgb(0x0f, 0x0f, 0x1a),
            background: Color32::from_rgb(0x1a, 0x1a, 0x2e),
            surface: Color32::from_rgb(0x16, 0x21, 0x3e),
            surface_hover: Color32::from_rgb(0x1f, 0x2b, 0x47),
            border: Color32::from_rgb(0x2d, 0x2d, 0x44),
            text_primary: Color32::from_rgb(0xe0, 0xe0, 0xe0),
            text_muted: Color32::from_rgb(0x88, 0x88, 0x88),
            text_disabled: Color32::from_rgb(0x4a, 0x4a, 0x6a),
            accent: Color32::from_rgb(0x00, 0xd9, 0xff),
            padding: Color32::from_rgb(0xff, 0xd7, 0x00),
            success: Color32::from_rgb(0x4a, 0xde, 0x80),
            playhead: Color32::from_rgb(0xff, 0x6b, 0x6b),
            warning: Color32::from_rgb(0xff, 0xb0, 0x3a),
            error: Color32::from_rgb(0xff, 0x6b, 0x6b),
            grid: Color32::from_rgba_unmultiplied(0xe0, 0xe0, 0xe0, 0x33),
        }
    }

    pub fn light() -> Self {
        Self {
            window: Color32::from_rgb(0xe8, 0xea, 0xf0),
            background: Color32::from_rgb(0xf5, 0xf6, 0xfa),
            surface: Color32::from_rgb(0xff, 0xff, 0xff),
            surface_hover: Color32::from_rgb(0xe3, 0xf4, 0xfa),
            border: Color32::from_rgb(0xc8, 0xcc, 0xd8),
            text_primary: Color32::from_rgb(0x1a, 0x1a, 0x2e),
            text_muted: Color32::from_rgb(0x6a, 0x6a, 0x7a),
            text_disabled: Color32::from_rgb(0xa0, 0xa0, 0xb0),
            accent: Color32::from_rgb(0x00, 0x8c, 0xb0),
            padding: Color32::from_rgb(0xc8, 0x96, 0x00),
            success: Color32::from_rgb(0x1f, 0x9d, 0x55),
            playhead: Color32::from_rgb(0xe0, 0x40, 0x40),
            warning: Color32::from_rgb(0xd0, 0x80, 0x20),
            error: Color32::from_rgb(0xd0, 0x30, 0x40),
            grid: Color32::from_rgba_unmultiplied(0x1a, 0x1a, 0x2e, 0x26),
        }
    }

    pub fn for_dark_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn is_dark(&self) -> bool {
        self.background.r() < 128
    }

    /// Apply this theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();

        let mut visuals = if self.is_dark() {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.panel_fill = self.background;
        visuals.window_fill = self.background;
        visuals.extreme_bg_color = self.surface;
        visuals.faint_bg_color = self.surface;
        visuals.hyperlink_color = self.accent;
        visuals.selection.bg_fill = self.accent;
        visuals.selection.stroke = Stroke::new(1.0, self.window);

        visuals.widgets.noninteractive.bg_fill = self.background;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.inactive.bg_fill = self.surface;
        visuals.widgets.inactive.weak_bg_fill = self.surface;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.hovered.bg_fill = self.surface_hover;
        visuals.widgets.hovered.weak_bg_fill = self.surface_hover;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.accent);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.active.bg_fill = self.accent;
        visuals.widgets.active.weak_bg_fill = self.accent;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.window);

        for widget in [
            &mut visuals.widgets.noninteractive,
            &mut visuals.widgets.inactive,
            &mut visuals.widgets.hovered,
            &mut visuals.widgets.active,
        ] {
            widget.corner_radius = CornerRadius::same(6);
        }

        visuals.window_stroke = Stroke::new(1.0, self.border);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);

        ctx.set_style(style);
    }

    /// Framed group box with a cyan heading, like the section boxes of the
    /// main window.
    pub fn group<R>(
        &self,
        ui: &mut egui::Ui,
        title: &str,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> R {
        egui::Frame::group(ui.style())
            .stroke(Stroke::new(1.0, self.border))
            .corner_radius(CornerRadius::same(6))
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    egui::RichText::new(title)
                        .size(12.0)
                        .strong()
                        .color(self.accent),
                );
                ui.add_space(4.0);
                add_contents(ui)
            })
            .inner
    }
}
