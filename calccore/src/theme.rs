//! Calculator theme - flat, high-contrast, no rounding
//!
//! Keeps the whole look in one place so the front end only deals with
//! layout. System fonts only; nothing is embedded in the binary.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

pub struct CalcColors;

impl CalcColors {
    pub const PAPER: Color32 = Color32::from_rgb(245, 245, 240);
    pub const INK: Color32 = Color32::from_rgb(20, 20, 20);
    pub const ACCENT: Color32 = Color32::from_rgb(200, 60, 40);
}

/// Theme configuration for the calculator window.
pub struct CalcTheme {
    pub font_size_body: f32,
    pub font_size_display: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for CalcTheme {
    fn default() -> Self {
        Self {
            font_size_body: 16.0,
            font_size_display: 32.0,
            window_padding: 8.0,
            item_spacing: 6.0,
        }
    }
}

impl CalcTheme {
    /// Apply the theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_body - 4.0, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_display, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();
        visuals.window_fill = CalcColors::PAPER;
        visuals.panel_fill = CalcColors::PAPER;
        visuals.window_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, CalcColors::INK);

        let flat = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = CalcColors::PAPER;
            ws.bg_stroke = Stroke::new(1.0, CalcColors::INK);
            ws.fg_stroke = Stroke::new(1.0, CalcColors::INK);
            ws.rounding = Rounding::ZERO;
        };
        flat(&mut visuals.widgets.noninteractive);
        flat(&mut visuals.widgets.inactive);
        flat(&mut visuals.widgets.open);
        flat(&mut visuals.widgets.hovered);
        flat(&mut visuals.widgets.active);
        visuals.widgets.hovered.bg_fill = Color32::from_rgb(230, 230, 225);
        visuals.widgets.active.bg_fill = Color32::from_rgb(215, 215, 210);

        style.visuals = visuals;
        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }

    /// Frame for the calculator readout: white fill, 1px ink outline.
    pub fn display_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(Color32::WHITE)
            .stroke(Stroke::new(1.0, CalcColors::INK))
            .inner_margin(egui::Margin::symmetric(8.0, 4.0))
    }
}
