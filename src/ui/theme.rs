//! Theme and styling for the Mockly UI
//!
//! This module provides colors, fonts, and visual styling for the
//! application. Mockly is a light product: warm off-white page, white
//! cards, putty inset boxes, black call-to-action buttons.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Vec2, Visuals};

/// Application theme configuration
#[derive(Clone, Debug)]
pub struct Theme {
    /// Primary action color (black call-to-action buttons)
    pub primary: Color32,
    /// Primary action hover
    pub primary_hover: Color32,
    /// Start button color
    pub success: Color32,
    pub success_hover: Color32,
    /// End button color
    pub error: Color32,
    pub error_hover: Color32,

    /// Background colors
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,

    /// Text colors
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,

    /// Standard border color
    pub border: Color32,

    /// Hover tint for flat menu pill items
    pub pill_hover: Color32,

    /// Live mic pulse color
    pub mic_live: Color32,
    /// Status dot colors
    pub status_active: Color32,
    pub status_idle: Color32,

    /// Inline error banner colors
    pub error_bg: Color32,
    pub error_border: Color32,
    pub error_text: Color32,

    /// Interviewer avatar gradient endpoints
    pub avatar_teal: Color32,
    pub avatar_emerald: Color32,

    /// Border radius for pill buttons
    pub button_rounding: Rounding,
    /// Border radius for cards
    pub card_rounding: Rounding,
    /// Border radius for the big inset boxes
    pub box_rounding: Rounding,

    /// Standard spacing
    pub spacing: f32,
    /// Large spacing
    pub spacing_lg: f32,
    /// Small spacing
    pub spacing_sm: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// Create the light theme
    pub fn light() -> Self {
        Self {
            primary: Color32::from_rgb(0, 0, 0),            // Black
            primary_hover: Color32::from_rgb(31, 41, 55),   // Gray-800
            success: Color32::from_rgb(5, 150, 105),        // Emerald-600
            success_hover: Color32::from_rgb(4, 120, 87),   // Emerald-700
            error: Color32::from_rgb(220, 38, 38),          // Red-600
            error_hover: Color32::from_rgb(185, 28, 28),    // Red-700

            bg_primary: Color32::from_rgb(249, 249, 249),   // Off-white page
            bg_secondary: Color32::from_rgb(255, 255, 255), // White cards
            bg_tertiary: Color32::from_rgb(232, 230, 225),  // Putty inset boxes

            text_primary: Color32::from_rgb(17, 24, 39),    // Near black
            text_secondary: Color32::from_rgb(55, 65, 81),  // Gray
            text_muted: Color32::from_rgb(107, 114, 128),   // Medium gray

            border: Color32::from_rgb(209, 213, 219),       // Gray-300

            pill_hover: Color32::from_rgb(244, 242, 237),   // Light putty

            mic_live: Color32::from_rgb(239, 68, 68),       // Red-500
            status_active: Color32::from_rgb(16, 185, 129), // Emerald-500
            status_idle: Color32::from_rgb(156, 163, 175),  // Gray-400

            error_bg: Color32::from_rgb(254, 242, 242),     // Red-50
            error_border: Color32::from_rgb(254, 202, 202), // Red-200
            error_text: Color32::from_rgb(185, 28, 28),     // Red-700

            avatar_teal: Color32::from_rgb(15, 118, 110),   // Teal-700
            avatar_emerald: Color32::from_rgb(5, 150, 105), // Emerald-600

            button_rounding: Rounding::same(24.0),
            card_rounding: Rounding::same(16.0),
            box_rounding: Rounding::same(28.0),

            spacing: 16.0,
            spacing_lg: 24.0,
            spacing_sm: 8.0,
        }
    }

    /// Apply this theme to egui
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = Visuals::light();

        visuals.panel_fill = self.bg_primary;
        visuals.window_fill = self.bg_secondary;
        visuals.extreme_bg_color = self.bg_secondary;

        // Interactive widgets rest on the putty fill, not the card white
        visuals.widgets.noninteractive.bg_fill = self.bg_secondary;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        visuals.widgets.inactive.bg_fill = self.bg_tertiary;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.hovered.bg_fill = self.bg_tertiary;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.active.bg_fill = self.border;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.selection.bg_fill = self.primary.gamma_multiply(0.2);
        visuals.selection.stroke = Stroke::new(1.0, self.primary);
        visuals.hyperlink_color = self.primary;

        visuals.window_rounding = self.card_rounding;
        visuals.window_stroke = Stroke::new(1.0, self.border);

        ctx.set_visuals(visuals);

        // Stock egui fonts, no bundled typeface
        ctx.set_fonts(egui::FontDefinitions::default());

        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing = Vec2::splat(self.spacing_sm);
        style.spacing.window_margin = egui::Margin::same(self.spacing);
        style.spacing.button_padding = Vec2::new(self.spacing, self.spacing_sm);

        // Type scale
        style.text_styles.insert(
            egui::TextStyle::Heading,
            FontId::new(28.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            FontId::new(14.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Monospace,
            FontId::new(13.0, FontFamily::Monospace),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            FontId::new(14.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Small,
            FontId::new(12.0, FontFamily::Proportional),
        );

        ctx.set_style(style);
    }

    /// Stroke used for card and box borders
    pub fn card_stroke(&self) -> Stroke {
        Stroke::new(1.0, self.border)
    }
}

/// Blend two colors in gamma space
pub fn lerp_color(a: Color32, b: Color32, f: f32) -> Color32 {
    let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * f) as u8;
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}
