//! Microphone toggle component
//!
//! Provides the round mic button on the session screen that switches
//! the microphone between live and muted.

use crate::session::InterviewSession;
use crate::ui::theme::Theme;
use egui::{Color32, Key, Rect, Sense, Vec2};

/// Microphone toggle button for the interview session
pub struct MicButton<'a> {
    session: &'a mut InterviewSession,
    theme: &'a Theme,
}

impl<'a> MicButton<'a> {
    /// Create a new mic button component
    pub fn new(session: &'a mut InterviewSession, theme: &'a Theme) -> Self {
        Self { session, theme }
    }

    /// Show the mic button and return the response
    pub fn show(mut self, ui: &mut egui::Ui) -> egui::Response {
        let size = Vec2::new(56.0, 56.0);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            self.paint_button(ui, rect, &response);
        }

        if response.clicked() {
            self.session.toggle_mic();
        }
        self.handle_keyboard_shortcut(ui);
        self.show_tooltip(&response);

        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, true, "Toggle microphone")
        });
        response
    }

    /// Paint the button appearance
    fn paint_button(&self, ui: &mut egui::Ui, rect: Rect, response: &egui::Response) {
        let painter = ui.painter();
        let mic_on = self.session.mic_on();

        // Red while live, black while muted
        let bg_color = if mic_on {
            if response.hovered() {
                self.theme.error_hover
            } else {
                self.theme.error
            }
        } else if response.hovered() {
            self.theme.primary_hover
        } else {
            self.theme.primary
        };

        painter.circle_filled(rect.center(), 26.0, bg_color);

        if response.hovered() && !mic_on {
            painter.circle_stroke(
                rect.center(),
                27.0,
                egui::Stroke::new(2.0, self.theme.primary.gamma_multiply(0.6)),
            );
        }

        self.draw_mic_icon(painter, rect.center(), mic_on);

        if mic_on {
            self.draw_pulsing_ring(ui, painter, rect.center());
        }
    }

    /// Draw the microphone icon, slashed while the mic is live
    fn draw_mic_icon(&self, painter: &egui::Painter, center: egui::Pos2, slashed: bool) {
        let color = Color32::WHITE;
        let stroke = egui::Stroke::new(2.0, color);

        // Capsule body
        let body = Rect::from_center_size(
            egui::pos2(center.x, center.y - 5.0),
            Vec2::new(8.0, 14.0),
        );
        painter.rect_filled(body, 4.0, color);

        // Cradle arc under the body, approximated with short segments
        // since the painter has no arc primitive
        let arc_radius = 9.0;
        let points: Vec<egui::Pos2> = (0..=8)
            .map(|i| {
                let angle = std::f32::consts::PI * (i as f32 / 8.0);
                egui::pos2(
                    center.x - arc_radius * angle.cos(),
                    center.y + arc_radius * angle.sin(),
                )
            })
            .collect();
        for pair in points.windows(2) {
            painter.line_segment([pair[0], pair[1]], stroke);
        }

        // Stem and base
        let base_y = center.y + arc_radius + 4.0;
        painter.line_segment(
            [egui::pos2(center.x, center.y + arc_radius), egui::pos2(center.x, base_y)],
            stroke,
        );
        painter.line_segment(
            [egui::pos2(center.x - 5.0, base_y), egui::pos2(center.x + 5.0, base_y)],
            stroke,
        );

        if slashed {
            painter.line_segment(
                [
                    egui::pos2(center.x - 12.0, center.y - 12.0),
                    egui::pos2(center.x + 12.0, center.y + 12.0),
                ],
                stroke,
            );
        }
    }

    /// Two expanding rings, half a cycle out of phase, while the mic
    /// is live
    fn draw_pulsing_ring(&self, ui: &egui::Ui, painter: &egui::Painter, center: egui::Pos2) {
        let t = ui.ctx().input(|i| i.time);

        for (phase, weight) in [(0.0, 1.0_f32), (std::f64::consts::PI, 0.75)] {
            let pulse = ((t * 3.0 + phase).sin() * 0.5 + 0.5) as f32;
            let radius = 28.0 + pulse * 8.0;
            let alpha = (1.0 - pulse) * 0.6 * weight;

            painter.circle_stroke(
                center,
                radius,
                egui::Stroke::new(
                    (2.0 + pulse * 2.0) * weight,
                    self.theme.mic_live.gamma_multiply(alpha),
                ),
            );
        }

        ui.ctx().request_repaint();
    }

    /// Handle keyboard shortcut (Space to toggle the mic)
    fn handle_keyboard_shortcut(&mut self, ui: &egui::Ui) {
        let space_pressed = ui.input(|i| i.key_pressed(Key::Space));

        // Only trigger if no widget has focus (to avoid conflicts with text input)
        let any_widget_focused = ui.memory(|m| m.focused().is_some());

        if space_pressed && !any_widget_focused {
            self.session.toggle_mic();
        }
    }

    /// Show tooltip with state info and keyboard hint
    fn show_tooltip(&self, response: &egui::Response) {
        if !response.hovered() {
            return;
        }

        let tooltip_text = if self.session.mic_on() {
            "Click to mute (Space)"
        } else {
            "Click to unmute (Space)"
        };

        response.clone().on_hover_text(tooltip_text);
    }
}
