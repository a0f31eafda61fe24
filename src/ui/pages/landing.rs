//! Landing page
//!
//! The animated hero that sits underneath every overlay screen. The
//! headline fades in word by word, followed by the call to action.

use crate::nav::Route;
use crate::ui::state::AppState;
use crate::ui::theme::{lerp_color, Theme};
use egui::{Color32, FontId, Margin, Rect, RichText, Rounding, Sense, Stroke, Vec2};

/// Duration of one element's fade, in seconds
const FADE_SECS: f64 = 0.8;
/// Delay before the first headline line starts
const BASE_DELAY: f64 = 0.3;
/// Extra delay per headline line
const LINE_STAGGER: f64 = 0.4;
/// Extra delay per element within a line
const WORD_STAGGER: f64 = 0.15;
/// Delay before the call to action fades in
const CTA_DELAY: f64 = 2.2;

const TAGLINE: &str = "Skip the guesswork. Mockly gives you realistic mock interviews \
    tailored to your role and level. Fail here, learn fast, and step into your real \
    interviews ready to win";

/// The landing hero with headline, capsule, and call to action
pub struct LandingPage<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> LandingPage<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Render the page and apply any navigation it triggered
    pub fn show(self, ui: &mut egui::Ui) {
        let t = ui.ctx().input(|i| i.time);
        let mut start = false;

        egui::Frame::none()
            .inner_margin(Margin::symmetric(56.0, 24.0))
            .show(ui, |ui| {
                self.show_headline(ui, t);
                ui.add_space(48.0);

                ui.horizontal(|ui| {
                    if self.cta_button(ui, t).clicked() {
                        start = true;
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        ui.vertical(|ui| {
                            ui.set_max_width(380.0);
                            ui.label(
                                RichText::new("Ai-Interview")
                                    .size(12.0)
                                    .color(self.theme.status_idle),
                            );
                            ui.separator();
                            ui.label(
                                RichText::new(TAGLINE)
                                    .size(20.0)
                                    .color(self.theme.text_secondary),
                            );
                        });
                    });
                });
            });

        if start {
            self.state.navigate(Route::Resume);
        }

        // Keep repainting until the intro animation settles
        if t < CTA_DELAY + FADE_SECS {
            ui.ctx().request_repaint();
        }
    }

    /// The three headline lines, each fading in later than the last
    fn show_headline(&self, ui: &mut egui::Ui, t: f64) {
        let font = FontId::proportional(72.0);

        ui.horizontal(|ui| {
            self.headline_word(ui, &font, "PRACTICE", t, BASE_DELAY);
            ui.add_space(12.0);
            self.capsule(ui, t, BASE_DELAY + WORD_STAGGER);
            ui.add_space(12.0);
            self.headline_word(ui, &font, "SMARTER,", t, BASE_DELAY + 2.0 * WORD_STAGGER);
        });

        ui.horizontal(|ui| {
            self.headline_word(ui, &font, "PERFORM", t, BASE_DELAY + LINE_STAGGER);
            ui.add_space(12.0);
            self.headline_word(
                ui,
                &font,
                "BETTER,",
                t,
                BASE_DELAY + LINE_STAGGER + WORD_STAGGER,
            );
        });

        ui.horizontal(|ui| {
            self.headline_word(ui, &font, "EVERY", t, BASE_DELAY + 2.0 * LINE_STAGGER);
            ui.add_space(12.0);
            self.headline_word(
                ui,
                &font,
                "TIME.",
                t,
                BASE_DELAY + 2.0 * LINE_STAGGER + WORD_STAGGER,
            );
        });
    }

    /// One headline word, fading in and rising into place
    fn headline_word(&self, ui: &mut egui::Ui, font: &FontId, text: &str, t: f64, delay: f64) {
        let alpha = fade_alpha(t, delay);
        let rise = (1.0 - alpha) * 30.0;
        let galley = ui.painter().layout_no_wrap(
            text.to_string(),
            font.clone(),
            self.theme.text_primary.gamma_multiply(alpha),
        );
        let (rect, _) = ui.allocate_exact_size(galley.size(), Sense::hover());

        if ui.is_rect_visible(rect) {
            ui.painter().galley(
                egui::pos2(rect.min.x, rect.min.y + rise),
                galley,
                self.theme.text_primary,
            );
        }
    }

    /// The gradient capsule wedged into the first headline line
    fn capsule(&self, ui: &mut egui::Ui, t: f64, delay: f64) {
        let alpha = fade_alpha(t, delay);
        let rise = (1.0 - alpha) * 30.0;
        let (rect, _) = ui.allocate_exact_size(Vec2::new(140.0, 64.0), Sense::hover());

        if !ui.is_rect_visible(rect) {
            return;
        }
        let rect = rect.translate(Vec2::new(0.0, rise));
        let painter = ui.painter();
        let radius = rect.height() / 2.0;

        // End caps, then gradient strips across the body
        let body = Rect::from_min_max(
            egui::pos2(rect.min.x + radius, rect.min.y),
            egui::pos2(rect.max.x - radius, rect.max.y),
        );
        painter.circle_filled(
            egui::pos2(body.min.x, rect.center().y),
            radius,
            self.theme.avatar_teal.gamma_multiply(alpha),
        );
        painter.circle_filled(
            egui::pos2(body.max.x, rect.center().y),
            radius,
            self.theme.avatar_emerald.gamma_multiply(alpha),
        );

        let strips = 24;
        for i in 0..strips {
            let f = i as f32 / strips as f32;
            let color = lerp_color(self.theme.avatar_teal, self.theme.avatar_emerald, f)
                .gamma_multiply(alpha);
            let strip = Rect::from_min_max(
                egui::pos2(body.min.x + body.width() * f, body.min.y),
                egui::pos2(body.min.x + body.width() * (f + 1.0 / strips as f32), body.max.y),
            );
            painter.rect_filled(strip, 0.0, color);
        }

        // Play glyph
        let c = rect.center();
        let r = 10.0;
        painter.add(egui::Shape::convex_polygon(
            vec![
                egui::pos2(c.x - r * 0.5, c.y - r),
                egui::pos2(c.x - r * 0.5, c.y + r),
                egui::pos2(c.x + r, c.y),
            ],
            Color32::WHITE.gamma_multiply(alpha),
            Stroke::NONE,
        ));
    }

    /// The black pill call to action, fading in after the headline
    fn cta_button(&self, ui: &mut egui::Ui, t: f64) -> egui::Response {
        let alpha = fade_alpha(t, CTA_DELAY);
        let padding = Vec2::new(44.0, 22.0);
        let galley = ui.painter().layout_no_wrap(
            "START INTERVIEW →".to_string(),
            FontId::proportional(14.0),
            Color32::WHITE.gamma_multiply(alpha),
        );
        let size = galley.size() + 2.0 * padding;
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let fill = if response.hovered() {
                self.theme.primary_hover
            } else {
                self.theme.primary
            };
            ui.painter().rect_filled(
                rect,
                Rounding::same(rect.height() / 2.0),
                fill.gamma_multiply(alpha),
            );
            ui.painter()
                .galley(rect.center() - galley.size() / 2.0, galley, Color32::WHITE);
        }

        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, true, "START INTERVIEW →")
        });
        response.on_hover_cursor(egui::CursorIcon::PointingHand)
    }
}

/// Linear fade from 0 to 1 starting `delay` seconds in
fn fade_alpha(t: f64, delay: f64) -> f32 {
    ((t - delay) / FADE_SECS).clamp(0.0, 1.0) as f32
}
