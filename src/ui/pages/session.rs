//! Interview session page
//!
//! Sidebar with the timer, start/end controls, and status; a stage
//! with the interviewer and candidate side by side; the conversation
//! box underneath.

use crate::nav::Route;
use crate::session::InterviewSession;
use crate::transcript::{Speaker, ANSWER_PLACEHOLDER};
use crate::ui::components::MicButton;
use crate::ui::state::{AppState, Screen, SessionScreen};
use crate::ui::theme::{lerp_color, Theme};
use egui::{
    Align2, Color32, FontId, Frame, Margin, Rect, RichText, Rounding, Sense, Stroke, TextEdit,
    Vec2,
};

/// The live interview screen
pub struct SessionPage<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> SessionPage<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Render the page and apply any navigation it triggered
    pub fn show(self, ui: &mut egui::Ui) {
        let Self { state, theme } = self;
        let mut back = false;

        if let Screen::Session(screen) = &mut state.screen {
            Frame::none()
                .inner_margin(Margin::symmetric(24.0, 16.0))
                .show(ui, |ui| {
                    let height = ui.available_height();
                    ui.horizontal_top(|ui| {
                        back = show_sidebar(ui, theme, &mut screen.session, height);
                        ui.add_space(12.0);
                        ui.vertical(|ui| {
                            show_main(ui, theme, screen);
                        });
                    });
                });
        }

        if back {
            state.navigate(Route::Landing);
        }
    }
}

/// Timer, start/end control, status dot, and the back link
fn show_sidebar(
    ui: &mut egui::Ui,
    theme: &Theme,
    session: &mut InterviewSession,
    height: f32,
) -> bool {
    let mut back = false;

    Frame::none()
        .fill(theme.bg_secondary)
        .stroke(theme.card_stroke())
        .rounding(theme.card_rounding)
        .inner_margin(Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(176.0);
            ui.set_min_height(height - 32.0);

            ui.vertical(|ui| {
                Frame::none()
                    .fill(theme.bg_tertiary)
                    .rounding(theme.card_rounding)
                    .inner_margin(Margin::same(16.0))
                    .show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new("TIMER").size(11.0).color(theme.text_muted));
                            ui.add_space(4.0);
                            ui.label(
                                RichText::new(session.timer_text())
                                    .size(26.0)
                                    .strong()
                                    .color(theme.text_primary),
                            );
                        });
                    });
                ui.add_space(12.0);

                if session.is_active() {
                    if pill_action(ui, "End", theme.error, theme.error_hover).clicked() {
                        session.end();
                    }
                } else if pill_action(ui, "Start", theme.success, theme.success_hover).clicked() {
                    session.start();
                }
                ui.add_space(12.0);

                show_status(ui, theme, session.is_active());

                // Back link pinned to the bottom
                ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                    let back_btn = ui.add(
                        egui::Button::new(
                            RichText::new("← Back").size(12.0).color(theme.text_muted),
                        )
                        .frame(false),
                    );
                    if back_btn.clicked() {
                        back = true;
                    }
                });
            });
        });

    back
}

/// Status row with the pulsing dot
fn show_status(ui: &mut egui::Ui, theme: &Theme, running: bool) {
    Frame::none()
        .fill(theme.bg_tertiary)
        .rounding(theme.card_rounding)
        .inner_margin(Margin::symmetric(12.0, 10.0))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
                let mut radius = 5.0;
                let color = if running {
                    theme.status_active
                } else {
                    theme.status_idle
                };
                if running {
                    let t = ui.ctx().input(|i| i.time);
                    let pulse = ((t * 2.0).sin() * 0.5 + 0.5) as f32;
                    radius = 4.0 + pulse * 2.0;
                    ui.ctx().request_repaint();
                }
                ui.painter().circle_filled(rect.center(), radius, color);
                ui.label(
                    RichText::new(if running { "Active" } else { "Paused" })
                        .size(12.0)
                        .color(theme.text_secondary),
                );
            });
        });
}

/// Heading, the two stage boxes, and the conversation box
fn show_main(ui: &mut egui::Ui, theme: &Theme, screen: &mut SessionScreen) {
    ui.label(
        RichText::new("Interview Session")
            .size(26.0)
            .strong()
            .color(theme.text_primary),
    );
    ui.add_space(12.0);

    let total = ui.available_height();
    let stage_height = (total * 0.62).max(240.0);
    let convo_height = (total - stage_height - 16.0).max(140.0);

    ui.horizontal(|ui| {
        let box_width = ((ui.available_width() - 12.0) / 2.0).max(200.0);
        interviewer_box(ui, theme, Vec2::new(box_width, stage_height));
        ui.add_space(12.0);
        candidate_box(ui, theme, screen, Vec2::new(box_width, stage_height));
    });
    ui.add_space(16.0);
    conversation_box(ui, theme, screen, convo_height);
}

/// The interviewer's side of the stage
fn interviewer_box(ui: &mut egui::Ui, theme: &Theme, size: Vec2) {
    Frame::none()
        .fill(theme.bg_tertiary)
        .stroke(theme.card_stroke())
        .rounding(theme.box_rounding)
        .inner_margin(Margin::same(24.0))
        .show(ui, |ui| {
            ui.set_width(size.x - 48.0);
            ui.set_height(size.y - 48.0);

            let free = ui.available_height() - 128.0 - 56.0 - 16.0;
            ui.vertical_centered(|ui| {
                ui.add_space((free / 2.0).max(0.0));
                interviewer_avatar(ui, theme);
                ui.add_space(16.0);
                speaker_button(ui, theme);
            });
        });
}

/// The candidate's side of the stage, with the mic toggle and the
/// answer input along the bottom
fn candidate_box(ui: &mut egui::Ui, theme: &Theme, screen: &mut SessionScreen, size: Vec2) {
    Frame::none()
        .fill(theme.bg_tertiary)
        .stroke(theme.card_stroke())
        .rounding(theme.box_rounding)
        .inner_margin(Margin::same(24.0))
        .show(ui, |ui| {
            ui.set_width(size.x - 48.0);
            ui.set_height(size.y - 48.0);

            let free = ui.available_height() - 128.0 - 56.0 - 72.0;
            ui.vertical_centered(|ui| {
                ui.add_space((free / 2.0).max(0.0));
                person_avatar(ui, theme);
                ui.add_space(16.0);
                MicButton::new(&mut screen.session, theme).show(ui);
            });

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                ui.horizontal(|ui| {
                    let edit_width = ui.available_width() - 48.0;
                    let edit = ui.add(
                        TextEdit::singleline(&mut screen.draft_answer)
                            .hint_text("Type your answer...")
                            .desired_width(edit_width),
                    );
                    edit.widget_info(|| {
                        egui::WidgetInfo::labeled(egui::WidgetType::TextEdit, true, "Answer input")
                    });

                    let enter_sent =
                        edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if send_button(ui, theme).clicked() || enter_sent {
                        screen.send_answer();
                        if enter_sent {
                            edit.request_focus();
                        }
                    }
                });
            });
        });
}

/// Transcript of the conversation so far
fn conversation_box(ui: &mut egui::Ui, theme: &Theme, screen: &SessionScreen, height: f32) {
    Frame::none()
        .fill(theme.bg_tertiary)
        .stroke(theme.card_stroke())
        .rounding(theme.box_rounding)
        .inner_margin(Margin::same(20.0))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.set_height((height - 40.0).max(80.0));

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for (i, entry) in screen.transcript.entries().iter().enumerate() {
                        if i > 0 {
                            ui.add_space(10.0);
                            ui.separator();
                            ui.add_space(10.0);
                        }
                        ui.label(
                            RichText::new(entry.speaker.label().to_uppercase())
                                .size(11.0)
                                .color(theme.text_muted),
                        );
                        ui.add_space(4.0);
                        ui.label(
                            RichText::new(entry.text.as_str())
                                .size(14.0)
                                .color(theme.text_primary),
                        );
                    }

                    // Hold the response slot open until an answer lands
                    if !screen.transcript.has_answer() {
                        ui.add_space(10.0);
                        ui.separator();
                        ui.add_space(10.0);
                        ui.label(
                            RichText::new(Speaker::Candidate.label().to_uppercase())
                                .size(11.0)
                                .color(theme.text_muted),
                        );
                        ui.add_space(4.0);
                        ui.label(
                            RichText::new(ANSWER_PLACEHOLDER)
                                .size(14.0)
                                .color(theme.text_muted),
                        );
                    }
                });
        });
}

/// Gradient disc with the interviewer initials
fn interviewer_avatar(ui: &mut egui::Ui, theme: &Theme) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(128.0), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }
    let c = rect.center();
    let radius = 64.0;

    // Triangle fan with colors lerped across x
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(c, lerp_color(theme.avatar_teal, theme.avatar_emerald, 0.5));
    let n: u32 = 48;
    for i in 0..=n {
        let angle = i as f32 / n as f32 * std::f32::consts::TAU;
        let pos = c + radius * Vec2::angled(angle);
        let f = (pos.x - (c.x - radius)) / (2.0 * radius);
        mesh.colored_vertex(pos, lerp_color(theme.avatar_teal, theme.avatar_emerald, f));
    }
    for i in 0..n {
        mesh.add_triangle(0, i + 1, i + 2);
    }
    ui.painter().add(egui::Shape::mesh(mesh));

    ui.painter().text(
        c,
        Align2::CENTER_CENTER,
        "AI",
        FontId::proportional(36.0),
        Color32::WHITE,
    );
}

/// Gray disc with a person silhouette
fn person_avatar(ui: &mut egui::Ui, theme: &Theme) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(128.0), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }
    let painter = ui.painter();
    let c = rect.center();
    painter.circle_filled(c, 64.0, theme.border);

    // Head
    painter.circle_filled(egui::pos2(c.x, c.y - 14.0), 16.0, theme.text_muted);

    // Shoulders as a dome
    let shoulder_center = egui::pos2(c.x, c.y + 44.0);
    let shoulder_radius = 26.0;
    let mut points = Vec::new();
    let n = 16;
    for i in 0..=n {
        let angle = std::f32::consts::PI + std::f32::consts::PI * (i as f32 / n as f32);
        points.push(egui::pos2(
            shoulder_center.x + shoulder_radius * angle.cos(),
            shoulder_center.y + shoulder_radius * angle.sin(),
        ));
    }
    painter.add(egui::Shape::convex_polygon(
        points,
        theme.text_muted,
        Stroke::NONE,
    ));
}

/// Decorative speaker button under the interviewer avatar. Breathes
/// while the screen is up.
fn speaker_button(ui: &mut egui::Ui, theme: &Theme) {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(56.0), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }
    let t = ui.ctx().input(|i| i.time);
    let breath = ((t * 1.5).sin() * 0.5 + 0.5) as f32;
    let radius = 25.0 + breath * 2.0;
    let fill = if response.hovered() {
        theme.primary_hover
    } else {
        theme.primary
    };
    ui.painter().circle_filled(rect.center(), radius, fill);
    draw_speaker_icon(ui.painter(), rect.center());
    ui.ctx().request_repaint();
}

/// Speaker glyph: box, cone, and two sound waves
fn draw_speaker_icon(painter: &egui::Painter, center: egui::Pos2) {
    let color = Color32::WHITE;

    painter.rect_filled(
        Rect::from_center_size(egui::pos2(center.x - 7.0, center.y), Vec2::new(6.0, 10.0)),
        1.0,
        color,
    );
    painter.add(egui::Shape::convex_polygon(
        vec![
            egui::pos2(center.x - 4.0, center.y - 4.0),
            egui::pos2(center.x + 2.0, center.y - 9.0),
            egui::pos2(center.x + 2.0, center.y + 9.0),
            egui::pos2(center.x - 4.0, center.y + 4.0),
        ],
        color,
        Stroke::NONE,
    ));

    // Sound waves as short arc approximations
    for radius in [6.0_f32, 10.0] {
        let n = 6;
        for i in 0..n {
            let a0 = -0.9 + 1.8 * (i as f32 / n as f32);
            let a1 = -0.9 + 1.8 * ((i + 1) as f32 / n as f32);
            let p0 = egui::pos2(
                center.x + 2.0 + radius * a0.cos(),
                center.y + radius * a0.sin(),
            );
            let p1 = egui::pos2(
                center.x + 2.0 + radius * a1.cos(),
                center.y + radius * a1.sin(),
            );
            painter.line_segment([p0, p1], Stroke::new(1.5, color));
        }
    }
}

/// Round black send button with a paper plane
fn send_button(ui: &mut egui::Ui, theme: &Theme) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(40.0), Sense::click());

    if ui.is_rect_visible(rect) {
        let fill = if response.hovered() {
            theme.primary_hover
        } else {
            theme.primary
        };
        ui.painter().circle_filled(rect.center(), 19.0, fill);

        let c = rect.center();
        ui.painter().add(egui::Shape::convex_polygon(
            vec![
                egui::pos2(c.x - 6.0, c.y - 6.0),
                egui::pos2(c.x + 7.0, c.y),
                egui::pos2(c.x - 6.0, c.y + 6.0),
            ],
            Color32::WHITE,
            Stroke::NONE,
        ));
    }

    response.widget_info(|| {
        egui::WidgetInfo::labeled(egui::WidgetType::Button, true, "Send answer")
    });
    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Full-width pill button used for the start and end controls
fn pill_action(
    ui: &mut egui::Ui,
    label: &str,
    fill: Color32,
    hover_fill: Color32,
) -> egui::Response {
    let size = Vec2::new(ui.available_width(), 30.0);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let fill = if response.hovered() { hover_fill } else { fill };
        ui.painter()
            .rect_filled(rect, Rounding::same(rect.height() / 2.0), fill);
        let galley = ui.painter().layout_no_wrap(
            label.to_string(),
            FontId::proportional(12.0),
            Color32::WHITE,
        );
        ui.painter()
            .galley(rect.center() - galley.size() / 2.0, galley, Color32::WHITE);
    }

    let label = label.to_string();
    response.widget_info(move || {
        egui::WidgetInfo::labeled(egui::WidgetType::Button, true, label.clone())
    });
    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}
