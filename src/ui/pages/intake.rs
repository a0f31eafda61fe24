//! Resume intake page
//!
//! The form collecting a resume file, target role, and experience
//! level before an interview session can begin. Validation errors are
//! shown inline and cleared as soon as any field changes.

use crate::intake::{has_accepted_extension, ExperienceLevel, ResumeFile};
use crate::nav::Route;
use crate::ui::state::{AppState, IntakeScreen, Screen};
use crate::ui::theme::Theme;
use egui::{
    Color32, ComboBox, FontId, Frame, Margin, RichText, Rounding, Sense, Stroke, TextEdit, Vec2,
};
use tracing::debug;

/// The resume intake form
pub struct IntakePage<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> IntakePage<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Render the page and apply any navigation it triggered
    pub fn show(self, ui: &mut egui::Ui) {
        let Self { state, theme } = self;

        handle_dropped_files(ui, state);
        let hovering_file = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());

        let mut back = false;
        let mut submit = false;

        if let Screen::Intake(intake) = &mut state.screen {
            egui::ScrollArea::vertical().show(ui, |ui| {
                Frame::none()
                    .inner_margin(Margin::symmetric(56.0, 24.0))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new("Start Interview")
                                    .size(30.0)
                                    .strong()
                                    .color(theme.text_primary),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    let back_btn = ui.add(
                                        egui::Button::new(
                                            RichText::new("← Back to Home")
                                                .size(13.0)
                                                .color(theme.text_muted),
                                        )
                                        .frame(false),
                                    );
                                    if back_btn.clicked() {
                                        back = true;
                                    }
                                },
                            );
                        });
                        ui.add_space(24.0);

                        ui.vertical_centered(|ui| {
                            ui.set_max_width(640.0);
                            Frame::none()
                                .fill(theme.bg_secondary)
                                .stroke(theme.card_stroke())
                                .rounding(theme.box_rounding)
                                .inner_margin(Margin::same(48.0))
                                .show(ui, |ui| {
                                    show_form(ui, theme, intake, hovering_file, &mut submit);
                                });
                        });
                    });
            });
        }

        if back {
            state.navigate(Route::Landing);
        }
        if submit {
            state.submit_intake();
        }
    }
}

/// The white card with all three form sections and the submit button
fn show_form(
    ui: &mut egui::Ui,
    theme: &Theme,
    intake: &mut IntakeScreen,
    hovering_file: bool,
    submit: &mut bool,
) {
    ui.vertical(|ui| {
        ui.label(
            RichText::new("Welcome to Your Mock Interview")
                .size(24.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.add_space(8.0);
        ui.label(
            RichText::new(
                "Get ready to practice with AI-powered interview simulations \
                 tailored to your role and experience level.",
            )
            .size(15.0)
            .color(theme.text_muted),
        );
        ui.add_space(24.0);

        // Resume upload
        section_label(ui, theme, "Upload Your Resume");
        drop_zone(ui, theme, intake, hovering_file);
        ui.label(
            RichText::new("Accepted formats: PDF, DOC, DOCX")
                .size(11.0)
                .color(theme.text_muted),
        );
        ui.add_space(16.0);
        ui.separator();
        ui.add_space(16.0);

        // Target role
        section_label(ui, theme, "Role");
        let role_edit = ui.add(
            TextEdit::singleline(&mut intake.submission.role)
                .hint_text("e.g., Software Engineer, Product Manager, Data Scientist")
                .desired_width(f32::INFINITY),
        );
        role_edit.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::TextEdit, true, "Role input")
        });
        if role_edit.changed() {
            intake.clear_error();
        }
        ui.add_space(16.0);
        ui.separator();
        ui.add_space(16.0);

        // Experience level
        section_label(ui, theme, "Experience Level");
        let before = intake.submission.experience;
        ComboBox::from_id_salt("experience_level")
            .selected_text(intake.submission.experience.label())
            .width(200.0)
            .show_ui(ui, |ui| {
                for level in ExperienceLevel::ALL {
                    ui.selectable_value(&mut intake.submission.experience, level, level.label());
                }
            });
        if intake.submission.experience != before {
            intake.clear_error();
        }
        ui.add_space(24.0);

        if let Some(err) = intake.error {
            Frame::none()
                .fill(theme.error_bg)
                .stroke(Stroke::new(1.0, theme.error_border))
                .rounding(theme.card_rounding)
                .inner_margin(Margin::symmetric(16.0, 12.0))
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(
                        RichText::new(err.user_message())
                            .size(13.0)
                            .color(theme.error_text),
                    );
                });
            ui.add_space(16.0);
        }

        if submit_button(ui, theme, "Begin Interview Session →").clicked() {
            *submit = true;
        }
    });
}

fn section_label(ui: &mut egui::Ui, theme: &Theme, text: &str) {
    ui.label(
        RichText::new(text)
            .size(13.0)
            .strong()
            .color(theme.text_secondary),
    );
    ui.add_space(6.0);
}

/// The resume drop target. Shows the attached file with a remove
/// button once one is present.
fn drop_zone(ui: &mut egui::Ui, theme: &Theme, intake: &mut IntakeScreen, hovering_file: bool) {
    let attached = intake.submission.resume.as_ref().map(|r| r.name.clone());

    Frame::none()
        .fill(if hovering_file {
            theme.bg_tertiary
        } else {
            theme.bg_primary
        })
        .stroke(Stroke::new(
            1.0,
            if hovering_file {
                theme.success
            } else {
                theme.border
            },
        ))
        .rounding(theme.card_rounding)
        .inner_margin(Margin::symmetric(16.0, 14.0))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            match attached {
                Some(name) => {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("📄").size(16.0));
                        ui.label(RichText::new(name).size(13.0).color(theme.text_primary));
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                let remove = ui.add(
                                    egui::Button::new(
                                        RichText::new("Remove").size(12.0).color(theme.error),
                                    )
                                    .frame(false),
                                );
                                if remove.clicked() {
                                    intake.submission.resume = None;
                                    intake.clear_error();
                                }
                            },
                        );
                    });
                }
                None => {
                    ui.label(
                        RichText::new("Drop your resume file here")
                            .size(13.0)
                            .color(theme.text_muted),
                    );
                }
            }
        });
}

/// Full-width black pill submit button
fn submit_button(ui: &mut egui::Ui, theme: &Theme, label: &str) -> egui::Response {
    let size = Vec2::new(ui.available_width(), 44.0);
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let fill = if response.hovered() {
            theme.primary_hover
        } else {
            theme.primary
        };
        ui.painter()
            .rect_filled(rect, Rounding::same(rect.height() / 2.0), fill);
        let galley = ui.painter().layout_no_wrap(
            label.to_string(),
            FontId::proportional(14.0),
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

/// Attach files dropped onto the window to the form. Files without an
/// accepted extension are ignored.
fn handle_dropped_files(ui: &egui::Ui, state: &mut AppState) {
    let dropped = ui.ctx().input(|i| i.raw.dropped_files.clone());
    if dropped.is_empty() {
        return;
    }
    let Screen::Intake(intake) = &mut state.screen else {
        return;
    };

    for file in dropped {
        let name = if !file.name.is_empty() {
            file.name.clone()
        } else if let Some(path) = &file.path {
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        } else {
            String::new()
        };

        if name.is_empty() || !has_accepted_extension(&name) {
            debug!("[INTAKE] Ignoring dropped file '{}'", name);
            continue;
        }

        let mut resume = ResumeFile::new(name);
        if let Some(path) = file.path {
            resume = resume.with_path(path);
        }
        intake.submission.resume = Some(resume);
        intake.clear_error();
    }
}
