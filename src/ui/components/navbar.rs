//! Top navigation bar
//!
//! Logo on the left, a white menu pill centered in the bar. The pill
//! holds the HOME item, two placeholder items, and the black
//! START INTERVIEW call to action.

use crate::nav::Route;
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{Button, Color32, FontId, Frame, Margin, RichText, Sense, Vec2};

/// Navigation bar shown above every screen
pub struct Navbar<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> Navbar<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Render the bar and apply any navigation it triggered
    pub fn show(self, ui: &mut egui::Ui) {
        let Self { state, theme } = self;
        let bar = ui.available_rect_before_wrap();
        let mut go_to: Option<Route> = None;

        ui.horizontal(|ui| {
            let logo = ui.add(
                Button::new(
                    RichText::new("MOCKLY")
                        .size(20.0)
                        .strong()
                        .color(theme.text_primary),
                )
                .frame(false),
            );
            if logo.clicked() {
                go_to = Some(Route::Landing);
            }

            // Center the menu pill in the bar. The width is measured a
            // frame late, which settles after the first paint.
            let width_id = egui::Id::new("navbar_pill_width");
            let pill_width: f32 = ui
                .ctx()
                .data(|d| d.get_temp(width_id))
                .unwrap_or(420.0);
            let indent = (bar.center().x - pill_width / 2.0 - ui.cursor().left()).max(0.0);
            ui.add_space(indent);

            let pill = Frame::none()
                .fill(theme.bg_secondary)
                .stroke(theme.card_stroke())
                .rounding(theme.button_rounding)
                .inner_margin(Margin::symmetric(8.0, 6.0))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        if pill_button(ui, theme, "HOME", theme.text_primary, None).clicked() {
                            go_to = Some(Route::Landing);
                        }
                        // No account or history screens exist; these
                        // items go nowhere, like the anchors they copy.
                        let _ = pill_button(ui, theme, "LOGIN", theme.text_primary, None);
                        let _ = pill_button(ui, theme, "HISTORY", theme.text_primary, None);
                        if pill_button(
                            ui,
                            theme,
                            "START INTERVIEW",
                            Color32::WHITE,
                            Some((theme.primary, theme.primary_hover)),
                        )
                        .clicked()
                        {
                            go_to = Some(Route::Resume);
                        }
                    });
                });
            ui.ctx()
                .data_mut(|d| d.insert_temp(width_id, pill.response.rect.width()));
        });

        if let Some(route) = go_to {
            state.navigate(route);
        }
    }
}

/// One pill-shaped menu button. Without a fill the item is flat and
/// only tints on hover.
fn pill_button(
    ui: &mut egui::Ui,
    theme: &Theme,
    label: &str,
    text_color: Color32,
    fill: Option<(Color32, Color32)>,
) -> egui::Response {
    let padding = Vec2::new(20.0, 10.0);
    let galley = ui
        .painter()
        .layout_no_wrap(label.to_string(), FontId::proportional(12.0), text_color);
    let size = galley.size() + 2.0 * padding;
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());

    if ui.is_rect_visible(rect) {
        let fill = match fill {
            Some((_, hover)) if response.hovered() => Some(hover),
            Some((normal, _)) => Some(normal),
            None if response.hovered() => Some(theme.pill_hover),
            None => None,
        };
        if let Some(fill) = fill {
            ui.painter().rect_filled(rect, theme.button_rounding, fill);
        }
        ui.painter()
            .galley(rect.center() - galley.size() / 2.0, galley, text_color);
    }

    let label = label.to_string();
    response.widget_info(move || {
        egui::WidgetInfo::labeled(egui::WidgetType::Button, true, label.clone())
    });
    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}
