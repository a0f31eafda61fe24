//! Main application struct and eframe integration
//!
//! This module contains the main MocklyApp that implements eframe::App.

use crate::nav::Route;
use crate::ui::components::Navbar;
use crate::ui::pages::{IntakePage, LandingPage, SessionPage};
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, CentralPanel, TopBottomPanel};
use tracing::info;

/// Main Mockly application
pub struct MocklyApp {
    /// Application state
    state: AppState,
    /// Visual theme
    theme: Theme,
}

impl MocklyApp {
    /// Create a new Mockly application
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let theme = Theme::light();
        theme.apply(&cc.egui_ctx);

        Self {
            state: AppState::new(),
            theme,
        }
    }

    /// Show the navigation bar
    fn show_navbar(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("navbar")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(egui::Margin::symmetric(24.0, 12.0)),
            )
            .show(ctx, |ui| {
                Navbar::new(&mut self.state, &self.theme).show(ui);
            });
    }

    /// Show the landing page. It stays mounted underneath whichever
    /// overlay is up, so its animation state survives navigation.
    fn show_landing(&mut self, ctx: &egui::Context) {
        CentralPanel::default()
            .frame(egui::Frame::none().fill(self.theme.bg_primary))
            .show(ctx, |ui| {
                LandingPage::new(&mut self.state, &self.theme).show(ui);
            });
    }

    /// Show the overlay screen for the current route, if any
    fn show_overlay(&mut self, ctx: &egui::Context, content_rect: egui::Rect) {
        let route = self.state.route();
        if !route.is_overlay() {
            return;
        }

        egui::Area::new(egui::Id::new("screen_overlay"))
            .order(egui::Order::Foreground)
            .fixed_pos(content_rect.min)
            .movable(false)
            .show(ctx, |ui| {
                // Swallow pointer input aimed at the landing page below
                ui.interact(
                    content_rect,
                    egui::Id::new("overlay_shield"),
                    egui::Sense::click_and_drag(),
                );

                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .show(ui, |ui| {
                        ui.set_min_size(content_rect.size());
                        ui.set_max_size(content_rect.size());
                        match route {
                            Route::Resume => {
                                IntakePage::new(&mut self.state, &self.theme).show(ui)
                            }
                            Route::Session => {
                                SessionPage::new(&mut self.state, &self.theme).show(ui)
                            }
                            Route::Landing => {}
                        }
                    });
            });
    }
}

impl eframe::App for MocklyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply timer ticks before drawing
        self.state.poll_session();

        self.show_navbar(ctx);
        let content_rect = ctx.available_rect();
        self.show_landing(ctx);
        self.show_overlay(ctx, content_rect);

        // Keep the timer display moving while a session runs
        if self.state.session_running() {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("[APP] Mockly shutting down");
    }
}
