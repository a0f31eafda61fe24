//! Shared egui_kittest scaffolding for the UI flow tests
//!
//! Renders the full app chrome the way `MocklyApp` does: navbar panel
//! on top, the landing page underneath, and the overlay screen for the
//! current route above it.

use egui_kittest::Harness;
use mockly::nav::Route;
use mockly::ui::{AppState, IntakePage, LandingPage, Navbar, SessionPage, Theme};

/// Application state wrapper for testing
pub struct TestApp {
    pub state: AppState,
    theme: Theme,
}

impl TestApp {
    fn new() -> Self {
        Self {
            state: AppState::new(),
            theme: Theme::light(),
        }
    }
}

fn render_app(app: &mut TestApp, ctx: &egui::Context) {
    app.state.poll_session();

    egui::TopBottomPanel::top("navbar")
        .frame(
            egui::Frame::none()
                .fill(app.theme.bg_primary)
                .inner_margin(egui::Margin::symmetric(24.0, 12.0)),
        )
        .show(ctx, |ui| {
            Navbar::new(&mut app.state, &app.theme).show(ui);
        });

    let content_rect = ctx.available_rect();
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(app.theme.bg_primary))
        .show(ctx, |ui| {
            LandingPage::new(&mut app.state, &app.theme).show(ui);
        });

    let route = app.state.route();
    if route.is_overlay() {
        egui::Area::new(egui::Id::new("screen_overlay"))
            .order(egui::Order::Foreground)
            .fixed_pos(content_rect.min)
            .movable(false)
            .show(ctx, |ui| {
                ui.interact(
                    content_rect,
                    egui::Id::new("overlay_shield"),
                    egui::Sense::click_and_drag(),
                );
                egui::Frame::none()
                    .fill(app.theme.bg_primary)
                    .show(ui, |ui| {
                        ui.set_min_size(content_rect.size());
                        ui.set_max_size(content_rect.size());
                        match route {
                            Route::Resume => IntakePage::new(&mut app.state, &app.theme).show(ui),
                            Route::Session => SessionPage::new(&mut app.state, &app.theme).show(ui),
                            Route::Landing => {}
                        }
                    });
            });
    }
}

pub fn build_harness() -> Harness<'static, TestApp> {
    Harness::builder()
        .with_size(egui::Vec2::new(1100.0, 760.0))
        .build_state(
            |ctx, app: &mut TestApp| {
                render_app(app, ctx);
            },
            TestApp::new(),
        )
}

/// Advance a couple of frames so queued events land and the UI
/// settles. The hero animation keeps requesting repaints, so `run()`
/// (which steps until no repaint is requested) would never converge.
pub fn settle(harness: &mut Harness<'_, TestApp>) {
    for _ in 0..2 {
        harness.step();
    }
}
