//! UI components and application module
//!
//! This module provides the egui/eframe-based user interface for Mockly.

mod app;
pub mod components;
pub mod pages;
mod state;
mod theme;

pub use app::MocklyApp;
pub use components::{MicButton, Navbar};
pub use pages::{IntakePage, LandingPage, SessionPage};
pub use state::{AppState, IntakeScreen, Screen, SessionScreen};
pub use theme::Theme;
