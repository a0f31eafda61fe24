//! UI components module
//!
//! This module provides reusable UI components for the Mockly application.

pub mod mic_button;
pub mod navbar;

pub use mic_button::MicButton;
pub use navbar::Navbar;
