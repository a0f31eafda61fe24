//! Full-screen pages
//!
//! Each page renders one route: the landing hero, the resume intake
//! form, and the interview session.

pub mod intake;
pub mod landing;
pub mod session;

pub use intake::IntakePage;
pub use landing::LandingPage;
pub use session::SessionPage;
