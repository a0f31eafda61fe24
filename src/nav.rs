//! Client-side navigation routes
//!
//! Mockly has no URL bar; routes are an in-memory mapping that mirrors the
//! three screens. Landing always renders underneath, the other two screens
//! render as full-window overlays above it.

/// The three navigable screens
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Route {
    /// Landing page with the hero copy
    #[default]
    Landing,
    /// Resume intake form
    Resume,
    /// Live interview session
    Session,
}

impl Route {
    /// The path this route answers to
    pub const fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Resume => "/resume",
            Route::Session => "/start-interview",
        }
    }

    /// Resolve a path back to a route
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Route::Landing),
            "/resume" => Some(Route::Resume),
            "/start-interview" => Some(Route::Session),
            _ => None,
        }
    }

    /// Check if this route renders as an overlay above the landing screen
    pub fn is_overlay(self) -> bool {
        !matches!(self, Route::Landing)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Landing.path(), "/");
        assert_eq!(Route::Resume.path(), "/resume");
        assert_eq!(Route::Session.path(), "/start-interview");
    }

    #[test]
    fn test_route_from_path() {
        assert_eq!(Route::from_path("/"), Some(Route::Landing));
        assert_eq!(Route::from_path("/resume"), Some(Route::Resume));
        assert_eq!(Route::from_path("/start-interview"), Some(Route::Session));
    }

    #[test]
    fn test_unknown_path_has_no_route() {
        assert_eq!(Route::from_path("/history"), None);
        assert_eq!(Route::from_path("resume"), None);
        assert_eq!(Route::from_path(""), None);
    }

    #[test]
    fn test_path_round_trip() {
        for route in [Route::Landing, Route::Resume, Route::Session] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_default_route_is_landing() {
        assert_eq!(Route::default(), Route::Landing);
    }

    #[test]
    fn test_overlay_flags() {
        assert!(!Route::Landing.is_overlay());
        assert!(Route::Resume.is_overlay());
        assert!(Route::Session.is_overlay());
    }

    #[test]
    fn test_display_shows_path() {
        assert_eq!(Route::Session.to_string(), "/start-interview");
    }
}
