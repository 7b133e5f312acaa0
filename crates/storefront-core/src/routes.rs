//! Screens
//!
//! The two top-level views and the paths that select them.

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Storefront,
    Admin,
}

impl Screen {
    pub const ALL: [Screen; 2] = [Screen::Storefront, Screen::Admin];

    pub fn path(&self) -> &'static str {
        match self {
            Screen::Storefront => "/",
            Screen::Admin => "/admin",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Storefront => "Smart Retail Checkout System",
            Screen::Admin => "Smart Retail Admin Dashboard",
        }
    }

    /// Screen for a location path; `None` means redirect to the storefront.
    ///
    /// Query strings, fragments and a trailing slash are ignored.
    pub fn from_path(path: &str) -> Option<Screen> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Screen::Storefront),
            "/admin" => Some(Screen::Admin),
            _ => None,
        }
    }

    /// Screen to render for any location
    pub fn resolve(path: &str) -> Screen {
        Self::from_path(path).unwrap_or(Screen::Storefront)
    }
}
