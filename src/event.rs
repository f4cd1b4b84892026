//! Page events the browser layer forwards to [`crate::site::Site`].

/// A keyboard key as reported by `KeyboardEvent.key` (e.g. `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape"
    }
}

/// One event subscription of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteEvent {
    /// Click on the theme toggle.
    ThemeToggleClick,
    /// Click on any `[data-section]` control, desktop or mobile.
    NavClick(String),
    /// Click on a `[data-section]` control inside the mobile menu.
    MobileLinkClick,
    /// Click on the menu button.
    MenuButtonClick,
    /// Key pressed anywhere in the document.
    KeyDown(Key),
    Scroll,
    Resize,
}
