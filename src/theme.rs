//! Light/dark theme: selection, application, and persistence.
//!
//! The persisted value wins over the OS preference, which wins over the
//! light default. Applying a theme updates the body class, the toggle's
//! icon and `aria-pressed` flag, then writes the choice to storage. Storage
//! failures are logged and otherwise ignored.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::config::SiteConfig;
use crate::consts::{DARK_ICON, LIGHT_ICON};
use crate::error::ThemeError;
use crate::host::Host;

/// Visual mode of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The persisted string form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Toggle label: the icon of the mode a click would switch to.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => DARK_ICON,
            Self::Dark => LIGHT_ICON,
        }
    }

    /// Value for the toggle's `aria-pressed` attribute.
    #[must_use]
    pub fn aria_pressed(self) -> &'static str {
        if self.is_dark() { "true" } else { "false" }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    /// Exact match only; persisted values are written by [`apply_theme`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError(other.to_owned())),
        }
    }
}

/// Choose the startup theme: valid stored value, then OS preference, then light.
#[must_use]
pub fn initial_theme(stored: Option<&str>, prefers_dark: Option<bool>) -> Theme {
    if let Some(raw) = stored {
        match raw.parse::<Theme>() {
            Ok(theme) => return theme,
            Err(err) => log::debug!("ignoring persisted theme: {err}"),
        }
    }
    match prefers_dark {
        Some(true) => Theme::Dark,
        Some(false) | None => Theme::Light,
    }
}

/// Apply `theme` to the document and try to persist it.
pub fn apply_theme<H: Host>(host: &mut H, config: &SiteConfig, theme: Theme) {
    if let Err(err) = host.set_body_class(&config.dark_class, theme.is_dark()) {
        log::debug!("theme class not applied: {err}");
    }

    let toggle = config.theme_toggle_id.as_str();
    if host.has_element(toggle) {
        if let Err(err) = host.set_text(toggle, theme.icon()) {
            log::debug!("theme toggle label not updated: {err}");
        }
        if let Err(err) = host.set_attribute(toggle, "aria-pressed", theme.aria_pressed()) {
            log::debug!("theme toggle state not updated: {err}");
        }
    }

    if let Err(err) = host.write_storage(&config.storage_key, theme.as_str()) {
        log::debug!("theme not persisted: {err}");
    }
}

/// Resolve the startup theme from storage and environment, then apply it once.
pub fn init_theme<H: Host>(host: &mut H, config: &SiteConfig) -> Theme {
    let stored = match host.read_storage(&config.storage_key) {
        Ok(stored) => stored,
        Err(err) => {
            log::debug!("persisted theme unreadable: {err}");
            None
        }
    };
    let theme = initial_theme(stored.as_deref(), host.prefers_dark());
    apply_theme(host, config, theme);
    theme
}

/// The theme currently shown, read from the body class.
#[must_use]
pub fn current_theme<H: Host>(host: &H, config: &SiteConfig) -> Theme {
    if host.body_has_class(&config.dark_class) { Theme::Dark } else { Theme::Light }
}

/// Switch to the opposite of the theme currently shown.
pub fn toggle_theme<H: Host>(host: &mut H, config: &SiteConfig) -> Theme {
    let next = current_theme(host, config).toggled();
    apply_theme(host, config, next);
    next
}
