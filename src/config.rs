//! Site configuration.
//!
//! Every field has a default matching the stock page markup, so a page with
//! no configuration block behaves exactly like the hand-written script did.
//! Pages may override any subset through an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="site-config">
//!   { "nav_offset_px": 88, "log_level": "debug" }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::Deserialize;

use crate::consts;
use crate::error::ConfigError;

/// Tunables and DOM contract for one page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `localStorage` key for the persisted theme.
    pub storage_key: String,
    pub theme_toggle_id: String,
    pub menu_button_id: String,
    pub mobile_menu_id: String,
    pub year_id: String,
    /// Body class present while dark mode is on.
    pub dark_class: String,
    /// Class applied to nav controls of the section in view.
    pub active_class: String,
    /// Fixed header height subtracted from scroll targets.
    pub nav_offset_px: f64,
    /// Lookahead added to the scroll offset when probing for the active section.
    pub probe_lookahead_px: f64,
    /// Console log level for the browser build (`error` .. `trace`).
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            theme_toggle_id: consts::THEME_TOGGLE_ID.to_owned(),
            menu_button_id: consts::MENU_BUTTON_ID.to_owned(),
            mobile_menu_id: consts::MOBILE_MENU_ID.to_owned(),
            year_id: consts::YEAR_ID.to_owned(),
            dark_class: consts::DARK_CLASS.to_owned(),
            active_class: consts::ACTIVE_CLASS.to_owned(),
            nav_offset_px: consts::NAV_OFFSET_PX,
            probe_lookahead_px: consts::PROBE_LOOKAHEAD_PX,
            log_level: "warn".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON configuration block. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON or mistyped fields and
    /// [`ConfigError::LogLevel`] for an unrecognised `log_level`.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.level()?;
        Ok(config)
    }

    /// Resolve from an optional JSON block, falling back to defaults when
    /// the block is absent, blank, or invalid.
    #[must_use]
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::default(),
            Some(raw) => match Self::from_json(raw) {
                Ok(config) => config,
                Err(err) => {
                    log::warn!("{err}; using default site config");
                    Self::default()
                }
            },
        }
    }

    /// The configured log level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LogLevel`] if `log_level` names no level.
    pub fn level(&self) -> Result<log::Level, ConfigError> {
        log::Level::from_str(&self.log_level).map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
