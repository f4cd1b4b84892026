//! Shared constants for the page enhancement layer.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the persisted theme.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Media query consulted when no theme has been persisted.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Toggle label shown while the dark theme is active (offers light).
pub const LIGHT_ICON: &str = "☀️";

/// Toggle label shown while the light theme is active (offers dark).
pub const DARK_ICON: &str = "🌙";

// ── Layout ──────────────────────────────────────────────────────

/// Height of the fixed navigation bar, in CSS pixels.
pub const NAV_OFFSET_PX: f64 = 70.0;

/// Distance below the scroll offset used to pick the active section.
pub const PROBE_LOOKAHEAD_PX: f64 = 200.0;

// ── DOM contract ────────────────────────────────────────────────

pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const MENU_BUTTON_ID: &str = "menu-btn";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const YEAR_ID: &str = "year";
pub const CONFIG_ID: &str = "site-config";

/// Class toggled on `<body>` while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Class marking the nav controls of the section in view.
pub const ACTIVE_CLASS: &str = "active";

/// Attribute naming the section a nav control scrolls to.
pub const SECTION_ATTR: &str = "data-section";
