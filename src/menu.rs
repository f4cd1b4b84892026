//! Mobile overlay menu.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::config::SiteConfig;
use crate::host::Host;

/// Whether the overlay menu is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Owns the menu state and mirrors it into the DOM.
///
/// Opening shows the menu as a flex container, clears `aria-hidden` and sets
/// the button's `aria-expanded`; closing does the inverse. Both are no-ops
/// when the menu element is missing. A missing button only skips its
/// attribute.
#[derive(Debug, Default)]
pub struct MobileMenu {
    state: MenuState,
}

impl MobileMenu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    pub fn open<H: Host>(&mut self, host: &mut H, config: &SiteConfig) {
        self.render(host, config, MenuState::Open);
    }

    pub fn close<H: Host>(&mut self, host: &mut H, config: &SiteConfig) {
        self.render(host, config, MenuState::Closed);
    }

    /// Menu-button click.
    pub fn toggle<H: Host>(&mut self, host: &mut H, config: &SiteConfig) {
        if self.is_open() {
            self.close(host, config);
        } else {
            self.open(host, config);
        }
    }

    fn render<H: Host>(&mut self, host: &mut H, config: &SiteConfig, state: MenuState) {
        let menu = config.mobile_menu_id.as_str();
        if !host.has_element(menu) {
            log::debug!("#{menu} not present; menu {state:?} skipped");
            return;
        }

        let (display, hidden, expanded) = match state {
            MenuState::Open => ("flex", "false", "true"),
            MenuState::Closed => ("none", "true", "false"),
        };
        if let Err(err) = host.set_display(menu, display) {
            log::debug!("menu display not updated: {err}");
        }
        if let Err(err) = host.set_attribute(menu, "aria-hidden", hidden) {
            log::debug!("menu aria-hidden not updated: {err}");
        }
        let button = config.menu_button_id.as_str();
        if host.has_element(button) {
            if let Err(err) = host.set_attribute(button, "aria-expanded", expanded) {
                log::debug!("menu button aria-expanded not updated: {err}");
            }
        }
        self.state = state;
    }
}
