//! Page state and event dispatch.
//!
//! [`Site`] owns the host and all transient UI state, so the browser layer
//! holds exactly one value behind `Rc<RefCell<_>>` and every listener
//! funnels into [`Site::handle`].

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use crate::config::SiteConfig;
use crate::event::{Key, SiteEvent};
use crate::footer::set_footer_year;
use crate::highlight::update_active_section;
use crate::host::Host;
use crate::menu::{MenuState, MobileMenu};
use crate::nav::scroll_to_section;
use crate::theme::{self, Theme};

/// Everything one page needs at runtime.
pub struct Site<H: Host> {
    host: H,
    config: SiteConfig,
    theme: Theme,
    menu: MobileMenu,
    active_section: Option<String>,
}

impl<H: Host> Site<H> {
    #[must_use]
    pub fn new(host: H, config: SiteConfig) -> Self {
        Self {
            host,
            config,
            theme: Theme::default(),
            menu: MobileMenu::new(),
            active_section: None,
        }
    }

    /// Load-time setup: theme, initial highlight, footer year.
    pub fn boot(&mut self) {
        self.theme = theme::init_theme(&mut self.host, &self.config);
        self.refresh_active_section();
        set_footer_year(&mut self.host, &self.config);
        log::debug!("site booted with {} theme", self.theme);
    }

    /// Dispatch one page event.
    pub fn handle(&mut self, event: SiteEvent) {
        match event {
            SiteEvent::ThemeToggleClick => self.on_theme_toggle_click(),
            SiteEvent::NavClick(id) => self.on_nav_click(&id),
            SiteEvent::MobileLinkClick => self.on_mobile_link_click(),
            SiteEvent::MenuButtonClick => self.on_menu_button_click(),
            SiteEvent::KeyDown(key) => self.on_key_down(&key),
            SiteEvent::Scroll | SiteEvent::Resize => self.refresh_active_section(),
        }
    }

    // --- Handlers ---

    pub fn on_theme_toggle_click(&mut self) {
        self.theme = theme::toggle_theme(&mut self.host, &self.config);
    }

    pub fn on_nav_click(&mut self, id: &str) {
        scroll_to_section(&mut self.host, &self.config, &mut self.menu, id);
    }

    pub fn on_mobile_link_click(&mut self) {
        self.menu.close(&mut self.host, &self.config);
    }

    pub fn on_menu_button_click(&mut self) {
        self.menu.toggle(&mut self.host, &self.config);
    }

    pub fn on_key_down(&mut self, key: &Key) {
        if key.is_escape() {
            self.menu.close(&mut self.host, &self.config);
        }
    }

    fn refresh_active_section(&mut self) {
        if let Some(id) = update_active_section(&mut self.host, &self.config) {
            self.active_section = Some(id);
        }
    }

    // --- Queries ---

    /// The theme most recently applied.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn menu_state(&self) -> MenuState {
        self.menu.state()
    }

    /// The section whose nav controls are currently marked.
    #[must_use]
    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
