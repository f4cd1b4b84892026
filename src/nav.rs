//! Smooth in-page navigation to a section.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::config::SiteConfig;
use crate::host::Host;
use crate::menu::MobileMenu;

/// Scroll position that puts a section's top edge just under the fixed header.
#[must_use]
pub fn scroll_target(section_top: f64, nav_offset: f64) -> f64 {
    section_top - nav_offset
}

/// Close the mobile menu, then smooth-scroll to `#id` if it exists.
///
/// The menu is closed unconditionally, even when it is already closed or the
/// section is missing. Returns the scroll target, or `None` when `#id` is not
/// in the document.
pub fn scroll_to_section<H: Host>(host: &mut H, config: &SiteConfig, menu: &mut MobileMenu, id: &str) -> Option<f64> {
    menu.close(host, config);

    let Some(top) = host.element_top(id) else {
        log::debug!("no section #{id}; navigation skipped");
        return None;
    };
    let target = scroll_target(top, config.nav_offset_px);
    host.smooth_scroll_to(target);
    Some(target)
}
