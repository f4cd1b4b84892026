//! Active-section highlighting.
//!
//! The probe sits a fixed distance below the scroll offset. The first
//! section (document order) whose vertical extent contains the probe is
//! active, and every nav control pointing at it gets the active class while
//! all others lose it. When no section contains the probe the markers are
//! left as they were.

#[cfg(test)]
#[path = "highlight_test.rs"]
mod highlight_test;

use crate::config::SiteConfig;
use crate::host::{Host, SectionBox};

/// Probe position for a given scroll offset.
#[must_use]
pub fn probe_position(scroll_y: f64, lookahead: f64) -> f64 {
    scroll_y + lookahead
}

/// First section containing `probe`.
#[must_use]
pub fn find_active(sections: &[SectionBox], probe: f64) -> Option<&SectionBox> {
    sections.iter().find(|section| section.contains(probe))
}

/// Recompute the active section from the current layout and mark its nav
/// controls. Returns the active id, or `None` if nothing changed.
pub fn update_active_section<H: Host>(host: &mut H, config: &SiteConfig) -> Option<String> {
    let probe = probe_position(host.scroll_y(), config.probe_lookahead_px);
    let sections = host.sections();
    let active = find_active(&sections, probe)?.id.clone();

    for (index, target) in host.nav_targets().iter().enumerate() {
        if let Err(err) = host.set_nav_class(index, &config.active_class, *target == active) {
            log::debug!("nav control {index} not updated: {err}");
        }
    }
    Some(active)
}
