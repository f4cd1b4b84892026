//! Footer year placeholder.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use crate::config::SiteConfig;
use crate::host::Host;

/// Write the current year into the year placeholder, if the page has one.
pub fn set_footer_year<H: Host>(host: &mut H, config: &SiteConfig) -> Option<u32> {
    let id = config.year_id.as_str();
    if !host.has_element(id) {
        return None;
    }
    let year = host.current_year();
    match host.set_text(id, &year.to_string()) {
        Ok(()) => Some(year),
        Err(err) => {
            log::debug!("footer year not set: {err}");
            None
        }
    }
}
