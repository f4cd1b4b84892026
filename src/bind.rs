//! Browser entry point: wires DOM events to a shared [`Site`].

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, KeyboardEvent};

use crate::config::SiteConfig;
use crate::consts::SECTION_ATTR;
use crate::dom::{DomHost, query_all};
use crate::event::{Key, SiteEvent};
use crate::site::Site;

type SharedSite = Rc<RefCell<Site<DomHost>>>;

/// Boot the page once the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    init_logging();

    let Some(window) = web_sys::window() else {
        return;
    };
    let host = match DomHost::new(window.clone()) {
        Ok(host) => host,
        Err(err) => {
            log::warn!("page enhancements disabled: {err}");
            return;
        }
    };

    let config = SiteConfig::resolve(host.config_block().as_deref());
    match config.level() {
        Ok(level) => log::set_max_level(level.to_level_filter()),
        Err(err) => log::warn!("{err}"),
    }
    let document = host.document().clone();

    let site: SharedSite = Rc::new(RefCell::new(Site::new(host, config.clone())));
    site.borrow_mut().boot();

    if let Some(toggle) = document.get_element_by_id(&config.theme_toggle_id) {
        listen(&toggle, "click", &site, |_| Some(SiteEvent::ThemeToggleClick));
    }

    match query_all(&document, &format!("[{SECTION_ATTR}]")) {
        Ok(controls) => {
            for control in controls {
                let target = control.clone();
                listen(&control, "click", &site, move |_| {
                    target
                        .get_attribute(SECTION_ATTR)
                        .filter(|id| !id.is_empty())
                        .map(SiteEvent::NavClick)
                });
            }
        }
        Err(err) => log::debug!("nav controls not bound: {err}"),
    }

    match query_all(&document, &format!("#{} [{SECTION_ATTR}]", config.mobile_menu_id)) {
        Ok(links) => {
            for link in links {
                listen(&link, "click", &site, |_| Some(SiteEvent::MobileLinkClick));
            }
        }
        Err(err) => log::debug!("mobile links not bound: {err}"),
    }

    if let Some(button) = document.get_element_by_id(&config.menu_button_id) {
        listen(&button, "click", &site, |_| Some(SiteEvent::MenuButtonClick));
    }

    listen(&document, "keydown", &site, |event| {
        event
            .dyn_ref::<KeyboardEvent>()
            .map(|key| SiteEvent::KeyDown(Key(key.key())))
    });
    listen(&window, "scroll", &site, |_| Some(SiteEvent::Scroll));
    listen(&window, "resize", &site, |_| Some(SiteEvent::Resize));

    log::info!("page enhancements ready");
}

fn init_logging() {
    // Install once at full verbosity; the config narrows it with set_max_level.
    if console_log::init_with_level(log::Level::Trace).is_ok() {
        log::set_max_level(log::LevelFilter::Warn);
    }
}

/// Subscribe `site` to `kind` events on `target` for the lifetime of the page.
fn listen<F>(target: &EventTarget, kind: &'static str, site: &SharedSite, to_event: F)
where
    F: Fn(&Event) -> Option<SiteEvent> + 'static,
{
    let site = Rc::clone(site);
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(site_event) = to_event(&event) else {
            return;
        };
        match site.try_borrow_mut() {
            Ok(mut site) => site.handle(site_event),
            Err(_) => log::warn!("{kind} event dropped: page state busy"),
        }
    });
    if let Err(err) = target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref()) {
        log::debug!("{kind} listener not attached: {err:?}");
        return;
    }
    callback.forget();
}
