//! `web-sys` implementation of [`Host`]. Requires a browser environment.
//!
//! Sections and nav controls are captured once at construction; pages that
//! add sections later are not tracked.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, DomTokenList, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Storage, Window};

use crate::consts::{CONFIG_ID, PREFERS_DARK_QUERY, SECTION_ATTR};
use crate::error::HostError;
use crate::host::{Host, SectionBox};

/// The live browser page.
pub struct DomHost {
    window: Window,
    document: Document,
    sections: Vec<HtmlElement>,
    nav: Vec<Element>,
}

impl DomHost {
    /// Bind to the window's document and capture sections and nav controls.
    ///
    /// # Errors
    ///
    /// Fails if the window has no document or the selectors are rejected.
    pub fn new(window: Window) -> Result<Self, HostError> {
        let document = window
            .document()
            .ok_or_else(|| HostError::Js("window has no document".to_owned()))?;
        let sections = query_all(&document, "section")?
            .iter()
            .filter_map(|el| el.dyn_ref::<HtmlElement>().cloned())
            .collect();
        let nav = query_all(&document, &format!("[{SECTION_ATTR}]"))?;
        Ok(Self { window, document, sections, nav })
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Raw text of the inline `#site-config` block, if present.
    #[must_use]
    pub fn config_block(&self) -> Option<String> {
        self.document.get_element_by_id(CONFIG_ID).and_then(|el| el.text_content())
    }

    fn storage(&self) -> Result<Storage, HostError> {
        match self.window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(HostError::StorageUnavailable),
            Err(err) => {
                log::debug!("localStorage access threw: {err:?}");
                Err(HostError::StorageUnavailable)
            }
        }
    }

    fn element(&self, id: &str) -> Result<Element, HostError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| HostError::MissingElement(id.to_owned()))
    }
}

/// All elements matching `selector`, in document order.
///
/// # Errors
///
/// Fails if the browser rejects the selector.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, HostError> {
    let list = document.query_selector_all(selector).map_err(js_error)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

fn js_error(err: JsValue) -> HostError {
    HostError::Js(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

fn set_class(list: &DomTokenList, class: &str, present: bool) -> Result<(), HostError> {
    let result = if present { list.add_1(class) } else { list.remove_1(class) };
    result.map_err(js_error)
}

impl Host for DomHost {
    fn read_storage(&self, key: &str) -> Result<Option<String>, HostError> {
        self.storage()?.get_item(key).map_err(|_| HostError::StorageUnavailable)
    }

    fn write_storage(&mut self, key: &str, value: &str) -> Result<(), HostError> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn prefers_dark(&self) -> Option<bool> {
        match self.window.match_media(PREFERS_DARK_QUERY) {
            Ok(Some(query)) => Some(query.matches()),
            Ok(None) | Err(_) => None,
        }
    }

    fn current_year(&self) -> u32 {
        js_sys::Date::new_0().get_full_year()
    }

    fn body_has_class(&self, class: &str) -> bool {
        self.document.body().is_some_and(|body| body.class_list().contains(class))
    }

    fn set_body_class(&mut self, class: &str, present: bool) -> Result<(), HostError> {
        let body = self
            .document
            .body()
            .ok_or_else(|| HostError::MissingElement("body".to_owned()))?;
        set_class(&body.class_list(), class, present)
    }

    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn set_text(&mut self, id: &str, text: &str) -> Result<(), HostError> {
        self.element(id)?.set_text_content(Some(text));
        Ok(())
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> Result<(), HostError> {
        self.element(id)?.set_attribute(name, value).map_err(js_error)
    }

    fn set_display(&mut self, id: &str, display: &str) -> Result<(), HostError> {
        let element = self.element(id)?;
        let html = element
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| HostError::Js(format!("#{id} is not an HTML element")))?;
        html.style().set_property("display", display).map_err(js_error)
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        let element = self.document.get_element_by_id(id)?;
        Some(element.get_bounding_client_rect().top() + self.scroll_y())
    }

    fn scroll_y(&self) -> f64 {
        match self.window.scroll_y() {
            Ok(y) => y,
            Err(err) => {
                log::debug!("scrollY unavailable: {err:?}");
                0.0
            }
        }
    }

    fn smooth_scroll_to(&mut self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn sections(&self) -> Vec<SectionBox> {
        self.sections
            .iter()
            .map(|el| SectionBox::new(el.id(), f64::from(el.offset_top()), f64::from(el.offset_height())))
            .collect()
    }

    fn nav_targets(&self) -> Vec<String> {
        self.nav
            .iter()
            .map(|el| el.get_attribute(SECTION_ATTR).unwrap_or_default())
            .collect()
    }

    fn set_nav_class(&mut self, index: usize, class: &str, present: bool) -> Result<(), HostError> {
        let element = self
            .nav
            .get(index)
            .ok_or_else(|| HostError::Js(format!("nav index {index} out of range")))?;
        set_class(&element.class_list(), class, present)
    }
}
