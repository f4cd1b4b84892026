//! In-memory [`Host`] used by the unit tests.
//!
//! Records every mutating call in `journal` so tests can assert ordering
//! (for example, that navigation closes the menu before scrolling).

use std::collections::{BTreeSet, HashMap};

use crate::error::HostError;
use crate::host::{Host, SectionBox};

#[derive(Debug, Default, Clone)]
pub struct FakeElement {
    pub text: String,
    pub attrs: HashMap<String, String>,
    pub display: Option<String>,
    pub top: f64,
}

#[derive(Debug, Default, Clone)]
pub struct FakeNav {
    pub target: String,
    pub classes: BTreeSet<String>,
}

#[derive(Debug)]
pub struct FakeHost {
    pub storage: HashMap<String, String>,
    pub storage_blocked: bool,
    pub prefers_dark: Option<bool>,
    pub year: u32,
    pub body: Option<BTreeSet<String>>,
    pub elements: HashMap<String, FakeElement>,
    pub scroll_y: f64,
    pub scrolls: Vec<f64>,
    pub sections: Vec<SectionBox>,
    pub nav: Vec<FakeNav>,
    pub journal: Vec<String>,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self {
            storage: HashMap::new(),
            storage_blocked: false,
            prefers_dark: None,
            year: 2024,
            body: Some(BTreeSet::new()),
            elements: HashMap::new(),
            scroll_y: 0.0,
            scrolls: Vec::new(),
            sections: Vec::new(),
            nav: Vec::new(),
            journal: Vec::new(),
        }
    }
}

impl FakeHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A host with the full stock page: toggle, menu button, mobile menu, year.
    #[must_use]
    pub fn page() -> Self {
        Self::new()
            .with_element("theme-toggle")
            .with_element("menu-btn")
            .with_element("mobile-menu")
            .with_element("year")
    }

    #[must_use]
    pub fn with_element(mut self, id: &str) -> Self {
        self.elements.insert(id.to_owned(), FakeElement::default());
        self
    }

    #[must_use]
    pub fn without_element(mut self, id: &str) -> Self {
        self.elements.remove(id);
        self
    }

    /// Add a `<section id>` spanning `[top, top + height)`.
    #[must_use]
    pub fn with_section(mut self, id: &str, top: f64, height: f64) -> Self {
        self.elements.insert(id.to_owned(), FakeElement { top, ..FakeElement::default() });
        self.sections.push(SectionBox::new(id, top, height));
        self
    }

    #[must_use]
    pub fn with_nav(mut self, target: &str) -> Self {
        self.nav.push(FakeNav { target: target.to_owned(), classes: BTreeSet::new() });
        self
    }

    #[must_use]
    pub fn with_stored(mut self, key: &str, value: &str) -> Self {
        self.storage.insert(key.to_owned(), value.to_owned());
        self
    }

    #[must_use]
    pub fn with_storage_blocked(mut self) -> Self {
        self.storage_blocked = true;
        self
    }

    #[must_use]
    pub fn with_prefers_dark(mut self, prefers_dark: Option<bool>) -> Self {
        self.prefers_dark = prefers_dark;
        self
    }

    // --- Inspection ---

    pub fn attr(&self, id: &str, name: &str) -> Option<&str> {
        self.elements.get(id).and_then(|el| el.attrs.get(name)).map(String::as_str)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|el| el.text.as_str())
    }

    pub fn display(&self, id: &str) -> Option<&str> {
        self.elements.get(id).and_then(|el| el.display.as_deref())
    }

    pub fn body_class(&self, class: &str) -> bool {
        self.body.as_ref().is_some_and(|body| body.contains(class))
    }

    pub fn nav_has_class(&self, index: usize, class: &str) -> bool {
        self.nav.get(index).is_some_and(|nav| nav.classes.contains(class))
    }

    /// Indices of nav controls carrying `class`.
    pub fn nav_with_class(&self, class: &str) -> Vec<usize> {
        self.nav
            .iter()
            .enumerate()
            .filter(|(_, nav)| nav.classes.contains(class))
            .map(|(i, _)| i)
            .collect()
    }

    fn element_mut(&mut self, id: &str) -> Result<&mut FakeElement, HostError> {
        self.elements.get_mut(id).ok_or_else(|| HostError::MissingElement(id.to_owned()))
    }
}

impl Host for FakeHost {
    fn read_storage(&self, key: &str) -> Result<Option<String>, HostError> {
        if self.storage_blocked {
            return Err(HostError::StorageUnavailable);
        }
        Ok(self.storage.get(key).cloned())
    }

    fn write_storage(&mut self, key: &str, value: &str) -> Result<(), HostError> {
        if self.storage_blocked {
            return Err(HostError::StorageUnavailable);
        }
        self.journal.push(format!("store {key}={value}"));
        self.storage.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn prefers_dark(&self) -> Option<bool> {
        self.prefers_dark
    }

    fn current_year(&self) -> u32 {
        self.year
    }

    fn body_has_class(&self, class: &str) -> bool {
        self.body_class(class)
    }

    fn set_body_class(&mut self, class: &str, present: bool) -> Result<(), HostError> {
        let body = self.body.as_mut().ok_or_else(|| HostError::MissingElement("body".to_owned()))?;
        if present {
            body.insert(class.to_owned());
        } else {
            body.remove(class);
        }
        Ok(())
    }

    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn set_text(&mut self, id: &str, text: &str) -> Result<(), HostError> {
        self.element_mut(id)?.text = text.to_owned();
        Ok(())
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> Result<(), HostError> {
        self.element_mut(id)?.attrs.insert(name.to_owned(), value.to_owned());
        self.journal.push(format!("attr {id} {name}={value}"));
        Ok(())
    }

    fn set_display(&mut self, id: &str, display: &str) -> Result<(), HostError> {
        self.element_mut(id)?.display = Some(display.to_owned());
        self.journal.push(format!("display {id} {display}"));
        Ok(())
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        self.elements.get(id).map(|el| el.top)
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn smooth_scroll_to(&mut self, top: f64) {
        self.journal.push(format!("scroll {top}"));
        self.scrolls.push(top);
    }

    fn sections(&self) -> Vec<SectionBox> {
        self.sections.clone()
    }

    fn nav_targets(&self) -> Vec<String> {
        self.nav.iter().map(|nav| nav.target.clone()).collect()
    }

    fn set_nav_class(&mut self, index: usize, class: &str, present: bool) -> Result<(), HostError> {
        let nav = self
            .nav
            .get_mut(index)
            .ok_or_else(|| HostError::Js(format!("nav index {index} out of range")))?;
        if present {
            nav.classes.insert(class.to_owned());
        } else {
            nav.classes.remove(class);
        }
        Ok(())
    }
}
