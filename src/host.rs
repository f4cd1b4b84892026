//! The browser seam.
//!
//! Controllers never touch `web-sys` directly; they talk to a [`Host`].
//! [`crate::dom::DomHost`] is the real implementation (behind the `hydrate`
//! feature). Tests drive the controllers through an in-memory host instead,
//! so every behavior is checked natively without a browser.

use crate::error::HostError;

/// Layout of one `<section>` at query time, in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    /// Whether `y` falls in `[top, top + height)`.
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Everything the page controllers need from the browser.
///
/// Id-addressed operations return [`HostError::MissingElement`] when the
/// element is absent; callers treat that as a no-op.
pub trait Host {
    // --- Storage ---

    /// Read a persisted value. `Ok(None)` means the key was never written.
    ///
    /// # Errors
    ///
    /// [`HostError::StorageUnavailable`] when storage cannot be accessed.
    fn read_storage(&self, key: &str) -> Result<Option<String>, HostError>;

    /// Persist a value.
    ///
    /// # Errors
    ///
    /// [`HostError::StorageUnavailable`] or [`HostError::Js`] on failure.
    fn write_storage(&mut self, key: &str, value: &str) -> Result<(), HostError>;

    // --- Environment ---

    /// OS/browser color-scheme preference; `None` if the query is unsupported.
    fn prefers_dark(&self) -> Option<bool>;

    /// The current calendar year.
    fn current_year(&self) -> u32;

    // --- Document ---

    fn body_has_class(&self, class: &str) -> bool;

    /// Add (`present`) or remove a class on `<body>`.
    ///
    /// # Errors
    ///
    /// Fails if the document has no body or the class list rejects the name.
    fn set_body_class(&mut self, class: &str, present: bool) -> Result<(), HostError>;

    fn has_element(&self, id: &str) -> bool;

    /// Replace the text content of `#id`.
    ///
    /// # Errors
    ///
    /// [`HostError::MissingElement`] if `#id` is absent.
    fn set_text(&mut self, id: &str, text: &str) -> Result<(), HostError>;

    /// Set an attribute on `#id`.
    ///
    /// # Errors
    ///
    /// [`HostError::MissingElement`] if `#id` is absent.
    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> Result<(), HostError>;

    /// Set the inline `display` style of `#id`.
    ///
    /// # Errors
    ///
    /// [`HostError::MissingElement`] if `#id` is absent.
    fn set_display(&mut self, id: &str, display: &str) -> Result<(), HostError>;

    // --- Layout and scrolling ---

    /// Top edge of `#id` relative to the document, or `None` if absent.
    fn element_top(&self, id: &str) -> Option<f64>;

    /// Current vertical scroll offset.
    fn scroll_y(&self) -> f64;

    /// Start a smooth scroll to `top`.
    fn smooth_scroll_to(&mut self, top: f64);

    /// All `<section>` elements in document order.
    fn sections(&self) -> Vec<SectionBox>;

    // --- Nav controls ---

    /// Target section id of each nav control, in document order.
    fn nav_targets(&self) -> Vec<String>;

    /// Add or remove `class` on the nav control at `index` of [`Host::nav_targets`].
    ///
    /// # Errors
    ///
    /// Fails if `index` is out of range or the class list rejects the change.
    fn set_nav_class(&mut self, index: usize, class: &str, present: bool) -> Result<(), HostError>;
}
