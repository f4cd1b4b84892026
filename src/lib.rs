//! Progressive enhancement for a static portfolio page.
//!
//! This crate is compiled to WebAssembly and loaded by the page. It adds
//! theme persistence, smooth in-page navigation, active-section highlighting
//! and a mobile menu on top of plain HTML; with the module missing or every
//! feature failing, the page still works.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`site`] | Page state and event dispatch |
//! | [`theme`] | Light/dark theme selection, application, persistence |
//! | [`nav`] | Smooth scrolling to a section under the fixed header |
//! | [`highlight`] | Marks nav controls of the section in view |
//! | [`menu`] | Mobile overlay menu state and ARIA attributes |
//! | [`footer`] | Footer year placeholder |
//! | [`host`] | The [`host::Host`] browser seam |
//! | [`config`] | Tunables and DOM contract, optionally from inline JSON |
//! | [`event`] | Page events forwarded by the browser layer |
//! | [`error`] | Error types |
//! | [`consts`] | Shared constants (storage key, offsets, element ids) |
//! | `dom`, `bind` | `web-sys` host and `wasm-bindgen` entry point (`hydrate` feature) |

pub mod config;
pub mod consts;
pub mod error;
pub mod event;
pub mod footer;
pub mod highlight;
pub mod host;
pub mod menu;
pub mod nav;
pub mod site;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod bind;
#[cfg(feature = "hydrate")]
pub mod dom;

#[cfg(test)]
mod fake_host;
