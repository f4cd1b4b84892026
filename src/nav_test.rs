#![allow(clippy::float_cmp)]

use super::*;
use crate::fake_host::FakeHost;
use crate::menu::MenuState;

fn config() -> SiteConfig {
    SiteConfig::default()
}

#[test]
fn scroll_target_subtracts_header() {
    assert_eq!(scroll_target(500.0, 70.0), 430.0);
    assert_eq!(scroll_target(20.0, 70.0), -50.0);
}

#[test]
fn known_section_scrolls_with_offset() {
    let mut host = FakeHost::page().with_section("about", 800.0, 400.0);
    let mut menu = MobileMenu::new();

    assert_eq!(scroll_to_section(&mut host, &config(), &mut menu, "about"), Some(730.0));
    assert_eq!(host.scrolls, vec![730.0]);
}

#[test]
fn unknown_section_does_not_scroll() {
    let mut host = FakeHost::page();
    let mut menu = MobileMenu::new();

    assert_eq!(scroll_to_section(&mut host, &config(), &mut menu, "nowhere"), None);
    assert!(host.scrolls.is_empty());
}

#[test]
fn closes_menu_before_scrolling_even_when_closed() {
    let mut host = FakeHost::page().with_section("work", 1200.0, 600.0);
    let mut menu = MobileMenu::new();

    scroll_to_section(&mut host, &config(), &mut menu, "work");

    let close = host.journal.iter().position(|entry| entry == "display mobile-menu none");
    let scroll = host.journal.iter().position(|entry| entry.starts_with("scroll "));
    assert!(close.is_some());
    assert!(close < scroll);
    assert_eq!(host.attr("menu-btn", "aria-expanded"), Some("false"));
}

#[test]
fn closes_open_menu() {
    let mut host = FakeHost::page().with_section("contact", 2000.0, 300.0);
    let mut menu = MobileMenu::new();
    menu.open(&mut host, &config());

    scroll_to_section(&mut host, &config(), &mut menu, "contact");
    assert_eq!(menu.state(), MenuState::Closed);
    assert_eq!(host.display("mobile-menu"), Some("none"));
}

#[test]
fn unknown_section_still_closes_menu() {
    let mut host = FakeHost::page();
    let mut menu = MobileMenu::new();
    menu.open(&mut host, &config());

    scroll_to_section(&mut host, &config(), &mut menu, "nowhere");
    assert!(!menu.is_open());
}

#[test]
fn configured_offset_is_used() {
    let config = SiteConfig { nav_offset_px: 100.0, ..SiteConfig::default() };
    let mut host = FakeHost::page().with_section("about", 800.0, 400.0);
    let mut menu = MobileMenu::new();
    assert_eq!(scroll_to_section(&mut host, &config, &mut menu, "about"), Some(700.0));
}
