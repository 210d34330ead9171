//! Renders the whole page through Leptos SSR and checks the markup contracts.

use dreamland_landing::content::{FEATURES, NAV_LINKS, TESTIMONIALS};
use dreamland_landing::render_page;
use pretty_assertions::assert_eq;

fn page() -> String {
    render_page()
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("`{needle}` not found in rendered page"))
}

#[test]
fn renders_complete_document() {
    let html = page();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<html"));
    assert!(html.contains("<title>Digital Dreamland</title>"));
    assert!(html.contains("--color-primary: #3B82F6;"));
    assert!(html.contains("@keyframes motion-enter"));
}

#[test]
fn sections_mount_in_fixed_order() {
    let html = page();
    let order = [
        position(&html, "<header"),
        position(&html, "<section class=\"hero\""),
        position(&html, "id=\"features\""),
        position(&html, "id=\"about\""),
        position(&html, "id=\"testimonials\""),
        position(&html, "id=\"contact\""),
        position(&html, "<footer"),
    ];
    assert!(order.windows(2).all(|w| w[0] < w[1]), "sections out of order: {order:?}");
}

#[test]
fn every_nav_link_appears_in_header_and_footer() {
    let html = page();
    for link in NAV_LINKS {
        let href = format!("href=\"{}\"", link.path);
        assert_eq!(html.matches(&href).count(), 2, "{} should be linked twice", link.name);
    }
}

#[test]
fn footer_splits_links_four_and_four() {
    let html = page();
    let more_links = position(&html, ">More Links<");
    assert!(html.rfind("href=\"/authors\"").unwrap() < more_links);
    assert!(html.rfind("href=\"/events\"").unwrap() > more_links);
    assert!(html.rfind("href=\"/themes\"").unwrap() > more_links);
    assert!(position(&html, ">Navigation<") < html.rfind("href=\"/blog\"").unwrap());
}

#[test]
fn mobile_menu_starts_unmounted() {
    let html = page();
    assert!(!html.contains("class=\"mobile-nav"));
    assert!(html.contains("class=\"hamburger\""));
    assert!(html.contains("aria-expanded=\"false\""));
}

#[test]
fn feature_grid_matches_literal_list() {
    let html = page();
    assert_eq!(html.matches("class=\"feature-card motion-reveal\"").count(), 4);

    let mut last = 0;
    for feature in FEATURES {
        let title = position(&html, feature.title);
        assert!(title > last, "{} rendered out of order", feature.title);
        assert!(html.contains(feature.icon));
        assert!(html.contains(feature.description));
        last = title;
    }
}

#[test]
fn first_testimonial_is_shown_initially() {
    let html = page();
    assert!(html.contains(TESTIMONIALS[0].text));
    assert!(html.contains(TESTIMONIALS[0].author));
    assert!(!html.contains(TESTIMONIALS[1].author));
    assert!(!html.contains(TESTIMONIALS[2].author));
    assert_eq!(html.matches("class=\"testimonial-card").count(), 1);
}

#[test]
fn one_indicator_per_testimonial_first_active() {
    let html = page();
    assert_eq!(html.matches("class=\"testimonial-dot").count(), TESTIMONIALS.len());
    assert_eq!(html.matches("class=\"testimonial-dot active\"").count(), 1);
    for n in 1..=TESTIMONIALS.len() {
        assert!(html.contains(&format!("aria-label=\"View testimonial {n}\"")));
    }
    assert!(position(&html, "class=\"testimonial-dot active\"") < position(&html, "View testimonial 1"));
}

#[test]
fn nothing_is_revealed_before_scrolling() {
    let html = page();
    assert!(!html.contains("in-view\""));
    assert!(html.contains("class=\"prerendered\""));
}

#[test]
fn static_document_keeps_navigation_reachable() {
    let html = page();
    assert!(html.contains(".prerendered .mobile-menu-button,\n.prerendered .testimonial-nav {\n    display: none;"));
    assert!(html.contains(".prerendered .nav-desktop {\n    display: block;"));
    // The static overrides must come after the small-screen rule they undo
    assert!(position(&html, "@media (max-width: 767px)") < position(&html, ".prerendered .nav-desktop {"));
}

#[test]
fn hero_scatters_fifteen_particles() {
    let html = page();
    assert_eq!(html.matches("class=\"hero-particle\"").count(), 15);
}

#[test]
fn cursor_overlay_hidden_until_pointer_moves() {
    let html = page();
    assert!(html.contains("class=\"cursor-dot\""));
    assert!(html.contains("class=\"cursor-ring\""));
    assert_eq!(html.matches("style=\"display:none\"").count(), 2);
}

#[test]
fn forms_are_visual_only() {
    let html = page();
    assert!(!html.contains("<form"));
    assert!(html.contains("placeholder=\"Your Name\""));
    assert!(html.contains("placeholder=\"Your Email\""));
    assert!(html.contains("placeholder=\"Tell us about your project\""));
    assert!(html.contains("placeholder=\"Your email\""));
}
