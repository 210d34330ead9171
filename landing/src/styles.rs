//! Page CSS.
//!
//! Three layers, concatenated by [`stylesheet`]:
//!
//! - token CSS generated from `tokens.json` (see [`crate::theme`])
//! - [`MOTION_CSS`] - keyframes behind the [`crate::motion`] descriptors
//! - [`PAGE_CSS`] - layout and component styling
//!
//! The CSS is rendered as text inside `<style>`, so it must not contain
//! `<`, `>` or `&`.

use crate::theme::DesignTokens;
use tracing::error;

/// Keyframes and classes that play the motion descriptors.
///
/// Entrances animate `opacity` and `transform`; hover/tap feedback uses the
/// independent `scale` property so both can apply to one element.
pub const MOTION_CSS: &str = r#"
@keyframes motion-enter {
    from {
        opacity: var(--from-opacity, 0);
        transform: translate(var(--from-x, 0px), var(--from-y, 0px)) scale(var(--from-scale, 1));
    }
    to {
        opacity: 1;
        transform: none;
    }
}

@keyframes motion-exit {
    from {
        opacity: 1;
        transform: none;
    }
    to {
        opacity: var(--exit-opacity, 0);
        transform: translate(var(--exit-x, 0px), var(--exit-y, 0px)) scale(var(--exit-scale, 1));
    }
}

.motion-enter {
    animation: motion-enter var(--motion-duration, 500ms) cubic-bezier(0.22, 1, 0.36, 1) var(--motion-delay, 0ms) backwards;
}

.motion-reveal {
    opacity: var(--from-opacity, 0);
    transform: translate(var(--from-x, 0px), var(--from-y, 0px)) scale(var(--from-scale, 1));
}

.in-view .motion-reveal,
.prerendered .motion-reveal {
    opacity: 1;
    transform: none;
}

.in-view .motion-reveal {
    animation: motion-enter var(--motion-duration, 600ms) cubic-bezier(0.22, 1, 0.36, 1) var(--motion-delay, 0ms) backwards;
}

.motion-exit {
    animation: motion-exit var(--exit-duration, 500ms) ease-in forwards;
    pointer-events: none;
}

.motion-press {
    transition: scale 0.2s ease, box-shadow 0.2s ease;
}

.motion-press:hover {
    scale: var(--hover-scale, 1);
    box-shadow: var(--hover-glow, none);
}

.motion-press:active {
    scale: var(--tap-scale, 1);
}

@keyframes particle-drift {
    from { transform: translate(0, 0); opacity: var(--particle-opacity, 0.5); }
    to { transform: translate(var(--drift-x, 0px), var(--drift-y, 0px)); opacity: var(--drift-opacity, 0.5); }
}

@keyframes nav-open {
    from { opacity: 0; max-height: 0; }
    to { opacity: 1; max-height: 40rem; }
}

@keyframes nav-close {
    from { opacity: 1; max-height: 40rem; }
    to { opacity: 0; max-height: 0; }
}

@keyframes scroll-dot {
    0% { transform: translateY(0); opacity: 1; }
    100% { transform: translateY(14px); opacity: 0; }
}

@media (prefers-reduced-motion: reduce) {
    .motion-enter,
    .in-view .motion-reveal,
    .motion-exit,
    .hero-particle {
        animation: none;
    }
}
"#;

/// Layout and component styling.
pub const PAGE_CSS: &str = r#"
*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    color: var(--color-neutral-dark);
    background: #ffffff;
    line-height: 1.6;
    overflow-x: hidden;
}

img {
    display: block;
    max-width: 100%;
}

a {
    color: inherit;
    text-decoration: none;
}

.container {
    width: 100%;
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.glass-effect {
    background: rgba(255, 255, 255, 0.7);
    backdrop-filter: blur(12px);
    -webkit-backdrop-filter: blur(12px);
    border: 1px solid rgba(255, 255, 255, 0.4);
}

.glass-effect-dark {
    background: rgba(17, 24, 39, 0.35);
    backdrop-filter: blur(12px);
    -webkit-backdrop-filter: blur(12px);
    border: 1px solid rgba(255, 255, 255, 0.15);
}

.gradient-text {
    background: linear-gradient(90deg, var(--color-primary), var(--color-dreamland-purple), var(--color-accent));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.text-primary { color: var(--color-primary); }
.text-accent { color: var(--color-accent); }
.text-accent-light { color: var(--color-accent-light); }
.text-cyan { color: var(--color-dreamland-cyan); }

/* Cursor */

.cursor-dot,
.cursor-ring {
    position: fixed;
    pointer-events: none;
    z-index: 9999;
    border-radius: 50%;
    transform: translate(-50%, -50%);
}

.cursor-dot {
    width: 8px;
    height: 8px;
    background: var(--color-accent);
}

.cursor-ring {
    width: 36px;
    height: 36px;
    border: 2px solid var(--color-primary);
    transition: left 0.1s ease-out, top 0.1s ease-out;
}

@media (hover: none) {
    .cursor-dot,
    .cursor-ring {
        display: none;
    }
}

/* Header */

.header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 100;
}

.header-inner {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding-top: 1rem;
    padding-bottom: 1rem;
}

.logo-title {
    margin: 0;
    font-family: var(--font-display);
    font-size: 1.5rem;
    font-weight: 700;
    background: linear-gradient(90deg, var(--color-primary), var(--color-dreamland-purple));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.logo-title .text-accent {
    -webkit-text-fill-color: var(--color-accent);
}

.trademark {
    font-size: 0.75rem;
    font-weight: 300;
}

.nav-desktop ul {
    display: flex;
    gap: 2rem;
    list-style: none;
    margin: 0;
    padding: 0;
}

.nav-item {
    display: inline-block;
}

.nav-link {
    position: relative;
    font-weight: 600;
}

.nav-link::after {
    content: "";
    position: absolute;
    left: 0;
    bottom: -4px;
    width: 0;
    height: 2px;
    background: var(--color-accent);
    transition: width 0.3s ease;
}

.nav-link:hover::after {
    width: 100%;
}

.mobile-menu-button {
    display: none;
    background: none;
    border: none;
    padding: 0.5rem;
    cursor: pointer;
}

.hamburger {
    width: 24px;
    height: 18px;
    position: relative;
}

.hamburger span {
    position: absolute;
    left: 0;
    width: 100%;
    height: 2px;
    background: var(--color-neutral-dark);
    transition: transform 0.3s ease, opacity 0.3s ease, top 0.3s ease;
}

.hamburger span:nth-child(1) { top: 0; }
.hamburger span:nth-child(2) { top: 8px; }
.hamburger span:nth-child(3) { top: 16px; }

.hamburger.open span:nth-child(1) { top: 8px; transform: rotate(45deg); }
.hamburger.open span:nth-child(2) { opacity: 0; }
.hamburger.open span:nth-child(3) { top: 8px; transform: rotate(-45deg); }

.mobile-nav {
    overflow: hidden;
    animation: nav-open 300ms ease-out backwards;
}

.mobile-nav.is-closing {
    animation: nav-close 300ms ease-in forwards;
}

.mobile-nav ul {
    list-style: none;
    margin: 0;
    padding: 1rem 1.5rem;
}

.mobile-nav .nav-item {
    display: block;
}

.mobile-nav .nav-link {
    display: block;
    padding: 0.5rem 0;
}

@media (max-width: 767px) {
    .nav-desktop { display: none; }
    .mobile-menu-button { display: block; }
}

@media (min-width: 768px) {
    .mobile-nav { display: none; }
}

/* Static document: no client runtime, so controls without handlers give way */
.prerendered .mobile-menu-button,
.prerendered .testimonial-nav {
    display: none;
}

.prerendered .nav-desktop {
    display: block;
}

.prerendered .nav-desktop ul {
    flex-wrap: wrap;
    gap: 1rem 2rem;
}

/* Buttons */

.btn {
    display: inline-block;
    padding: 0.85rem 1.75rem;
    border-radius: 9999px;
    border: 2px solid transparent;
    font-family: inherit;
    font-weight: 600;
    font-size: 1rem;
    cursor: pointer;
}

.btn-primary {
    background: linear-gradient(90deg, var(--color-primary), var(--color-dreamland-purple));
    color: #ffffff;
}

.btn-outline {
    background: transparent;
    border-color: var(--color-primary);
    color: var(--color-primary);
}

.btn-light {
    background: #ffffff;
    color: var(--color-primary-dark);
}

.btn-accent {
    background: var(--color-accent);
    color: #ffffff;
}

.btn-block {
    width: 100%;
}

/* Sections */

.section-header {
    text-align: center;
    margin-bottom: 4rem;
}

.section-title {
    font-family: var(--font-display);
    font-size: 2.5rem;
    margin: 0 0 1rem;
}

.section-subtitle {
    font-size: 1.125rem;
    color: rgba(31, 41, 55, 0.7);
    margin: 0;
}

.eyebrow {
    text-transform: uppercase;
    letter-spacing: 0.1em;
    font-size: 0.875rem;
    font-weight: 600;
    margin: 0 0 0.75rem;
}

.two-column {
    display: grid;
    gap: 2.5rem;
    align-items: center;
}

@media (min-width: 768px) {
    .two-column { grid-template-columns: 1fr 1fr; }
}

/* Hero */

.hero {
    position: relative;
    overflow: hidden;
    min-height: 100vh;
    padding: 8rem 0 6rem;
    background: radial-gradient(circle at top left, rgba(139, 92, 246, 0.15), transparent 60%),
        radial-gradient(circle at bottom right, rgba(236, 72, 153, 0.12), transparent 60%);
}

.hero-particles {
    position: absolute;
    inset: 0;
    pointer-events: none;
}

.hero-particle {
    position: absolute;
    border-radius: 50%;
    filter: blur(8px);
    animation: particle-drift var(--drift-duration, 20s) ease-in-out var(--drift-delay, 0s) infinite alternate;
}

.hero .container {
    position: relative;
    z-index: 10;
}

.hero-title {
    font-family: var(--font-display);
    font-size: clamp(3rem, 8vw, 4.5rem);
    line-height: 1.1;
    margin: 0 0 1.5rem;
}

.hero-description {
    font-size: 1.2rem;
    max-width: 32rem;
    margin: 0 0 2rem;
}

.hero-actions {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
}

.hero-image {
    position: relative;
}

.image-container {
    position: relative;
    border-radius: 1rem;
    overflow: hidden;
}

.image-overlay {
    position: absolute;
    inset: 0;
    background: linear-gradient(135deg, rgba(59, 130, 246, 0.2), rgba(236, 72, 153, 0.2));
}

.badge-card {
    position: absolute;
    display: flex;
    flex-direction: column;
    padding: 0.75rem 1.25rem;
    border-radius: 0.75rem;
    font-weight: 600;
}

.badge-card .badge-value {
    font-size: 1.5rem;
    font-weight: 700;
}

.left-badge { left: -1.5rem; bottom: 2rem; }
.right-badge { right: -1.5rem; top: 2rem; }

.scroll-indicator {
    position: absolute;
    left: 50%;
    bottom: 2rem;
    transform: translateX(-50%);
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.5rem;
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.2em;
}

.scroll-dot {
    width: 6px;
    height: 6px;
    border-radius: 50%;
    background: var(--color-accent);
    animation: scroll-dot 1.5s ease-in-out infinite;
}

/* Features */

.features {
    padding: 5rem 0;
    background: var(--color-neutral-light);
}

.features-grid {
    display: grid;
    gap: 2rem;
}

@media (min-width: 768px) {
    .features-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 1024px) {
    .features-grid { grid-template-columns: repeat(4, 1fr); }
}

.feature-card {
    background: #ffffff;
    border-radius: 1rem;
    padding: 2rem;
    box-shadow: 0 10px 30px rgba(31, 41, 55, 0.08);
}

.feature-icon {
    font-size: 2.5rem;
    margin-bottom: 1rem;
}

.feature-title {
    font-size: 1.25rem;
    margin: 0 0 0.75rem;
}

.feature-description {
    margin: 0;
    color: rgba(31, 41, 55, 0.75);
}

.landscape-showcase {
    position: relative;
    margin-top: 5rem;
    border-radius: 1rem;
    overflow: hidden;
}

.landscape-caption {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: flex-end;
    padding: 2rem;
    background: linear-gradient(to top, rgba(31, 41, 55, 0.8), transparent);
    color: #ffffff;
}

.landscape-caption h3 {
    font-family: var(--font-display);
    font-size: 1.5rem;
    margin: 0 0 0.5rem;
}

.landscape-caption p {
    margin: 0;
    max-width: 36rem;
    color: rgba(249, 250, 251, 0.8);
}

/* About */

.about {
    padding: 5rem 0;
}

.about-image {
    position: relative;
}

.about-image .tint {
    position: absolute;
    inset: 0;
    background: rgba(59, 130, 246, 0.1);
}

.experience-badge {
    position: absolute;
    right: -1rem;
    bottom: -1rem;
    display: flex;
    flex-direction: column;
    padding: 1rem 1.5rem;
    border-radius: 1rem;
}

.experience-badge .badge-value {
    font-family: var(--font-display);
    font-size: 1.875rem;
    font-weight: 700;
    color: var(--color-primary);
}

.stats-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1rem;
    margin-bottom: 2rem;
}

.stat-card {
    display: flex;
    flex-direction: column;
    padding: 1rem;
    border-radius: 0.75rem;
    background: var(--color-neutral);
    text-align: center;
}

.stat-number {
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--color-primary);
}

.stat-label {
    font-size: 0.875rem;
}

/* Testimonials */

.testimonials {
    position: relative;
    overflow: hidden;
    padding: 5rem 0;
}

.testimonials-backdrop {
    position: absolute;
    inset: 0;
    z-index: 0;
}

.testimonials-backdrop img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    opacity: 0.1;
}

.testimonials .container {
    position: relative;
    z-index: 10;
}

.testimonial-slider {
    max-width: 56rem;
    margin: 0 auto;
    min-height: 18rem;
}

.testimonial-card {
    border-radius: 1.5rem;
    padding: 2.5rem;
    text-align: center;
}

.quote-icon {
    font-size: 3rem;
    line-height: 1;
    color: var(--color-accent);
}

.testimonial-text {
    font-size: 1.25rem;
    font-style: italic;
    margin: 1rem 0 1.5rem;
}

.testimonial-author h4 {
    margin: 0;
    font-size: 1.1rem;
}

.testimonial-author p {
    margin: 0.25rem 0 0;
    color: rgba(31, 41, 55, 0.6);
}

.testimonial-nav {
    display: flex;
    justify-content: center;
    gap: 0.75rem;
    margin-top: 2rem;
}

.testimonial-dot {
    width: 12px;
    height: 12px;
    border-radius: 50%;
    border: none;
    padding: 0;
    background: rgba(59, 130, 246, 0.3);
    cursor: pointer;
    transition: background 0.3s ease, transform 0.3s ease;
}

.testimonial-dot.active {
    background: var(--color-primary);
    transform: scale(1.3);
}

/* Call to action */

.cta {
    padding: 5rem 0;
    color: #ffffff;
    background: linear-gradient(90deg, var(--color-primary), var(--color-dreamland-purple));
}

.cta-title {
    font-family: var(--font-display);
    font-size: 2.25rem;
    margin: 0 0 1rem;
}

.cta-description {
    font-size: 1.125rem;
    margin: 0 0 2rem;
    color: rgba(255, 255, 255, 0.9);
}

.cta-form {
    padding: 2rem;
    border-radius: 1rem;
}

.cta-form h3 {
    margin: 0 0 1.5rem;
    font-size: 1.25rem;
}

.form-group {
    margin-bottom: 1rem;
}

.form-input {
    width: 100%;
    padding: 0.75rem 1rem;
    border-radius: 0.5rem;
    border: 1px solid rgba(255, 255, 255, 0.3);
    background: rgba(255, 255, 255, 0.1);
    color: #ffffff;
    font-family: inherit;
    font-size: 1rem;
}

.form-input::placeholder {
    color: rgba(255, 255, 255, 0.7);
}

/* Footer */

.footer {
    background: var(--color-neutral-dark);
    color: #ffffff;
    padding: 3rem 0;
}

.footer-grid {
    display: grid;
    gap: 2rem;
}

@media (min-width: 768px) {
    .footer-grid { grid-template-columns: repeat(4, 1fr); }
}

.footer-brand h2 {
    font-family: var(--font-display);
    font-size: 1.5rem;
    margin: 0 0 1rem;
}

.footer-muted {
    color: rgba(249, 250, 251, 0.7);
    margin: 0 0 1.5rem;
}

.social-links {
    display: flex;
    gap: 1rem;
}

.social-link {
    display: inline-flex;
    color: rgba(249, 250, 251, 0.8);
    transition: color 0.2s ease;
}

.social-link:hover {
    color: var(--color-accent);
}

.footer-links h3,
.footer-newsletter h3 {
    font-size: 1.125rem;
    margin: 0 0 1rem;
}

.footer-links ul {
    list-style: none;
    margin: 0;
    padding: 0;
}

.footer-links li {
    margin-bottom: 0.5rem;
}

.footer-link {
    color: rgba(249, 250, 251, 0.7);
    transition: color 0.2s ease;
}

.footer-link:hover {
    color: #ffffff;
}

.newsletter-row {
    display: flex;
}

.newsletter-input {
    flex: 1;
    min-width: 0;
    padding: 0.75rem 1rem;
    border: none;
    border-radius: 0.5rem 0 0 0.5rem;
    font-family: inherit;
}

.newsletter-button {
    display: inline-flex;
    align-items: center;
    padding: 0 1rem;
    border: none;
    border-radius: 0 0.5rem 0.5rem 0;
    background: var(--color-accent);
    color: #ffffff;
    cursor: pointer;
}

.footer-bottom {
    margin-top: 3rem;
    padding-top: 2rem;
    border-top: 1px solid rgba(249, 250, 251, 0.1);
    text-align: center;
    font-size: 0.875rem;
    color: rgba(249, 250, 251, 0.5);
}
"#;

/// Full stylesheet for the page.
///
/// A broken token table is logged and the page falls back to the motion and
/// page layers alone.
pub fn stylesheet() -> String {
    let tokens = match DesignTokens::embedded() {
        Ok(tokens) => tokens.to_css(),
        Err(err) => {
            error!(%err, "design tokens unavailable");
            String::new()
        }
    };
    format!("{tokens}\n{MOTION_CSS}\n{PAGE_CSS}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_starts_with_tokens() {
        let css = stylesheet();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("@keyframes motion-enter"));
        assert!(css.contains(".testimonial-dot.active"));
    }

    #[test]
    fn css_is_safe_as_style_text() {
        for (name, css) in [("motion", MOTION_CSS), ("page", PAGE_CSS)] {
            assert!(
                !css.contains(['<', '>', '&']),
                "{name} css contains a character that would be escaped"
            );
        }
        assert!(!stylesheet().contains(['<', '>', '&']));
    }
}
