//! # dreamland-landing
//!
//! The Digital Dreamland landing page, built with [Leptos](https://leptos.dev/).
//!
//! One page, one component tree:
//!
//! ```text
//! App
//! ├── <style>          tokens + motion + page CSS
//! ├── CursorOverlay    dot + trailing ring
//! ├── Header           desktop nav, mobile menu
//! ├── <main>
//! │   ├── Hero
//! │   ├── Features
//! │   ├── About
//! │   ├── Testimonials
//! │   └── CallToAction
//! └── Footer
//! ```
//!
//! ## Build modes
//!
//! - `csr`: mounted in the browser by [`mount`] (see `index.html`, built with Trunk)
//! - `ssr` (default): [`render_page`] produces a static HTML document
//!
//! ```rust
//! let html = dreamland_landing::render_page();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! In `ssr` mode effects never run, so scroll listeners, timers and the
//! cursor overlay stay inert and the page renders in its initial state.

#[cfg(not(any(feature = "csr", feature = "ssr")))]
compile_error!("enable the `csr` or the `ssr` feature");

pub mod content;
pub mod cursor;
pub mod error;
pub mod motion;
pub mod sections;
pub mod state;
pub mod styles;
pub mod telemetry;
pub mod theme;

use cursor::CursorOverlay;
use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use leptos::tachys::view::RenderHtml;
use sections::{About, CallToAction, Features, Footer, Header, Hero, Testimonials};

/// The whole page.
#[component]
pub fn App() -> impl IntoView {
    let css = styles::stylesheet();
    view! {
        <style>{css}</style>
        <div class="home">
            <CursorOverlay />
            <Header />
            <main>
                <Hero />
                <Features />
                <About />
                <Testimonials />
                <CallToAction />
            </main>
            <Footer />
        </div>
    }
}

/// Complete document around [`App`] for static hosting.
#[component]
fn Document() -> impl IntoView {
    view! {
        <html lang="en" class="prerendered">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <meta name="description" content="Digital Dreamland - where imagination becomes digital reality." />
                <title>"Digital Dreamland"</title>
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link
                    rel="stylesheet"
                    href="https://fonts.googleapis.com/css2?family=Montserrat:wght@300;400;600;700&family=Playfair+Display:wght@700&display=swap"
                />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Render the page to a standalone HTML document.
///
/// Sections render in their initial state: menu closed, first testimonial
/// active, nothing revealed yet. The root carries `prerendered` so
/// scroll-reveal content is visible without the client runtime.
pub fn render_page() -> String {
    let owner = Owner::new();
    let html = owner.with(|| view! { <Document /> }.to_html());

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Mount [`App`] into `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    leptos::mount::mount_to_body(App);
}
