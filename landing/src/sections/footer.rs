use crate::content::{BRAND_ACCENT, BRAND_FIRST, NavLink, SOCIAL_LINKS, SocialIcon, TAGLINE, TRADEMARK, footer_groups};
use leptos::prelude::*;

#[cfg(feature = "csr")]
fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

#[cfg(all(feature = "ssr", not(feature = "csr")))]
fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}

/// Copyright line, year resolved at render time.
pub fn copyright(year: i32) -> String {
    format!("© {year} {BRAND_FIRST} {BRAND_ACCENT} | {TRADEMARK} | All rights reserved | Designed with WordPress")
}

#[component]
pub fn Footer() -> impl IntoView {
    let (primary, more) = footer_groups();

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <h2>
                            {BRAND_FIRST}
                            <span class="text-accent">{BRAND_ACCENT}</span>
                        </h2>
                        <p class="footer-muted">{TAGLINE}</p>
                        <div class="social-links">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|social| view! {
                                    <a href=social.href class="social-link" aria-label=social.label>
                                        <SocialSvg icon=social.icon />
                                    </a>
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <LinkGroup title="Navigation" links=primary />
                    <LinkGroup title="More Links" links=more />

                    <div class="footer-newsletter">
                        <h3>"Stay Updated"</h3>
                        <p class="footer-muted">
                            "Subscribe to our newsletter for the latest updates and exclusive offers."
                        </p>
                        <div class="newsletter-row">
                            <input type="email" name="newsletter" placeholder="Your email" class="newsletter-input" />
                            <button type="button" class="newsletter-button" aria-label="Subscribe">
                                <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                    <line x1="22" x2="11" y1="2" y2="13"></line>
                                    <polygon points="22 2 15 22 11 13 2 9 22 2"></polygon>
                                </svg>
                            </button>
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{copyright(current_year())}</p>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn LinkGroup(title: &'static str, links: &'static [NavLink]) -> impl IntoView {
    view! {
        <div class="footer-links">
            <h3>{title}</h3>
            <ul>
                {links
                    .iter()
                    .map(|link| view! {
                        <li>
                            <a href=link.path class="footer-link">{link.name}</a>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn SocialSvg(icon: SocialIcon) -> impl IntoView {
    let shapes = match icon {
        SocialIcon::Instagram => view! {
            <rect width="20" height="20" x="2" y="2" rx="5"></rect>
            <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"></path>
            <line x1="17.5" x2="17.51" y1="6.5" y2="6.5"></line>
        }
        .into_any(),
        SocialIcon::TikTok => view! {
            <path d="M9 12a4 4 0 1 0 0 8 4 4 0 0 0 0-8z"></path>
            <path d="M15 8a4 4 0 1 0 0-8 4 4 0 0 0 0 8z"></path>
            <path d="M15 8v8a4 4 0 0 1-4 4"></path>
            <line x1="15" x2="15" y1="4" y2="12"></line>
        }
        .into_any(),
        SocialIcon::LinkedIn => view! {
            <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"></path>
            <rect width="4" height="12" x="2" y="9"></rect>
            <circle cx="4" cy="4" r="2"></circle>
        }
        .into_any(),
        SocialIcon::Facebook => view! {
            <path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"></path>
        }
        .into_any(),
    };

    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            {shapes}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_the_year_and_brand() {
        assert_eq!(
            copyright(2026),
            "© 2026 Digital Dreamland | amidigiart™ | All rights reserved | Designed with WordPress"
        );
    }

    #[cfg(all(feature = "ssr", not(feature = "csr")))]
    #[test]
    fn prerender_reads_the_year_from_the_system_clock() {
        assert!(current_year() >= 2025);
    }
}
