use crate::content::{BRAND_ACCENT, BRAND_FIRST, NAV_LINKS, NavLink, TRADEMARK};
use crate::motion::{Entrance, Pose, Press, use_presence};
use crate::state::MenuState;
use leptos::prelude::*;
use std::time::Duration;

const LOGO_ENTRANCE: Entrance = Entrance::on_mount(Pose::hidden().offset(0, -20), 500);
const NAV_ENTRANCE: Entrance = Entrance::on_mount(Pose::hidden(), 500);
/// Mobile items slide in from the left, one every 100 ms.
const MOBILE_ITEM_ENTRANCE: Entrance = Entrance::on_mount(Pose::hidden().offset(-20, 0), 300);
const MOBILE_ITEM_STAGGER_MS: u32 = 100;
const MOBILE_NAV_EXIT: Duration = Duration::from_millis(300);

#[component]
pub fn Header() -> impl IntoView {
    let (menu, set_menu) = signal(MenuState::default());
    let open = Signal::derive(move || menu.get().is_open().then_some(()));
    let panel = use_presence(open, MOBILE_NAV_EXIT);

    view! {
        <header class="header glass-effect">
            <div class="container header-inner">
                <div class=LOGO_ENTRANCE.classes("logo") style=LOGO_ENTRANCE.style()>
                    <h1 class="logo-title">
                        {BRAND_FIRST}
                        <span class="text-accent">{BRAND_ACCENT}</span>
                    </h1>
                    <span class="trademark">{TRADEMARK}</span>
                </div>

                <nav class="nav-desktop" aria-label="Primary">
                    <ul class=NAV_ENTRANCE.class() style=NAV_ENTRANCE.style()>
                        {NAV_LINKS
                            .iter()
                            .map(|link| view! { <NavItem link=*link /> })
                            .collect_view()}
                    </ul>
                </nav>

                <button
                    class="mobile-menu-button"
                    aria-label="Toggle navigation"
                    aria-expanded=move || if menu.get().is_open() { "true" } else { "false" }
                    on:click=move |_| set_menu.update(MenuState::toggle)
                >
                    <div class=move || if menu.get().is_open() { "hamburger open" } else { "hamburger" }>
                        <span></span>
                        <span></span>
                        <span></span>
                    </div>
                </button>
            </div>

            <Show when=move || panel.shown().is_some()>
                <div class=move || {
                    if panel.is_exiting() { "mobile-nav glass-effect is-closing" } else { "mobile-nav glass-effect" }
                }>
                    <ul>
                        {NAV_LINKS
                            .iter()
                            .enumerate()
                            .map(|(index, link)| {
                                let entrance = MOBILE_ITEM_ENTRANCE.stagger(index, MOBILE_ITEM_STAGGER_MS);
                                view! {
                                    <li class=entrance.classes("nav-item") style=entrance.style()>
                                        <a
                                            href=link.path
                                            class=Press::STANDARD.classes("nav-link")
                                            style=Press::STANDARD.style()
                                            on:click=move |_| set_menu.update(MenuState::close)
                                        >
                                            {link.name}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </Show>
        </header>
    }
}

#[component]
fn NavItem(link: NavLink) -> impl IntoView {
    view! {
        <li class=Press::STANDARD.classes("nav-item") style=Press::STANDARD.style()>
            <a href=link.path class="nav-link">{link.name}</a>
        </li>
    }
}
