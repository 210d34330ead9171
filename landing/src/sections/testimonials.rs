use super::{SECTION_SUBTITLE, SECTION_TITLE};
use crate::content::{TESTIMONIAL_BACKDROP, TESTIMONIALS, Testimonial};
use crate::motion::{Entrance, Exit, KeyedTransition, Pose, RevealSection, use_presence};
use crate::state::Carousel;
use leptos::prelude::*;

/// Outgoing card lifts away before the next one drops in.
const CARD_TRANSITION: KeyedTransition = KeyedTransition::new(
    Entrance::on_mount(Pose::hidden().offset(0, 20), 500),
    Exit::new(Pose::hidden().offset(0, -20), 500),
);

/// Record rendered for the card the presence machine currently shows.
fn displayed(shown: Option<usize>) -> Option<&'static Testimonial> {
    shown.and_then(|index| TESTIMONIALS.get(index))
}

#[component]
pub fn Testimonials() -> impl IntoView {
    let (carousel, set_carousel) = signal(Carousel::new(TESTIMONIALS.len()));
    let active = Signal::derive(move || Some(carousel.get().active()));
    let card = use_presence(active, CARD_TRANSITION.exit.duration());
    // Rebuild the card only when its record changes, not when an exit starts or is cancelled
    let shown = Memo::new(move |_| card.shown());

    view! {
        <RevealSection name="testimonials" class="testimonials" id="testimonials">
            <div class="testimonials-backdrop">
                <img src=TESTIMONIAL_BACKDROP alt="Abstract Digital Art" />
            </div>

            <div class="container">
                <div class="section-header">
                    <h2 class=SECTION_TITLE.classes("section-title") style=SECTION_TITLE.style()>
                        "Client "
                        <span class="text-primary">"Testimonials"</span>
                    </h2>
                    <p class=SECTION_SUBTITLE.classes("section-subtitle") style=SECTION_SUBTITLE.style()>
                        "Hear what our clients have to say about their experience"
                    </p>
                </div>

                <div class="testimonial-slider">
                    {move || {
                        displayed(shown.get())
                            .map(|t| view! {
                                <article
                                    class=move || CARD_TRANSITION.classes("testimonial-card glass-effect", card.is_exiting())
                                    style=CARD_TRANSITION.style()
                                >
                                    <div class="quote-icon" aria-hidden="true">"❝"</div>
                                    <p class="testimonial-text">{t.text}</p>
                                    <div class="testimonial-author">
                                        <h4>{t.author}</h4>
                                        <p>{t.role}</p>
                                    </div>
                                </article>
                            })
                    }}

                    <div class="testimonial-nav">
                        {(0..TESTIMONIALS.len())
                            .map(|index| {
                                view! {
                                    <button
                                        class=move || {
                                            if carousel.get().is_active(index) { "testimonial-dot active" } else { "testimonial-dot" }
                                        }
                                        aria-label=format!("View testimonial {}", index + 1)
                                        on:click=move |_| {
                                            let mut next = carousel.get_untracked();
                                            if next.select(index).is_ok() {
                                                set_carousel.set(next);
                                            }
                                        }
                                    ></button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </RevealSection>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Presence;

    #[test]
    fn selected_indicator_displays_matching_record() {
        for n in 0..TESTIMONIALS.len() {
            let mut carousel = Carousel::new(TESTIMONIALS.len());
            carousel.select(n).unwrap();
            assert_eq!(displayed(Some(carousel.active())), Some(&TESTIMONIALS[n]));
        }
    }

    #[test]
    fn card_record_holds_through_exit_and_cancel() {
        let mut presence = Presence::new(Some(0));
        let before = displayed(presence.shown().copied());

        presence.request(Some(1));
        assert!(presence.is_exiting());
        assert_eq!(displayed(presence.shown().copied()), before);

        presence.request(Some(0));
        assert!(!presence.is_exiting());
        assert_eq!(displayed(presence.shown().copied()), before);
    }

    #[test]
    fn nothing_displayed_between_cards() {
        assert_eq!(displayed(None), None);
        assert_eq!(displayed(Some(TESTIMONIALS.len())), None);
    }
}
