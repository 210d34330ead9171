use super::{SECTION_SUBTITLE, SECTION_TITLE};
use crate::motion::{Entrance, Pose, Press, RevealSection};
use leptos::prelude::*;

const FORM_ENTRANCE: Entrance = Entrance::on_reveal(Pose::hidden().scaled(0.9), 800);

/// Pitch plus a contact form. The form is visual only: nothing is sent.
#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <RevealSection name="cta" class="cta" id="contact">
            <div class="container">
                <div class="two-column">
                    <div>
                        <h2 class=SECTION_TITLE.classes("cta-title") style=SECTION_TITLE.style()>
                            "Ready to Bring Your Vision to Life?"
                        </h2>
                        <p class=SECTION_SUBTITLE.classes("cta-description") style=SECTION_SUBTITLE.style()>
                            "Let us transform your ideas into stunning digital realities. "
                            "Connect with our team today to start your journey."
                        </p>
                        <button class=Press::STANDARD.classes("btn btn-light") style=Press::STANDARD.style()>
                            "Get Started"
                        </button>
                    </div>

                    <div class=FORM_ENTRANCE.classes("cta-form glass-effect-dark") style=FORM_ENTRANCE.style()>
                        <h3>"Contact Us"</h3>
                        <div class="form-group">
                            <input type="text" name="name" placeholder="Your Name" class="form-input" />
                        </div>
                        <div class="form-group">
                            <input type="email" name="email" placeholder="Your Email" class="form-input" />
                        </div>
                        <div class="form-group">
                            <textarea name="message" placeholder="Tell us about your project" class="form-input" rows="4"></textarea>
                        </div>
                        <button
                            type="button"
                            class=Press::SUBTLE.classes("btn btn-accent btn-block")
                            style=Press::SUBTLE.style()
                        >
                            "Send Message"
                        </button>
                    </div>
                </div>
            </div>
        </RevealSection>
    }
}
