use super::{SECTION_SUBTITLE, SECTION_TITLE};
use crate::content::{FEATURES, Feature, LANDSCAPE_IMAGE};
use crate::motion::{Entrance, Pose, RevealSection};
use leptos::prelude::*;

/// Cards rise 100 px and fade in, 200 ms apart.
const CARD_ENTRANCE: Entrance = Entrance::on_reveal(Pose::hidden().offset(0, 100), 800);
const CARD_STAGGER_MS: u32 = 200;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <RevealSection name="features" class="features" id="features">
            <div class="container">
                <div class="section-header">
                    <h2 class=SECTION_TITLE.classes("section-title") style=SECTION_TITLE.style()>
                        "Discover the "
                        <span class="text-primary">"Magic"</span>
                    </h2>
                    <p class=SECTION_SUBTITLE.classes("section-subtitle") style=SECTION_SUBTITLE.style()>
                        "Explore our world of digital art and fantasy creations"
                    </p>
                </div>

                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| view! { <FeatureCard feature=*feature index=index /> })
                        .collect_view()}
                </div>

                <div class="landscape-showcase shadow-glow">
                    <img src=LANDSCAPE_IMAGE alt="Fantasy Digital Landscape" />
                    <div class="landscape-caption">
                        <div>
                            <h3>"Ethereal Landscapes"</h3>
                            <p>
                                "Our digital landscapes capture the essence of dreams, "
                                "creating immersive environments that ignite the imagination."
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn FeatureCard(feature: Feature, index: usize) -> impl IntoView {
    let entrance = CARD_ENTRANCE.stagger(index, CARD_STAGGER_MS);
    view! {
        <article class=entrance.classes("feature-card") style=entrance.style()>
            <div class="feature-icon">{feature.icon}</div>
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-description">{feature.description}</p>
        </article>
    }
}
