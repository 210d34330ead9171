use crate::content::{ABOUT_IMAGE, ABOUT_STATS, EXPERIENCE};
use crate::motion::{Entrance, Pose, Press, RevealSection};
use leptos::prelude::*;

const IMAGE_ENTRANCE: Entrance = Entrance::on_reveal(Pose::hidden().offset(-50, 0), 800);
const TEXT_ENTRANCE: Entrance = Entrance::on_reveal(Pose::hidden().offset(50, 0), 800);

#[component]
pub fn About() -> impl IntoView {
    view! {
        <RevealSection name="about" class="about" id="about">
            <div class="container">
                <div class="two-column">
                    <div class=IMAGE_ENTRANCE.classes("about-image") style=IMAGE_ENTRANCE.style()>
                        <div class="image-container">
                            <img src=ABOUT_IMAGE alt="Digital Art Workspace" />
                            <div class="tint"></div>
                        </div>
                        <div class="experience-badge glass-effect">
                            <span class="badge-value">{EXPERIENCE.value}</span>
                            <span>{EXPERIENCE.label}</span>
                        </div>
                    </div>

                    <div class=TEXT_ENTRANCE.classes("about-content") style=TEXT_ENTRANCE.style()>
                        <h4 class="eyebrow text-accent">"About Us"</h4>
                        <h2 class="section-title">
                            "The Story Behind "
                            <span class="text-primary">"Digital Dreamland"</span>
                        </h2>
                        <p>
                            "Digital Dreamland was founded with a passion for bringing fantasy to life through digital art. "
                            "Our team of talented artists combines technical expertise with boundless creativity "
                            "to craft stunning visual experiences."
                        </p>
                        <p>
                            "Each creation is a journey into imagination, meticulously crafted to transport viewers "
                            "to extraordinary realms. We believe in the power of digital art to inspire, evoke emotion, "
                            "and create connections."
                        </p>

                        <div class="stats-grid">
                            {ABOUT_STATS
                                .iter()
                                .map(|stat| view! {
                                    <div class="stat-card">
                                        <span class="stat-number">{stat.value}</span>
                                        <span class="stat-label">{stat.label}</span>
                                    </div>
                                })
                                .collect_view()}
                        </div>

                        <button class=Press::STANDARD.classes("btn btn-primary") style=Press::STANDARD.style()>
                            "Learn More"
                        </button>
                    </div>
                </div>
            </div>
        </RevealSection>
    }
}
