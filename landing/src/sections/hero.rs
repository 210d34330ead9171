use crate::content::{HERO_BADGES, HERO_IMAGE};
use crate::motion::{Entrance, Pose, Press, RevealSection};
use leptos::prelude::*;

const CONTENT_ENTRANCE: Entrance = Entrance::on_mount(Pose::hidden().offset(0, 50), 800).delayed(200);
const IMAGE_ENTRANCE: Entrance = Entrance::on_mount(Pose::hidden().scaled(0.8), 800).delayed(400);
const LEFT_BADGE_ENTRANCE: Entrance = Entrance::on_mount(Pose::hidden().offset(-30, 0), 500).delayed(1000);
const RIGHT_BADGE_ENTRANCE: Entrance = Entrance::on_mount(Pose::hidden().offset(30, 0), 500).delayed(1200);
const EXPLORE_PRESS: Press = Press::STANDARD.with_glow("0 0 20px rgba(236, 72, 153, 0.6)");

pub const PARTICLE_COUNT: usize = 15;
const PARTICLE_STAGGER_MS: u32 = 100;

/// One blurred floating circle behind the hero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Percent of the hero width.
    pub left: f64,
    /// Percent of the hero height.
    pub top: f64,
    /// Diameter in px, 10..40.
    pub size: f64,
    /// Starting opacity, 0.3..0.8.
    pub opacity: f64,
    /// Hue in degrees, 200..260.
    pub hue: f64,
    /// Drift target, each axis within ±100 px.
    pub drift_x: f64,
    pub drift_y: f64,
    /// Opacity at the far end of the drift, 0.3..0.8.
    pub drift_opacity: f64,
    /// One leg of the yoyo, 15..30 s.
    pub duration_s: f64,
    pub delay_ms: u32,
}

/// Fractional part of `n * φ⁻¹ + offset`: evenly spread values in [0, 1).
///
/// Deterministic so the prerendered page and the browser agree.
fn spread(n: usize, offset: f64) -> f64 {
    const INV_PHI: f64 = 0.618_033_988_749_895;
    (n as f64 * INV_PHI + offset).fract()
}

impl Particle {
    pub fn scatter(count: usize) -> Vec<Particle> {
        (0..count)
            .map(|i| {
                let n = i + 1;
                Particle {
                    left: spread(n, 0.0) * 100.0,
                    top: spread(n, 0.37) * 100.0,
                    size: 10.0 + spread(n, 0.11) * 30.0,
                    opacity: 0.3 + spread(n, 0.53) * 0.5,
                    hue: 200.0 + spread(n, 0.71) * 60.0,
                    drift_x: spread(n, 0.23) * 200.0 - 100.0,
                    drift_y: spread(n, 0.89) * 200.0 - 100.0,
                    drift_opacity: 0.3 + spread(n, 0.41) * 0.5,
                    duration_s: 15.0 + spread(n, 0.67) * 15.0,
                    delay_ms: i as u32 * PARTICLE_STAGGER_MS,
                }
            })
            .collect()
    }

    pub fn style(&self) -> String {
        format!(
            "left:{:.2}%;top:{:.2}%;width:{:.1}px;height:{:.1}px;opacity:{:.2};background-color:hsl({:.0}, 100%, 70%);\
             --particle-opacity:{:.2};--drift-x:{:.1}px;--drift-y:{:.1}px;--drift-opacity:{:.2};--drift-duration:{:.1}s;--drift-delay:{}ms",
            self.left,
            self.top,
            self.size,
            self.size,
            self.opacity,
            self.hue,
            self.opacity,
            self.drift_x,
            self.drift_y,
            self.drift_opacity,
            self.duration_s,
            self.delay_ms,
        )
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let particles = Particle::scatter(PARTICLE_COUNT);
    let (left_badge, right_badge) = (HERO_BADGES[0], HERO_BADGES[1]);

    view! {
        <RevealSection name="hero" class="hero">
            <div class="hero-particles" aria-hidden="true">
                {particles
                    .into_iter()
                    .map(|p| view! { <div class="hero-particle" style=p.style()></div> })
                    .collect_view()}
            </div>

            <div class="container">
                <div class="two-column">
                    <div class=CONTENT_ENTRANCE.classes("hero-content") style=CONTENT_ENTRANCE.style()>
                        <h4 class="eyebrow text-accent-light">"Welcome to"</h4>
                        <h1 class="hero-title gradient-text">
                            "Digital"
                            <br />
                            "Dreamland"
                        </h1>
                        <p class="hero-description">
                            "Where imagination becomes digital reality. "
                            "Explore our stunning collection of fantasy and digital art creations."
                        </p>
                        <div class="hero-actions">
                            <button class=EXPLORE_PRESS.classes("btn btn-primary") style=EXPLORE_PRESS.style()>
                                "Explore Gallery"
                            </button>
                            <button class=Press::STANDARD.classes("btn btn-outline") style=Press::STANDARD.style()>
                                "Learn More"
                            </button>
                        </div>
                    </div>

                    <div class=IMAGE_ENTRANCE.classes("hero-image") style=IMAGE_ENTRANCE.style()>
                        <div class="image-container shadow-glow animate-float">
                            <img src=HERO_IMAGE alt="Digital Art Creation" />
                            <div class="image-overlay"></div>
                        </div>
                        <div
                            class=LEFT_BADGE_ENTRANCE.classes("badge-card left-badge glass-effect")
                            style=LEFT_BADGE_ENTRANCE.style()
                        >
                            <span class="badge-value text-cyan">{left_badge.value}</span>
                            <span>{left_badge.label}</span>
                        </div>
                        <div
                            class=RIGHT_BADGE_ENTRANCE.classes("badge-card right-badge glass-effect")
                            style=RIGHT_BADGE_ENTRANCE.style()
                        >
                            <span class="badge-value text-accent">{right_badge.value}</span>
                            <span>{right_badge.label}</span>
                        </div>
                    </div>
                </div>
            </div>

            <div class="scroll-indicator" aria-hidden="true">
                <span>"Scroll"</span>
                <div class="scroll-dot"></div>
            </div>
        </RevealSection>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particles_stay_in_range() {
        let particles = Particle::scatter(PARTICLE_COUNT);
        assert_eq!(particles.len(), 15);
        for p in &particles {
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((10.0..40.0).contains(&p.size));
            assert!((0.3..0.8).contains(&p.opacity));
            assert!((200.0..260.0).contains(&p.hue));
            assert!((-100.0..100.0).contains(&p.drift_x));
            assert!((-100.0..100.0).contains(&p.drift_y));
            assert!((15.0..30.0).contains(&p.duration_s));
        }
    }

    #[test]
    fn particles_are_deterministic_and_staggered() {
        let a = Particle::scatter(5);
        assert_eq!(a, Particle::scatter(5));
        let delays: Vec<_> = a.iter().map(|p| p.delay_ms).collect();
        assert_eq!(delays, [0, 100, 200, 300, 400]);
    }

    #[test]
    fn particle_positions_differ() {
        let particles = Particle::scatter(PARTICLE_COUNT);
        for (i, a) in particles.iter().enumerate() {
            for b in &particles[i + 1..] {
                assert_ne!((a.left, a.top), (b.left, b.top));
            }
        }
    }
}
