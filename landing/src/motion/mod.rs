//! Animation descriptors and the hooks that play them.
//!
//! Components never talk to an animation runtime directly. They attach
//! descriptors ([`Entrance`], [`Press`], [`KeyedTransition`]) which render to a
//! class plus a handful of CSS custom properties; the keyframes in
//! [`crate::styles::MOTION_CSS`] do the interpolation. The two stateful pieces
//! are exposed as hooks:
//!
//! - [`use_reveal`] - one-shot scroll latch per section
//! - [`use_presence`] - keeps an outgoing subtree mounted until its exit
//!   transition has played

mod delay_line;
mod presence;
mod reveal;

pub use delay_line::DelayLine;
pub use presence::{Presence, PresenceHandle, PresenceStep, use_presence};
pub use reveal::{RevealLatch, RevealSection, RevealTrigger, use_reveal};

use std::time::Duration;

/// Visual state an element animates from (or to).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    /// Horizontal offset in px.
    pub x: i32,
    /// Vertical offset in px.
    pub y: i32,
    pub scale: f32,
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        opacity: 1.0,
        x: 0,
        y: 0,
        scale: 1.0,
    };

    /// Fully transparent, otherwise in place.
    pub const fn hidden() -> Self {
        Pose {
            opacity: 0.0,
            ..Pose::IDENTITY
        }
    }

    pub const fn offset(self, x: i32, y: i32) -> Self {
        Pose { x, y, ..self }
    }

    pub const fn scaled(self, scale: f32) -> Self {
        Pose { scale, ..self }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose::IDENTITY
    }
}

/// When an entrance plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// As soon as the element is inserted.
    Mount,
    /// When the enclosing section's reveal latch fires.
    Reveal,
}

/// One-shot entrance from `from` to [`Pose::IDENTITY`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub from: Pose,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub trigger: Trigger,
}

impl Entrance {
    pub const fn on_mount(from: Pose, duration_ms: u32) -> Self {
        Entrance {
            from,
            duration_ms,
            delay_ms: 0,
            trigger: Trigger::Mount,
        }
    }

    pub const fn on_reveal(from: Pose, duration_ms: u32) -> Self {
        Entrance {
            from,
            duration_ms,
            delay_ms: 0,
            trigger: Trigger::Reveal,
        }
    }

    pub const fn delayed(self, delay_ms: u32) -> Self {
        Entrance { delay_ms, ..self }
    }

    /// Push the start back by `index * step_ms` on top of the base delay.
    pub const fn stagger(self, index: usize, step_ms: u32) -> Self {
        Entrance {
            delay_ms: self.delay_ms + index as u32 * step_ms,
            ..self
        }
    }

    pub fn class(&self) -> &'static str {
        match self.trigger {
            Trigger::Mount => "motion-enter",
            Trigger::Reveal => "motion-reveal",
        }
    }

    /// `base` followed by the motion class.
    pub fn classes(&self, base: &str) -> String {
        format!("{base} {}", self.class())
    }

    pub fn style(&self) -> String {
        let from = self.from;
        format!(
            "--from-opacity:{};--from-x:{}px;--from-y:{}px;--from-scale:{};--motion-duration:{}ms;--motion-delay:{}ms",
            from.opacity, from.x, from.y, from.scale, self.duration_ms, self.delay_ms
        )
    }
}

/// Hover and tap feedback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Press {
    pub hover_scale: f32,
    pub tap_scale: f32,
    /// Box shadow while hovered.
    pub glow: Option<&'static str>,
}

impl Press {
    /// Scale 1.05 on hover, 0.95 while pressed.
    pub const STANDARD: Press = Press {
        hover_scale: 1.05,
        tap_scale: 0.95,
        glow: None,
    };

    /// Softer variant for full-width buttons.
    pub const SUBTLE: Press = Press {
        hover_scale: 1.03,
        tap_scale: 0.97,
        glow: None,
    };

    pub const fn with_glow(self, glow: &'static str) -> Self {
        Press {
            glow: Some(glow),
            ..self
        }
    }

    pub fn classes(&self, base: &str) -> String {
        format!("{base} motion-press")
    }

    pub fn style(&self) -> String {
        let mut style = format!(
            "--hover-scale:{};--tap-scale:{}",
            self.hover_scale, self.tap_scale
        );
        if let Some(glow) = self.glow {
            style.push_str(";--hover-glow:");
            style.push_str(glow);
        }
        style
    }
}

/// Transition played before a subtree is removed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exit {
    pub to: Pose,
    pub duration_ms: u32,
}

impl Exit {
    pub const fn new(to: Pose, duration_ms: u32) -> Self {
        Exit { to, duration_ms }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.duration_ms))
    }

    pub fn style(&self) -> String {
        let to = self.to;
        format!(
            "--exit-opacity:{};--exit-x:{}px;--exit-y:{}px;--exit-scale:{};--exit-duration:{}ms",
            to.opacity, to.x, to.y, to.scale, self.duration_ms
        )
    }
}

/// Enter/exit pair keyed on a selection value.
///
/// Runs in "wait" mode: the old subtree finishes its exit before the new one
/// is mounted, so the two never overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyedTransition {
    pub enter: Entrance,
    pub exit: Exit,
}

impl KeyedTransition {
    pub const fn new(enter: Entrance, exit: Exit) -> Self {
        KeyedTransition { enter, exit }
    }

    /// Class for the current phase of the keyed subtree.
    pub fn classes(&self, base: &str, exiting: bool) -> String {
        if exiting {
            format!("{base} motion-exit")
        } else {
            self.enter.classes(base)
        }
    }

    pub fn style(&self) -> String {
        format!("{};{}", self.enter.style(), self.exit.style())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn entrance_renders_custom_properties() {
        let entrance = Entrance::on_mount(Pose::hidden().offset(0, 50), 800).delayed(200);
        assert_eq!(
            entrance.style(),
            "--from-opacity:0;--from-x:0px;--from-y:50px;--from-scale:1;--motion-duration:800ms;--motion-delay:200ms"
        );
        assert_eq!(entrance.classes("hero-content"), "hero-content motion-enter");
    }

    #[test]
    fn reveal_entrances_wait_for_the_latch() {
        let entrance = Entrance::on_reveal(Pose::hidden().scaled(0.9), 800);
        assert_eq!(entrance.class(), "motion-reveal");
        assert!(entrance.style().contains("--from-scale:0.9"));
    }

    #[test]
    fn stagger_adds_to_base_delay() {
        let base = Entrance::on_reveal(Pose::hidden().offset(0, 100), 800).delayed(50);
        let delays: Vec<_> = (0..4).map(|i| base.stagger(i, 200).delay_ms).collect();
        assert_eq!(delays, [50, 250, 450, 650]);
    }

    #[test]
    fn press_style_includes_optional_glow() {
        assert_eq!(Press::STANDARD.style(), "--hover-scale:1.05;--tap-scale:0.95");
        let glowing = Press::STANDARD.with_glow("0 0 20px rgba(236, 72, 153, 0.6)");
        assert!(glowing.style().ends_with(";--hover-glow:0 0 20px rgba(236, 72, 153, 0.6)"));
        assert_eq!(glowing.classes("btn"), "btn motion-press");
    }

    #[test]
    fn keyed_transition_switches_class_on_exit() {
        let keyed = KeyedTransition::new(
            Entrance::on_mount(Pose::hidden().offset(0, 20), 500),
            Exit::new(Pose::hidden().offset(0, -20), 500),
        );
        assert_eq!(keyed.classes("card", false), "card motion-enter");
        assert_eq!(keyed.classes("card", true), "card motion-exit");
        assert!(keyed.style().contains("--exit-y:-20px"));
        assert_eq!(keyed.exit.duration(), Duration::from_millis(500));
    }
}
