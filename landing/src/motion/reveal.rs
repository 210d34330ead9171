use crate::error::DomError;
use leptos::html::Section;
use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::prelude::*;
use tracing::{debug, warn};

/// One-way "has this section been revealed" flag.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns `true` only on the call that actually flipped the latch.
    pub fn reveal(&mut self) -> bool {
        let first = !self.revealed;
        self.revealed = true;
        first
    }
}

/// Fires once an element's top edge sits at or above a fraction of the
/// viewport height, measured from the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTrigger {
    start: f64,
}

impl RevealTrigger {
    /// Top edge crosses 80% of the viewport height.
    pub const DEFAULT: RevealTrigger = RevealTrigger { start: 0.8 };

    /// Scroll direction is irrelevant, only the current position counts.
    pub fn has_crossed(&self, top: f64, viewport_height: f64) -> bool {
        top <= viewport_height * self.start
    }
}

impl Default for RevealTrigger {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn viewport_height() -> Result<f64, DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    window
        .inner_height()?
        .as_f64()
        .ok_or(DomError::NotANumber("innerHeight"))
}

/// Holds the scroll listener until the latch no longer needs it.
struct ListenerSlot<H: Send + Sync + 'static>(StoredValue<Option<H>>);

impl<H: Send + Sync + 'static> Clone for ListenerSlot<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: Send + Sync + 'static> Copy for ListenerSlot<H> {}

impl<H: Send + Sync + 'static> ListenerSlot<H> {
    fn new() -> Self {
        Self(StoredValue::new(None))
    }

    fn attach(self, handle: H) {
        self.0.set_value(Some(handle));
    }

    /// Hands the handle back at most once.
    fn detach(self) -> Option<H> {
        self.0.try_update_value(Option::take).flatten()
    }
}

/// Latch `target` once it scrolls past `trigger`.
///
/// Checks once at mount and then on every scroll event until the latch is
/// set. The scroll listener is removed as soon as the section reveals, or
/// when the owning component unmounts.
pub fn use_reveal(
    name: &'static str,
    target: NodeRef<Section>,
    trigger: RevealTrigger,
) -> Signal<bool> {
    let latch = RwSignal::new(RevealLatch::default());
    let listener = ListenerSlot::<WindowListenerHandle>::new();
    let stop_listening = move || {
        if let Some(handle) = listener.detach() {
            handle.remove();
        }
    };

    let probe = move || {
        if latch.with_untracked(RevealLatch::is_revealed) {
            stop_listening();
            return;
        }
        let Some(el) = target.get_untracked() else {
            return;
        };
        let top = el.get_bounding_client_rect().top();
        match viewport_height() {
            Ok(height) if trigger.has_crossed(top, height) => {
                latch.update(|l| {
                    if l.reveal() {
                        debug!(section = name, top, height, "section revealed");
                    }
                });
                stop_listening();
            }
            Ok(_) => {}
            Err(err) => warn!(section = name, %err, "reveal probe failed"),
        }
    };

    Effect::new(move || {
        // Wait for the node to be mounted
        if target.get().is_none() {
            return;
        }
        probe();
        if !latch.with_untracked(RevealLatch::is_revealed) {
            listener.attach(window_event_listener(leptos::ev::scroll, move |_| probe()));
        }
        on_cleanup(stop_listening);
    });

    Signal::derive(move || latch.with(RevealLatch::is_revealed))
}

/// `<section>` that gains `in-view` the first time it scrolls into place.
///
/// `motion-reveal` descendants play their entrance at that moment.
#[component]
pub fn RevealSection(
    /// Name used in log events
    name: &'static str,
    /// Base class list
    class: &'static str,
    #[prop(optional)] id: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<Section>::new();
    let revealed = use_reveal(name, node_ref, RevealTrigger::DEFAULT);

    view! {
        <section
            id=id
            class=move || if revealed.get() { format!("{class} in-view") } else { class.to_string() }
            node_ref=node_ref
        >
            {children()}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn latch_starts_hidden() {
        assert!(!RevealLatch::default().is_revealed());
    }

    #[test]
    fn second_reveal_changes_nothing() {
        let mut once = RevealLatch::default();
        assert!(once.reveal());

        let mut twice = RevealLatch::default();
        twice.reveal();
        assert!(!twice.reveal());

        assert_eq!(once, twice);
        assert!(twice.is_revealed());
    }

    #[test]
    fn trigger_fires_at_eighty_percent() {
        let trigger = RevealTrigger::DEFAULT;
        assert!(!trigger.has_crossed(801.0, 1000.0));
        assert!(trigger.has_crossed(800.0, 1000.0));
        assert!(trigger.has_crossed(120.0, 1000.0));
        // Section already scrolled past the top still counts
        assert!(trigger.has_crossed(-400.0, 1000.0));
    }

    #[test]
    fn listener_is_released_once() {
        let owner = Owner::new();
        owner.with(|| {
            let slot = ListenerSlot::new();
            assert_eq!(slot.detach(), None);

            slot.attach(7_u32);
            assert_eq!(slot.detach(), Some(7));
            // A later scroll or the unmount finds nothing left to remove
            assert_eq!(slot.detach(), None);
        });
    }
}
