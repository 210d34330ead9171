//! Two-part cursor overlay: a dot glued to the pointer and a ring trailing
//! 100 ms behind it.
//!
//! Every trailing update is a cancellable timeout held in a bounded
//! [`DelayLine`]. Flooding the page with pointer moves cancels the oldest
//! pending updates instead of queueing without limit, and unmounting cancels
//! everything still in flight.

use crate::motion::DelayLine;
use leptos::prelude::*;
use std::time::Duration;
use tracing::warn;

/// How far the ring lags behind the dot.
pub const RING_DELAY: Duration = Duration::from_millis(100);

/// Upper bound on pending ring updates.
pub const TRAIL_CAPACITY: usize = 32;

/// Pointer position in client (viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn style(self) -> String {
        format!("left:{}px;top:{}px", self.x, self.y)
    }
}

/// Inline style for an overlay element; hidden until the pointer first moves.
fn overlay_style(position: Option<Point>) -> String {
    match position {
        Some(p) => p.style(),
        None => "display:none".to_string(),
    }
}

#[component]
pub fn CursorOverlay() -> impl IntoView {
    let dot = RwSignal::new(None::<Point>);
    let ring = RwSignal::new(None::<Point>);
    let trail = StoredValue::new(DelayLine::<TimeoutHandle>::new(TRAIL_CAPACITY));

    Effect::new(move || {
        let listener = window_event_listener(leptos::ev::mousemove, move |ev| {
            let point = Point {
                x: ev.client_x(),
                y: ev.client_y(),
            };
            dot.set(Some(point));

            let Some(ticket) = trail.try_update_value(|t| t.ticket()) else {
                return;
            };
            let follow = move || {
                ring.try_set(Some(point));
                trail.try_update_value(|t| t.complete(ticket));
            };
            match set_timeout_with_handle(follow, RING_DELAY) {
                Ok(handle) => {
                    if let Some(evicted) = trail.try_update_value(|t| t.push(ticket, handle)).flatten() {
                        evicted.clear();
                    }
                }
                Err(err) => warn!(error = ?err, "could not schedule cursor ring update"),
            }
        });

        on_cleanup(move || {
            listener.remove();
            if let Some(pending) = trail.try_update_value(DelayLine::drain) {
                for handle in pending {
                    handle.clear();
                }
            }
        });
    });

    view! {
        <div class="cursor-dot" aria-hidden="true" style=move || overlay_style(dot.get())></div>
        <div class="cursor-ring" aria-hidden="true" style=move || overlay_style(ring.get())></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_hidden_before_first_move() {
        assert_eq!(overlay_style(None), "display:none");
    }

    #[test]
    fn overlay_tracks_client_coordinates() {
        assert_eq!(overlay_style(Some(Point { x: 12, y: 340 })), "left:12px;top:340px");
    }

    #[test]
    fn ring_lags_a_tenth_of_a_second() {
        assert_eq!(RING_DELAY.as_millis(), 100);
        assert!(TRAIL_CAPACITY > 0);
    }
}
