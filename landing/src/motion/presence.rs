use leptos::prelude::*;
use std::time::Duration;
use tracing::warn;

/// What the caller has to do after [`Presence::request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceStep {
    /// Target already shown.
    Unchanged,
    /// Nothing was shown; the target mounted straight away.
    Entered,
    /// The shown subtree started exiting. Start the exit timer.
    BeginExit,
    /// An exit was in flight and the target moved again. Keep the timer.
    Retarget,
    /// An exit was in flight and the target went back to the shown key.
    /// Stop the timer.
    CancelExit,
}

/// Mount/unmount bookkeeping for a keyed subtree.
///
/// At most one key is shown. Changing the key while something is shown first
/// marks it as exiting; the replacement only appears after
/// [`Presence::exit_finished`].
#[derive(Debug, Clone, PartialEq)]
pub struct Presence<K> {
    shown: Option<K>,
    exiting: bool,
    queued: Option<K>,
}

impl<K: PartialEq + Clone> Presence<K> {
    pub fn new(initial: Option<K>) -> Self {
        Self {
            shown: initial,
            exiting: false,
            queued: None,
        }
    }

    pub fn shown(&self) -> Option<&K> {
        self.shown.as_ref()
    }

    pub fn is_exiting(&self) -> bool {
        self.exiting
    }

    pub fn request(&mut self, target: Option<K>) -> PresenceStep {
        if self.exiting {
            if target == self.shown {
                self.exiting = false;
                self.queued = None;
                return PresenceStep::CancelExit;
            }
            self.queued = target;
            return PresenceStep::Retarget;
        }

        if target == self.shown {
            return PresenceStep::Unchanged;
        }
        if self.shown.is_none() {
            self.shown = target;
            return PresenceStep::Entered;
        }

        self.exiting = true;
        self.queued = target;
        PresenceStep::BeginExit
    }

    /// The exit transition ran to completion; mount whatever is queued.
    pub fn exit_finished(&mut self) {
        if !self.exiting {
            return;
        }
        self.exiting = false;
        self.shown = self.queued.take();
    }
}

/// Reactive view over a [`Presence`] driven by [`use_presence`].
pub struct PresenceHandle<K: Send + Sync + 'static> {
    machine: RwSignal<Presence<K>>,
}

impl<K: Send + Sync + 'static> Clone for PresenceHandle<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Send + Sync + 'static> Copy for PresenceHandle<K> {}

impl<K> PresenceHandle<K>
where
    K: PartialEq + Clone + Send + Sync + 'static,
{
    /// Key currently mounted (tracked).
    pub fn shown(&self) -> Option<K> {
        self.machine.with(|m| m.shown().cloned())
    }

    /// Whether the mounted subtree is playing its exit (tracked).
    pub fn is_exiting(&self) -> bool {
        self.machine.with(Presence::is_exiting)
    }
}

/// Follow `target`, holding the previous key mounted for `exit` before
/// swapping. The pending exit timer is cancelled when the owner is cleaned up.
pub fn use_presence<K>(target: Signal<Option<K>>, exit: Duration) -> PresenceHandle<K>
where
    K: PartialEq + Clone + Send + Sync + 'static,
{
    let machine = RwSignal::new(Presence::new(target.get_untracked()));
    let timer = StoredValue::new(None::<TimeoutHandle>);

    let clear_timer = move || {
        if let Some(handle) = timer.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    };

    Effect::new(move || {
        let next = target.get();
        let step = machine
            .try_update(|m| m.request(next))
            .unwrap_or(PresenceStep::Unchanged);

        match step {
            PresenceStep::BeginExit => {
                let finish = move || {
                    timer.try_set_value(None);
                    machine.try_update(Presence::exit_finished);
                };
                match set_timeout_with_handle(finish, exit) {
                    Ok(handle) => timer.set_value(Some(handle)),
                    Err(err) => {
                        warn!(error = ?err, "exit timer unavailable, swapping immediately");
                        machine.update(Presence::exit_finished);
                    }
                }
            }
            PresenceStep::CancelExit => clear_timer(),
            PresenceStep::Unchanged | PresenceStep::Entered | PresenceStep::Retarget => {}
        }
    });

    on_cleanup(clear_timer);

    PresenceHandle { machine }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_request_for_same_key_is_a_no_op() {
        let mut p = Presence::new(Some(0));
        assert_eq!(p.request(Some(0)), PresenceStep::Unchanged);
        assert_eq!(p.shown(), Some(&0));
    }

    #[test]
    fn empty_presence_mounts_immediately() {
        let mut p = Presence::<()>::new(None);
        assert_eq!(p.request(Some(())), PresenceStep::Entered);
        assert_eq!(p.shown(), Some(&()));
        assert!(!p.is_exiting());
    }

    #[test]
    fn key_change_waits_for_exit() {
        let mut p = Presence::new(Some(0));
        assert_eq!(p.request(Some(2)), PresenceStep::BeginExit);
        // Old key stays mounted while it exits
        assert_eq!(p.shown(), Some(&0));
        assert!(p.is_exiting());

        p.exit_finished();
        assert_eq!(p.shown(), Some(&2));
        assert!(!p.is_exiting());
    }

    #[test]
    fn retarget_during_exit_mounts_latest() {
        let mut p = Presence::new(Some(0));
        p.request(Some(1));
        assert_eq!(p.request(Some(2)), PresenceStep::Retarget);
        p.exit_finished();
        assert_eq!(p.shown(), Some(&2));
    }

    #[test]
    fn returning_to_shown_key_cancels_exit() {
        let mut p = Presence::new(Some(1));
        p.request(Some(2));
        assert_eq!(p.request(Some(1)), PresenceStep::CancelExit);
        assert!(!p.is_exiting());
        // A late timer must not swap anything in
        p.exit_finished();
        assert_eq!(p.shown(), Some(&1));
    }

    #[test]
    fn open_close_round_trip_unmounts() {
        let mut p = Presence::<()>::new(None);
        p.request(Some(()));
        assert_eq!(p.request(None), PresenceStep::BeginExit);
        assert_eq!(p.shown(), Some(&()));
        p.exit_finished();
        assert_eq!(p, Presence::new(None));
    }
}
