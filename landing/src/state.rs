//! Component-local view state.
//!
//! Each holder is owned by exactly one component and wrapped in a signal
//! there. The types stay free of Leptos so the transitions can be tested
//! without a reactive runtime.

use crate::error::SelectionError;
use tracing::{debug, warn};

/// Open/closed flag behind the mobile navigation panel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        debug!(open = self.open, "mobile menu toggled");
    }

    /// Closing is what a nav link click does on small screens.
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Active index into a fixed, ordered list.
///
/// Only changes when a visitor picks an indicator. There is no timer and no
/// wrap-around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    active: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { active: 0, len }
    }

    pub fn active(self) -> usize {
        self.active
    }

    pub fn is_active(self, index: usize) -> bool {
        self.active == index
    }

    /// Make `index` the active entry. Out-of-range indices leave the state
    /// untouched.
    pub fn select(&mut self, index: usize) -> Result<(), SelectionError> {
        if index >= self.len {
            let err = SelectionError::OutOfRange {
                index,
                len: self.len,
            };
            warn!(%err, "ignoring testimonial selection");
            return Err(err);
        }
        if index != self.active {
            debug!(from = self.active, to = index, "testimonial selected");
        }
        self.active = index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn menu_starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn double_toggle_restores_menu() {
        for start_open in [false, true] {
            let mut menu = MenuState::default();
            if start_open {
                menu.toggle();
            }
            let before = menu;
            menu.toggle();
            assert_ne!(menu, before);
            menu.toggle();
            assert_eq!(menu, before);
        }
    }

    #[test]
    fn close_is_idempotent() {
        let mut menu = MenuState::default();
        menu.toggle();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn carousel_starts_at_zero() {
        let carousel = Carousel::new(3);
        assert_eq!(carousel.active(), 0);
        assert!(carousel.is_active(0));
    }

    #[test]
    fn select_sets_exact_index() {
        let mut carousel = Carousel::new(3);
        for n in [2, 0, 1, 1, 2] {
            carousel.select(n).unwrap();
            assert_eq!(carousel.active(), n);
            assert!((0..3).all(|i| carousel.is_active(i) == (i == n)));
        }
    }

    #[test]
    fn select_out_of_range_keeps_state() {
        let mut carousel = Carousel::new(3);
        carousel.select(1).unwrap();
        assert_eq!(
            carousel.select(3),
            Err(SelectionError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(carousel.active(), 1);
    }

    #[test]
    fn empty_carousel_rejects_everything() {
        let mut carousel = Carousel::new(0);
        assert!(carousel.select(0).is_err());
        assert_eq!(carousel.active(), 0);
    }
}
