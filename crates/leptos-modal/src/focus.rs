//! Focus trap decisions, kept free of DOM types.

/// Elements that can take keyboard focus inside a modal
pub const FOCUSABLE_SELECTOR: &str = "button:not([disabled]), [href], input:not([disabled]), \
     select:not([disabled]), textarea:not([disabled]), [tabindex]:not([tabindex^=\"-\"])";

/// What to do with a Tab keypress inside an open modal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabMove {
    /// Let the browser move focus to the next/previous element
    Native,
    /// Cancel the default and focus the focusable at this index
    FocusAt(usize),
    /// Cancel the default, nothing inside can take focus
    Stay,
}

/// Decide how a Tab (or Shift+Tab when `backwards`) press is handled.
///
/// `current` is the index of the focused element among the modal's
/// focusables, `None` when focus sits outside the modal.
pub fn tab_target(current: Option<usize>, len: usize, backwards: bool) -> TabMove {
    if len == 0 {
        return TabMove::Stay;
    }
    let last = len - 1;
    match (current, backwards) {
        (None, false) => TabMove::FocusAt(0),
        (None, true) => TabMove::FocusAt(last),
        (Some(0), true) => TabMove::FocusAt(last),
        (Some(i), false) if i >= last => TabMove::FocusAt(0),
        (Some(i), true) if i > last => TabMove::FocusAt(last),
        _ => TabMove::Native,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Browser default order: Tab moves one forward, Shift+Tab one back
    fn press(current: Option<usize>, len: usize, backwards: bool) -> Option<usize> {
        match tab_target(current, len, backwards) {
            TabMove::FocusAt(i) => Some(i),
            TabMove::Stay => current,
            TabMove::Native => current.map(|i| if backwards { i - 1 } else { i + 1 }),
        }
    }

    #[test]
    fn wraps_at_both_ends() {
        assert_eq!(tab_target(Some(2), 3, false), TabMove::FocusAt(0));
        assert_eq!(tab_target(Some(0), 3, true), TabMove::FocusAt(2));
        assert_eq!(tab_target(Some(1), 3, false), TabMove::Native);
        assert_eq!(tab_target(Some(1), 3, true), TabMove::Native);
    }

    #[test]
    fn pulls_outside_focus_back_in() {
        assert_eq!(tab_target(None, 4, false), TabMove::FocusAt(0));
        assert_eq!(tab_target(None, 4, true), TabMove::FocusAt(3));
    }

    #[test]
    fn empty_modal_holds_focus() {
        assert_eq!(tab_target(None, 0, false), TabMove::Stay);
        assert_eq!(tab_target(None, 0, true), TabMove::Stay);
    }

    #[test]
    fn single_focusable_stays_put() {
        assert_eq!(press(Some(0), 1, false), Some(0));
        assert_eq!(press(Some(0), 1, true), Some(0));
    }

    #[test]
    fn forward_tabs_visit_every_focusable_once_per_cycle() {
        let len = 5;
        let mut seen = Vec::new();
        let mut current = Some(0);
        for _ in 0..len {
            seen.push(current.unwrap());
            current = press(current, len, false);
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        assert_eq!(current, Some(0));
    }

    proptest! {
        #[test]
        fn focus_never_leaves_the_modal(
            len in 1usize..12,
            start in proptest::option::of(0usize..12),
            presses in proptest::collection::vec(any::<bool>(), 0..64),
        ) {
            let mut current = start.filter(|i| *i < len);
            for backwards in presses {
                current = press(current, len, backwards);
                prop_assert!(matches!(current, Some(i) if i < len));
            }
        }
    }
}
