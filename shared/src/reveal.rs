//! One-shot scroll reveal bookkeeping.

use crate::classes::ClassEdit;

/// Swaps the hidden utility classes for the visible ones.
pub const REVEAL_EDIT: ClassEdit = ClassEdit::new(
    &["opacity-0", "translate-y-8"],
    &["opacity-100", "translate-y-0"],
);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealPhase {
    #[default]
    Hidden,
    Revealed,
}

/// Tracks every observed element by index. Each element reveals at most once
/// and never goes back to hidden.
#[derive(Debug, Clone, Default)]
pub struct RevealSet {
    phases: Vec<RevealPhase>,
}

impl RevealSet {
    pub fn new(len: usize) -> Self {
        Self {
            phases: vec![RevealPhase::Hidden; len],
        }
    }

    #[cfg(test)]
    fn phase(&self, index: usize) -> Option<RevealPhase> {
        self.phases.get(index).copied()
    }

    /// Records an intersection entry. Returns `true` exactly once per
    /// element: on its first intersecting entry. The caller then reveals the
    /// element and stops observing it.
    pub fn on_entry(&mut self, index: usize, intersecting: bool) -> bool {
        match self.phases.get_mut(index) {
            Some(phase) if intersecting && *phase == RevealPhase::Hidden => {
                *phase = RevealPhase::Revealed;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    fn revealed(&self) -> usize {
        self.phases
            .iter()
            .filter(|phase| **phase == RevealPhase::Revealed)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::ClassSet;

    #[test]
    fn test_reveals_once_despite_toggling() {
        let mut set = RevealSet::new(1);
        assert!(!set.on_entry(0, false));
        assert!(set.on_entry(0, true));
        assert!(!set.on_entry(0, false));
        assert!(!set.on_entry(0, true));
        assert_eq!(set.phase(0), Some(RevealPhase::Revealed));
    }

    #[test]
    fn test_elements_are_independent() {
        let mut set = RevealSet::new(3);
        assert!(set.on_entry(2, true));
        assert_eq!(set.phase(0), Some(RevealPhase::Hidden));
        assert_eq!(set.revealed(), 1);
        assert!(set.on_entry(0, true));
        assert_eq!(set.revealed(), 2);
    }

    #[test]
    fn test_unknown_index_is_ignored() {
        let mut set = RevealSet::new(1);
        assert!(!set.on_entry(5, true));
        assert_eq!(set.phase(5), None);
    }

    #[test]
    fn test_reveal_edit_swaps_classes() {
        let mut classes = ClassSet::parse("reveal opacity-0 translate-y-8 transition duration-700");
        classes.apply(&REVEAL_EDIT);
        assert!(classes.contains("opacity-100"));
        assert!(classes.contains("translate-y-0"));
        assert!(!classes.contains_any(&["opacity-0", "translate-y-8"]));
        assert!(classes.contains("reveal"));
    }
}
