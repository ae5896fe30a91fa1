//! Maximizing and minimizing roles.
//!
//! Both sides of the search share one recursive skeleton; a role only
//! decides which direction counts as better.

use crate::games::tictactoe::{Mark, Utility};

/// Which direction a node optimizes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Seeks the highest utility (X).
    Maximize,
    /// Seeks the lowest utility (O).
    Minimize,
}

impl Role {
    /// Returns the role played by `mark`.
    pub fn for_mark(mark: Mark) -> Self {
        match mark {
            Mark::X => Role::Maximize,
            Mark::O => Role::Minimize,
        }
    }

    /// Returns the role of the other side.
    pub fn opponent(self) -> Self {
        match self {
            Role::Maximize => Role::Minimize,
            Role::Minimize => Role::Maximize,
        }
    }

    /// Starting value: worse for this role than any real utility.
    pub fn worst(self) -> Utility {
        match self {
            Role::Maximize => Utility::MIN,
            Role::Minimize => Utility::MAX,
        }
    }

    /// A caller bound that never cuts this role off.
    pub fn unbounded(self) -> Utility {
        self.opponent().worst()
    }

    /// Returns true when `candidate` is strictly better than `current`.
    pub fn improves(self, candidate: Utility, current: Utility) -> bool {
        match self {
            Role::Maximize => candidate > current,
            Role::Minimize => candidate < current,
        }
    }

    /// Returns true when the caller already has `bound` and this node's
    /// running `value` means the caller will never prefer it.
    pub fn cut_off(self, bound: Utility, value: Utility) -> bool {
        match self {
            Role::Maximize => bound <= value,
            Role::Minimize => bound >= value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_roles_by_mark() {
        assert_eq!(Role::for_mark(Mark::X), Role::Maximize);
        assert_eq!(Role::for_mark(Mark::O), Role::Minimize);
        for mark in Mark::iter() {
            assert_eq!(Role::for_mark(mark.opponent()), Role::for_mark(mark).opponent());
        }
    }

    #[test]
    fn test_unbounded_never_cuts_off() {
        for value in -1..=1 {
            assert!(!Role::Maximize.cut_off(Role::Maximize.unbounded(), value));
            assert!(!Role::Minimize.cut_off(Role::Minimize.unbounded(), value));
        }
    }

    #[test]
    fn test_worst_is_improved_by_any_utility() {
        for value in -1..=1 {
            assert!(Role::Maximize.improves(value, Role::Maximize.worst()));
            assert!(Role::Minimize.improves(value, Role::Minimize.worst()));
        }
    }

    #[test]
    fn test_equal_values_do_not_improve() {
        assert!(!Role::Maximize.improves(0, 0));
        assert!(!Role::Minimize.improves(0, 0));
    }

    #[test]
    fn test_cut_off_direction() {
        // A minimizing caller holding 0 ignores a maximizing child already at 0.
        assert!(Role::Maximize.cut_off(0, 0));
        assert!(!Role::Maximize.cut_off(1, 0));
        assert!(Role::Minimize.cut_off(0, -1));
        assert!(!Role::Minimize.cut_off(-1, 0));
    }
}
