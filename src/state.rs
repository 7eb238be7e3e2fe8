/// Which panel is shown now and which one was shown before the last transition.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct RotationState {
    pub previous: usize,
    pub current: usize,
}

/// Direction of the last transition, derived from the two indices.
///
/// Wrapping from the last panel to the first reads as `Backward`: only the
/// index comparison counts.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    None,     // Never transitioned (or reselected the same panel)
    Forward,  // previous < current
    Backward, // previous > current
}

impl RotationState {
    pub fn new(current: usize) -> Self {
        Self { previous: current, current }
    }

    /// Automatic advance to the next panel, wrapping to 0 after the last one.
    /// `count` must be non-zero.
    pub fn advanced(self, count: usize) -> Self {
        debug_assert!(count > 0, "advancing over an empty panel sequence");
        Self {
            previous: self.current,
            current: (self.current + 1) % count,
        }
    }

    /// Explicit jump to `target`.
    pub fn jumped(self, target: usize) -> Self {
        Self {
            previous: self.current,
            current: target,
        }
    }

    /// Reinterprets both indices against a sequence of `count` panels.
    /// `count` must be non-zero.
    pub fn rebased(self, count: usize) -> Self {
        debug_assert!(count > 0, "rebasing onto an empty panel sequence");
        Self {
            previous: self.previous % count,
            current: self.current % count,
        }
    }

    pub fn direction(&self) -> Direction {
        match self.previous.cmp(&self.current) {
            std::cmp::Ordering::Less => Direction::Forward,
            std::cmp::Ordering::Greater => Direction::Backward,
            std::cmp::Ordering::Equal => Direction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_to_first_panel() {
        let state = RotationState::new(2).advanced(3);
        assert_eq!(state, RotationState { previous: 2, current: 0 });
        assert_eq!(state.direction(), Direction::Backward);
    }

    #[test]
    fn single_panel_advances_onto_itself() {
        let state = RotationState::new(0).advanced(1);
        assert_eq!(state, RotationState::new(0));
        assert_eq!(state.direction(), Direction::None);
    }

    #[test]
    fn jump_keeps_old_current_as_previous() {
        let state = RotationState::new(1).jumped(0);
        assert_eq!(state, RotationState { previous: 1, current: 0 });
        assert_eq!(state.direction(), Direction::Backward);

        let state = state.jumped(2);
        assert_eq!(state.direction(), Direction::Forward);
    }

    #[test]
    #[should_panic]
    fn advancing_over_no_panels_is_a_precondition_violation() {
        let _ = RotationState::new(0).advanced(0);
    }

    #[test]
    fn rebase_folds_indices_into_new_count() {
        let state = RotationState { previous: 4, current: 5 }.rebased(3);
        assert_eq!(state, RotationState { previous: 1, current: 2 });
    }
}
