//! Modal State Machine
//!
//! Pure transitions for the shared project modal. The reactive layer in
//! `components::project_modal` binds these to clicks and key presses; keeping
//! the transitions here makes wraparound navigation testable without a DOM.

/// Lightbox state: closed, or open at an index into the project list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        index: usize,
    },
}

impl ModalState {
    /// Open at `index`. Out-of-range indices leave the state unchanged.
    pub fn open(self, index: usize, len: usize) -> Self {
        if index < len {
            ModalState::Open { index }
        } else {
            self
        }
    }

    /// Advance to the next project, wrapping past the end. No-op when closed.
    pub fn next(self, len: usize) -> Self {
        match self {
            ModalState::Open { index } if len > 0 => ModalState::Open {
                index: (index + 1) % len,
            },
            other => other,
        }
    }

    /// Step to the previous project, wrapping below zero. No-op when closed.
    pub fn prev(self, len: usize) -> Self {
        match self {
            ModalState::Open { index } if len > 0 => ModalState::Open {
                index: (index + len - 1) % len,
            },
            other => other,
        }
    }

    /// Close the modal. Idempotent.
    pub fn close(self) -> Self {
        ModalState::Closed
    }

    pub fn is_open(self) -> bool {
        matches!(self, ModalState::Open { .. })
    }

    pub fn index(self) -> Option<usize> {
        match self {
            ModalState::Open { index } => Some(index),
            ModalState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_requires_index_in_range() {
        let len = 4;
        assert_eq!(
            ModalState::Closed.open(2, len),
            ModalState::Open { index: 2 }
        );
        assert_eq!(ModalState::Closed.open(4, len), ModalState::Closed);
        // Reopening at a different index reuses the same machine
        assert_eq!(
            ModalState::Open { index: 1 }.open(3, len),
            ModalState::Open { index: 3 }
        );
    }

    #[test]
    fn next_wraps_cyclically() {
        let len = 5;
        let mut state = ModalState::Closed.open(0, len);
        for _ in 0..len {
            state = state.next(len);
        }
        assert_eq!(state, ModalState::Open { index: 0 });
    }

    #[test]
    fn prev_from_zero_wraps_to_last() {
        let len = 5;
        let state = ModalState::Closed.open(0, len).prev(len);
        assert_eq!(state, ModalState::Open { index: len - 1 });
    }

    #[test]
    fn navigation_keeps_index_in_range() {
        let len = 3;
        let mut state = ModalState::Closed.open(1, len);
        for step in 0..20 {
            state = if step % 2 == 0 {
                state.next(len)
            } else {
                state.prev(len)
            };
            assert!(state.index().unwrap() < len);
        }
    }

    #[test]
    fn navigation_is_a_no_op_while_closed() {
        assert_eq!(ModalState::Closed.next(3), ModalState::Closed);
        assert_eq!(ModalState::Closed.prev(3), ModalState::Closed);
    }

    #[test]
    fn close_is_idempotent() {
        assert_eq!(ModalState::Open { index: 2 }.close(), ModalState::Closed);
        assert_eq!(ModalState::Closed.close(), ModalState::Closed);
    }
}
