//! Strategy output.

use gt_core::{Direction, NodeId};

/// What a ghost should do this tick.
///
/// Produced by [`Strategy::run`][crate::Strategy::run] and returned to the
/// host by the engine, one per ghost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decision {
    /// No new directional decision this tick (mid-corridor, already at the
    /// target, or no legal move).  The host keeps the ghost's current course.
    #[default]
    NoAction,

    /// Take `direction` now, steering toward `target`.
    Move {
        direction: Direction,
        target:    NodeId,
    },
}

impl Decision {
    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Decision::Move { direction, .. } => Some(*direction),
            Decision::NoAction => None,
        }
    }

    #[inline]
    pub fn target(&self) -> Option<NodeId> {
        match self {
            Decision::Move { target, .. } => Some(*target),
            Decision::NoAction => None,
        }
    }

    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, Decision::Move { .. })
    }
}
