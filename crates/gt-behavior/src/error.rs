use thiserror::Error;

use gt_core::GridPoint;

#[derive(Debug, Error)]
pub enum BehaviorError {
    /// The nearest-node search exhausted the maze rectangle.  Cannot happen
    /// on a maze with at least one node inside its own bounds.
    #[error("no maze node reachable from target coordinate {from}")]
    UnreachableTarget { from: GridPoint },
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
