use thiserror::Error;

use gt_behavior::BehaviorError;
use gt_core::GtError;
use gt_tree::TreeError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] GtError),

    #[error("decision tree error: {0}")]
    Tree(#[from] TreeError),

    #[error("strategy error: {0}")]
    Behavior(#[from] BehaviorError),

    #[error("host reports {got} ghosts, engine configured for {expected}")]
    GhostCountMismatch { expected: usize, got: usize },
}

pub type EngineResult<T> = Result<T, EngineError>;
