use thiserror::Error;

use gt_core::Attribute;

#[derive(Debug, Error)]
pub enum TreeError {
    // ── Configuration errors (recovered by falling back) ──────────────────

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("tree parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("root {root} outside 0..{count}")]
    RootOutOfRange { root: usize, count: usize },

    #[error("node {node} names child {child}, outside 0..{count}")]
    ChildOutOfRange { node: usize, child: i64, count: usize },

    #[error("leaf {node} names strategy {strategy}, outside 0..8")]
    StrategyOutOfRange { node: usize, strategy: i64 },

    #[error("leaf {node} has no strategy assigned")]
    MissingStrategy { node: usize },

    #[error("node {node} is its own ancestor")]
    Cycle { node: usize },

    #[error("path through node {node} is deeper than {max} internal nodes")]
    TooDeep { node: usize, max: usize },

    // ── Range errors (fatal) ──────────────────────────────────────────────

    #[error("node {node}: {attribute} = {value} but only {children} children")]
    AttributeOutOfRange {
        node:      usize,
        attribute: Attribute,
        value:     u32,
        children:  usize,
    },

    #[error("node {node} branches on {attribute}, which has no finite domain")]
    NotBranchable { node: usize, attribute: Attribute },

    #[error("node {node} branches on {attribute} with {have} children, needs {need}")]
    TooFewChildren {
        node:      usize,
        attribute: Attribute,
        have:      usize,
        need:      u32,
    },
}

impl TreeError {
    /// `true` for errors in the tree source itself, which the loaders
    /// recover from by using the canonical tree.  Range errors are `false`.
    pub fn is_configuration(&self) -> bool {
        !matches!(
            self,
            TreeError::AttributeOutOfRange { .. }
                | TreeError::NotBranchable { .. }
                | TreeError::TooFewChildren { .. }
        )
    }
}

pub type TreeResult<T> = Result<T, TreeError>;
