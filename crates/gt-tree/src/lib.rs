//! `gt-tree` — the decision tree that picks each ghost's strategy.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`node`]      | `Node`, `DecisionTree` (arena, classify, validate, display)|
//! | [`loader`]    | `parse`, `load`, `parse_or_default`, `load_or_default`     |
//! | [`canonical`] | `CANONICAL_SOURCE`, `canonical()`                          |
//! | [`error`]     | `TreeError`, `TreeResult<T>`                               |
//!
//! # Classification
//!
//! ```text
//! node = root
//! while node is Internal { attribute, children }:
//!     node = children[vector.value(attribute)]
//! return node.strategy
//! ```
//!
//! Structural problems in a tree source (bad syntax, dangling children,
//! cycles) are configuration errors: the `*_or_default` loaders log them and
//! return the canonical tree.  Range problems against an `AttributeSchema`
//! are reported by [`DecisionTree::validate`] and are fatal to the engine.

pub mod canonical;
pub mod error;
pub mod loader;
pub mod node;


pub use canonical::{CANONICAL_SOURCE, canonical};
pub use error::{TreeError, TreeResult};
pub use loader::{load, load_or_default, parse, parse_or_default};
pub use node::{DecisionTree, Node};
