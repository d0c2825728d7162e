//! `gt-behavior` — ghost strategies and the host view they read.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`view`]     | `GameView` — the read-only host accessor every strategy uses    |
//! | [`snapshot`] | `Snapshot` — a plain-data `GameView` over a `gt_maze::Maze`     |
//! | [`decision`] | `Decision` (`NoAction` / `Move`)                                |
//! | [`strategy`] | `Strategy` catalog, `StrategyContext`, `StrategyParams`         |
//! | [`scatter`]  | corner-anchor selection for the four scatter strategies         |
//! | [`chase`]    | direct, ambush and projection chase strategies                  |
//! | [`search`]   | forward projection, depth-bounded DFS, nearest-node BFS         |
//! | [`geometry`] | point reflection and line-preserving boundary clamp             |
//! | [`debug`]    | `Annotation`, `Annotations` — advisory overlay hints            |
//! | [`error`]    | `BehaviorError`, `BehaviorResult<T>`                            |
//!
//! # Design notes
//!
//! Strategies are a closed enum of pure functions.  All reads go through
//! `&dyn GameView`-style generic borrows; all randomness goes through the
//! calling ghost's own `AgentRng`; all search state is local to one call.
//! That makes `Strategy::run` safe to fan out across threads as long as the
//! host view is `Sync`.

pub mod chase;
pub mod debug;
pub mod decision;
pub mod error;
pub mod geometry;
pub mod scatter;
pub mod search;
pub mod snapshot;
pub mod strategy;
pub mod view;

#[cfg(test)]
mod tests;

pub use debug::{Annotation, Annotations, Tag};
pub use decision::Decision;
pub use error::{BehaviorError, BehaviorResult};
pub use scatter::Corner;
pub use snapshot::{ActorState, GhostState, Snapshot};
pub use strategy::{Strategy, StrategyContext, StrategyParams};
pub use view::GameView;
