//! `gt-core` — foundational types for the ghost decision engine.
//!
//! This crate is a dependency of every other `gt-*` crate.  It intentionally
//! has no `gt-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `NodeId`                                     |
//! | [`direction`]   | `Direction` (up / right / down / left)                  |
//! | [`grid`]        | `GridPoint`, `Bounds`                                   |
//! | [`time`]        | `Tick`                                                  |
//! | [`rng`]         | `AgentRng` (per-ghost), `EngineRng` (global)            |
//! | [`attributes`]  | `Attribute`, `AttributeVector`, `AttributeSchema`       |
//! | [`config`]      | `EngineConfig`, `DebugConfig`                           |
//! | [`error`]       | `GtError`, `GtResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod attributes;
pub mod config;
pub mod direction;
pub mod error;
pub mod grid;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use attributes::{Attribute, AttributeSchema, AttributeVector};
pub use config::{DebugConfig, EngineConfig};
pub use direction::Direction;
pub use error::{GtError, GtResult};
pub use grid::{Bounds, GridPoint};
pub use ids::{AgentId, NodeId};
pub use rng::{AgentRng, EngineRng};
pub use time::Tick;
