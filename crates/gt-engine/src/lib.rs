//! `gt-engine` — the per-tick ghost decision engine.
//!
//! # Tick pipeline
//!
//! ```text
//! tick(view):
//!   ① Update   — AttributeTracker advances each ghost's vector:
//!                edible from host, phase timer/flip, scarcity latch,
//!                proximity from path distance.
//!   ② Pin      — the lead ghost's node is captured for the whole tick.
//!   ③ Decide   — per ghost: tree.classify(vector) → Strategy,
//!                strategy.run(ghost, ctx, rng, notes) → Decision
//!                (parallel with the `parallel` feature).
//!   ④ Report   — observer hooks in ascending ghost order.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the decide phase on Rayon's thread pool.          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gt_core::EngineConfig;
//! use gt_engine::EngineBuilder;
//!
//! let mut engine = EngineBuilder::new(EngineConfig::default()).build()?;
//! loop {
//!     let view = host.snapshot();
//!     for (ghost, decision) in engine.tick(&view)?.into_iter().enumerate() {
//!         host.apply(ghost, decision);
//!     }
//! }
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod tracker;


pub use builder::EngineBuilder;
pub use engine::DecisionEngine;
pub use error::{EngineError, EngineResult};
pub use observer::{EngineObserver, NoopObserver};
pub use tracker::AttributeTracker;
