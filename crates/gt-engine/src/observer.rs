//! Engine observer trait for tracing and data collection.

use gt_behavior::{Annotation, Decision, Strategy};
use gt_core::{AgentId, AttributeVector, Tick};

/// Callbacks invoked by
/// [`DecisionEngine::tick_observed`][crate::DecisionEngine::tick_observed].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — strategy counter
///
/// ```rust,ignore
/// struct Counter([u64; Strategy::COUNT]);
///
/// impl EngineObserver for Counter {
///     fn on_decision(&mut self, _: Tick, _: AgentId, _: &AttributeVector, s: Strategy, _: Decision) {
///         self.0[s.index()] += 1;
///     }
/// }
/// ```
pub trait EngineObserver {
    /// Called before the attribute update.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per ghost, in ascending ghost order, after every decision
    /// for the tick has been computed.  `attributes` is the vector the tree
    /// classified.
    fn on_decision(
        &mut self,
        _tick:       Tick,
        _ghost:      AgentId,
        _attributes: &AttributeVector,
        _strategy:   Strategy,
        _decision:   Decision,
    ) {
    }

    /// Called for ghosts with debug annotations enabled that produced at
    /// least one this tick.
    fn on_annotations(&mut self, _tick: Tick, _ghost: AgentId, _annotations: &[Annotation]) {}

    /// Called at the end of each tick.  `moves` counts `Decision::Move`s.
    fn on_tick_end(&mut self, _tick: Tick, _moves: usize) {}
}

/// An [`EngineObserver`] that does nothing.
pub struct NoopObserver;

impl EngineObserver for NoopObserver {}
