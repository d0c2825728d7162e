//! The `DecisionEngine` and its per-tick pipeline.

use tracing::trace;

use gt_behavior::search::nodes_within;
use gt_behavior::{
    Annotation, Annotations, Decision, GameView, Strategy, StrategyContext, StrategyParams, Tag,
};
use gt_core::{AgentId, AgentRng, AttributeVector, EngineConfig, Tick};
use gt_tree::DecisionTree;

use crate::{AttributeTracker, EngineError, EngineObserver, EngineResult, NoopObserver};

// ── DecisionEngine ────────────────────────────────────────────────────────────

/// Computes one [`Decision`] per ghost per tick.
///
/// Each tick runs three phases:
///
/// 1. **Update** (sequential): the [`AttributeTracker`] advances every
///    ghost's attribute vector from the host view.
/// 2. **Decide** (optionally parallel with the `parallel` feature): each
///    ghost's vector is classified by the [`DecisionTree`] and the chosen
///    [`Strategy`] runs against a [`StrategyContext`] with the lead ghost's
///    node pinned for the whole tick.
/// 3. **Report** (sequential, ascending ghost order): observer hooks.
///
/// The decide phase only reads shared state; each ghost writes to its own
/// RNG and annotation buffer.  A fixed seed therefore gives the same
/// decisions with or without `parallel`.
///
/// Create via [`EngineBuilder`][crate::EngineBuilder].
pub struct DecisionEngine {
    pub(crate) config:  EngineConfig,
    pub(crate) tree:    DecisionTree,
    pub(crate) tracker: AttributeTracker,
    pub(crate) params:  StrategyParams,
    /// Per-ghost RNG streams, indexed by `AgentId`.
    pub(crate) rngs:    Vec<AgentRng>,
    /// Per-ghost annotation buffers, cleared at the start of each tick.
    pub(crate) notes:   Vec<Annotations>,
    pub(crate) now:     Tick,
}

impl DecisionEngine {
    // ── Public API ────────────────────────────────────────────────────────

    /// Advance one tick and return every ghost's decision, indexed by
    /// `AgentId`.
    pub fn tick<V: GameView + Sync + ?Sized>(&mut self, view: &V) -> EngineResult<Vec<Decision>> {
        self.tick_observed(view, &mut NoopObserver)
    }

    /// Like [`tick`](Self::tick) but reports to `observer`.
    pub fn tick_observed<V, O>(&mut self, view: &V, observer: &mut O) -> EngineResult<Vec<Decision>>
    where
        V: GameView + Sync + ?Sized,
        O: EngineObserver,
    {
        let expected = self.tracker.len();
        if view.ghost_count() != expected {
            return Err(EngineError::GhostCountMismatch { expected, got: view.ghost_count() });
        }

        let now = self.now;
        observer.on_tick_start(now);

        // ── Phase 1: attribute update ─────────────────────────────────────
        self.tracker.update(view);

        // ── Phase 2: classify and decide ──────────────────────────────────
        for notes in &mut self.notes {
            notes.clear();
        }
        let ctx = StrategyContext::new(view, self.params, self.config.lead_ghost);
        let outcomes = self.decide(&ctx)?;
        self.highlight_critical_zone(view);

        // ── Phase 3: report ───────────────────────────────────────────────
        let mut decisions = Vec::with_capacity(outcomes.len());
        let mut moves = 0;
        for (i, (strategy, decision)) in outcomes.into_iter().enumerate() {
            let ghost = AgentId(i as u8);
            let attributes = &self.tracker.vectors()[i];
            trace!(tick = %now, ghost = %ghost, strategy = %strategy, ?decision, "decision");
            observer.on_decision(now, ghost, attributes, strategy, decision);
            let notes = &self.notes[i];
            if !notes.is_empty() {
                observer.on_annotations(now, ghost, notes.items());
            }
            moves += decision.is_move() as usize;
            decisions.push(decision);
        }
        observer.on_tick_end(now, moves);

        self.now = now.next();
        Ok(decisions)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn tree(&self) -> &DecisionTree {
        &self.tree
    }

    pub fn tracker(&self) -> &AttributeTracker {
        &self.tracker
    }

    /// Mutable tracker access, for hosts that set attributes directly.
    pub fn tracker_mut(&mut self) -> &mut AttributeTracker {
        &mut self.tracker
    }

    /// The tick the next call to [`tick`](Self::tick) will process.
    pub fn current_tick(&self) -> Tick {
        self.now
    }

    /// Annotations `ghost` produced during the last tick.  Empty when its
    /// debug flag is off.
    pub fn annotations(&self, ghost: AgentId) -> &[Annotation] {
        self.notes.get(ghost.index()).map(Annotations::items).unwrap_or(&[])
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Classify every ghost and run its strategy.
    ///
    /// With the `parallel` Cargo feature the per-ghost work runs on Rayon's
    /// thread pool.  Errors are reported for the lowest failing ghost in
    /// both modes.
    fn decide<V: GameView + Sync + ?Sized>(
        &mut self,
        ctx: &StrategyContext<'_, V>,
    ) -> EngineResult<Vec<(Strategy, Decision)>> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let tree    = &self.tree;
        let vectors = self.tracker.vectors();
        let rngs    = &mut self.rngs;
        let notes   = &mut self.notes;

        #[cfg(not(feature = "parallel"))]
        {
            vectors
                .iter()
                .zip(rngs.iter_mut())
                .zip(notes.iter_mut())
                .map(|((v, rng), notes)| decide_one(tree, v, ctx, rng, notes))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            vectors
                .par_iter()
                .zip(rngs.par_iter_mut())
                .zip(notes.par_iter_mut())
                .map(|((v, rng), notes)| decide_one(tree, v, ctx, rng, notes))
                .collect::<Vec<_>>()
                .into_iter()
                .collect()
        }
    }

    /// Highlight the actor's critical zone on the watched ghost's overlay.
    fn highlight_critical_zone<V: GameView + ?Sized>(&mut self, view: &V) {
        let Some(notes) = self.notes.get_mut(self.config.watch_ghost.index()) else {
            return;
        };
        if !notes.is_enabled() {
            return;
        }
        for node in nodes_within(view, view.actor_node(), self.config.critical_distance()) {
            notes.highlight(node, Tag::CriticalZone);
        }
    }
}

fn decide_one<V: GameView + ?Sized>(
    tree:  &DecisionTree,
    v:     &AttributeVector,
    ctx:   &StrategyContext<'_, V>,
    rng:   &mut AgentRng,
    notes: &mut Annotations,
) -> EngineResult<(Strategy, Decision)> {
    let strategy = tree.classify(v)?;
    let decision = strategy.run(v.ghost, ctx, rng, notes)?;
    Ok((strategy, decision))
}
