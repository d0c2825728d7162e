//! Per-ghost attribute bookkeeping.

use tracing::trace;

use gt_behavior::GameView;
use gt_core::{AgentId, AttributeVector, EngineConfig, EngineRng};

/// Owns one [`AttributeVector`] per ghost and advances them once per tick.
///
/// The table is allocated once; [`update`](Self::update) mutates it in
/// place.
///
/// | field        | update rule                                               |
/// |--------------|-----------------------------------------------------------|
/// | `edible`     | copied from the host                                      |
/// | `phase_timer`| decremented; at 0 the phase flips and the timer reloads   |
/// | `pills_low`  | latches once remaining collectibles ≤ the critical count  |
/// | `near_actor` | path distance actor → ghost ≤ critical distance, recomputed |
pub struct AttributeTracker {
    vectors:           Vec<AttributeVector>,
    scatter_ticks:     u32,
    chase_ticks:       u32,
    critical_distance: u32,
    critical_pills:    u32,
}

impl AttributeTracker {
    /// Every ghost starts in the chase phase with a timer drawn uniformly
    /// from `1..=chase_ticks`, so the ghosts' phases are staggered.
    pub fn new(config: &EngineConfig, rng: &mut EngineRng) -> Self {
        let chase_ticks = config.chase_ticks().max(1);
        let vectors = (0..config.ghost_count)
            .map(|g| AttributeVector {
                chase: true,
                phase_timer: rng.gen_range(1..=chase_ticks),
                ..AttributeVector::new(AgentId(g as u8))
            })
            .collect();
        Self {
            vectors,
            scatter_ticks: config.scatter_ticks().max(1),
            chase_ticks,
            critical_distance: config.critical_distance(),
            critical_pills: config.critical_pill_count,
        }
    }

    /// Advance every ghost's attributes by one tick.
    pub fn update<V: GameView + ?Sized>(&mut self, view: &V) {
        let remaining = view.remaining_collectibles();
        let actor = view.actor_node();

        for v in &mut self.vectors {
            let ghost = v.ghost;
            v.edible = view.is_edible(ghost);

            v.phase_timer = v.phase_timer.saturating_sub(1);
            if v.phase_timer == 0 {
                v.chase = !v.chase;
                v.phase_timer = if v.chase { self.chase_ticks } else { self.scatter_ticks };
                trace!(
                    ghost = %ghost,
                    phase = if v.chase { "chase" } else { "scatter" },
                    ticks = v.phase_timer,
                    "phase flip"
                );
            }

            if remaining <= self.critical_pills {
                v.pills_low = true;
            }

            v.near_actor = view
                .path_distance(actor, view.ghost_node(ghost))
                .is_some_and(|d| d <= self.critical_distance);
        }
    }

    #[inline]
    pub fn vectors(&self) -> &[AttributeVector] {
        &self.vectors
    }

    #[inline]
    pub fn get(&self, ghost: AgentId) -> Option<&AttributeVector> {
        self.vectors.get(ghost.index())
    }

    /// Mutable access for hosts that drive attributes directly (replays,
    /// tests).  The next [`update`](Self::update) continues from the edited
    /// state.
    #[inline]
    pub fn get_mut(&mut self, ghost: AgentId) -> Option<&mut AttributeVector> {
        self.vectors.get_mut(ghost.index())
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}
