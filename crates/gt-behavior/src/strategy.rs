//! The strategy catalog and the context every strategy runs against.

use gt_core::{AgentId, AgentRng, EngineConfig, NodeId};

use crate::debug::Annotations;
use crate::scatter::{scatter, Corner};
use crate::{chase, BehaviorResult, Decision, GameView};

// ── Parameters ────────────────────────────────────────────────────────────────

/// Lookahead distances, in nodes, used by the chase strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StrategyParams {
    /// How far ahead of the actor the ambush strategy aims.
    pub ambush_steps:   u32,
    /// How far ahead of the actor the projection interest point lies.
    pub interest_steps: u32,
}

impl StrategyParams {
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            ambush_steps:   config.ambush_steps(),
            interest_steps: config.interest_steps(),
        }
    }
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

/// Read-only inputs shared by all strategy calls within one tick.
pub struct StrategyContext<'a, V: GameView + ?Sized> {
    pub view:      &'a V,
    pub params:    StrategyParams,
    /// The lead ghost's node, captured once at the start of the tick so every
    /// projection call in the tick reflects through the same point.
    pub lead_node: NodeId,
}

impl<'a, V: GameView + ?Sized> StrategyContext<'a, V> {
    pub fn new(view: &'a V, params: StrategyParams, lead: AgentId) -> Self {
        Self { view, params, lead_node: view.ghost_node(lead) }
    }
}

// ── Strategy ──────────────────────────────────────────────────────────────────

/// The eight targeting strategies, indexed 0..8 in catalog order.
///
/// Decision tree leaves refer to strategies by this index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Strategy {
    ScatterA   = 0,
    ScatterB   = 1,
    ScatterC   = 2,
    ScatterD   = 3,
    ChaseA     = 4,
    ChaseB     = 5,
    ChaseC     = 6,
    Frightened = 7,
}

impl Strategy {
    pub const COUNT: usize = 8;

    pub const ALL: [Strategy; Self::COUNT] = [
        Strategy::ScatterA,
        Strategy::ScatterB,
        Strategy::ScatterC,
        Strategy::ScatterD,
        Strategy::ChaseA,
        Strategy::ChaseB,
        Strategy::ChaseC,
        Strategy::Frightened,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Option<Strategy> {
        Self::ALL.get(i).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::ScatterA   => "scatter_a",
            Strategy::ScatterB   => "scatter_b",
            Strategy::ScatterC   => "scatter_c",
            Strategy::ScatterD   => "scatter_d",
            Strategy::ChaseA     => "chase_a",
            Strategy::ChaseB     => "chase_b",
            Strategy::ChaseC     => "chase_c",
            Strategy::Frightened => "frightened",
        }
    }

    /// The corner this strategy retreats to, for the scatter variants.
    pub fn corner(self) -> Option<Corner> {
        match self {
            Strategy::ScatterA => Some(Corner::TopRight),
            Strategy::ScatterB => Some(Corner::TopLeft),
            Strategy::ScatterC => Some(Corner::BottomLeft),
            Strategy::ScatterD => Some(Corner::BottomRight),
            _ => None,
        }
    }

    /// Compute `ghost`'s decision for this tick.
    ///
    /// Returns `Decision::NoAction` whenever the ghost is mid-corridor.
    /// Only the projection strategy can fail, and only on a maze with no
    /// node inside its own bounds.
    pub fn run<V: GameView + ?Sized>(
        self,
        ghost: AgentId,
        ctx:   &StrategyContext<'_, V>,
        rng:   &mut AgentRng,
        notes: &mut Annotations,
    ) -> BehaviorResult<Decision> {
        let view = ctx.view;
        if !view.requires_action(ghost) {
            return Ok(Decision::NoAction);
        }

        let decision = match self {
            Strategy::ChaseA => chase::direct(ghost, ctx, notes),
            Strategy::ChaseB => chase::ambush(ghost, ctx, rng, notes),
            Strategy::ChaseC => chase::projection(ghost, ctx, notes)?,
            Strategy::Frightened => chase::frightened(ghost, ctx, rng),
            scatter_variant => match scatter_variant.corner() {
                Some(corner) => scatter(ghost, view, corner, notes),
                None => Decision::NoAction,
            },
        };
        Ok(decision)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
