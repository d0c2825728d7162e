//! Plain data row types written by trace backends.

use gt_behavior::{Decision, Strategy};
use gt_core::{AttributeVector, NodeId, Tick};

/// One ghost's classification and decision for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionRow {
    pub tick:        u64,
    pub ghost:       u8,
    pub edible:      bool,
    pub chase:       bool,
    pub phase_timer: u32,
    pub near_actor:  bool,
    pub pills_low:   bool,
    pub strategy:    Strategy,
    /// `"none"` for `Decision::NoAction`.
    pub direction:   &'static str,
    /// `u32::MAX` for `Decision::NoAction`.
    pub target:      u32,
}

impl DecisionRow {
    pub fn new(tick: Tick, v: &AttributeVector, strategy: Strategy, decision: Decision) -> Self {
        Self {
            tick:        tick.0,
            ghost:       v.ghost.0,
            edible:      v.edible,
            chase:       v.chase,
            phase_timer: v.phase_timer,
            near_actor:  v.near_actor,
            pills_low:   v.pills_low,
            strategy,
            direction:   decision.direction().map_or("none", |d| d.as_str()),
            target:      decision.target().unwrap_or(NodeId::INVALID).0,
        }
    }
}

/// Summary for one engine tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:  u64,
    pub moves: u64,
}
