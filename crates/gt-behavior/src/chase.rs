//! The three chase strategies and the frightened walk.
//!
//! | Strategy   | Target                                                        |
//! |------------|---------------------------------------------------------------|
//! | direct     | the actor's node                                              |
//! | ambush     | a node `ambush_steps` ahead of the actor (random among ties)  |
//! | projection | the interest point reflected through the lead ghost, clamped  |
//! | frightened | a random legal neighbour                                      |
//!
//! Callers have already checked `requires_action`.

use tracing::trace;

use gt_core::{AgentId, AgentRng, NodeId};

use crate::debug::{Annotations, Tag};
use crate::geometry::{clamp_along_line, reflect};
use crate::search::{ambush_candidates, nearest_node, project_forward};
use crate::{BehaviorError, BehaviorResult, Decision, GameView, StrategyContext};

/// Steer `ghost` toward `target` along a shortest legal path.
pub fn steer<V: GameView + ?Sized>(view: &V, ghost: AgentId, target: NodeId) -> Decision {
    match view.next_direction(ghost, target) {
        Some(direction) => Decision::Move { direction, target },
        None => Decision::NoAction,
    }
}

pub fn direct<V: GameView + ?Sized>(
    ghost: AgentId,
    ctx:   &StrategyContext<'_, V>,
    notes: &mut Annotations,
) -> Decision {
    let view = ctx.view;
    let target = view.actor_node();
    notes.line(view.ghost_node(ghost), target, Tag::Ghost(ghost));
    steer(view, ghost, target)
}

pub fn ambush<V: GameView + ?Sized>(
    ghost: AgentId,
    ctx:   &StrategyContext<'_, V>,
    rng:   &mut AgentRng,
    notes: &mut Annotations,
) -> Decision {
    let view = ctx.view;
    let candidates = ambush_candidates(
        view,
        view.actor_node(),
        view.actor_direction(),
        ctx.params.ambush_steps,
    );
    let Some(&target) = rng.choose(&candidates) else {
        return Decision::NoAction;
    };

    let tag = Tag::Ghost(ghost);
    for &node in &candidates {
        notes.highlight(node, tag);
    }
    notes.line(view.ghost_node(ghost), target, tag);
    steer(view, ghost, target)
}

pub fn projection<V: GameView + ?Sized>(
    ghost: AgentId,
    ctx:   &StrategyContext<'_, V>,
    notes: &mut Annotations,
) -> BehaviorResult<Decision> {
    let view = ctx.view;
    let interest = project_forward(
        view,
        view.actor_node(),
        view.actor_direction(),
        ctx.params.interest_steps,
    )
    .reached;

    let interest_at = view.position(interest);
    let reference_at = view.position(ctx.lead_node);
    let raw = reflect(interest_at, reference_at);
    let clamped = clamp_along_line(raw, interest_at - reference_at, view.bounds());

    let target = match view.node_at(clamped) {
        Some(node) => node,
        None => {
            let node = nearest_node(view, clamped)
                .ok_or(BehaviorError::UnreachableTarget { from: clamped })?;
            trace!(ghost = %ghost, from = %clamped, to = %view.position(node), "snapped projection target");
            node
        }
    };

    let tag = Tag::Ghost(ghost);
    notes.highlight(interest, tag);
    notes.highlight(ctx.lead_node, tag);
    notes.highlight(target, tag);
    notes.line(ctx.lead_node, target, tag);
    notes.line(view.ghost_node(ghost), target, tag);
    Ok(steer(view, ghost, target))
}

pub fn frightened<V: GameView + ?Sized>(
    ghost: AgentId,
    ctx:   &StrategyContext<'_, V>,
    rng:   &mut AgentRng,
) -> Decision {
    let view = ctx.view;
    let legal = view.legal_directions(ghost);
    let Some(&direction) = rng.choose(&legal) else {
        return Decision::NoAction;
    };
    match view.neighbor(view.ghost_node(ghost), direction) {
        Some(target) => Decision::Move { direction, target },
        None => Decision::NoAction,
    }
}
