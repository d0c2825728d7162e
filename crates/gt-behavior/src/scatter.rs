//! Corner-anchor selection for the scatter strategies.
//!
//! Each scatter strategy owns one corner of the maze.  Its target is picked
//! by folding over the anchor list in host order: an anchor replaces the
//! current pick when it lies further toward the corner on *either* axis.
//! Screen coordinates grow downward, so "top" means smaller `y`.

use gt_core::{AgentId, GridPoint, NodeId};

use crate::chase::steer;
use crate::debug::{Annotations, Tag};
use crate::{Decision, GameView};

/// The corner a scatter strategy retreats toward.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    TopRight,
    TopLeft,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Whether `cand` replaces `cur` as this corner's pick.
    #[inline]
    pub fn replaces(self, cand: GridPoint, cur: GridPoint) -> bool {
        match self {
            Corner::TopRight    => cand.x > cur.x || cand.y < cur.y,
            Corner::TopLeft     => cand.x < cur.x || cand.y < cur.y,
            Corner::BottomLeft  => cand.x < cur.x || cand.y > cur.y,
            Corner::BottomRight => cand.x > cur.x || cand.y > cur.y,
        }
    }
}

/// This corner's anchor, or `None` when the host reports no anchors.
pub fn scatter_target<V: GameView + ?Sized>(view: &V, corner: Corner) -> Option<NodeId> {
    let (&first, rest) = view.anchors().split_first()?;
    let mut pick = first;
    let mut at = view.position(first);
    for &node in rest {
        let p = view.position(node);
        if corner.replaces(p, at) {
            pick = node;
            at = p;
        }
    }
    Some(pick)
}

/// Steer `ghost` toward this corner's anchor.
pub fn scatter<V: GameView + ?Sized>(
    ghost:  AgentId,
    view:   &V,
    corner: Corner,
    notes:  &mut Annotations,
) -> Decision {
    let Some(target) = scatter_target(view, corner) else {
        return Decision::NoAction;
    };
    notes.line(view.ghost_node(ghost), target, Tag::Ghost(ghost));
    steer(view, ghost, target)
}
