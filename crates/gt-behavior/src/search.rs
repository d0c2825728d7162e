//! Graph and grid searches used by the chase strategies.
//!
//! All search state is local to a call so strategies stay re-entrant.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use gt_core::{Direction, GridPoint, NodeId};

use crate::GameView;

// ── Forward projection ────────────────────────────────────────────────────────

/// Result of walking straight ahead from a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Projection {
    /// Last node reached.  Equal to the start if the first step is blocked.
    pub reached:   NodeId,
    /// Nodes stepped onto, in order, excluding the start.
    pub path:      Vec<NodeId>,
    /// Steps left over when the walk was blocked.  0 if it completed.
    pub remaining: u32,
}

/// Walk up to `steps` nodes from `from` in direction `dir`, stopping early
/// at the first node with no neighbor that way.
pub fn project_forward<V: GameView + ?Sized>(
    view:  &V,
    from:  NodeId,
    dir:   Direction,
    steps: u32,
) -> Projection {
    let mut reached = from;
    let mut path = Vec::with_capacity(steps as usize);
    let mut remaining = steps;
    while remaining > 0 {
        match view.neighbor(reached, dir) {
            Some(next) => {
                reached = next;
                path.push(next);
                remaining -= 1;
            }
            None => break,
        }
    }
    Projection { reached, path, remaining }
}

// ── Depth-bounded DFS ─────────────────────────────────────────────────────────

/// Output of [`nodes_at_depth`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DepthSearch {
    /// Nodes reached with exactly the requested depth, in discovery order.
    pub found:   Vec<NodeId>,
    /// The deepest node reached (first found on ties).  Used as the
    /// fallback when `found` is empty.
    pub deepest: NodeId,
}

/// Depth-first search from `start` collecting nodes exactly `depth` steps
/// away along search-tree paths.
///
/// Nodes already in `visited` are never entered, and each node is claimed
/// by the first path that reaches it regardless of depth.  An explicit
/// stack bounds memory by the node count rather than call depth.
pub fn nodes_at_depth<V: GameView + ?Sized>(
    view:    &V,
    start:   NodeId,
    depth:   u32,
    visited: &mut FxHashSet<NodeId>,
) -> DepthSearch {
    visited.insert(start);
    let mut stack = vec![(start, depth)];
    let mut found = Vec::new();
    let mut deepest = (start, depth);

    while let Some((node, left)) = stack.pop() {
        if left < deepest.1 {
            deepest = (node, left);
        }
        if left == 0 {
            found.push(node);
            continue;
        }
        // Reversed so Up is popped (explored) first.
        for &dir in Direction::ALL.iter().rev() {
            if let Some(next) = view.neighbor(node, dir) {
                if visited.insert(next) {
                    stack.push((next, left - 1));
                }
            }
        }
    }

    DepthSearch { found, deepest: deepest.0 }
}

/// Candidate ambush nodes `steps` ahead of the actor.
///
/// Walks straight ahead along `facing`.  If the walk is blocked early, the
/// leftover depth is spent in a DFS from the last reached node that avoids
/// the walked path.  Never empty: falls back to the deepest node reached.
pub fn ambush_candidates<V: GameView + ?Sized>(
    view:   &V,
    actor:  NodeId,
    facing: Direction,
    steps:  u32,
) -> Vec<NodeId> {
    let proj = project_forward(view, actor, facing, steps);
    if proj.remaining == 0 {
        return vec![proj.reached];
    }
    let mut visited: FxHashSet<NodeId> = proj.path.iter().copied().collect();
    let search = nodes_at_depth(view, proj.reached, proj.remaining, &mut visited);
    if search.found.is_empty() {
        vec![search.deepest]
    } else {
        search.found
    }
}

// ── Grid BFS ──────────────────────────────────────────────────────────────────

/// Neighbour order for the grid search: +x, −x, −y, +y.
const GRID_STEPS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];

/// Breadth-first search over integer coordinates from `start`, returning the
/// first coordinate that names a node.
///
/// Expansion stays inside the view's bounds.  `None` only if no in-bounds
/// coordinate reachable from `start` is a node.
pub fn nearest_node<V: GameView + ?Sized>(view: &V, start: GridPoint) -> Option<NodeId> {
    let bounds = view.bounds();
    let mut seen: FxHashSet<GridPoint> = FxHashSet::default();
    let mut queue = VecDeque::new();
    seen.insert(start);
    queue.push_back(start);

    while let Some(p) = queue.pop_front() {
        if let Some(node) = view.node_at(p) {
            return Some(node);
        }
        for (dx, dy) in GRID_STEPS {
            let next = p.offset(dx, dy);
            if bounds.contains(next) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    None
}

// ── Radius search ─────────────────────────────────────────────────────────────

/// Every node within `radius` steps of `center` (inclusive), in BFS order.
pub fn nodes_within<V: GameView + ?Sized>(view: &V, center: NodeId, radius: u32) -> Vec<NodeId> {
    let mut seen: FxHashSet<NodeId> = FxHashSet::default();
    let mut out = Vec::new();
    let mut queue = VecDeque::new();
    seen.insert(center);
    queue.push_back((center, 0u32));

    while let Some((node, dist)) = queue.pop_front() {
        out.push(node);
        if dist == radius {
            continue;
        }
        for dir in Direction::ALL {
            if let Some(next) = view.neighbor(node, dir) {
                if seen.insert(next) {
                    queue.push_back((next, dist + 1));
                }
            }
        }
    }
    out
}
