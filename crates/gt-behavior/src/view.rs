//! The read-only host accessor passed to every strategy.

use gt_core::{AgentId, Bounds, Direction, GridPoint, NodeId};

/// Everything the decision engine needs to know about the game this tick.
///
/// The host implements this over its own state.  [`Snapshot`] is a ready
/// implementation over a `gt_maze::Maze` for hosts that keep plain data.
///
/// Implementations are queried many times per tick and should answer in
/// O(1) where possible; `path_distance` and `next_direction` in particular
/// are expected to be backed by a precomputed table.
///
/// [`Snapshot`]: crate::Snapshot
pub trait GameView {
    // ── Ghosts ────────────────────────────────────────────────────────────

    fn ghost_count(&self) -> usize;

    fn ghost_node(&self, ghost: AgentId) -> NodeId;

    /// `true` while the ghost is frightened and can be eaten.
    fn is_edible(&self, ghost: AgentId) -> bool;

    /// `false` while the ghost is mid-corridor and has no choice to make.
    fn requires_action(&self, ghost: AgentId) -> bool;

    /// Directions the ghost may legally take from its current node.
    fn legal_directions(&self, ghost: AgentId) -> Vec<Direction>;

    /// First step of a shortest path from the ghost to `target`, honouring
    /// [`legal_directions`](Self::legal_directions).  `None` if the ghost is
    /// already there or cannot get there.
    fn next_direction(&self, ghost: AgentId, target: NodeId) -> Option<Direction>;

    // ── Actor ─────────────────────────────────────────────────────────────

    fn actor_node(&self) -> NodeId;

    fn actor_direction(&self) -> Direction;

    // ── Collectibles ──────────────────────────────────────────────────────

    /// Anchor points (power-pill sites) used as scatter targets.
    fn anchors(&self) -> &[NodeId];

    fn remaining_collectibles(&self) -> u32;

    // ── Graph ─────────────────────────────────────────────────────────────

    fn neighbor(&self, node: NodeId, dir: Direction) -> Option<NodeId>;

    fn position(&self, node: NodeId) -> GridPoint;

    /// The node at an integer coordinate, or `None` for walls and points
    /// outside the maze.
    fn node_at(&self, p: GridPoint) -> Option<NodeId>;

    /// The coordinate rectangle `[1, max_x] × [1, max_y]`.
    fn bounds(&self) -> Bounds;

    /// Shortest path distance in nodes, or `None` if unreachable.
    fn path_distance(&self, from: NodeId, to: NodeId) -> Option<u32>;
}
