//! A plain-data [`GameView`] over a `gt_maze::Maze`.

use gt_core::{AgentId, Bounds, Direction, GridPoint, NodeId};
use gt_maze::{Maze, Router};

use crate::GameView;

/// One ghost's host-side state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GhostState {
    pub node:    NodeId,
    /// Direction of the last move.  Ghosts may not reverse onto it.
    pub heading: Direction,
    pub edible:  bool,
}

/// The actor's host-side state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ActorState {
    pub node:    NodeId,
    pub heading: Direction,
}

/// A read-only snapshot of the game for one tick.
///
/// Built by the host once per tick and passed to the engine by reference.
/// Borrows the maze and router, owns the small per-tick state.
///
/// Movement rules follow the classic game: ghosts only decide at junctions
/// and never reverse unless the corridor dead-ends.
pub struct Snapshot<'a> {
    pub maze:      &'a Maze,
    pub router:    &'a dyn Router,
    pub ghosts:    Vec<GhostState>,
    pub actor:     ActorState,
    pub anchors:   Vec<NodeId>,
    pub remaining: u32,
}

impl<'a> Snapshot<'a> {
    pub fn new(
        maze:      &'a Maze,
        router:    &'a dyn Router,
        ghosts:    Vec<GhostState>,
        actor:     ActorState,
        anchors:   Vec<NodeId>,
        remaining: u32,
    ) -> Self {
        Self { maze, router, ghosts, actor, anchors, remaining }
    }

    #[inline]
    fn ghost(&self, ghost: AgentId) -> &GhostState {
        &self.ghosts[ghost.index()]
    }
}

impl GameView for Snapshot<'_> {
    fn ghost_count(&self) -> usize {
        self.ghosts.len()
    }

    fn ghost_node(&self, ghost: AgentId) -> NodeId {
        self.ghost(ghost).node
    }

    fn is_edible(&self, ghost: AgentId) -> bool {
        self.ghost(ghost).edible
    }

    fn requires_action(&self, ghost: AgentId) -> bool {
        self.maze.is_junction(self.ghost(ghost).node)
    }

    fn legal_directions(&self, ghost: AgentId) -> Vec<Direction> {
        let g = self.ghost(ghost);
        let back = g.heading.opposite();
        let forward: Vec<Direction> = self
            .maze
            .exits(g.node)
            .map(|(d, _)| d)
            .filter(|&d| d != back)
            .collect();
        if forward.is_empty() {
            // Dead end: turning around is the only move.
            self.maze.exits(g.node).map(|(d, _)| d).collect()
        } else {
            forward
        }
    }

    fn next_direction(&self, ghost: AgentId, target: NodeId) -> Option<Direction> {
        let allowed = self.legal_directions(ghost);
        self.router
            .next_direction(self.maze, self.ghost(ghost).node, target, &allowed)
    }

    fn actor_node(&self) -> NodeId {
        self.actor.node
    }

    fn actor_direction(&self) -> Direction {
        self.actor.heading
    }

    fn anchors(&self) -> &[NodeId] {
        &self.anchors
    }

    fn remaining_collectibles(&self) -> u32 {
        self.remaining
    }

    fn neighbor(&self, node: NodeId, dir: Direction) -> Option<NodeId> {
        self.maze.neighbor(node, dir)
    }

    fn position(&self, node: NodeId) -> GridPoint {
        self.maze.position(node)
    }

    fn node_at(&self, p: GridPoint) -> Option<NodeId> {
        self.maze.node_at(p)
    }

    fn bounds(&self) -> Bounds {
        self.maze.bounds()
    }

    fn path_distance(&self, from: NodeId, to: NodeId) -> Option<u32> {
        self.router.distance(self.maze, from, to)
    }
}
