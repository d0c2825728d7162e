//! Routing trait and the two built-in implementations.
//!
//! # Pluggability
//!
//! Hosts call routing via the [`Router`] trait so they can swap in their own
//! path engine.  [`BfsRouter`] answers each query with a fresh breadth-first
//! search; [`TableRouter`] precomputes all-pairs distances once and answers
//! in O(1), which is what a per-frame host wants.
//!
//! # Cost units
//!
//! All maze edges have unit cost, so path distance is a hop count (`u32`).

use std::collections::VecDeque;

use gt_core::{Direction, NodeId};

use crate::maze::Maze;

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// Implementations must be `Send + Sync` so a host snapshot borrowing the
/// router can be shared by the engine's parallel strategy phase.
pub trait Router: Send + Sync {
    /// Path distance in hops, or `None` if `to` is unreachable.
    fn distance(&self, maze: &Maze, from: NodeId, to: NodeId) -> Option<u32>;

    /// The first step of a shortest path from `from` to `to`, restricted to
    /// `allowed` directions.
    ///
    /// Among the allowed exits, picks the one whose neighbour is closest to
    /// `to`; ties go to the earlier direction in `allowed`.  Returns `None`
    /// when `from == to` or no allowed exit can reach `to`.
    fn next_direction(
        &self,
        maze: &Maze,
        from: NodeId,
        to: NodeId,
        allowed: &[Direction],
    ) -> Option<Direction> {
        if from == to {
            return None;
        }
        let mut best: Option<(u32, Direction)> = None;
        for &dir in allowed {
            let Some(next) = maze.neighbor(from, dir) else { continue };
            let Some(d) = self.distance(maze, next, to) else { continue };
            if best.is_none_or(|(bd, _)| d < bd) {
                best = Some((d, dir));
            }
        }
        best.map(|(_, dir)| dir)
    }
}

// ── BfsRouter ─────────────────────────────────────────────────────────────────

/// Breadth-first search over the neighbour table, per query.
pub struct BfsRouter;

impl Router for BfsRouter {
    fn distance(&self, maze: &Maze, from: NodeId, to: NodeId) -> Option<u32> {
        if !maze.contains(from) || !maze.contains(to) {
            return None;
        }
        bfs_distances(maze, from)[to.index()]
    }
}

/// Hop distance from `source` to every node; `None` for unreachable nodes.
fn bfs_distances(maze: &Maze, source: NodeId) -> Vec<Option<u32>> {
    let mut dist = vec![None; maze.node_count()];
    let mut queue = VecDeque::new();
    dist[source.index()] = Some(0);
    queue.push_back((source, 0u32));

    while let Some((node, d)) = queue.pop_front() {
        for (_, next) in maze.exits(node) {
            if dist[next.index()].is_none() {
                dist[next.index()] = Some(d + 1);
                queue.push_back((next, d + 1));
            }
        }
    }
    dist
}

// ── TableRouter ───────────────────────────────────────────────────────────────

/// All-pairs distance table, built once per maze.
///
/// Memory is `node_count²` `u16`s; a classic maze (~1,300 nodes) needs about
/// 3.4 MB.  `u16::MAX` marks unreachable pairs.
pub struct TableRouter {
    node_count: usize,
    table:      Vec<u16>,
}

impl TableRouter {
    /// Run one BFS per node.  O(N · (N + E)).
    pub fn build(maze: &Maze) -> Self {
        let n = maze.node_count();
        let mut table = vec![u16::MAX; n * n];
        for src in 0..n {
            let row = bfs_distances(maze, NodeId(src as u32));
            for (dst, d) in row.into_iter().enumerate() {
                if let Some(d) = d {
                    table[src * n + dst] = d.min(u16::MAX as u32 - 1) as u16;
                }
            }
        }
        Self { node_count: n, table }
    }
}

impl Router for TableRouter {
    #[inline]
    fn distance(&self, _maze: &Maze, from: NodeId, to: NodeId) -> Option<u32> {
        if from.index() >= self.node_count || to.index() >= self.node_count {
            return None;
        }
        match self.table[from.index() * self.node_count + to.index()] {
            u16::MAX => None,
            d => Some(d as u32),
        }
    }
}
