//! Host-side game state: pills, fright timers, and actor/ghost movement.
//!
//! The engine only decides at junctions.  Between junctions, and whenever a
//! decision names no usable exit, a ghost coasts: straight on if it can,
//! otherwise the first non-reversing exit, reversing only at a dead end.

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use gt_behavior::{ActorState, Decision, GhostState, Snapshot};
use gt_core::{Direction, NodeId};
use gt_maze::{Maze, MazeLayout, Router};

/// Lives before the level ends.
pub const LIVES: u32 = 3;

/// Chance the actor leaves its heading at a junction with nothing to eat.
const TURN_CHANCE: f64 = 0.3;

#[derive(Copy, Clone, PartialEq, Eq)]
enum Cell {
    Empty,
    Pill,
    PowerPill,
}

#[derive(Debug, Default)]
pub struct Stats {
    pub pills_eaten:       u32,
    pub power_pills_eaten: u32,
    pub ghosts_eaten:      u32,
    pub catches:           u32,
}

pub struct World {
    layout:       MazeLayout,
    /// Collectible per node, indexed by `NodeId`.
    cells:        Vec<Cell>,
    remaining:    u32,
    actor_start:  NodeId,
    actor:        ActorState,
    ghosts:       Vec<GhostState>,
    /// Edible ticks left per ghost.
    fright:       Vec<u32>,
    fright_ticks: u32,
    rng:          SmallRng,
    pub stats:    Stats,
}

impl World {
    pub fn new(layout: MazeLayout, fright_ticks: u32, seed: u64) -> Result<Self> {
        let actor_start = layout.actor_start.context("maze has no actor start ('P')")?;

        let mut cells = vec![Cell::Empty; layout.maze.node_count()];
        for n in &layout.pills {
            cells[n.index()] = Cell::Pill;
        }
        for n in &layout.power_pills {
            cells[n.index()] = Cell::PowerPill;
        }
        let remaining = (layout.pills.len() + layout.power_pills.len()) as u32;

        let ghosts = layout
            .ghost_starts
            .iter()
            .map(|&node| GhostState { node, heading: Direction::Up, edible: false })
            .collect::<Vec<_>>();

        Ok(Self {
            cells,
            remaining,
            actor_start,
            actor: ActorState { node: actor_start, heading: Direction::Left },
            fright: vec![0; ghosts.len()],
            ghosts,
            fright_ticks,
            rng: SmallRng::seed_from_u64(seed),
            stats: Stats::default(),
            layout,
        })
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_over(&self) -> bool {
        self.remaining == 0 || self.stats.catches >= LIVES
    }

    /// The engine's view of the current state.
    pub fn snapshot<'a>(&'a self, router: &'a dyn Router) -> Snapshot<'a> {
        Snapshot::new(
            &self.layout.maze,
            router,
            self.ghosts.clone(),
            self.actor,
            self.layout.power_pills.clone(),
            self.remaining,
        )
    }

    /// Advance the world one tick, applying `decisions` (indexed by ghost).
    pub fn step(&mut self, decisions: &[Decision]) {
        let actor_from = self.actor.node;
        let ghosts_from: Vec<NodeId> = self.ghosts.iter().map(|g| g.node).collect();

        self.move_actor();
        self.eat();
        for (i, &decision) in decisions.iter().enumerate() {
            self.move_ghost(i, decision);
        }
        self.collide(actor_from, &ghosts_from);

        for (ghost, left) in self.ghosts.iter_mut().zip(&mut self.fright) {
            *left = left.saturating_sub(1);
            ghost.edible = *left > 0;
        }
    }

    // ── Movement ──────────────────────────────────────────────────────────

    fn move_actor(&mut self) {
        let maze = &self.layout.maze;
        let here = self.actor.node;
        let heading = self.actor.heading;

        let exits: Vec<(Direction, NodeId)> =
            maze.exits(here).filter(|&(d, _)| d != heading.opposite()).collect();
        let hungry: Vec<(Direction, NodeId)> = exits
            .iter()
            .copied()
            .filter(|&(_, n)| self.cells[n.index()] != Cell::Empty)
            .collect();
        let ahead = exits.iter().copied().find(|&(d, _)| d == heading);

        let step = match ahead {
            Some(s) if exits.len() == 1 => Some(s),
            Some(s) if hungry.contains(&s) => Some(s),
            _ if !hungry.is_empty() => Some(hungry[self.rng.gen_range(0..hungry.len())]),
            Some(s) if !self.rng.gen_bool(TURN_CHANCE) => Some(s),
            _ if !exits.is_empty() => Some(exits[self.rng.gen_range(0..exits.len())]),
            _ => maze.neighbor(here, heading.opposite()).map(|n| (heading.opposite(), n)),
        };
        if let Some((heading, node)) = step {
            self.actor = ActorState { node, heading };
        }
    }

    fn eat(&mut self) {
        let cell = &mut self.cells[self.actor.node.index()];
        match *cell {
            Cell::Empty => return,
            Cell::Pill => self.stats.pills_eaten += 1,
            Cell::PowerPill => {
                self.stats.power_pills_eaten += 1;
                self.fright.fill(self.fright_ticks);
                for g in &mut self.ghosts {
                    g.edible = true;
                }
            }
        }
        *cell = Cell::Empty;
        self.remaining -= 1;
    }

    fn move_ghost(&mut self, i: usize, decision: Decision) {
        let maze = &self.layout.maze;
        let Some(ghost) = self.ghosts.get_mut(i) else {
            return;
        };
        let chosen = match decision {
            Decision::Move { direction, .. } => {
                maze.neighbor(ghost.node, direction).map(|n| (direction, n))
            }
            Decision::NoAction => None,
        };
        if let Some((heading, node)) = chosen.or_else(|| coast(maze, ghost.node, ghost.heading)) {
            ghost.node = node;
            ghost.heading = heading;
        }
    }

    /// Resolve ghosts that share a node with the actor or swapped places
    /// with it this tick.
    fn collide(&mut self, actor_from: NodeId, ghosts_from: &[NodeId]) {
        for i in 0..self.ghosts.len() {
            let ghost = self.ghosts[i];
            let met = ghost.node == self.actor.node
                || (ghost.node == actor_from && ghosts_from[i] == self.actor.node);
            if !met {
                continue;
            }
            if ghost.edible {
                self.stats.ghosts_eaten += 1;
                self.fright[i] = 0;
                self.ghosts[i] = GhostState {
                    node:    self.layout.ghost_starts[i],
                    heading: Direction::Up,
                    edible:  false,
                };
            } else {
                self.stats.catches += 1;
                self.actor = ActorState { node: self.actor_start, heading: Direction::Left };
                return;
            }
        }
    }
}

fn coast(maze: &Maze, node: NodeId, heading: Direction) -> Option<(Direction, NodeId)> {
    maze.neighbor(node, heading)
        .map(|n| (heading, n))
        .or_else(|| maze.exits(node).find(|&(d, _)| d != heading.opposite()))
        .or_else(|| maze.neighbor(node, heading.opposite()).map(|n| (heading.opposite(), n)))
}
