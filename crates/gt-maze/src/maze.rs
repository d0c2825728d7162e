//! Maze graph representation and builder.
//!
//! # Data layout
//!
//! Every node has a fixed four-slot neighbour table indexed by
//! [`Direction::index`]; an empty slot holds `NodeId::INVALID`.  A maze
//! node has at most one neighbour per direction, so this is denser and
//! faster to query than a general adjacency list.
//!
//! # Coordinate index
//!
//! An `FxHashMap<GridPoint, NodeId>` maps integer coordinates back to nodes.
//! Targeting strategies compute raw coordinates (reflections, projections)
//! and need an O(1) "is there a node here" check.

use rustc_hash::FxHashMap;

use gt_core::{Bounds, Direction, GridPoint, NodeId};

// ── Maze ──────────────────────────────────────────────────────────────────────

/// Undirected maze graph with grid coordinates.
///
/// Do not construct directly; use [`MazeBuilder`] or
/// [`parse_ascii`](crate::parse_ascii).
#[derive(Debug)]
pub struct Maze {
    /// Grid position of each node.  Indexed by `NodeId`.
    pub node_pos: Vec<GridPoint>,

    /// Neighbour per direction.  Indexed by `NodeId`, then `Direction`.
    pub neighbors: Vec<[NodeId; 4]>,

    bounds: Bounds,
    index: FxHashMap<GridPoint, NodeId>,
}

impl Maze {
    /// Construct an empty maze with no nodes.
    pub fn empty() -> Self {
        MazeBuilder::new().build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    /// Coordinate rectangle every node lies in.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_pos.len()
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    #[inline]
    pub fn position(&self, node: NodeId) -> GridPoint {
        self.node_pos[node.index()]
    }

    /// The node at `p`, or `None` for walls and out-of-bounds points.
    #[inline]
    pub fn node_at(&self, p: GridPoint) -> Option<NodeId> {
        self.index.get(&p).copied()
    }

    /// The neighbour of `node` in direction `dir`, if the maze continues.
    #[inline]
    pub fn neighbor(&self, node: NodeId, dir: Direction) -> Option<NodeId> {
        let n = self.neighbors[node.index()][dir.index()];
        (n != NodeId::INVALID).then_some(n)
    }

    /// Iterator over `(direction, neighbour)` pairs in direction order.
    pub fn exits(&self, node: NodeId) -> impl Iterator<Item = (Direction, NodeId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.neighbor(node, d).map(|n| (d, n)))
    }

    /// Number of neighbours of `node`.
    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbors[node.index()]
            .iter()
            .filter(|&&n| n != NodeId::INVALID)
            .count()
    }

    /// `true` where more than two corridors meet.
    #[inline]
    pub fn is_junction(&self, node: NodeId) -> bool {
        self.degree(node) > 2
    }
}

// ── MazeBuilder ───────────────────────────────────────────────────────────────

/// Construct a [`Maze`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use gt_core::{Direction, GridPoint};
/// use gt_maze::MazeBuilder;
///
/// let mut b = MazeBuilder::new();
/// let a = b.add_node(GridPoint::new(1, 1));
/// let c = b.add_node(GridPoint::new(2, 1));
/// b.link(a, Direction::Right, c);
/// let maze = b.build();
/// assert_eq!(maze.neighbor(c, Direction::Left), Some(a));
/// ```
pub struct MazeBuilder {
    nodes:     Vec<GridPoint>,
    neighbors: Vec<[NodeId; 4]>,
    bounds:    Option<Bounds>,
}

impl MazeBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), neighbors: Vec::new(), bounds: None }
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: GridPoint) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        self.neighbors.push([NodeId::INVALID; 4]);
        id
    }

    /// Link `a` to `b` in direction `dir` and `b` back to `a` the opposite
    /// way.  Nodes need not be adjacent on the grid (tunnels wrap around).
    pub fn link(&mut self, a: NodeId, dir: Direction, b: NodeId) {
        self.neighbors[a.index()][dir.index()] = b;
        self.neighbors[b.index()][dir.opposite().index()] = a;
    }

    /// Link every pair of nodes one grid step apart.
    pub fn connect_adjacent(&mut self) {
        let index: FxHashMap<GridPoint, NodeId> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, &p)| (p, NodeId(i as u32)))
            .collect();
        for i in 0..self.nodes.len() {
            let p = self.nodes[i];
            for dir in [Direction::Right, Direction::Down] {
                let (dx, dy) = dir.offset();
                if let Some(&other) = index.get(&p.offset(dx, dy)) {
                    self.link(NodeId(i as u32), dir, other);
                }
            }
        }
    }

    /// Override the coordinate rectangle.  By default it is the smallest
    /// 1-based rectangle containing every node.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Consume the builder and produce a [`Maze`].
    pub fn build(self) -> Maze {
        let bounds = self.bounds.unwrap_or_else(|| {
            let max_x = self.nodes.iter().map(|p| p.x).max().unwrap_or(0);
            let max_y = self.nodes.iter().map(|p| p.y).max().unwrap_or(0);
            Bounds::new(max_x, max_y)
        });
        let index = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, &p)| (p, NodeId(i as u32)))
            .collect();

        Maze {
            node_pos: self.nodes,
            neighbors: self.neighbors,
            bounds,
            index,
        }
    }
}

impl Default for MazeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
