//! Unit tests for gt-maze.
//!
//! All tests use small hand-drawn mazes.

#[cfg(test)]
mod helpers {
    use crate::{MazeLayout, parse_ascii};

    /// A ring with one cross corridor.
    ///
    /// ```text
    ///   x: 1234567
    /// y=1  #######
    /// y=2  #o...o#
    /// y=3  #.#.#.#
    /// y=4  #o...o#
    /// y=5  #######
    /// ```
    pub const RING: &str = "\
#######
#o...o#
#.#.#.#
#o...o#
#######
";

    pub fn ring() -> MazeLayout {
        parse_ascii(RING).unwrap()
    }
}

// ── Builder & structure ───────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use gt_core::{Bounds, Direction, GridPoint, NodeId};

    use crate::{Maze, MazeBuilder};

    #[test]
    fn empty_build() {
        let maze = Maze::empty();
        assert_eq!(maze.node_count(), 0);
        assert!(maze.is_empty());
        assert_eq!(maze.bounds(), Bounds::new(0, 0));
    }

    #[test]
    fn link_is_bidirectional() {
        let mut b = MazeBuilder::new();
        let a = b.add_node(GridPoint::new(1, 1));
        let c = b.add_node(GridPoint::new(1, 2));
        b.link(a, Direction::Down, c);
        let maze = b.build();
        assert_eq!(maze.neighbor(a, Direction::Down), Some(c));
        assert_eq!(maze.neighbor(c, Direction::Up), Some(a));
        assert_eq!(maze.neighbor(a, Direction::Left), None);
        assert_eq!(maze.degree(a), 1);
    }

    #[test]
    fn connect_adjacent_links_grid_neighbours() {
        let mut b = MazeBuilder::new();
        let ids: Vec<NodeId> = (1..=3).map(|x| b.add_node(GridPoint::new(x, 1))).collect();
        let below = b.add_node(GridPoint::new(2, 2));
        b.connect_adjacent();
        let maze = b.build();
        assert_eq!(maze.neighbor(ids[0], Direction::Right), Some(ids[1]));
        assert_eq!(maze.neighbor(ids[1], Direction::Down), Some(below));
        assert!(maze.is_junction(ids[1]));
        assert!(!maze.is_junction(ids[0]));
    }

    #[test]
    fn bounds_default_to_extent_and_can_be_overridden() {
        let mut b = MazeBuilder::new();
        b.add_node(GridPoint::new(4, 9));
        b.add_node(GridPoint::new(7, 2));
        assert_eq!(b.build().bounds(), Bounds::new(7, 9));

        let mut b = MazeBuilder::new().with_bounds(Bounds::new(20, 20));
        b.add_node(GridPoint::new(4, 9));
        assert_eq!(b.build().bounds(), Bounds::new(20, 20));
    }

    #[test]
    fn node_at_reverses_position() {
        let maze = super::helpers::ring().maze;
        for i in 0..maze.node_count() {
            let id = NodeId(i as u32);
            assert_eq!(maze.node_at(maze.position(id)), Some(id));
        }
        assert_eq!(maze.node_at(GridPoint::new(1, 1)), None); // wall
        assert_eq!(maze.node_at(GridPoint::new(50, 50)), None);
    }

    #[test]
    fn exits_in_direction_order() {
        let maze = super::helpers::ring().maze;
        let centre_top = maze.node_at(GridPoint::new(4, 2)).unwrap();
        let dirs: Vec<_> = maze.exits(centre_top).map(|(d, _)| d).collect();
        assert_eq!(dirs, [Direction::Right, Direction::Down, Direction::Left]);
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use gt_core::{Bounds, Direction, GridPoint};

    use crate::{MazeError, parse_ascii};

    #[test]
    fn markers_are_collected() {
        let layout = parse_ascii("#####\n#oP.#\n#G-G#\n#####\n").unwrap();
        assert_eq!(layout.maze.node_count(), 6);
        assert_eq!(layout.power_pills.len(), 1);
        assert_eq!(layout.pills.len(), 1);
        assert_eq!(layout.ghost_starts.len(), 2);
        let actor = layout.actor_start.unwrap();
        assert_eq!(layout.maze.position(actor), GridPoint::new(3, 2));
        assert_eq!(layout.maze.bounds(), Bounds::new(4, 3));
    }

    #[test]
    fn ring_geometry() {
        let layout = super::helpers::ring();
        assert_eq!(layout.maze.node_count(), 13);
        assert_eq!(layout.power_pills.len(), 4);
        assert_eq!(layout.pills.len(), 9);
    }

    #[test]
    fn comments_do_not_advance_rows() {
        let layout = parse_ascii("; a comment\n###\n#-#\n###\n").unwrap();
        let only = layout.maze.node_at(GridPoint::new(2, 2));
        assert!(only.is_some());
    }

    #[test]
    fn tunnel_rows_wrap() {
        let layout = parse_ascii("#####\n-...-\n#####\n").unwrap();
        let maze = &layout.maze;
        let left = maze.node_at(GridPoint::new(1, 2)).unwrap();
        let right = maze.node_at(GridPoint::new(5, 2)).unwrap();
        assert_eq!(maze.neighbor(right, Direction::Right), Some(left));
        assert_eq!(maze.neighbor(left, Direction::Left), Some(right));
    }

    #[test]
    fn rejects_unknown_characters() {
        let err = parse_ascii("###\n#x#\n###\n").unwrap_err();
        assert!(matches!(err, MazeError::Parse { line: 2, .. }), "got {err}");
    }

    #[test]
    fn rejects_two_actor_starts() {
        assert!(parse_ascii("####\n#PP#\n####\n").is_err());
    }

    #[test]
    fn rejects_solid_maze() {
        assert!(parse_ascii("###\n###\n").is_err());
    }
}

// ── Routing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use gt_core::{Direction, GridPoint};

    use crate::{BfsRouter, MazeBuilder, Router, TableRouter};

    #[test]
    fn bfs_distance_on_ring() {
        let maze = super::helpers::ring().maze;
        let a = maze.node_at(GridPoint::new(2, 2)).unwrap();
        let b = maze.node_at(GridPoint::new(6, 4)).unwrap();
        assert_eq!(BfsRouter.distance(&maze, a, b), Some(6));
        assert_eq!(BfsRouter.distance(&maze, a, a), Some(0));
    }

    #[test]
    fn table_matches_bfs() {
        let maze = super::helpers::ring().maze;
        let table = TableRouter::build(&maze);
        for i in 0..maze.node_count() as u32 {
            for j in 0..maze.node_count() as u32 {
                let (a, b) = (gt_core::NodeId(i), gt_core::NodeId(j));
                assert_eq!(table.distance(&maze, a, b), BfsRouter.distance(&maze, a, b));
            }
        }
    }

    #[test]
    fn unreachable_nodes() {
        let mut b = MazeBuilder::new();
        let a = b.add_node(GridPoint::new(1, 1));
        let c = b.add_node(GridPoint::new(5, 5));
        let maze = b.build();
        assert_eq!(BfsRouter.distance(&maze, a, c), None);
        assert_eq!(TableRouter::build(&maze).distance(&maze, a, c), None);
    }

    #[test]
    fn next_direction_respects_allowed_set() {
        let maze = super::helpers::ring().maze;
        let from = maze.node_at(GridPoint::new(4, 2)).unwrap();
        let to = maze.node_at(GridPoint::new(4, 4)).unwrap();
        assert_eq!(
            BfsRouter.next_direction(&maze, from, to, &Direction::ALL),
            Some(Direction::Down)
        );
        // Without Down, both sides of the ring are equally long; Right is
        // listed first and wins the tie.
        assert_eq!(
            BfsRouter.next_direction(&maze, from, to, &[Direction::Right, Direction::Left]),
            Some(Direction::Right)
        );
        assert_eq!(BfsRouter.next_direction(&maze, from, from, &Direction::ALL), None);
        assert_eq!(BfsRouter.next_direction(&maze, from, to, &[Direction::Up]), None);
    }
}
