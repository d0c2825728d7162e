//! Unit tests for gt-behavior.

#[cfg(test)]
mod helpers {
    use gt_core::{Direction, GridPoint, NodeId};
    use gt_maze::{Maze, MazeLayout, Router, parse_ascii};

    use crate::{ActorState, GhostState, Snapshot};

    /// An open 5×5 room with a power pill in each corner.  Bounds are 6×6.
    pub const ROOM: &str = "\
#######
#o...o#
#.....#
#.....#
#.....#
#o...o#
#######
";

    /// A three-node dead-end corridor along y = 2.
    pub const CORRIDOR: &str = "\
#####
#...#
#####
";

    pub fn layout(text: &str) -> MazeLayout {
        parse_ascii(text).unwrap()
    }

    pub fn at(maze: &Maze, x: i32, y: i32) -> NodeId {
        maze.node_at(GridPoint::new(x, y)).unwrap()
    }

    pub fn ghost(node: NodeId, heading: Direction) -> GhostState {
        GhostState { node, heading, edible: false }
    }

    /// A snapshot with the anchors taken from the layout's power pills.
    pub fn snapshot<'a>(
        layout: &'a MazeLayout,
        router: &'a dyn Router,
        ghosts: Vec<GhostState>,
        actor:  ActorState,
    ) -> Snapshot<'a> {
        Snapshot::new(
            &layout.maze,
            router,
            ghosts,
            actor,
            layout.power_pills.clone(),
            layout.pills.len() as u32,
        )
    }
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod snapshot {
    use gt_core::{AgentId, Direction};
    use gt_maze::BfsRouter;

    use super::helpers::*;
    use crate::{ActorState, GameView};

    #[test]
    fn legal_directions_exclude_reversal() {
        let room = layout(ROOM);
        let centre = at(&room.maze, 4, 4);
        let actor = ActorState { node: centre, heading: Direction::Left };
        let view = snapshot(&room, &BfsRouter, vec![ghost(centre, Direction::Up)], actor);
        let legal = view.legal_directions(AgentId(0));
        assert_eq!(legal, vec![Direction::Up, Direction::Right, Direction::Left]);
    }

    #[test]
    fn dead_end_allows_reversal() {
        let corr = layout(CORRIDOR);
        let end = at(&corr.maze, 4, 2);
        let actor = ActorState { node: end, heading: Direction::Left };
        let view = snapshot(&corr, &BfsRouter, vec![ghost(end, Direction::Right)], actor);
        assert_eq!(view.legal_directions(AgentId(0)), vec![Direction::Left]);
    }

    #[test]
    fn only_junctions_require_action() {
        let room = layout(ROOM);
        let corner = at(&room.maze, 2, 2);
        let edge = at(&room.maze, 4, 2);
        let actor = ActorState { node: corner, heading: Direction::Left };
        let view = snapshot(
            &room,
            &BfsRouter,
            vec![ghost(corner, Direction::Up), ghost(edge, Direction::Left)],
            actor,
        );
        assert!(!view.requires_action(AgentId(0)));
        assert!(view.requires_action(AgentId(1)));
    }

    #[test]
    fn remaining_and_anchors_come_from_layout() {
        let room = layout(ROOM);
        let n = at(&room.maze, 4, 4);
        let actor = ActorState { node: n, heading: Direction::Left };
        let view = snapshot(&room, &BfsRouter, vec![ghost(n, Direction::Up)], actor);
        assert_eq!(view.anchors().len(), 4);
        assert_eq!(view.remaining_collectibles(), 21);
        assert_eq!(view.path_distance(at(&room.maze, 2, 2), at(&room.maze, 6, 6)), Some(8));
    }
}

// ── Geometry ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod geometry {
    use gt_core::{Bounds, GridPoint};

    use crate::geometry::{clamp_along_line, reflect};

    #[test]
    fn reflect_doubles_displacement() {
        let r = GridPoint::new(5, 5);
        let i = GridPoint::new(7, 4);
        assert_eq!(reflect(i, r), GridPoint::new(9, 3));
        assert_eq!(reflect(r, r), r);
    }

    #[test]
    fn overshoot_right_slides_along_line() {
        let b = Bounds::new(10, 10);
        let r = GridPoint::new(5, 5);
        let i = GridPoint::new(9, 7);
        let raw = reflect(i, r);
        assert_eq!(raw, GridPoint::new(13, 9));
        assert_eq!(clamp_along_line(raw, i - r, b), GridPoint::new(10, 7));
    }

    #[test]
    fn overshoot_on_both_axes() {
        let b = Bounds::new(10, 10);
        let r = GridPoint::new(5, 5);
        let i = GridPoint::new(2, 9);
        let raw = reflect(i, r);
        assert_eq!(raw, GridPoint::new(-1, 13));
        assert_eq!(clamp_along_line(raw, i - r, b), GridPoint::new(1, 10));
    }

    #[test]
    fn in_bounds_target_is_untouched() {
        let b = Bounds::new(10, 10);
        let p = GridPoint::new(4, 6);
        assert_eq!(clamp_along_line(p, GridPoint::new(3, -2), b), p);
    }

    #[test]
    fn result_always_in_bounds() {
        let b = Bounds::new(9, 7);
        for rx in 1..=9 {
            for ry in 1..=7 {
                for (ix, iy) in [(1, 1), (9, 7), (1, 7), (9, 1), (5, 4)] {
                    let r = GridPoint::new(rx, ry);
                    let i = GridPoint::new(ix, iy);
                    let out = clamp_along_line(reflect(i, r), i - r, b);
                    assert!(b.contains(out), "{out} escaped for r={r} i={i}");
                }
            }
        }
    }

    #[test]
    fn vertical_line_does_not_shift_x() {
        let b = Bounds::new(10, 10);
        let r = GridPoint::new(4, 5);
        let i = GridPoint::new(4, 9);
        assert_eq!(clamp_along_line(reflect(i, r), i - r, b), GridPoint::new(4, 10));
    }
}

// ── Searches ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod search {
    use rustc_hash::FxHashSet;

    use gt_core::{Direction, GridPoint, NodeId};
    use gt_maze::{BfsRouter, MazeBuilder};

    use super::helpers::*;
    use crate::search::{
        ambush_candidates, nearest_node, nodes_at_depth, nodes_within, project_forward,
    };
    use crate::{ActorState, Snapshot};

    #[test]
    fn projection_stops_at_wall() {
        let corr = layout(CORRIDOR);
        let start = at(&corr.maze, 2, 2);
        let actor = ActorState { node: start, heading: Direction::Right };
        let view = snapshot(&corr, &BfsRouter, vec![ghost(start, Direction::Up)], actor);

        let p = project_forward(&view, start, Direction::Right, 5);
        assert_eq!(p.reached, at(&corr.maze, 4, 2));
        assert_eq!(p.path, vec![at(&corr.maze, 3, 2), at(&corr.maze, 4, 2)]);
        assert_eq!(p.remaining, 3);
    }

    #[test]
    fn projection_completes_in_open_room() {
        let room = layout(ROOM);
        let start = at(&room.maze, 2, 4);
        let actor = ActorState { node: start, heading: Direction::Right };
        let view = snapshot(&room, &BfsRouter, vec![ghost(start, Direction::Up)], actor);

        let p = project_forward(&view, start, Direction::Right, 2);
        assert_eq!(p.reached, at(&room.maze, 4, 4));
        assert_eq!(p.remaining, 0);
    }

    #[test]
    fn ambush_straight_ahead_is_single_candidate() {
        let room = layout(ROOM);
        let start = at(&room.maze, 2, 4);
        let actor = ActorState { node: start, heading: Direction::Right };
        let view = snapshot(&room, &BfsRouter, vec![ghost(start, Direction::Up)], actor);

        let c = ambush_candidates(&view, start, Direction::Right, 2);
        assert_eq!(c, vec![at(&room.maze, 4, 4)]);
    }

    #[test]
    fn ambush_spends_leftover_depth_around_corner() {
        let room = layout(ROOM);
        let start = at(&room.maze, 5, 4);
        let actor = ActorState { node: start, heading: Direction::Right };
        let view = snapshot(&room, &BfsRouter, vec![ghost(start, Direction::Up)], actor);

        let mut got = ambush_candidates(&view, start, Direction::Right, 3);
        let mut want: Vec<NodeId> = [(6, 2), (5, 3), (6, 6), (5, 5), (4, 4)]
            .into_iter()
            .map(|(x, y)| at(&room.maze, x, y))
            .collect();
        got.sort();
        want.sort();
        assert_eq!(got, want);
    }

    #[test]
    fn ambush_dead_end_falls_back_to_deepest() {
        let corr = layout(CORRIDOR);
        let start = at(&corr.maze, 2, 2);
        let actor = ActorState { node: start, heading: Direction::Right };
        let view = snapshot(&corr, &BfsRouter, vec![ghost(start, Direction::Up)], actor);

        let c = ambush_candidates(&view, start, Direction::Right, 5);
        assert_eq!(c, vec![at(&corr.maze, 4, 2)]);
    }

    #[test]
    fn ambush_facing_wall_searches_from_actor() {
        let corr = layout(CORRIDOR);
        let end = at(&corr.maze, 4, 2);
        let actor = ActorState { node: end, heading: Direction::Right };
        let view = snapshot(&corr, &BfsRouter, vec![ghost(end, Direction::Up)], actor);

        let c = ambush_candidates(&view, end, Direction::Right, 2);
        assert_eq!(c, vec![at(&corr.maze, 2, 2)]);
    }

    #[test]
    fn depth_search_respects_visited() {
        let corr = layout(CORRIDOR);
        let mid = at(&corr.maze, 3, 2);
        let actor = ActorState { node: mid, heading: Direction::Right };
        let view = snapshot(&corr, &BfsRouter, vec![ghost(mid, Direction::Up)], actor);

        let mut visited: FxHashSet<NodeId> = FxHashSet::default();
        visited.insert(at(&corr.maze, 2, 2));
        let s = nodes_at_depth(&view, mid, 1, &mut visited);
        assert_eq!(s.found, vec![at(&corr.maze, 4, 2)]);
    }

    #[test]
    fn nearest_node_prefers_positive_x() {
        let ring = layout(
            "#######\n#o...o#\n#.#.#.#\n#o...o#\n#######\n",
        );
        let n = at(&ring.maze, 2, 2);
        let actor = ActorState { node: n, heading: Direction::Right };
        let view = snapshot(&ring, &BfsRouter, vec![ghost(n, Direction::Up)], actor);

        // (3,3) is a wall; +x is tried first.
        assert_eq!(nearest_node(&view, GridPoint::new(3, 3)), Some(at(&ring.maze, 4, 3)));
        // A node coordinate maps to itself.
        assert_eq!(nearest_node(&view, GridPoint::new(2, 3)), Some(at(&ring.maze, 2, 3)));
    }

    #[test]
    fn nearest_node_none_when_bounds_hold_no_node() {
        let mut b = MazeBuilder::new();
        let only = b.add_node(GridPoint::new(10, 10));
        let maze = b.with_bounds(gt_core::Bounds::new(3, 3)).build();
        let view = Snapshot::new(
            &maze,
            &BfsRouter,
            vec![ghost(only, Direction::Up)],
            ActorState { node: only, heading: Direction::Up },
            Vec::new(),
            0,
        );
        assert_eq!(nearest_node(&view, GridPoint::new(2, 2)), None);
    }

    #[test]
    fn nodes_within_radius() {
        let room = layout(ROOM);
        let centre = at(&room.maze, 4, 4);
        let actor = ActorState { node: centre, heading: Direction::Right };
        let view = snapshot(&room, &BfsRouter, vec![ghost(centre, Direction::Up)], actor);

        assert_eq!(nodes_within(&view, centre, 0), vec![centre]);
        assert_eq!(nodes_within(&view, centre, 1).len(), 5);
        // Diamond of radius 2 inside a 5×5 room.
        assert_eq!(nodes_within(&view, centre, 2).len(), 13);
    }
}

// ── Scatter ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scatter {
    use gt_core::{Direction, GridPoint};
    use gt_maze::BfsRouter;

    use super::helpers::*;
    use crate::scatter::scatter_target;
    use crate::{ActorState, Corner, Snapshot};

    #[test]
    fn each_corner_picks_its_anchor() {
        let room = layout(ROOM);
        let n = at(&room.maze, 4, 4);
        let actor = ActorState { node: n, heading: Direction::Right };
        let view = snapshot(&room, &BfsRouter, vec![ghost(n, Direction::Up)], actor);

        assert_eq!(scatter_target(&view, Corner::TopRight), Some(at(&room.maze, 6, 2)));
        assert_eq!(scatter_target(&view, Corner::TopLeft), Some(at(&room.maze, 2, 2)));
        assert_eq!(scatter_target(&view, Corner::BottomLeft), Some(at(&room.maze, 2, 6)));
        assert_eq!(scatter_target(&view, Corner::BottomRight), Some(at(&room.maze, 6, 6)));
    }

    #[test]
    fn either_axis_is_enough_to_replace() {
        // (2,5) is further up than (6,6) but further left; TopRight still
        // takes it.
        assert!(Corner::TopRight.replaces(GridPoint::new(2, 5), GridPoint::new(6, 6)));
        assert!(!Corner::TopRight.replaces(GridPoint::new(2, 6), GridPoint::new(6, 6)));
        assert!(Corner::BottomLeft.replaces(GridPoint::new(9, 9), GridPoint::new(1, 1)));
    }

    #[test]
    fn no_anchors_no_target() {
        let room = layout(ROOM);
        let n = at(&room.maze, 4, 4);
        let view = Snapshot::new(
            &room.maze,
            &BfsRouter,
            vec![ghost(n, Direction::Up)],
            ActorState { node: n, heading: Direction::Right },
            Vec::new(),
            0,
        );
        assert_eq!(scatter_target(&view, Corner::TopLeft), None);
    }
}

// ── Strategies ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod strategies {
    use gt_core::{AgentId, AgentRng, Direction, GridPoint, NodeId};
    use gt_maze::{BfsRouter, MazeBuilder};

    use super::helpers::*;
    use crate::chase;
    use crate::{
        ActorState, Annotation, Annotations, BehaviorError, Decision, Snapshot, Strategy,
        StrategyContext, StrategyParams,
    };

    fn params(ambush: u32, interest: u32) -> StrategyParams {
        StrategyParams { ambush_steps: ambush, interest_steps: interest }
    }

    #[test]
    fn catalog_indices() {
        for (i, s) in Strategy::ALL.iter().enumerate() {
            assert_eq!(s.index(), i);
            assert_eq!(Strategy::from_index(i), Some(*s));
        }
        assert_eq!(Strategy::from_index(8), None);
        assert_eq!(Strategy::Frightened.to_string(), "frightened");
    }

    #[test]
    fn every_strategy_idles_mid_corridor() {
        let room = layout(ROOM);
        let corner = at(&room.maze, 2, 2);
        let actor = ActorState { node: at(&room.maze, 4, 4), heading: Direction::Right };
        let view = snapshot(&room, &BfsRouter, vec![ghost(corner, Direction::Up)], actor);
        let ctx = StrategyContext::new(&view, params(12, 6), AgentId(0));
        let mut rng = AgentRng::new(1, AgentId(0));
        let mut notes = Annotations::enabled();

        for s in Strategy::ALL {
            let d = s.run(AgentId(0), &ctx, &mut rng, &mut notes).unwrap();
            assert_eq!(d, Decision::NoAction, "{s}");
        }
        assert!(notes.is_empty());
    }

    #[test]
    fn scatter_steers_toward_corner() {
        let room = layout(ROOM);
        let centre = at(&room.maze, 4, 4);
        let actor = ActorState { node: at(&room.maze, 2, 6), heading: Direction::Right };
        let view = snapshot(&room, &BfsRouter, vec![ghost(centre, Direction::Up)], actor);
        let ctx = StrategyContext::new(&view, params(12, 6), AgentId(0));
        let mut rng = AgentRng::new(1, AgentId(0));

        let d = Strategy::ScatterA
            .run(AgentId(0), &ctx, &mut rng, &mut Annotations::disabled())
            .unwrap();
        assert_eq!(d, Decision::Move { direction: Direction::Up, target: at(&room.maze, 6, 2) });
    }

    #[test]
    fn direct_chase_targets_actor() {
        let room = layout(ROOM);
        let centre = at(&room.maze, 4, 4);
        let target = at(&room.maze, 6, 6);
        let actor = ActorState { node: target, heading: Direction::Left };
        let view = snapshot(&room, &BfsRouter, vec![ghost(centre, Direction::Right)], actor);
        let ctx = StrategyContext::new(&view, params(12, 6), AgentId(0));
        let mut rng = AgentRng::new(1, AgentId(0));

        let d = Strategy::ChaseA
            .run(AgentId(0), &ctx, &mut rng, &mut Annotations::disabled())
            .unwrap();
        assert_eq!(d, Decision::Move { direction: Direction::Right, target });
    }

    #[test]
    fn ambush_chase_aims_ahead_of_actor() {
        let room = layout(ROOM);
        let g = at(&room.maze, 4, 2);
        let actor = ActorState { node: at(&room.maze, 2, 4), heading: Direction::Right };
        let view = snapshot(&room, &BfsRouter, vec![ghost(g, Direction::Down)], actor);
        let ctx = StrategyContext::new(&view, params(2, 6), AgentId(0));
        let mut rng = AgentRng::new(1, AgentId(0));
        let mut notes = Annotations::enabled();

        let d = Strategy::ChaseB.run(AgentId(0), &ctx, &mut rng, &mut notes).unwrap();
        assert_eq!(
            d,
            Decision::Move { direction: Direction::Down, target: at(&room.maze, 4, 4) }
        );
        assert_eq!(notes.len(), 2);
    }

    #[test]
    fn ambush_chase_picks_among_candidates() {
        let room = layout(ROOM);
        let actor = ActorState { node: at(&room.maze, 5, 4), heading: Direction::Right };
        let g = at(&room.maze, 3, 3);
        let view = snapshot(&room, &BfsRouter, vec![ghost(g, Direction::Down)], actor);
        let ctx = StrategyContext::new(&view, params(3, 6), AgentId(0));
        let candidates = crate::search::ambush_candidates(&view, actor.node, Direction::Right, 3);
        assert_eq!(candidates.len(), 5);

        let mut seen: Vec<NodeId> = Vec::new();
        for seed in 0..32 {
            let mut rng = AgentRng::new(seed, AgentId(0));
            let d = Strategy::ChaseB
                .run(AgentId(0), &ctx, &mut rng, &mut Annotations::disabled())
                .unwrap();
            let target = d.target().expect("ambush moves");
            assert!(candidates.contains(&target), "seed {seed}: {target:?}");
            if !seen.contains(&target) {
                seen.push(target);
            }
        }
        assert!(seen.len() >= 2, "only {seen:?} chosen");
    }

    #[test]
    fn only_scatter_variants_have_corners() {
        for s in Strategy::ALL {
            assert_eq!(s.corner().is_some(), s.as_str().starts_with("scatter"), "{s}");
        }
        assert_eq!(Strategy::ScatterD.corner(), Some(crate::Corner::BottomRight));
    }

    #[test]
    fn projection_reflects_through_lead() {
        let room = layout(ROOM);
        let lead = at(&room.maze, 3, 4);
        let g = at(&room.maze, 4, 2);
        let actor = ActorState { node: at(&room.maze, 4, 4), heading: Direction::Right };
        let view = snapshot(
            &room,
            &BfsRouter,
            vec![ghost(lead, Direction::Up), ghost(g, Direction::Down)],
            actor,
        );
        let ctx = StrategyContext::new(&view, params(12, 2), AgentId(0));
        let mut rng = AgentRng::new(1, AgentId(1));
        let mut notes = Annotations::enabled();

        // Interest (6,4), reference (3,4): reflection (9,4) clamps to (6,4).
        let d = Strategy::ChaseC.run(AgentId(1), &ctx, &mut rng, &mut notes).unwrap();
        assert_eq!(
            d,
            Decision::Move { direction: Direction::Right, target: at(&room.maze, 6, 4) }
        );
        assert_eq!(notes.len(), 5);
        assert!(notes.items().contains(&Annotation::Highlight {
            node: lead,
            tag:  crate::Tag::Ghost(AgentId(1)),
        }));
    }

    #[test]
    fn projection_without_reachable_node_is_an_error() {
        let mut b = MazeBuilder::new();
        let only = b.add_node(GridPoint::new(10, 10));
        let maze = b.with_bounds(gt_core::Bounds::new(3, 3)).build();
        let view = Snapshot::new(
            &maze,
            &BfsRouter,
            vec![ghost(only, Direction::Up)],
            ActorState { node: only, heading: Direction::Right },
            Vec::new(),
            0,
        );
        let ctx = StrategyContext::new(&view, params(12, 6), AgentId(0));
        let err = chase::projection(AgentId(0), &ctx, &mut Annotations::disabled()).unwrap_err();
        assert!(matches!(err, BehaviorError::UnreachableTarget { .. }));
    }

    #[test]
    fn frightened_picks_a_legal_neighbour() {
        let room = layout(ROOM);
        let centre = at(&room.maze, 4, 4);
        let actor = ActorState { node: at(&room.maze, 2, 2), heading: Direction::Right };
        let view = snapshot(&room, &BfsRouter, vec![ghost(centre, Direction::Up)], actor);
        let ctx = StrategyContext::new(&view, params(12, 6), AgentId(0));

        for seed in 0..32 {
            let mut rng = AgentRng::new(seed, AgentId(0));
            let d = Strategy::Frightened
                .run(AgentId(0), &ctx, &mut rng, &mut Annotations::disabled())
                .unwrap();
            let Decision::Move { direction, target } = d else {
                panic!("frightened ghost at a junction must move");
            };
            assert_ne!(direction, Direction::Down);
            assert_eq!(room.maze.neighbor(centre, direction), Some(target));
        }
    }

    #[test]
    fn frightened_is_deterministic_per_seed() {
        let room = layout(ROOM);
        let centre = at(&room.maze, 4, 4);
        let actor = ActorState { node: at(&room.maze, 2, 2), heading: Direction::Right };
        let view = snapshot(&room, &BfsRouter, vec![ghost(centre, Direction::Up)], actor);
        let ctx = StrategyContext::new(&view, params(12, 6), AgentId(0));

        let run = |seed| {
            let mut rng = AgentRng::new(seed, AgentId(0));
            (0..8)
                .map(|_| {
                    Strategy::Frightened
                        .run(AgentId(0), &ctx, &mut rng, &mut Annotations::disabled())
                        .unwrap()
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(run(7), run(7));
    }

    #[test]
    fn context_pins_lead_node() {
        let room = layout(ROOM);
        let lead: NodeId = at(&room.maze, 5, 5);
        let actor = ActorState { node: at(&room.maze, 2, 2), heading: Direction::Right };
        let view = snapshot(&room, &BfsRouter, vec![ghost(lead, Direction::Up)], actor);
        let ctx = StrategyContext::new(&view, StrategyParams::default(), AgentId(0));
        assert_eq!(ctx.lead_node, lead);
    }

    #[test]
    fn decision_accessors() {
        let d = Decision::Move { direction: Direction::Left, target: NodeId(3) };
        assert_eq!(d.direction(), Some(Direction::Left));
        assert_eq!(d.target(), Some(NodeId(3)));
        assert!(d.is_move());
        assert_eq!(Decision::NoAction.direction(), None);
        assert_eq!(Decision::default(), Decision::NoAction);
    }
}
