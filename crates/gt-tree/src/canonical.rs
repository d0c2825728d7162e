//! The built-in default tree.
//!
//! ```text
//! edible? ── yes ─ frightened
//!    no ── chase? ── scatter ─ ghost 0: pills_low? scatter_a / chase_a
//!                 │            ghost 1: scatter_b
//!                 │            ghost 2: scatter_c
//!                 │            ghost 3: near_actor? scatter_d / chase_a
//!                 └─ chase ─── ghost 0: chase_a
//!                              ghost 1: chase_b
//!                              ghost 2: chase_c
//!                              ghost 3: near_actor? chase_a / scatter_d
//! ```
//!
//! Ghost 3 is the distance-sensitive ghost: it closes in during scatter and
//! backs off during chase once the actor is near.

use gt_behavior::Strategy;
use gt_core::Attribute;

use crate::{DecisionTree, Node};

/// The canonical tree in the text format.  [`canonical`] builds the same tree
/// without parsing.
pub const CANONICAL_SOURCE: &str = "\
19 12 0
0 1 2 1 2
1 2 2 3 4
2 -1 -1
3 0 4 5 8 9 10
4 0 4 11 12 13 14
5 6 2 6 7
6 -1 -1
7 -1 -1
8 -1 -1
9 -1 -1
10 5 2 17 18
11 -1 -1
12 -1 -1
13 -1 -1
14 5 2 15 16
15 -1 -1
16 -1 -1
17 -1 -1
18 -1 -1
2 7
6 0
7 4
8 1
9 2
11 4
12 5
13 6
15 4
16 3
17 3
18 4
";

/// The canonical decision tree.
pub fn canonical() -> DecisionTree {
    use Attribute::*;
    use Strategy::*;

    let branch = |attribute: Attribute, children: &[usize]| Node::Internal {
        attribute,
        children: children.to_vec(),
    };
    let leaf = |strategy: Strategy| Node::Leaf { strategy };

    let nodes = vec![
        branch(Edible, &[1, 2]),              // 0
        branch(Chase, &[3, 4]),               // 1
        leaf(Frightened),                     // 2
        branch(Ghost, &[5, 8, 9, 10]),        // 3  scatter
        branch(Ghost, &[11, 12, 13, 14]),     // 4  chase
        branch(PillsLow, &[6, 7]),            // 5
        leaf(ScatterA),                       // 6
        leaf(ChaseA),                         // 7
        leaf(ScatterB),                       // 8
        leaf(ScatterC),                       // 9
        branch(NearActor, &[17, 18]),         // 10
        leaf(ChaseA),                         // 11
        leaf(ChaseB),                         // 12
        leaf(ChaseC),                         // 13
        branch(NearActor, &[15, 16]),         // 14
        leaf(ChaseA),                         // 15
        leaf(ScatterD),                       // 16
        leaf(ScatterD),                       // 17
        leaf(ChaseA),                         // 18
    ];
    DecisionTree { nodes, root: 0 }
}
