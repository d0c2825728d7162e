//! ASCII maze loader.
//!
//! # Format
//!
//! One character per grid cell; line `r` (0-based) holds y = r + 1 and
//! column `c` holds x = c + 1.
//!
//! | Char  | Meaning                                          |
//! |-------|--------------------------------------------------|
//! | `#`   | wall                                             |
//! | ` `   | outside the maze (treated as wall)               |
//! | `.`   | node with a collectible pill                     |
//! | `o`   | node with a power pill (an anchor point)         |
//! | `-`   | empty node                                       |
//! | `P`   | empty node; the actor's start                    |
//! | `G`   | empty node; a ghost start (in reading order)     |
//!
//! Lines starting with `;` are comments.  Nodes one cell apart are linked.
//! A row whose first and last cells are both open is linked end-to-end as a
//! wrap-around tunnel.
//!
//! ```text
//! #######
//! #o...o#
//! #.#-#.#
//! #o.P.o#
//! #######
//! ```

use std::path::Path;

use gt_core::{Direction, GridPoint, NodeId};

use crate::maze::{Maze, MazeBuilder};
use crate::{MazeError, MazeResult};

/// A parsed maze plus the host-side markers found in it.
#[derive(Debug)]
pub struct MazeLayout {
    pub maze:         Maze,
    /// Nodes that start with a regular pill.
    pub pills:        Vec<NodeId>,
    /// Nodes that start with a power pill.  Power pills also count as
    /// collectibles.
    pub power_pills:  Vec<NodeId>,
    pub actor_start:  Option<NodeId>,
    pub ghost_starts: Vec<NodeId>,
}

/// Load a maze from an ASCII file.
pub fn load_ascii(path: &Path) -> MazeResult<MazeLayout> {
    let text = std::fs::read_to_string(path)?;
    parse_ascii(&text)
}

/// Parse a maze from ASCII text.
pub fn parse_ascii(text: &str) -> MazeResult<MazeLayout> {
    let mut b = MazeBuilder::new();
    let mut pills = Vec::new();
    let mut power_pills = Vec::new();
    let mut actor_start = None;
    let mut ghost_starts = Vec::new();
    // (first open node, last open node, last column) per row, for tunnels.
    let mut row_ends: Vec<(Option<(i32, NodeId)>, Option<(i32, NodeId)>, i32)> = Vec::new();

    let mut y = 0;
    for (line_no, line) in text.lines().enumerate() {
        if line.starts_with(';') {
            continue;
        }
        y += 1;
        let mut first = None;
        let mut last = None;
        let mut width = 0;

        for (col, ch) in line.chars().enumerate() {
            let x = col as i32 + 1;
            width = x;
            let node = match ch {
                '#' | ' ' => None,
                '.' | 'o' | '-' | 'P' | 'G' => Some(b.add_node(GridPoint::new(x, y))),
                other => {
                    return Err(MazeError::Parse {
                        line:   line_no + 1,
                        reason: format!("unexpected character {other:?} at column {x}"),
                    });
                }
            };
            let Some(node) = node else { continue };

            match ch {
                '.' => pills.push(node),
                'o' => power_pills.push(node),
                'P' => {
                    if actor_start.replace(node).is_some() {
                        return Err(MazeError::Parse {
                            line:   line_no + 1,
                            reason: "more than one actor start 'P'".into(),
                        });
                    }
                }
                'G' => ghost_starts.push(node),
                _ => {}
            }
            if first.is_none() {
                first = Some((x, node));
            }
            last = Some((x, node));
        }
        row_ends.push((first, last, width));
    }

    if b.node_count() == 0 {
        return Err(MazeError::Parse { line: 0, reason: "maze has no open cells".into() });
    }

    b.connect_adjacent();

    for (first, last, width) in row_ends {
        if let (Some((1, left)), Some((x, right))) = (first, last) {
            if x == width && x > 2 {
                b.link(right, Direction::Right, left);
            }
        }
    }

    let maze = b.build();
    tracing::debug!(
        nodes = maze.node_count(),
        pills = pills.len(),
        power_pills = power_pills.len(),
        ghosts = ghost_starts.len(),
        "parsed ascii maze"
    );

    Ok(MazeLayout { maze, pills, power_pills, actor_start, ghost_starts })
}
