//! The built-in level and its loader.

use std::path::Path;

use anyhow::{Context, Result, ensure};

use gt_maze::{MazeLayout, load_ascii, parse_ascii};

/// 21×19 level with four power-pill corners, two wrap-around tunnels and a
/// four-ghost pen.
pub const LEVEL: &str = "\
; arcade level 1
#####################
#o........#........o#
#.###.###.#.###.###.#
#...................#
#.###.#.#####.#.###.#
#.....#...#...#.....#
#####.###-#-###.#####
----#.#-------#.#----
#####.#-##-##-#.#####
-----.--#GGGG--.-----
#####.#-#####-#.#####
#.........P.........#
#.###.###.#.###.###.#
#o..#...........#..o#
###.#.#.#####.#.#.###
#.....#...#...#.....#
#.#######.#.#######.#
#...................#
#####################
";

/// Load the level at `path`, or the built-in one.
pub fn load(path: Option<&Path>) -> Result<MazeLayout> {
    let layout = match path {
        Some(p) => load_ascii(p).with_context(|| format!("loading maze {}", p.display()))?,
        None => parse_ascii(LEVEL).context("parsing built-in level")?,
    };
    ensure!(!layout.ghost_starts.is_empty(), "maze has no ghost starts ('G')");
    Ok(layout)
}
