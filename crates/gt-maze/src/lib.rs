//! `gt-maze` — maze node graph, loading, and routing.
//!
//! This is the reference host graph the engine is exercised against.  The
//! decision engine itself only sees a maze through the `GameView` trait in
//! `gt-behavior`; any host graph that can answer those queries works.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`maze`]    | `Maze` (neighbour table + coordinate index), `MazeBuilder`  |
//! | [`router`]  | `Router` trait, `BfsRouter`, `TableRouter`                  |
//! | [`loader`]  | `parse_ascii`, `load_ascii`, `MazeLayout`                   |
//! | [`error`]   | `MazeError`, `MazeResult<T>`                                |

pub mod error;
pub mod loader;
pub mod maze;
pub mod router;

#[cfg(test)]
mod tests;

pub use error::{MazeError, MazeResult};
pub use loader::{MazeLayout, load_ascii, parse_ascii};
pub use maze::{Maze, MazeBuilder};
pub use router::{BfsRouter, Router, TableRouter};
