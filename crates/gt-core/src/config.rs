//! Engine configuration.
//!
//! Typically built with `EngineConfig::default()` (the classic constants) or
//! loaded from a JSON file by the host application and passed to the engine
//! builder.  With the `serde` feature every field is optional in the file;
//! missing fields keep their default.

use std::path::PathBuf;

use crate::{AgentId, GtError, GtResult};

// ── DebugConfig ───────────────────────────────────────────────────────────────

/// Which ghosts emit debug annotations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DebugConfig {
    /// Master switch.  When `false` no annotation is ever allocated.
    pub enabled: bool,
    /// Per-ghost switches, indexed by `AgentId`.  Missing entries are off.
    pub ghosts: Vec<bool>,
}

impl DebugConfig {
    /// Annotations on for every ghost.
    pub fn all(ghost_count: usize) -> Self {
        Self { enabled: true, ghosts: vec![true; ghost_count] }
    }

    #[inline]
    pub fn is_on(&self, ghost: AgentId) -> bool {
        self.enabled && self.ghosts.get(ghost.index()).copied().unwrap_or(false)
    }
}

// ── EngineConfig ──────────────────────────────────────────────────────────────

/// Top-level engine configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Number of ghosts.  Default: 4.
    pub ghost_count: u32,

    /// Approximate width of one maze tile in graph nodes.  Default: 3.
    pub tile_width: u32,

    /// Engine ticks per second of game time.  Default: 20.
    pub ticks_per_second: u32,

    /// Length of the scatter phase, seconds.  Default: 7.
    pub scatter_secs: u32,

    /// Length of the chase phase, seconds.  Default: 25.
    pub chase_secs: u32,

    /// The actor is "near" a ghost within this many tiles of path distance.
    /// Default: 8.
    pub critical_distance_tiles: u32,

    /// Collectible count at or below which the scarcity flag latches.
    /// Default: 30.
    pub critical_pill_count: u32,

    /// How many tiles ahead of the actor the ambush strategy aims.  Default: 4.
    pub ambush_tiles: u32,

    /// How many tiles ahead of the actor the projection strategy's interest
    /// point lies.  Default: 2.
    pub interest_tiles: u32,

    /// Ghost whose position anchors the projection strategy.  Default: 0.
    pub lead_ghost: AgentId,

    /// Distance-sensitive ghost whose critical zone is highlighted when its
    /// debug flag is on.  Default: 3.
    pub watch_ghost: AgentId,

    /// Master RNG seed.  The same seed always produces identical decisions
    /// for identical host input.
    pub seed: u64,

    /// Decision-tree file.  `None` uses the built-in canonical tree.
    pub tree_path: Option<PathBuf>,

    pub debug: DebugConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ghost_count:             4,
            tile_width:              3,
            ticks_per_second:        20,
            scatter_secs:            7,
            chase_secs:              25,
            critical_distance_tiles: 8,
            critical_pill_count:     30,
            ambush_tiles:            4,
            interest_tiles:          2,
            lead_ghost:              AgentId(0),
            watch_ghost:             AgentId(3),
            seed:                    0,
            tree_path:               None,
            debug:                   DebugConfig::default(),
        }
    }
}

impl EngineConfig {
    // Derived quantities saturate; `validate` rejects any that would overflow.

    /// Scatter phase length in ticks.
    #[inline]
    pub fn scatter_ticks(&self) -> u32 {
        self.scatter_secs.saturating_mul(self.ticks_per_second)
    }

    /// Chase phase length in ticks.
    #[inline]
    pub fn chase_ticks(&self) -> u32 {
        self.chase_secs.saturating_mul(self.ticks_per_second)
    }

    /// Critical path distance in graph nodes.
    #[inline]
    pub fn critical_distance(&self) -> u32 {
        self.critical_distance_tiles.saturating_mul(self.tile_width)
    }

    /// Ambush projection length in graph nodes.
    #[inline]
    pub fn ambush_steps(&self) -> u32 {
        self.ambush_tiles.saturating_mul(self.tile_width)
    }

    /// Interest-point projection length in graph nodes.
    #[inline]
    pub fn interest_steps(&self) -> u32 {
        self.interest_tiles.saturating_mul(self.tile_width)
    }

    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> GtResult<()> {
        if self.ghost_count == 0 || self.ghost_count > u8::MAX as u32 {
            return Err(GtError::Config(format!(
                "ghost_count must be in 1..=255, got {}",
                self.ghost_count
            )));
        }
        if self.tile_width == 0 {
            return Err(GtError::Config("tile_width must be positive".into()));
        }
        let products = [
            ("scatter_secs * ticks_per_second", self.scatter_secs, self.ticks_per_second),
            ("chase_secs * ticks_per_second", self.chase_secs, self.ticks_per_second),
            ("critical_distance_tiles * tile_width", self.critical_distance_tiles, self.tile_width),
            ("ambush_tiles * tile_width", self.ambush_tiles, self.tile_width),
            ("interest_tiles * tile_width", self.interest_tiles, self.tile_width),
        ];
        for (what, a, b) in products {
            if a.checked_mul(b).is_none() {
                return Err(GtError::Config(format!("{what} overflows ({a} * {b})")));
            }
        }
        if self.scatter_ticks() == 0 || self.chase_ticks() == 0 {
            return Err(GtError::Config(format!(
                "phase durations must be positive (scatter {} ticks, chase {} ticks)",
                self.scatter_ticks(),
                self.chase_ticks()
            )));
        }
        for (what, ghost) in [("lead_ghost", self.lead_ghost), ("watch_ghost", self.watch_ghost)] {
            if ghost.0 as u32 >= self.ghost_count {
                return Err(GtError::Config(format!(
                    "{what} {ghost} out of range for {} ghosts",
                    self.ghost_count
                )));
            }
        }
        Ok(())
    }
}
