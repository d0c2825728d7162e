//! arcade — headless maze-chase host for the ghost decision engine.
//!
//! Plays one level: a wandering actor clears pills while the ghosts steer by
//! the decision engine.  Every ghost decision is traced to CSV under
//! `output/arcade`.
//!
//! ```text
//! arcade [config.json] [maze.txt]
//! ```
//!
//! `RUST_LOG=debug` prints the decision tree and build details; `trace`
//! logs every decision.

mod level;
mod world;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, ensure};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use gt_behavior::{Decision, Strategy};
use gt_core::{AgentId, AttributeVector, EngineConfig, Tick};
use gt_engine::{EngineBuilder, EngineObserver};
use gt_maze::TableRouter;
use gt_output::{CsvWriter, TraceObserver, TraceWriter};

use world::{LIVES, World};

// ── Constants ─────────────────────────────────────────────────────────────────

const MAX_TICKS:   u64  = 6_000; // 5 minutes at 20 ticks/s
const FRIGHT_SECS: u32  = 6;
const OUTPUT_DIR:  &str = "output/arcade";

// ── Observer wrapper to tally strategies ─────────────────────────────────────

struct TallyObserver<W: TraceWriter> {
    inner: TraceObserver<W>,
    picks: [u64; Strategy::COUNT],
    moves: u64,
}

impl<W: TraceWriter> TallyObserver<W> {
    fn new(inner: TraceObserver<W>) -> Self {
        Self { inner, picks: [0; Strategy::COUNT], moves: 0 }
    }
}

impl<W: TraceWriter> EngineObserver for TallyObserver<W> {
    fn on_decision(
        &mut self,
        tick:       Tick,
        ghost:      AgentId,
        attributes: &AttributeVector,
        strategy:   Strategy,
        decision:   Decision,
    ) {
        self.picks[strategy.index()] += 1;
        self.inner.on_decision(tick, ghost, attributes, strategy, decision);
    }

    fn on_tick_end(&mut self, tick: Tick, moves: usize) {
        self.moves += moves as u64;
        self.inner.on_tick_end(tick, moves);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let config_path = args.next();
    let maze_path = args.next();

    // 1. Configuration.
    let config = load_config(config_path.as_deref())?;

    // 2. Level and routing table.
    let t0 = Instant::now();
    let layout = level::load(maze_path.as_deref())?;
    ensure!(
        layout.ghost_starts.len() == config.ghost_count as usize,
        "maze has {} ghost starts but ghost_count is {}",
        layout.ghost_starts.len(),
        config.ghost_count,
    );
    let router = TableRouter::build(&layout.maze);
    info!(
        nodes = layout.maze.node_count(),
        pills = layout.pills.len(),
        power_pills = layout.power_pills.len(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "level ready"
    );

    // 3. Engine.
    let mut engine = EngineBuilder::new(config.clone()).build()?;
    info!(nodes = engine.tree().len(), leaves = engine.tree().leaf_count(), "decision tree ready");

    // 4. Output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = TallyObserver::new(TraceObserver::new(writer));

    // 5. Play.
    let fright_ticks = FRIGHT_SECS * config.ticks_per_second;
    let mut world = World::new(layout, fright_ticks, config.seed)?;

    let t0 = Instant::now();
    while engine.current_tick().0 < MAX_TICKS && !world.is_over() {
        let decisions = engine.tick_observed(&world.snapshot(&router), &mut obs)?;
        world.step(&decisions);
    }
    let elapsed = t0.elapsed();

    obs.inner.finish();
    if let Some(e) = obs.inner.take_error() {
        warn!("trace output incomplete: {e}");
    }

    // 6. Summary.
    let ticks = engine.current_tick().0;
    let outcome = if world.remaining() == 0 {
        "actor cleared the maze"
    } else if world.stats.catches >= LIVES {
        "ghosts caught the actor"
    } else {
        "time limit reached"
    };
    println!("Level over after {ticks} ticks in {:.3} s: {outcome}", elapsed.as_secs_f64());
    println!(
        "  pills eaten {} (+{} power)  |  remaining {}  |  ghosts eaten {}  |  catches {}",
        world.stats.pills_eaten,
        world.stats.power_pills_eaten,
        world.remaining(),
        world.stats.ghosts_eaten,
        world.stats.catches,
    );
    println!("  ghost moves decided: {}  |  trace: {OUTPUT_DIR}/", obs.moves);
    println!();

    let total = obs.picks.iter().sum::<u64>().max(1);
    println!("{:<12} {:>8} {:>7}", "Strategy", "Picks", "Share");
    println!("{}", "-".repeat(29));
    for s in Strategy::ALL {
        let n = obs.picks[s.index()];
        println!("{:<12} {:>8} {:>6.1}%", s.as_str(), n, 100.0 * n as f64 / total as f64);
    }

    Ok(())
}

/// Read an `EngineConfig` from JSON, or use the defaults.  Missing fields
/// take their default values.
fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: EngineConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    info!(path = %path.display(), seed = config.seed, "loaded config");
    Ok(config)
}
