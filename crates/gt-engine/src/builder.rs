//! Fluent builder for constructing a [`DecisionEngine`].

use tracing::debug;

use gt_behavior::{Annotations, StrategyParams};
use gt_core::{AgentId, AgentRng, AttributeSchema, EngineConfig, EngineRng, Tick};
use gt_tree::{DecisionTree, canonical, load_or_default, parse_or_default};

use crate::{AttributeTracker, DecisionEngine, EngineResult};

/// Fluent builder for [`DecisionEngine`].
///
/// # Tree selection
///
/// | Call                     | Tree used                                       |
/// |--------------------------|-------------------------------------------------|
/// | `.tree(t)`               | `t`                                             |
/// | `.tree_source(s)`        | `s` parsed, canonical on error                  |
/// | neither, `tree_path` set | the file at `config.tree_path`, canonical on error |
/// | neither, no `tree_path`  | the canonical tree                              |
///
/// Source and file problems never fail the build; they are logged and the
/// canonical tree is used.  A tree that cannot classify every vector under
/// the configured ghost count does fail the build.
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = EngineBuilder::new(EngineConfig::default()).build()?;
/// let decisions = engine.tick(&snapshot)?;
/// ```
pub struct EngineBuilder {
    config: EngineConfig,
    tree:   Option<DecisionTree>,
}

impl EngineBuilder {
    pub fn new(config: EngineConfig) -> Self {
        Self { config, tree: None }
    }

    /// Use `tree` instead of loading one.
    pub fn tree(mut self, tree: DecisionTree) -> Self {
        self.tree = Some(tree);
        self
    }

    /// Parse `source` in the tree text format, falling back to the
    /// canonical tree if it is malformed.
    pub fn tree_source(mut self, source: &str) -> Self {
        self.tree = Some(parse_or_default(source));
        self
    }

    /// Validate the configuration and tree, seed the RNG streams, and
    /// return a ready engine.
    pub fn build(self) -> EngineResult<DecisionEngine> {
        let config = self.config;
        config.validate()?;

        let tree = match (self.tree, &config.tree_path) {
            (Some(tree), _) => tree,
            (None, Some(path)) => load_or_default(path),
            (None, None) => canonical(),
        };
        tree.validate(&AttributeSchema::new(config.ghost_count))?;
        debug!("decision tree:\n{tree}");

        let mut engine_rng = EngineRng::new(config.seed);
        let tracker = AttributeTracker::new(&config, &mut engine_rng);

        let ghosts = (0..config.ghost_count).map(|g| AgentId(g as u8));
        let rngs = ghosts.clone().map(|g| AgentRng::new(config.seed, g)).collect();
        let notes = ghosts
            .map(|g| Annotations::with_enabled(config.debug.is_on(g)))
            .collect();

        debug!(
            ghosts = config.ghost_count,
            seed = config.seed,
            nodes = tree.len(),
            "decision engine built"
        );

        Ok(DecisionEngine {
            params: StrategyParams::from_config(&config),
            config,
            tree,
            tracker,
            rngs,
            notes,
            now: Tick::ZERO,
        })
    }
}
