//! Run configuration: which strategy to run and how.
//!
//! Parsed from JSON with unknown fields rejected, then validated fail-closed:
//! a field the chosen strategy would ignore is an error, not a silent no-op.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wayfind_search::config::{QueueSearchConfig, SearchVariant};

/// Search strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    BreadthFirst,
    DepthFirst,
    UniformCost,
    GreedyBestFirst,
    AStar,
    DepthLimited,
    IterativeDeepening,
}

impl StrategyKind {
    /// Every strategy, in a fixed order.
    pub const ALL: [Self; 7] = [
        Self::BreadthFirst,
        Self::DepthFirst,
        Self::UniformCost,
        Self::GreedyBestFirst,
        Self::AStar,
        Self::DepthLimited,
        Self::IterativeDeepening,
    ];

    /// The serialized name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BreadthFirst => "breadth_first",
            Self::DepthFirst => "depth_first",
            Self::UniformCost => "uniform_cost",
            Self::GreedyBestFirst => "greedy_best_first",
            Self::AStar => "a_star",
            Self::DepthLimited => "depth_limited",
            Self::IterativeDeepening => "iterative_deepening",
        }
    }

    /// Strategies ordered by a heuristic.
    #[must_use]
    pub fn is_informed(self) -> bool {
        matches!(self, Self::GreedyBestFirst | Self::AStar)
    }

    /// Strategies driven by the frontier engine (tree or graph variant).
    #[must_use]
    pub fn uses_frontier(self) -> bool {
        !matches!(self, Self::DepthLimited | Self::IterativeDeepening)
    }
}

/// Tree or graph search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantKind {
    #[default]
    Tree,
    Graph,
}

impl VariantKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Graph => "graph",
        }
    }
}

impl From<VariantKind> for SearchVariant {
    fn from(kind: VariantKind) -> Self {
        match kind {
            VariantKind::Tree => Self::Tree,
            VariantKind::Graph => Self::Graph,
        }
    }
}

/// Error parsing or validating a [`RunConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The JSON is malformed or does not match the schema.
    #[error("config parse error: {detail}")]
    Parse { detail: String },
    /// An informed strategy was configured without a heuristic.
    #[error("{strategy} requires a heuristic")]
    MissingHeuristic { strategy: &'static str },
    /// Depth-limited search was configured without a limit.
    #[error("{strategy} requires a depth_limit")]
    MissingDepthLimit { strategy: &'static str },
    /// A field was set that the strategy does not use.
    #[error("{field} does not apply to {strategy}")]
    NotApplicable {
        strategy: &'static str,
        field: &'static str,
    },
}

/// One search run's settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    pub strategy: StrategyKind,
    #[serde(default)]
    pub variant: VariantKind,
    #[serde(default)]
    pub early_goal_test: bool,
    #[serde(default)]
    pub depth_limit: Option<u32>,
    #[serde(default)]
    pub heuristic: Option<String>,
}

impl RunConfig {
    /// Defaults for `strategy`: tree search, late goal test, nothing else.
    #[must_use]
    pub fn new(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            variant: VariantKind::Tree,
            early_goal_test: false,
            depth_limit: None,
            heuristic: None,
        }
    }

    #[must_use]
    pub fn with_variant(mut self, variant: VariantKind) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn with_early_goal_test(mut self, enabled: bool) -> Self {
        self.early_goal_test = enabled;
        self
    }

    #[must_use]
    pub fn with_depth_limit(mut self, limit: u32) -> Self {
        self.depth_limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_heuristic(mut self, name: impl Into<String>) -> Self {
        self.heuristic = Some(name.into());
        self
    }

    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields,
    /// and any [`RunConfig::validate`] error.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_slice(bytes).map_err(|e| ConfigError::Parse {
            detail: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every set field is used by the strategy and every required
    /// one is present.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let strategy = self.strategy.as_str();
        match (self.strategy.is_informed(), &self.heuristic) {
            (true, None) => return Err(ConfigError::MissingHeuristic { strategy }),
            (false, Some(_)) => {
                return Err(ConfigError::NotApplicable {
                    strategy,
                    field: "heuristic",
                })
            }
            _ => {}
        }
        match (self.strategy, self.depth_limit) {
            (StrategyKind::DepthLimited, None) => {
                return Err(ConfigError::MissingDepthLimit { strategy })
            }
            (StrategyKind::DepthLimited, Some(_)) | (_, None) => {}
            (_, Some(_)) => {
                return Err(ConfigError::NotApplicable {
                    strategy,
                    field: "depth_limit",
                })
            }
        }
        if !self.strategy.uses_frontier() {
            if self.variant != VariantKind::Tree {
                return Err(ConfigError::NotApplicable {
                    strategy,
                    field: "variant",
                });
            }
            if self.early_goal_test {
                return Err(ConfigError::NotApplicable {
                    strategy,
                    field: "early_goal_test",
                });
            }
        }
        Ok(())
    }

    /// The frontier engine configuration this run uses.
    #[must_use]
    pub fn queue_config(&self) -> QueueSearchConfig {
        QueueSearchConfig {
            variant: self.variant.into(),
            ..QueueSearchConfig::default()
        }
        .with_early_goal_test(self.early_goal_test)
    }
}
