//! Configuration types for agent creation.

use std::path::PathBuf;

/// Whether the agent is learning or only acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Update the table after every transition and write it through to disk.
    Train,
    /// Act from an existing table without modifying it. Construction fails
    /// if no table has been trained under the configured name.
    Play,
}

/// Configuration for creating a Q-learning agent.
///
/// Provides a builder-style API with the design-default hyperparameters:
/// learning rate 0.1, discount factor 0.9, exploration rate 0.1.
///
/// # Examples
///
/// ```
/// use hopper::{AgentConfig, Mode};
///
/// let config = AgentConfig::new(Mode::Train)
///     .with_name("session1")
///     .with_seed(42);
/// assert_eq!(config.table_path().to_str(), Some("train/session1.json"));
/// ```
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Training-session name; doubles as the persisted table's file stem.
    /// Training and inference agents of the same name share a table.
    pub name: String,
    /// Learning vs. acting mode.
    pub mode: Mode,
    /// Directory holding persisted tables.
    pub data_dir: PathBuf,
    /// Learning rate α.
    pub learning_rate: f64,
    /// Discount factor γ.
    pub discount_factor: f64,
    /// Probability of taking a random action instead of the greedy one.
    pub exploration_rate: f64,
    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl AgentConfig {
    /// Create a configuration with the design defaults.
    pub fn new(mode: Mode) -> Self {
        Self {
            name: "q".to_string(),
            mode,
            data_dir: PathBuf::from("train"),
            learning_rate: 0.1,
            discount_factor: 0.9,
            exploration_rate: 0.1,
            seed: None,
        }
    }

    /// Set the training-session name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the directory persisted tables live in.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Set the learning rate α.
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Set the discount factor γ.
    pub fn with_discount_factor(mut self, discount_factor: f64) -> Self {
        self.discount_factor = discount_factor;
        self
    }

    /// Set the exploration rate ε.
    pub fn with_exploration_rate(mut self, exploration_rate: f64) -> Self {
        self.exploration_rate = exploration_rate;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Path of the persisted table for this configuration.
    pub fn table_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.name))
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new(Mode::Train)
    }
}
