//! Q-learning core: state abstraction, value table, and agent
//!
//! This module implements tabular one-step Q-learning for the lane-crossing
//! game. The full board is reduced to the eight cells surrounding the frog,
//! which keeps the state space small enough for an exact table.
//!
//! ## Update rule
//!
//! The agent applies the standard off-policy temporal difference update:
//!
//! ```text
//! Q(s,a) ← (1 - α) Q(s,a) + α (r + γ max_a' Q(s',a'))
//! ```
//!
//! It moves the estimate toward the immediate reward plus the discounted best
//! achievable value from the successor state, regardless of which action is
//! actually taken there (hence "off-policy").
//!
//! ## Usage Example
//!
//! ```no_run
//! use hopper::{AgentConfig, GameState, Mode, QLearningAgent};
//!
//! let config = AgentConfig::new(Mode::Train).with_name("session1").with_seed(42);
//! let mut agent = QLearningAgent::new(config)?;
//!
//! let state: GameState = "2 1 0 0 0\n__C__\n_T___\n__F__".parse()?;
//! let action = agent.choose_action(&state)?;
//! # Ok::<(), hopper::Error>(())
//! ```

pub mod abstraction;
pub mod agent;
pub mod q_table;

// Public re-exports
pub use abstraction::{FAILURE_PENALTY, StateKey, reward};
pub use agent::QLearningAgent;
pub use q_table::{ActionValues, QTable};
