//! Tabular Q-learning agent for a lane-crossing arcade game
//!
//! This crate provides:
//! - A parsed view of the game's textual state encoding
//! - State abstraction reducing the full board to an 8-cell lookup key
//! - A Q-learning agent with ε-greedy action selection and write-through
//!   persistence of its value table
//! - JSON-backed and in-memory table repositories
//! - CSV export and CLI tooling for inspecting learned tables

pub mod action;
pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod export;
pub mod ports;
pub mod q_learning;
pub mod state;

pub use action::Action;
pub use app::{AgentConfig, Mode};
pub use error::{Error, Result};
pub use q_learning::{QLearningAgent, QTable, StateKey, reward};
pub use state::GameState;
