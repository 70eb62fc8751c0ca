//! State abstraction: lookup keys and reward signals.
//!
//! The board is far too large to tabulate directly, so each state is reduced
//! to the eight cells immediately surrounding the frog. Two states that look
//! identical up close share a key no matter what the rest of the board, the
//! score, or the clock are doing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::state::{EMPTY, GameState};

/// Reward for a terminal state that is not the goal (collision, time-out).
pub const FAILURE_PENALTY: f64 = -10.0;

/// Neighborhood offsets in key order: the three cells above, the two beside,
/// and the three below the frog, left-to-right within each band.
const NEIGHBORHOOD: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Opaque, order-sensitive lookup key for the Q-table.
///
/// Derivation is a pure function of the state description; there is no
/// hidden dependency on history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateKey(String);

impl StateKey {
    /// Derive the key for a state: the eight surrounding cell glyphs
    /// concatenated in a fixed order, with `_` standing in for empty or
    /// out-of-bounds cells.
    pub fn derive(state: &GameState) -> Self {
        let (x, y) = (state.frog_x(), state.frog_y());
        StateKey(
            NEIGHBORHOOD
                .iter()
                .map(|&(dx, dy)| state.get(x + dx, y + dy).unwrap_or(EMPTY))
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for StateKey {
    fn from(key: String) -> Self {
        StateKey(key)
    }
}

impl From<&str> for StateKey {
    fn from(key: &str) -> Self {
        StateKey(key.to_string())
    }
}

/// Reward signal for a state.
///
/// Reaching the goal pays out the achieved score, losing the frog costs a
/// fixed penalty, and every other tick is neutral. Pure function of the
/// current state only.
pub fn reward(state: &GameState) -> f64 {
    if state.at_goal() {
        state.score() as f64
    } else if state.is_done() {
        FAILURE_PENALTY
    } else {
        0.0
    }
}
