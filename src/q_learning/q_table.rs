//! Q-table implementation for tabular temporal difference learning

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{action::Action, q_learning::abstraction::StateKey};

/// Q-value estimates for every action in one state.
///
/// Holding one slot per action (rather than a sparse map) guarantees the
/// invariant that an initialized key always carries the full action set.
/// The serialized form uses the wire characters as field names, so a table
/// entry round-trips as `{"u": .., "d": .., "l": .., "r": .., "_": ..}`.
/// Missing fields deserialize as zero, which tolerates files written by
/// older trainers with partial entries.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionValues {
    #[serde(rename = "u")]
    up: f64,
    #[serde(rename = "d")]
    down: f64,
    #[serde(rename = "l")]
    left: f64,
    #[serde(rename = "r")]
    right: f64,
    #[serde(rename = "_")]
    stay: f64,
}

impl ActionValues {
    /// Entry with every action at zero except `action`, which gets `value`.
    ///
    /// Used when lazily initializing a key: the one seeded action breaks
    /// ties during early exploration without biasing the first visit.
    pub fn seeded(action: Action, value: f64) -> Self {
        let mut values = Self::default();
        values.set(action, value);
        values
    }

    pub fn value(&self, action: Action) -> f64 {
        match action {
            Action::Up => self.up,
            Action::Down => self.down,
            Action::Left => self.left,
            Action::Right => self.right,
            Action::Stay => self.stay,
        }
    }

    pub fn set(&mut self, action: Action, value: f64) {
        match action {
            Action::Up => self.up = value,
            Action::Down => self.down = value,
            Action::Left => self.left = value,
            Action::Right => self.right = value,
            Action::Stay => self.stay = value,
        }
    }

    /// Iterate (action, value) pairs in canonical action order.
    pub fn iter(&self) -> impl Iterator<Item = (Action, f64)> + '_ {
        Action::ALL.into_iter().map(move |action| (action, self.value(action)))
    }

    /// Maximum Q-value across all actions.
    pub fn max(&self) -> f64 {
        self.iter().map(|(_, q)| q).fold(f64::NEG_INFINITY, f64::max)
    }

    /// Action with the highest Q-value; ties go to the earliest action in
    /// canonical order, matching the order entries are populated in.
    pub fn best(&self) -> Action {
        let mut best = Action::Up;
        let mut best_q = self.value(best);
        for (action, q) in self.iter().skip(1) {
            if q > best_q {
                best = action;
                best_q = q;
            }
        }
        best
    }
}

/// Value table mapping state keys to per-action Q-value estimates.
///
/// The table is sparse by construction: lookups for unseen keys resolve to
/// explicit defaults rather than errors, and keys are only ever added, never
/// removed. Serializes transparently as a JSON object keyed by state key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QTable {
    entries: HashMap<StateKey, ActionValues>,
}

impl QTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of state keys in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The full entry for a key, if the key has been seen.
    pub fn entry(&self, key: &StateKey) -> Option<&ActionValues> {
        self.entries.get(key)
    }

    /// Q-value for a (key, action) pair, defaulting to zero when absent.
    pub fn value(&self, key: &StateKey, action: Action) -> f64 {
        self.entries.get(key).map_or(0.0, |v| v.value(action))
    }

    /// Maximum Q-value over all actions for a key, zero when absent.
    pub fn max_value(&self, key: &StateKey) -> f64 {
        self.entries.get(key).map_or(0.0, ActionValues::max)
    }

    /// Greedy action for a key, or `None` if the key has never been seen.
    ///
    /// Callers must resolve `None` themselves (e.g. by falling back to a
    /// random action); it is never a valid action in its own right.
    pub fn greedy(&self, key: &StateKey) -> Option<Action> {
        self.entries.get(key).map(ActionValues::best)
    }

    /// Lazily initialize a key: zeros for every action except `seeded_action`,
    /// which receives a value drawn from `draw` (uniform in [0, 1) by
    /// contract of the caller).
    ///
    /// Idempotent: an existing entry is left untouched and `draw` is not
    /// invoked.
    pub fn initialize_with<F>(&mut self, key: StateKey, seeded_action: Action, draw: F)
    where
        F: FnOnce() -> f64,
    {
        self.entries
            .entry(key)
            .or_insert_with(|| ActionValues::seeded(seeded_action, draw()));
    }

    /// One-step Q-learning update (off-policy TD):
    ///
    /// ```text
    /// Q(s,a) ← (1 - α) Q(s,a) + α (r + γ max_a' Q(s',a'))
    /// ```
    ///
    /// Both the current estimate and the successor maximum default to zero
    /// for unseen keys.
    pub fn update(
        &mut self,
        prev_key: &StateKey,
        prev_action: Action,
        reward: f64,
        next_key: &StateKey,
        learning_rate: f64,
        discount_factor: f64,
    ) {
        let current_q = self.value(prev_key, prev_action);
        let max_next_q = self.max_value(next_key);
        let new_q =
            (1.0 - learning_rate) * current_q + learning_rate * (reward + discount_factor * max_next_q);
        self.entries
            .entry(prev_key.clone())
            .or_default()
            .set(prev_action, new_q);
    }

    /// Iterate all (key, entry) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&StateKey, &ActionValues)> {
        self.entries.iter()
    }
}
