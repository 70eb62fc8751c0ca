//! The fixed action vocabulary shared by the agent and the game.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// One of the five moves the frog can make on a tick.
///
/// The set is closed and identical on both sides of the agent/environment
/// boundary. The wire representation is a single character: `u`, `d`, `l`,
/// `r`, or `_` for staying put, and the same characters name the per-action
/// columns of the persisted Q-table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "u")]
    Up,
    #[serde(rename = "d")]
    Down,
    #[serde(rename = "l")]
    Left,
    #[serde(rename = "r")]
    Right,
    #[serde(rename = "_")]
    Stay,
}

impl Action {
    /// All actions in canonical order.
    ///
    /// This order is load-bearing: it is the order table entries are
    /// populated in, and therefore the tie-break order for greedy selection.
    pub const ALL: [Action; 5] = [
        Action::Up,
        Action::Down,
        Action::Left,
        Action::Right,
        Action::Stay,
    ];

    /// Wire character for this action.
    pub fn as_char(&self) -> char {
        match self {
            Action::Up => 'u',
            Action::Down => 'd',
            Action::Left => 'l',
            Action::Right => 'r',
            Action::Stay => '_',
        }
    }

    /// Parse an action from its wire character.
    pub fn from_char(c: char) -> Option<Action> {
        match c {
            'u' => Some(Action::Up),
            'd' => Some(Action::Down),
            'l' => Some(Action::Left),
            'r' => Some(Action::Right),
            '_' => Some(Action::Stay),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Action {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Action::from_char(c).ok_or_else(|| crate::Error::UnknownAction {
                input: s.to_string(),
            }),
            _ => Err(crate::Error::UnknownAction {
                input: s.to_string(),
            }),
        }
    }
}
