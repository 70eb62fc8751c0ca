//! Parsed form of the textual game-state encoding.
//!
//! The game engine is an external collaborator; once per tick it hands the
//! agent a textual snapshot of the board. The encoding is a header line
//! followed by one line per board row:
//!
//! ```text
//! frog_x frog_y score done goal
//! __CC_
//! T___T
//! __F__
//! ```
//!
//! The header carries the frog's grid coordinates, the current score, and the
//! terminal flags (`done`/`goal` as `0` or `1`). Board cells are single
//! characters; `_` marks an empty cell and any other glyph is an occupant
//! (car, truck, log, the frog itself). The agent never inspects glyph
//! meanings, only their identity.

use std::str::FromStr;

use crate::error::Error;

/// The cell character denoting an empty square.
pub const EMPTY: char = '_';

/// One parsed game-state snapshot.
///
/// Cell queries are bounds-checked: anything off the board reads as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    rows: Vec<Vec<char>>,
    frog_x: i64,
    frog_y: i64,
    score: i64,
    is_done: bool,
    at_goal: bool,
}

impl GameState {
    /// Cell contents at board coordinates `(x, y)`.
    ///
    /// Returns `None` for out-of-bounds coordinates and for empty cells, so
    /// callers can treat both uniformly as "nothing there".
    pub fn get(&self, x: i64, y: i64) -> Option<char> {
        if x < 0 || y < 0 {
            return None;
        }
        let cell = *self.rows.get(y as usize)?.get(x as usize)?;
        (cell != EMPTY).then_some(cell)
    }

    /// Frog column.
    pub fn frog_x(&self) -> i64 {
        self.frog_x
    }

    /// Frog row.
    pub fn frog_y(&self) -> i64 {
        self.frog_y
    }

    /// Score accumulated so far in this episode.
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Whether this state ends the episode (goal reached or frog lost).
    pub fn is_done(&self) -> bool {
        self.is_done
    }

    /// Whether the frog reached the goal row in this state.
    pub fn at_goal(&self) -> bool {
        self.at_goal
    }
}

fn parse_flag(field: &str, value: &str) -> Result<bool, Error> {
    match value {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(Error::InvalidStateFlag {
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}

impl FromStr for GameState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines();
        let header = lines.next().ok_or(Error::EmptyStateDescription)?;

        let fields: Vec<&str> = header.split_whitespace().collect();
        let [frog_x, frog_y, score, done, goal] = fields.as_slice() else {
            return Err(Error::InvalidStateHeader {
                header: header.to_string(),
            });
        };

        let parse_int = |value: &str| {
            value.parse::<i64>().map_err(|_| Error::InvalidStateHeader {
                header: header.to_string(),
            })
        };

        Ok(GameState {
            frog_x: parse_int(frog_x)?,
            frog_y: parse_int(frog_y)?,
            score: parse_int(score)?,
            is_done: parse_flag("done", done)?,
            at_goal: parse_flag("goal", goal)?,
            rows: lines.map(|line| line.chars().collect()).collect(),
        })
    }
}
