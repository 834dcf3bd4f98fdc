//! Blank-tile actions.
//!
//! An action names the direction the blank moves. The tile that sat in
//! that direction slides into the blank's former cell.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single blank move.
///
/// Declaration order is the generation order used by
/// [`legal_actions`](crate::movegen::legal_actions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

/// All actions in generation order.
pub const ALL_ACTIONS: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

impl Action {
    /// Returns the (row, col) offset of the blank after this action.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Action::Up => (-1, 0),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
            Action::Right => (0, 1),
        }
    }

    /// Returns the action that undoes this one.
    pub const fn inverse(self) -> Action {
        match self {
            Action::Up => Action::Down,
            Action::Down => Action::Up,
            Action::Left => Action::Right,
            Action::Right => Action::Left,
        }
    }

    /// Returns the uppercase name used in reports.
    pub const fn name(self) -> &'static str {
        match self {
            Action::Up => "UP",
            Action::Down => "DOWN",
            Action::Left => "LEFT",
            Action::Right => "RIGHT",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_is_involution() {
        for a in ALL_ACTIONS {
            assert_eq!(a.inverse().inverse(), a);
            assert_ne!(a.inverse(), a);
        }
    }

    #[test]
    fn inverse_cancels_delta() {
        for a in ALL_ACTIONS {
            let (dr, dc) = a.delta();
            let (ir, ic) = a.inverse().delta();
            assert_eq!((dr + ir, dc + ic), (0, 0));
        }
    }

    #[test]
    fn display_uses_uppercase_names() {
        let names: Vec<String> = ALL_ACTIONS.iter().map(|a| a.to_string()).collect();
        assert_eq!(names, ["UP", "DOWN", "LEFT", "RIGHT"]);
    }

    #[test]
    fn serializes_as_uppercase_string() {
        let json = serde_json::to_string(&[Action::Down, Action::Right]).unwrap();
        assert_eq!(json, r#"["DOWN","RIGHT"]"#);
    }
}
