//! Script commands
//!
//! A command is a raw `(action, plate)` token pair as read from a script line.
//! The action token is interpreted only when the command is applied, so a
//! line like `X CAR1` is a valid command that simply does nothing.

use std::fmt;
use strum::{EnumIter, EnumString};

/// Garage action named by a command's first token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Action {
    #[strum(serialize = "A")]
    Arrival,
    #[strum(serialize = "D")]
    Departure,
}

impl Action {
    /// Word used to prefix outcome lines
    pub const fn label(self) -> &'static str {
        match self {
            Self::Arrival => "Arrival",
            Self::Departure => "Departure",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One accepted script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    action: String,
    plate: String,
}

impl Command {
    pub fn new(action: impl Into<String>, plate: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            plate: plate.into(),
        }
    }

    /// The action token exactly as written
    #[inline]
    pub fn action_token(&self) -> &str {
        &self.action
    }

    #[inline]
    pub fn plate(&self) -> &str {
        &self.plate
    }

    /// The recognised action, or `None` for any other token
    pub fn action(&self) -> Option<Action> {
        self.action.parse().ok()
    }

    /// Parse a script line.
    ///
    /// The line is split on single ASCII spaces with trailing empty tokens
    /// dropped, so `"A X "` is accepted but `"A  X"` (three tokens) and
    /// `" "` (none) are not. Anything other than exactly two tokens yields
    /// `None`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut tokens: Vec<&str> = line.split(' ').collect();
        while tokens.last() == Some(&"") {
            tokens.pop();
        }
        match tokens.as_slice() {
            [action, plate] => Some(Self::new(*action, *plate)),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.action, self.plate)
    }
}
