//! Player actions and their text tokens.

use core::fmt;
use core::str::FromStr;

use crate::error::ActionError;

/// A decision the player can make on the active hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw one card.
    Hit,
    /// Keep the hand as it is.
    Stand,
    /// Double the stake, draw exactly one card, then stop.
    Double,
    /// Split a pair into two hands.
    Split,
}

impl Action {
    /// Returns the token for this action.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Stand => "stand",
            Self::Double => "double",
            Self::Split => "split",
        }
    }
}

impl FromStr for Action {
    type Err = ActionError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "hit" => Ok(Self::Hit),
            "stand" => Ok(Self::Stand),
            "double" => Ok(Self::Double),
            "split" => Ok(Self::Split),
            _ => Err(ActionError::UnknownAction),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
