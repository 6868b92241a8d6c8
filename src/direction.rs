use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;

/// Which English variant is the source and which is the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    AmericanToBritish,
    BritishToAmerican,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::AmericanToBritish, Direction::BritishToAmerican];

    /// Wire name used by the `locale` field
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::AmericanToBritish => "american-to-british",
            Direction::BritishToAmerican => "british-to-american",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|direction| direction.as_str() == s)
            .ok_or(InvalidInput::InvalidLocale)
    }
}
