//! Recall quality scores and the four learner-facing rating buttons.
use crate::error::{Result, SrsError};
use std::fmt;
use std::str::FromStr;

/// Validated SM-2 quality score in `0..=5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quality(u8);

impl Quality {
    pub const MAX: u8 = 5;
    /// Lowest quality counted as a successful recall.
    pub const PASSING: u8 = 3;

    pub fn new(value: u8) -> Result<Self> {
        if value > Self::MAX {
            return Err(SrsError::InvalidQuality(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_pass(&self) -> bool {
        self.0 >= Self::PASSING
    }
}

impl TryFrom<u8> for Quality {
    type Error = SrsError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

/// Rating buttons shown to the learner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rating {
    Again,
    Hard,
    Good,
    Easy,
}

impl Rating {
    pub const ALL: [Rating; 4] = [Rating::Again, Rating::Hard, Rating::Good, Rating::Easy];

    pub fn quality(&self) -> Quality {
        match self {
            Rating::Again => Quality(0),
            Rating::Hard => Quality(3),
            Rating::Good => Quality(4),
            Rating::Easy => Quality(5),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rating::Again => "Again",
            Rating::Hard => "Hard",
            Rating::Good => "Good",
            Rating::Easy => "Easy",
        }
    }
}

impl From<Rating> for Quality {
    fn from(rating: Rating) -> Self {
        rating.quality()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts a button name (`again`, `hard`, `good`, `easy`) or its position `1`-`4`.
impl FromStr for Rating {
    type Err = SrsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "again" | "a" | "1" => Ok(Rating::Again),
            "hard" | "h" | "2" => Ok(Rating::Hard),
            "good" | "g" | "3" => Ok(Rating::Good),
            "easy" | "e" | "4" => Ok(Rating::Easy),
            _ => Err(SrsError::UnknownRating(s.to_string())),
        }
    }
}
