//! Purchase probability scores and their classification.
//!
//! The score carries no predictive meaning: it is drawn uniformly from
//! `[1, 100]` and only drives the classification branch. Sources are injected
//! through [`ScoreSource`] so tests can pin exact boundary values.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Lowest allowed score.
pub const MIN_SCORE: u8 = 1;

/// Highest allowed score.
pub const MAX_SCORE: u8 = 100;

/// A purchase probability in the closed interval `[1, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ProbabilityScore(u8);

impl ProbabilityScore {
    pub fn value(self) -> u8 {
        self.0
    }

    pub fn classification(self) -> Classification {
        Classification::from_score(self)
    }
}

impl TryFrom<u8> for ProbabilityScore {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (MIN_SCORE..=MAX_SCORE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::ScoreOutOfRange { value })
        }
    }
}

impl From<ProbabilityScore> for u8 {
    fn from(score: ProbabilityScore) -> Self {
        score.0
    }
}

impl fmt::Display for ProbabilityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of raw purchase probability values.
///
/// Implementations should return values in `[1, 100]`; anything else is
/// rejected by the intake pipeline.
pub trait ScoreSource: Send + Sync {
    fn next_score(&self) -> u8;
}

/// Unseeded, uniformly distributed scores from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngScore;

impl ScoreSource for ThreadRngScore {
    fn next_score(&self) -> u8 {
        rand::thread_rng().gen_range(MIN_SCORE..=MAX_SCORE)
    }
}

/// Lead classification derived from the purchase probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Score above 75.
    #[serde(rename = "Highly Probable")]
    HighlyProbable,
    /// Score from 50 to 75 inclusive.
    #[serde(rename = "Moderately Probable")]
    ModeratelyProbable,
    /// Score below 50.
    #[serde(rename = "Unlikely")]
    Unlikely,
}

impl Classification {
    pub fn from_score(score: ProbabilityScore) -> Self {
        match score.value() {
            76..=u8::MAX => Self::HighlyProbable,
            50..=75 => Self::ModeratelyProbable,
            _ => Self::Unlikely,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::HighlyProbable => "Highly Probable",
            Self::ModeratelyProbable => "Moderately Probable",
            Self::Unlikely => "Unlikely",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
