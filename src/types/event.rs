//! User actions that move an aura

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AuraMatchError;

/// Swipe decision on a candidate card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    /// Pass
    Left,
    /// Like
    Right,
    /// Super-like
    Super,
}

impl SwipeDirection {
    /// Right and super both express interest
    pub fn is_like(&self) -> bool {
        !matches!(self, SwipeDirection::Left)
    }

    pub fn name(&self) -> &'static str {
        match self {
            SwipeDirection::Left => "left",
            SwipeDirection::Right => "right",
            SwipeDirection::Super => "super",
        }
    }
}

impl FromStr for SwipeDirection {
    type Err = AuraMatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "super" => Ok(Self::Super),
            _ => Err(AuraMatchError::InvalidDirection(s.to_string())),
        }
    }
}

impl std::fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A swipe, with how long the card was on screen before the decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeEvent {
    pub direction: SwipeDirection,
    /// Candidate's bio; only its length matters
    #[serde(default)]
    pub candidate_bio: String,
    /// Negative values disable the latency rule
    pub elapsed_ms: i64,
}

impl SwipeEvent {
    pub fn new(direction: SwipeDirection, candidate_bio: impl Into<String>, elapsed_ms: i64) -> Self {
        Self {
            direction,
            candidate_bio: candidate_bio.into(),
            elapsed_ms,
        }
    }
}

/// A message sent in a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEvent {
    pub text: String,
    /// Gap since the previous message; `None` for the first one
    #[serde(default)]
    pub elapsed_since_previous_ms: Option<i64>,
}

impl MessageEvent {
    pub fn new(text: impl Into<String>, elapsed_since_previous_ms: Option<i64>) -> Self {
        Self {
            text: text.into(),
            elapsed_since_previous_ms,
        }
    }
}
