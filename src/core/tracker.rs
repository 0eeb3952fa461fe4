//! Action timing for the aura engine
//!
//! `ViewTracker` measures how long a candidate card was on screen before
//! the swipe; `ConversationClock` measures the gap since the previous
//! message in a conversation. Both are plain values owned by the caller.

use std::collections::HashMap;
use std::time::Instant;

/// When each candidate card was first shown
#[derive(Debug, Default)]
pub struct ViewTracker {
    shown_at: HashMap<String, Instant>,
}

impl ViewTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a candidate was shown. A card already on screen keeps
    /// its original timestamp.
    pub fn mark_viewed(&mut self, candidate_id: impl Into<String>, at: Instant) {
        self.shown_at.entry(candidate_id.into()).or_insert(at);
    }

    /// Milliseconds since the candidate was shown, `None` if never shown
    pub fn elapsed_ms(&self, candidate_id: &str, at: Instant) -> Option<i64> {
        self.shown_at
            .get(candidate_id)
            .map(|shown| millis_between(*shown, at))
    }

    /// Like `elapsed_ms`, and forget the candidate
    pub fn take_elapsed_ms(&mut self, candidate_id: &str, at: Instant) -> Option<i64> {
        self.shown_at
            .remove(candidate_id)
            .map(|shown| millis_between(shown, at))
    }

    pub fn len(&self) -> usize {
        self.shown_at.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shown_at.is_empty()
    }
}

/// Last message instant per conversation
#[derive(Debug, Default)]
pub struct ConversationClock {
    last_message: HashMap<String, Instant>,
}

impl ConversationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message and return the gap to the previous one
    pub fn record(&mut self, conversation_id: impl Into<String>, at: Instant) -> Option<i64> {
        self.last_message
            .insert(conversation_id.into(), at)
            .map(|previous| millis_between(previous, at))
    }

    /// Gap since the last recorded message, without recording
    pub fn since_last(&self, conversation_id: &str, at: Instant) -> Option<i64> {
        self.last_message
            .get(conversation_id)
            .map(|previous| millis_between(*previous, at))
    }
}

/// Signed milliseconds from `from` to `to`; negative when `to` is earlier
fn millis_between(from: Instant, to: Instant) -> i64 {
    match to.checked_duration_since(from) {
        Some(d) => d.as_millis() as i64,
        None => -(from.duration_since(to).as_millis() as i64),
    }
}
