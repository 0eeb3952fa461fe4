//! Aura Engine: evolves a behavioral aura from swipes and messages
//!
//! Swipe rules:
//! - latency < 1s → intensity +1.5; latency > 4s → intensity -0.5
//! - like/super on a bio > 150 chars → depth +1
//! - super → intensity +4, openness +2
//! - left → openness -0.2; any other direction → openness +0.3
//!
//! Message rules:
//! - > 80 chars → depth +2; < 10 chars without emoji → depth -0.5
//! - reply within 60s → intensity +1
//! - contains emoji → intensity +0.5
//! - always → stability +1
//!
//! Every adjustment is clamped to [0, 100] as it is applied.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;

use crate::types::{Aura, Element, MessageEvent, PersonalityType, SwipeDirection, SwipeEvent};
use crate::{
    MESSAGE_EMOJI_INTENSITY, MESSAGE_LONG_CHARS, MESSAGE_LONG_DEPTH, MESSAGE_RESPONSIVE_INTENSITY,
    MESSAGE_RESPONSIVE_MS, MESSAGE_SHORT_CHARS, MESSAGE_SHORT_DEPTH, MESSAGE_STABILITY,
    SUPER_LIKE_INTENSITY, SUPER_LIKE_OPENNESS, SWIPE_DELIBERATE_INTENSITY, SWIPE_DELIBERATE_MS,
    SWIPE_IMPULSIVE_INTENSITY, SWIPE_IMPULSIVE_MS, SWIPE_LEFT_OPENNESS, SWIPE_LIKE_OPENNESS,
    SWIPE_LONG_BIO_CHARS, SWIPE_LONG_BIO_DEPTH,
};

lazy_static! {
    static ref RE_PICTOGRAPHIC: Regex = Regex::new(r"\p{Extended_Pictographic}").unwrap();
}

// Seeding deltas applied on top of the neutral vector at profile creation
const SEED_LONG_BIO_CHARS: usize = 150;
const SEED_SHORT_BIO_CHARS: usize = 30;
const SEED_LONG_BIO_DEPTH: f64 = 10.0;
const SEED_SHORT_BIO_DEPTH: f64 = -5.0;
const SEED_TRAIT_DELTA: f64 = 5.0;

/// Does the text contain at least one emoji / pictographic character?
pub fn contains_pictographic(text: &str) -> bool {
    RE_PICTOGRAPHIC.is_match(text)
}

/// Text length in characters (not bytes)
fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Aura updater. Stateless; every call returns a new vector.
#[derive(Debug, Default)]
pub struct AuraEngine;

impl AuraEngine {
    /// Create new engine
    pub fn new() -> Self {
        Self
    }

    /// Apply a swipe, stamping the current wall-clock time
    pub fn on_swipe(&self, current: Option<&Aura>, event: &SwipeEvent) -> Aura {
        self.on_swipe_at(current, event, Utc::now())
    }

    /// Apply a swipe with an explicit timestamp
    pub fn on_swipe_at(&self, current: Option<&Aura>, event: &SwipeEvent, now: DateTime<Utc>) -> Aura {
        let mut aura = current.cloned().unwrap_or_default();
        let elapsed = event.elapsed_ms;

        // Latency (negative elapsed = unknown, rule skipped)
        if elapsed >= 0 {
            if elapsed < SWIPE_IMPULSIVE_MS {
                aura.adjust(Element::Feu, SWIPE_IMPULSIVE_INTENSITY);
            } else if elapsed > SWIPE_DELIBERATE_MS {
                aura.adjust(Element::Feu, SWIPE_DELIBERATE_INTENSITY);
            }
        }

        // Depth: values substance
        if event.direction.is_like() && char_len(&event.candidate_bio) > SWIPE_LONG_BIO_CHARS {
            aura.adjust(Element::Eau, SWIPE_LONG_BIO_DEPTH);
        }

        if event.direction == SwipeDirection::Super {
            aura.adjust(Element::Feu, SUPER_LIKE_INTENSITY);
            aura.adjust(Element::Air, SUPER_LIKE_OPENNESS);
        }

        // Openness
        match event.direction {
            SwipeDirection::Left => aura.adjust(Element::Air, SWIPE_LEFT_OPENNESS),
            SwipeDirection::Right | SwipeDirection::Super => {
                aura.adjust(Element::Air, SWIPE_LIKE_OPENNESS)
            }
        }

        aura.refresh_dominant();
        aura.last_action = Some(now);

        tracing::debug!(
            direction = %event.direction,
            elapsed_ms = elapsed,
            element = %aura.dominant_element,
            "aura updated from swipe"
        );
        aura
    }

    /// Apply a sent message, stamping the current wall-clock time
    pub fn on_message(&self, current: Option<&Aura>, event: &MessageEvent) -> Aura {
        self.on_message_at(current, event, Utc::now())
    }

    /// Apply a sent message with an explicit timestamp
    pub fn on_message_at(&self, current: Option<&Aura>, event: &MessageEvent, now: DateTime<Utc>) -> Aura {
        let mut aura = current.cloned().unwrap_or_default();
        let length = char_len(&event.text);
        let has_emoji = contains_pictographic(&event.text);

        // Depth
        if length > MESSAGE_LONG_CHARS {
            aura.adjust(Element::Eau, MESSAGE_LONG_DEPTH);
        } else if length < MESSAGE_SHORT_CHARS && !has_emoji {
            aura.adjust(Element::Eau, MESSAGE_SHORT_DEPTH);
        }

        // Responsiveness
        if let Some(gap) = event.elapsed_since_previous_ms {
            if (0..MESSAGE_RESPONSIVE_MS).contains(&gap) {
                aura.adjust(Element::Feu, MESSAGE_RESPONSIVE_INTENSITY);
            }
        }

        // Expressiveness
        if has_emoji {
            aura.adjust(Element::Feu, MESSAGE_EMOJI_INTENSITY);
        }

        // Engagement: stability only ever grows
        aura.adjust(Element::Terre, MESSAGE_STABILITY);

        aura.refresh_dominant();
        aura.last_action = Some(now);

        tracing::debug!(
            chars = length,
            has_emoji,
            gap_ms = ?event.elapsed_since_previous_ms,
            element = %aura.dominant_element,
            "aura updated from message"
        );
        aura
    }

    /// Initial aura at profile creation, from bio length and personality letters
    ///
    /// Extraverts start with more intensity, introverts with more depth;
    /// intuitive and perceiving types with more openness; sensing and judging
    /// types with more stability.
    pub fn seed(&self, bio: Option<&str>, personality: Option<PersonalityType>) -> Aura {
        let mut aura = Aura::neutral();

        let bio_len = bio.map(char_len).unwrap_or(0);
        if bio_len > SEED_LONG_BIO_CHARS {
            aura.adjust(Element::Eau, SEED_LONG_BIO_DEPTH);
        } else if bio_len < SEED_SHORT_BIO_CHARS {
            aura.adjust(Element::Eau, SEED_SHORT_BIO_DEPTH);
        }

        if let Some(p) = personality {
            if p.is_extravert() {
                aura.adjust(Element::Feu, SEED_TRAIT_DELTA);
            } else {
                aura.adjust(Element::Eau, SEED_TRAIT_DELTA);
            }
            if p.is_intuitive() {
                aura.adjust(Element::Air, SEED_TRAIT_DELTA);
            } else {
                aura.adjust(Element::Terre, SEED_TRAIT_DELTA);
            }
            if p.is_judging() {
                aura.adjust(Element::Terre, SEED_TRAIT_DELTA);
            } else {
                aura.adjust(Element::Air, SEED_TRAIT_DELTA);
            }
        }

        aura.refresh_dominant();
        aura
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_left_swipe_in_neutral_window() {
        let engine = AuraEngine::new();
        let before = Aura::neutral();
        let event = SwipeEvent::new(SwipeDirection::Left, "x".repeat(50), 2000);
        let after = engine.on_swipe(Some(&before), &event);

        assert!(close(after.openness, before.openness - 0.2));
        assert!(close(after.intensity, before.intensity));
        assert!(close(after.depth, before.depth));
        assert!(close(after.stability, before.stability));
    }

    #[test]
    fn test_super_like_stacks() {
        let engine = AuraEngine::new();
        let before = Aura::neutral();
        let event = SwipeEvent::new(SwipeDirection::Super, "x".repeat(200), 500);
        let after = engine.on_swipe(Some(&before), &event);

        assert!(close(after.intensity, 55.5));
        assert!(close(after.depth, 51.0));
        assert!(close(after.openness, 52.3));
        assert_eq!(after.dominant_element, Element::Feu);
    }

    #[test]
    fn test_slow_right_swipe() {
        let engine = AuraEngine::new();
        let event = SwipeEvent::new(SwipeDirection::Right, "short", 5000);
        let after = engine.on_swipe(None, &event);

        assert!(close(after.intensity, 49.5));
        assert!(close(after.depth, 50.0));
        assert!(close(after.openness, 50.3));
    }

    #[test]
    fn test_boundary_latencies_do_not_apply() {
        let engine = AuraEngine::new();
        for elapsed in [1000, 4000, -1] {
            let event = SwipeEvent::new(SwipeDirection::Right, "", elapsed);
            let after = engine.on_swipe(None, &event);
            assert!(close(after.intensity, 50.0), "elapsed {} moved intensity", elapsed);
        }
    }

    #[test]
    fn test_left_swipe_ignores_long_bio() {
        let engine = AuraEngine::new();
        let event = SwipeEvent::new(SwipeDirection::Left, "x".repeat(300), 2000);
        let after = engine.on_swipe(None, &event);
        assert!(close(after.depth, 50.0));
    }

    #[test]
    fn test_clamp_after_each_adjustment() {
        let engine = AuraEngine::new();
        // Slow super-like at zero intensity: -0.5 clamps to 0 before +4
        let start = Aura::new(0.0, 50.0, 50.0, 99.0);
        let event = SwipeEvent::new(SwipeDirection::Super, "", 9000);
        let after = engine.on_swipe(Some(&start), &event);
        assert!(close(after.intensity, 4.0));
        assert!(close(after.openness, 100.0));
    }

    #[test]
    fn test_message_with_emoji() {
        let engine = AuraEngine::new();
        let before = Aura::neutral();
        let event = MessageEvent::new("Hello 😊", Some(30_000));
        let after = engine.on_message(Some(&before), &event);

        assert!(close(after.intensity, 51.5));
        assert!(close(after.depth, 50.0));
        assert!(close(after.stability, 51.0));
        assert!(close(after.openness, 50.0));
    }

    #[test]
    fn test_short_plain_message_loses_depth() {
        let engine = AuraEngine::new();
        let after = engine.on_message(None, &MessageEvent::new("ok", None));
        assert!(close(after.depth, 49.5));
        assert!(close(after.intensity, 50.0));
        assert!(close(after.stability, 51.0));
    }

    #[test]
    fn test_long_message_gains_depth() {
        let engine = AuraEngine::new();
        let text = "a".repeat(81);
        let after = engine.on_message(None, &MessageEvent::new(text, Some(120_000)));
        assert!(close(after.depth, 52.0));
        assert!(close(after.intensity, 50.0));
    }

    #[test]
    fn test_negative_gap_is_ignored() {
        let engine = AuraEngine::new();
        let after = engine.on_message(None, &MessageEvent::new("hello there", Some(-5)));
        assert!(close(after.intensity, 50.0));
    }

    #[test]
    fn test_stability_never_decreases() {
        let engine = AuraEngine::new();
        let mut aura = Aura::neutral();
        for text in ["ok", "a much longer message about weekend plans and hiking", "🙂"] {
            let next = engine.on_message(Some(&aura), &MessageEvent::new(text, Some(10)));
            assert!(next.stability >= aura.stability);
            aura = next;
        }
    }

    #[test]
    fn test_input_not_mutated_and_timestamp_set() {
        let engine = AuraEngine::new();
        let before = Aura::neutral();
        let snapshot = before.clone();
        let now = Utc::now();
        let after = engine.on_swipe_at(Some(&before), &SwipeEvent::new(SwipeDirection::Super, "", 10), now);

        assert_eq!(before, snapshot);
        assert_eq!(after.last_action, Some(now));
    }

    #[test]
    fn test_pictographic_detection() {
        assert!(contains_pictographic("nice 🔥"));
        assert!(contains_pictographic("❤"));
        assert!(!contains_pictographic("plain text 123"));
    }

    #[test]
    fn test_seed_without_signals() {
        let engine = AuraEngine::new();
        let aura = engine.seed(None, None);
        // Empty bio counts as short
        assert!(close(aura.depth, 45.0));
        assert!(close(aura.intensity, 50.0));
    }

    #[test]
    fn test_seed_from_personality_and_bio() {
        let engine = AuraEngine::new();
        let bio = "b".repeat(200);
        let aura = engine.seed(Some(&bio), Some(PersonalityType::Infj));

        // I → depth, N → openness, J → stability
        assert!(close(aura.depth, 65.0));
        assert!(close(aura.openness, 55.0));
        assert!(close(aura.stability, 55.0));
        assert!(close(aura.intensity, 50.0));
        assert_eq!(aura.dominant_element, Element::Eau);
        assert!(aura.last_action.is_none());
    }
}
