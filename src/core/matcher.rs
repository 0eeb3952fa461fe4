//! Matcher: compatibility score between two profiles
//!
//! composite = emotional*0.25 + intellectual*0.25 + lifestyle*0.20 + karmic*0.30
//!
//! Every rule table below is first-match-wins; arm order is load-bearing.

use std::collections::HashSet;

use crate::types::{
    ArchetypeGroup, AttachmentStyle, Aura, CompatibilityLabel, CompatibilityResult,
    PersonalityType, Profile, ScoreDetails,
};
use crate::{
    KARMIC_DEPTH_PENALTY, KARMIC_INTENSITY_PENALTY, KARMIC_WEIGHT_DEPTH, KARMIC_WEIGHT_INTENSITY,
    KARMIC_WEIGHT_OPENNESS, KARMIC_WEIGHT_STABILITY, LABEL_CEREBRAL_FIRE_EMOTIONAL,
    LABEL_CEREBRAL_FIRE_INTELLECTUAL, LABEL_COSMIC_UNION, LABEL_CROSSED_DESTINY_KARMIC,
    LABEL_HARMONY, LABEL_REFUGE_EMOTIONAL, LABEL_SOULMATE, LIFESTYLE_JACCARD_SCALE,
    LIFESTYLE_NEUTRAL, WEIGHT_EMOTIONAL, WEIGHT_INTELLECTUAL, WEIGHT_KARMIC, WEIGHT_LIFESTYLE,
};

/// Maximally complementary pairs (unordered)
pub const GOLDEN_PAIRS: [(PersonalityType, PersonalityType); 5] = [
    (PersonalityType::Intj, PersonalityType::Enfp),
    (PersonalityType::Infj, PersonalityType::Entp),
    (PersonalityType::Infp, PersonalityType::Enfj),
    (PersonalityType::Intp, PersonalityType::Entj),
    (PersonalityType::Istj, PersonalityType::Esfp),
];

pub const INTELLECTUAL_GOLDEN: f64 = 98.0;
pub const INTELLECTUAL_ANALYST_DIPLOMAT: f64 = 88.0;
pub const INTELLECTUAL_SAME_GROUP: f64 = 75.0;
pub const INTELLECTUAL_SENTINEL_BRIDGE: f64 = 60.0;
pub const INTELLECTUAL_BASELINE: f64 = 70.0;

pub const EMOTIONAL_BOTH_SECURE: f64 = 100.0;
pub const EMOTIONAL_ONE_SECURE: f64 = 85.0;
pub const EMOTIONAL_ANXIOUS_AVOIDANT: f64 = 40.0;
pub const EMOTIONAL_SAME_INSECURE: f64 = 65.0;
pub const EMOTIONAL_OTHER: f64 = 55.0;

fn is_golden_pair(a: PersonalityType, b: PersonalityType) -> bool {
    GOLDEN_PAIRS
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

/// Personality-type compatibility (symmetric)
///
/// A missing type on either side falls through to the baseline.
pub fn intellectual_score(a: Option<PersonalityType>, b: Option<PersonalityType>) -> f64 {
    use ArchetypeGroup::*;

    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        _ => return INTELLECTUAL_BASELINE,
    };

    if is_golden_pair(a, b) {
        return INTELLECTUAL_GOLDEN;
    }

    match (a.archetype(), b.archetype()) {
        (Analysts, Diplomats) | (Diplomats, Analysts) => INTELLECTUAL_ANALYST_DIPLOMAT,
        (x, y) if x == y => INTELLECTUAL_SAME_GROUP,
        (Sentinels, Analysts | Diplomats) | (Analysts | Diplomats, Sentinels) => {
            INTELLECTUAL_SENTINEL_BRIDGE
        }
        _ => INTELLECTUAL_BASELINE,
    }
}

/// Attachment-style compatibility (symmetric)
pub fn emotional_score(a: Option<AttachmentStyle>, b: Option<AttachmentStyle>) -> f64 {
    use AttachmentStyle::*;

    match (a, b) {
        (Some(Secure), Some(Secure)) => EMOTIONAL_BOTH_SECURE,
        (Some(Secure), _) | (_, Some(Secure)) => EMOTIONAL_ONE_SECURE,
        // High-friction pattern
        (Some(Anxious), Some(Avoidant)) | (Some(Avoidant), Some(Anxious)) => {
            EMOTIONAL_ANXIOUS_AVOIDANT
        }
        (Some(x), Some(y)) if x == y => EMOTIONAL_SAME_INSECURE,
        _ => EMOTIONAL_OTHER,
    }
}

/// Jaccard similarity of the interest sets, scaled x4 and capped at 100
///
/// Either side empty → 50. Duplicates within one list count once.
pub fn lifestyle_score(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return LIFESTYLE_NEUTRAL;
    }

    let set_a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();
    let ratio = intersection as f64 / union as f64;

    (ratio * LIFESTYLE_JACCARD_SCALE).min(100.0)
}

/// Balance between two auras; a missing aura counts as neutral
///
/// The intensity and depth terms are not floored: a depth gap above ~83
/// makes that term negative and the karmic score drops accordingly.
pub fn karmic_score(a: Option<&Aura>, b: Option<&Aura>) -> f64 {
    let neutral = Aura::neutral();
    let a = a.unwrap_or(&neutral);
    let b = b.unwrap_or(&neutral);

    let intensity = 100.0 - (a.intensity - b.intensity).abs() * KARMIC_INTENSITY_PENALTY;
    let depth = 100.0 - (a.depth - b.depth).abs() * KARMIC_DEPTH_PENALTY;
    let stability = a.stability.max(b.stability);
    let openness = (a.openness + b.openness) / 2.0;

    intensity * KARMIC_WEIGHT_INTENSITY
        + depth * KARMIC_WEIGHT_DEPTH
        + stability * KARMIC_WEIGHT_STABILITY
        + openness * KARMIC_WEIGHT_OPENNESS
}

/// Weighted composite, rounded half away from zero
pub fn composite_score(details: &ScoreDetails) -> i64 {
    let raw = details.emotional * WEIGHT_EMOTIONAL
        + details.intellectual * WEIGHT_INTELLECTUAL
        + details.lifestyle * WEIGHT_LIFESTYLE
        + details.karmic * WEIGHT_KARMIC;
    raw.round() as i64
}

/// Label from the composite and sub-scores; the karmic rule can outrank
/// a composite in the 75-87 band
pub fn assign_label(score: i64, details: &ScoreDetails) -> CompatibilityLabel {
    if score >= LABEL_COSMIC_UNION {
        CompatibilityLabel::CosmicUnion
    } else if score >= LABEL_SOULMATE {
        CompatibilityLabel::Soulmate
    } else if details.karmic > LABEL_CROSSED_DESTINY_KARMIC {
        CompatibilityLabel::CrossedDestiny
    } else if details.intellectual > LABEL_CEREBRAL_FIRE_INTELLECTUAL
        && details.emotional < LABEL_CEREBRAL_FIRE_EMOTIONAL
    {
        CompatibilityLabel::CerebralFire
    } else if details.emotional > LABEL_REFUGE_EMOTIONAL {
        CompatibilityLabel::Refuge
    } else if score >= LABEL_HARMONY {
        CompatibilityLabel::Harmony
    } else {
        CompatibilityLabel::Exploration
    }
}

/// Compatibility scorer. Stateless and pure.
#[derive(Debug, Default, Clone, Copy)]
pub struct Matcher;

impl Matcher {
    /// Create new matcher
    pub fn new() -> Self {
        Self
    }

    /// Four sub-scores for a pair
    pub fn details(&self, viewer: &Profile, candidate: &Profile) -> ScoreDetails {
        ScoreDetails {
            emotional: emotional_score(viewer.attachment_style, candidate.attachment_style),
            intellectual: intellectual_score(viewer.personality_type, candidate.personality_type),
            lifestyle: lifestyle_score(&viewer.interests, &candidate.interests),
            karmic: karmic_score(
                viewer.behavioral_profile.as_ref(),
                candidate.behavioral_profile.as_ref(),
            ),
        }
    }

    /// Score a (viewer, candidate) pair
    pub fn score(&self, viewer: &Profile, candidate: &Profile) -> CompatibilityResult {
        let details = self.details(viewer, candidate);
        let score = composite_score(&details);
        let label = assign_label(score, &details);

        tracing::debug!(
            viewer = viewer.id.as_deref().unwrap_or("-"),
            candidate = candidate.id.as_deref().unwrap_or("-"),
            score,
            label = %label,
            "scored pair"
        );

        CompatibilityResult { score, label, details }
    }
}

// =============================================================================
// TESTS
// =============================================================================
