//! Aura Match: compatibility scoring and behavioral aura engine
//!
//! Two pure pieces: the aura updater (swipe / message events evolve a
//! four-dimensional behavioral vector) and the matcher (personality,
//! attachment, interests and aura combined into one score and label).

pub mod core;
pub mod error;
pub mod types;

pub use error::{AuraMatchError, Result};

// =============================================================================
// AURA BOUNDS
// =============================================================================

/// Lower bound for every aura dimension
pub const AURA_MIN: f64 = 0.0;

/// Upper bound for every aura dimension
pub const AURA_MAX: f64 = 100.0;

/// Neutral value used for fresh or missing auras
pub const AURA_NEUTRAL: f64 = 50.0;

// =============================================================================
// SWIPE RULES
// =============================================================================

/// Decisions faster than this are impulsive (milliseconds)
pub const SWIPE_IMPULSIVE_MS: i64 = 1000;

/// Decisions slower than this are deliberate (milliseconds)
pub const SWIPE_DELIBERATE_MS: i64 = 4000;

pub const SWIPE_IMPULSIVE_INTENSITY: f64 = 1.5;
pub const SWIPE_DELIBERATE_INTENSITY: f64 = -0.5;

/// Bio length (characters) above which a like counts as valuing substance
pub const SWIPE_LONG_BIO_CHARS: usize = 150;
pub const SWIPE_LONG_BIO_DEPTH: f64 = 1.0;

pub const SUPER_LIKE_INTENSITY: f64 = 4.0;
pub const SUPER_LIKE_OPENNESS: f64 = 2.0;

pub const SWIPE_LEFT_OPENNESS: f64 = -0.2;
pub const SWIPE_LIKE_OPENNESS: f64 = 0.3;

// =============================================================================
// MESSAGE RULES
// =============================================================================

/// Messages longer than this are substantive (characters)
pub const MESSAGE_LONG_CHARS: usize = 80;
pub const MESSAGE_LONG_DEPTH: f64 = 2.0;

/// Messages shorter than this (without emoji) are shallow (characters)
pub const MESSAGE_SHORT_CHARS: usize = 10;
pub const MESSAGE_SHORT_DEPTH: f64 = -0.5;

/// Replies within this window count as responsive (milliseconds)
pub const MESSAGE_RESPONSIVE_MS: i64 = 60_000;
pub const MESSAGE_RESPONSIVE_INTENSITY: f64 = 1.0;

pub const MESSAGE_EMOJI_INTENSITY: f64 = 0.5;
pub const MESSAGE_STABILITY: f64 = 1.0;

// =============================================================================
// SUB-SCORE WEIGHTS - composite = sum(sub * weight), weights sum to 1.0
// =============================================================================

pub const WEIGHT_EMOTIONAL: f64 = 0.25;
pub const WEIGHT_INTELLECTUAL: f64 = 0.25;
pub const WEIGHT_LIFESTYLE: f64 = 0.20;
pub const WEIGHT_KARMIC: f64 = 0.30;

// =============================================================================
// KARMIC WEIGHTS
// =============================================================================

pub const KARMIC_INTENSITY_PENALTY: f64 = 0.6;
pub const KARMIC_DEPTH_PENALTY: f64 = 1.2;

pub const KARMIC_WEIGHT_INTENSITY: f64 = 0.20;
pub const KARMIC_WEIGHT_DEPTH: f64 = 0.40;
pub const KARMIC_WEIGHT_STABILITY: f64 = 0.20;
pub const KARMIC_WEIGHT_OPENNESS: f64 = 0.20;

// =============================================================================
// LIFESTYLE
// =============================================================================

/// Jaccard ratios are sparse; scale before capping at 100
pub const LIFESTYLE_JACCARD_SCALE: f64 = 400.0;

/// Neutral lifestyle score when either side has no interests
pub const LIFESTYLE_NEUTRAL: f64 = 50.0;

// =============================================================================
// LABEL THRESHOLDS
// =============================================================================

pub const LABEL_COSMIC_UNION: i64 = 94;
pub const LABEL_SOULMATE: i64 = 88;
pub const LABEL_CROSSED_DESTINY_KARMIC: f64 = 90.0;
pub const LABEL_CEREBRAL_FIRE_INTELLECTUAL: f64 = 90.0;
pub const LABEL_CEREBRAL_FIRE_EMOTIONAL: f64 = 60.0;
pub const LABEL_REFUGE_EMOTIONAL: f64 = 90.0;
pub const LABEL_HARMONY: i64 = 75;

// =============================================================================
// SCORE CACHE
// =============================================================================

/// Entries kept by the server's score cache before the oldest is evicted
pub const SCORE_CACHE_CAPACITY: usize = 10_000;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
