//! Core modules for Aura Match

pub mod aura_engine;
pub mod matcher;
pub mod discovery;
pub mod tracker;
pub mod api;

pub use aura_engine::{AuraEngine, contains_pictographic};
pub use matcher::{
    Matcher, GOLDEN_PAIRS, intellectual_score, emotional_score, lifestyle_score, karmic_score,
    composite_score, assign_label,
};
pub use discovery::{rank_candidates, pair_fingerprint, ScoreCache};
pub use tracker::{ViewTracker, ConversationClock};
pub use api::{create_router, run_server};
