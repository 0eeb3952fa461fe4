//! Matcher output: sub-scores, composite score and label

use serde::{Deserialize, Serialize};

/// Categorical label, chosen by ordered threshold rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompatibilityLabel {
    #[serde(rename = "Union Cosmique")]
    CosmicUnion,
    #[serde(rename = "Âme Sœur")]
    Soulmate,
    #[serde(rename = "Destin Croisé")]
    CrossedDestiny,
    #[serde(rename = "Feu Cérébral")]
    CerebralFire,
    #[serde(rename = "Refuge")]
    Refuge,
    #[serde(rename = "Harmonie")]
    Harmony,
    #[serde(rename = "Exploration")]
    Exploration,
}

impl CompatibilityLabel {
    /// Display label shown to users
    pub fn label(&self) -> &'static str {
        match self {
            Self::CosmicUnion => "Union Cosmique",
            Self::Soulmate => "Âme Sœur",
            Self::CrossedDestiny => "Destin Croisé",
            Self::CerebralFire => "Feu Cérébral",
            Self::Refuge => "Refuge",
            Self::Harmony => "Harmonie",
            Self::Exploration => "Exploration",
        }
    }

    /// English gloss
    pub fn description(&self) -> &'static str {
        match self {
            Self::CosmicUnion => "Cosmic union",
            Self::Soulmate => "Soulmate",
            Self::CrossedDestiny => "Crossed destiny - behaviors in balance",
            Self::CerebralFire => "Cerebral fire - minds align, hearts clash",
            Self::Refuge => "Refuge - emotional safety",
            Self::Harmony => "Harmony",
            Self::Exploration => "Exploration",
        }
    }
}

impl std::fmt::Display for CompatibilityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The four sub-scores, nominally 0-100
///
/// `karmic` can leave that range when two auras diverge strongly; it is
/// reported as computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetails {
    pub emotional: f64,
    pub intellectual: f64,
    pub lifestyle: f64,
    pub karmic: f64,
}

/// Full result for one (viewer, candidate) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    /// Rounded weighted composite
    pub score: i64,
    pub label: CompatibilityLabel,
    pub details: ScoreDetails,
}

impl CompatibilityResult {
    /// Format for terminal display
    pub fn to_parseable_string(&self) -> String {
        format!(
            "score={} | label={} | emotional={:.1} | intellectual={:.1} | lifestyle={:.1} | karmic={:.1}",
            self.score,
            self.label,
            self.details.emotional,
            self.details.intellectual,
            self.details.lifestyle,
            self.details.karmic
        )
    }
}

/// One entry of a ranked discovery list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCandidate {
    /// Candidate id, or its position in the input list when it has none
    pub candidate_id: String,
    pub result: CompatibilityResult,
}
