//! The behavioral aura: a four-dimensional vector updated from user actions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AURA_MAX, AURA_MIN, AURA_NEUTRAL};

/// Display element for the dominant aura dimension
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Element {
    /// Fire, from intensity
    Feu,
    /// Water, from depth
    Eau,
    /// Earth, from stability
    #[default]
    Terre,
    /// Air, from openness
    Air,
}

impl Element {
    /// Tie-break priority: earlier wins
    pub const PRIORITY: [Element; 4] = [Element::Feu, Element::Eau, Element::Terre, Element::Air];

    pub fn code(&self) -> &'static str {
        match self {
            Element::Feu => "FEU",
            Element::Eau => "EAU",
            Element::Terre => "TERRE",
            Element::Air => "AIR",
        }
    }

    /// Name of the aura dimension this element stands for
    pub fn dimension(&self) -> &'static str {
        match self {
            Element::Feu => "intensity",
            Element::Eau => "depth",
            Element::Terre => "stability",
            Element::Air => "openness",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Element::Feu => "🔥",
            Element::Eau => "💧",
            Element::Terre => "🌍",
            Element::Air => "🌬️",
        }
    }

    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            Element::Feu => "\x1b[31m",   // Red
            Element::Eau => "\x1b[34m",   // Blue
            Element::Terre => "\x1b[33m", // Brown/Yellow
            Element::Air => "\x1b[36m",   // Cyan
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Behavioral profile, every dimension in [0, 100]
///
/// A stored record missing a dimension reads it back as neutral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aura {
    /// Decisiveness / impulsivity
    #[serde(default = "neutral_dimension")]
    pub intensity: f64,
    /// Engagement with substantive content
    #[serde(default = "neutral_dimension")]
    pub depth: f64,
    /// Consistency over time
    #[serde(default = "neutral_dimension")]
    pub stability: f64,
    /// Curiosity / receptiveness
    #[serde(default = "neutral_dimension")]
    pub openness: f64,
    /// Highest dimension, recomputed on every update
    #[serde(default)]
    pub dominant_element: Element,
    /// Wall-clock time of the last update (informational only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_action: Option<DateTime<Utc>>,
}

impl Default for Aura {
    fn default() -> Self {
        Self::neutral()
    }
}

impl Aura {
    /// Fresh vector: every dimension at 50, element TERRE
    pub fn neutral() -> Self {
        Self {
            intensity: AURA_NEUTRAL,
            depth: AURA_NEUTRAL,
            stability: AURA_NEUTRAL,
            openness: AURA_NEUTRAL,
            dominant_element: Element::Terre,
            last_action: None,
        }
    }

    /// Vector with explicit values; dominant element derived
    pub fn new(intensity: f64, depth: f64, stability: f64, openness: f64) -> Self {
        let mut aura = Self {
            intensity,
            depth,
            stability,
            openness,
            dominant_element: Element::Terre,
            last_action: None,
        };
        aura.clamp_all();
        aura.refresh_dominant();
        aura
    }

    /// Value of the dimension behind an element
    pub fn value(&self, element: Element) -> f64 {
        match element {
            Element::Feu => self.intensity,
            Element::Eau => self.depth,
            Element::Terre => self.stability,
            Element::Air => self.openness,
        }
    }

    /// Add `delta` to one dimension, then clamp it to [0, 100]
    pub fn adjust(&mut self, element: Element, delta: f64) {
        let slot = match element {
            Element::Feu => &mut self.intensity,
            Element::Eau => &mut self.depth,
            Element::Terre => &mut self.stability,
            Element::Air => &mut self.openness,
        };
        *slot = clamp_dimension(*slot + delta);
    }

    /// Highest dimension; ties go to the earlier element in `Element::PRIORITY`
    pub fn compute_dominant(&self) -> Element {
        let mut best = Element::PRIORITY[0];
        for element in Element::PRIORITY.iter().skip(1) {
            if self.value(*element) > self.value(best) {
                best = *element;
            }
        }
        best
    }

    pub fn refresh_dominant(&mut self) {
        self.dominant_element = self.compute_dominant();
    }

    pub fn clamp_all(&mut self) {
        for element in Element::PRIORITY {
            self.adjust(element, 0.0);
        }
    }

    /// True when every dimension sits inside [0, 100]
    pub fn is_in_bounds(&self) -> bool {
        Element::PRIORITY
            .iter()
            .all(|e| (AURA_MIN..=AURA_MAX).contains(&self.value(*e)))
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let element = self.dominant_element;
        format!(
            "{}{} {} | intensity={:.1} depth={:.1} stability={:.1} openness={:.1}{}",
            element.color_code(),
            element.emoji(),
            element,
            self.intensity,
            self.depth,
            self.stability,
            self.openness,
            Element::color_reset()
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "element={} | intensity={:.2} | depth={:.2} | stability={:.2} | openness={:.2}",
            self.dominant_element, self.intensity, self.depth, self.stability, self.openness
        )
    }
}

fn neutral_dimension() -> f64 {
    AURA_NEUTRAL
}

/// Clamp one value into the aura range; NaN collapses to neutral
fn clamp_dimension(value: f64) -> f64 {
    if value.is_nan() {
        AURA_NEUTRAL
    } else {
        value.clamp(AURA_MIN, AURA_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_is_terre() {
        let aura = Aura::neutral();
        assert_eq!(aura.dominant_element, Element::Terre);
        assert_eq!(aura.intensity, 50.0);
        assert!(aura.last_action.is_none());
    }

    #[test]
    fn test_dominant_tie_break_follows_priority() {
        let aura = Aura::new(50.0, 50.0, 50.0, 50.0);
        assert_eq!(aura.compute_dominant(), Element::Feu);

        let aura = Aura::new(10.0, 70.0, 70.0, 70.0);
        assert_eq!(aura.compute_dominant(), Element::Eau);

        let aura = Aura::new(10.0, 20.0, 30.0, 30.0);
        assert_eq!(aura.compute_dominant(), Element::Terre);

        let aura = Aura::new(10.0, 20.0, 30.0, 31.0);
        assert_eq!(aura.compute_dominant(), Element::Air);
    }

    #[test]
    fn test_adjust_clamps() {
        let mut aura = Aura::new(99.0, 0.2, 50.0, 50.0);
        aura.adjust(Element::Feu, 5.0);
        aura.adjust(Element::Eau, -1.0);
        assert_eq!(aura.intensity, 100.0);
        assert_eq!(aura.depth, 0.0);
    }

    #[test]
    fn test_new_clamps_out_of_range() {
        let aura = Aura::new(-10.0, 140.0, f64::NAN, 50.0);
        assert_eq!(aura.intensity, 0.0);
        assert_eq!(aura.depth, 100.0);
        assert_eq!(aura.stability, 50.0);
        assert!(aura.is_in_bounds());
    }

    #[test]
    fn test_element_defaults_to_terre() {
        assert_eq!(Element::default(), Element::Terre);
    }

    #[test]
    fn test_missing_dimensions_read_as_neutral() {
        let aura: Aura = serde_json::from_str(r#"{"intensity": 60}"#).unwrap();
        assert_eq!(aura.intensity, 60.0);
        assert_eq!(aura.depth, 50.0);
        assert_eq!(aura.stability, 50.0);
        assert_eq!(aura.openness, 50.0);
        assert_eq!(aura.dominant_element, Element::Terre);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(Aura::neutral()).unwrap();
        assert_eq!(json["dominantElement"], "TERRE");
        assert_eq!(json["intensity"], 50.0);
        assert!(json.get("lastAction").is_none());
    }
}
