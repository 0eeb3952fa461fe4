//! Profile record consumed by the matcher

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{attachment, personality, AttachmentStyle, Aura, PersonalityType};

/// A user or candidate as seen by the matcher
///
/// Unknown personality or attachment codes deserialize to `None`, a missing
/// or null interest list to an empty one and an unreadable aura to `None`,
/// so a half-filled record still scores (against neutral defaults) instead
/// of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Identity, ignored by the matcher
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name, ignored by the matcher
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "personality::deserialize_lenient")]
    pub personality_type: Option<PersonalityType>,
    #[serde(default, deserialize_with = "attachment::deserialize_lenient")]
    pub attachment_style: Option<AttachmentStyle>,
    #[serde(default, deserialize_with = "deserialize_interests")]
    pub interests: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_aura_lenient")]
    pub behavioral_profile: Option<Aura>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl Profile {
    /// Profile with the four scoring inputs set
    pub fn new(
        personality_type: Option<PersonalityType>,
        attachment_style: Option<AttachmentStyle>,
        interests: Vec<String>,
        behavioral_profile: Option<Aura>,
    ) -> Self {
        Self {
            personality_type,
            attachment_style,
            interests,
            behavioral_profile,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Interest tags; null or a non-array becomes empty, non-string items are skipped
fn deserialize_interests<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(tag) => Some(tag),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn deserialize_aura_lenient<'de, D>(deserializer: D) -> Result<Option<Aura>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| serde_json::from_value(v).ok()))
}
