//! Attachment styles

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use crate::error::AuraMatchError;

/// The four relationship-behavior tendencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttachmentStyle {
    Secure,
    Anxious,
    Avoidant,
    Disorganized,
}

impl AttachmentStyle {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Secure => "Secure",
            Self::Anxious => "Anxious",
            Self::Avoidant => "Avoidant",
            Self::Disorganized => "Disorganized",
        }
    }
}

impl FromStr for AttachmentStyle {
    type Err = AuraMatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "secure" => Ok(Self::Secure),
            "anxious" => Ok(Self::Anxious),
            "avoidant" => Ok(Self::Avoidant),
            "disorganized" => Ok(Self::Disorganized),
            _ => Err(AuraMatchError::InvalidAttachment(s.to_string())),
        }
    }
}

impl std::fmt::Display for AttachmentStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Lenient field deserializer: unknown styles become `None`
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<AttachmentStyle>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(|v| v.as_str())
        .and_then(|s| s.parse().ok()))
}
