//! Personality types (16 four-letter codes) and their archetype groups

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use crate::error::AuraMatchError;

/// One of the 16 four-letter personality codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PersonalityType {
    Intj,
    Intp,
    Entj,
    Entp,
    Infj,
    Infp,
    Enfj,
    Enfp,
    Istj,
    Isfj,
    Estj,
    Esfj,
    Istp,
    Isfp,
    Estp,
    Esfp,
}

/// Four disjoint groups of four personality types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArchetypeGroup {
    Analysts,
    Diplomats,
    Sentinels,
    Explorers,
}

impl PersonalityType {
    pub const ALL: [PersonalityType; 16] = [
        Self::Intj, Self::Intp, Self::Entj, Self::Entp,
        Self::Infj, Self::Infp, Self::Enfj, Self::Enfp,
        Self::Istj, Self::Isfj, Self::Estj, Self::Esfj,
        Self::Istp, Self::Isfp, Self::Estp, Self::Esfp,
    ];

    /// Upper-case four-letter code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Intj => "INTJ",
            Self::Intp => "INTP",
            Self::Entj => "ENTJ",
            Self::Entp => "ENTP",
            Self::Infj => "INFJ",
            Self::Infp => "INFP",
            Self::Enfj => "ENFJ",
            Self::Enfp => "ENFP",
            Self::Istj => "ISTJ",
            Self::Isfj => "ISFJ",
            Self::Estj => "ESTJ",
            Self::Esfj => "ESFJ",
            Self::Istp => "ISTP",
            Self::Isfp => "ISFP",
            Self::Estp => "ESTP",
            Self::Esfp => "ESFP",
        }
    }

    pub fn archetype(&self) -> ArchetypeGroup {
        match self {
            Self::Intj | Self::Intp | Self::Entj | Self::Entp => ArchetypeGroup::Analysts,
            Self::Infj | Self::Infp | Self::Enfj | Self::Enfp => ArchetypeGroup::Diplomats,
            Self::Istj | Self::Isfj | Self::Estj | Self::Esfj => ArchetypeGroup::Sentinels,
            Self::Istp | Self::Isfp | Self::Estp | Self::Esfp => ArchetypeGroup::Explorers,
        }
    }

    pub fn is_extravert(&self) -> bool {
        self.letter(0) == b'E'
    }

    pub fn is_intuitive(&self) -> bool {
        self.letter(1) == b'N'
    }

    pub fn is_judging(&self) -> bool {
        self.letter(3) == b'J'
    }

    fn letter(&self, index: usize) -> u8 {
        self.code().as_bytes()[index]
    }
}

impl FromStr for PersonalityType {
    type Err = AuraMatchError;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.code() == code)
            .ok_or_else(|| AuraMatchError::InvalidPersonality(s.to_string()))
    }
}

impl std::fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for PersonalityType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for PersonalityType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Lenient field deserializer: unknown or non-string codes become `None`
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<PersonalityType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(|v| v.as_str())
        .and_then(|s| s.parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("intj".parse::<PersonalityType>().unwrap(), PersonalityType::Intj);
        assert_eq!(" EnFp ".parse::<PersonalityType>().unwrap(), PersonalityType::Enfp);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("XXXX".parse::<PersonalityType>().is_err());
        assert!("".parse::<PersonalityType>().is_err());
    }

    #[test]
    fn test_groups_are_disjoint_fours() {
        for group in [
            ArchetypeGroup::Analysts,
            ArchetypeGroup::Diplomats,
            ArchetypeGroup::Sentinels,
            ArchetypeGroup::Explorers,
        ] {
            let count = PersonalityType::ALL.iter().filter(|t| t.archetype() == group).count();
            assert_eq!(count, 4, "{:?} should hold four types", group);
        }
    }

    #[test]
    fn test_letters() {
        assert!(PersonalityType::Enfp.is_extravert());
        assert!(PersonalityType::Enfp.is_intuitive());
        assert!(!PersonalityType::Enfp.is_judging());
        assert!(!PersonalityType::Istj.is_extravert());
        assert!(PersonalityType::Istj.is_judging());
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&PersonalityType::Infj).unwrap();
        assert_eq!(json, "\"INFJ\"");
        let back: PersonalityType = serde_json::from_str("\"infj\"").unwrap();
        assert_eq!(back, PersonalityType::Infj);
    }
}
