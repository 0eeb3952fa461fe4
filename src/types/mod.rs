//! Core types for Aura Match

pub(crate) mod attachment;
mod aura;
mod compatibility;
mod event;
pub(crate) mod personality;
mod profile;

pub use attachment::AttachmentStyle;
pub use aura::{Aura, Element};
pub use compatibility::{CompatibilityLabel, CompatibilityResult, RankedCandidate, ScoreDetails};
pub use event::{MessageEvent, SwipeDirection, SwipeEvent};
pub use personality::{ArchetypeGroup, PersonalityType};
pub use profile::Profile;
