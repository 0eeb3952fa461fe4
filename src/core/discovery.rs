//! Discovery: rank candidates for a viewer, with an optional score cache

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::{HashMap, VecDeque};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::Matcher;
use crate::types::{CompatibilityResult, Profile, RankedCandidate};
use crate::SCORE_CACHE_CAPACITY;

/// Score every candidate against the viewer, best first
///
/// Ties keep input order. Candidates without an id are named by their
/// position in `candidates`.
pub fn rank_candidates(matcher: &Matcher, viewer: &Profile, candidates: &[Profile]) -> Vec<RankedCandidate> {
    rank_with(candidates, |candidate| matcher.score(viewer, candidate))
}

fn rank_with<F>(candidates: &[Profile], mut score: F) -> Vec<RankedCandidate>
where
    F: FnMut(&Profile) -> CompatibilityResult,
{
    let mut ranked: Vec<RankedCandidate> = candidates
        .iter()
        .enumerate()
        .map(|(i, candidate)| RankedCandidate {
            candidate_id: candidate.id.clone().unwrap_or_else(|| i.to_string()),
            result: score(candidate),
        })
        .collect();

    ranked.sort_by(|a, b| b.result.score.cmp(&a.result.score));
    ranked
}

/// The part of a profile the matcher reads
#[derive(Serialize)]
struct ScoringInputs<'a> {
    personality: Option<&'static str>,
    attachment: Option<&'static str>,
    interests: &'a [String],
    aura: Option<[f64; 4]>,
}

impl<'a> From<&'a Profile> for ScoringInputs<'a> {
    fn from(profile: &'a Profile) -> Self {
        Self {
            personality: profile.personality_type.map(|p| p.code()),
            attachment: profile.attachment_style.map(|a| a.name()),
            interests: &profile.interests,
            aura: profile
                .behavioral_profile
                .as_ref()
                .map(|a| [a.intensity, a.depth, a.stability, a.openness]),
        }
    }
}

/// SHA-256 over the canonical JSON of the ordered (viewer, candidate) pair
///
/// Only scoring inputs are hashed: ids, names, bios, the dominant element
/// and the last-action timestamp do not change the key.
pub fn pair_fingerprint(viewer: &Profile, candidate: &Profile) -> String {
    let mut hasher = Sha256::new();
    // Serialization cannot fail: string keys, finite-or-null numbers
    hasher.update(serde_json::to_vec(&ScoringInputs::from(viewer)).unwrap_or_default());
    hasher.update([0u8]);
    hasher.update(serde_json::to_vec(&ScoringInputs::from(candidate)).unwrap_or_default());
    let digest: [u8; 32] = hasher.finalize().into();
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

#[derive(Debug, Default)]
struct Entries {
    results: HashMap<String, CompatibilityResult>,
    /// Insertion order, oldest first
    order: VecDeque<String>,
}

/// Memoised scores keyed by `pair_fingerprint`, bounded FIFO
#[derive(Debug)]
pub struct ScoreCache {
    capacity: usize,
    entries: RwLock<Entries>,
}

impl Default for ScoreCache {
    fn default() -> Self {
        Self::with_capacity(SCORE_CACHE_CAPACITY)
    }
}

impl ScoreCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache holding at most `capacity` results (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: RwLock::new(Entries::default()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Cached result for the pair, computing and storing it on a miss
    pub fn get_or_score(&self, matcher: &Matcher, viewer: &Profile, candidate: &Profile) -> CompatibilityResult {
        let key = pair_fingerprint(viewer, candidate);

        if let Some(hit) = self.read_entries().results.get(&key) {
            tracing::trace!(key = %key, "score cache hit");
            return hit.clone();
        }

        tracing::trace!(key = %key, "score cache miss");
        let result = matcher.score(viewer, candidate);
        self.insert(key, result.clone());
        result
    }

    /// Like `rank_candidates`, going through the cache
    pub fn rank(&self, matcher: &Matcher, viewer: &Profile, candidates: &[Profile]) -> Vec<RankedCandidate> {
        rank_with(candidates, |candidate| self.get_or_score(matcher, viewer, candidate))
    }

    pub fn len(&self) -> usize {
        self.read_entries().results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut entries = self.write_entries();
        entries.results.clear();
        entries.order.clear();
    }

    fn insert(&self, key: String, result: CompatibilityResult) {
        let mut entries = self.write_entries();
        // Another request may have stored the same pair since our read
        if entries.results.insert(key.clone(), result).is_some() {
            return;
        }
        entries.order.push_back(key);

        while entries.order.len() > self.capacity {
            if let Some(oldest) = entries.order.pop_front() {
                entries.results.remove(&oldest);
                tracing::trace!(key = %oldest, "score cache evict");
            }
        }
    }

    // A poisoned lock only means a panic mid-insert; the map is still usable.
    fn read_entries(&self) -> RwLockReadGuard<'_, Entries> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_entries(&self) -> RwLockWriteGuard<'_, Entries> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }
}
