use std::collections::{HashMap, HashSet};

use crate::types::Track;

/// Caps for one diversity selection: how many tracks one seed artist may
/// contribute in total, and how many of those may share an album.
#[derive(Debug, Clone, Copy)]
pub struct DiversityPolicy {
    pub target_count: usize,
    pub album_cap: usize,
}

impl Default for DiversityPolicy {
    fn default() -> Self {
        Self {
            target_count: 5,
            album_cap: 3,
        }
    }
}

/// Selects a capped, album-diverse subset from a ranked candidate list.
///
/// `candidates` must already be sorted by popularity descending. The
/// selection runs two greedy phases:
///
/// 1. **Diversity first**: admit a candidate only if its album has not
///    contributed yet, so the first pass spreads across distinct albums
///    before repeating any.
/// 2. **Fill**: admit remaining candidates by rank while their album stays
///    under the cap, until the target count is reached.
///
/// `seen` is the cross-seed deduplication set; tracks already in it are
/// skipped in both phases, and every selected track id is added to it.
/// Fewer eligible candidates than the target is not an error; the
/// selection is simply shorter, possibly empty.
pub fn select_diverse(
    candidates: &[Track],
    policy: DiversityPolicy,
    seen: &mut HashSet<String>,
) -> Vec<Track> {
    let mut selection: Vec<Track> = Vec::with_capacity(policy.target_count);
    let mut album_count: HashMap<String, usize> = HashMap::new();
    let mut album_added: HashSet<String> = HashSet::new();

    // Phase 1: one pick per album while under the cap.
    for track in candidates {
        if selection.len() >= policy.target_count {
            break;
        }

        let album_id = &track.album.id;
        if seen.contains(&track.id) || album_count.get(album_id).copied().unwrap_or(0) >= policy.album_cap {
            continue;
        }
        if album_added.contains(album_id) {
            continue;
        }

        seen.insert(track.id.clone());
        *album_count.entry(album_id.clone()).or_insert(0) += 1;
        album_added.insert(album_id.clone());
        selection.push(track.clone());
    }

    // Phase 2: fill remaining slots by rank, still respecting the album cap.
    for track in candidates {
        if selection.len() >= policy.target_count {
            break;
        }

        let album_id = &track.album.id;
        if seen.contains(&track.id) || album_count.get(album_id).copied().unwrap_or(0) >= policy.album_cap {
            continue;
        }

        seen.insert(track.id.clone());
        *album_count.entry(album_id.clone()).or_insert(0) += 1;
        selection.push(track.clone());
    }

    selection
}
