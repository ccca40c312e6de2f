use std::collections::HashSet;

use crate::types::{Playlist, Track, TrackInfo};

/// Keeps the tracks released in `year`, deduplicated by track id.
///
/// A track passes when its album release date is non-empty and its first
/// four characters parse to exactly the target year. Duplicate ids keep
/// their first occurrence; order is otherwise preserved. Applying the
/// filter to its own output is a no-op.
pub fn filter_tracks_from_year(tracks: Vec<Track>, year: i32) -> Vec<Track> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut result = Vec::new();

    for track in tracks {
        if track.album.release_date.is_empty() {
            continue;
        }

        let Some(prefix) = track.album.release_date.get(..4) else {
            continue;
        };
        let Ok(release_year) = prefix.parse::<i32>() else {
            continue;
        };
        if release_year != year {
            continue;
        }

        if !seen.insert(track.id.clone()) {
            continue;
        }

        result.push(track);
    }

    result
}

/// Projects a full track onto the short shape the year commands emit.
pub fn short_track_details(track: &Track) -> TrackInfo {
    TrackInfo {
        track_id: track.id.clone(),
        track_name: track.name.clone(),
        artists: track.artists.iter().map(|a| a.name.clone()).collect(),
        album_name: track.album.name.clone(),
        release_date: track.album.release_date.clone(),
        popularity: track.popularity,
    }
}

/// Drops playlists whose name contains any of the exclusion substrings.
///
/// Matching is case-insensitive and substring-based. An empty exclusion
/// list returns the input unchanged; order is preserved.
pub fn filter_playlists(playlists: Vec<Playlist>, excluded_substrings: &[String]) -> Vec<Playlist> {
    if excluded_substrings.is_empty() {
        return playlists;
    }

    let lower_excluded: Vec<String> = excluded_substrings
        .iter()
        .map(|s| s.to_lowercase())
        .collect();

    playlists
        .into_iter()
        .filter(|p| {
            let name = p.name.to_lowercase();
            !lower_excluded.iter().any(|sub| name.contains(sub))
        })
        .collect()
}

/// Sorts in place by popularity descending. The sort is stable, so tracks
/// with equal popularity keep their input order.
pub fn sort_by_popularity_desc(tracks: &mut [TrackInfo]) {
    tracks.sort_by(|a, b| b.popularity.cmp(&a.popularity));
}
