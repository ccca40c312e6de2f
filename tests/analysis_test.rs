use std::collections::HashSet;

use spanlcli::analysis::diversity::{DiversityPolicy, select_diverse};
use spanlcli::analysis::filter::{
    filter_playlists, filter_tracks_from_year, short_track_details, sort_by_popularity_desc,
};
use spanlcli::analysis::pipeline::{
    PLAYLIST_ADD_BATCH, dedup_against_seen, project_and_rank, track_uri_batches,
};
use spanlcli::types::{AlbumRef, Playlist, Track, TrackArtist, TrackInfo};

// Helper function to create a test track
fn create_test_track(id: &str, album_id: &str, release_date: &str, popularity: u32) -> Track {
    Track {
        id: id.to_string(),
        name: format!("Track {}", id),
        artists: vec![TrackArtist {
            id: format!("{}_artist_id", id),
            name: format!("Artist {}", id),
        }],
        album: AlbumRef {
            id: album_id.to_string(),
            name: format!("Album {}", album_id),
            release_date: release_date.to_string(),
        },
        popularity,
    }
}

// Helper function to create a test track projection
fn create_test_info(id: &str, popularity: u32) -> TrackInfo {
    TrackInfo {
        track_id: id.to_string(),
        track_name: format!("Track {}", id),
        artists: vec![format!("Artist {}", id)],
        album_name: "Album".to_string(),
        release_date: "1998-01-01".to_string(),
        popularity,
    }
}

fn create_test_playlist(id: &str, name: &str) -> Playlist {
    Playlist {
        id: id.to_string(),
        name: name.to_string(),
    }
}

#[test]
fn test_filter_tracks_from_year_exact_match() {
    let tracks = vec![
        create_test_track("a", "al1", "1998-01-01", 50),
        create_test_track("b", "al1", "1999-01-01", 50),
        create_test_track("c", "al1", "1998-12-31", 50),
    ];

    let result = filter_tracks_from_year(tracks.clone(), 1998);
    let ids: Vec<&str> = result.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);

    // Same input against a different year matches nothing from 1998
    let result = filter_tracks_from_year(tracks, 1999);
    let ids: Vec<&str> = result.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["b"]);
}

#[test]
fn test_filter_tracks_from_year_malformed_dates() {
    let tracks = vec![
        create_test_track("empty", "al1", "", 50),
        create_test_track("letters", "al1", "19xx", 50),
        create_test_track("short", "al1", "19", 50),
        create_test_track("ok", "al1", "1998", 50),
    ];

    // Only the well-formed date passes, regardless of target year for the rest
    let result = filter_tracks_from_year(tracks.clone(), 1998);
    let ids: Vec<&str> = result.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["ok"]);

    let result = filter_tracks_from_year(tracks, 1900);
    assert!(result.is_empty());
}

#[test]
fn test_filter_tracks_from_year_dedup_first_seen_wins() {
    let tracks = vec![
        create_test_track("a", "al1", "1998-01-01", 50),
        create_test_track("b", "al1", "1998-02-01", 60),
        create_test_track("a", "al2", "1998-03-01", 70), // duplicate id, later
        create_test_track("c", "al1", "1998-04-01", 40),
    ];

    let result = filter_tracks_from_year(tracks, 1998);

    assert_eq!(result.len(), 3);
    let ids: Vec<&str> = result.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    // First occurrence kept, not merged with the later duplicate
    assert_eq!(result[0].album.id, "al1");
    assert_eq!(result[0].popularity, 50);
}

#[test]
fn test_filter_tracks_from_year_idempotent() {
    let tracks = vec![
        create_test_track("a", "al1", "1998-01-01", 50),
        create_test_track("a", "al1", "1998-01-01", 50),
        create_test_track("b", "al2", "1998-06-15", 60),
        create_test_track("c", "al3", "1997-01-01", 70),
    ];

    let once = filter_tracks_from_year(tracks, 1998);
    let twice = filter_tracks_from_year(once.clone(), 1998);

    let once_ids: Vec<&str> = once.iter().map(|t| t.id.as_str()).collect();
    let twice_ids: Vec<&str> = twice.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(once_ids, twice_ids);
}

#[test]
fn test_filter_playlists_substring_exclusion() {
    let playlists = vec![
        create_test_playlist("p1", "My Workout Mix"),
        create_test_playlist("p2", "Chill Evening"),
        create_test_playlist("p3", "WORKOUT 2024"),
    ];

    // Case-insensitive substring match excludes both workout playlists
    let result = filter_playlists(playlists.clone(), &["workout".to_string()]);
    let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p2"]);

    // A non-matching substring excludes nothing
    let result = filter_playlists(playlists.clone(), &["jogging".to_string()]);
    assert_eq!(result.len(), 3);

    // Empty exclusion list returns the input unchanged
    let result = filter_playlists(playlists.clone(), &[]);
    let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p2", "p3"]);
}

#[test]
fn test_filter_playlists_any_of_multiple_substrings() {
    let playlists = vec![
        create_test_playlist("p1", "Running"),
        create_test_playlist("p2", "Sleep sounds"),
        create_test_playlist("p3", "Focus"),
    ];

    let excluded = vec!["run".to_string(), "sleep".to_string()];
    let result = filter_playlists(playlists, &excluded);
    let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p3"]);
}

#[test]
fn test_short_track_details_projection() {
    let track = create_test_track("a", "al1", "1998-05-05", 73);
    let info = short_track_details(&track);

    assert_eq!(info.track_id, "a");
    assert_eq!(info.track_name, "Track a");
    assert_eq!(info.artists, vec!["Artist a"]);
    assert_eq!(info.album_name, "Album al1");
    assert_eq!(info.release_date, "1998-05-05");
    assert_eq!(info.popularity, 73);
}

#[test]
fn test_sort_by_popularity_desc_stable() {
    let mut tracks = vec![
        create_test_info("low", 10),
        create_test_info("tie1", 50),
        create_test_info("high", 90),
        create_test_info("tie2", 50),
    ];

    sort_by_popularity_desc(&mut tracks);

    let ids: Vec<&str> = tracks.iter().map(|t| t.track_id.as_str()).collect();
    // Equal popularity keeps input order: tie1 before tie2
    assert_eq!(ids, vec!["high", "tie1", "tie2", "low"]);
}

#[test]
fn test_select_diverse_prefers_distinct_albums() {
    // Phase 1 picks one track per album before phase 2 fills from album 1
    let candidates = vec![
        create_test_track("a", "album1", "1998-01-01", 90),
        create_test_track("b", "album1", "1998-01-01", 85),
        create_test_track("c", "album2", "1998-01-01", 80),
    ];

    let policy = DiversityPolicy {
        target_count: 2,
        album_cap: 3,
    };
    let mut seen = HashSet::new();
    let picked = select_diverse(&candidates, policy, &mut seen);

    let ids: Vec<&str> = picked.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn test_select_diverse_respects_album_cap() {
    let candidates: Vec<Track> = (0..6)
        .map(|i| create_test_track(&format!("t{}", i), "one_album", "1998-01-01", 90 - i as u32))
        .collect();

    let policy = DiversityPolicy {
        target_count: 5,
        album_cap: 3,
    };
    let mut seen = HashSet::new();
    let picked = select_diverse(&candidates, policy, &mut seen);

    // Only the cap's worth of tracks from a single album, even with slots left
    assert_eq!(picked.len(), 3);
    let ids: Vec<&str> = picked.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t0", "t1", "t2"]);
}

#[test]
fn test_select_diverse_fill_phase_reaches_target() {
    let candidates = vec![
        create_test_track("a", "album1", "1998-01-01", 90),
        create_test_track("b", "album1", "1998-01-01", 85),
        create_test_track("c", "album2", "1998-01-01", 80),
        create_test_track("d", "album2", "1998-01-01", 75),
    ];

    let policy = DiversityPolicy {
        target_count: 4,
        album_cap: 3,
    };
    let mut seen = HashSet::new();
    let picked = select_diverse(&candidates, policy, &mut seen);

    // Phase 1: a, c. Phase 2 fills b, d in rank order.
    let ids: Vec<&str> = picked.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c", "b", "d"]);
}

#[test]
fn test_select_diverse_skips_already_seen() {
    let candidates = vec![
        create_test_track("a", "album1", "1998-01-01", 90),
        create_test_track("b", "album2", "1998-01-01", 85),
    ];

    let mut seen: HashSet<String> = HashSet::new();
    seen.insert("a".to_string());

    let picked = select_diverse(&candidates, DiversityPolicy::default(), &mut seen);

    let ids: Vec<&str> = picked.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["b"]);
    // The selection feeds the shared seen-set
    assert!(seen.contains("b"));
}

#[test]
fn test_select_diverse_cross_invocation_dedup() {
    let candidates = vec![
        create_test_track("a", "album1", "1998-01-01", 90),
        create_test_track("b", "album2", "1998-01-01", 85),
        create_test_track("c", "album3", "1998-01-01", 80),
    ];

    let policy = DiversityPolicy {
        target_count: 2,
        album_cap: 3,
    };
    let mut seen = HashSet::new();

    let first = select_diverse(&candidates, policy, &mut seen);
    let second = select_diverse(&candidates, policy, &mut seen);

    let first_ids: Vec<&str> = first.iter().map(|t| t.id.as_str()).collect();
    let second_ids: Vec<&str> = second.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(first_ids, vec!["a", "b"]);
    // A second seed sharing the candidate pool only gets the leftovers
    assert_eq!(second_ids, vec!["c"]);
}

#[test]
fn test_select_diverse_short_or_empty_input() {
    let policy = DiversityPolicy {
        target_count: 5,
        album_cap: 3,
    };

    let mut seen = HashSet::new();
    let picked = select_diverse(&[], policy, &mut seen);
    assert!(picked.is_empty());

    let candidates = vec![create_test_track("a", "album1", "1998-01-01", 90)];
    let mut seen = HashSet::new();
    let picked = select_diverse(&candidates, policy, &mut seen);
    assert_eq!(picked.len(), 1);
}

#[test]
fn test_select_diverse_deterministic() {
    let candidates = vec![
        create_test_track("a", "album1", "1998-01-01", 90),
        create_test_track("b", "album1", "1998-01-01", 90), // popularity tie
        create_test_track("c", "album2", "1998-01-01", 80),
    ];

    let policy = DiversityPolicy {
        target_count: 3,
        album_cap: 2,
    };

    let run = |candidates: &[Track]| {
        let mut seen = HashSet::new();
        select_diverse(candidates, policy, &mut seen)
            .iter()
            .map(|t| t.id.clone())
            .collect::<Vec<_>>()
    };

    assert_eq!(run(&candidates), run(&candidates));
    // Tie between a and b resolves to input order: a in phase 1, b in phase 2
    assert_eq!(run(&candidates), vec!["a", "c", "b"]);
}

#[test]
fn test_project_and_rank() {
    let tracks = vec![
        create_test_track("a", "al1", "1998-01-01", 30),
        create_test_track("b", "al1", "1997-01-01", 90),
        create_test_track("c", "al2", "1998-06-01", 80),
        create_test_track("a", "al1", "1998-01-01", 30),
    ];

    let result = project_and_rank(tracks, 1998);

    // 1997 dropped, duplicate dropped, remaining sorted by popularity desc
    let ids: Vec<&str> = result.iter().map(|t| t.track_id.as_str()).collect();
    assert_eq!(ids, vec!["c", "a"]);
}

#[test]
fn test_dedup_against_seen_disjointness() {
    let on_playlists = vec![create_test_info("p1", 90), create_test_info("p2", 80)];
    let liked = vec![create_test_info("l1", 70)];

    let mut seen: HashSet<String> = on_playlists
        .iter()
        .chain(liked.iter())
        .map(|t| t.track_id.clone())
        .collect();

    let suggestions_all = vec![
        create_test_info("p1", 95), // already on a playlist
        create_test_info("s1", 85),
        create_test_info("l1", 75), // already liked
        create_test_info("s2", 65),
        create_test_info("s1", 60), // duplicate suggestion
    ];

    let suggestions = dedup_against_seen(&mut seen, suggestions_all);

    let ids: Vec<&str> = suggestions.iter().map(|t| t.track_id.as_str()).collect();
    assert_eq!(ids, vec!["s1", "s2"]);

    // Pairwise disjoint across the three lists
    let playlist_ids: HashSet<&str> = on_playlists.iter().map(|t| t.track_id.as_str()).collect();
    let liked_ids: HashSet<&str> = liked.iter().map(|t| t.track_id.as_str()).collect();
    for suggestion in &suggestions {
        assert!(!playlist_ids.contains(suggestion.track_id.as_str()));
        assert!(!liked_ids.contains(suggestion.track_id.as_str()));
    }
}

#[test]
fn test_track_uri_batches_chunking() {
    let tracks: Vec<TrackInfo> = (0..250)
        .map(|i| create_test_info(&format!("id{}", i), 50))
        .collect();

    let batches = track_uri_batches(&tracks);

    let sizes: Vec<usize> = batches.iter().map(|b| b.len()).collect();
    assert_eq!(sizes, vec![100, 100, 50]);
    assert_eq!(PLAYLIST_ADD_BATCH, 100);

    // Original order is preserved across the concatenated batches
    let flattened: Vec<&String> = batches.iter().flatten().collect();
    assert_eq!(flattened[0], "spotify:track:id0");
    assert_eq!(flattened[99], "spotify:track:id99");
    assert_eq!(flattened[100], "spotify:track:id100");
    assert_eq!(flattened[249], "spotify:track:id249");
}

#[test]
fn test_track_uri_batches_small_input() {
    let tracks = vec![create_test_info("only", 50)];
    let batches = track_uri_batches(&tracks);
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0], vec!["spotify:track:only".to_string()]);

    assert!(track_uri_batches(&[]).is_empty());
}
