use std::collections::HashSet;

use crate::{
    Res,
    analysis::{filter, suggest},
    management::ReportManager,
    spotify, success,
    types::{Track, TrackInfo, YearAnalysis},
    warning,
};

/// The Spotify API accepts at most this many track URIs per add call.
pub const PLAYLIST_ADD_BATCH: usize = 100;

/// Playlist track listings fetched in parallel at a time.
const PLAYLIST_FETCH_CONCURRENCY: usize = 5;

/// Configuration for one full year analysis run.
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    pub year: i32,
    pub ignored_playlists: Vec<String>,
    pub save: bool,
    pub make_playlists: bool,
}

/// Year-filters, projects, and popularity-ranks one raw track branch.
pub fn project_and_rank(tracks: Vec<Track>, year: i32) -> Vec<TrackInfo> {
    let filtered = filter::filter_tracks_from_year(tracks, year);
    let mut result: Vec<TrackInfo> = filtered.iter().map(filter::short_track_details).collect();
    filter::sort_by_popularity_desc(&mut result);
    result
}

/// Keeps only tracks whose id is not yet in `seen`, in order, inserting
/// accepted ids as it goes. The suggestion list passes through this after
/// `seen` was seeded with every playlist and liked track id, which is what
/// makes the three result lists pairwise disjoint.
pub fn dedup_against_seen(seen: &mut HashSet<String>, tracks: Vec<TrackInfo>) -> Vec<TrackInfo> {
    let mut result = Vec::with_capacity(tracks.len());
    for track in tracks {
        if seen.insert(track.track_id.clone()) {
            result.push(track);
        }
    }
    result
}

/// Splits tracks into `spotify:track:` URI batches of at most
/// [`PLAYLIST_ADD_BATCH`] entries, preserving order across batches.
pub fn track_uri_batches(tracks: &[TrackInfo]) -> Vec<Vec<String>> {
    tracks
        .chunks(PLAYLIST_ADD_BATCH)
        .map(|chunk| {
            chunk
                .iter()
                .map(|t| format!("spotify:track:{}", t.track_id))
                .collect()
        })
        .collect()
}

/// Collects the tracks of every non-excluded playlist of the user.
///
/// Playlist listings are fetched in bounded batches of spawned tasks; a
/// failing playlist degrades to the others with a warning rather than
/// aborting the whole branch. Only the initial playlist listing itself is
/// a hard error.
pub async fn collect_playlist_tracks(token: &str, excluded_substrings: &[String]) -> Res<Vec<Track>> {
    let playlists = spotify::playlists::get_user_playlists(token).await?;
    let playlists = filter::filter_playlists(playlists, excluded_substrings);

    let mut all_tracks: Vec<Track> = Vec::new();

    for batch in playlists.chunks(PLAYLIST_FETCH_CONCURRENCY) {
        let mut handles = Vec::new();

        for playlist in batch {
            let token = token.to_string();
            let playlist = playlist.clone();
            handles.push(tokio::spawn(async move {
                let tracks = spotify::playlists::get_playlist_tracks(&token, &playlist).await;
                (playlist, tracks)
            }));
        }

        for handle in handles {
            match handle.await {
                Ok((_, Ok(tracks))) => all_tracks.extend(tracks),
                Ok((playlist, Err(e))) => {
                    warning!("Failed to fetch tracks for playlist {}: {}", playlist.name, e)
                }
                Err(e) => warning!("Task join error: {}", e),
            }
        }
    }

    Ok(all_tracks)
}

/// Runs the full year analysis: three concurrent fetch branches reconciled
/// into three disjoint, popularity-ranked track lists.
///
/// The playlist, liked, and suggestion branches have no data dependency on
/// each other and run concurrently; the suggestion dedup is the join point
/// that must wait for the first two. A failing branch fails the whole
/// analysis. When `save` is requested, the triple is written as a JSON
/// report named after the year and the user; a failing save is logged and
/// does not affect the returned result.
///
/// Playlist materialization is a separate step (see
/// [`materialize_playlists`]) so a materialization failure cannot discard
/// an already-computed analysis.
pub async fn run_year_analysis(token: &str, request: &AnalyzeRequest) -> Res<YearAnalysis> {
    let (playlist_tracks, saved_tracks, suggested_tracks) = tokio::join!(
        collect_playlist_tracks(token, &request.ignored_playlists),
        spotify::tracks::get_saved_tracks(token),
        suggest::suggested_tracks_from_year(token, request.year),
    );

    let on_playlists = project_and_rank(playlist_tracks?, request.year);
    let liked = project_and_rank(saved_tracks?, request.year);

    let mut seen: HashSet<String> = on_playlists
        .iter()
        .chain(liked.iter())
        .map(|t| t.track_id.clone())
        .collect();

    let suggestions = dedup_against_seen(&mut seen, project_and_rank(suggested_tracks?, request.year));

    let analysis = YearAnalysis {
        on_playlists,
        liked,
        suggestions,
    };

    if request.save {
        let username = fetch_username(token).await;
        let name = format!(
            "year_analysis_{}_{}",
            request.year,
            crate::utils::sanitize_filename_component(&username)
        );
        match ReportManager::new(name).save(&analysis).await {
            Ok(path) => success!("Saved analysis report to {}", path.display()),
            Err(e) => warning!("Failed to save analysis report: {}", e),
        }
    }

    Ok(analysis)
}

/// Materializes an analysis back into Spotify as two new playlists.
///
/// Creates "{year} - favourites" holding the playlist and liked tracks
/// (disjoint by construction, so plain concatenation) and
/// "{year} - suggestions" holding the suggestions, then adds the tracks in
/// batches of 100 in original order. A failing playlist creation aborts
/// the remaining materialization and is surfaced to the caller; a failing
/// batch add is logged and the remaining batches continue.
pub async fn materialize_playlists(token: &str, year: i32, analysis: &YearAnalysis) -> Res<()> {
    let user = spotify::users::get_current_user(token).await?;

    let mut favourites: Vec<TrackInfo> = analysis.on_playlists.clone();
    favourites.extend(analysis.liked.iter().cloned());

    let fav_playlist = spotify::playlists::create(
        token,
        &user.id,
        &format!("{} - favourites", year),
        &format!("Generated playlist of favourites for {}", year),
    )
    .await?;

    let sug_playlist = spotify::playlists::create(
        token,
        &user.id,
        &format!("{} - suggestions", year),
        &format!("Generated playlist of suggested tracks for {}", year),
    )
    .await?;

    add_in_batches(token, &fav_playlist.id, &favourites).await;
    add_in_batches(token, &sug_playlist.id, &analysis.suggestions).await;

    success!(
        "Created playlists \"{} - favourites\" ({} tracks) and \"{} - suggestions\" ({} tracks)",
        year,
        favourites.len(),
        year,
        analysis.suggestions.len()
    );
    Ok(())
}

async fn add_in_batches(token: &str, playlist_id: &str, tracks: &[TrackInfo]) {
    for batch in track_uri_batches(tracks) {
        if let Err(e) = spotify::playlists::add_tracks(token, playlist_id, batch).await {
            warning!("Failed to add a track batch to playlist {}: {}", playlist_id, e);
        }
    }
}

/// Resolves the current user's display name, degrading to an empty string
/// with a warning when the profile lookup fails.
pub async fn fetch_username(token: &str) -> String {
    match spotify::users::get_current_user(token).await {
        Ok(user) => {
            if user.display_name.is_empty() {
                user.id
            } else {
                user.display_name.replace(' ', "_")
            }
        }
        Err(e) => {
            warning!("Failed to fetch user profile: {}", e);
            String::new()
        }
    }
}
