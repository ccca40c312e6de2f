use std::collections::HashSet;

use crate::{
    Res,
    analysis::diversity::{self, DiversityPolicy},
    info, spotify,
    types::{Artist, Track},
};

/// How many top artists to pool per affinity time range.
pub const TOP_ARTISTS_LIMIT: u32 = 25;

/// How many search results to rank per seed artist.
pub const SEARCH_RESULT_LIMIT: u32 = 50;

/// Artists with this term in any genre are left out of the seed pool.
const EXCLUDED_GENRE_TERM: &str = "classical";

/// Pools the user's top artists across all affinity time ranges.
///
/// Artists are deduplicated by id across the ranges (first range wins) and
/// artists with a classical genre tag are excluded during pooling. A
/// failing top-artists fetch for any range aborts the pooling.
pub async fn top_artist_pool(token: &str) -> Res<Vec<Artist>> {
    let mut pool: Vec<Artist> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for time_range in spotify::artists::TIME_RANGES {
        let artists = spotify::artists::get_top_artists(token, time_range, TOP_ARTISTS_LIMIT).await?;

        for artist in artists {
            let excluded = artist
                .genres
                .iter()
                .any(|genre| genre.to_lowercase().contains(EXCLUDED_GENRE_TERM));
            if excluded {
                continue;
            }

            if seen.insert(artist.id.clone()) {
                pool.push(artist);
            }
        }
    }

    info!("Pooled {} top artists as suggestion seeds", pool.len());
    Ok(pool)
}

/// Builds the suggestion pool for a year.
///
/// For each pooled seed artist, in pool order: searches for tracks of that
/// artist released in `year`, ranks the results by popularity descending
/// (stable on ties), and runs the diversity selection against the ranked
/// list with a seen-set shared across all seeds, so no track is suggested
/// twice even when artists collaborate.
///
/// A failing search for any seed is a hard error that aborts the whole
/// operation. That asymmetry with the tolerant pagination is deliberate: a
/// partial listing is still useful, a half-built suggestion pool is not.
pub async fn suggested_tracks_from_year(token: &str, year: i32) -> Res<Vec<Track>> {
    let mut suggestions: Vec<Track> = Vec::new();
    let mut seen_tracks: HashSet<String> = HashSet::new();

    let seed_artists = top_artist_pool(token).await?;

    for artist in &seed_artists {
        info!("Searching {} tracks for artist {}", year, artist.name);

        let query = format!("year:{} artist:{}", year, artist.name);
        let mut tracks = spotify::search::search_tracks(token, &query, SEARCH_RESULT_LIMIT).await?;
        tracks.sort_by(|a, b| b.popularity.cmp(&a.popularity));

        let picked = diversity::select_diverse(&tracks, DiversityPolicy::default(), &mut seen_tracks);
        suggestions.extend(picked);
    }

    Ok(suggestions)
}
