use reqwest::Url;

use crate::{
    Res, config,
    spotify::paging,
    types::{SearchResponse, Track},
};

/// Searches for tracks matching a Spotify search query.
///
/// Issues a single `/search` request of type `track` and returns the ranked
/// result page. Field filters like `year:` and `artist:` are part of the
/// query string; the query is URL-encoded here, callers pass it raw.
///
/// Unlike the paginated listings, a search failure is propagated as-is;
/// the suggestion engine treats it as fatal to the whole suggestion run.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `query` - Raw search query, e.g. `year:1998 artist:Massive Attack`
/// * `limit` - Maximum number of tracks to return (1-50)
pub async fn search_tracks(token: &str, query: &str, limit: u32) -> Res<Vec<Track>> {
    let api_url = Url::parse_with_params(
        &format!("{uri}/search", uri = &config::spotify_apiurl()),
        &[("q", query), ("type", "track"), ("limit", &limit.to_string())],
    )
    .map_err(|e| e.to_string())?;

    let response: SearchResponse = paging::get_json(token, api_url.as_str()).await?;
    Ok(response.tracks.items)
}
