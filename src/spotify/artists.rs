use crate::{
    Res, config,
    spotify::paging,
    types::{Artist, Page},
};

/// Affinity time ranges offered by the top-items endpoint.
pub const TIME_RANGES: [&str; 3] = ["short_term", "medium_term", "long_term"];

/// Retrieves the authenticated user's top artists for one affinity window.
///
/// Issues a single `/me/top/artists` request; the suggestion pool only
/// needs the first page per time range, so no continuation is followed.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `time_range` - One of `short_term`, `medium_term`, `long_term`
/// * `limit` - Maximum number of artists to return (1-50)
pub async fn get_top_artists(token: &str, time_range: &str, limit: u32) -> Res<Vec<Artist>> {
    let api_url = format!(
        "{uri}/me/top/artists?time_range={time_range}&limit={limit}",
        uri = &config::spotify_apiurl(),
        time_range = time_range,
        limit = limit
    );

    let page: Page<Artist> = paging::get_json(token, &api_url).await?;
    Ok(page.items)
}
