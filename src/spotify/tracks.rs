use crate::{
    Res, config, info,
    spotify::paging,
    types::{SavedTrackItem, Track},
};

/// Retrieves every saved ("liked") track of the authenticated user.
///
/// Drains the paginated `/me/tracks` listing and flattens the saved-track
/// wrappers. Only a failing first page is an error; a failing continuation
/// degrades to the tracks collected so far.
pub async fn get_saved_tracks(token: &str) -> Res<Vec<Track>> {
    let api_url = format!("{uri}/me/tracks?limit=50", uri = &config::spotify_apiurl());

    let items: Vec<SavedTrackItem> = paging::fetch_all_pages(token, &api_url).await?;
    let tracks: Vec<Track> = items.into_iter().map(|item| item.track).collect();

    info!("Fetched {} saved tracks", tracks.len());
    Ok(tracks)
}
