use reqwest::Client;

use crate::{
    Res, config, info,
    spotify::paging,
    types::{
        AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, CreatePlaylistResponse,
        Playlist, PlaylistItem, Track,
    },
};

/// Retrieves all playlists of the authenticated user.
///
/// Drains the paginated `/me/playlists` listing with the maximum page size.
/// Order is the order Spotify returns (most recently modified first). A
/// failing continuation degrades to the playlists collected so far; only a
/// failing first page is an error.
pub async fn get_user_playlists(token: &str) -> Res<Vec<Playlist>> {
    let api_url = format!(
        "{uri}/me/playlists?limit=50",
        uri = &config::spotify_apiurl()
    );

    let playlists: Vec<Playlist> = paging::fetch_all_pages(token, &api_url).await?;
    info!("Fetched {} playlists", playlists.len());
    Ok(playlists)
}

/// Retrieves every track of a single playlist.
///
/// Drains the paginated `/playlists/{id}/tracks` listing and flattens the
/// item wrappers into tracks. Entries whose track is null or has no id
/// (removed tracks, local files) are dropped during flattening.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `playlist` - The playlist to fetch tracks for
pub async fn get_playlist_tracks(token: &str, playlist: &Playlist) -> Res<Vec<Track>> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks?limit=50",
        uri = &config::spotify_apiurl(),
        id = playlist.id
    );

    let items: Vec<PlaylistItem> = paging::fetch_all_pages(token, &api_url).await?;
    let tracks: Vec<Track> = items
        .into_iter()
        .filter_map(|item| item.track)
        .filter(|t| !t.id.is_empty())
        .collect();

    info!(
        "Fetched {} tracks from playlist {}",
        tracks.len(),
        playlist.name
    );
    Ok(tracks)
}

/// Creates a new private, non-collaborative playlist for a user.
///
/// Issues `POST /users/{user_id}/playlists`. A failure here is a hard error
/// for the caller; there is nothing to add tracks to without a playlist.
///
/// # Arguments
///
/// * `token` - Valid access token with playlist write scope
/// * `user_id` - Spotify id of the playlist owner
/// * `name` - Playlist display name
/// * `description` - Playlist description shown in Spotify clients
pub async fn create(
    token: &str,
    user_id: &str,
    name: &str,
    description: &str,
) -> Res<CreatePlaylistResponse> {
    let api_url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = &config::spotify_apiurl(),
        user_id = user_id
    );

    let body = CreatePlaylistRequest {
        name: name.to_string(),
        description: description.to_string(),
        public: false,
        collaborative: false,
    };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?
        .error_for_status()?;

    let created = response.json::<CreatePlaylistResponse>().await?;
    Ok(created)
}

/// Adds a batch of track URIs to a playlist.
///
/// Issues `POST /playlists/{playlist_id}/tracks`. The Spotify API accepts
/// at most 100 URIs per call; chunking to that limit is the caller's
/// responsibility.
pub async fn add_tracks(
    token: &str,
    playlist_id: &str,
    uris: Vec<String>,
) -> Res<AddTracksResponse> {
    let api_url = format!(
        "{uri}/playlists/{playlist_id}/tracks",
        uri = &config::spotify_apiurl(),
        playlist_id = playlist_id
    );

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&AddTracksRequest { uris })
        .send()
        .await?
        .error_for_status()?;

    let snapshot = response.json::<AddTracksResponse>().await?;
    Ok(snapshot)
}
