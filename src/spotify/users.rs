use crate::{Res, config, spotify::paging, types::UserProfile};

/// Retrieves the authenticated user's profile.
///
/// Used for playlist ownership when materializing results and for naming
/// saved reports. Callers that only need a display name degrade to an
/// empty string when this fails rather than aborting their operation.
pub async fn get_current_user(token: &str) -> Res<UserProfile> {
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());
    let profile: UserProfile = paging::get_json(token, &api_url).await?;
    Ok(profile)
}
