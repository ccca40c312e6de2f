use std::{future::Future, time::Duration};

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::time::sleep;

use crate::{Res, types::Page, warning};

/// Performs an authenticated GET request and deserializes the JSON body.
///
/// Shared request primitive for all read endpoints. The function handles
/// the two transient conditions the Spotify API is known for:
///
/// - **429 Too Many Requests**: sleeps for the `Retry-After` duration and
///   retries. Delays above 120 seconds are not honored; a warning is
///   printed and the rate-limit error is propagated instead.
/// - **502 Bad Gateway**: retried after a 10-second delay.
///
/// All other HTTP errors are propagated immediately via `error_for_status`.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `url` - Fully composed request URL including query parameters
pub async fn get_json<T: DeserializeOwned>(token: &str, url: &str) -> Result<T, reqwest::Error> {
    loop {
        let client = Client::new();
        let response = client.get(url).bearer_auth(token).send().await?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(0);
            if retry_after <= 120 {
                sleep(Duration::from_secs(retry_after)).await;
                continue;
            }
            warning!(
                "Retry after has reached an abnormal high of {} seconds. Try again tomorrow.",
                retry_after
            );
        }

        let response = match response.error_for_status() {
            Ok(valid_response) => valid_response,
            Err(err) => {
                if let Some(status) = err.status() {
                    if status == StatusCode::BAD_GATEWAY {
                        sleep(Duration::from_secs(10)).await;
                        continue; // retry
                    }
                }
                return Err(err); // propagate other errors
            }
        };

        return response.json::<T>().await;
    }
}

/// Drains a paginated listing through a caller-supplied page fetch.
///
/// `fetch_page` is invoked with `first_url` and then with each `next` link
/// until a page carries no `next` (the listing is exhausted). Items are
/// returned flattened, in original page and item order. [`fetch_all_pages`]
/// instantiates this with the HTTP-backed [`get_json`]; taking the fetch as
/// a parameter keeps the draining logic independent of the transport.
///
/// # Partial-Failure Tolerance
///
/// Only the first page fetch propagates its error, since without it there
/// is nothing to return. A failing continuation is logged as a warning and
/// the items collected so far are returned as a (possibly partial) success.
/// This keeps one broken page from aborting a larger aggregation.
pub async fn drain_pages<T, F, Fut, E>(first_url: &str, mut fetch_page: F) -> Result<Vec<T>, E>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>>,
    E: std::fmt::Display,
{
    let first = fetch_page(first_url.to_string()).await?;

    let mut items = first.items;
    let mut next = first.next;

    while let Some(url) = next {
        match fetch_page(url).await {
            Ok(page) => {
                items.extend(page.items);
                next = page.next;
            }
            Err(e) => {
                warning!(
                    "Failed to fetch next page, keeping {} items collected so far: {}",
                    items.len(),
                    e
                );
                break;
            }
        }
    }

    Ok(items)
}

/// Drains every page of a paginated Spotify listing over HTTP.
///
/// The standard instantiation of [`drain_pages`]: every page is fetched
/// with [`get_json`], so the retry handling described there applies per
/// page.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `first_url` - URL of the first page, including `limit` and any filters
///
/// # Example
///
/// ```
/// let url = format!("{}/me/playlists?limit=50", config::spotify_apiurl());
/// let playlists: Vec<Playlist> = fetch_all_pages(&token, &url).await?;
/// ```
pub async fn fetch_all_pages<T: DeserializeOwned>(token: &str, first_url: &str) -> Res<Vec<T>> {
    let items = drain_pages(first_url, |url| async move {
        get_json::<Page<T>>(token, &url).await
    })
    .await?;
    Ok(items)
}
