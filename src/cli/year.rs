use std::time::Duration;

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    analysis::{pipeline, pipeline::AnalyzeRequest, suggest},
    error, info,
    management::{ReportManager, TokenManager},
    spotify, success,
    types::{TrackInfo, TrackTableRow},
    utils, warning,
};

pub async fn analyze(year: i32, ignore: Vec<String>, save: bool, make_playlists: bool) {
    let token = load_token().await;

    let request = AnalyzeRequest {
        year,
        ignored_playlists: ignore,
        save,
        make_playlists,
    };

    let pb = spinner(format!("Running year analysis for {}...", year));
    let analysis = match pipeline::run_year_analysis(&token, &request).await {
        Ok(analysis) => {
            pb.finish_and_clear();
            analysis
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Year analysis for {} failed: {}", year, e);
        }
    };

    info!("Tracks on playlists from {}", year);
    print_tracks(&analysis.on_playlists);
    info!("Liked tracks from {}", year);
    print_tracks(&analysis.liked);
    info!("Suggested tracks from {}", year);
    print_tracks(&analysis.suggestions);

    if request.make_playlists {
        if let Err(e) = pipeline::materialize_playlists(&token, year, &analysis).await {
            error!("Failed to create playlists for {}: {}", year, e);
        }
    }
}

pub async fn playlist_tracks(year: i32, ignore: Vec<String>, save: bool) {
    let token = load_token().await;

    let pb = spinner(format!("Fetching playlist tracks from {}...", year));
    let tracks = match pipeline::collect_playlist_tracks(&token, &ignore).await {
        Ok(tracks) => {
            pb.finish_and_clear();
            tracks
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch playlist tracks: {}", e);
        }
    };

    let result = pipeline::project_and_rank(tracks, year);
    print_tracks(&result);

    if save {
        save_report("playlist_songs", year, &token, &result).await;
    }
}

pub async fn liked(year: i32, save: bool) {
    let token = load_token().await;

    let pb = spinner(format!("Fetching liked tracks from {}...", year));
    let tracks = match spotify::tracks::get_saved_tracks(&token).await {
        Ok(tracks) => {
            pb.finish_and_clear();
            tracks
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch liked tracks: {}", e);
        }
    };

    let result = pipeline::project_and_rank(tracks, year);
    print_tracks(&result);

    if save {
        save_report("liked_songs", year, &token, &result).await;
    }
}

pub async fn suggestions(year: i32, save: bool) {
    let token = load_token().await;

    let pb = spinner(format!("Building suggestions for {}...", year));
    let tracks = match suggest::suggested_tracks_from_year(&token, year).await {
        Ok(tracks) => {
            pb.finish_and_clear();
            tracks
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to build suggestions: {}", e);
        }
    };

    let result = pipeline::project_and_rank(tracks, year);
    print_tracks(&result);

    if save {
        save_report("suggested_songs", year, &token, &result).await;
    }
}

async fn load_token() -> String {
    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run spanlcli auth\n Error: {}",
                e
            );
        }
    };

    token_mgr.get_valid_token().await
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

fn print_tracks(tracks: &[TrackInfo]) {
    if tracks.is_empty() {
        info!("No tracks found.");
        return;
    }

    let rows: Vec<TrackTableRow> = tracks
        .iter()
        .map(|t| TrackTableRow {
            name: t.track_name.clone(),
            artists: t.artists.join(", "),
            album: t.album_name.clone(),
            released: t.release_date.clone(),
            popularity: t.popularity,
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
}

async fn save_report(prefix: &str, year: i32, token: &str, result: &[TrackInfo]) {
    let username = pipeline::fetch_username(token).await;
    let name = format!(
        "{}_{}_{}_{}",
        prefix,
        year,
        utils::sanitize_filename_component(&username),
        utils::sanitize_filename_component(&Utc::now().to_rfc3339())
    );

    match ReportManager::new(name).save(&result.to_vec()).await {
        Ok(path) => success!("Saved report to {}", path.display()),
        Err(e) => warning!("Failed to save report: {}", e),
    }
}
