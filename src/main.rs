use std::sync::Arc;

use clap::{
    ArgAction, CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spanlcli::{cli, config, error, types::PkceToken};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Full year analysis: playlist, liked, and suggested tracks
    Analyze(AnalyzeOptions),

    /// Tracks on your playlists from a year
    Playlists(PlaylistTracksOptions),

    /// Liked songs from a year
    Liked(LikedOptions),

    /// Suggested tracks for a year, based on your top artists
    Suggestions(SuggestionsOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AnalyzeOptions {
    /// Year to analyze (matched against release dates)
    pub year: i32,

    /// Exclude playlists whose name contains this substring; can be repeated
    #[clap(long = "ignore", action = ArgAction::Append, num_args = 1)]
    pub ignore: Vec<String>,

    /// Save the result as a JSON report
    #[clap(long)]
    pub save: bool,

    /// Create "<year> - favourites" and "<year> - suggestions" playlists
    #[clap(long)]
    pub make_playlists: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistTracksOptions {
    /// Year to filter by
    pub year: i32,

    /// Exclude playlists whose name contains this substring; can be repeated
    #[clap(long = "ignore", action = ArgAction::Append, num_args = 1)]
    pub ignore: Vec<String>,

    /// Save the result as a JSON report
    #[clap(long)]
    pub save: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct LikedOptions {
    /// Year to filter by
    pub year: i32,

    /// Save the result as a JSON report
    #[clap(long)]
    pub save: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct SuggestionsOptions {
    /// Year to suggest tracks from
    pub year: i32,

    /// Save the result as a JSON report
    #[clap(long)]
    pub save: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Analyze(opt) => {
            cli::analyze(opt.year, opt.ignore, opt.save, opt.make_playlists).await
        }
        Command::Playlists(opt) => cli::playlist_tracks(opt.year, opt.ignore, opt.save).await,
        Command::Liked(opt) => cli::liked(opt.year, opt.save).await,
        Command::Suggestions(opt) => cli::suggestions(opt.year, opt.save).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
