//! # CLI Module
//!
//! The command-line interface layer for spanlcli. It implements all
//! user-facing commands and coordinates between the Spotify API layer, the
//! analysis engine, and user interaction.
//!
//! ## Commands
//!
//! ### Authentication
//!
//! - [`auth`] - Initiates the Spotify OAuth authentication flow with PKCE
//!   security
//!
//! ### Year Analysis
//!
//! - [`analyze`] - Full year analysis: playlist tracks, liked tracks, and
//!   suggestions reconciled into three disjoint lists, with optional JSON
//!   report saving and playlist materialization
//! - [`playlist_tracks`] - Tracks on the user's playlists from a year,
//!   with name-based playlist exclusion
//! - [`liked`] - Liked songs from a year
//! - [`suggestions`] - Suggested tracks for a year, built from the user's
//!   top artists
//!
//! ## Design
//!
//! Each command follows the same shape: load the cached token (directing
//! the user to `spanlcli auth` when missing), fetch and transform with
//! progress feedback via `indicatif`, render a `tabled` table, and
//! optionally persist a JSON report. Errors at this boundary map to the
//! colored output macros; `error!` terminates the process, `warning!`
//! degrades.

mod auth;
mod year;

pub use auth::auth;
pub use year::analyze;
pub use year::liked;
pub use year::playlist_tracks;
pub use year::suggestions;
