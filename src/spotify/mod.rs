//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by the
//! year analysis: authentication, paginated data retrieval, search, and
//! playlist management. It abstracts away HTTP requests, OAuth flows, rate
//! limiting, and API quirks behind a clean Rust interface for the higher
//! level analysis logic.
//!
//! ## Architecture
//!
//! The module follows a feature-based organization where each submodule
//! handles a specific domain of Spotify API functionality:
//!
//! ```text
//! Application Layer (CLI, Analysis)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE)
//!     ├── Pagination (next-link draining, retries)
//!     ├── Library Reads (playlists, saved tracks, top artists)
//!     ├── Search (year-scoped track search)
//!     └── Playlist Writes (create, batched track adds)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - OAuth 2.0 PKCE flow: verifier/challenge generation, browser
//!   launch, local callback server, token exchange and refresh.
//! - [`paging`] - Generic page drainer for Spotify's paging objects. The
//!   first page must succeed; a failing continuation degrades to the items
//!   collected so far. Handles 429 `Retry-After` delays and retries 502
//!   responses.
//! - [`playlists`] - User playlists, playlist tracks, playlist creation,
//!   and batched track adds (100 URIs per call, the API's limit).
//! - [`tracks`] - The user's saved ("liked") tracks.
//! - [`artists`] - The user's top artists per affinity time range, used as
//!   suggestion seeds.
//! - [`search`] - Track search scoped to a release year and artist name.
//! - [`users`] - Current-user profile for playlist ownership and report
//!   naming.
//!
//! ## Error Handling
//!
//! All functions return [`crate::Res`]. Rate limited requests (429) sleep
//! for the `Retry-After` duration before retrying; transient 502 responses
//! are retried after a fixed delay. Other HTTP errors are propagated to the
//! caller. No operation is otherwise retried; callers decide whether a
//! failure is fatal to their larger operation.
//!
//! ## API Coverage
//!
//! - `GET /me/playlists` - user playlists with pagination
//! - `GET /playlists/{id}/tracks` - playlist tracks with pagination
//! - `GET /me/tracks` - saved tracks with pagination
//! - `GET /me/top/artists` - top artists per time range
//! - `GET /search` - ranked track search
//! - `GET /me` - current-user profile
//! - `POST /users/{user_id}/playlists` - create playlist
//! - `POST /playlists/{playlist_id}/tracks` - add tracks (batched)
//! - `POST /api/token` - token exchange and refresh

pub mod artists;
pub mod auth;
pub mod paging;
pub mod playlists;
pub mod search;
pub mod tracks;
pub mod users;
