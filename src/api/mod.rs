//! # API Module
//!
//! HTTP endpoints for the local callback server used during
//! authentication.
//!
//! - [`callback`] - Handles the OAuth callback from Spotify's authorization
//!   server and completes the PKCE flow by exchanging the authorization
//!   code for an access token.
//! - [`health`] - Basic health check returning application status and
//!   version, useful while the callback server is up.
//!
//! The endpoints are built on [Axum](https://docs.rs/axum) and wired up by
//! [`crate::server::start_api_server`]. The PKCE state is shared with the
//! CLI auth flow through an `Arc<Mutex<_>>` extension.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
