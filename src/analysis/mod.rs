//! # Analysis Module
//!
//! The aggregation, deduplication, and recommendation-diversity engine.
//! This is the core of the application: it merges independently paginated
//! Spotify listings into a single consistent view, filters by release year,
//! removes duplicates across overlapping sources, and selects a diverse,
//! popularity-ranked set of suggestions per seed artist.
//!
//! ## Components
//!
//! - [`filter`] - Pure single-pass transforms: year filtering with
//!   first-seen-wins deduplication, playlist name exclusion, the short
//!   track projection, and popularity ordering.
//! - [`diversity`] - The per-artist selection algorithm. Two greedy phases
//!   over a popularity-sorted candidate list: spread across distinct albums
//!   first, then fill remaining slots by rank, never exceeding the
//!   per-album cap and never re-picking a track another seed already
//!   contributed.
//! - [`suggest`] - Builds the suggestion pool: top artists pooled across
//!   all affinity time ranges (deduplicated, classical artists excluded),
//!   one year-scoped search per artist, ranked and passed through the
//!   diversity selection with a shared seen-set.
//! - [`pipeline`] - The year analysis orchestrator. Runs the three fetch
//!   branches (playlist tracks, liked tracks, suggestions) concurrently,
//!   reconciles them into three disjoint lists via a seen-set seeded with
//!   the known tracks, and provides the playlist materialization step.
//!
//! ## Guarantees
//!
//! - Within each produced list, track ids are unique; the first occurrence
//!   wins and later duplicates are dropped.
//! - A track only passes the year filter when its release date is
//!   non-empty and its first four characters parse to exactly the target
//!   year.
//! - A suggested track id never appears among the playlist or liked
//!   tracks.
//! - Given identical inputs, every transform here is deterministic; ties
//!   in popularity keep their input order.
//!
//! All transforms in this module are synchronous and allocation-only; the
//! async boundaries live in [`suggest`] and [`pipeline`] where Spotify
//! calls are issued.

pub mod diversity;
pub mod filter;
pub mod pipeline;
pub mod suggest;
