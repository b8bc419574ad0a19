//! Application layer orchestrating domain operations.
//!
//! Services coordinate repository and cache calls behind a clean API
//! consumed by the HTTP handlers:
//!
//! - [`services::LinkService`] - Short link creation (two-phase, write-through)
//! - [`services::RedirectService`] - Cache-aside resolution
//! - [`services::StatsService`] - Stats and time-bucketed analytics

pub mod services;
