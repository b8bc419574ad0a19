//! Domain layer containing business entities and contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_event`] - Click tracking event model
//! - [`click_worker`] - Asynchronous click recording worker
//!
//! # Click Processing Flow
//!
//! 1. The redirect path resolves a code and sends a
//!    [`click_event::ClickEvent`] to a bounded channel (non-blocking)
//! 2. [`click_worker::run_click_worker`] drains the channel
//! 3. Each event becomes a click-log row plus a counter increment via
//!    [`repositories::ClickRepository`]

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;
