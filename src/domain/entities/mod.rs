//! Core domain entities for the shortening service.
//!
//! Entities are plain data structures without business logic:
//!
//! - [`Link`] - A shortened URL mapping with its click counter
//! - [`Click`] - One row of the append-only click log
//! - [`DailyCount`] / [`HourlyCount`] - Time-bucketed aggregates

pub mod click;
pub mod link;

pub use click::{Click, DailyCount, HourlyCount};
pub use link::Link;
