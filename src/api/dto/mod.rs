//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization and `validator` for input
//! validation.

pub mod analytics;
pub mod health;
pub mod shorten;
pub mod stats;
