//! HTTP request handlers for API endpoints.

pub mod analytics;
pub mod health;
pub mod redirect;
pub mod shorten;
pub mod stats;

pub use analytics::analytics_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
