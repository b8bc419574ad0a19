//! Infrastructure layer for external integrations.
//!
//! Implements the contracts defined by the domain layer:
//!
//! - [`cache`] - Caching abstractions (Redis and no-op implementations)
//! - [`persistence`] - PostgreSQL repository implementations

pub mod cache;
pub mod persistence;
