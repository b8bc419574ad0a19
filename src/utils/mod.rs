//! Utility functions shared across the application.
//!
//! - [`base62`] - Bijective id ↔ short-code encoding
//! - [`url_validator`] - Long-URL syntax validation

pub mod base62;
pub mod url_validator;
