//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into application-service calls and formats
//! responses according to the API contracts.
//!
//! - [`dto`] - Data Transfer Objects for serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
