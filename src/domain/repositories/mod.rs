//! Repository trait definitions for the domain layer.
//!
//! Traits define the data-access contract; concrete implementations live in
//! `crate::infrastructure::persistence`. Mocks are auto-generated via
//! `mockall` for unit tests.

pub mod click_repository;
pub mod link_repository;

pub use click_repository::ClickRepository;
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
