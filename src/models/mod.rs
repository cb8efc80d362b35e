//! Database models backing the rentals repository.

#[cfg(feature = "server")]
pub mod config;
pub mod rental;
