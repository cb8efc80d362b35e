//! Domain types exposed by the rentals service layer.

pub mod filter;
pub mod query;
pub mod rental;
pub mod types;
