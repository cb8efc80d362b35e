pub mod errors;
pub mod rentals;

pub use errors::{ServiceError, ServiceResult};
