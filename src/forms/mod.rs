//! Request decoders backing the rentals routes.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::filter::{FilterError, UnknownSort};

pub mod rentals;

#[derive(Debug, Error)]
/// Errors that can occur when turning request parameters into domain values.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid query string: {0}")]
    Decode(String),

    #[error("invalid ids input: {0}")]
    InvalidIds(String),

    #[error("invalid near input: {0}")]
    InvalidNear(String),

    #[error("invalid sort input: {0}")]
    InvalidSort(#[from] UnknownSort),

    #[error(transparent)]
    Filter(#[from] FilterError),
}
