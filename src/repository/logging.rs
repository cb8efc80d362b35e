//! Decorator that logs every repository call.

use crate::domain::{filter::RentalFilter, rental::Rental, types::RentalId};
use crate::repository::{RentalReader, errors::RepositoryResult};

/// Wraps another [`RentalReader`] and reports calls at debug level and
/// failures at error level.
#[derive(Clone)]
pub struct LoggingRepository<R> {
    inner: R,
}

impl<R> LoggingRepository<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

fn logged<T>(operation: &str, result: RepositoryResult<T>) -> RepositoryResult<T> {
    match &result {
        Ok(_) => log::debug!("{operation} completed"),
        Err(e) => log::error!("{operation} failed: {e}"),
    }
    result
}

impl<R: RentalReader> RentalReader for LoggingRepository<R> {
    fn get_rental_by_id(&self, id: RentalId) -> RepositoryResult<Option<Rental>> {
        log::debug!("get_rental_by_id called with id={id}");
        logged("get_rental_by_id", self.inner.get_rental_by_id(id))
    }

    fn list_all_rentals(&self) -> RepositoryResult<Vec<Rental>> {
        log::debug!("list_all_rentals called");
        logged("list_all_rentals", self.inner.list_all_rentals())
    }

    fn list_rentals(&self, filter: &RentalFilter) -> RepositoryResult<(usize, Vec<Rental>)> {
        log::debug!("list_rentals called with filter [{filter}]");
        logged("list_rentals", self.inner.list_rentals(filter))
    }
}
