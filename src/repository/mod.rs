use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{filter::RentalFilter, rental::Rental, types::RentalId},
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod logging;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod rental;

pub use logging::LoggingRepository;

/// Repository stack used by the HTTP server.
pub type AppRepository = LoggingRepository<DieselRepository>;

/// Diesel-backed repository sharing one SQLite connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

/// Read access to rental listings.
pub trait RentalReader {
    fn get_rental_by_id(&self, id: RentalId) -> RepositoryResult<Option<Rental>>;
    fn list_all_rentals(&self) -> RepositoryResult<Vec<Rental>>;
    /// Returns the number of rows matching the filter's selection together
    /// with the requested page of those rows.
    fn list_rentals(&self, filter: &RentalFilter) -> RepositoryResult<(usize, Vec<Rental>)>;
}
