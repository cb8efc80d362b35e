//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::filter::RentalFilter;
use crate::domain::rental::Rental;
use crate::domain::types::RentalId;
use crate::repository::RentalReader;
use crate::repository::errors::RepositoryResult;

mock! {
    pub Repository {}

    impl RentalReader for Repository {
        fn get_rental_by_id(&self, id: RentalId) -> RepositoryResult<Option<Rental>>;
        fn list_all_rentals(&self) -> RepositoryResult<Vec<Rental>>;
        fn list_rentals(&self, filter: &RentalFilter) -> RepositoryResult<(usize, Vec<Rental>)>;
    }
}
