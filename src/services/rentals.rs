//! Services exposing rental listings.

use crate::domain::filter::RentalFilter;
use crate::domain::rental::Rental;
use crate::domain::types::RentalId;
use crate::pagination::Paginated;
use crate::repository::RentalReader;
use crate::services::{ServiceError, ServiceResult};

/// Fetches a single rental by its raw identifier.
pub fn get_rental_by_id<R>(repo: &R, rental_id: i32) -> ServiceResult<Rental>
where
    R: RentalReader + ?Sized,
{
    let rental_id = RentalId::new(rental_id)?;

    repo.get_rental_by_id(rental_id)?
        .ok_or(ServiceError::NotFound)
}

/// Returns every rental without filtering or pagination.
///
/// Library-level operation; no route exposes it.
pub fn list_all_rentals<R>(repo: &R) -> ServiceResult<Vec<Rental>>
where
    R: RentalReader + ?Sized,
{
    repo.list_all_rentals().map_err(ServiceError::from)
}

/// Returns one page of rentals matching `filter` wrapped with its paginator.
pub fn list_rentals<R>(repo: &R, filter: &RentalFilter) -> ServiceResult<Paginated<Rental>>
where
    R: RentalReader + ?Sized,
{
    let (total, rentals) = repo.list_rentals(filter)?;

    Ok(Paginated::new(filter, total, rentals, |rental| rental))
}
