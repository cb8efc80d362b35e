//! Diesel implementation of [`RentalReader`].

use std::collections::{HashMap, HashSet};

use diesel::prelude::*;
use diesel::sqlite::{Sqlite, SqliteConnection};

use crate::{
    db::earth_distance,
    domain::{
        filter::{RentalFilter, SortDirection, SortField},
        query::{Predicate, RentalQuery, View},
        rental::Rental,
        types::RentalId,
    },
    models::rental::{Rental as DbRental, User as DbUser},
    repository::{DieselRepository, RentalReader, errors::RepositoryResult},
    schema::{rentals, users},
};

type BoxedRentals<'a> = rentals::BoxedQuery<'a, Sqlite>;

/// Narrows the row set. Used for both the page and the total count.
fn apply_selection<'a>(mut query: BoxedRentals<'a>, selection: &[Predicate]) -> BoxedRentals<'a> {
    for predicate in selection {
        query = match predicate {
            Predicate::PriceAtLeast(min) => {
                query.filter(rentals::price_per_day.ge(i64::from(*min)))
            }
            Predicate::PriceAtMost(max) => {
                query.filter(rentals::price_per_day.le(i64::from(*max)))
            }
            Predicate::PriceBetween(min, max) => query.filter(
                rentals::price_per_day
                    .ge(i64::from(*min))
                    .and(rentals::price_per_day.le(i64::from(*max))),
            ),
            Predicate::IdIn(ids) => query.filter(rentals::id.eq_any(ids.clone())),
            Predicate::WithinRadius { center, meters } => query.filter(
                earth_distance(rentals::lat, rentals::lng, center.lat, center.lng).le(*meters),
            ),
        };
    }
    query
}

/// Ordering and pagination. Never applied to the count query.
fn apply_view<'a>(mut query: BoxedRentals<'a>, view: &View) -> BoxedRentals<'a> {
    if let Some(limit) = view.limit {
        query = query.limit(i64::from(limit));
    }
    if let Some(offset) = view.offset {
        query = query.offset(i64::from(offset));
    }
    if let Some(sort) = view.sort {
        query = match (sort.field(), sort.direction()) {
            (SortField::Price, SortDirection::Asc) => query.order(rentals::price_per_day.asc()),
            (SortField::Price, SortDirection::Desc) => query.order(rentals::price_per_day.desc()),
            (SortField::Year, SortDirection::Asc) => query.order(rentals::vehicle_year.asc()),
            (SortField::Year, SortDirection::Desc) => query.order(rentals::vehicle_year.desc()),
        };
        // keep pages stable across equal keys
        query = query.then_order_by(rentals::id.asc());
    }
    query
}

impl DieselRepository {
    /// Loads the owners of `rows` with a single `IN` query and joins them in memory.
    fn attach_owners(
        &self,
        conn: &mut SqliteConnection,
        rows: Vec<DbRental>,
    ) -> RepositoryResult<Vec<Rental>> {
        let owner_ids: Vec<i32> = rows
            .iter()
            .map(|r| r.user_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let owners: HashMap<i32, DbUser> = users::table
            .filter(users::id.eq_any(owner_ids))
            .load::<DbUser>(conn)?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(rows
            .into_iter()
            .map(|row| {
                let owner = owners.get(&row.user_id).cloned();
                row.into_domain(owner)
            })
            .collect())
    }
}

impl RentalReader for DieselRepository {
    fn get_rental_by_id(&self, id: RentalId) -> RepositoryResult<Option<Rental>> {
        let mut conn = self.conn()?;

        let Some(row) = rentals::table
            .find(id.get())
            .first::<DbRental>(&mut conn)
            .optional()?
        else {
            return Ok(None);
        };

        let owner = users::table
            .find(row.user_id)
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(Some(row.into_domain(owner)))
    }

    fn list_all_rentals(&self) -> RepositoryResult<Vec<Rental>> {
        let mut conn = self.conn()?;

        let rows = rentals::table
            .order(rentals::id.asc())
            .load::<DbRental>(&mut conn)?;

        self.attach_owners(&mut conn, rows)
    }

    fn list_rentals(&self, filter: &RentalFilter) -> RepositoryResult<(usize, Vec<Rental>)> {
        let query = RentalQuery::from(filter);
        let mut conn = self.conn()?;

        let selected = || apply_selection(rentals::table.into_boxed(), &query.selection);

        // Get the total count before applying pagination
        let total = selected().count().get_result::<i64>(&mut conn)?;

        let rows = apply_view(selected(), &query.view).load::<DbRental>(&mut conn)?;
        let items = self.attach_owners(&mut conn, rows)?;

        Ok((total as usize, items))
    }
}
