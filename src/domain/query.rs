//! Storage-independent translation of a [`RentalFilter`].
//!
//! The selection stage narrows the row set and is shared by the page query and
//! the total count. The view stage (limit, offset, ordering) is only ever
//! applied to the page query.

use crate::domain::filter::{RentalFilter, Sort};
use crate::domain::types::Coordinates;

/// Radius of the geo filter: 100 miles.
pub const SEARCH_RADIUS_METERS: f64 = 160_934.0;

/// Mean earth radius used by [`haversine_distance`].
pub const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

/// Great-circle distance in meters between two points on a spherical earth.
pub fn haversine_distance(from: Coordinates, to: Coordinates) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_METERS * c
}

/// A single row-filtering condition. Predicates are combined with `AND`.
#[derive(Clone, Debug, PartialEq)]
pub enum Predicate {
    PriceAtLeast(u32),
    PriceAtMost(u32),
    PriceBetween(u32, u32),
    IdIn(Vec<i32>),
    /// Distance from `center` to the row location is `<= meters`.
    WithinRadius { center: Coordinates, meters: f64 },
}

/// Ordering and pagination applied after the selection.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct View {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub sort: Option<Sort>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RentalQuery {
    pub selection: Vec<Predicate>,
    pub view: View,
}

impl From<&RentalFilter> for RentalQuery {
    fn from(filter: &RentalFilter) -> Self {
        let mut selection = Vec::new();

        match (filter.price_min(), filter.price_max()) {
            (Some(min), Some(max)) => selection.push(Predicate::PriceBetween(min, max)),
            (Some(min), None) => selection.push(Predicate::PriceAtLeast(min)),
            (None, Some(max)) => selection.push(Predicate::PriceAtMost(max)),
            (None, None) => {}
        }

        if let Some(ids) = filter.rental_ids() {
            selection.push(Predicate::IdIn(ids.to_vec()));
        }

        if let Some(center) = filter.coordinates() {
            selection.push(Predicate::WithinRadius {
                center,
                meters: SEARCH_RADIUS_METERS,
            });
        }

        Self {
            selection,
            view: View {
                limit: filter.limit(),
                offset: filter.offset(),
                sort: filter.sort(),
            },
        }
    }
}
