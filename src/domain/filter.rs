//! Validated filter for rental listings.
//!
//! A [`RentalFilter`] can only be obtained through [`RentalFilterBuilder::build`],
//! which is the single place where invariants are checked. Every field is
//! optional and its presence is tracked explicitly, so `0` is a legitimate
//! price, offset or coordinate.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

use crate::domain::types::Coordinates;

/// Errors returned by [`RentalFilterBuilder::build`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FilterError {
    #[error("invalid price range: price_min {min} > price_max {max}")]
    InvalidPriceRange { min: u32, max: u32 },

    #[error("invalid coordinates: {lat},{lng}")]
    InvalidCoordinates { lat: f64, lng: f64 },
}

/// Column a listing can be ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortField {
    Price,
    Year,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Whitelisted orderings. Only these pairs can ever reach the query layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sort {
    PriceAsc,
    PriceDesc,
    YearAsc,
    YearDesc,
}

impl Sort {
    pub const fn field(self) -> SortField {
        match self {
            Sort::PriceAsc | Sort::PriceDesc => SortField::Price,
            Sort::YearAsc | Sort::YearDesc => SortField::Year,
        }
    }

    pub const fn direction(self) -> SortDirection {
        match self {
            Sort::PriceAsc | Sort::YearAsc => SortDirection::Asc,
            Sort::PriceDesc | Sort::YearDesc => SortDirection::Desc,
        }
    }

    /// Canonical token, as accepted by [`Sort::from_str`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Sort::PriceAsc => "price_asc",
            Sort::PriceDesc => "price_desc",
            Sort::YearAsc => "year_asc",
            Sort::YearDesc => "year_desc",
        }
    }
}

impl Display for Sort {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown sort token: {0}")]
pub struct UnknownSort(pub String);

impl FromStr for Sort {
    type Err = UnknownSort;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" | "price_asc" => Ok(Sort::PriceAsc),
            "price_desc" => Ok(Sort::PriceDesc),
            "year" | "year_asc" => Ok(Sort::YearAsc),
            "year_desc" => Ok(Sort::YearDesc),
            other => Err(UnknownSort(other.to_string())),
        }
    }
}

/// Immutable set of constraints used to look up rentals.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RentalFilter {
    price_min: Option<u32>,
    price_max: Option<u32>,
    limit: Option<u32>,
    offset: Option<u32>,
    rental_ids: Vec<i32>,
    coordinates: Option<Coordinates>,
    sort: Option<Sort>,
}

impl RentalFilter {
    pub fn builder() -> RentalFilterBuilder {
        RentalFilterBuilder::default()
    }

    pub fn price_min(&self) -> Option<u32> {
        self.price_min
    }

    pub fn price_max(&self) -> Option<u32> {
        self.price_max
    }

    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    pub fn offset(&self) -> Option<u32> {
        self.offset
    }

    /// The id allow-list. An empty list is reported as absent.
    pub fn rental_ids(&self) -> Option<&[i32]> {
        if self.rental_ids.is_empty() {
            None
        } else {
            Some(&self.rental_ids)
        }
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    pub fn sort(&self) -> Option<Sort> {
        self.sort
    }

    fn validate(&self) -> Result<(), FilterError> {
        if let (Some(min), Some(max)) = (self.price_min, self.price_max)
            && min > max
        {
            return Err(FilterError::InvalidPriceRange { min, max });
        }

        if let Some(coordinates) = self.coordinates
            && !coordinates.is_valid()
        {
            return Err(FilterError::InvalidCoordinates {
                lat: coordinates.lat,
                lng: coordinates.lng,
            });
        }

        Ok(())
    }
}

/// Renders the present fields as `key=value` pairs in alphabetical key order.
impl Display for RentalFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut pairs: Vec<(&str, String)> = Vec::new();

        if let Some(ids) = self.rental_ids() {
            let ids = ids
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            pairs.push(("ids", ids));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(near) = self.coordinates {
            pairs.push(("near", near.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        if let Some(price_max) = self.price_max {
            pairs.push(("priceMax", price_max.to_string()));
        }
        if let Some(price_min) = self.price_min {
            pairs.push(("priceMin", price_min.to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.to_string()));
        }

        for (i, (key, value)) in pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

/// Accumulates optional filter fields; nothing is validated until [`build`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct RentalFilterBuilder {
    filter: RentalFilter,
}

impl RentalFilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_price_min(mut self, price_min: u32) -> Self {
        self.filter.price_min = Some(price_min);
        self
    }

    pub fn with_price_max(mut self, price_max: u32) -> Self {
        self.filter.price_max = Some(price_max);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.filter.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.filter.offset = Some(offset);
        self
    }

    pub fn with_rental_ids(mut self, rental_ids: impl Into<Vec<i32>>) -> Self {
        self.filter.rental_ids = rental_ids.into();
        self
    }

    pub fn with_coordinates(mut self, coordinates: impl Into<Coordinates>) -> Self {
        self.filter.coordinates = Some(coordinates.into());
        self
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.filter.sort = Some(sort);
        self
    }

    /// Validates the accumulated state and returns the finished filter.
    pub fn build(self) -> Result<RentalFilter, FilterError> {
        self.filter.validate()?;
        Ok(self.filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_filter() -> RentalFilter {
        RentalFilter::builder()
            .with_price_min(100)
            .with_price_max(200)
            .with_limit(11)
            .with_offset(22)
            .with_rental_ids(vec![1, 2, 3])
            .with_coordinates((1.23, 4.56))
            .with_sort(Sort::PriceAsc)
            .build()
            .expect("valid filter")
    }

    #[test]
    fn builder_echoes_every_field() {
        let filter = full_filter();

        assert_eq!(filter.price_min(), Some(100));
        assert_eq!(filter.price_max(), Some(200));
        assert_eq!(filter.limit(), Some(11));
        assert_eq!(filter.offset(), Some(22));
        assert_eq!(filter.rental_ids(), Some(&[1, 2, 3][..]));
        assert_eq!(filter.coordinates(), Some(Coordinates::new(1.23, 4.56)));
        assert_eq!(filter.sort(), Some(Sort::PriceAsc));
    }

    #[test]
    fn empty_builder_reports_nothing_present() {
        let filter = RentalFilterBuilder::new().build().unwrap();

        assert_eq!(filter.price_min(), None);
        assert_eq!(filter.price_max(), None);
        assert_eq!(filter.limit(), None);
        assert_eq!(filter.offset(), None);
        assert_eq!(filter.rental_ids(), None);
        assert_eq!(filter.coordinates(), None);
        assert_eq!(filter.sort(), None);
        assert_eq!(filter.to_string(), "");
    }

    #[test]
    fn zero_is_a_present_value() {
        let filter = RentalFilter::builder()
            .with_price_min(0)
            .with_price_max(0)
            .with_offset(0)
            .with_coordinates((0.0, 0.0))
            .build()
            .unwrap();

        assert_eq!(filter.price_min(), Some(0));
        assert_eq!(filter.price_max(), Some(0));
        assert_eq!(filter.offset(), Some(0));
        assert_eq!(filter.coordinates(), Some(Coordinates::new(0.0, 0.0)));
        assert_eq!(filter.limit(), None);
    }

    #[test]
    fn inverted_price_range_fails() {
        let err = RentalFilter::builder()
            .with_price_min(2000)
            .with_price_max(1000)
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            FilterError::InvalidPriceRange {
                min: 2000,
                max: 1000
            }
        );
    }

    #[test]
    fn inverted_price_range_fails_with_other_fields_set() {
        let result = RentalFilter::builder()
            .with_limit(5)
            .with_offset(1)
            .with_rental_ids(vec![4])
            .with_coordinates((10.0, 10.0))
            .with_sort(Sort::YearDesc)
            .with_price_min(11)
            .with_price_max(10)
            .build();

        assert!(matches!(
            result,
            Err(FilterError::InvalidPriceRange { min: 11, max: 10 })
        ));
    }

    #[test]
    fn equal_bounds_are_valid() {
        let filter = RentalFilter::builder()
            .with_price_min(150)
            .with_price_max(150)
            .build()
            .unwrap();
        assert_eq!(filter.price_min(), filter.price_max());
    }

    #[test]
    fn single_bound_is_never_a_range_error() {
        assert!(RentalFilter::builder().with_price_min(u32::MAX).build().is_ok());
        assert!(RentalFilter::builder().with_price_max(0).build().is_ok());
    }

    #[test]
    fn out_of_range_coordinates_fail() {
        let result = RentalFilter::builder()
            .with_coordinates((91.0, 0.0))
            .build();
        assert!(matches!(
            result,
            Err(FilterError::InvalidCoordinates { .. })
        ));
    }

    #[test]
    fn setters_overwrite_previous_values() {
        let filter = RentalFilter::builder()
            .with_price_min(1)
            .with_price_min(2)
            .with_price_max(3)
            .with_price_max(4)
            .with_limit(5)
            .with_limit(6)
            .with_offset(7)
            .with_offset(8)
            .with_rental_ids(vec![1])
            .with_rental_ids(vec![2, 3])
            .with_coordinates((1.0, 1.0))
            .with_coordinates((2.0, 2.0))
            .with_sort(Sort::PriceAsc)
            .with_sort(Sort::YearDesc)
            .build()
            .unwrap();

        assert_eq!(filter.price_min(), Some(2));
        assert_eq!(filter.price_max(), Some(4));
        assert_eq!(filter.limit(), Some(6));
        assert_eq!(filter.offset(), Some(8));
        assert_eq!(filter.rental_ids(), Some(&[2, 3][..]));
        assert_eq!(filter.coordinates(), Some(Coordinates::new(2.0, 2.0)));
        assert_eq!(filter.sort(), Some(Sort::YearDesc));
    }

    #[test]
    fn overwriting_can_repair_an_invalid_range() {
        let filter = RentalFilter::builder()
            .with_price_min(500)
            .with_price_max(100)
            .with_price_min(50)
            .build();
        assert!(filter.is_ok());
    }

    #[test]
    fn empty_id_list_is_absent() {
        let filter = RentalFilter::builder()
            .with_rental_ids(Vec::<i32>::new())
            .build()
            .unwrap();
        assert_eq!(filter.rental_ids(), None);
        assert_eq!(filter.to_string(), "");
    }

    #[test]
    fn each_field_is_independently_optional() {
        let only_min = RentalFilter::builder().with_price_min(1).build().unwrap();
        assert_eq!(only_min.price_min(), Some(1));
        assert_eq!(only_min.price_max(), None);

        let only_limit = RentalFilter::builder().with_limit(3).build().unwrap();
        assert_eq!(only_limit.limit(), Some(3));
        assert_eq!(only_limit.offset(), None);
        assert_eq!(only_limit.sort(), None);

        let only_sort = RentalFilter::builder()
            .with_sort(Sort::YearAsc)
            .build()
            .unwrap();
        assert_eq!(only_sort.sort(), Some(Sort::YearAsc));
        assert_eq!(only_sort.coordinates(), None);
        assert_eq!(only_sort.rental_ids(), None);
    }

    #[test]
    fn display_renders_present_fields_in_key_order() {
        assert_eq!(
            full_filter().to_string(),
            "ids=1,2,3 limit=11 near=1.23,4.56 offset=22 priceMax=200 priceMin=100 sort=price_asc"
        );

        let partial = RentalFilter::builder()
            .with_sort(Sort::YearDesc)
            .with_price_min(0)
            .build()
            .unwrap();
        assert_eq!(partial.to_string(), "priceMin=0 sort=year_desc");
    }

    #[test]
    fn sort_tokens_map_to_whitelisted_pairs() {
        let cases = [
            ("price", Sort::PriceAsc, SortField::Price, SortDirection::Asc),
            ("price_asc", Sort::PriceAsc, SortField::Price, SortDirection::Asc),
            ("price_desc", Sort::PriceDesc, SortField::Price, SortDirection::Desc),
            ("year", Sort::YearAsc, SortField::Year, SortDirection::Asc),
            ("year_asc", Sort::YearAsc, SortField::Year, SortDirection::Asc),
            ("year_desc", Sort::YearDesc, SortField::Year, SortDirection::Desc),
        ];

        for (token, sort, field, direction) in cases {
            let parsed: Sort = token.parse().unwrap();
            assert_eq!(parsed, sort, "token {token}");
            assert_eq!(parsed.field(), field);
            assert_eq!(parsed.direction(), direction);
        }
    }

    #[test]
    fn unknown_sort_token_is_rejected() {
        assert_eq!(
            "name; DROP TABLE rentals".parse::<Sort>(),
            Err(UnknownSort("name; DROP TABLE rentals".to_string()))
        );
        assert!("PRICE".parse::<Sort>().is_err());
    }
}
