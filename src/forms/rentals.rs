use serde::Deserialize;
use validator::Validate;

use crate::domain::filter::{RentalFilter, RentalFilterBuilder, Sort};
use crate::domain::types::Coordinates;
use crate::forms::FormError;

/// Page size used when the request does not specify `limit`.
pub const DEFAULT_LIMIT: u32 = 10;

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

#[derive(Debug, Deserialize, Validate)]
/// Query string accepted by `GET /rentals`.
pub struct RentalsQueryForm {
    pub price_min: Option<u32>,
    pub price_max: Option<u32>,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    /// Comma separated rental ids.
    pub ids: Option<String>,
    /// `lat,lng` pair.
    pub near: Option<String>,
    pub sort: Option<String>,
}

impl RentalsQueryForm {
    /// Decodes a raw query string (without the leading `?`).
    pub fn from_query(query: &str) -> Result<Self, FormError> {
        serde_html_form::from_str(query).map_err(|e| FormError::Decode(e.to_string()))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_ids(raw: &str) -> Result<Vec<i32>, FormError> {
    raw.split(',')
        .map(|s| {
            let s = s.trim();
            s.parse::<i32>()
                .map_err(|e| FormError::InvalidIds(format!("error parsing number {s:?}: {e}")))
        })
        .collect()
}

fn parse_near(raw: &str) -> Result<Coordinates, FormError> {
    let parts: Vec<&str> = raw.split(',').collect();
    let [lat, lng] = parts.as_slice() else {
        return Err(FormError::InvalidNear("invalid number of coords".to_string()));
    };

    let parse = |s: &str| {
        let s = s.trim();
        s.parse::<f64>()
            .map_err(|e| FormError::InvalidNear(format!("error parsing coord {s:?}: {e}")))
    };

    Ok(Coordinates::new(parse(*lat)?, parse(*lng)?))
}

impl TryFrom<RentalsQueryForm> for RentalFilter {
    type Error = FormError;

    fn try_from(form: RentalsQueryForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let mut builder = RentalFilterBuilder::new()
            .with_limit(form.limit)
            .with_offset(form.offset);

        if let Some(price_min) = form.price_min {
            builder = builder.with_price_min(price_min);
        }
        if let Some(price_max) = form.price_max {
            builder = builder.with_price_max(price_max);
        }
        if let Some(ids) = non_blank(form.ids.as_deref()) {
            builder = builder.with_rental_ids(parse_ids(ids)?);
        }
        if let Some(near) = non_blank(form.near.as_deref()) {
            builder = builder.with_coordinates(parse_near(near)?);
        }
        if let Some(sort) = non_blank(form.sort.as_deref()) {
            builder = builder.with_sort(sort.parse::<Sort>()?);
        }

        Ok(builder.build()?)
    }
}
