use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Price {
    /// Price per day in cents.
    pub day: i64,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
}

/// Owner of a rental listing.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub id: i32,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub length: f64,
    pub sleeps: i32,
    pub primary_image_url: String,
    pub price: Price,
    pub location: Location,
    pub user: User,
}
