use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::rental::{
    Location, Price, Rental as DomainRental, User as DomainUser,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::users)]
/// Diesel model for [`crate::domain::rental::User`].
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::rentals)]
/// Diesel model for [`crate::domain::rental::Rental`].
pub struct Rental {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub description: String,
    pub kind: String,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub vehicle_year: i32,
    pub vehicle_length: f64,
    pub sleeps: i32,
    pub price_per_day: i64,
    pub home_city: String,
    pub home_state: String,
    pub home_zip: String,
    pub home_country: String,
    pub lat: f64,
    pub lng: f64,
    pub primary_image_url: String,
    pub created: NaiveDateTime,
    pub updated: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
/// Insertable form of [`User`].
pub struct NewUser<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::rentals)]
/// Insertable form of [`Rental`]. Timestamps are filled by the database.
pub struct NewRental<'a> {
    pub user_id: i32,
    pub name: &'a str,
    pub description: &'a str,
    pub kind: &'a str,
    pub vehicle_make: &'a str,
    pub vehicle_model: &'a str,
    pub vehicle_year: i32,
    pub vehicle_length: f64,
    pub sleeps: i32,
    pub price_per_day: i64,
    pub home_city: &'a str,
    pub home_state: &'a str,
    pub home_zip: &'a str,
    pub home_country: &'a str,
    pub lat: f64,
    pub lng: f64,
    pub primary_image_url: &'a str,
}

impl From<User> for DomainUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

impl Rental {
    /// Builds the domain projection. A missing owner row keeps only its id.
    pub fn into_domain(self, owner: Option<User>) -> DomainRental {
        let user = owner.map(DomainUser::from).unwrap_or_else(|| DomainUser {
            id: self.user_id,
            ..DomainUser::default()
        });

        DomainRental {
            id: self.id,
            name: self.name,
            description: self.description,
            kind: self.kind,
            make: self.vehicle_make,
            model: self.vehicle_model,
            year: self.vehicle_year,
            length: self.vehicle_length,
            sleeps: self.sleeps,
            primary_image_url: self.primary_image_url,
            price: Price {
                day: self.price_per_day,
            },
            location: Location {
                city: self.home_city,
                state: self.home_state,
                zip: self.home_zip,
                country: self.home_country,
                lat: self.lat,
                lng: self.lng,
            },
            user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_rental() -> Rental {
        let now: NaiveDateTime = Utc::now().naive_utc();
        Rental {
            id: 1,
            user_id: 7,
            name: "'Abaco' VW Bay Window: Westfalia Pop-top".to_string(),
            description: "ultrices consectetur torquent".to_string(),
            kind: "camper-van".to_string(),
            vehicle_make: "Volkswagen".to_string(),
            vehicle_model: "Bay Window".to_string(),
            vehicle_year: 1978,
            vehicle_length: 15.0,
            sleeps: 4,
            price_per_day: 16900,
            home_city: "Costa Mesa".to_string(),
            home_state: "CA".to_string(),
            home_zip: "92627".to_string(),
            home_country: "US".to_string(),
            lat: 33.64,
            lng: -117.93,
            primary_image_url: "https://example.com/abaco.jpg".to_string(),
            created: now,
            updated: now,
        }
    }

    #[test]
    fn rental_into_domain_with_owner() {
        let owner = User {
            id: 7,
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
        };
        let domain = sample_rental().into_domain(Some(owner));

        assert_eq!(domain.id, 1);
        assert_eq!(domain.kind, "camper-van");
        assert_eq!(domain.make, "Volkswagen");
        assert_eq!(domain.model, "Bay Window");
        assert_eq!(domain.year, 1978);
        assert_eq!(domain.price.day, 16900);
        assert_eq!(domain.location.city, "Costa Mesa");
        assert_eq!(domain.location.zip, "92627");
        assert_eq!(domain.location.lat, 33.64);
        assert_eq!(domain.user.first_name, "John");
        assert_eq!(domain.user.last_name, "Smith");
    }

    #[test]
    fn rental_into_domain_without_owner_keeps_user_id() {
        let domain = sample_rental().into_domain(None);
        assert_eq!(domain.user.id, 7);
        assert!(domain.user.first_name.is_empty());
    }
}
