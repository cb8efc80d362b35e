#![allow(dead_code)]

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use rentals_api::db::{DbPool, establish_connection_pool};
use rentals_api::models::rental::{NewRental, NewUser};
use rentals_api::schema::{rentals, users};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Migrated SQLite database living in a temporary directory.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("create pool");

        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

/// (id, name, city, lat, lng, price per day, year, owner id)
pub const RENTALS: [(i32, &str, &str, f64, f64, i64, i32, i32); 5] = [
    (1, "'Abaco' VW Bay Window", "Costa Mesa", 33.64, -117.93, 16900, 1978, 1),
    (2, "LA Cruiser", "Los Angeles", 34.05, -118.24, 9900, 2015, 2),
    (3, "Surf Van", "San Diego", 32.72, -117.16, 12500, 2018, 1),
    (4, "Desert Bus", "Las Vegas", 36.17, -115.14, 20000, 2005, 2),
    (5, "Tiny Trailer", "Portland", 45.52, -122.68, 5000, 2020, 1),
];

/// Inserts two owners and the [`RENTALS`] fixture.
pub fn seed(db: &TestDb) {
    let mut conn = db.pool().get().expect("get connection");

    diesel::insert_into(users::table)
        .values(&vec![
            NewUser {
                first_name: "John",
                last_name: "Smith",
            },
            NewUser {
                first_name: "Jane",
                last_name: "Doe",
            },
        ])
        .execute(&mut conn)
        .expect("insert users");

    let new_rentals: Vec<NewRental> = RENTALS
        .iter()
        .map(|&(_, name, city, lat, lng, price, year, user_id)| NewRental {
            user_id,
            name,
            description: "fixture rental",
            kind: "camper-van",
            vehicle_make: "Volkswagen",
            vehicle_model: "Bay Window",
            vehicle_year: year,
            vehicle_length: 15.0,
            sleeps: 4,
            price_per_day: price,
            home_city: city,
            home_state: "CA",
            home_zip: "92627",
            home_country: "US",
            lat,
            lng,
            primary_image_url: "https://example.com/rental.jpg",
        })
        .collect();

    diesel::insert_into(rentals::table)
        .values(&new_rentals)
        .execute(&mut conn)
        .expect("insert rentals");
}

/// Inserts a single rental owned by user 1 at the given point and returns its id.
pub fn insert_rental_at(db: &TestDb, name: &str, lat: f64, lng: f64) -> i32 {
    let mut conn = db.pool().get().expect("get connection");

    diesel::insert_into(rentals::table)
        .values(&NewRental {
            user_id: 1,
            name,
            description: "fixture rental",
            kind: "camper-van",
            vehicle_make: "Volkswagen",
            vehicle_model: "Bay Window",
            vehicle_year: 2000,
            vehicle_length: 15.0,
            sleeps: 4,
            price_per_day: 10000,
            home_city: "Null Island",
            home_state: "",
            home_zip: "",
            home_country: "",
            lat,
            lng,
            primary_image_url: "https://example.com/rental.jpg",
        })
        .returning(rentals::id)
        .get_result(&mut conn)
        .expect("insert rental")
}
