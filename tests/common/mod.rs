//! Shared fixtures for the HTTP tests.
#![allow(dead_code)]

use std::time::Duration;

use actix_web::web;
use sqlx::SqlitePool;

use hotel_property_service::config::DatabaseConfig;
use hotel_property_service::{db, AppState};

pub const HOTEL_1: &str = "1b4e28ba-2fa1-41d2-883f-0016d3cca427";
pub const HOTEL_2: &str = "6fa459ea-ee8a-4ca4-894e-db77e160355e";
pub const HOTEL_EMPTY: &str = "7c9e6679-7425-40de-944b-e07fc1f90ae7";
pub const ROOM_1: &str = "16fd2706-8baf-433b-82eb-8c7fada847da";
pub const ROOM_2: &str = "9b2d4f3e-5a6c-4d7e-8f90-a1b2c3d4e5f6";
pub const ROOM_3: &str = "0e1f2a3b-4c5d-4e6f-9a7b-8c9d0e1f2a3b";
pub const MISSING: &str = "a8098c1a-f86e-41da-bd60-0f1e2d3c4b5a";

/// H1 owns R1 (free cancellation, 1000/night) and R3 (non-refundable,
/// 1000/night, same physical room as R1). H2 owns R2. H_EMPTY has nothing.
pub async fn seeded_pool() -> SqlitePool {
    let pool = db::connect(&DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        run_migrations: true,
    })
    .await
    .expect("connect");
    db::migrate(&pool).await.expect("migrate");

    for (id, name, address) in [
        (HOTEL_1, "The Riverside Grand", "120 Silom Rd, Bangkok"),
        (HOTEL_2, "Phuket Sea Breeze Resort", "310 Patong Beach Rd, Phuket"),
        (HOTEL_EMPTY, "Chiang Mai Garden Inn", "45 Nimmanhemin Rd, Chiang Mai"),
    ] {
        sqlx::query("INSERT INTO hotels (hotel_id, name, address) VALUES (?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(address)
            .execute(&pool)
            .await
            .expect("insert hotel");
    }

    for (id, hotel_id, name) in [
        ("fac-pool", HOTEL_1, "Swimming Pool"),
        ("fac-gym", HOTEL_2, "Fitness Center"),
        ("fac-spa", HOTEL_1, "Spa"),
    ] {
        sqlx::query(
            "INSERT INTO facilities (facility_id, hotel_id, name, description) VALUES (?, ?, ?, ?)",
        )
        .bind(id)
        .bind(hotel_id)
        .bind(name)
        .bind(format!("{name} for guests"))
        .execute(&pool)
        .await
        .expect("insert facility");
    }

    for (id, physical_room_id, hotel_id, policy) in [
        (ROOM_1, "phys-a", HOTEL_1, "free_cancellation"),
        (ROOM_2, "phys-b", HOTEL_2, "non_refundable"),
        (ROOM_3, "phys-a", HOTEL_1, "non_refundable"),
    ] {
        sqlx::query(
            "INSERT INTO rooms (room_id, physical_room_id, hotel_id, name, description, type,
                                base_price, currency, cancellation_policy)
             VALUES (?, ?, ?, 'Superior King', 'Superior King with modern amenities', 'standard', 1000, 'THB', ?)",
        )
        .bind(id)
        .bind(physical_room_id)
        .bind(hotel_id)
        .bind(policy)
        .execute(&pool)
        .await
        .expect("insert room");
    }

    for (id, physical_room_id, name) in [
        ("ben-breakfast", "phys-a", "Breakfast"),
        ("ben-wifi", "phys-b", "WiFi"),
    ] {
        sqlx::query(
            "INSERT INTO benefits (benefit_id, physical_room_id, name, description) VALUES (?, ?, ?, ?)",
        )
        .bind(id)
        .bind(physical_room_id)
        .bind(name)
        .bind(format!("Complimentary {name}"))
        .execute(&pool)
        .await
        .expect("insert benefit");
    }

    pool
}

pub async fn app_state() -> web::Data<AppState> {
    web::Data::new(AppState::from_pool(seeded_pool().await, Duration::from_secs(5)))
}
