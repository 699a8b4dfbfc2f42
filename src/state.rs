use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

use crate::repositories::{HotelRepository, RoomRepository, SqliteHotelRepository, SqliteRoomRepository};
use crate::services::{HotelService, PricingService, RoomService};

/// Everything a handler needs, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub hotels: HotelService,
    pub rooms: RoomService,
    pub pricing: PricingService,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(
        hotel_repository: Arc<dyn HotelRepository>,
        room_repository: Arc<dyn RoomRepository>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            hotels: HotelService::new(hotel_repository),
            rooms: RoomService::new(room_repository.clone()),
            pricing: PricingService::new(room_repository),
            request_timeout,
        }
    }

    pub fn from_pool(pool: SqlitePool, request_timeout: Duration) -> Self {
        Self::new(
            Arc::new(SqliteHotelRepository::new(pool.clone())),
            Arc::new(SqliteRoomRepository::new(pool)),
            request_timeout,
        )
    }
}
