//! In-memory repositories backing the service tests.

use std::time::Duration;

use async_trait::async_trait;

use super::{HotelRepository, RepositoryError, Result, RoomRepository};
use crate::models::{Hotel, Room};

#[derive(Default)]
pub(crate) struct InMemoryHotelRepository {
    pub hotels: Vec<Hotel>,
}

#[async_trait]
impl HotelRepository for InMemoryHotelRepository {
    async fn find_all(&self) -> Result<Vec<Hotel>> {
        Ok(self.hotels.clone())
    }

    async fn find_by_id(&self, hotel_id: &str) -> Result<Hotel> {
        self.hotels
            .iter()
            .find(|hotel| hotel.id == hotel_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "hotel",
                id: hotel_id.to_string(),
            })
    }
}

#[derive(Default)]
pub(crate) struct InMemoryRoomRepository {
    pub rooms: Vec<Room>,
    /// Delay applied to every lookup, for deadline tests.
    pub latency: Option<Duration>,
    /// When set, every lookup fails with a database error.
    pub broken: bool,
}

impl InMemoryRoomRepository {
    async fn simulate_io(&self) -> Result<()> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if self.broken {
            return Err(RepositoryError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn find_by_hotel_id(&self, hotel_id: &str) -> Result<Vec<Room>> {
        self.simulate_io().await?;
        Ok(self
            .rooms
            .iter()
            .filter(|room| room.hotel_id == hotel_id)
            .cloned()
            .collect())
    }

    async fn find_by_room_id(&self, room_id: &str) -> Result<Room> {
        self.simulate_io().await?;
        self.rooms
            .iter()
            .find(|room| room.id == room_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "room",
                id: room_id.to_string(),
            })
    }
}
