//! Read-only persistence gateway.
//!
//! Repositories return fully materialized domain records: a hotel always
//! arrives with its facilities, a room always arrives with its benefits.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Hotel, Room};

mod hotel;
#[cfg(test)]
pub(crate) mod memory;
mod records;
mod room;

pub use hotel::SqliteHotelRepository;
pub use room::SqliteRoomRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("invalid {entity} record {id}: {reason}")]
    InvalidRecord {
        entity: &'static str,
        id: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

#[async_trait]
pub trait HotelRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Hotel>>;
    async fn find_by_id(&self, hotel_id: &str) -> Result<Hotel>;
}

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Rooms of `hotel_id`; an unknown hotel simply has none.
    async fn find_by_hotel_id(&self, hotel_id: &str) -> Result<Vec<Room>>;
    async fn find_by_room_id(&self, room_id: &str) -> Result<Room>;
}
