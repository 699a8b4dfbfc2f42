use std::sync::Arc;

use super::{Result, ServiceError};
use crate::models::Room;
use crate::repositories::RoomRepository;

#[derive(Clone)]
pub struct RoomService {
    rooms: Arc<dyn RoomRepository>,
}

impl RoomService {
    pub fn new(rooms: Arc<dyn RoomRepository>) -> Self {
        Self { rooms }
    }

    pub async fn get_rooms_by_hotel_id(&self, hotel_id: &str) -> Result<Vec<Room>> {
        Ok(self.rooms.find_by_hotel_id(hotel_id).await?)
    }

    pub async fn get_room_by_room_id(&self, hotel_id: &str, room_id: &str) -> Result<Room> {
        let room = self.rooms.find_by_room_id(room_id).await?;
        ensure_room_belongs_to(&room, hotel_id)?;
        Ok(room)
    }
}

/// Fails with [`ServiceError::Consistency`] when `room` is not owned by `hotel_id`.
pub(super) fn ensure_room_belongs_to(room: &Room, hotel_id: &str) -> Result<()> {
    if room.belongs_to(hotel_id) {
        return Ok(());
    }

    log::warn!(
        "Room {} belongs to hotel {}, requested under hotel {}",
        room.id,
        room.hotel_id,
        hotel_id
    );
    Err(ServiceError::Consistency {
        hotel_id: hotel_id.to_string(),
        room_id: room.id.clone(),
        owner_hotel_id: room.hotel_id.clone(),
    })
}
