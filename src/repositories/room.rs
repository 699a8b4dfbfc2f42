use async_trait::async_trait;
use sqlx::SqlitePool;

use super::records::{assemble_rooms, BenefitRecord, RoomRecord};
use super::{RepositoryError, Result, RoomRepository};
use crate::models::Room;

const ROOM_COLUMNS: &str = "SELECT room_id, physical_room_id, hotel_id, name, description, type, \
     base_price, currency, cancellation_policy, is_active FROM rooms";
const BENEFIT_COLUMNS: &str =
    "SELECT benefit_id, physical_room_id, name, description, is_active FROM benefits";

#[derive(Clone)]
pub struct SqliteRoomRepository {
    pool: SqlitePool,
}

impl SqliteRoomRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomRepository for SqliteRoomRepository {
    async fn find_by_hotel_id(&self, hotel_id: &str) -> Result<Vec<Room>> {
        let rooms = sqlx::query_as::<_, RoomRecord>(&format!(
            "{ROOM_COLUMNS} WHERE hotel_id = ? ORDER BY rowid"
        ))
        .bind(hotel_id)
        .fetch_all(&self.pool)
        .await
        .inspect_err(|err| log::error!("Error while fetching rooms of hotel {hotel_id}: {err}"))?;

        let benefits = sqlx::query_as::<_, BenefitRecord>(&format!(
            "{BENEFIT_COLUMNS} WHERE physical_room_id IN \
             (SELECT physical_room_id FROM rooms WHERE hotel_id = ?) ORDER BY rowid"
        ))
        .bind(hotel_id)
        .fetch_all(&self.pool)
        .await
        .inspect_err(|err| log::error!("Error while fetching benefits of hotel {hotel_id}: {err}"))?;

        assemble_rooms(rooms, benefits)
            .inspect_err(|err| log::error!("Error while assembling rooms of hotel {hotel_id}: {err}"))
    }

    async fn find_by_room_id(&self, room_id: &str) -> Result<Room> {
        let room = sqlx::query_as::<_, RoomRecord>(&format!("{ROOM_COLUMNS} WHERE room_id = ?"))
            .bind(room_id)
            .fetch_optional(&self.pool)
            .await
            .inspect_err(|err| log::error!("Error while fetching room {room_id}: {err}"))?
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "room",
                id: room_id.to_string(),
            })?;

        let benefits = sqlx::query_as::<_, BenefitRecord>(&format!(
            "{BENEFIT_COLUMNS} WHERE physical_room_id = ? ORDER BY rowid"
        ))
        .bind(&room.physical_room_id)
        .fetch_all(&self.pool)
        .await
        .inspect_err(|err| log::error!("Error while fetching benefits of room {room_id}: {err}"))?;

        room.into_room(benefits.into_iter().map(Into::into).collect())
            .inspect_err(|err| log::error!("Error while assembling room {room_id}: {err}"))
    }
}
