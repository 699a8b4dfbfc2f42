use std::sync::Arc;

use rust_decimal::Decimal;

use super::room::ensure_room_belongs_to;
use super::Result;
use crate::repositories::RoomRepository;

#[derive(Clone)]
pub struct PricingService {
    rooms: Arc<dyn RoomRepository>,
}

impl PricingService {
    pub fn new(rooms: Arc<dyn RoomRepository>) -> Self {
        Self { rooms }
    }

    /// Total price of `nights` in `room_id`, which must belong to `hotel_id`.
    pub async fn calculate_room_price(&self, hotel_id: &str, room_id: &str, nights: u32) -> Result<Decimal> {
        let room = self.rooms.find_by_room_id(room_id).await?;
        ensure_room_belongs_to(&room, hotel_id)?;

        let total = room.calculate_price(nights);
        log::debug!(
            "Priced room {room_id} for {nights} night(s) under {}: {total} {}",
            room.cancellation_policy,
            room.currency
        );
        Ok(total)
    }
}
