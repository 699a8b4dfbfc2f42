use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::FromRow;

use super::{RepositoryError, Result};
use crate::models::room::UnknownCancellationPolicy;
use crate::models::{Benefit, CancellationPolicy, Facility, Hotel, Room};

#[derive(Debug, Clone, FromRow)]
pub(super) struct HotelRecord {
    pub hotel_id: String,
    pub name: String,
    pub address: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, FromRow)]
pub(super) struct FacilityRecord {
    pub facility_id: String,
    pub hotel_id: String,
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, FromRow)]
pub(super) struct RoomRecord {
    pub room_id: String,
    pub physical_room_id: String,
    pub hotel_id: String,
    pub name: String,
    pub description: String,
    #[sqlx(rename = "type")]
    pub room_type: String,
    pub base_price: i64,
    pub currency: String,
    pub cancellation_policy: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, FromRow)]
pub(super) struct BenefitRecord {
    pub benefit_id: String,
    pub physical_room_id: String,
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

impl From<FacilityRecord> for Facility {
    fn from(record: FacilityRecord) -> Self {
        Facility {
            id: record.facility_id,
            hotel_id: record.hotel_id,
            name: record.name,
            description: record.description,
            is_active: record.is_active,
        }
    }
}

impl From<BenefitRecord> for Benefit {
    fn from(record: BenefitRecord) -> Self {
        Benefit {
            id: record.benefit_id,
            physical_room_id: record.physical_room_id,
            name: record.name,
            description: record.description,
            is_active: record.is_active,
        }
    }
}

impl HotelRecord {
    pub fn into_hotel(self, facilities: Vec<Facility>) -> Hotel {
        Hotel {
            id: self.hotel_id,
            name: self.name,
            address: self.address,
            is_active: self.is_active,
            facilities,
        }
    }
}

impl RoomRecord {
    pub fn into_room(self, benefits: Vec<Benefit>) -> Result<Room> {
        let cancellation_policy: CancellationPolicy =
            self.cancellation_policy
                .parse()
                .map_err(|err: UnknownCancellationPolicy| RepositoryError::InvalidRecord {
                    entity: "room",
                    id: self.room_id.clone(),
                    reason: err.to_string(),
                })?;

        Ok(Room {
            id: self.room_id,
            physical_room_id: self.physical_room_id,
            hotel_id: self.hotel_id,
            name: self.name,
            description: self.description,
            room_type: self.room_type,
            base_price: Decimal::from(self.base_price),
            currency: self.currency,
            cancellation_policy,
            is_active: self.is_active,
            benefits,
        })
    }
}

/// Attaches facilities to their hotels, keeping both orders.
pub(super) fn assemble_hotels(hotels: Vec<HotelRecord>, facilities: Vec<FacilityRecord>) -> Vec<Hotel> {
    let mut by_hotel = group_by(facilities, |f| f.hotel_id.clone());
    hotels
        .into_iter()
        .map(|record| {
            let facilities: Vec<Facility> = by_hotel
                .remove(&record.hotel_id)
                .unwrap_or_default()
                .into_iter()
                .map(Facility::from)
                .collect();
            record.into_hotel(facilities)
        })
        .collect()
}

/// Attaches benefits to rooms by physical room id. Rooms sharing a physical
/// room each get their own copy of the group's benefits.
pub(super) fn assemble_rooms(rooms: Vec<RoomRecord>, benefits: Vec<BenefitRecord>) -> Result<Vec<Room>> {
    let by_physical_room = group_by(benefits, |b| b.physical_room_id.clone());
    rooms
        .into_iter()
        .map(|record| {
            let benefits: Vec<Benefit> = by_physical_room
                .get(&record.physical_room_id)
                .map(|group| group.iter().cloned().map(Benefit::from).collect())
                .unwrap_or_default();
            record.into_room(benefits)
        })
        .collect()
}

fn group_by<T, F>(items: Vec<T>, key: F) -> HashMap<String, Vec<T>>
where
    F: Fn(&T) -> String,
{
    let mut groups: HashMap<String, Vec<T>> = HashMap::new();
    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}
