use async_trait::async_trait;
use sqlx::SqlitePool;

use super::records::{assemble_hotels, FacilityRecord, HotelRecord};
use super::{HotelRepository, RepositoryError, Result};
use crate::models::{Facility, Hotel};

const HOTEL_COLUMNS: &str = "SELECT hotel_id, name, address, is_active FROM hotels";
const FACILITY_COLUMNS: &str =
    "SELECT facility_id, hotel_id, name, description, is_active FROM facilities";

#[derive(Clone)]
pub struct SqliteHotelRepository {
    pool: SqlitePool,
}

impl SqliteHotelRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HotelRepository for SqliteHotelRepository {
    async fn find_all(&self) -> Result<Vec<Hotel>> {
        let hotels = sqlx::query_as::<_, HotelRecord>(&format!("{HOTEL_COLUMNS} ORDER BY rowid"))
            .fetch_all(&self.pool)
            .await
            .inspect_err(|err| log::error!("Error while fetching hotels: {err}"))?;

        let facilities = sqlx::query_as::<_, FacilityRecord>(&format!(
            "{FACILITY_COLUMNS} WHERE hotel_id IN (SELECT hotel_id FROM hotels) ORDER BY rowid"
        ))
        .fetch_all(&self.pool)
        .await
        .inspect_err(|err| log::error!("Error while fetching facilities of all hotels: {err}"))?;

        Ok(assemble_hotels(hotels, facilities))
    }

    async fn find_by_id(&self, hotel_id: &str) -> Result<Hotel> {
        let hotel = sqlx::query_as::<_, HotelRecord>(&format!("{HOTEL_COLUMNS} WHERE hotel_id = ?"))
            .bind(hotel_id)
            .fetch_optional(&self.pool)
            .await
            .inspect_err(|err| log::error!("Error while fetching hotel {hotel_id}: {err}"))?
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "hotel",
                id: hotel_id.to_string(),
            })?;

        let facilities = sqlx::query_as::<_, FacilityRecord>(&format!(
            "{FACILITY_COLUMNS} WHERE hotel_id = ? ORDER BY rowid"
        ))
        .bind(hotel_id)
        .fetch_all(&self.pool)
        .await
        .inspect_err(|err| log::error!("Error while fetching facilities of hotel {hotel_id}: {err}"))?;

        Ok(hotel.into_hotel(facilities.into_iter().map(Facility::from).collect()))
    }
}
