use std::sync::Arc;

use super::Result;
use crate::models::Hotel;
use crate::repositories::HotelRepository;

#[derive(Clone)]
pub struct HotelService {
    hotels: Arc<dyn HotelRepository>,
}

impl HotelService {
    pub fn new(hotels: Arc<dyn HotelRepository>) -> Self {
        Self { hotels }
    }

    pub async fn get_all_hotels(&self) -> Result<Vec<Hotel>> {
        Ok(self.hotels.find_all().await?)
    }

    pub async fn get_hotel_by_id(&self, hotel_id: &str) -> Result<Hotel> {
        Ok(self.hotels.find_by_id(hotel_id).await?)
    }
}
