use std::future::Future;
use std::time::Duration;

use thiserror::Error;

use crate::repositories::RepositoryError;

mod hotel;
mod pricing;
mod room;

pub use hotel::HotelService;
pub use pricing::PricingService;
pub use room::RoomService;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// The room exists but is owned by another hotel.
    #[error("room {room_id} belongs to hotel {owner_hotel_id}, not {hotel_id}")]
    Consistency {
        hotel_id: String,
        room_id: String,
        owner_hotel_id: String,
    },

    #[error("storage failure: {0}")]
    Storage(#[source] RepositoryError),

    #[error("operation exceeded its {0:?} deadline")]
    Timeout(Duration),
}

impl From<RepositoryError> for ServiceError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound { entity, id } => ServiceError::NotFound { entity, id },
            other => ServiceError::Storage(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Runs `operation` under `limit`. On expiry the operation is dropped, which
/// cancels any query it has in flight.
pub async fn with_deadline<T, F>(limit: Duration, operation: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(limit, operation).await {
        Ok(result) => result,
        Err(_) => {
            log::warn!("Operation exceeded its {limit:?} deadline");
            Err(ServiceError::Timeout(limit))
        }
    }
}
