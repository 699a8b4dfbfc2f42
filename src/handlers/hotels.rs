use actix_web::{web, HttpResponse};
use validator::Validate;

use super::dto::{HotelDto, HotelPath, HotelResponse, HotelsResponse};
use super::error::ErrorResponse;
use super::ApiError;
use crate::services::with_deadline;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/hotels",
    responses(
        (status = 200, description = "All hotels with their facilities", body = HotelsResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
        (status = 504, description = "Request deadline exceeded", body = ErrorResponse)
    ),
    tag = "hotels"
)]
pub async fn get_hotels(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let hotels = with_deadline(state.request_timeout, state.hotels.get_all_hotels()).await?;

    Ok(HttpResponse::Ok().json(HotelsResponse {
        hotels: hotels.into_iter().map(HotelDto::from).collect(),
    }))
}

/// Get a single hotel
#[utoipa::path(
    get,
    path = "/api/v1/hotel/{hotel_id}",
    params(HotelPath),
    responses(
        (status = 200, description = "Hotel details", body = HotelResponse),
        (status = 400, description = "Invalid hotel id", body = ErrorResponse),
        (status = 404, description = "Hotel not found", body = ErrorResponse),
        (status = 504, description = "Request deadline exceeded", body = ErrorResponse)
    ),
    tag = "hotels"
)]
pub async fn get_hotel_by_id(
    state: web::Data<AppState>,
    path: web::Path<HotelPath>,
) -> Result<HttpResponse, ApiError> {
    let path = path.into_inner();
    path.validate()?;

    let hotel = with_deadline(
        state.request_timeout,
        state.hotels.get_hotel_by_id(&path.hotel_id),
    )
    .await?;

    Ok(HttpResponse::Ok().json(HotelResponse {
        hotel: hotel.into(),
    }))
}
