use actix_web::{web, HttpResponse};
use validator::Validate;

use super::dto::{HotelPath, RoomDto, RoomPath, RoomResponse, RoomsResponse};
use super::error::ErrorResponse;
use super::ApiError;
use crate::services::with_deadline;
use crate::state::AppState;

/// List the rooms of a hotel
#[utoipa::path(
    get,
    path = "/api/v1/hotels/{hotel_id}/rooms",
    params(HotelPath),
    responses(
        (status = 200, description = "Rooms of the hotel, empty for an unknown hotel", body = RoomsResponse),
        (status = 400, description = "Invalid hotel id", body = ErrorResponse),
        (status = 504, description = "Request deadline exceeded", body = ErrorResponse)
    ),
    tag = "rooms"
)]
pub async fn get_rooms(
    state: web::Data<AppState>,
    path: web::Path<HotelPath>,
) -> Result<HttpResponse, ApiError> {
    let path = path.into_inner();
    path.validate()?;

    let rooms = with_deadline(
        state.request_timeout,
        state.rooms.get_rooms_by_hotel_id(&path.hotel_id),
    )
    .await?;

    Ok(HttpResponse::Ok().json(RoomsResponse {
        rooms: rooms.into_iter().map(RoomDto::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/hotels/{hotel_id}/rooms/{room_id}",
    params(RoomPath),
    responses(
        (status = 200, description = "Room details", body = RoomResponse),
        (status = 400, description = "Invalid ids", body = ErrorResponse),
        (status = 404, description = "Room not found", body = ErrorResponse),
        (status = 409, description = "Room belongs to another hotel", body = ErrorResponse),
        (status = 504, description = "Request deadline exceeded", body = ErrorResponse)
    ),
    tag = "rooms"
)]
pub async fn get_room_by_id(
    state: web::Data<AppState>,
    path: web::Path<RoomPath>,
) -> Result<HttpResponse, ApiError> {
    let path = path.into_inner();
    path.validate()?;

    let room = with_deadline(
        state.request_timeout,
        state.rooms.get_room_by_room_id(&path.hotel_id, &path.room_id),
    )
    .await?;

    Ok(HttpResponse::Ok().json(RoomResponse { room: room.into() }))
}
