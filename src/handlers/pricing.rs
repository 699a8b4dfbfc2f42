use actix_web::{web, HttpResponse};
use validator::Validate;

use super::dto::{CalculatePriceRequest, CalculatePriceResponse};
use super::error::ErrorResponse;
use super::ApiError;
use crate::services::with_deadline;
use crate::state::AppState;

/// Price a stay in a room of a hotel
#[utoipa::path(
    post,
    path = "/api/v1/price",
    request_body = CalculatePriceRequest,
    responses(
        (status = 200, description = "Total price of the stay", body = CalculatePriceResponse),
        (status = 400, description = "Malformed body or invalid fields", body = ErrorResponse),
        (status = 404, description = "Room not found", body = ErrorResponse),
        (status = 409, description = "Room belongs to another hotel", body = ErrorResponse),
        (status = 504, description = "Request deadline exceeded", body = ErrorResponse)
    ),
    tag = "pricing"
)]
pub async fn calculate_price(
    state: web::Data<AppState>,
    body: web::Json<CalculatePriceRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    if let Err(errors) = request.validate() {
        log::debug!("Rejected price request: {errors}");
        return Err(ApiError::from(errors).with_wire_names(CalculatePriceRequest::WIRE_NAMES));
    }

    let total = with_deadline(
        state.request_timeout,
        state
            .pricing
            .calculate_room_price(&request.hotel_id, &request.room_id, request.nights),
    )
    .await?;

    Ok(HttpResponse::Ok().json(CalculatePriceResponse::from(total)))
}
