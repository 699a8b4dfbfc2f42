//! OpenAPI document for the versioned API.
//!
//! Served as JSON at `/api-docs/openapi.json` with Swagger UI at `/swagger-ui/`.

use utoipa::OpenApi;

use crate::handlers::dto::{
    BenefitDto, CalculatePriceRequest, CalculatePriceResponse, FacilityDto, HotelDto, HotelResponse,
    HotelsResponse, RoomDto, RoomResponse, RoomsResponse,
};
use crate::handlers::error::{ErrorResponse, FieldError};

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "Hotel Property Service", description = "Hotels, rooms and stay pricing"),
    paths(
        crate::handlers::hotels::get_hotels,
        crate::handlers::hotels::get_hotel_by_id,
        crate::handlers::rooms::get_rooms,
        crate::handlers::rooms::get_room_by_id,
        crate::handlers::pricing::calculate_price,
    ),
    components(
        schemas(
            FacilityDto,
            HotelDto,
            BenefitDto,
            RoomDto,
            HotelsResponse,
            HotelResponse,
            RoomsResponse,
            RoomResponse,
            CalculatePriceRequest,
            CalculatePriceResponse,
            ErrorResponse,
            FieldError,
        )
    ),
    tags(
        (name = "hotels", description = "Hotels and their facilities"),
        (name = "rooms", description = "Rooms and their benefits"),
        (name = "pricing", description = "Stay price calculation")
    )
)]
pub struct ApiDoc;
