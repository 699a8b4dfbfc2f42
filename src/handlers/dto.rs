//! Wire contracts for the HTTP API.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::{Uuid, Variant, Version};
use validator::{Validate, ValidationError};

use crate::models::{Benefit, CancellationPolicy, Facility, Hotel, Room};

/// Accepts only the lowercase hyphenated form of an RFC 4122 version 4 UUID.
pub fn validate_uuid_v4(value: &str) -> Result<(), ValidationError> {
    let is_v4 = value.len() == 36
        && !value.bytes().any(|byte| byte.is_ascii_uppercase())
        && Uuid::try_parse(value)
            .map(|uuid| {
                uuid.get_version() == Some(Version::Random) && uuid.get_variant() == Variant::RFC4122
            })
            .unwrap_or(false);

    if is_v4 {
        return Ok(());
    }
    let mut error = ValidationError::new("uuid4");
    error.message = Some("must be a UUID v4".into());
    Err(error)
}

// Requests

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct HotelPath {
    /// Hotel identifier (UUID v4)
    #[validate(custom(function = "validate_uuid_v4"))]
    pub hotel_id: String,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct RoomPath {
    /// Hotel identifier (UUID v4)
    #[validate(custom(function = "validate_uuid_v4"))]
    pub hotel_id: String,
    /// Room identifier (UUID v4)
    #[validate(custom(function = "validate_uuid_v4"))]
    pub room_id: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CalculatePriceRequest {
    #[serde(rename = "hotelID")]
    #[validate(custom(function = "validate_uuid_v4"))]
    pub hotel_id: String,
    #[serde(rename = "roomID")]
    #[validate(custom(function = "validate_uuid_v4"))]
    pub room_id: String,
    #[validate(range(min = 1, message = "must be at least 1"))]
    #[schema(minimum = 1)]
    pub nights: u32,
}

impl CalculatePriceRequest {
    /// Field names as the client sends them, for validation details.
    pub const WIRE_NAMES: &'static [(&'static str, &'static str)] =
        &[("hotel_id", "hotelID"), ("room_id", "roomID")];
}

// Responses

#[derive(Debug, Serialize, ToSchema)]
pub struct FacilityDto {
    pub facility_id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HotelDto {
    pub hotel_id: String,
    pub name: String,
    pub address: String,
    pub facility: Vec<FacilityDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BenefitDto {
    #[serde(rename = "benefitID")]
    pub benefit_id: String,
    #[serde(rename = "physicalRoomID")]
    pub physical_room_id: String,
    pub description: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoomDto {
    #[serde(rename = "roomID")]
    pub room_id: String,
    #[serde(rename = "hotelID")]
    pub hotel_id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub room_type: String,
    #[serde(rename = "basePrice")]
    pub base_price: f64,
    pub currency: String,
    #[serde(rename = "cancellationPolicy")]
    #[schema(value_type = String)]
    pub cancellation_policy: CancellationPolicy,
    pub benefit: Vec<BenefitDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HotelsResponse {
    pub hotels: Vec<HotelDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HotelResponse {
    pub hotel: HotelDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoomsResponse {
    pub rooms: Vec<RoomDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoomResponse {
    pub room: RoomDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CalculatePriceResponse {
    #[serde(rename = "totalPrice")]
    pub total_price: f64,
}

/// Money leaves the service as a plain JSON number.
fn to_json_number(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or_default()
}

impl From<Decimal> for CalculatePriceResponse {
    fn from(total: Decimal) -> Self {
        CalculatePriceResponse {
            total_price: to_json_number(total),
        }
    }
}

impl From<Facility> for FacilityDto {
    fn from(facility: Facility) -> Self {
        FacilityDto {
            facility_id: facility.id,
            name: facility.name,
            description: facility.description,
        }
    }
}

impl From<Hotel> for HotelDto {
    fn from(hotel: Hotel) -> Self {
        HotelDto {
            hotel_id: hotel.id,
            name: hotel.name,
            address: hotel.address,
            facility: hotel.facilities.into_iter().map(FacilityDto::from).collect(),
        }
    }
}

impl From<Benefit> for BenefitDto {
    fn from(benefit: Benefit) -> Self {
        BenefitDto {
            benefit_id: benefit.id,
            physical_room_id: benefit.physical_room_id,
            description: benefit.description,
        }
    }
}

impl From<Room> for RoomDto {
    fn from(room: Room) -> Self {
        RoomDto {
            room_id: room.id,
            hotel_id: room.hotel_id,
            name: room.name,
            description: room.description,
            room_type: room.room_type,
            base_price: to_json_number(room.base_price),
            currency: room.currency,
            cancellation_policy: room.cancellation_policy,
            benefit: room.benefits.into_iter().map(BenefitDto::from).collect(),
        }
    }
}
