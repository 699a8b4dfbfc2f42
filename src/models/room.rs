use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::pricing::calculate_price;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CancellationPolicy {
    FreeCancellation,
    NonRefundable,
}

impl CancellationPolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            CancellationPolicy::FreeCancellation => "free_cancellation",
            CancellationPolicy::NonRefundable => "non_refundable",
        }
    }
}

impl fmt::Display for CancellationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown cancellation policy '{0}'")]
pub struct UnknownCancellationPolicy(pub String);

impl FromStr for CancellationPolicy {
    type Err = UnknownCancellationPolicy;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "free_cancellation" => Ok(CancellationPolicy::FreeCancellation),
            "non_refundable" => Ok(CancellationPolicy::NonRefundable),
            other => Err(UnknownCancellationPolicy(other.to_string())),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Room {
    pub id: String,
    pub physical_room_id: String,
    pub hotel_id: String,
    pub name: String,
    pub description: String,
    pub room_type: String,
    /// Per-night rate in whole currency units.
    pub base_price: Decimal,
    pub currency: String,
    pub cancellation_policy: CancellationPolicy,
    pub is_active: bool,
    pub benefits: Vec<Benefit>,
}

impl Room {
    /// Total price of a stay of `nights` in this room under its cancellation policy.
    pub fn calculate_price(&self, nights: u32) -> Decimal {
        calculate_price(self.base_price, nights, self.cancellation_policy)
    }

    pub fn belongs_to(&self, hotel_id: &str) -> bool {
        self.hotel_id == hotel_id
    }
}

/// Benefits hang off the physical room, so every room sharing a
/// `physical_room_id` exposes the same set.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Benefit {
    pub id: String,
    pub physical_room_id: String,
    pub name: String,
    pub description: String,
    pub is_active: bool,
}
