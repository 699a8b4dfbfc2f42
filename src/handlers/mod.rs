pub mod dto;
pub mod error;
pub mod hotels;
pub mod pricing;
pub mod rooms;

pub use error::ApiError;
