pub mod hotel;
pub mod pricing;
pub mod room;

pub use hotel::{Facility, Hotel};
pub use room::{Benefit, CancellationPolicy, Room};
