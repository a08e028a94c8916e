//! The transport domain.
//!
//! Every vehicle implements [`Vehicle`]. Shared state and the shared logic
//! (acceleration, snapshot assembly) live in [`VehicleCore`], which each variant
//! embeds. Vehicles are usually built through a [`Garage`], which hands each one
//! its own random stream and the pacing strategy.

mod bicycle;
mod boat;
mod car;
mod garage;
mod plane;
mod train;
mod vehicle;

pub use bicycle::Bicycle;
pub use boat::Boat;
pub use car::Car;
pub use garage::Garage;
pub use plane::Plane;
pub use train::Train;
pub use vehicle::{Kit, Vehicle, VehicleCore, VehicleKind};
