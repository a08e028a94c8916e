//! The device domain.
//!
//! [`Electronics`] is the shared contract: power switching with an
//! overridable base consumption hook, plus the base snapshot. Every device is
//! constructed through a [`DeviceRegistry`], which owns the running device
//! count and the serial-number source.

mod electronics;
mod laptop;
mod registry;
mod smartphone;

pub use electronics::{Device, DeviceCore, Electronics};
pub use laptop::{Laptop, LaptopSpecs};
pub use registry::DeviceRegistry;
pub use smartphone::{
    Contact, DEFAULT_PASSCODE, PhoneError, PhoneSpecs, Photo, PhotoQuality, Smartphone,
};
