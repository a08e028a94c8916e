use chrono::Local;
use rand::Rng;
use showroom_common::info;
use showroom_common::random::{self, Dice};

use crate::devices::{Device, DeviceCore, Electronics, Laptop, LaptopSpecs, PhoneSpecs, Smartphone};

const SERIAL_RANGE: std::ops::RangeInclusive<u32> = 100_000..=999_999;

pub const DEVICE_WARRANTY_YEARS: u8 = 1;
pub const PHONE_WARRANTY_YEARS: u8 = 2;
pub const LAPTOP_WARRANTY_YEARS: u8 = 3;

/// Constructs every device and counts them.
///
/// The count only ever grows: devices are never unregistered.
pub struct DeviceRegistry {
    total: u64,
    dice: Dice,
}

impl DeviceRegistry {
    pub fn new(dice: Dice) -> Self {
        Self { total: 0, dice }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(random::dice(Some(seed)))
    }

    pub fn total_devices(&self) -> u64 {
        self.total
    }

    fn register(&mut self, brand: &str, model: &str, price: f64, warranty_years: u8) -> DeviceCore {
        let serial = format!("SN{}", self.dice.random_range(SERIAL_RANGE));
        let manufactured = Local::now().date_naive();
        self.total += 1;
        DeviceCore::new(brand, model, price, warranty_years, serial, manufactured)
    }

    fn announce<D: Electronics>(device: D) -> D {
        let core = device.core();
        info!("📱 New {} created: {} {}", device.kind_name(), core.brand(), core.model());
        device
    }

    pub fn device(&mut self, brand: &str, model: &str, price: f64) -> Device {
        let core = self.register(brand, model, price, DEVICE_WARRANTY_YEARS);
        Self::announce(Device::new(core))
    }

    pub fn smartphone(
        &mut self,
        brand: &str,
        model: &str,
        price: f64,
        specs: PhoneSpecs,
    ) -> Smartphone {
        let core = self.register(brand, model, price, PHONE_WARRANTY_YEARS);
        Self::announce(Smartphone::new(core, specs))
    }

    pub fn laptop(&mut self, brand: &str, model: &str, price: f64, specs: LaptopSpecs) -> Laptop {
        let core = self.register(brand, model, price, LAPTOP_WARRANTY_YEARS);
        let dice = random::split(&mut self.dice);
        Self::announce(Laptop::new(core, specs, dice))
    }
}
