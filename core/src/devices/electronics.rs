use std::fmt;

use chrono::{Local, Months, NaiveDate};
use showroom_common::snapshot::Snapshot;
use showroom_common::{success, warn};

use crate::Transition;

/// Fields every electronic device carries.
pub struct DeviceCore {
    brand: String,
    model: String,
    price: f64,
    warranty_years: u8,
    serial_number: String,
    manufacture_date: NaiveDate,
    powered: bool,
    power_consumption: u32,
}

impl DeviceCore {
    pub(crate) fn new(
        brand: &str,
        model: &str,
        price: f64,
        warranty_years: u8,
        serial_number: String,
        manufacture_date: NaiveDate,
    ) -> Self {
        Self {
            brand: brand.to_string(),
            model: model.to_string(),
            price,
            warranty_years,
            serial_number,
            manufacture_date,
            powered: false,
            power_consumption: 0,
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn warranty_years(&self) -> u8 {
        self.warranty_years
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn manufacture_date(&self) -> NaiveDate {
        self.manufacture_date
    }

    pub fn is_on(&self) -> bool {
        self.powered
    }

    /// Watts drawn right now. Zero while off.
    pub fn power_consumption(&self) -> u32 {
        self.power_consumption
    }

    pub(crate) fn set_warranty_years(&mut self, years: u8) {
        self.warranty_years = years;
    }

    /// True while `date` falls before the end of the warranty period.
    pub fn is_under_warranty_on(&self, date: NaiveDate) -> bool {
        let months = Months::new(12 * u32::from(self.warranty_years));
        match self.manufacture_date.checked_add_months(months) {
            Some(expiry) => date < expiry,
            None => true,
        }
    }

    fn switch(&mut self, on: bool, watts: u32) -> Transition {
        let name = format!("{} {}", self.brand, self.model);
        if self.powered == on {
            let state = if on { "ON" } else { "OFF" };
            warn!("⚠️ {name} is already {state}");
            return Transition::Redundant;
        }
        self.powered = on;
        self.power_consumption = if on { watts } else { 0 };
        if on {
            success!("🔋 {name} is now ON");
        } else {
            success!("⚫ {name} is now OFF");
        }
        Transition::Applied
    }

    pub fn snapshot(&self) -> Snapshot {
        let status = if self.powered { "ON" } else { "OFF" };
        Snapshot::new()
            .with("brand", self.brand.as_str())
            .with("model", self.model.as_str())
            .with("price", self.price)
            .with("serial_number", self.serial_number.as_str())
            .with("manufacture_date", self.manufacture_date.format("%Y-%m-%d").to_string())
            .with("warranty_years", self.warranty_years)
            .with("status", status)
            .with("power_consumption", self.power_consumption)
    }
}

impl fmt::Display for DeviceCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (SN: {})", self.brand, self.model, self.serial_number)
    }
}

/// Shared contract of every electronic device.
pub trait Electronics {
    fn core(&self) -> &DeviceCore;
    fn core_mut(&mut self) -> &mut DeviceCore;

    /// Name of the concrete variant, as shown in narration.
    fn kind_name(&self) -> &'static str;

    /// Watts drawn once powered on. Variants override this hook.
    fn base_power_consumption(&self) -> u32 {
        50
    }

    fn power_on(&mut self) -> Transition {
        let watts = self.base_power_consumption();
        self.core_mut().switch(true, watts)
    }

    fn power_off(&mut self) -> Transition {
        self.core_mut().switch(false, 0)
    }

    fn is_on(&self) -> bool {
        self.core().is_on()
    }

    fn device_info(&self) -> Snapshot {
        self.core().snapshot()
    }

    fn is_under_warranty(&self) -> bool {
        self.core().is_under_warranty_on(Local::now().date_naive())
    }
}

/// A device with no specialization. Uses every default of [`Electronics`].
pub struct Device {
    core: DeviceCore,
}

impl Device {
    pub(crate) fn new(core: DeviceCore) -> Self {
        Self { core }
    }

    pub fn with_warranty_years(mut self, years: u8) -> Self {
        self.core.set_warranty_years(years);
        self
    }
}

impl Electronics for Device {
    fn core(&self) -> &DeviceCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut DeviceCore {
        &mut self.core
    }

    fn kind_name(&self) -> &'static str {
        "Electronics"
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.core, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showroom_common::snapshot::Field;

    fn generic() -> Device {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        Device::new(DeviceCore::new("Generic", "Device", 99.99, 1, "SN123456".into(), date))
    }

    #[test]
    fn power_toggles_with_the_base_hook() {
        let mut device = generic();
        assert_eq!(device.power_on(), Transition::Applied);
        assert!(device.is_on());
        assert_eq!(device.core().power_consumption(), 50);

        assert_eq!(device.power_on(), Transition::Redundant);
        assert_eq!(device.power_off(), Transition::Applied);
        assert_eq!(device.core().power_consumption(), 0);
        assert_eq!(device.power_off(), Transition::Redundant);
    }

    #[test]
    fn warranty_ends_after_the_configured_years() {
        let device = generic().with_warranty_years(2);
        let inside = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let expiry = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        assert!(device.core().is_under_warranty_on(inside));
        assert!(!device.core().is_under_warranty_on(expiry));
    }

    #[test]
    fn snapshot_reports_status_and_date() {
        let mut device = generic();
        device.power_on();
        let info = device.device_info();
        assert_eq!(info.get("status"), Some(&Field::from("ON")));
        assert_eq!(info.get("manufacture_date"), Some(&Field::from("2024-03-15")));
        assert_eq!(info.get("power_consumption"), Some(&Field::Int(50)));
    }

    #[test]
    fn displays_with_serial() {
        assert_eq!(generic().to_string(), "Generic Device (SN: SN123456)");
    }
}
