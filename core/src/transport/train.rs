use showroom_common::pacing::LONG_PAUSE;
use showroom_common::{info, success, warn};

use crate::Transition;
use crate::transport::{Kit, Vehicle, VehicleCore, VehicleKind};

const SOUNDS: [&str; 3] = ["Choo choo! 🚂", "TOOT TOOT! 📯", "Clackety-clack on tracks... 🛤️"];

pub const HOME_STATION: &str = "Central Station";

pub struct Train {
    core: VehicleCore,
    cars: u8,
    station: String,
}

impl Train {
    pub fn new(name: &str, max_speed: u32, capacity: u32, kit: Kit) -> Self {
        Self {
            core: VehicleCore::new(VehicleKind::Train, name, max_speed, capacity, kit),
            cars: 8,
            station: HOME_STATION.to_string(),
        }
    }

    pub fn cars(&self) -> u8 {
        self.cars
    }

    pub fn station(&self) -> &str {
        &self.station
    }

    /// Moves the train to another station. Refused while traveling.
    pub fn change_station(&mut self, station: &str) -> bool {
        if self.core.is_moving() {
            warn!("🚉 {} cannot change station while traveling", self.core.name());
            return false;
        }
        self.station = station.to_string();
        info!("🚉 {} is now at {station}", self.core.name());
        true
    }
}

impl Vehicle for Train {
    fn core(&self) -> &VehicleCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut VehicleCore {
        &mut self.core
    }

    fn move_off(&mut self) -> Transition {
        if self.core.is_moving() {
            warn!("🚃 {} is already traveling!", self.core.name());
            return Transition::Redundant;
        }
        info!(
            "🚂 All aboard! {} is departing from {}...",
            self.core.name(),
            self.station
        );
        self.core.pause(LONG_PAUSE, "departing");
        info!("🚂 {} is accelerating on the tracks...", self.core.name());
        let speed = self.core.start();
        success!("🚃 {} is traveling at {speed} km/h on the railway", self.core.name());
        self.make_sound();
        Transition::Applied
    }

    fn stop(&mut self) -> Transition {
        if !self.core.is_moving() {
            warn!("🚃 {} is already at the station!", self.core.name());
            return Transition::Redundant;
        }
        info!("🛑 {} is approaching the next station...", self.core.name());
        info!("🚂 Brakes engaging for {}...", self.core.name());
        self.core.pause(LONG_PAUSE, "braking");
        self.core.halt();
        success!("🚃 {} has arrived at the station. Doors opening...", self.core.name());
        Transition::Applied
    }

    fn make_sound(&mut self) -> &'static str {
        self.core.sound(&SOUNDS)
    }
}
