use showroom_common::pacing::SHORT_PAUSE;
use showroom_common::{info, success, warn};

use crate::Transition;
use crate::transport::{Kit, Vehicle, VehicleCore, VehicleKind};

const SOUNDS: [&str; 3] = ["Vroom vroom! 🏎️", "Beep beep! 📯", "Engine purring... 🚗"];
const GEARS: std::ops::RangeInclusive<u8> = 1..=6;

pub struct Car {
    core: VehicleCore,
    gear: u8,
    doors: u8,
}

impl Car {
    pub fn new(name: &str, max_speed: u32, capacity: u32, kit: Kit) -> Self {
        Self {
            core: VehicleCore::new(VehicleKind::Car, name, max_speed, capacity, kit),
            gear: 1,
            doors: 4,
        }
    }

    pub fn gear(&self) -> u8 {
        self.gear
    }

    pub fn doors(&self) -> u8 {
        self.doors
    }

    /// Only while driving, and only into gears 1 through 6.
    pub fn shift_gear(&mut self, gear: u8) -> bool {
        if !GEARS.contains(&gear) || !self.core.is_moving() {
            warn!("Cannot shift {} to gear {gear}", self.core.name());
            return false;
        }
        self.gear = gear;
        info!("⚙️ {} shifted to gear {gear}", self.core.name());
        true
    }
}

impl Vehicle for Car {
    fn core(&self) -> &VehicleCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut VehicleCore {
        &mut self.core
    }

    fn move_off(&mut self) -> Transition {
        if self.core.is_moving() {
            warn!("🚗 {} is already driving!", self.core.name());
            return Transition::Redundant;
        }
        let speed = self.core.start();
        success!("🚗 {} is driving on the road at {speed} km/h", self.core.name());
        self.make_sound();
        Transition::Applied
    }

    fn stop(&mut self) -> Transition {
        if !self.core.is_moving() {
            warn!("🚗 {} is already stopped!", self.core.name());
            return Transition::Redundant;
        }
        info!("🛑 {} is braking and coming to a stop...", self.core.name());
        self.core.pause(SHORT_PAUSE, "braking");
        self.core.halt();
        success!("🚗 {} has stopped and parked.", self.core.name());
        Transition::Applied
    }

    fn make_sound(&mut self) -> &'static str {
        self.core.sound(&SOUNDS)
    }
}
