use showroom_common::pacing::LONG_PAUSE;
use showroom_common::{info, success, warn};

use crate::Transition;
use crate::transport::{Kit, Vehicle, VehicleCore, VehicleKind};

const SOUNDS: [&str; 3] = ["WHOOOOSH! 🌪️", "Jet engines roaring! ✈️", "Turbulence rumbling... 🌩️"];

/// Cruising altitude in meters reached right after take-off.
pub const TAKE_OFF_ALTITUDE: u32 = 1000;

pub struct Plane {
    core: VehicleCore,
    altitude: u32,
    airborne: bool,
}

impl Plane {
    pub fn new(name: &str, max_speed: u32, capacity: u32, kit: Kit) -> Self {
        Self {
            core: VehicleCore::new(VehicleKind::Plane, name, max_speed, capacity, kit),
            altitude: 0,
            airborne: false,
        }
    }

    pub fn altitude(&self) -> u32 {
        self.altitude
    }

    pub fn is_airborne(&self) -> bool {
        self.airborne
    }

    pub fn climb_altitude(&mut self, target: u32) -> bool {
        if !self.airborne {
            warn!("{} must be airborne to change altitude!", self.core.name());
            return false;
        }
        self.altitude = target;
        info!("📈 {} climbed to {target}m altitude", self.core.name());
        true
    }
}

impl Vehicle for Plane {
    fn core(&self) -> &VehicleCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut VehicleCore {
        &mut self.core
    }

    fn move_off(&mut self) -> Transition {
        if self.core.is_moving() {
            warn!("✈️ {} is already flying!", self.core.name());
            return Transition::Redundant;
        }
        info!("✈️ {} is taxiing to the runway...", self.core.name());
        self.core.pause(LONG_PAUSE, "taxiing");
        info!("✈️ {} is taking off...", self.core.name());
        let speed = self.core.start();
        self.airborne = true;
        self.altitude = TAKE_OFF_ALTITUDE;
        success!(
            "✈️ {} is flying at {speed} km/h, altitude {}m",
            self.core.name(),
            self.altitude
        );
        self.make_sound();
        Transition::Applied
    }

    fn stop(&mut self) -> Transition {
        if !self.core.is_moving() {
            warn!("✈️ {} is already on the ground!", self.core.name());
            return Transition::Redundant;
        }
        info!("🛬 {} is beginning descent...", self.core.name());
        self.altitude = 0;
        info!("🛬 {} is landing on runway...", self.core.name());
        self.core.pause(LONG_PAUSE, "landing");
        self.core.halt();
        self.airborne = false;
        success!("✈️ {} has landed and is at the gate.", self.core.name());
        Transition::Applied
    }

    fn make_sound(&mut self) -> &'static str {
        self.core.sound(&SOUNDS)
    }
}
