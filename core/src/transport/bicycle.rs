use showroom_common::{info, success, warn};

use crate::Transition;
use crate::transport::{Kit, Vehicle, VehicleCore, VehicleKind};

const SOUNDS: [&str; 3] = ["Ring ring! 🔔", "Whoosh of wind! 💨", "Chain clicking... ⚙️"];

pub struct Bicycle {
    core: VehicleCore,
    pedaling: bool,
    gear: u8,
}

impl Bicycle {
    pub fn new(name: &str, max_speed: u32, capacity: u32, kit: Kit) -> Self {
        Self {
            core: VehicleCore::new(VehicleKind::Bicycle, name, max_speed, capacity, kit),
            pedaling: false,
            gear: 1,
        }
    }

    pub fn is_pedaling(&self) -> bool {
        self.pedaling
    }

    pub fn gear(&self) -> u8 {
        self.gear
    }

    pub fn ring_bell(&self) {
        info!("🔔 Ring ring! {} is signaling!", self.core.name());
    }
}

impl Vehicle for Bicycle {
    fn core(&self) -> &VehicleCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut VehicleCore {
        &mut self.core
    }

    fn move_off(&mut self) -> Transition {
        if self.core.is_moving() {
            warn!("🚴 {} is already cycling!", self.core.name());
            return Transition::Redundant;
        }
        info!("🚴 Starting to pedal {}...", self.core.name());
        let speed = self.core.start();
        self.pedaling = true;
        success!("🚴 {} is cycling at {speed} km/h", self.core.name());
        self.make_sound();
        Transition::Applied
    }

    fn stop(&mut self) -> Transition {
        if !self.core.is_moving() {
            warn!("🚴 {} is already stopped!", self.core.name());
            return Transition::Redundant;
        }
        info!("🛑 Applying brakes to {}...", self.core.name());
        self.core.halt();
        self.pedaling = false;
        success!("🚴 {} has stopped.", self.core.name());
        Transition::Applied
    }

    fn make_sound(&mut self) -> &'static str {
        self.core.sound(&SOUNDS)
    }
}
