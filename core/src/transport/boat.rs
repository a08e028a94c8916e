use showroom_common::pacing::SHORT_PAUSE;
use showroom_common::{info, success, warn};

use crate::Transition;
use crate::transport::{Kit, Vehicle, VehicleCore, VehicleKind};

const SOUNDS: [&str; 3] = ["Splash splash! 🌊", "Foghorn: HOOOONK! 📯", "Waves lapping... 🌊"];

pub struct Boat {
    core: VehicleCore,
    anchor_down: bool,
}

impl Boat {
    pub fn new(name: &str, max_speed: u32, capacity: u32, kit: Kit) -> Self {
        Self {
            core: VehicleCore::new(VehicleKind::Boat, name, max_speed, capacity, kit),
            anchor_down: true,
        }
    }

    pub fn is_anchor_down(&self) -> bool {
        self.anchor_down
    }

    /// Only drops the anchor when it is up and the boat is idle.
    pub fn drop_anchor(&mut self) -> bool {
        if self.anchor_down || self.core.is_moving() {
            warn!("⚓ Anchor is already down or {} is moving!", self.core.name());
            return false;
        }
        self.anchor_down = true;
        info!("⚓ Anchor dropped for {}", self.core.name());
        true
    }
}

impl Vehicle for Boat {
    fn core(&self) -> &VehicleCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut VehicleCore {
        &mut self.core
    }

    fn move_off(&mut self) -> Transition {
        if self.core.is_moving() {
            warn!("⛵ {} is already sailing!", self.core.name());
            return Transition::Redundant;
        }
        if self.anchor_down {
            info!("⚓ Raising anchor for {}...", self.core.name());
            self.anchor_down = false;
            self.core.pause(SHORT_PAUSE, "raising anchor");
        }
        info!("🚤 {} is sailing across the water...", self.core.name());
        let speed = self.core.start();
        success!("⛵ {} is cruising at {speed} km/h", self.core.name());
        self.make_sound();
        Transition::Applied
    }

    fn stop(&mut self) -> Transition {
        if !self.core.is_moving() {
            warn!("⛵ {} is already anchored!", self.core.name());
            return Transition::Redundant;
        }
        info!("🛑 {} is slowing down...", self.core.name());
        self.core.halt();
        info!("⚓ Dropping anchor for {}...", self.core.name());
        self.anchor_down = true;
        success!("⛵ {} is anchored at port.", self.core.name());
        Transition::Applied
    }

    fn make_sound(&mut self) -> &'static str {
        self.core.sound(&SOUNDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showroom_common::pacing::no_pause;
    use showroom_common::random::dice;

    fn boat() -> Boat {
        let kit = Kit {
            dice: dice(Some(11)),
            pacer: no_pause(),
        };
        Boat::new("Sea Explorer", 60, 50, kit)
    }

    #[test]
    fn anchor_follows_the_voyage() {
        let mut boat = boat();
        assert!(boat.is_anchor_down());

        boat.move_off();
        assert!(!boat.is_anchor_down());

        boat.stop();
        assert!(boat.is_anchor_down());
    }

    #[test]
    fn drop_anchor_refuses_when_already_down_or_moving() {
        let mut boat = boat();
        assert!(!boat.drop_anchor());

        boat.move_off();
        assert!(!boat.drop_anchor());
        assert!(!boat.is_anchor_down());
    }
}
