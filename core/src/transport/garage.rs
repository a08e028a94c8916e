use showroom_common::pacing::{SharedPacer, no_pause};
use showroom_common::random::{self, Dice};

use crate::transport::{Bicycle, Boat, Car, Kit, Plane, Train, Vehicle, VehicleKind};

/// Builds vehicles, handing each one its own random stream split off the
/// garage's stream and a shared pacer.
pub struct Garage {
    dice: Dice,
    pacer: SharedPacer,
}

impl Garage {
    pub fn new(dice: Dice, pacer: SharedPacer) -> Self {
        Self { dice, pacer }
    }

    /// A reproducible garage whose vehicles never pause.
    pub fn seeded(seed: u64) -> Self {
        Self::new(random::dice(Some(seed)), no_pause())
    }

    fn kit(&mut self) -> Kit {
        Kit {
            dice: random::split(&mut self.dice),
            pacer: self.pacer.clone(),
        }
    }

    pub fn car(&mut self, name: &str) -> Car {
        let kind = VehicleKind::Car;
        Car::new(name, kind.default_max_speed(), kind.default_capacity(), self.kit())
    }

    pub fn plane(&mut self, name: &str) -> Plane {
        let kind = VehicleKind::Plane;
        Plane::new(name, kind.default_max_speed(), kind.default_capacity(), self.kit())
    }

    pub fn boat(&mut self, name: &str) -> Boat {
        let kind = VehicleKind::Boat;
        Boat::new(name, kind.default_max_speed(), kind.default_capacity(), self.kit())
    }

    pub fn bicycle(&mut self, name: &str) -> Bicycle {
        let kind = VehicleKind::Bicycle;
        Bicycle::new(name, kind.default_max_speed(), kind.default_capacity(), self.kit())
    }

    pub fn train(&mut self, name: &str) -> Train {
        let kind = VehicleKind::Train;
        Train::new(name, kind.default_max_speed(), kind.default_capacity(), self.kit())
    }

    /// Any variant with its default specs, behind the common contract.
    pub fn build(&mut self, kind: VehicleKind, name: &str) -> Box<dyn Vehicle> {
        match kind {
            VehicleKind::Car => Box::new(self.car(name)),
            VehicleKind::Plane => Box::new(self.plane(name)),
            VehicleKind::Boat => Box::new(self.boat(name)),
            VehicleKind::Bicycle => Box::new(self.bicycle(name)),
            VehicleKind::Train => Box::new(self.train(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Transition;

    #[test]
    fn every_kind_moves_at_its_starting_speed_and_stops_at_zero() {
        let mut garage = Garage::seeded(1);
        for kind in VehicleKind::ALL {
            let mut vehicle = garage.build(kind, "Unit");
            assert_eq!(vehicle.kind(), kind);

            assert_eq!(vehicle.move_off(), Transition::Applied);
            assert!(vehicle.is_moving());
            assert_eq!(vehicle.current_speed(), kind.starting_speed());

            assert_eq!(vehicle.stop(), Transition::Applied);
            assert!(!vehicle.is_moving());
            assert_eq!(vehicle.current_speed(), 0);
        }
    }

    #[test]
    fn second_move_is_a_no_op() {
        let mut garage = Garage::seeded(2);
        for kind in VehicleKind::ALL {
            let mut vehicle = garage.build(kind, "Unit");
            vehicle.move_off();
            vehicle.accelerate(5);
            let before = vehicle.info();

            assert_eq!(vehicle.move_off(), Transition::Redundant);
            assert_eq!(vehicle.info(), before);
        }
    }

    #[test]
    fn labels_name_the_variant() {
        let mut garage = Garage::seeded(3);
        let train = garage.build(VehicleKind::Train, "Express 3000");
        assert_eq!(train.label(), "Train: Express 3000");
    }

    #[test]
    fn defaults_follow_the_kind() {
        let mut garage = Garage::seeded(4);
        let plane = garage.plane("Jumbo");
        assert_eq!(plane.core().max_speed(), 900);
        assert_eq!(plane.core().capacity(), 200);
        assert_eq!(plane.core().fuel_type(), "Jet Fuel");
    }
}
