use showroom_core::Transition;
use showroom_core::transport::{Garage, Vehicle, VehicleKind};
use showroom_common::snapshot::Field;

/// Builds one of every variant with a fixed seed and no pauses.
fn lineup(seed: u64) -> Vec<Box<dyn Vehicle>> {
    let mut garage = Garage::seeded(seed);
    VehicleKind::ALL
        .iter()
        .map(|kind| garage.build(*kind, &format!("{kind} One")))
        .collect()
}

#[test]
fn car_stop_before_move_changes_nothing() {
    let mut garage = Garage::seeded(10);
    let mut car = garage.car("Tesla Model S");
    let before = car.info();

    assert_eq!(car.stop(), Transition::Redundant);
    assert_eq!(car.info(), before);
    assert_eq!(car.info().get("status"), Some(&Field::from("Stopped")));
}

#[test]
fn every_variant_honours_the_speed_invariants() {
    for mut vehicle in lineup(11) {
        let kind = vehicle.kind();
        assert_eq!(vehicle.current_speed(), 0);

        assert!(vehicle.move_off().is_applied());
        assert!(vehicle.is_moving());
        assert_eq!(vehicle.current_speed(), kind.starting_speed());

        let max = vehicle.core().max_speed();
        for _ in 0..100 {
            vehicle.accelerate(37);
            assert!(vehicle.current_speed() <= max);
        }
        assert_eq!(vehicle.current_speed(), max);

        assert!(vehicle.stop().is_applied());
        assert!(!vehicle.is_moving());
        assert_eq!(vehicle.current_speed(), 0);
        assert!(vehicle.stop().is_redundant());
    }
}

#[test]
fn accelerate_follows_min_of_max_and_sum() {
    for mut vehicle in lineup(12) {
        assert_eq!(vehicle.accelerate(10), None);
        assert_eq!(vehicle.current_speed(), 0);

        vehicle.move_off();
        let old = vehicle.current_speed();
        let max = vehicle.core().max_speed();
        assert_eq!(vehicle.accelerate(10), Some(max.min(old + 10)));
    }
}

#[test]
fn seeded_garages_make_the_same_noise() {
    let mut a = lineup(99);
    let mut b = lineup(99);
    for (x, y) in a.iter_mut().zip(b.iter_mut()) {
        let sounds_x: Vec<&str> = (0..5).map(|_| x.make_sound()).collect();
        let sounds_y: Vec<&str> = (0..5).map(|_| y.make_sound()).collect();
        assert_eq!(sounds_x, sounds_y);
    }
}

#[test]
fn info_reports_the_variant_name() {
    let names: Vec<String> = lineup(13)
        .iter()
        .map(|vehicle| vehicle.info().get("type").map(|f| f.to_string()).unwrap_or_default())
        .collect();
    assert_eq!(names, vec!["Car", "Plane", "Boat", "Bicycle", "Train"]);
}
