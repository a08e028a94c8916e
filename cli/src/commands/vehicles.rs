use colored::*;
use showroom_common::config::Config;
use showroom_common::random;
use showroom_core::transport::{Garage, Vehicle, VehicleKind};

use crate::commands::pacer;
use crate::mprint;
use crate::terminal::{colors, format, print};

const ACCELERATION: u32 = 20;

pub fn vehicles(cfg: &Config) -> anyhow::Result<()> {
    let mut garage = Garage::new(random::dice(cfg.seed), pacer(cfg));

    let mut car = garage.car("Tesla Model S");
    let mut plane = garage.plane("Boeing 747");
    let mut boat = garage.boat("Sea Explorer");
    let mut bicycle = garage.bicycle("Mountain Bike");
    let mut train = garage.train("Express 3000");

    print::header("same methods, different behaviors", cfg.quiet);
    {
        let fleet: [&mut dyn Vehicle; 5] =
            [&mut car, &mut plane, &mut boat, &mut bicycle, &mut train];
        let total = fleet.len();
        for (idx, vehicle) in fleet.into_iter().enumerate() {
            showcase(idx, vehicle);
            if idx + 1 != total {
                mprint!();
            }
        }
    }

    print::header("unique abilities", cfg.quiet);
    car.move_off();
    car.shift_gear(3);
    car.shift_gear(9);
    car.stop();
    mprint!();

    plane.move_off();
    plane.climb_altitude(10_000);
    plane.stop();
    plane.climb_altitude(2_000);
    mprint!();

    boat.move_off();
    boat.drop_anchor();
    boat.stop();
    mprint!();

    bicycle.ring_bell();
    mprint!();

    train.change_station("Harbor Terminal");
    train.move_off();
    train.change_station("Airport Link");
    train.stop();

    print::header("redundant calls", cfg.quiet);
    car.stop();
    car.accelerate(ACCELERATION);
    car.move_off();
    car.move_off();
    car.stop();

    summary(VehicleKind::ALL.len(), cfg);
    Ok(())
}

/// One full lap through the shared contract.
fn showcase(idx: usize, vehicle: &mut dyn Vehicle) {
    print::tree_head(idx, &vehicle.label());
    print::as_tree_one_level(format::snapshot_to_details(&vehicle.info(), &["name", "type"]));
    vehicle.move_off();
    vehicle.accelerate(ACCELERATION);
    vehicle.make_sound();
    vehicle.stop();
}

fn summary(count: usize, cfg: &Config) {
    let vehicles: ColoredString = format!("{count} vehicles").bold().green();
    let contract: ColoredString = "one contract".bold().yellow();
    let output: String = format!(
        "{}",
        format!("Demonstrated {vehicles} behind {contract}").color(colors::TEXT_DEFAULT)
    );

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
            print::end_of_program();
        }
        _ => {
            mprint!();
            print::print_status(&output);
        }
    }
}
