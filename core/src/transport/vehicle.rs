use std::fmt;
use std::time::Duration;

use rand::seq::IndexedRandom;
use showroom_common::pacing::SharedPacer;
use showroom_common::random::Dice;
use showroom_common::snapshot::Snapshot;
use showroom_common::{info, warn};

use crate::Transition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    Car,
    Plane,
    Boat,
    Bicycle,
    Train,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 5] = [
        VehicleKind::Car,
        VehicleKind::Plane,
        VehicleKind::Boat,
        VehicleKind::Bicycle,
        VehicleKind::Train,
    ];

    pub fn fuel_type(self) -> &'static str {
        match self {
            VehicleKind::Car => "Gasoline",
            VehicleKind::Plane => "Jet Fuel",
            VehicleKind::Boat => "Diesel",
            VehicleKind::Bicycle => "Human Power",
            VehicleKind::Train => "Electric",
        }
    }

    /// Top speed in km/h used when none is given.
    pub fn default_max_speed(self) -> u32 {
        match self {
            VehicleKind::Car => 180,
            VehicleKind::Plane => 900,
            VehicleKind::Boat => 60,
            VehicleKind::Bicycle => 40,
            VehicleKind::Train => 300,
        }
    }

    pub fn default_capacity(self) -> u32 {
        match self {
            VehicleKind::Car => 5,
            VehicleKind::Plane => 200,
            VehicleKind::Boat => 50,
            VehicleKind::Bicycle => 2,
            VehicleKind::Train => 500,
        }
    }

    /// Speed in km/h right after a successful `move_off`.
    pub fn starting_speed(self) -> u32 {
        match self {
            VehicleKind::Car => 30,
            VehicleKind::Plane => 250,
            VehicleKind::Boat => 25,
            VehicleKind::Bicycle => 15,
            VehicleKind::Train => 80,
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VehicleKind::Car => "Car",
            VehicleKind::Plane => "Plane",
            VehicleKind::Boat => "Boat",
            VehicleKind::Bicycle => "Bicycle",
            VehicleKind::Train => "Train",
        };
        f.write_str(name)
    }
}

/// What a vehicle needs from its surroundings: a private random stream for
/// sounds and a pacer for narration pauses.
pub struct Kit {
    pub dice: Dice,
    pub pacer: SharedPacer,
}

/// State and behavior shared by every vehicle.
///
/// Invariants: `current_speed <= max_speed`, and `current_speed == 0`
/// whenever the vehicle is not moving.
pub struct VehicleCore {
    name: String,
    kind: VehicleKind,
    max_speed: u32,
    capacity: u32,
    current_speed: u32,
    moving: bool,
    fuel_level: u8,
    distance_traveled: f64,
    dice: Dice,
    pacer: SharedPacer,
}

impl VehicleCore {
    pub fn new(kind: VehicleKind, name: &str, max_speed: u32, capacity: u32, kit: Kit) -> Self {
        Self {
            name: name.to_string(),
            kind,
            max_speed,
            capacity,
            current_speed: 0,
            moving: false,
            fuel_level: 100,
            distance_traveled: 0.0,
            dice: kit.dice,
            pacer: kit.pacer,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    pub fn max_speed(&self) -> u32 {
        self.max_speed
    }

    pub fn fuel_type(&self) -> &'static str {
        self.kind.fuel_type()
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn current_speed(&self) -> u32 {
        self.current_speed
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn fuel_level(&self) -> u8 {
        self.fuel_level
    }

    pub fn distance_traveled(&self) -> f64 {
        self.distance_traveled
    }

    /// Enters the moving state at the variant's starting speed, capped by `max_speed`.
    pub(crate) fn start(&mut self) -> u32 {
        self.moving = true;
        self.current_speed = self.kind.starting_speed().min(self.max_speed);
        self.current_speed
    }

    pub(crate) fn halt(&mut self) {
        self.current_speed = 0;
        self.moving = false;
    }

    pub(crate) fn pause(&self, duration: Duration, activity: &str) {
        self.pacer.pause(duration, activity);
    }

    pub(crate) fn sound(&mut self, sounds: &[&'static str]) -> &'static str {
        let sound = sounds.choose(&mut self.dice).copied().unwrap_or("...");
        info!("🔊 {sound}");
        sound
    }

    pub fn accelerate(&mut self, delta: u32) -> Option<u32> {
        if !self.moving {
            warn!("{} is not moving. Move off first!", self.name);
            return None;
        }
        let old_speed = self.current_speed;
        self.current_speed = self.max_speed.min(old_speed.saturating_add(delta));
        info!(
            "⚡ {} accelerated: {} → {} km/h",
            self.name, old_speed, self.current_speed
        );
        Some(self.current_speed)
    }

    pub fn snapshot(&self) -> Snapshot {
        let status = if self.moving { "Moving" } else { "Stopped" };
        Snapshot::new()
            .with("name", self.name.as_str())
            .with("type", self.kind.to_string())
            .with("max_speed", self.max_speed)
            .with("current_speed", self.current_speed)
            .with("fuel_type", self.fuel_type())
            .with("capacity", self.capacity)
            .with("status", status)
            .with("fuel_level", format!("{}%", self.fuel_level))
            .with("distance_traveled", format!("{:.1} km", self.distance_traveled))
    }
}

/// The contract every vehicle variant fulfils.
///
/// `move_off`, `stop` and `make_sound` are variant specific. Calling
/// `move_off` on a moving vehicle or `stop` on a stopped one is narrated and
/// returns [`Transition::Redundant`] without touching state.
pub trait Vehicle {
    fn core(&self) -> &VehicleCore;
    fn core_mut(&mut self) -> &mut VehicleCore;

    fn move_off(&mut self) -> Transition;
    fn stop(&mut self) -> Transition;
    fn make_sound(&mut self) -> &'static str;

    /// Raises the speed by `delta`, capped at `max_speed`. `None` when not moving.
    fn accelerate(&mut self, delta: u32) -> Option<u32> {
        self.core_mut().accelerate(delta)
    }

    fn info(&self) -> Snapshot {
        self.core().snapshot()
    }

    fn name(&self) -> &str {
        self.core().name()
    }

    fn kind(&self) -> VehicleKind {
        self.core().kind()
    }

    fn is_moving(&self) -> bool {
        self.core().is_moving()
    }

    fn current_speed(&self) -> u32 {
        self.core().current_speed()
    }

    fn label(&self) -> String {
        format!("{}: {}", self.kind(), self.name())
    }
}
