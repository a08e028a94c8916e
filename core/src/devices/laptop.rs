use std::fmt;
use std::ops::RangeInclusive;

use rand::Rng;
use showroom_common::random::Dice;
use showroom_common::snapshot::Snapshot;
use showroom_common::{info, success};

use crate::devices::{DeviceCore, Electronics};

/// Percentage points of CPU a program adds when started and frees when closed.
const CPU_JITTER: RangeInclusive<u32> = 5..=15;

#[derive(Debug, Clone)]
pub struct LaptopSpecs {
    pub os: String,
    pub ram_gb: u32,
    pub storage_gb: u32,
    pub screen_size: String,
}

pub struct Laptop {
    core: DeviceCore,
    os: String,
    ram_gb: u32,
    storage_gb: u32,
    screen_size: String,
    programs: Vec<String>,
    cpu_usage: u32,
    dice: Dice,
}

impl Laptop {
    pub(crate) fn new(core: DeviceCore, specs: LaptopSpecs, dice: Dice) -> Self {
        Self {
            core,
            os: specs.os,
            ram_gb: specs.ram_gb,
            storage_gb: specs.storage_gb,
            screen_size: specs.screen_size,
            programs: Vec::new(),
            cpu_usage: 0,
            dice,
        }
    }

    pub fn os(&self) -> &str {
        &self.os
    }

    pub fn ram_gb(&self) -> u32 {
        self.ram_gb
    }

    pub fn storage_gb(&self) -> u32 {
        self.storage_gb
    }

    pub fn screen_size(&self) -> &str {
        &self.screen_size
    }

    pub fn cpu_usage(&self) -> u32 {
        self.cpu_usage
    }

    pub fn programs_running(&self) -> &[String] {
        &self.programs
    }

    /// Returns `false` if the program was already running.
    pub fn run_program(&mut self, program: &str) -> bool {
        if self.programs.iter().any(|running| running == program) {
            info!("ℹ️ {program} is already running");
            return false;
        }
        self.programs.push(program.to_string());
        self.cpu_usage += self.dice.random_range(CPU_JITTER);
        success!("💻 Running: {program} (CPU: {}%)", self.cpu_usage);
        true
    }

    /// Returns `false` if the program was not running. CPU usage never drops below zero.
    pub fn close_program(&mut self, program: &str) -> bool {
        let Some(idx) = self.programs.iter().position(|running| running == program) else {
            info!("ℹ️ {program} is not running");
            return false;
        };
        self.programs.remove(idx);
        let freed = self.dice.random_range(CPU_JITTER);
        self.cpu_usage = self.cpu_usage.saturating_sub(freed);
        success!("❌ Closed: {program} (CPU: {}%)", self.cpu_usage);
        true
    }

    pub fn system_info(&self) -> Snapshot {
        let own = Snapshot::new()
            .with("os", self.os.as_str())
            .with("ram_gb", self.ram_gb)
            .with("storage_gb", self.storage_gb)
            .with("screen_size", self.screen_size.as_str())
            .with("cpu_usage", self.cpu_usage)
            .with("running_programs", self.programs.len());
        self.device_info().merge(own)
    }
}

impl Electronics for Laptop {
    fn core(&self) -> &DeviceCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut DeviceCore {
        &mut self.core
    }

    fn kind_name(&self) -> &'static str {
        "Laptop"
    }

    fn base_power_consumption(&self) -> u32 {
        65
    }
}

impl fmt::Display for Laptop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.core, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use showroom_common::random::dice;

    fn laptop(seed: u64) -> Laptop {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let core =
            DeviceCore::new("CompuTech", "PowerBook Pro", 1299.99, 3, "SN111111".into(), date);
        let specs = LaptopSpecs {
            os: "Linux Ubuntu".into(),
            ram_gb: 16,
            storage_gb: 512,
            screen_size: "15.6 inches".into(),
        };
        Laptop::new(core, specs, dice(Some(seed)))
    }

    #[test]
    fn running_a_program_adds_bounded_jitter() {
        let mut laptop = laptop(1);
        assert!(laptop.run_program("VS Code"));
        assert!(CPU_JITTER.contains(&laptop.cpu_usage()));
        assert_eq!(laptop.programs_running(), ["VS Code".to_string()]);
    }

    #[test]
    fn duplicate_start_and_unknown_close_are_no_ops() {
        let mut laptop = laptop(2);
        laptop.run_program("Firefox");
        let cpu = laptop.cpu_usage();

        assert!(!laptop.run_program("Firefox"));
        assert!(!laptop.close_program("Terminal"));
        assert_eq!(laptop.cpu_usage(), cpu);
        assert_eq!(laptop.programs_running().len(), 1);
    }

    #[test]
    fn closing_never_underflows() {
        for seed in 0..32 {
            let mut laptop = laptop(seed);
            laptop.run_program("Editor");
            assert!(laptop.close_program("Editor"));
            assert!(laptop.cpu_usage() <= 10);
            assert!(laptop.programs_running().is_empty());
        }
    }

    #[test]
    fn same_seed_same_cpu_story() {
        let mut a = laptop(77);
        let mut b = laptop(77);
        for program in ["a", "b", "c"] {
            a.run_program(program);
            b.run_program(program);
        }
        assert_eq!(a.cpu_usage(), b.cpu_usage());
    }

    #[test]
    fn powers_on_at_laptop_wattage() {
        let mut laptop = laptop(3);
        laptop.power_on();
        assert_eq!(laptop.core().power_consumption(), 65);
        assert_eq!(laptop.system_info().len(), 14);
    }
}
