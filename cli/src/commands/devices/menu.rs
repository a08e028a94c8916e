//! The interactive part of the devices demonstration.
//!
//! [`Menu`] reads choices line by line from any [`BufRead`] and writes its
//! prompts to any [`Write`], so it runs the same against a terminal or a test
//! buffer. Device narration still goes through the tracing macros.

use std::any::Any;
use std::io::{self, BufRead, Write};
use std::panic::{self, AssertUnwindSafe};
use std::thread;

use anyhow::Context;
use showroom_common::{error, info, success, warn};
use showroom_core::devices::{DeviceRegistry, Laptop, Smartphone};
use tokio::signal;
use tokio::sync::oneshot;

use crate::terminal::print;

pub const DEFAULT_CHARGE: u32 = 50;

const MAIN_MENU: &str = "\
Choose an action:
1. 📱 Smartphone operations
2. 💻 Laptop operations
3. 📊 Show device statistics
4. 🔋 Charge phone battery
5. ❌ Exit
";

const PHONE_MENU: &str = "\
Smartphone Operations:
a. Install app
b. Take photo
c. Make call
d. Lock/unlock screen
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    /// The user picked the exit entry.
    Chosen,
    /// Input ran out.
    EndOfInput,
}

enum Flow {
    Continue,
    Exit,
    EndOfInput,
}

pub struct Menu {
    registry: DeviceRegistry,
    phone: Smartphone,
    laptop: Laptop,
}

impl Menu {
    pub fn new(registry: DeviceRegistry, phone: Smartphone, laptop: Laptop) -> Self {
        Self {
            registry,
            phone,
            laptop,
        }
    }

    /// Loops until the exit entry or end of input. An error or panic inside one
    /// round is reported and the loop carries on.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut out: W,
    ) -> anyhow::Result<MenuExit> {
        loop {
            let caught = panic::catch_unwind(AssertUnwindSafe(|| self.round(&mut input, &mut out)));
            let round = match caught {
                Ok(round) => round,
                Err(payload) => {
                    error!("❌ Unexpected error: {}", panic_message(payload.as_ref()));
                    continue;
                }
            };
            match round {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    success!("👋 Thanks for exploring the class demonstration!");
                    return Ok(MenuExit::Chosen);
                }
                Ok(Flow::EndOfInput) => {
                    info!("👋 Demonstration ended by user.");
                    return Ok(MenuExit::EndOfInput);
                }
                Err(e) => error!("❌ Error: {e:#}"),
            }
        }
    }

    fn round<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> anyhow::Result<Flow> {
        write!(out, "\n{MAIN_MENU}")?;
        let Some(choice) = prompt(input, out, "Enter choice (1-5): ")? else {
            return Ok(Flow::EndOfInput);
        };

        match choice.as_str() {
            "1" => self.smartphone_round(input, out),
            "2" => self.laptop_round(input, out),
            "3" => {
                self.statistics();
                Ok(Flow::Continue)
            }
            "4" => self.charge_round(input, out),
            "5" => Ok(Flow::Exit),
            _ => {
                warn!("❌ Invalid choice. Please try again.");
                Ok(Flow::Continue)
            }
        }
    }

    fn smartphone_round<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> anyhow::Result<Flow> {
        write!(out, "\n{PHONE_MENU}")?;
        let Some(sub_choice) = prompt(input, out, "Choose (a-d): ")? else {
            return Ok(Flow::EndOfInput);
        };

        match sub_choice.to_lowercase().as_str() {
            "a" => {
                let Some(app) = prompt(input, out, "Enter app name: ")? else {
                    return Ok(Flow::EndOfInput);
                };
                let _ = self.phone.install_app(&app);
            }
            "b" => {
                if let Ok(photo) = self.phone.take_photo() {
                    print::print_status(format!("📁 Photo saved as: {}", photo.file_name));
                }
            }
            "c" => {
                let Some(contact) = prompt(input, out, "Enter contact name: ")? else {
                    return Ok(Flow::EndOfInput);
                };
                let _ = self.phone.make_call(&contact);
            }
            "d" => {
                if self.phone.is_screen_locked() {
                    let Some(passcode) = prompt(input, out, "Enter passcode: ")? else {
                        return Ok(Flow::EndOfInput);
                    };
                    let _ = self.phone.unlock_screen(&passcode);
                } else {
                    self.phone.lock_screen();
                }
            }
            _ => warn!("❌ Invalid choice. Please try again."),
        }
        Ok(Flow::Continue)
    }

    fn laptop_round<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> anyhow::Result<Flow> {
        writeln!(out, "\nLaptop Operations:")?;
        let Some(program) = prompt(input, out, "Enter program to run: ")? else {
            return Ok(Flow::EndOfInput);
        };
        if program.is_empty() {
            warn!("❌ No program name given");
        } else {
            self.laptop.run_program(&program);
        }
        Ok(Flow::Continue)
    }

    fn charge_round<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> anyhow::Result<Flow> {
        let prompt_text = format!("Enter charge amount (default {DEFAULT_CHARGE}): ");
        let Some(amount) = prompt(input, out, &prompt_text)? else {
            return Ok(Flow::EndOfInput);
        };
        self.phone.charge_battery(parse_charge(&amount));
        Ok(Flow::Continue)
    }

    fn statistics(&self) {
        info!("📊 Device Statistics:");
        print::print_status(format!("Total devices created: {}", self.registry.total_devices()));
        let battery = self.phone.check_battery();
        print::print_status(format!("Phone battery: {battery}%"));
        print::print_status(format!("Phone contacts: {}", self.phone.contacts().len()));
        print::print_status(format!("Phone apps: {}", self.phone.installed_apps().len()));
        print::print_status(format!(
            "Laptop programs: {} (CPU: {}%)",
            self.laptop.programs_running().len(),
            self.laptop.cpu_usage()
        ));
    }
}

/// Writes `text`, then reads one line. `None` once input is exhausted.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> anyhow::Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read from input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg
    } else {
        "round aborted"
    }
}

/// Plain digits parse as the amount. Anything else, including an empty line or
/// an out-of-range number, falls back to [`DEFAULT_CHARGE`].
pub fn parse_charge(raw: &str) -> u32 {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return DEFAULT_CHARGE;
    }
    raw.parse().unwrap_or(DEFAULT_CHARGE)
}

/// Runs the menu against the terminal until it finishes or Ctrl-C arrives.
///
/// The menu blocks on stdin, so it lives on its own thread. On Ctrl-C that
/// thread is abandoned and the process exits with the caller.
pub async fn run_until_interrupted(mut menu: Menu) -> anyhow::Result<()> {
    let (tx, rx) = oneshot::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        let outcome = menu.run(stdin.lock(), io::stdout());
        let _ = tx.send(outcome);
    });

    tokio::select! {
        outcome = rx => {
            outcome.context("menu thread stopped unexpectedly")??;
        }
        _ = signal::ctrl_c() => {
            crate::mprint!();
            info!("👋 Demonstration ended by user.");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use showroom_core::devices::{DEFAULT_PASSCODE, LaptopSpecs, PhoneSpecs};

    fn menu() -> Menu {
        let mut registry = DeviceRegistry::seeded(5);
        let phone = registry.smartphone(
            "TechPro",
            "X15 Pro",
            899.99,
            PhoneSpecs {
                os: "Android 14".into(),
                storage_gb: 256,
                camera_mp: 48,
                battery_mah: 4500,
            },
        );
        let laptop = registry.laptop(
            "CompuTech",
            "PowerBook Pro",
            1299.99,
            LaptopSpecs {
                os: "Linux Ubuntu".into(),
                ram_gb: 16,
                storage_gb: 512,
                screen_size: "15.6 inches".into(),
            },
        );
        Menu::new(registry, phone, laptop)
    }

    fn drive(menu: &mut Menu, script: &str) -> (MenuExit, String) {
        let mut out = Vec::new();
        let exit = menu.run(script.as_bytes(), &mut out).unwrap();
        (exit, String::from_utf8(out).unwrap())
    }

    #[test]
    fn exit_choice_ends_the_loop() {
        let (exit, out) = drive(&mut menu(), "5\n");
        assert_eq!(exit, MenuExit::Chosen);
        assert!(out.contains("Enter choice (1-5): "));
    }

    #[test]
    fn end_of_input_ends_the_loop() {
        let (exit, _) = drive(&mut menu(), "");
        assert_eq!(exit, MenuExit::EndOfInput);
    }

    #[test]
    fn invalid_choices_reprompt() {
        let (exit, out) = drive(&mut menu(), "9\nhello\n5\n");
        assert_eq!(exit, MenuExit::Chosen);
        assert_eq!(out.matches("Enter choice (1-5): ").count(), 3);
    }

    #[test]
    fn non_numeric_charge_uses_the_default() {
        let mut menu = menu();
        menu.phone.unlock_screen(DEFAULT_PASSCODE).unwrap();
        for _ in 0..30 {
            menu.phone.take_photo().unwrap();
        }
        assert_eq!(menu.phone.battery_level(), 10);

        drive(&mut menu, "4\nabc\n5\n");
        assert_eq!(menu.phone.battery_level(), 60);
    }

    #[test]
    fn numeric_charge_is_applied() {
        let mut menu = menu();
        menu.phone.unlock_screen(DEFAULT_PASSCODE).unwrap();
        for _ in 0..10 {
            menu.phone.take_photo().unwrap();
        }
        drive(&mut menu, "4\n7\n5\n");
        assert_eq!(menu.phone.battery_level(), 77);
    }

    #[test]
    fn toggling_the_lock_asks_for_the_passcode() {
        let mut menu = menu();
        drive(&mut menu, "1\nd\n0000\n");
        assert!(menu.phone.is_screen_locked());

        drive(&mut menu, "1\nd\n1234\n1\nb\n5\n");
        assert!(!menu.phone.is_screen_locked());
        assert_eq!(menu.phone.battery_level(), 97);

        drive(&mut menu, "1\nD\n5\n");
        assert!(menu.phone.is_screen_locked());
    }

    #[test]
    fn laptop_round_starts_programs() {
        let mut menu = menu();
        drive(&mut menu, "2\nVS Code\n2\nVS Code\n2\n\n5\n");
        assert_eq!(menu.laptop.programs_running(), ["VS Code".to_string()]);
    }

    #[test]
    fn statistics_do_not_mutate() {
        let mut menu = menu();
        let total = menu.registry.total_devices();
        drive(&mut menu, "3\n5\n");
        assert_eq!(menu.registry.total_devices(), total);
        assert_eq!(menu.phone.battery_level(), 100);
    }

    #[test]
    fn read_errors_are_reported_and_the_loop_continues() {
        struct Flaky {
            failed: bool,
            rest: &'static [u8],
        }

        impl io::Read for Flaky {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                if !self.failed {
                    self.failed = true;
                    return Err(io::Error::other("glitch"));
                }
                io::Read::read(&mut self.rest, buf)
            }
        }

        let input = io::BufReader::new(Flaky { failed: false, rest: b"5\n" });
        let mut out = Vec::new();
        let exit = menu().run(input, &mut out).unwrap();
        assert_eq!(exit, MenuExit::Chosen);
    }

    #[test]
    fn charging_with_the_largest_amount_fills_the_battery() {
        let mut menu = menu();
        menu.phone.unlock_screen(DEFAULT_PASSCODE).unwrap();
        menu.phone.take_photo().unwrap();

        let (exit, _) = drive(&mut menu, "4\n4294967295\n5\n");
        assert_eq!(exit, MenuExit::Chosen);
        assert_eq!(menu.phone.battery_level(), 100);
    }

    #[test]
    fn a_panicking_round_is_reported_and_the_loop_continues() {
        struct Explosive {
            exploded: bool,
            rest: &'static [u8],
        }

        impl io::Read for Explosive {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                if !self.exploded {
                    self.exploded = true;
                    panic!("boom");
                }
                io::Read::read(&mut self.rest, buf)
            }
        }

        let input = io::BufReader::new(Explosive { exploded: false, rest: b"5\n" });
        let mut out = Vec::new();
        let exit = menu().run(input, &mut out).unwrap();
        assert_eq!(exit, MenuExit::Chosen);
        assert_eq!(String::from_utf8(out).unwrap().matches("Enter choice (1-5): ").count(), 2);
    }

    #[test]
    fn parse_charge_accepts_only_digits() {
        assert_eq!(parse_charge("25"), 25);
        assert_eq!(parse_charge(""), DEFAULT_CHARGE);
        assert_eq!(parse_charge("-5"), DEFAULT_CHARGE);
        assert_eq!(parse_charge("12.5"), DEFAULT_CHARGE);
        assert_eq!(parse_charge("99999999999999"), DEFAULT_CHARGE);
    }
}
