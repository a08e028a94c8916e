use std::fmt;

use chrono::Local;
use showroom_common::snapshot::Snapshot;
use showroom_common::{info, success, warn};
use thiserror::Error;

use crate::Transition;
use crate::devices::{DeviceCore, Electronics};

pub const DEFAULT_PASSCODE: &str = "1234";

const STOCK_APPS: [&str; 3] = ["Phone", "Messages", "Settings"];
const HD_THRESHOLD_MP: u32 = 12;

const INSTALL_COST: u8 = 2;
const PHOTO_COST: u8 = 3;
const CALL_COST: u8 = 5;
const PHOTO_MIN_BATTERY: u8 = 5;
const CALL_MIN_BATTERY: u8 = 10;
const LOW_BATTERY_WARNING: u8 = 20;

/// Why a smartphone operation was refused. Nothing is mutated when one is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PhoneError {
    #[error("Please unlock screen first!")]
    ScreenLocked,

    #[error("Incorrect passcode!")]
    IncorrectPasscode,

    #[error("{0} is already installed")]
    AlreadyInstalled(String),

    #[error("Not enough storage space!")]
    StorageFull,

    #[error("Battery too low to {action}!")]
    LowBattery { action: &'static str },

    #[error("Contact '{0}' not found!")]
    ContactNotFound(String),
}

impl PhoneError {
    fn glyph(&self) -> &'static str {
        match self {
            PhoneError::ScreenLocked => "🔒",
            PhoneError::LowBattery { .. } => "🔋",
            PhoneError::StorageFull => "💾",
            PhoneError::AlreadyInstalled(_) => "ℹ️",
            PhoneError::IncorrectPasscode | PhoneError::ContactNotFound(_) => "❌",
        }
    }
}

/// Narrates the refusal and hands it back.
fn refuse<T>(err: PhoneError) -> Result<T, PhoneError> {
    warn!("{} {err}", err.glyph());
    Err(err)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoQuality {
    HD,
    Standard,
}

impl PhotoQuality {
    pub fn for_camera(camera_mp: u32) -> Self {
        if camera_mp >= HD_THRESHOLD_MP {
            PhotoQuality::HD
        } else {
            PhotoQuality::Standard
        }
    }
}

impl fmt::Display for PhotoQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoQuality::HD => f.write_str("HD"),
            PhotoQuality::Standard => f.write_str("Standard"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub quality: PhotoQuality,
    pub file_name: String,
}

#[derive(Debug, Clone)]
pub struct PhoneSpecs {
    pub os: String,
    pub storage_gb: u32,
    pub camera_mp: u32,
    pub battery_mah: u32,
}

pub struct Smartphone {
    core: DeviceCore,
    os: String,
    storage_gb: u32,
    camera_mp: u32,
    battery_mah: u32,
    passcode: String,
    contacts: Vec<Contact>,
    apps: Vec<String>,
    battery_level: u8,
    screen_locked: bool,
}

impl Smartphone {
    pub(crate) fn new(core: DeviceCore, specs: PhoneSpecs) -> Self {
        info!(
            "📱 Smartphone initialized with {}GB storage and {}MP camera",
            specs.storage_gb, specs.camera_mp
        );
        Self {
            core,
            os: specs.os,
            storage_gb: specs.storage_gb,
            camera_mp: specs.camera_mp,
            battery_mah: specs.battery_mah,
            passcode: DEFAULT_PASSCODE.to_string(),
            contacts: Vec::new(),
            apps: STOCK_APPS.iter().map(|app| app.to_string()).collect(),
            battery_level: 100,
            screen_locked: true,
        }
    }

    /// Replaces the demo passcode. Not a credential store.
    pub fn with_passcode(mut self, passcode: &str) -> Self {
        self.passcode = passcode.to_string();
        self
    }

    pub fn os(&self) -> &str {
        &self.os
    }

    pub fn storage_gb(&self) -> u32 {
        self.storage_gb
    }

    pub fn camera_mp(&self) -> u32 {
        self.camera_mp
    }

    pub fn battery_mah(&self) -> u32 {
        self.battery_mah
    }

    pub fn battery_level(&self) -> u8 {
        self.battery_level
    }

    pub fn is_screen_locked(&self) -> bool {
        self.screen_locked
    }

    fn ensure_unlocked(&self) -> Result<(), PhoneError> {
        if self.screen_locked {
            return refuse(PhoneError::ScreenLocked);
        }
        Ok(())
    }

    fn ensure_battery(&self, above: u8, action: &'static str) -> Result<(), PhoneError> {
        if self.battery_level <= above {
            return refuse(PhoneError::LowBattery { action });
        }
        Ok(())
    }

    fn drain(&mut self, percent: u8) {
        self.battery_level = self.battery_level.saturating_sub(percent);
    }

    /// Unlocking an already unlocked phone succeeds.
    pub fn unlock_screen(&mut self, passcode: &str) -> Result<(), PhoneError> {
        if !self.screen_locked {
            info!("ℹ️ Screen is already unlocked");
            return Ok(());
        }
        if passcode != self.passcode {
            return refuse(PhoneError::IncorrectPasscode);
        }
        self.screen_locked = false;
        success!("🔓 Screen unlocked successfully!");
        Ok(())
    }

    pub fn lock_screen(&mut self) -> Transition {
        if self.screen_locked {
            info!("ℹ️ Screen is already locked");
            return Transition::Redundant;
        }
        self.screen_locked = true;
        success!("🔒 Screen locked");
        Transition::Applied
    }

    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<(), PhoneError> {
        self.ensure_unlocked()?;
        self.contacts.push(Contact {
            name: name.to_string(),
            phone: phone.to_string(),
        });
        success!("👤 Contact added: {name} - {phone}");
        Ok(())
    }

    /// Installs an app while fewer than `storage_gb / 4` apps are present.
    pub fn install_app(&mut self, app: &str) -> Result<(), PhoneError> {
        self.ensure_unlocked()?;
        if self.apps.iter().any(|installed| installed == app) {
            return refuse(PhoneError::AlreadyInstalled(app.to_string()));
        }
        let capacity = (self.storage_gb / 4) as usize;
        if self.apps.len() >= capacity {
            return refuse(PhoneError::StorageFull);
        }
        self.apps.push(app.to_string());
        self.drain(INSTALL_COST);
        success!("📲 App installed: {app}");
        Ok(())
    }

    pub fn take_photo(&mut self) -> Result<Photo, PhoneError> {
        self.ensure_unlocked()?;
        self.ensure_battery(PHOTO_MIN_BATTERY, "take photo")?;
        self.drain(PHOTO_COST);

        let quality = PhotoQuality::for_camera(self.camera_mp);
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        success!("📸 Photo taken! Quality: {quality} ({}MP)", self.camera_mp);
        Ok(Photo {
            quality,
            file_name: format!("{quality}_photo_{stamp}.jpg"),
        })
    }

    /// Looks the contact up by case-insensitive name, then checks the battery.
    pub fn make_call(&mut self, contact_name: &str) -> Result<Contact, PhoneError> {
        self.ensure_unlocked()?;
        let wanted = contact_name.to_lowercase();
        let contact = match self
            .contacts
            .iter()
            .find(|contact| contact.name.to_lowercase() == wanted)
        {
            Some(contact) => contact.clone(),
            None => return refuse(PhoneError::ContactNotFound(contact_name.to_string())),
        };
        self.ensure_battery(CALL_MIN_BATTERY, "make call")?;
        self.drain(CALL_COST);
        success!("📞 Calling {} at {}...", contact.name, contact.phone);
        Ok(contact)
    }

    pub fn check_battery(&self) -> u8 {
        let glyph = if self.battery_level > LOW_BATTERY_WARNING { "🔋" } else { "🪫" };
        info!("{glyph} Battery Level: {}%", self.battery_level);
        self.battery_level
    }

    /// Returns the new level, never above 100.
    pub fn charge_battery(&mut self, amount: u32) -> u8 {
        let old = self.battery_level;
        let charged = u32::from(old).saturating_add(amount).min(100);
        self.battery_level = u8::try_from(charged).unwrap_or(100);
        success!(
            "🔌 Charged! Battery: {old}% → {}% (+{}%)",
            self.battery_level,
            self.battery_level.saturating_sub(old)
        );
        self.battery_level
    }

    /// A copy of the contact list. Empty while locked.
    pub fn contacts(&self) -> Vec<Contact> {
        match self.ensure_unlocked() {
            Ok(()) => self.contacts.clone(),
            Err(_) => Vec::new(),
        }
    }

    /// A copy of the installed apps. Empty while locked.
    pub fn installed_apps(&self) -> Vec<String> {
        match self.ensure_unlocked() {
            Ok(()) => self.apps.clone(),
            Err(_) => Vec::new(),
        }
    }

    pub fn smartphone_info(&self) -> Snapshot {
        let own = Snapshot::new()
            .with("os", self.os.as_str())
            .with("storage_gb", self.storage_gb)
            .with("camera_mp", self.camera_mp)
            .with("battery_mah", self.battery_mah)
            .with("battery_level", self.battery_level)
            .with("screen_locked", self.screen_locked)
            .with("contacts_count", self.contacts.len())
            .with("apps_installed", self.apps.len());
        self.device_info().merge(own)
    }
}

impl Electronics for Smartphone {
    fn core(&self) -> &DeviceCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut DeviceCore {
        &mut self.core
    }

    fn kind_name(&self) -> &'static str {
        "Smartphone"
    }

    fn base_power_consumption(&self) -> u32 {
        15
    }
}

impl fmt::Display for Smartphone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}, {}GB, {}MP)",
            self.core.brand(),
            self.core.model(),
            self.os,
            self.storage_gb,
            self.camera_mp
        )
    }
}
