use showroom_core::devices::{
    DeviceRegistry, Electronics, LaptopSpecs, PhoneError, PhoneSpecs, PhotoQuality, Smartphone,
    DEFAULT_PASSCODE,
};

fn phone(registry: &mut DeviceRegistry, camera_mp: u32) -> Smartphone {
    registry.smartphone(
        "TechPro",
        "X15 Pro",
        899.99,
        PhoneSpecs {
            os: "Android 14".into(),
            storage_gb: 256,
            camera_mp,
            battery_mah: 4500,
        },
    )
}

fn laptop_specs() -> LaptopSpecs {
    LaptopSpecs {
        os: "Linux Ubuntu".into(),
        ram_gb: 16,
        storage_gb: 512,
        screen_size: "15.6 inches".into(),
    }
}

#[test]
fn unlocked_48mp_photo_is_hd_and_costs_three_percent() {
    let mut registry = DeviceRegistry::seeded(1);
    let mut phone = phone(&mut registry, 48);
    phone.unlock_screen(DEFAULT_PASSCODE).unwrap();

    let before = phone.battery_level();
    let photo = phone.take_photo().unwrap();

    assert_eq!(photo.quality, PhotoQuality::HD);
    assert!(photo.file_name.starts_with("HD_photo_"));
    assert_eq!(phone.battery_level(), before - 3);
}

#[test]
fn registry_counts_across_variants_and_never_decreases() {
    let mut registry = DeviceRegistry::seeded(2);
    let mut seen = Vec::new();

    let mut phone = phone(&mut registry, 12);
    seen.push(registry.total_devices());
    let mut laptop = registry.laptop("CompuTech", "PowerBook Pro", 1299.99, laptop_specs());
    seen.push(registry.total_devices());
    {
        let mut generic = registry.device("Generic", "Device", 99.99);
        generic.power_on();
        seen.push(registry.total_devices());
    }

    phone.power_on();
    laptop.power_on();
    laptop.run_program("Editor");
    laptop.close_program("Editor");
    seen.push(registry.total_devices());

    assert_eq!(seen, vec![1, 2, 3, 3]);
}

#[test]
fn locked_phone_soft_fails_then_recovers_after_unlock() {
    let mut registry = DeviceRegistry::seeded(3);
    let mut phone = phone(&mut registry, 8);

    assert_eq!(phone.add_contact("Alice Smith", "+254712345678"), Err(PhoneError::ScreenLocked));
    assert_eq!(phone.install_app("WhatsApp"), Err(PhoneError::ScreenLocked));
    assert_eq!(phone.take_photo(), Err(PhoneError::ScreenLocked));
    assert_eq!(phone.make_call("Alice Smith"), Err(PhoneError::ScreenLocked));
    assert_eq!(phone.battery_level(), 100);

    phone.unlock_screen(DEFAULT_PASSCODE).unwrap();
    assert!(phone.add_contact("Alice Smith", "+254712345678").is_ok());
    assert!(phone.install_app("WhatsApp").is_ok());
    assert_eq!(phone.take_photo().unwrap().quality, PhotoQuality::Standard);
    assert!(phone.make_call("alice smith").is_ok());

    assert_eq!(phone.contacts().len(), 1);
    assert_eq!(phone.installed_apps().len(), 4);
    assert_eq!(phone.battery_level(), 100 - 2 - 3 - 5);
}

#[test]
fn each_variant_draws_its_own_power() {
    let mut registry = DeviceRegistry::seeded(4);
    let mut phone = phone(&mut registry, 48);
    let mut laptop = registry.laptop("CompuTech", "PowerBook Pro", 1299.99, laptop_specs());
    let mut generic = registry.device("Generic", "Device", 99.99);

    phone.power_on();
    laptop.power_on();
    generic.power_on();

    let watts: Vec<u32> = [phone.core(), laptop.core(), generic.core()]
        .iter()
        .map(|core| core.power_consumption())
        .collect();
    assert_eq!(watts, vec![15, 65, 50]);
    assert!(generic.power_on().is_redundant());
}

#[test]
fn charging_is_capped_at_one_hundred() {
    let mut registry = DeviceRegistry::seeded(5);
    let mut phone = phone(&mut registry, 48);
    phone.unlock_screen(DEFAULT_PASSCODE).unwrap();
    for _ in 0..4 {
        phone.take_photo().unwrap();
    }
    assert_eq!(phone.battery_level(), 88);
    assert_eq!(phone.charge_battery(5), 93);
    assert_eq!(phone.charge_battery(50), 100);
}
