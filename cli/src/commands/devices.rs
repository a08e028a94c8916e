pub mod menu;

use showroom_common::config::Config;
use showroom_common::random;
use showroom_common::success;
use showroom_core::devices::{
    DEFAULT_PASSCODE, DeviceRegistry, Electronics, Laptop, LaptopSpecs, PhoneSpecs, Smartphone,
};

use crate::mprint;
use crate::terminal::{format, print};
use menu::Menu;

pub async fn devices(cfg: &Config) -> anyhow::Result<()> {
    let mut registry = DeviceRegistry::new(random::dice(cfg.seed));

    print::header("creating devices", cfg.quiet);
    let mut phone = registry.smartphone(
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
    let mut laptop = registry.laptop(
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
    print::print_status(format!("Total electronics created: {}", registry.total_devices()));

    print::header("polymorphism: power consumption", cfg.quiet);
    phone.power_on();
    laptop.power_on();

    print::header("encapsulation: smartphone", cfg.quiet);
    encapsulation_tour(&mut phone);

    print::header("inheritance: device information", cfg.quiet);
    print_snapshots(&phone, &laptop);

    print::header("overriding: the base hook", cfg.quiet);
    let mut generic = registry.device("Generic", "Device", 99.99);
    generic.power_on();
    print::print_status(format!("{generic} draws {}W", generic.core().power_consumption()));

    if !cfg.interactive {
        mprint!();
        success!("Scripted demonstration complete");
        print::end_of_program();
        return Ok(());
    }

    print::header("interactive demonstration", cfg.quiet);
    menu::run_until_interrupted(Menu::new(registry, phone, laptop)).await?;
    print::end_of_program();
    Ok(())
}

/// Shows the lock guarding every sensitive operation, then what opens up behind it.
fn encapsulation_tour(phone: &mut Smartphone) {
    phone.check_battery();
    let _ = phone.take_photo();
    let _ = phone.unlock_screen(DEFAULT_PASSCODE);
    let _ = phone.add_contact("Alice Smith", "+254712345678");
    let _ = phone.add_contact("Bob Johnson", "+254798765432");
    let _ = phone.install_app("WhatsApp");
    let _ = phone.install_app("Instagram");
    if let Ok(photo) = phone.take_photo() {
        print::print_status(format!("📁 Photo saved as: {}", photo.file_name));
    }
    let _ = phone.make_call("Alice Smith");
    phone.check_battery();
}

fn print_snapshots(phone: &Smartphone, laptop: &Laptop) {
    print::tree_head(0, &phone.to_string());
    print::as_tree_one_level(format::snapshot_to_details(&phone.smartphone_info(), &[]));
    mprint!();
    print::tree_head(1, &laptop.to_string());
    print::as_tree_one_level(format::snapshot_to_details(&laptop.system_info(), &[]));
}
