mod commands;
mod terminal;

use commands::{CommandLine, Commands, devices, vehicles};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init(&cfg);
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Vehicles => {
            print::header("polymorphism challenge", cfg.quiet);
            vehicles::vehicles(&cfg)
        }
        Commands::Devices { .. } => {
            print::header("class design demonstration", cfg.quiet);
            devices::devices(&cfg).await
        }
    }
}
