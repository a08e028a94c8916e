pub mod devices;
pub mod vehicles;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use showroom_common::config::Config;
use showroom_common::pacing::{NoPause, SharedPacer, SleepPacer};

use crate::terminal::spinner::SpinnerPacer;

#[derive(Parser)]
#[command(name = "showroom")]
#[command(about = "Vehicles and gadgets acting out one contract each.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Skip the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reduce output; repeat to silence narration below warnings
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Skip the narration pauses
    #[arg(long, global = true)]
    pub no_pause: bool,

    /// Seed every random choice for a reproducible run
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Drive, fly, sail, pedal and ride through the vehicle lineup
    #[command(alias = "v")]
    Vehicles,
    /// Power up a smartphone and a laptop, then explore them interactively
    #[command(alias = "d")]
    Devices {
        /// Stop after the scripted part
        #[arg(long)]
        no_interactive: bool,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        let interactive = match self.command {
            Commands::Devices { no_interactive } => !no_interactive,
            Commands::Vehicles => false,
        };
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            no_pause: self.no_pause,
            seed: self.seed,
            interactive,
        }
    }
}

pub fn pacer(cfg: &Config) -> SharedPacer {
    if cfg.no_pause {
        Arc::new(NoPause)
    } else if console::Term::stdout().is_term() {
        Arc::new(SpinnerPacer)
    } else {
        Arc::new(SleepPacer)
    }
}
