use std::thread;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use showroom_common::pacing::Pacer;

const TICK: Duration = Duration::from_millis(100);
const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Sleeps behind a spinner that names what is happening.
pub struct SpinnerPacer;

impl Pacer for SpinnerPacer {
    fn pause(&self, duration: Duration, activity: &str) {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
            pb.set_style(style.tick_strings(TICKS));
        }
        pb.set_message(format!("{}", format!("{activity}...").italic().white()));
        pb.enable_steady_tick(TICK);
        thread::sleep(duration);
        pb.finish_and_clear();
    }
}
