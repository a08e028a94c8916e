//! Narration pacing.
//!
//! Some transitions pause for a moment so the console story reads naturally
//! (a plane taxiing, a train braking). Pauses never affect state, so tests and
//! `--no-pause` runs swap in [`NoPause`].

use std::sync::Arc;
use std::thread;
use std::time::Duration;

pub const SHORT_PAUSE: Duration = Duration::from_millis(500);
pub const LONG_PAUSE: Duration = Duration::from_secs(1);

pub trait Pacer: Send + Sync {
    /// Blocks for roughly `duration`. `activity` describes what is happening meanwhile.
    fn pause(&self, duration: Duration, activity: &str);
}

/// Sleeps the current thread.
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&self, duration: Duration, _activity: &str) {
        thread::sleep(duration);
    }
}

/// Returns immediately.
pub struct NoPause;

impl Pacer for NoPause {
    fn pause(&self, _duration: Duration, _activity: &str) {}
}

pub type SharedPacer = Arc<dyn Pacer>;

pub fn no_pause() -> SharedPacer {
    Arc::new(NoPause)
}
