//! Shared building blocks for the showroom workspace.
//!
//! * **[`config`]**: Runtime switches collected from the command line.
//! * **[`pacing`]**: Narration pauses that can be turned off for tests.
//! * **[`random`]**: Seedable random streams.
//! * **[`snapshot`]**: Ordered key/value views of an entity's state.
//!
//! Narration goes through `tracing`. The macros below pin the targets the
//! terminal formatter knows how to render.

pub mod config;
pub mod pacing;
pub mod print;
pub mod random;
pub mod snapshot;

#[doc(hidden)]
pub use tracing;

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "showroom::info", $($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "showroom::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!(target: "showroom::warn", $($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::error!(target: "showroom::error", $($arg)*)
    };
}
