//! # Showroom core
//!
//! The two demonstration domains.
//!
//! * **[`transport`]**: the [`transport::Vehicle`] contract and its five variants.
//! * **[`devices`]**: the [`devices::Electronics`] contract, smartphones and laptops.
//!
//! Invalid operations never abort. They are narrated and surface as a
//! [`Transition::Redundant`], a `None`, a `false`, or a typed soft-fail error.

pub mod devices;
pub mod transport;

mod transition;

pub use transition::Transition;
