//! # Bevy Gophermark
//!
//! A sprite stress test in the "bunnymark" tradition: a growing swarm of
//! gophers bounces under gravity while frames and ticks per second are
//! reported on screen.
//!
//! ## Modules
//!
//! - [`sim`]: Simulation state, per-tick update and host callbacks
//! - [`components`]: The gopher model and random sources
//! - [`render`]: Display list and Bevy sprite/overlay sync
//! - [`metrics`]: Frame and tick rate measurement
//! - [`config`]: Configuration constants
//! - [`error`]: Startup errors

pub mod components;
pub mod config;
pub mod error;
pub mod metrics;
pub mod plugin;
pub mod render;
pub mod sim;

pub use plugin::GophermarkPlugin;
