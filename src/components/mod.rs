//! Gopher entity model and the randomness it is spawned from.
//!
//! Gophers are plain data owned by [`crate::sim::Gophermark`], not Bevy
//! entities; the renderer mirrors them into pooled sprite entities.

mod gopher;
mod rng;

pub use gopher::*;
pub use rng::*;
