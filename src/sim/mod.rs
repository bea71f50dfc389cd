//! Simulation core.
//!
//! The host engine owns the run loop and drives a [`Game`] through three
//! callbacks: `update` once per tick, `draw` once per frame, and `layout`
//! whenever the viewport changes size. Nothing here touches the ECS world
//! directly; see [`crate::plugin`] for the Bevy side.

mod gophermark;

pub use gophermark::*;

use bevy::prelude::*;

use crate::metrics::HostRates;
use crate::render::FrameTarget;

/// Input polled by the host once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Primary pointer button is currently held
    pub spawn_held: bool,
    /// Pointer position in screen space (top-left origin)
    pub cursor: Vec2,
}

/// Callbacks the host run loop invokes
pub trait Game {
    /// Advance the simulation by one tick
    fn update(&mut self, input: &TickInput);

    /// Emit the current frame into `target`
    fn draw(&self, target: &mut impl FrameTarget, rates: &HostRates);

    /// React to a viewport resize, returning the logical size to render at
    fn layout(&mut self, width: f32, height: f32) -> (f32, f32);
}
