//! Configuration constants for the gophermark.
//!
//! Modify these values to adjust benchmark behavior. [`GophermarkConfig`]
//! gathers the simulation-facing ones so tests can override them.

use bevy::prelude::*;

use crate::components::Tint;

/// Name shown in the window title
pub const APP_NAME: &str = "Bevy Gophermark";

/// Downward acceleration added to every gopher each tick (pixels/tick^2)
pub const GRAVITY: f32 = 0.0981;

/// Gophers spawned at startup
pub const STARTING_GOPHERS: usize = 1_000;

/// Gophers spawned per tick while the left mouse button is held
pub const GOPHERS_PER_CLICK: usize = 1_000;

/// Simulation tick rate (Hz)
pub const TICKS_PER_SECOND: f64 = 60.0;

/// Vertical velocity multiplier applied on a floor bounce
pub const FLOOR_DAMPING: f32 = 0.85 / 2.0;

/// A uniform draw above this value triggers an upward kick on a floor bounce
pub const KICK_THRESHOLD: f32 = 0.5;

/// Upper bound (exclusive) of the upward kick
pub const MAX_KICK: f32 = 8.0;

/// Interval after which fps/tps are recomputed (seconds)
pub const RATE_WINDOW_SECS: f64 = 1.0;

/// Depth added per sprite slot so later gophers draw over earlier ones
pub const SPRITE_DEPTH_STEP: f32 = 1e-6;

/// Initial logical window size
pub const WINDOW_WIDTH: u32 = 640;
pub const WINDOW_HEIGHT: u32 = 480;

/// Embedded sprite image
pub const GOPHER_PNG: &[u8] = include_bytes!("../assets/gopher.png");

/// Colors, as 8-bit RGBA tints
pub mod colors {
    use crate::components::Tint;

    pub const BACKGROUND: Tint = Tint::BLACK;
    pub const PANEL_BG: Tint = Tint::new(0, 0, 0, 200);
    pub const TEXT: Tint = Tint::WHITE;

    /// Tints a gopher may be spawned with
    pub const PALETTE: [Tint; 4] = [
        Tint::WHITE,
        Tint::new(255, 0, 0, 60),
        Tint::new(0, 255, 0, 125),
        Tint::new(0, 0, 255, 190),
    ];
}

/// Stats overlay placement, in screen pixels from the top-left corner
pub mod overlay {
    /// Panel rectangle: x, y, width, height
    pub const PANEL: [f32; 4] = [10.0, 10.0, 100.0, 50.0];

    pub const FPS_LINE: (f32, f32) = (10.0, 10.0);
    pub const TPS_LINE: (f32, f32) = (10.0, 24.0);
    pub const COUNT_LINE: (f32, f32) = (10.0, 38.0);

    pub const FONT_SIZE: f32 = 11.0;
}

/// Simulation parameters, defaulting to the constants above
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GophermarkConfig {
    pub gravity: f32,
    pub initial_count: usize,
    pub spawn_batch: usize,
    pub palette: [Tint; 4],
}

impl Default for GophermarkConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            initial_count: STARTING_GOPHERS,
            spawn_batch: GOPHERS_PER_CLICK,
            palette: colors::PALETTE,
        }
    }
}
