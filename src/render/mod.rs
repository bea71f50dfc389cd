//! Render step.
//!
//! Each frame the simulation draws into the [`Frame`] display list, then the
//! sync systems push that list into Bevy: clear color, pooled sprite
//! entities, overlay UI nodes and the window title.

mod frame;
mod overlay;
mod sprites;

pub use frame::*;
pub use overlay::*;
pub use sprites::*;

use bevy::prelude::*;

use crate::config::colors;
use crate::metrics::RateMeters;
use crate::sim::{Game, Gophermark};

/// Plugin for drawing and presenting frames
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Frame>()
            .insert_resource(ClearColor(colors::BACKGROUND.into()))
            .add_systems(
                Update,
                (
                    draw_frame,
                    (
                        apply_clear_color,
                        sync_gopher_sprites,
                        sync_overlay_rects,
                        sync_overlay_text,
                        apply_window_title,
                    ),
                )
                    .chain()
                    .run_if(resource_exists::<Gophermark>)
                    .run_if(resource_exists::<GopherSprite>),
            );
    }
}

/// Run the simulation's render step into the display list
pub fn draw_frame(gophermark: Res<Gophermark>, meters: Res<RateMeters>, mut frame: ResMut<Frame>) {
    gophermark.draw(&mut *frame, &meters.rates());
}
