//! Bevy Gophermark
//!
//! Hold the left mouse button to spawn gophers at the cursor.
//!
//! Run with: `cargo run --release`

use bevy::prelude::*;
use bevy_gophermark::config::{APP_NAME, WINDOW_HEIGHT, WINDOW_WIDTH};
use bevy_gophermark::GophermarkPlugin;

fn main() -> AppExit {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: APP_NAME.into(),
                resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                present_mode: bevy::window::PresentMode::AutoNoVsync,
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(GophermarkPlugin::default())
        .run()
}
