//! Main gophermark plugin that hosts the simulation inside Bevy.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::components::FastRng;
use crate::config::{GophermarkConfig, TICKS_PER_SECOND};
use crate::metrics::{record_tick, MetricsPlugin};
use crate::render::{decode_sprite, GopherSprite, RenderPlugin, SpriteSource};
use crate::sim::{Game, Gophermark, TickInput};

/// Main plugin for the gophermark
#[derive(Default)]
pub struct GophermarkPlugin {
    pub config: GophermarkConfig,
}

impl Plugin for GophermarkPlugin {
    fn build(&self, app: &mut App) {
        app
            // Resources
            .insert_resource(self.config.clone())
            .insert_resource(Time::<Fixed>::from_hz(TICKS_PER_SECOND))
            .init_resource::<SpriteSource>()
            // Sub-plugins
            .add_plugins(MetricsPlugin)
            .add_plugins(RenderPlugin)
            // Core systems
            .add_systems(Startup, (setup_camera, load_gophermark).chain())
            // Layout before the fixed loop, so a tick never sees a stale viewport
            .add_systems(
                PreUpdate,
                apply_layout.run_if(resource_exists::<Gophermark>),
            )
            .add_systems(
                FixedUpdate,
                (tick_gophermark, record_tick)
                    .chain()
                    .run_if(resource_exists::<Gophermark>),
            )
            .add_systems(Update, handle_input);
    }
}

/// Setup the camera for sprite and UI rendering
fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Decode the sprite and create the simulation sized to the primary window.
///
/// A decode failure is fatal: log it and exit with a non-zero code.
fn load_gophermark(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    config: Res<GophermarkConfig>,
    source: Res<SpriteSource>,
    window: Single<&Window, With<PrimaryWindow>>,
    mut exit: MessageWriter<AppExit>,
) {
    let image = match decode_sprite(source.0) {
        Ok(image) => image,
        Err(e) => {
            error!("Startup failed: {}", e);
            exit.write(AppExit::from_code(1));
            return;
        }
    };

    let sprite_size = image.size_f32();
    commands.insert_resource(GopherSprite {
        handle: images.add(image),
        size: sprite_size,
    });

    let mut gophermark = Gophermark::new((*config).clone(), sprite_size, FastRng::from_time());
    let (width, height) = gophermark.layout(window.width(), window.height());
    info!(
        "Viewport {}x{}, sprite {}x{}",
        width, height, sprite_size.x, sprite_size.y
    );
    commands.insert_resource(gophermark);
}

/// Advance the simulation one tick with the current pointer state
fn tick_gophermark(
    buttons: Res<ButtonInput<MouseButton>>,
    window: Single<&Window, With<PrimaryWindow>>,
    mut cursor: Local<Vec2>,
    mut gophermark: ResMut<Gophermark>,
) {
    // Keep the last known position while the pointer is outside the window
    if let Some(position) = window.cursor_position() {
        *cursor = position;
    }

    gophermark.update(&TickInput {
        spawn_held: buttons.pressed(MouseButton::Left),
        cursor: *cursor,
    });
}

/// Forward primary window resizes to the simulation
fn apply_layout(
    mut resized: MessageReader<WindowResized>,
    primary: Single<Entity, With<PrimaryWindow>>,
    mut gophermark: ResMut<Gophermark>,
) {
    for event in resized.read() {
        let size = Vec2::new(event.width, event.height);
        if event.window != *primary || gophermark.size() == size {
            continue;
        }
        let (width, height) = gophermark.layout(event.width, event.height);
        info!("Viewport resized to {}x{}", width, height);
    }
}

/// Handle keyboard input
fn handle_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    gophermark: Option<Res<Gophermark>>,
    mut exit: MessageWriter<AppExit>,
) {
    // Escape to exit
    if keyboard.just_pressed(KeyCode::Escape) {
        if let Some(gophermark) = gophermark {
            info!("Exiting with {} gophers", gophermark.total());
        }
        exit.write(AppExit::Success);
    }
}
