//! Gopher sprite loading and the sprite entity pool.

use bevy::asset::RenderAssetUsages;
use bevy::image::{CompressedImageFormats, ImageSampler, ImageType};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::config::{GOPHER_PNG, SPRITE_DEPTH_STEP};
use crate::error::GophermarkError;
use crate::render::Frame;

/// Encoded PNG bytes the gopher sprite is decoded from at startup
#[derive(Resource, Debug, Clone, Copy)]
pub struct SpriteSource(pub &'static [u8]);

impl Default for SpriteSource {
    fn default() -> Self {
        Self(GOPHER_PNG)
    }
}

/// The decoded gopher image, shared read-only by every sprite
#[derive(Resource, Debug, Clone)]
pub struct GopherSprite {
    pub handle: Handle<Image>,
    /// Pixel size of the image
    pub size: Vec2,
}

/// Marks a pooled sprite entity mirroring `Frame::sprites[index]`
#[derive(Component, Debug, Clone, Copy)]
pub struct SpriteSlot {
    pub index: usize,
}

/// Decode an embedded PNG into a Bevy image
pub fn decode_sprite(bytes: &[u8]) -> Result<Image, GophermarkError> {
    let image = Image::from_buffer(
        bytes,
        ImageType::Extension("png"),
        CompressedImageFormats::NONE,
        true,
        ImageSampler::Default,
        RenderAssetUsages::default(),
    )?;

    if image.width() == 0 || image.height() == 0 {
        return Err(GophermarkError::EmptySprite);
    }
    Ok(image)
}

/// Convert a top-left screen coordinate into the world-space center of a
/// sprite, for a 2D camera centered on the viewport with y pointing up.
#[inline]
pub fn screen_to_world(position: Vec2, sprite_size: Vec2, viewport: Vec2) -> Vec2 {
    let center = position + sprite_size / 2.0;
    Vec2::new(center.x - viewport.x / 2.0, viewport.y / 2.0 - center.y)
}

/// Depth of a sprite slot. Grows with the index so sprites overlap in
/// display-list order.
#[inline]
pub fn slot_depth(index: usize) -> f32 {
    index as f32 * SPRITE_DEPTH_STEP
}

/// Mirror `Frame::sprites` into pooled sprite entities.
///
/// Slots are spawned as the list grows and hidden, never despawned, when it
/// shrinks. Existing slots are updated with parallel iteration; each slot's
/// write is independent of every other.
pub fn sync_gopher_sprites(
    mut commands: Commands,
    frame: Res<Frame>,
    gopher_sprite: Res<GopherSprite>,
    window: Single<&Window, With<PrimaryWindow>>,
    mut spawned: Local<usize>,
    mut slots: Query<(&SpriteSlot, &mut Transform, &mut Sprite, &mut Visibility)>,
) {
    let viewport = window.size();
    let sprite_size = gopher_sprite.size;
    let draws = &frame.sprites;

    slots
        .par_iter_mut()
        .for_each(|(slot, mut transform, mut sprite, mut visibility)| {
            let Some(draw) = draws.get(slot.index) else {
                visibility.set_if_neq(Visibility::Hidden);
                return;
            };

            transform.translation = screen_to_world(draw.position, sprite_size, viewport)
                .extend(slot_depth(slot.index));

            // Compare first so unchanged tints don't trigger change detection
            let color = Color::from(draw.tint);
            if sprite.color != color {
                sprite.color = color;
            }
            visibility.set_if_neq(Visibility::Inherited);
        });

    if draws.len() > *spawned {
        let start = *spawned;
        let new_slots: Vec<_> = draws[start..]
            .iter()
            .enumerate()
            .map(|(offset, draw)| {
                let index = start + offset;
                (
                    SpriteSlot { index },
                    Sprite {
                        image: gopher_sprite.handle.clone(),
                        color: draw.tint.into(),
                        ..default()
                    },
                    Transform::from_translation(
                        screen_to_world(draw.position, sprite_size, viewport)
                            .extend(slot_depth(index)),
                    ),
                )
            })
            .collect();

        debug!("Spawning {} sprite slots", new_slots.len());
        commands.spawn_batch(new_slots);
        *spawned = draws.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Tint;
    use crate::render::FrameTarget;

    const SPRITE: Vec2 = Vec2::new(20.0, 30.0);
    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    fn sprite_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<Frame>()
            .insert_resource(GopherSprite {
                handle: Handle::default(),
                size: SPRITE,
            })
            .add_systems(Update, sync_gopher_sprites);
        app.world_mut().spawn((
            Window {
                resolution: (800u32, 600u32).into(),
                ..default()
            },
            PrimaryWindow,
        ));
        app
    }

    /// Replace the display list with `draws`
    fn set_draws(app: &mut App, draws: &[(Vec2, Tint)]) {
        let mut frame = app.world_mut().resource_mut::<Frame>();
        frame.fill(Tint::BLACK);
        for &(position, tint) in draws {
            frame.draw_sprite(position, tint);
        }
    }

    fn slots(app: &mut App) -> Vec<(usize, Vec3, Color, Visibility)> {
        let mut query = app
            .world_mut()
            .query::<(&SpriteSlot, &Transform, &Sprite, &Visibility)>();
        let mut slots: Vec<_> = query
            .iter(app.world())
            .map(|(slot, transform, sprite, visibility)| {
                (slot.index, transform.translation, sprite.color, *visibility)
            })
            .collect();
        slots.sort_by_key(|slot| slot.0);
        slots
    }

    fn expected_translation(position: Vec2, index: usize) -> Vec3 {
        screen_to_world(position, SPRITE, VIEWPORT).extend(slot_depth(index))
    }

    #[test]
    fn test_screen_to_world_corners() {
        assert_eq!(
            screen_to_world(Vec2::ZERO, SPRITE, VIEWPORT),
            Vec2::new(-390.0, 285.0)
        );
        assert_eq!(
            screen_to_world(Vec2::new(780.0, 570.0), SPRITE, VIEWPORT),
            Vec2::new(390.0, -285.0)
        );
    }

    #[test]
    fn test_slot_depth_grows_with_index() {
        assert_eq!(slot_depth(0), 0.0);
        assert!(slot_depth(1) > slot_depth(0));
        // Still distinct for a very large swarm
        assert!(slot_depth(5_000_001) > slot_depth(5_000_000));
    }

    #[test]
    fn test_decode_embedded_sprite() {
        let image = decode_sprite(SpriteSource::default().0).expect("embedded sprite decodes");
        assert!(image.width() > 0);
        assert!(image.height() > 0);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result = decode_sprite(b"definitely not a png");
        assert!(matches!(result, Err(GophermarkError::SpriteDecode(_))));
    }

    #[test]
    fn test_spawned_slots_mirror_draws() {
        let mut app = sprite_app();
        let red = Tint::new(255, 0, 0, 60);
        let blue = Tint::new(0, 0, 255, 190);
        let draws = [
            (Vec2::ZERO, Tint::WHITE),
            (Vec2::new(100.0, 50.0), red),
            (Vec2::new(400.0, 300.0), blue),
        ];
        set_draws(&mut app, &draws);
        app.update();

        let slots = slots(&mut app);
        assert_eq!(slots.len(), 3);
        for (index, ((position, tint), slot)) in draws.iter().zip(&slots).enumerate() {
            assert_eq!(slot.0, index);
            assert_eq!(slot.1, expected_translation(*position, index));
            assert_eq!(slot.2, Color::from(*tint));
            assert_eq!(slot.3, Visibility::Inherited);
        }
    }

    #[test]
    fn test_existing_slots_follow_draws_and_hide_past_the_end() {
        let mut app = sprite_app();
        set_draws(
            &mut app,
            &[
                (Vec2::ZERO, Tint::WHITE),
                (Vec2::new(10.0, 10.0), Tint::WHITE),
                (Vec2::new(20.0, 20.0), Tint::WHITE),
            ],
        );
        app.update();

        let green = Tint::new(0, 255, 0, 125);
        set_draws(&mut app, &[(Vec2::new(300.0, 200.0), green)]);
        app.update();

        let slots = slots(&mut app);
        assert_eq!(slots.len(), 3, "slots are pooled, not respawned");
        assert_eq!(slots[0].1, expected_translation(Vec2::new(300.0, 200.0), 0));
        assert_eq!(slots[0].2, Color::from(green));
        assert_eq!(slots[0].3, Visibility::Inherited);
        assert_eq!(slots[1].3, Visibility::Hidden);
        assert_eq!(slots[2].3, Visibility::Hidden);

        // Growing again reuses the hidden slots
        set_draws(
            &mut app,
            &[
                (Vec2::new(300.0, 200.0), green),
                (Vec2::new(5.0, 5.0), Tint::WHITE),
            ],
        );
        app.update();

        let slots = self::slots(&mut app);
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[1].1, expected_translation(Vec2::new(5.0, 5.0), 1));
        assert_eq!(slots[1].3, Visibility::Inherited);
        assert_eq!(slots[2].3, Visibility::Hidden);
    }
}
