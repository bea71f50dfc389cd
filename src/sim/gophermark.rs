//! The gophermark simulation state and its per-tick rules.

use bevy::prelude::*;

use crate::components::{FastRng, Gopher, RandomSource};
use crate::config::{colors, overlay, GophermarkConfig, APP_NAME};
use crate::metrics::HostRates;
use crate::render::FrameTarget;
use crate::sim::{Game, TickInput};

/// Resource owning every gopher plus the random stream they draw from.
///
/// Gophers are stored in an append-only arena: they are never removed, and
/// callers address them by index since a spawn may reallocate.
#[derive(Resource)]
pub struct Gophermark<R: RandomSource = FastRng> {
    total: usize,
    size: Vec2,
    sprite_size: Vec2,
    gophers: Vec<Gopher>,
    config: GophermarkConfig,
    rng: R,
}

impl<R: RandomSource> Gophermark<R> {
    /// Create the simulation with `config.initial_count` gophers at the origin
    pub fn new(config: GophermarkConfig, sprite_size: Vec2, rng: R) -> Self {
        let mut gophermark = Self {
            total: 0,
            size: Vec2::ZERO,
            sprite_size,
            gophers: Vec::with_capacity(config.initial_count),
            config,
            rng,
        };
        let initial = gophermark.config.initial_count;
        gophermark.spawn_batch(Vec2::ZERO, initial);
        info!("Spawned {} initial gophers", initial);
        gophermark
    }

    /// Total gophers spawned so far
    pub fn total(&self) -> usize {
        self.total
    }

    /// Current viewport size
    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn gophers(&self) -> &[Gopher] {
        &self.gophers
    }

    /// Append `count` gophers at `position`
    pub fn spawn_batch(&mut self, position: Vec2, count: usize) {
        self.gophers.reserve(count);
        for _ in 0..count {
            let gopher = Gopher::spawn(position, &self.config.palette, &mut self.rng);
            self.gophers.push(gopher);
        }
        self.total += count;
    }
}

impl<R: RandomSource> Game for Gophermark<R> {
    fn update(&mut self, input: &TickInput) {
        let bounds = self.size - self.sprite_size;
        let gravity = self.config.gravity;

        for gopher in &mut self.gophers {
            gopher.step(gravity, bounds, &mut self.rng);
        }

        if input.spawn_held {
            let batch = self.config.spawn_batch;
            self.spawn_batch(input.cursor, batch);
            debug!(
                "Spawned {} gophers at ({}, {}), total {}",
                batch, input.cursor.x, input.cursor.y, self.total
            );
        }
    }

    fn draw(&self, target: &mut impl FrameTarget, rates: &HostRates) {
        target.fill(colors::BACKGROUND);

        for gopher in &self.gophers {
            target.draw_sprite(gopher.position, gopher.tint);
        }

        let [x, y, width, height] = overlay::PANEL;
        target.fill_rect(x, y, width, height, colors::PANEL_BG);

        let (x, y) = overlay::FPS_LINE;
        target.print_at(&format!("fps: {:.2}", rates.fps), x, y);
        let (x, y) = overlay::TPS_LINE;
        target.print_at(&format!("tps: {:.2}", rates.tps), x, y);
        let (x, y) = overlay::COUNT_LINE;
        target.print_at(&format!("gophers: {}", self.total), x, y);

        target.set_title(&format!(
            "{}, fps: {:.2}, gophers: {}",
            APP_NAME, rates.fps, self.total
        ));
    }

    fn layout(&mut self, width: f32, height: f32) -> (f32, f32) {
        self.size = Vec2::new(width, height);
        (width, height)
    }
}
