//! The gopher: one bouncing sprite.

use bevy::prelude::*;

use crate::components::RandomSource;
use crate::config::{FLOOR_DAMPING, KICK_THRESHOLD, MAX_KICK};

/// 8-bit RGBA color, applied multiplicatively to the sprite when drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Tint {
    pub const WHITE: Tint = Tint::new(255, 255, 255, 255);
    pub const BLACK: Tint = Tint::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Tint> for Color {
    fn from(tint: Tint) -> Self {
        Color::srgba_u8(tint.r, tint.g, tint.b, tint.a)
    }
}

/// A simulated sprite.
///
/// `position` is the top-left corner in screen space (y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Gopher {
    pub position: Vec2,
    pub velocity: Vec2,
    pub tint: Tint,
}

impl Gopher {
    /// Spawn a gopher at `position`.
    ///
    /// Draw order from `rng` is fixed: palette index, then velocity x, then y.
    pub fn spawn<R: RandomSource + ?Sized>(position: Vec2, palette: &[Tint], rng: &mut R) -> Self {
        let tint = palette[rng.next_index(palette.len())];
        let velocity = Vec2::new(rng.next_f32(), rng.next_f32());
        Self {
            position,
            velocity,
            tint,
        }
    }

    /// Advance one tick.
    ///
    /// `bounds` is the largest top-left coordinate that keeps the sprite fully
    /// on screen (viewport size minus sprite size). Only the first matching
    /// boundary reacts.
    #[inline]
    pub fn step<R: RandomSource + ?Sized>(&mut self, gravity: f32, bounds: Vec2, rng: &mut R) {
        self.velocity.y += gravity;
        self.position += self.velocity;

        if self.position.y >= bounds.y {
            self.velocity.y *= FLOOR_DAMPING;
            if rng.next_f32() > KICK_THRESHOLD {
                self.velocity.y -= rng.next_f32() * MAX_KICK;
            }
        } else if self.position.y < 0.0 {
            self.velocity.y = -self.velocity.y;
        } else if self.position.x > bounds.x {
            self.velocity.x = -self.velocity.x.abs();
        } else if self.position.x < 0.0 {
            self.velocity.x = self.velocity.x.abs();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ScriptedRng;
    use crate::config::colors::PALETTE;
    use proptest::prelude::*;

    const BOUNDS: Vec2 = Vec2::new(774.0, 563.0);

    fn gopher(position: Vec2, velocity: Vec2) -> Gopher {
        Gopher {
            position,
            velocity,
            tint: Tint::WHITE,
        }
    }

    #[test]
    fn test_spawn_from_scripted_stream() {
        let mut rng = ScriptedRng::new(vec![0.3, 0.7], vec![2]);
        let g = Gopher::spawn(Vec2::new(50.0, 50.0), &PALETTE, &mut rng);

        assert_eq!(g.position, Vec2::new(50.0, 50.0));
        assert_eq!(g.velocity, Vec2::new(0.3, 0.7));
        assert_eq!(g.tint, Tint::new(0, 255, 0, 125));
    }

    #[test]
    fn test_free_flight_adds_gravity_once() {
        let mut rng = ScriptedRng::default();
        let mut g = gopher(Vec2::new(100.0, 100.0), Vec2::new(1.5, -2.0));
        g.step(0.0981, BOUNDS, &mut rng);

        assert_eq!(g.velocity, Vec2::new(1.5, -2.0 + 0.0981));
        assert_eq!(g.position, Vec2::new(101.5, 100.0 + (-2.0 + 0.0981)));
    }

    #[test]
    fn test_floor_bounce_without_kick() {
        // A draw at exactly the threshold does not kick
        let mut rng = ScriptedRng::constant(0.5, 0);
        let mut g = gopher(Vec2::new(100.0, BOUNDS.y - 1.0), Vec2::new(0.0, 4.0));
        g.step(0.0, BOUNDS, &mut rng);

        assert_eq!(g.velocity.y, 4.0 * FLOOR_DAMPING);
    }

    #[test]
    fn test_floor_bounce_with_kick() {
        let mut rng = ScriptedRng::new(vec![0.9, 0.5], vec![]);
        let mut g = gopher(Vec2::new(100.0, BOUNDS.y), Vec2::new(0.0, 4.0));
        g.step(0.0, BOUNDS, &mut rng);

        assert_eq!(g.velocity.y, 4.0 * FLOOR_DAMPING - 0.5 * MAX_KICK);
    }

    #[test]
    fn test_ceiling_reflects() {
        let mut rng = ScriptedRng::default();
        let mut g = gopher(Vec2::new(100.0, 1.0), Vec2::new(0.0, -3.0));
        g.step(0.0, BOUNDS, &mut rng);

        assert!(g.position.y < 0.0);
        assert_eq!(g.velocity.y, 3.0);
    }

    #[test]
    fn test_right_wall_forces_leftward() {
        let mut rng = ScriptedRng::default();
        let mut g = gopher(Vec2::new(BOUNDS.x, 100.0), Vec2::new(2.0, 0.0));
        g.step(0.0, BOUNDS, &mut rng);

        assert_eq!(g.velocity.x, -2.0);
    }

    #[test]
    fn test_floor_wins_over_walls() {
        let mut rng = ScriptedRng::constant(0.0, 0);
        let mut g = gopher(Vec2::new(-10.0, BOUNDS.y + 5.0), Vec2::new(-2.0, 1.0));
        g.step(0.0, BOUNDS, &mut rng);

        // Left wall would have flipped x; first match is the floor
        assert_eq!(g.velocity.x, -2.0);
        assert_eq!(g.velocity.y, FLOOR_DAMPING);
    }

    #[test]
    fn test_tint_to_color() {
        let color: Color = Tint::new(0, 0, 255, 190).into();
        let srgba = color.to_srgba();
        assert_eq!(srgba.blue, 1.0);
        assert_eq!(srgba.red, 0.0);
        assert!((srgba.alpha - 190.0 / 255.0).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_gravity_accumulates_away_from_walls(
            x in 50.0f32..700.0,
            y in 50.0f32..500.0,
            vx in -1.0f32..1.0,
            vy in -1.0f32..1.0,
        ) {
            let mut rng = ScriptedRng::default();
            let mut g = gopher(Vec2::new(x, y), Vec2::new(vx, vy));
            g.step(0.0981, BOUNDS, &mut rng);

            prop_assert_eq!(g.velocity.y, vy + 0.0981);
            prop_assert_eq!(g.velocity.x, vx);
        }

        #[test]
        fn prop_left_wall_forces_rightward(
            x in -100.0f32..-2.0,
            y in 50.0f32..500.0,
            vx in -5.0f32..5.0,
        ) {
            let mut rng = ScriptedRng::default();
            let mut g = gopher(Vec2::new(x, y), Vec2::new(vx, 0.0));
            g.step(0.0, BOUNDS, &mut rng);

            if g.position.x < 0.0 {
                prop_assert!(g.velocity.x >= 0.0);
            }
        }

        #[test]
        fn prop_floor_bounce_slows_descent(
            vy in 0.5f32..20.0,
            first in 0.0f32..1.0,
            second in 0.0f32..1.0,
        ) {
            let mut rng = ScriptedRng::new(vec![first, second], vec![]);
            let mut g = gopher(Vec2::new(100.0, BOUNDS.y), Vec2::new(0.0, vy));
            g.step(0.0, BOUNDS, &mut rng);

            prop_assert!(g.velocity.y < vy);
        }
    }
}
