//! Immediate-mode drawing surface and its display-list implementation.

use bevy::prelude::*;

use crate::components::Tint;

/// A surface the render step draws one frame into.
///
/// Coordinates are screen pixels from the top-left corner, y downward.
pub trait FrameTarget {
    /// Clear the frame to a solid color, discarding everything drawn so far
    fn fill(&mut self, color: Tint);

    /// Draw the gopher sprite with its top-left corner at `position`
    fn draw_sprite(&mut self, position: Vec2, tint: Tint);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Tint);

    /// Print a line of debug text with its top-left corner at `(x, y)`
    fn print_at(&mut self, text: &str, x: f32, y: f32);

    fn set_title(&mut self, title: &str);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    pub position: Vec2,
    pub tint: Tint,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectDraw {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Tint,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextDraw {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// Display list for the current frame.
///
/// Vectors are cleared, not dropped, on `fill`, so their capacity carries
/// over between frames. The sync systems in this module mirror it into
/// pooled Bevy entities.
#[derive(Resource, Debug, Default)]
pub struct Frame {
    pub clear: Tint,
    pub sprites: Vec<SpriteDraw>,
    pub rects: Vec<RectDraw>,
    pub texts: Vec<TextDraw>,
    pub title: Option<String>,
}

impl FrameTarget for Frame {
    fn fill(&mut self, color: Tint) {
        self.clear = color;
        self.sprites.clear();
        self.rects.clear();
        self.texts.clear();
        self.title = None;
    }

    #[inline]
    fn draw_sprite(&mut self, position: Vec2, tint: Tint) {
        self.sprites.push(SpriteDraw { position, tint });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Tint) {
        self.rects.push(RectDraw {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn print_at(&mut self, text: &str, x: f32, y: f32) {
        self.texts.push(TextDraw {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }
}
