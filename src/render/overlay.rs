//! Stats overlay, clear color and window title.
//!
//! Rectangles and text lines from the [`Frame`] are mirrored into absolutely
//! positioned UI nodes. Node geometry is only written when it actually moves,
//! since any `Node` change makes the UI layout engine recompute the tree.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::config::{colors, overlay};
use crate::render::Frame;

/// Marks a pooled UI node mirroring `Frame::rects[index]`
#[derive(Component, Debug, Clone, Copy)]
pub struct OverlayRect {
    pub index: usize,
}

/// Marks a pooled text node mirroring `Frame::texts[index]`
#[derive(Component, Debug, Clone, Copy)]
pub struct OverlayLine {
    pub index: usize,
}

/// Absolutely positioned node anchored at a screen pixel
pub fn absolute_node(x: f32, y: f32) -> Node {
    Node {
        position_type: PositionType::Absolute,
        left: Val::Px(x),
        top: Val::Px(y),
        ..default()
    }
}

/// Font for overlay lines
pub fn overlay_text_font() -> TextFont {
    TextFont {
        font_size: overlay::FONT_SIZE,
        ..default()
    }
}

fn move_node(node: &mut Mut<Node>, x: f32, y: f32) {
    if node.left != Val::Px(x) || node.top != Val::Px(y) {
        node.left = Val::Px(x);
        node.top = Val::Px(y);
    }
}

pub fn apply_clear_color(frame: Res<Frame>, mut clear: ResMut<ClearColor>) {
    let color = Color::from(frame.clear);
    if clear.0 != color {
        clear.0 = color;
    }
}

pub fn sync_overlay_rects(
    mut commands: Commands,
    frame: Res<Frame>,
    mut spawned: Local<usize>,
    mut rects: Query<(&OverlayRect, &mut Node, &mut BackgroundColor, &mut Visibility)>,
) {
    for (rect, mut node, mut background, mut visibility) in &mut rects {
        let Some(draw) = frame.rects.get(rect.index) else {
            visibility.set_if_neq(Visibility::Hidden);
            continue;
        };

        move_node(&mut node, draw.x, draw.y);
        if node.width != Val::Px(draw.width) || node.height != Val::Px(draw.height) {
            node.width = Val::Px(draw.width);
            node.height = Val::Px(draw.height);
        }
        background.set_if_neq(BackgroundColor(draw.color.into()));
        visibility.set_if_neq(Visibility::Inherited);
    }

    for (index, draw) in frame.rects.iter().enumerate().skip(*spawned) {
        commands.spawn((
            OverlayRect { index },
            Node {
                width: Val::Px(draw.width),
                height: Val::Px(draw.height),
                ..absolute_node(draw.x, draw.y)
            },
            BackgroundColor(draw.color.into()),
            ZIndex(0),
        ));
    }
    *spawned = (*spawned).max(frame.rects.len());
}

pub fn sync_overlay_text(
    mut commands: Commands,
    frame: Res<Frame>,
    mut spawned: Local<usize>,
    mut lines: Query<(&OverlayLine, &mut Text, &mut Node, &mut Visibility)>,
) {
    for (line, mut text, mut node, mut visibility) in &mut lines {
        let Some(draw) = frame.texts.get(line.index) else {
            visibility.set_if_neq(Visibility::Hidden);
            continue;
        };

        if text.0 != draw.text {
            text.0.clone_from(&draw.text);
        }
        move_node(&mut node, draw.x, draw.y);
        visibility.set_if_neq(Visibility::Inherited);
    }

    for (index, draw) in frame.texts.iter().enumerate().skip(*spawned) {
        commands.spawn((
            OverlayLine { index },
            Text::new(draw.text.clone()),
            overlay_text_font(),
            TextColor(colors::TEXT.into()),
            absolute_node(draw.x, draw.y),
            ZIndex(1),
        ));
    }
    *spawned = (*spawned).max(frame.texts.len());
}

pub fn apply_window_title(frame: Res<Frame>, window: Single<&mut Window, With<PrimaryWindow>>) {
    let Some(title) = &frame.title else {
        return;
    };

    let mut window = window.into_inner();
    if window.title != *title {
        window.title.clone_from(title);
    }
}
