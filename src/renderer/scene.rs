//! Display-list construction
//!
//! Turns simulation state into a flat list of draw commands. Keeping this
//! platform-neutral means frame composition is unit-testable without a
//! canvas; the wasm backend just replays the list.

use glam::Vec2;
use std::f32::consts::PI;

use crate::consts::*;
use crate::sim::{GameState, IdleScene, Rgb};

/// One 2d drawing primitive, already in screen coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Reset the whole surface
    Clear { width: f32, height: f32 },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
        alpha: f32,
    },
    /// Filled closed polygon; vertices are pre-transformed
    Polygon {
        points: Vec<Vec2>,
        color: Rgb,
        alpha: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgb,
        alpha: f32,
    },
}

impl DrawCmd {
    fn rect(x: f32, y: f32, width: f32, height: f32, color: Rgb) -> Self {
        DrawCmd::Rect {
            x,
            y,
            width,
            height,
            color,
            alpha: 1.0,
        }
    }
}

/// CSS fill-style string for a color and alpha
pub fn css_color(color: Rgb, alpha: f32) -> String {
    if alpha >= 1.0 {
        format!("rgb({},{},{})", color.r, color.g, color.b)
    } else {
        format!("rgba({},{},{},{})", color.r, color.g, color.b, alpha)
    }
}

const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Compose a gameplay frame: background, stars, ship, gates.
///
/// A degenerate viewport yields an empty list (nothing to paint).
pub fn game_frame(state: &GameState, show_stars: bool) -> Vec<DrawCmd> {
    let vp = state.viewport;
    if vp.is_degenerate() {
        return Vec::new();
    }

    let mut cmds = Vec::with_capacity(state.stars.len() + state.gates.len() * 2 + 4);
    cmds.push(DrawCmd::Clear {
        width: vp.width,
        height: vp.height,
    });
    cmds.push(DrawCmd::rect(0.0, 0.0, vp.width, vp.height, BLACK));

    if show_stars {
        for star in &state.stars {
            cmds.push(DrawCmd::rect(
                star.pos.x,
                star.pos.y,
                STAR_SIZE,
                STAR_SIZE,
                Rgb::WHITE,
            ));
        }
    }

    // Ship body: nose forward, base behind
    let y = state.ship.y;
    cmds.push(DrawCmd::Polygon {
        points: vec![
            Vec2::new(SHIP_NOSE_X, y),
            Vec2::new(SHIP_TAIL_X, y + SHIP_HALF_HEIGHT),
            Vec2::new(SHIP_TAIL_X, y - SHIP_HALF_HEIGHT),
        ],
        color: state.ship.color,
        alpha: 1.0,
    });
    cmds.push(DrawCmd::Circle {
        center: Vec2::new(COCKPIT_X, y),
        radius: COCKPIT_RADIUS,
        color: Rgb::WHITE,
        alpha: 1.0,
    });

    for gate in &state.gates {
        // Upper bar down to the gap, lower bar from the gap to the bottom
        cmds.push(DrawCmd::rect(gate.x, 0.0, GATE_WIDTH, gate.gap_top, gate.color));
        cmds.push(DrawCmd::rect(
            gate.x,
            gate.gap_bottom(),
            GATE_WIDTH,
            vp.height - gate.gap_bottom(),
            gate.color,
        ));
    }

    cmds
}

/// Compose an idle-screen frame: black background plus drifting hexagons
pub fn idle_frame(scene: &IdleScene) -> Vec<DrawCmd> {
    let vp = scene.viewport;
    if vp.is_degenerate() {
        return Vec::new();
    }

    let mut cmds = Vec::with_capacity(scene.ornaments.len() + 2);
    cmds.push(DrawCmd::Clear {
        width: vp.width,
        height: vp.height,
    });
    cmds.push(DrawCmd::rect(0.0, 0.0, vp.width, vp.height, BLACK));

    for ornament in &scene.ornaments {
        cmds.push(DrawCmd::Polygon {
            points: hexagon_points(ornament.pos, ornament.size, ornament.rotation),
            color: Rgb::WHITE,
            alpha: ORNAMENT_ALPHA,
        });
    }

    cmds
}

/// Vertices of a regular hexagon, rotated then translated
pub fn hexagon_points(center: Vec2, size: f32, rotation: f32) -> Vec<Vec2> {
    (0..6)
        .map(|i| {
            let angle = rotation + (PI / 3.0) * i as f32;
            center + size * Vec2::new(angle.cos(), angle.sin())
        })
        .collect()
}
