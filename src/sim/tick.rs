//! Per-frame simulation tick
//!
//! One call per display frame. All units are pixels and frames, matching
//! the hand-tuned feel of the original game.

use super::collision::any_collision;
use super::state::{GameState, Gate, Rgb};
use crate::consts::*;
use rand::Rng;

/// Input latched for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump impulse, edge-triggered from key-down
    pub flap: bool,
}

/// Advance the game state by one frame.
///
/// Order matters: ship physics runs before the gate pass so the collision
/// check sees this frame's position, and culling happens after the full
/// gate scan so removal can never skip a neighbor.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.viewport.is_degenerate() {
        // Unmeasured or zero-sized surface: skip the frame, retry next one
        return;
    }

    state.time_ticks += 1;

    if input.flap {
        state.ship.flap(&mut state.rng);
    }

    advance_stars(state);
    advance_ship(state);
    advance_gates(state);
    spawn_gate_if_due(state);

    if any_collision(state.ship.y, &state.gates) {
        state.reset_run();
    }
}

/// Scroll the starfield and recycle stars off the left edge
fn advance_stars(state: &mut GameState) {
    let viewport = state.viewport;
    for star in &mut state.stars {
        star.pos.x -= star.speed;
        if star.pos.x < 0.0 {
            // Recycle to the right edge at a fresh height
            star.pos.x = viewport.width;
            star.pos.y = state.rng.random_range(0.0..viewport.height);
        }
    }
}

/// Gravity, integration, and vertical wraparound
fn advance_ship(state: &mut GameState) {
    let ship = &mut state.ship;
    ship.vy += GRAVITY;
    ship.y += ship.vy;

    // Wraparound, not boundary collision: off the bottom reappears on top
    let bottom = state.viewport.height + WRAP_MARGIN;
    if ship.y > bottom {
        ship.y = -WRAP_MARGIN;
    } else if ship.y < -WRAP_MARGIN {
        ship.y = bottom;
    }
}

/// Scroll, periodically recolor, then cull gates in one pass
fn advance_gates(state: &mut GameState) {
    for gate in &mut state.gates {
        gate.x -= SCROLL_SPEED;
        gate.recolor_ticks += 1;
        if gate.recolor_ticks % GATE_RECOLOR_PERIOD == 0 {
            gate.color = Rgb::sample(&mut state.rng);
        }
    }
    // Retain after the scan; in-place removal during iteration would
    // skip the element after each removed one
    state.gates.retain(|gate| gate.x >= GATE_CULL_X);
}

/// Append a gate at the right edge when spacing allows
fn spawn_gate_if_due(state: &mut GameState) {
    let Some(gap_top_max) = state.viewport.gap_top_max() else {
        // Viewport too short to fit a gate right now
        return;
    };

    let due = match state.gates.last() {
        None => true,
        Some(last) => last.x < state.viewport.width - GATE_SPACING,
    };
    if !due {
        return;
    }

    let gate = Gate {
        x: state.viewport.width,
        gap_top: state.rng.random_range(GAP_MIN_TOP..gap_top_max),
        color: Rgb::sample(&mut state.rng),
        recolor_ticks: 0,
    };
    state.gates.push(gate);
}
