//! Ship/gate overlap test
//!
//! The ship never moves horizontally, so the horizontal check reduces to
//! whether a gate's bar currently spans the ship's nose-to-base extent.

use super::state::Gate;
use crate::consts::*;

/// True if the ship at vertical position `ship_y` overlaps `gate`.
///
/// Horizontal overlap: the gate's left edge sits strictly between the
/// ship's base (x=70) and nose (x=100). Vertical: the ship's extent
/// falls outside the passable window `[gap_top, gap_top + 150)`.
pub fn ship_hits_gate(ship_y: f32, gate: &Gate) -> bool {
    let in_span = gate.x < SHIP_NOSE_X && gate.x > SHIP_TAIL_X;
    if !in_span {
        return false;
    }
    ship_y - SHIP_HALF_HEIGHT < gate.gap_top || ship_y + SHIP_HALF_HEIGHT > gate.gap_bottom()
}

/// Scan the stream for any overlapping gate
pub fn any_collision(ship_y: f32, gates: &[Gate]) -> bool {
    gates.iter().any(|gate| ship_hits_gate(ship_y, gate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Rgb;

    fn gate(x: f32, gap_top: f32) -> Gate {
        Gate {
            x,
            gap_top,
            color: Rgb::WHITE,
            recolor_ticks: 0,
        }
    }

    #[test]
    fn test_hit_above_gap() {
        // Gap well below the ship - nose clips the upper bar
        assert!(ship_hits_gate(100.0, &gate(85.0, 300.0)));
    }

    #[test]
    fn test_hit_below_gap() {
        // Gap well above the ship - tail clips the lower bar
        assert!(ship_hits_gate(500.0, &gate(85.0, 100.0)));
    }

    #[test]
    fn test_miss_inside_gap() {
        // Ship extent [285, 315] fully inside window [250, 400)
        assert!(!ship_hits_gate(300.0, &gate(85.0, 250.0)));
    }

    #[test]
    fn test_miss_outside_horizontal_span() {
        // Vertically colliding but the gate is not under the ship yet
        assert!(!ship_hits_gate(100.0, &gate(200.0, 300.0)));
        // Already scrolled past the ship's base
        assert!(!ship_hits_gate(100.0, &gate(60.0, 300.0)));
    }

    #[test]
    fn test_span_boundaries_are_exclusive() {
        // x == 100 and x == 70 are outside the strict span
        assert!(!ship_hits_gate(100.0, &gate(100.0, 300.0)));
        assert!(!ship_hits_gate(100.0, &gate(70.0, 300.0)));
    }

    #[test]
    fn test_gap_edges() {
        // Extent exactly flush with the window does not collide
        let g = gate(85.0, 285.0); // window [285, 435)
        assert!(!ship_hits_gate(300.0, &g)); // extent [285, 315]
        // One pixel high clips the upper bar
        assert!(ship_hits_gate(299.0, &g));
    }

    #[test]
    fn test_any_collision_scans_whole_stream() {
        let gates = vec![gate(400.0, 300.0), gate(85.0, 300.0)];
        assert!(any_collision(100.0, &gates));
        assert!(!any_collision(100.0, &gates[..1]));
    }
}
