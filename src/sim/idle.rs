//! Pre-start idle animation
//!
//! A fixed population of translucent hexagons drifts, spins, and bounces
//! off the viewport edges until the session starts. Pure state like the
//! game sim; the renderer turns it into draw commands.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::state::Viewport;
use crate::consts::*;

/// One floating decorative hexagon
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ornament {
    pub pos: Vec2,
    /// Circumradius of the hexagon
    pub size: f32,
    pub vel: Vec2,
    /// Radians, advances by `rotation_speed` each frame
    pub rotation: f32,
    pub rotation_speed: f32,
}

impl Ornament {
    fn sample(rng: &mut impl Rng, viewport: Viewport) -> Self {
        Self {
            pos: Vec2::new(
                rng.random_range(0.0..viewport.width),
                rng.random_range(0.0..viewport.height),
            ),
            size: rng.random_range(ORNAMENT_SIZE_MIN..ORNAMENT_SIZE_MAX),
            vel: Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)),
            rotation: rng.random_range(0.0..TAU),
            rotation_speed: rng.random_range(-0.025..0.025),
        }
    }
}

/// The idle screen's whole state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdleScene {
    pub seed: u64,
    pub viewport: Viewport,
    pub ornaments: Vec<Ornament>,
}

impl IdleScene {
    /// Generate the ornament population once, on entering the idle state
    pub fn new(seed: u64, viewport: Viewport) -> Self {
        let mut scene = Self {
            seed,
            viewport,
            ornaments: Vec::new(),
        };
        scene.populate();
        scene
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if self.ornaments.is_empty() {
            // First non-degenerate measurement arrived after mount
            self.populate();
        }
    }

    fn populate(&mut self) {
        if self.viewport.is_degenerate() {
            return;
        }
        let mut rng = Pcg32::seed_from_u64(self.seed);
        self.ornaments = (0..ORNAMENT_COUNT)
            .map(|_| Ornament::sample(&mut rng, self.viewport))
            .collect();
    }

    /// Advance one frame: translate, rotate, bounce elastically off edges
    pub fn tick(&mut self) {
        if self.viewport.is_degenerate() {
            return;
        }
        for ornament in &mut self.ornaments {
            ornament.pos += ornament.vel;
            ornament.rotation += ornament.rotation_speed;

            if ornament.pos.x < 0.0 || ornament.pos.x > self.viewport.width {
                ornament.vel.x = -ornament.vel.x;
            }
            if ornament.pos.y < 0.0 || ornament.pos.y > self.viewport.height {
                ornament.vel.y = -ornament.vel.y;
            }
        }
    }
}
