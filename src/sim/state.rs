//! Game state and core simulation types
//!
//! Everything needed for deterministic replay lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of a mounted session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Pre-start: the idle ornament loop runs, jump input is ignored
    Idle,
    /// Active gameplay; one-way for a given mount (no pause, no game over)
    Running,
}

/// Latest measured drawing surface dimensions.
///
/// Zero is a valid transient state before the first measurement; a
/// degenerate viewport yields a skipped frame, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// True when there is nothing meaningful to simulate or draw
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Upper bound for gap sampling; `None` while the viewport is too
    /// short to fit a gate (gap range would be empty)
    pub fn gap_top_max(&self) -> Option<f32> {
        let max = self.height - GAP_HEIGHT;
        (max > GAP_MIN_TOP).then_some(max)
    }
}

/// Opaque color from three independent uniform 8-bit samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub fn sample(rng: &mut impl Rng) -> Self {
        Self {
            r: rng.random(),
            g: rng.random(),
            b: rng.random(),
        }
    }
}

/// A background parallax star
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    /// Leftward speed, pixels per frame
    pub speed: f32,
}

impl Star {
    /// Sample a star uniformly within the viewport
    pub fn sample(rng: &mut impl Rng, viewport: Viewport) -> Self {
        Self {
            pos: Vec2::new(
                rng.random_range(0.0..viewport.width),
                rng.random_range(0.0..viewport.height),
            ),
            speed: rng.random_range(STAR_SPEED_MIN..STAR_SPEED_MAX),
        }
    }
}

/// A vertical barrier pair with a passable window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gate {
    /// Left edge; decreases every frame
    pub x: f32,
    /// Top of the passable window, offset from the top of the viewport
    pub gap_top: f32,
    pub color: Rgb,
    /// Frames since spawn, drives periodic recoloring
    pub recolor_ticks: u32,
}

impl Gate {
    /// Bottom of the passable window
    pub fn gap_bottom(&self) -> f32 {
        self.gap_top + GAP_HEIGHT
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    /// Vertical position, wraps into `[-WRAP_MARGIN, height + WRAP_MARGIN)`
    pub y: f32,
    /// Vertical velocity, positive is down
    pub vy: f32,
    pub color: Rgb,
}

impl Ship {
    fn spawn(rng: &mut impl Rng, viewport: Viewport) -> Self {
        Self {
            y: viewport.height / 2.0,
            vy: 0.0,
            color: Rgb::sample(rng),
        }
    }

    /// Apply the jump impulse: velocity is set, not added, and the ship
    /// takes a fresh random color
    pub fn flap(&mut self, rng: &mut impl Rng) {
        self.vy = FLAP_VELOCITY;
        self.color = Rgb::sample(rng);
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// All randomness flows through this one generator
    pub rng: Pcg32,
    pub viewport: Viewport,
    pub ship: Ship,
    /// Ordered left-to-right; spawn order is screen order
    pub gates: Vec<Gate>,
    /// Fixed population, recycled rather than destroyed
    pub stars: Vec<Star>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a fresh run with the given seed and viewport
    pub fn new(seed: u64, viewport: Viewport) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ship = Ship::spawn(&mut rng, viewport);

        let stars = if viewport.is_degenerate() {
            Vec::new()
        } else {
            (0..STAR_COUNT)
                .map(|_| Star::sample(&mut rng, viewport))
                .collect()
        };

        Self {
            seed,
            rng,
            viewport,
            ship,
            gates: Vec::new(),
            stars,
            time_ticks: 0,
        }
    }

    /// Reflect a window resize into the simulation
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        // Stars are created lazily if the first measurement was degenerate
        if self.stars.is_empty() && !viewport.is_degenerate() {
            self.stars = (0..STAR_COUNT)
                .map(|_| Star::sample(&mut self.rng, viewport))
                .collect();
        }
    }

    /// Silent recovery after a collision: recenter the ship, clear the
    /// gate stream, re-randomize the ship color. Stars persist.
    pub fn reset_run(&mut self) {
        self.ship.y = self.viewport.height / 2.0;
        self.ship.vy = 0.0;
        self.ship.color = Rgb::sample(&mut self.rng);
        self.gates.clear();
    }
}
