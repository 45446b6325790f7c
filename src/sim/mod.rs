//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame, pixel/frame units
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod idle;
pub mod state;
pub mod tick;

pub use collision::{any_collision, ship_hits_gate};
pub use idle::{IdleScene, Ornament};
pub use state::{GameState, Gate, Rgb, SessionPhase, Ship, Star, Viewport};
pub use tick::{TickInput, tick};
