//! Flappy Space - a side-scrolling dodge-the-gates mini-game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, gate stream, collision, idle scene)
//! - `session`: Idle -> Running state machine and the per-frame procedure
//! - `renderer`: Display-list builder plus a canvas 2d backend for the browser
//! - `settings`: User preferences persisted in LocalStorage

pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::Session;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Downward acceleration per frame
    pub const GRAVITY: f32 = 0.2;
    /// Vertical velocity set (not added) on a jump input
    pub const FLAP_VELOCITY: f32 = -6.0;
    /// Ship wraps past `height + WRAP_MARGIN` to `-WRAP_MARGIN` and back
    pub const WRAP_MARGIN: f32 = 20.0;

    /// Horizontal scroll speed of gates, pixels per frame
    pub const SCROLL_SPEED: f32 = 2.0;
    /// Gate bar width
    pub const GATE_WIDTH: f32 = 20.0;
    /// Minimum horizontal distance between consecutive gates at spawn
    pub const GATE_SPACING: f32 = 300.0;
    /// Height of the passable window in a gate
    pub const GAP_HEIGHT: f32 = 150.0;
    /// Smallest allowed offset of the gap from the top of the viewport
    pub const GAP_MIN_TOP: f32 = 50.0;
    /// Gates are culled once fully past the left edge
    pub const GATE_CULL_X: f32 = -20.0;
    /// A gate takes a fresh random color every this many frames
    pub const GATE_RECOLOR_PERIOD: u32 = 60;

    /// Ship nose x coordinate (fixed - the world scrolls, not the ship)
    pub const SHIP_NOSE_X: f32 = 100.0;
    /// Ship base x coordinate
    pub const SHIP_TAIL_X: f32 = 70.0;
    /// Half the ship's vertical extent
    pub const SHIP_HALF_HEIGHT: f32 = 15.0;
    /// Cockpit overlay center x
    pub const COCKPIT_X: f32 = 90.0;
    /// Cockpit overlay radius
    pub const COCKPIT_RADIUS: f32 = 5.0;

    /// Background starfield population
    pub const STAR_COUNT: usize = 100;
    /// Stars draw as squares of this side length
    pub const STAR_SIZE: f32 = 2.0;
    /// Star speed sampling range, pixels per frame
    pub const STAR_SPEED_MIN: f32 = 1.0;
    pub const STAR_SPEED_MAX: f32 = 3.0;

    /// Idle screen hexagon population
    pub const ORNAMENT_COUNT: usize = 20;
    /// Ornament size sampling range
    pub const ORNAMENT_SIZE_MIN: f32 = 10.0;
    pub const ORNAMENT_SIZE_MAX: f32 = 40.0;
    /// Ornament fill alpha over the black background
    pub const ORNAMENT_ALPHA: f32 = 0.1;
}
