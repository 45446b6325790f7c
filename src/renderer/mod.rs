//! Rendering module
//!
//! `scene` builds a platform-neutral display list from sim state;
//! `canvas` replays it on the browser's 2d context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::{DrawCmd, css_color, game_frame, hexagon_points, idle_frame};
