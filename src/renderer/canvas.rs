//! Canvas 2d backend (wasm only)
//!
//! Replays a display list onto a `CanvasRenderingContext2d`. The context
//! is acquired lazily and a missing context skips the frame silently; the
//! loop retries on the next frame.

use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::scene::{DrawCmd, css_color};

/// A canvas element plus its (lazily acquired) 2d context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: Option<CanvasRenderingContext2d>,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self {
            canvas,
            context: None,
        }
    }

    /// Resize the backing store to match the measured viewport
    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn context(&mut self) -> Option<&CanvasRenderingContext2d> {
        if self.context.is_none() {
            self.context = self
                .canvas
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok());
        }
        self.context.as_ref()
    }

    /// Replay one frame's commands. No context means no frame, not an error.
    pub fn paint(&mut self, cmds: &[DrawCmd]) {
        let Some(ctx) = self.context() else {
            return;
        };

        for cmd in cmds {
            match cmd {
                DrawCmd::Clear { width, height } => {
                    ctx.clear_rect(0.0, 0.0, *width as f64, *height as f64);
                }
                DrawCmd::Rect {
                    x,
                    y,
                    width,
                    height,
                    color,
                    alpha,
                } => {
                    ctx.set_fill_style_str(&css_color(*color, *alpha));
                    ctx.fill_rect(*x as f64, *y as f64, *width as f64, *height as f64);
                }
                DrawCmd::Polygon {
                    points,
                    color,
                    alpha,
                } => {
                    let Some(first) = points.first() else {
                        continue;
                    };
                    ctx.set_fill_style_str(&css_color(*color, *alpha));
                    ctx.begin_path();
                    ctx.move_to(first.x as f64, first.y as f64);
                    for p in &points[1..] {
                        ctx.line_to(p.x as f64, p.y as f64);
                    }
                    ctx.close_path();
                    ctx.fill();
                }
                DrawCmd::Circle {
                    center,
                    radius,
                    color,
                    alpha,
                } => {
                    ctx.set_fill_style_str(&css_color(*color, *alpha));
                    ctx.begin_path();
                    let _ = ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU);
                    ctx.fill();
                }
            }
        }
    }
}
