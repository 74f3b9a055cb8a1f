//! Painter for the browser's 2D canvas context
//!
//! The sole rendering side effect in the game: every update tick repaints the
//! whole surface from current state.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::scene::{self, ColoredRect};
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::sim::GameState;

pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    /// Paint one live frame: fade pass, ship, obstacles, starfield
    pub fn draw_frame(&self, state: &GameState, time_ms: f64) {
        self.ctx.set_fill_style_str(scene::FADE_FILL);
        self.ctx
            .fill_rect(0.0, 0.0, FIELD_WIDTH as f64, FIELD_HEIGHT as f64);

        for shape in scene::player_shapes(&state.player, state.is_running()) {
            self.fill_shape(&shape);
        }

        for obstacle in &state.obstacles {
            let fill = scene::obstacle_fill(obstacle.hue);
            self.ctx.set_fill_style_str(&fill);
            self.ctx.fill_rect(
                obstacle.pos.x as f64,
                obstacle.pos.y as f64,
                obstacle.size.x as f64,
                obstacle.size.y as f64,
            );
            self.ctx.set_stroke_style_str(scene::OBSTACLE_STROKE);
            self.ctx.set_line_width(scene::OBSTACLE_STROKE_WIDTH);
            self.ctx.stroke_rect(
                obstacle.pos.x as f64,
                obstacle.pos.y as f64,
                obstacle.size.x as f64,
                obstacle.size.y as f64,
            );
        }

        self.draw_stars(time_ms);
    }

    /// Paint the idle backdrop (page load, after dismissing a run)
    pub fn draw_backdrop(&self, state: &GameState, time_ms: f64) {
        self.ctx.set_fill_style_str(scene::BACKDROP_FILL);
        self.ctx
            .fill_rect(0.0, 0.0, FIELD_WIDTH as f64, FIELD_HEIGHT as f64);
        for shape in scene::player_shapes(&state.player, false) {
            self.fill_shape(&shape);
        }
        self.draw_stars(time_ms);
    }

    fn fill_shape(&self, shape: &ColoredRect) {
        self.ctx.set_fill_style_str(shape.fill);
        self.ctx.fill_rect(
            shape.rect.pos.x as f64,
            shape.rect.pos.y as f64,
            shape.rect.size.x as f64,
            shape.rect.size.y as f64,
        );
    }

    fn draw_stars(&self, time_ms: f64) {
        self.ctx.set_fill_style_str(scene::STAR_FILL);
        for star in scene::starfield(time_ms) {
            self.ctx.fill_rect(star.x as f64, star.y as f64, 1.0, 1.0);
        }
    }
}
