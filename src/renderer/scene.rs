//! Pure scene description
//!
//! Everything here is plain data derived from game state and wall-clock time,
//! so the visuals are testable without a canvas.

use glam::Vec2;

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::sim::{Aabb, Player};

pub const PLAYER_BODY_FILL: &str = "#00ff00";
pub const PLAYER_TRIM_FILL: &str = "#ff0000";
pub const PLAYER_FLAME_FILL: &str = "#ff6600";
pub const OBSTACLE_STROKE: &str = "#fff";
pub const OBSTACLE_STROKE_WIDTH: f64 = 2.0;
/// Per-frame translucent fill that fades previous frames into motion trails
pub const FADE_FILL: &str = "rgba(0, 0, 0, 0.1)";
pub const BACKDROP_FILL: &str = "#000";
pub const STAR_FILL: &str = "rgba(255, 255, 255, 0.5)";

/// Number of background stars
pub const STAR_COUNT: usize = 20;

/// A rectangle with a fill color, ready for the painter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredRect {
    pub rect: Aabb,
    pub fill: &'static str,
}

fn rect(x: f32, y: f32, w: f32, h: f32, fill: &'static str) -> ColoredRect {
    ColoredRect {
        rect: Aabb::new(Vec2::new(x, y), Vec2::new(w, h)),
        fill,
    }
}

/// The ship sprite: body, two cockpit windows, and engine flames while the
/// run is live.
pub fn player_shapes(player: &Player, running: bool) -> Vec<ColoredRect> {
    let Vec2 { x, y } = player.pos;
    let h = player.size.y;

    let mut shapes = vec![
        rect(x, y, player.size.x, h, PLAYER_BODY_FILL),
        rect(x + 5.0, y + 5.0, 10.0, 10.0, PLAYER_TRIM_FILL),
        rect(x + 25.0, y + 5.0, 10.0, 10.0, PLAYER_TRIM_FILL),
    ];
    if running {
        shapes.push(rect(x + 10.0, y + h, 5.0, 5.0, PLAYER_FLAME_FILL));
        shapes.push(rect(x + 25.0, y + h, 5.0, 5.0, PLAYER_FLAME_FILL));
    }
    shapes
}

/// CSS fill for an obstacle hue (red through yellow band)
pub fn obstacle_fill(hue: f32) -> String {
    format!("hsl({:.0}, 100%, 50%)", hue)
}

/// Star positions for the decorative backdrop. Purely wall-clock driven:
/// each star drifts horizontally at its own rate and wraps at the field edge.
pub fn starfield(time_ms: f64) -> [Vec2; STAR_COUNT] {
    std::array::from_fn(|i| {
        let x = (time_ms / 100.0 * (i + 1) as f64) % FIELD_WIDTH as f64;
        let y = (i as f32 * 30.0) % FIELD_HEIGHT;
        Vec2::new(x as f32, y)
    })
}
