//! Canvas2D rendering module
//!
//! `scene` builds pure geometry and colors from game state; `canvas` paints
//! them onto the browser's 2D context. Only the painter touches the platform.

pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasPainter;
