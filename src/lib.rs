//! grid-draw (workspace facade crate).
//!
//! This package exposes the `grid_draw::{core,engine,input,types}` public API while the
//! implementation lives in dedicated crates under `crates/`.

pub use grid_draw_core as core;
pub use grid_draw_engine as engine;
pub use grid_draw_input as input;
pub use grid_draw_types as types;
