//! Grid engine - pure, deterministic, and testable
//!
//! This crate owns the drawing canvas and every primitive that mutates it.
//! It has **no dependencies** on command parsing, logging, or the CLI, making it:
//!
//! - **Deterministic**: the same calls always produce the same cells
//! - **Permissive**: out-of-bounds coordinates are silently ignored, never errors
//! - **Bounded**: flood fill is iterative and touches each cell at most once
//!
//! # Module Structure
//!
//! - [`grid`]: the `width x height` color grid, point access, lines, rectangles, save
//! - [`fill`]: 4-connected region fill
//! - [`snapshot`]: serializable copy of a grid
//!
//! # Example
//!
//! ```
//! use grid_draw_core::Grid;
//! use grid_draw_core::types::Color;
//!
//! let mut grid = Grid::new(4, 3).unwrap();
//! grid.draw_rectangle(1, 1, 10, 10, Color::new('C'));
//!
//! assert_eq!(grid.serialize(), "CCCC\nCCCC\nCCCC");
//! assert_eq!(grid.get_at(5, 1), None);
//! ```

pub mod fill;
pub mod grid;
pub mod snapshot;

pub use grid_draw_types as types;

// Re-export commonly used types for convenience
pub use grid::{Grid, GridError};
pub use snapshot::GridSnapshot;
