//! Command input module (router-facing).
//!
//! This module is intentionally independent of the grid and the router. It turns
//! command files into lines and lines into [`CommandLine`] values
//! (an alias plus [`crate::types::Param`]s), leaving alias resolution and
//! parameter validation to the engine.

pub mod line;
pub mod reader;

pub use grid_draw_types as types;

pub use line::{parse_commands, parse_line, CommandLine};
pub use reader::read_commands;
