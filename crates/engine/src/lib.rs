//! Command engine - typed commands, dispatch, and the run loop
//!
//! This crate sits between the tokenizer ([`grid_draw_input`]) and the grid
//! ([`grid_draw_core`]):
//!
//! - [`command`]: `(alias, params)` → typed [`Command`] with checked parameters
//! - [`router`]: [`CommandRouter`], owner of the zero-or-one live grid
//! - [`session`]: the driving loop that skips recoverable errors
//! - [`trace`]: optional JSONL record of every dispatched line
//! - [`config`]: session settings from the environment
//!
//! # Example
//!
//! ```
//! use grid_draw_engine::{Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig::default());
//! session.run(["I 4 3", "H 1 4 2 C", "F 1 1 A"]).unwrap();
//!
//! let grid = session.router().grid().unwrap();
//! assert_eq!(grid.serialize(), "AAAA\nCCCC\nAAAA");
//! ```
//!
//! # Environment Variables
//!
//! - `GRID_DRAW_TRACE_PATH`: append a JSONL trace of dispatched lines to this file
//! - `GRID_DRAW_STRICT`: set to "1" or "true" to stop at the first failing line

pub mod command;
pub mod config;
pub mod error;
pub mod router;
pub mod session;
pub mod trace;

pub use grid_draw_core as core;
pub use grid_draw_input as input;
pub use grid_draw_types as types;

pub use command::{Command, GridOp, LifecycleOp};
pub use config::SessionConfig;
pub use error::CommandError;
pub use router::{CommandRouter, Outcome};
pub use session::{RunSummary, Session};
pub use trace::{TraceLog, TraceRecord, TraceStatus};
