//! Command router - owns the current grid and dispatches commands to it
//!
//! Resolution happens in two tiers:
//!
//! 1. The alias is looked up in the command table ([`CommandKind::from_alias`]).
//! 2. Lifecycle commands (`I`, `X`) always run against the router itself; every
//!    other command needs a live grid and fails with
//!    [`CommandError::NoActiveGrid`] otherwise.
//!
//! Parameters are checked only after both tiers pass, so `C` before `I` reports a
//! missing grid rather than a parameter problem.

use std::fmt;
use std::path::PathBuf;

use tracing::debug;

use crate::command::{Command, GridOp, LifecycleOp};
use crate::core::Grid;
use crate::error::CommandError;
use crate::types::{CommandKind, Param};

/// What a successfully dispatched command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created { width: u32, height: u32 },
    Discarded,
    Cleared,
    Drawn,
    Filled { painted: usize },
    Saved { path: PathBuf },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Created { width, height } => write!(f, "created {}x{} grid", width, height),
            Outcome::Discarded => write!(f, "discarded grid"),
            Outcome::Cleared => write!(f, "cleared grid"),
            Outcome::Drawn => write!(f, "drawn"),
            Outcome::Filled { painted } => write!(f, "filled {} cells", painted),
            Outcome::Saved { path } => write!(f, "saved {}", path.display()),
        }
    }
}

/// Holds zero or one live [`Grid`] and routes commands to it
#[derive(Debug, Default)]
pub struct CommandRouter {
    grid: Option<Grid>,
}

impl CommandRouter {
    pub fn new() -> Self {
        Self { grid: None }
    }

    /// The live grid, if any
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn has_grid(&self) -> bool {
        self.grid.is_some()
    }

    /// Resolve an alias against the command table and the current grid state
    pub fn resolve(&self, alias: &str) -> Result<CommandKind, CommandError> {
        let kind = CommandKind::from_alias(alias).ok_or_else(|| CommandError::UnknownCommand {
            alias: alias.to_string(),
        })?;

        if !kind.is_lifecycle() && self.grid.is_none() {
            return Err(CommandError::NoActiveGrid {
                alias: kind.alias(),
            });
        }

        Ok(kind)
    }

    /// Resolve `alias`, check `params` and run the command
    pub fn dispatch(&mut self, alias: &str, params: &[Param]) -> Result<Outcome, CommandError> {
        let kind = self.resolve(alias)?;
        let command = Command::from_parts(kind, params)?;
        self.execute(command)
    }

    /// Run an already-typed command
    pub fn execute(&mut self, command: Command) -> Result<Outcome, CommandError> {
        debug!(command = %command, "execute");

        match command {
            Command::Lifecycle(LifecycleOp::Create { width, height }) => {
                let grid = self.create(width, height)?;
                Ok(Outcome::Created {
                    width: grid.width(),
                    height: grid.height(),
                })
            }
            Command::Lifecycle(LifecycleOp::Discard) => {
                self.discard();
                Ok(Outcome::Discarded)
            }
            Command::Grid(op) => {
                let grid = self.grid.as_mut().ok_or(CommandError::NoActiveGrid {
                    alias: op.kind().alias(),
                })?;
                apply(grid, op)
            }
        }
    }

    /// Replace the current grid with a fresh one
    ///
    /// On invalid dimensions the current grid is kept.
    pub fn create(&mut self, width: i64, height: i64) -> Result<&Grid, CommandError> {
        let grid = Grid::new(width, height)?;
        let grid: &Grid = self.grid.insert(grid);
        Ok(grid)
    }

    /// Drop the current grid, returning it
    pub fn discard(&mut self) -> Option<Grid> {
        self.grid.take()
    }
}

fn apply(grid: &mut Grid, op: GridOp) -> Result<Outcome, CommandError> {
    match op {
        GridOp::Clear => {
            grid.clear();
            Ok(Outcome::Cleared)
        }
        GridOp::DrawPixel { x, y, color } => {
            grid.draw_pixel(x, y, color);
            Ok(Outcome::Drawn)
        }
        GridOp::DrawVerticalLine { x, y0, y1, color } => {
            grid.draw_vertical_line(x, y0, y1, color);
            Ok(Outcome::Drawn)
        }
        GridOp::DrawHorizontalLine { x0, x1, y, color } => {
            grid.draw_horizontal_line(x0, x1, y, color);
            Ok(Outcome::Drawn)
        }
        GridOp::DrawRectangle {
            x0,
            y0,
            x1,
            y1,
            color,
        } => {
            grid.draw_rectangle(x0, y0, x1, y1, color);
            Ok(Outcome::Drawn)
        }
        GridOp::FillRegion { x, y, color } => Ok(Outcome::Filled {
            painted: grid.fill_region(x, y, color),
        }),
        GridOp::Save { path } => match grid.save(&path) {
            Ok(()) => Ok(Outcome::Saved { path }),
            Err(source) => Err(CommandError::Io { path, source }),
        },
    }
}
