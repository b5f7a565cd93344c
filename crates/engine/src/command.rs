//! Typed commands
//!
//! A [`Command`] is what an `(alias, params)` pair becomes once the alias is
//! resolved and the parameters are checked. The two tiers of the command table are
//! explicit in the type: [`LifecycleOp`] acts on the router's grid slot, [`GridOp`]
//! acts on a live grid.

use std::fmt;
use std::path::PathBuf;

use crate::error::CommandError;
use crate::types::{Color, CommandKind, Coord, Param};

/// Operations on the grid slot itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleOp {
    Create { width: i64, height: i64 },
    Discard,
}

/// Operations that need a live grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridOp {
    Clear,
    DrawPixel {
        x: Coord,
        y: Coord,
        color: Color,
    },
    DrawVerticalLine {
        x: Coord,
        y0: Coord,
        y1: Coord,
        color: Color,
    },
    DrawHorizontalLine {
        x0: Coord,
        x1: Coord,
        y: Coord,
        color: Color,
    },
    DrawRectangle {
        x0: Coord,
        y0: Coord,
        x1: Coord,
        y1: Coord,
        color: Color,
    },
    FillRegion {
        x: Coord,
        y: Coord,
        color: Color,
    },
    Save {
        path: PathBuf,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Lifecycle(LifecycleOp),
    Grid(GridOp),
}

impl Command {
    /// Build a command from a resolved kind and its raw parameters
    ///
    /// Commands without parameters (`C`, `X`) ignore any trailing tokens; every other
    /// command needs exactly its arity.
    ///
    /// # Examples
    ///
    /// ```
    /// use grid_draw_engine::{Command, GridOp};
    /// use grid_draw_engine::types::{Color, CommandKind, Param};
    ///
    /// let params = [Param::int(2), Param::int(3), Param::text("A")];
    /// let cmd = Command::from_parts(CommandKind::FillRegion, &params).unwrap();
    /// assert_eq!(
    ///     cmd,
    ///     Command::Grid(GridOp::FillRegion { x: 2, y: 3, color: Color::new('A') })
    /// );
    ///
    /// assert!(Command::from_parts(CommandKind::DrawPixel, &params[..2]).is_err());
    /// ```
    pub fn from_parts(kind: CommandKind, params: &[Param]) -> Result<Self, CommandError> {
        let mut args = Args::new(kind, params)?;

        let cmd = match kind {
            CommandKind::Create => Command::Lifecycle(LifecycleOp::Create {
                width: args.int("width")?,
                height: args.int("height")?,
            }),
            CommandKind::Discard => Command::Lifecycle(LifecycleOp::Discard),
            CommandKind::Clear => Command::Grid(GridOp::Clear),
            CommandKind::DrawPixel => Command::Grid(GridOp::DrawPixel {
                x: args.int("x")?,
                y: args.int("y")?,
                color: args.color()?,
            }),
            CommandKind::DrawVerticalLine => Command::Grid(GridOp::DrawVerticalLine {
                x: args.int("x")?,
                y0: args.int("y0")?,
                y1: args.int("y1")?,
                color: args.color()?,
            }),
            CommandKind::DrawHorizontalLine => Command::Grid(GridOp::DrawHorizontalLine {
                x0: args.int("x0")?,
                x1: args.int("x1")?,
                y: args.int("y")?,
                color: args.color()?,
            }),
            CommandKind::DrawRectangle => Command::Grid(GridOp::DrawRectangle {
                x0: args.int("x0")?,
                y0: args.int("y0")?,
                x1: args.int("x1")?,
                y1: args.int("y1")?,
                color: args.color()?,
            }),
            CommandKind::FillRegion => Command::Grid(GridOp::FillRegion {
                x: args.int("x")?,
                y: args.int("y")?,
                color: args.color()?,
            }),
            CommandKind::Save => Command::Grid(GridOp::Save {
                path: PathBuf::from(args.token()),
            }),
        };

        Ok(cmd)
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Lifecycle(LifecycleOp::Create { .. }) => CommandKind::Create,
            Command::Lifecycle(LifecycleOp::Discard) => CommandKind::Discard,
            Command::Grid(op) => op.kind(),
        }
    }
}

impl GridOp {
    pub fn kind(&self) -> CommandKind {
        match self {
            GridOp::Clear => CommandKind::Clear,
            GridOp::DrawPixel { .. } => CommandKind::DrawPixel,
            GridOp::DrawVerticalLine { .. } => CommandKind::DrawVerticalLine,
            GridOp::DrawHorizontalLine { .. } => CommandKind::DrawHorizontalLine,
            GridOp::DrawRectangle { .. } => CommandKind::DrawRectangle,
            GridOp::FillRegion { .. } => CommandKind::FillRegion,
            GridOp::Save { .. } => CommandKind::Save,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Lifecycle(LifecycleOp::Create { width, height }) => {
                write!(f, "I {} {}", width, height)
            }
            Command::Lifecycle(LifecycleOp::Discard) => write!(f, "X"),
            Command::Grid(GridOp::Clear) => write!(f, "C"),
            Command::Grid(GridOp::DrawPixel { x, y, color }) => write!(f, "L {} {} {}", x, y, color),
            Command::Grid(GridOp::DrawVerticalLine { x, y0, y1, color }) => {
                write!(f, "V {} {} {} {}", x, y0, y1, color)
            }
            Command::Grid(GridOp::DrawHorizontalLine { x0, x1, y, color }) => {
                write!(f, "H {} {} {} {}", x0, x1, y, color)
            }
            Command::Grid(GridOp::DrawRectangle {
                x0,
                y0,
                x1,
                y1,
                color,
            }) => write!(f, "K {} {} {} {} {}", x0, y0, x1, y1, color),
            Command::Grid(GridOp::FillRegion { x, y, color }) => write!(f, "F {} {} {}", x, y, color),
            Command::Grid(GridOp::Save { path }) => write!(f, "S {}", path.display()),
        }
    }
}

/// Positional parameter cursor with typed accessors
struct Args<'a> {
    kind: CommandKind,
    params: &'a [Param],
    pos: usize,
}

impl<'a> Args<'a> {
    fn new(kind: CommandKind, params: &'a [Param]) -> Result<Self, CommandError> {
        let expected = kind.arity();
        let arity_ok = if expected == 0 {
            true
        } else {
            params.len() == expected
        };

        if !arity_ok {
            return Err(invalid(
                kind,
                format!("expected {} parameters, got {}", expected, params.len()),
            ));
        }

        Ok(Self {
            kind,
            params,
            pos: 0,
        })
    }

    fn next(&mut self) -> &'a Param {
        let p = &self.params[self.pos];
        self.pos += 1;
        p
    }

    fn int(&mut self, name: &str) -> Result<i64, CommandError> {
        let kind = self.kind;
        let param = self.next();
        param.as_int().ok_or_else(|| {
            invalid(
                kind,
                format!("{} must be an integer, got {:?}", name, param.as_str()),
            )
        })
    }

    fn color(&mut self) -> Result<Color, CommandError> {
        let kind = self.kind;
        let token = self.next().as_str();
        Color::from_token(token).ok_or_else(|| {
            invalid(
                kind,
                format!("color must be a single character, got {:?}", token),
            )
        })
    }

    fn token(&mut self) -> &'a str {
        self.next().as_str()
    }
}

fn invalid(kind: CommandKind, reason: String) -> CommandError {
    CommandError::InvalidParams {
        alias: kind.alias(),
        reason,
    }
}
