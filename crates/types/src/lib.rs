//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the interpreter.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (grid engine, command parsing, dispatch).
//!
//! # Coordinates
//!
//! Every coordinate that crosses a public API is **1-based** and signed:
//!
//! - **x**: column, `1..=width` (left to right)
//! - **y**: row, `1..=height` (top to bottom)
//!
//! Zero, negative and too-large coordinates are representable on purpose; the grid
//! treats them as "outside" and ignores them instead of failing.
//!
//! # Command Table
//!
//! | Alias | Kind | Params |
//! |-------|------|--------|
//! | `I` | create | width, height |
//! | `C` | clear | - |
//! | `L` | drawPixel | x, y, color |
//! | `V` | drawVerticalLine | x, y0, y1, color |
//! | `H` | drawHorizontalLine | x0, x1, y, color |
//! | `K` | drawRectangle | x0, y0, x1, y1, color |
//! | `F` | fillRegion | x, y, color |
//! | `S` | save | path |
//! | `X` | discard | - |
//!
//! # Examples
//!
//! ```
//! use grid_draw_types::{Color, CommandKind, Param, DEFAULT_COLOR};
//!
//! // Aliases are case-insensitive
//! assert_eq!(CommandKind::from_alias("k"), Some(CommandKind::DrawRectangle));
//! assert!(CommandKind::Create.is_lifecycle());
//!
//! // Tokens become integers when they look like one
//! assert_eq!(Param::from_token("-3"), Param::int(-3));
//! assert_eq!(Param::from_token("out.bmp"), Param::text("out.bmp"));
//!
//! // Colors are single characters
//! assert_eq!(Color::from_token("O"), Some(DEFAULT_COLOR));
//! assert_eq!(Color::from_token("RGB"), None);
//! ```

use std::fmt;

/// A signed, 1-based grid coordinate.
pub type Coord = i64;

/// Color of an uncolored cell, used at creation and by `clear`.
pub const DEFAULT_COLOR: Color = Color('O');

/// Largest accepted width or height.
pub const MAX_DIMENSION: u32 = 4096;

/// Separator between serialized rows.
pub const ROW_SEPARATOR: char = '\n';

/// A single-character color code stored in one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(char);

impl Color {
    pub const fn new(code: char) -> Self {
        Self(code)
    }

    /// Parse a color from a command token.
    ///
    /// The token must be exactly one character; anything longer would not fit the
    /// one-character-per-cell file format.
    ///
    /// # Examples
    ///
    /// ```
    /// use grid_draw_types::Color;
    ///
    /// assert_eq!(Color::from_token("C").map(|c| c.as_char()), Some('C'));
    /// assert_eq!(Color::from_token(""), None);
    /// assert_eq!(Color::from_token("AB"), None);
    /// ```
    pub fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(Self(c)),
            _ => None,
        }
    }

    pub const fn as_char(self) -> char {
        self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        DEFAULT_COLOR
    }
}

impl From<char> for Color {
    fn from(code: char) -> Self {
        Self(code)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One whitespace-separated command parameter.
///
/// A token that lexically matches an integer (optional sign, then ASCII digits)
/// becomes [`Param::Int`]; every other token is kept verbatim as [`Param::Text`].
/// Integers keep the token they were read from, so `007` still reads back as `007`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Param {
    Int { value: i64, token: String },
    Text(String),
}

impl Param {
    /// Classify a raw token
    ///
    /// Integers too large for `i64` saturate to `i64::MIN`/`i64::MAX`; they
    /// are out of bounds on any grid either way.
    ///
    /// # Examples
    ///
    /// ```
    /// use grid_draw_types::Param;
    ///
    /// assert_eq!(Param::from_token("42"), Param::int(42));
    /// assert_eq!(Param::from_token("+7").as_int(), Some(7));
    /// assert_eq!(Param::from_token("+7").as_str(), "+7");
    /// assert_eq!(Param::from_token("4x"), Param::text("4x"));
    /// assert_eq!(Param::from_token("-"), Param::text("-"));
    /// ```
    pub fn from_token(token: &str) -> Self {
        let (negative, digits) = match token.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, token.strip_prefix('+').unwrap_or(token)),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Param::Text(token.to_string());
        }

        let value = token.parse::<i64>().unwrap_or(if negative {
            i64::MIN
        } else {
            i64::MAX
        });
        Param::Int {
            value,
            token: token.to_string(),
        }
    }

    /// Integer parameter written in canonical decimal form
    pub fn int(value: i64) -> Self {
        Param::Int {
            value,
            token: value.to_string(),
        }
    }

    pub fn text(token: impl Into<String>) -> Self {
        Param::Text(token.into())
    }

    /// Integer value, if this is an integer token
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Param::Int { value, .. } => Some(*value),
            Param::Text(_) => None,
        }
    }

    /// The token exactly as it appeared on the command line
    pub fn as_str(&self) -> &str {
        match self {
            Param::Int { token, .. } => token,
            Param::Text(s) => s,
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of commands understood by the interpreter
///
/// Lifecycle commands act on the router's grid slot itself; every other command
/// needs a live grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Create a new grid, replacing the current one
    Create,
    /// Reset every cell to the default color
    Clear,
    /// Color one cell
    DrawPixel,
    /// Color a column segment
    DrawVerticalLine,
    /// Color a row segment
    DrawHorizontalLine,
    /// Fill an axis-aligned box
    DrawRectangle,
    /// Flood fill a 4-connected region
    FillRegion,
    /// Write the grid to a text file
    Save,
    /// Drop the current grid
    Discard,
}

impl CommandKind {
    /// Every command, in table order.
    pub const ALL: [CommandKind; 9] = [
        CommandKind::Create,
        CommandKind::Clear,
        CommandKind::DrawPixel,
        CommandKind::DrawVerticalLine,
        CommandKind::DrawHorizontalLine,
        CommandKind::DrawRectangle,
        CommandKind::FillRegion,
        CommandKind::Save,
        CommandKind::Discard,
    ];

    /// Resolve a command alias (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use grid_draw_types::CommandKind;
    ///
    /// assert_eq!(CommandKind::from_alias("I"), Some(CommandKind::Create));
    /// assert_eq!(CommandKind::from_alias("x"), Some(CommandKind::Discard));
    /// assert_eq!(CommandKind::from_alias("Z"), None);
    /// assert_eq!(CommandKind::from_alias("II"), None);
    /// ```
    pub fn from_alias(alias: &str) -> Option<Self> {
        match alias.to_ascii_uppercase().as_str() {
            "I" => Some(CommandKind::Create),
            "C" => Some(CommandKind::Clear),
            "L" => Some(CommandKind::DrawPixel),
            "V" => Some(CommandKind::DrawVerticalLine),
            "H" => Some(CommandKind::DrawHorizontalLine),
            "K" => Some(CommandKind::DrawRectangle),
            "F" => Some(CommandKind::FillRegion),
            "S" => Some(CommandKind::Save),
            "X" => Some(CommandKind::Discard),
            _ => None,
        }
    }

    /// Canonical (uppercase) alias
    pub fn alias(&self) -> char {
        match self {
            CommandKind::Create => 'I',
            CommandKind::Clear => 'C',
            CommandKind::DrawPixel => 'L',
            CommandKind::DrawVerticalLine => 'V',
            CommandKind::DrawHorizontalLine => 'H',
            CommandKind::DrawRectangle => 'K',
            CommandKind::FillRegion => 'F',
            CommandKind::Save => 'S',
            CommandKind::Discard => 'X',
        }
    }

    /// Operation name, as used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Create => "create",
            CommandKind::Clear => "clear",
            CommandKind::DrawPixel => "drawPixel",
            CommandKind::DrawVerticalLine => "drawVerticalLine",
            CommandKind::DrawHorizontalLine => "drawHorizontalLine",
            CommandKind::DrawRectangle => "drawRectangle",
            CommandKind::FillRegion => "fillRegion",
            CommandKind::Save => "save",
            CommandKind::Discard => "discard",
        }
    }

    /// Whether the command acts on the grid slot rather than on a live grid
    pub fn is_lifecycle(&self) -> bool {
        matches!(self, CommandKind::Create | CommandKind::Discard)
    }

    /// Number of positional parameters the command takes
    pub fn arity(&self) -> usize {
        match self {
            CommandKind::Clear | CommandKind::Discard => 0,
            CommandKind::Save => 1,
            CommandKind::Create => 2,
            CommandKind::DrawPixel | CommandKind::FillRegion => 3,
            CommandKind::DrawVerticalLine | CommandKind::DrawHorizontalLine => 4,
            CommandKind::DrawRectangle => 5,
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
