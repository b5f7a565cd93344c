//! Tokenizing command lines into an alias and its parameters.

use crate::types::Param;

/// One tokenized command line: `ALIAS [param ...]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub alias: String,
    pub params: Vec<Param>,
}

impl CommandLine {
    pub fn new(alias: impl Into<String>, params: Vec<Param>) -> Self {
        Self {
            alias: alias.into(),
            params,
        }
    }
}

/// Split a raw line into alias and parameters.
///
/// Returns `None` for lines that are empty after trimming.
///
/// # Examples
///
/// ```
/// use grid_draw_input::{parse_line, CommandLine};
/// use grid_draw_input::types::Param;
///
/// assert_eq!(
///     parse_line("A 5 6"),
///     Some(CommandLine::new("A", vec![Param::int(5), Param::int(6)]))
/// );
/// assert_eq!(parse_line("X"), Some(CommandLine::new("X", vec![])));
/// assert_eq!(parse_line("   "), None);
/// ```
pub fn parse_line(line: &str) -> Option<CommandLine> {
    let mut tokens = line.split_whitespace();
    let alias = tokens.next()?;
    Some(CommandLine::new(alias, tokens.map(Param::from_token).collect()))
}

/// Tokenize every non-blank line of `text`, in order
pub fn parse_commands(text: &str) -> Vec<CommandLine> {
    text.lines().filter_map(parse_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file_param() {
        assert_eq!(
            parse_line("S img.bmp"),
            Some(CommandLine::new("S", vec![Param::text("img.bmp")]))
        );
    }

    #[test]
    fn test_parse_mixed_params_and_padding() {
        assert_eq!(
            parse_line("  v 2  3\t4 W  "),
            Some(CommandLine::new(
                "v",
                vec![
                    Param::int(2),
                    Param::int(3),
                    Param::int(4),
                    Param::text("W")
                ]
            ))
        );
    }

    #[test]
    fn test_parse_negative_coordinates() {
        assert_eq!(
            parse_line("L -1 0 C"),
            Some(CommandLine::new(
                "L",
                vec![Param::int(-1), Param::int(0), Param::text("C")]
            ))
        );
    }

    #[test]
    fn test_parse_commands_skips_blank_lines() {
        let text = "\n  I 4 5\n\n C \r\n   \nS one.bmp\n";
        let aliases: Vec<_> = parse_commands(text).into_iter().map(|c| c.alias).collect();
        assert_eq!(aliases, vec!["I", "C", "S"]);
    }
}
