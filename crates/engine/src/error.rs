//! Errors returned by command dispatch.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::GridError;

/// Why a command could not be carried out
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("command {alias:?} does not exist")]
    UnknownCommand { alias: String },

    #[error("command '{alias}' needs a grid; create one with 'I' first")]
    NoActiveGrid { alias: char },

    #[error(transparent)]
    InvalidDimension(#[from] GridError),

    #[error("invalid parameters for '{alias}': {reason}")]
    InvalidParams { alias: char, reason: String },

    #[error("failed to save grid to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CommandError {
    /// Whether a driving loop may skip the offending line and carry on
    ///
    /// Everything except a failed save is recoverable.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, CommandError::Io { .. })
    }

    /// Short, stable identifier used in trace records
    pub fn code(&self) -> &'static str {
        match self {
            CommandError::UnknownCommand { .. } => "unknown_command",
            CommandError::NoActiveGrid { .. } => "no_active_grid",
            CommandError::InvalidDimension(_) => "invalid_dimension",
            CommandError::InvalidParams { .. } => "invalid_params",
            CommandError::Io { .. } => "io",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_io_is_fatal() {
        assert!(CommandError::UnknownCommand { alias: "Z".into() }.is_recoverable());
        assert!(CommandError::NoActiveGrid { alias: 'C' }.is_recoverable());
        assert!(CommandError::from(GridError::InvalidDimension {
            width: 0,
            height: 1
        })
        .is_recoverable());
        assert!(!CommandError::Io {
            path: "out.bmp".into(),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        }
        .is_recoverable());
    }

    #[test]
    fn messages_name_the_command() {
        let err = CommandError::UnknownCommand { alias: "Z".into() };
        assert_eq!(err.to_string(), "command \"Z\" does not exist");

        let err = CommandError::InvalidParams {
            alias: 'L',
            reason: "expected 3 parameters, got 1".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid parameters for 'L': expected 3 parameters, got 1"
        );
    }

    #[test]
    fn dimension_errors_keep_the_grid_error() {
        let err = CommandError::from(GridError::InvalidDimension {
            width: 0,
            height: 5,
        });
        assert_eq!(err.code(), "invalid_dimension");
        assert!(err.to_string().starts_with("invalid grid dimension 0x5"));
        assert!(matches!(
            err,
            CommandError::InvalidDimension(GridError::InvalidDimension {
                width: 0,
                height: 5
            })
        ));
    }
}
