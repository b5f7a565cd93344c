//! Session - the driving loop over a command stream
//!
//! Lines run strictly in order; each one finishes (including any file write)
//! before the next is looked at. Recoverable errors (unknown alias, no grid, bad
//! parameters, bad dimensions) skip the line, unless strict mode is on. A failed
//! save always stops the run and is returned to the caller.

use std::io;
use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};

use crate::error::CommandError;
use crate::input::{parse_line, read_commands};
use crate::router::{CommandRouter, Outcome};
use crate::trace::{TraceLog, TraceRecord, TraceStatus};
use crate::SessionConfig;

/// Counters for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub executed: usize,
    pub skipped: usize,
}

pub struct Session {
    router: CommandRouter,
    config: SessionConfig,
    trace: Option<TraceLog>,
    summary: RunSummary,
    seq: u64,
}

impl Session {
    /// Create a session; an unusable trace path is reported and ignored
    pub fn new(config: SessionConfig) -> Self {
        let trace = config
            .trace_path
            .as_ref()
            .and_then(|path| match TraceLog::open(path) {
                Ok(log) => Some(log),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "trace log disabled");
                    None
                }
            });

        Self {
            router: CommandRouter::new(),
            config,
            trace,
            summary: RunSummary::default(),
            seq: 0,
        }
    }

    pub fn router(&self) -> &CommandRouter {
        &self.router
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Run one raw line
    ///
    /// Returns `Ok(None)` for blank lines and for skipped ones.
    pub fn run_line(&mut self, line: &str) -> Result<Option<Outcome>, CommandError> {
        let Some(cmd) = parse_line(line) else {
            return Ok(None);
        };
        self.seq += 1;

        match self.router.dispatch(&cmd.alias, &cmd.params) {
            Ok(outcome) => {
                if let Outcome::Saved { path } = &outcome {
                    info!("Saved file '{}'", path.display());
                }
                self.summary.executed += 1;
                self.trace(&cmd.alias, TraceStatus::Ok, outcome.to_string(), None);
                Ok(Some(outcome))
            }
            Err(err) if err.is_recoverable() && !self.config.strict => {
                warn!(seq = self.seq, line = line.trim(), "skipped: {}", err);
                self.summary.skipped += 1;
                self.trace(&cmd.alias, TraceStatus::Skipped, err.to_string(), Some(err.code()));
                Ok(None)
            }
            Err(err) => {
                self.trace(&cmd.alias, TraceStatus::Failed, err.to_string(), Some(err.code()));
                Err(err)
            }
        }
    }

    /// Run every line in order, stopping at the first fatal error
    pub fn run<I, S>(&mut self, lines: I) -> Result<RunSummary, CommandError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.run_line(line.as_ref())?;
        }
        Ok(self.summary)
    }

    /// Read a command file and run it
    pub fn run_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<RunSummary> {
        let path = path.as_ref();
        let lines = read_commands(path).map_err(|e| {
            let context = match e.kind() {
                io::ErrorKind::NotFound => format!("File '{}' not found.", path.display()),
                _ => format!("failed to read '{}'", path.display()),
            };
            anyhow::Error::new(e).context(context)
        })?;
        let summary = self
            .run(&lines)
            .with_context(|| format!("running {}", path.display()))?;
        Ok(summary)
    }

    fn trace(&mut self, alias: &str, status: TraceStatus, detail: String, code: Option<&str>) {
        let Some(log) = self.trace.as_mut() else {
            return;
        };

        let rec = TraceRecord {
            seq: self.seq,
            alias: alias.to_string(),
            status,
            detail: Some(detail),
            code: code.map(str::to_string),
            fingerprint: self.router.grid().map(|g| g.fingerprint()),
        };

        if let Err(e) = log.record(&rec) {
            warn!(error = %e, "trace log disabled");
            self.trace = None;
        }
    }
}
