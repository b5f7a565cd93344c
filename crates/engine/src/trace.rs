//! JSONL trace of dispatched commands
//!
//! One record per non-blank input line:
//!
//! ```text
//! {"seq":1,"alias":"I","status":"ok","detail":"created 4x3 grid","fingerprint":1234}
//! {"seq":2,"alias":"Z","status":"skipped","detail":"command \"Z\" does not exist","code":"unknown_command"}
//! ```

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceStatus {
    Ok,
    Skipped,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceRecord {
    pub seq: u64,
    pub alias: String,
    pub status: TraceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Grid fingerprint after the command; absent when no grid is live
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<u64>,
}

/// Append-only JSONL writer
#[derive(Debug)]
pub struct TraceLog {
    out: BufWriter<File>,
    buf: Vec<u8>,
}

impl TraceLog {
    /// Open `path` for appending, creating it if needed
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            out: BufWriter::new(file),
            buf: Vec::with_capacity(256),
        })
    }

    /// Write one record and flush it
    pub fn record(&mut self, rec: &TraceRecord) -> io::Result<()> {
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, rec)?;
        self.buf.push(b'\n');
        self.out.write_all(&self.buf)?;
        self.out.flush()
    }
}
