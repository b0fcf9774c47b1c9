//! Extraction of marker-delimited payloads from host text.
//!
//! # Responsibility
//! - Find encoded payloads embedded in arbitrary text, one per line.
//! - Resolve a CLI argument into either a literal message or a file scan.
//!
//! # Invariants
//! - A payload is everything after the first marker up to the line end.
//! - Lines without a marker are ignored; payload order follows line order.
//! - Line terminators (`\n`, `\r\n`) are never part of a payload.

use crate::codec::whitespace::strip_marker;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub type ScanResult<T> = Result<T, ScanError>;

/// Error raised while reading host text.
#[derive(Debug)]
pub enum ScanError {
    /// Reading from an in-memory or already-open reader failed.
    Read(std::io::Error),
    /// Opening or reading a named file failed.
    File {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for ScanError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read(err) => write!(f, "failed to read host text: {err}"),
            Self::File { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ScanError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read(err) => Some(err),
            Self::File { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for ScanError {
    fn from(value: std::io::Error) -> Self {
        Self::Read(value)
    }
}

/// Collects every embedded payload from `reader`, in line order.
pub fn extract_embedded(reader: impl BufRead) -> ScanResult<Vec<String>> {
    let mut payloads = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if let Some(payload) = strip_marker(&line) {
            payloads.push(payload.to_string());
        }
    }
    Ok(payloads)
}

/// Collects every embedded payload from the file at `path`.
pub fn extract_from_path(path: impl AsRef<Path>) -> ScanResult<Vec<String>> {
    let path = path.as_ref();
    let wrap = |source: std::io::Error| ScanError::File {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(wrap)?;
    match extract_embedded(BufReader::new(file)) {
        Ok(payloads) => {
            info!(
                "event=scan_file module=scan status=ok payloads={}",
                payloads.len()
            );
            Ok(payloads)
        }
        Err(ScanError::Read(source)) => {
            error!(
                "event=scan_file module=scan status=error error={}",
                source
            );
            Err(wrap(source))
        }
        Err(other) => Err(other),
    }
}

/// Turns a CLI message argument into the messages to process.
///
/// An argument naming an existing regular file is scanned for payloads;
/// anything else is treated as one literal message.
pub fn resolve_messages(arg: &str) -> ScanResult<Vec<String>> {
    let path = Path::new(arg);
    if path.is_file() {
        return extract_from_path(path);
    }
    Ok(vec![arg.to_string()])
}
