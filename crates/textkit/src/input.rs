//! Bounded input reading.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::CliError;

/// Positional input argument shared by all commands.
#[derive(Args)]
pub(crate) struct InputArgs {
    /// Input file (default: read stdin; `-` also means stdin).
    pub input: Option<PathBuf>,
}

impl InputArgs {
    /// Read the whole input, rejecting anything larger than `limit` bytes.
    pub(crate) fn read(&self, limit: u64) -> Result<String, CliError> {
        match self.input.as_deref() {
            Some(path) if path != Path::new("-") => {
                tracing::info!(path = %path.display(), "Reading input file");
                read_limited(std::fs::File::open(path)?, limit)
            }
            _ => read_limited(std::io::stdin().lock(), limit),
        }
    }
}

/// Read `reader` to the end, failing once more than `limit` bytes arrive.
pub(crate) fn read_limited(reader: impl Read, limit: u64) -> Result<String, CliError> {
    let mut buf = Vec::new();
    reader.take(limit.saturating_add(1)).read_to_end(&mut buf)?;
    if buf.len() as u64 > limit {
        return Err(CliError::InputTooLarge { limit });
    }
    String::from_utf8(buf).map_err(|_| CliError::InvalidUtf8)
}
