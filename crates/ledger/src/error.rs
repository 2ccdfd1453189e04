//! Ledger error types.

use std::io;
use std::path::PathBuf;

use derive_more::{Display, Error};

/// Failure to read or append the ledger file.
#[derive(Debug, Display, Error)]
pub enum LedgerError {
    /// The file or its directory could not be read, created, or written.
    #[display("ledger I/O failed for {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    /// A record could not be serialized.
    #[display("could not encode game record: {source}")]
    Encode { source: serde_json::Error },
}

impl LedgerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(source: serde_json::Error) -> Self {
        Self::Encode { source }
    }
}
