use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// One variant per pipeline operation, so front-ends and tests branch on
/// the error kind rather than on message text.
#[derive(Debug, Error)]
pub enum TransferError {
    /// Target unreachable or refused; nothing was opened or sent
    #[error("Connection failed - {source}")]
    Connect { source: io::Error },

    /// Firmware file missing or unreadable; the connection is already
    /// released by the time this reaches the caller
    #[error("File opening failed - {source}")]
    FileOpen { path: PathBuf, source: io::Error },

    /// A write to the connection failed mid-stream
    #[error("Failed to send data - {source}")]
    Send { bytes_sent: u64, source: io::Error },

    /// A read that was not end-of-file failed (strict mode only)
    #[error("Failed to read firmware - {source}")]
    Read { bytes_sent: u64, source: io::Error },
}
