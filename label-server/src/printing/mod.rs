//! Print dispatch
//!
//! Hands finished documents to the host's print facility: the document is
//! written to a spool directory, and after a short fixed delay the configured
//! print command is started with the file path as its argument. The command's
//! outcome is the host's business; it is logged but never surfaced.

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use tracing::{info, instrument, warn};

use shared::{AppError, ErrorCode};

/// Print dispatch errors (spooling only; the host command is fire-and-forget)
#[derive(Debug, Error)]
pub enum PrintError {
    /// IO error while spooling the document
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PrintResult<T> = Result<T, PrintError>;

impl From<PrintError> for AppError {
    fn from(err: PrintError) -> Self {
        AppError::with_message(ErrorCode::PrintDispatchFailed, err.to_string())
    }
}

/// Dispatches print documents to the host print facility
#[derive(Debug, Clone)]
pub struct PrintDispatcher {
    spool_dir: PathBuf,
    command: Option<String>,
    delay: Duration,
}

impl PrintDispatcher {
    /// Create a dispatcher spooling into the given directory
    ///
    /// No print command is configured by default; documents are only spooled.
    pub fn new(spool_dir: impl Into<PathBuf>) -> Self {
        Self {
            spool_dir: spool_dir.into(),
            command: None,
            delay: Duration::from_millis(250),
        }
    }

    /// Set the host print command (e.g. `lp`)
    pub fn with_command(mut self, command: Option<String>) -> Self {
        self.command = command;
        self
    }

    /// Set the fixed delay between spooling and invoking the command
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn spool_dir(&self) -> &Path {
        &self.spool_dir
    }

    /// Spool the document and hand it to the host print command
    ///
    /// Returns the spooled file path. Failures of the print command itself
    /// are not reported; they belong to the host environment.
    #[instrument(skip(self, document), fields(job = %job_name, bytes = document.len()))]
    pub async fn dispatch(&self, job_name: &str, document: &str) -> PrintResult<PathBuf> {
        tokio::fs::create_dir_all(&self.spool_dir).await?;

        let path = self.spool_dir.join(format!("{}.html", job_name));
        tokio::fs::write(&path, document).await?;
        info!(path = %path.display(), "Document spooled");

        // Let the document settle before the host command picks it up
        tokio::time::sleep(self.delay).await;

        if let Some(command) = &self.command {
            match tokio::process::Command::new(command).arg(&path).spawn() {
                Ok(_) => info!(command = %command, "Handed to host print command"),
                Err(e) => warn!(command = %command, error = %e, "Print command failed to start"),
            }
        }

        Ok(path)
    }
}
