//! Best-effort dependency installation.
//!
//! Reads a requirements file and shells out to the package manager once per
//! specifier, in file order, each invocation blocking until the subprocess
//! exits. A specifier whose install command exits non-zero is logged and
//! recorded in the report, and the run moves on to the next entry; only a
//! missing requirements file or an OS-level spawn failure aborts the run.
//!
//! Configuration is via environment variables:
//! - `DSB_PIP` - Package-manager program (default: `pip`)

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Serialize;
use thiserror::Error;

use crate::models::Requirements;

/// Default package-manager program.
const DEFAULT_PROGRAM: &str = "pip";

/// Environment variable overriding the package-manager program.
const PROGRAM_ENV: &str = "DSB_PIP";

/// Installer errors. Per-specifier install failures are not errors; they are
/// recorded in the [`InstallReport`] instead.
#[derive(Debug, Error)]
pub enum InstallerError {
    #[error("cannot read requirements file {0}: {1}")]
    ReadRequirements(PathBuf, #[source] std::io::Error),

    #[error("failed to invoke {0}: {1}")]
    Spawn(String, #[source] std::io::Error),
}

/// Outcome of one installer run.
#[derive(Debug, Default, Clone, Serialize)]
pub struct InstallReport {
    /// Specifiers an install command was issued for, in file order.
    pub attempted: Vec<String>,
    /// Subset of `attempted` whose install command exited non-zero.
    pub failed: Vec<String>,
}

/// Sequential, blocking dependency installer.
#[derive(Debug, Clone)]
pub struct Installer {
    program: String,
}

impl Installer {
    /// Create an installer from environment variables.
    pub fn from_env() -> Self {
        let program = std::env::var(PROGRAM_ENV).unwrap_or_else(|_| DEFAULT_PROGRAM.to_string());
        Self::new(program)
    }

    /// Create with an explicit package-manager program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Read a requirements file and install everything in it.
    pub fn install_from_file(&self, path: &Path) -> Result<InstallReport, InstallerError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| InstallerError::ReadRequirements(path.to_path_buf(), e))?;
        self.install(&Requirements::parse(&contents))
    }

    /// Install every specifier, one invocation each, in order.
    ///
    /// The subprocess inherits stdout/stderr, so package-manager output
    /// streams to the console as it would when run by hand.
    pub fn install(&self, requirements: &Requirements) -> Result<InstallReport, InstallerError> {
        let mut report = InstallReport::default();

        for specifier in &requirements.specifiers {
            tracing::info!("Installing {}", specifier);

            let status = Command::new(&self.program)
                .arg("install")
                .arg(specifier)
                .status()
                .map_err(|e| InstallerError::Spawn(self.program.clone(), e))?;

            report.attempted.push(specifier.clone());
            if !status.success() {
                tracing::warn!("Install failed for {} ({})", specifier, status);
                report.failed.push(specifier.clone());
            }
        }

        Ok(report)
    }
}
