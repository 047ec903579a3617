//! Project skeleton creation.
//!
//! Materializes a [`ProjectLayout`] under a root directory in three ordered
//! passes: directories (with parents), then empty files, then a marker file
//! into every manifest directory whose listing is still empty. The marker
//! pass runs last so a directory that received a manifest file, or that
//! holds manifest subdirectories, is skipped.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::models::ProjectLayout;

/// Scaffolder errors, all fatal. The underlying filesystem call is the
/// source in every variant.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("cannot create directory {0}: {1}")]
    CreateDir(PathBuf, #[source] std::io::Error),

    #[error("cannot create file {0}: {1}")]
    CreateFile(PathBuf, #[source] std::io::Error),

    #[error("cannot list directory {0}: {1}")]
    ListDir(PathBuf, #[source] std::io::Error),
}

/// Outcome of one scaffolder run. Paths are relative to the scaffold root.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ScaffoldReport {
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
    pub markers: Vec<PathBuf>,
}

/// Materializes a [`ProjectLayout`] under a root directory.
#[derive(Debug, Clone)]
pub struct Scaffolder {
    root: PathBuf,
    layout: ProjectLayout,
}

impl Scaffolder {
    /// Create with an explicit root and layout.
    pub fn new(root: impl Into<PathBuf>, layout: ProjectLayout) -> Self {
        Self {
            root: root.into(),
            layout,
        }
    }

    /// Scaffold the default layout into the current working directory.
    pub fn in_current_dir() -> Self {
        Self::new(".", ProjectLayout::default())
    }

    /// Run all three passes: directories, files, markers.
    ///
    /// Directory creation tolerates directories that already exist; file
    /// creation truncates, so re-runs reset manifest files to empty.
    pub fn run(&self) -> Result<ScaffoldReport, ScaffoldError> {
        let mut report = ScaffoldReport::default();
        self.create_directories(&mut report)?;
        self.create_files(&mut report)?;
        self.place_markers(&mut report)?;
        Ok(report)
    }

    fn create_directories(&self, report: &mut ScaffoldReport) -> Result<(), ScaffoldError> {
        for dir in &self.layout.directories {
            let path = self.root.join(dir);
            fs::create_dir_all(&path).map_err(|e| ScaffoldError::CreateDir(path.clone(), e))?;
            tracing::debug!("Created directory {}", path.display());
            report.directories.push(dir.clone());
        }
        Ok(())
    }

    fn create_files(&self, report: &mut ScaffoldReport) -> Result<(), ScaffoldError> {
        for file in &self.layout.files {
            let path = self.root.join(file);
            File::create(&path).map_err(|e| ScaffoldError::CreateFile(path.clone(), e))?;
            tracing::debug!("Created file {}", path.display());
            report.files.push(file.clone());
        }
        Ok(())
    }

    /// Write the marker into every manifest directory still empty after the
    /// first two passes.
    fn place_markers(&self, report: &mut ScaffoldReport) -> Result<(), ScaffoldError> {
        for dir in &self.layout.directories {
            let path = self.root.join(dir);
            if is_empty_dir(&path)? {
                let marker = path.join(&self.layout.marker);
                File::create(&marker).map_err(|e| ScaffoldError::CreateFile(marker.clone(), e))?;
                tracing::debug!("Placed marker {}", marker.display());
                report.markers.push(dir.join(&self.layout.marker));
            }
        }
        Ok(())
    }
}

fn is_empty_dir(path: &Path) -> Result<bool, ScaffoldError> {
    let mut entries =
        fs::read_dir(path).map_err(|e| ScaffoldError::ListDir(path.to_path_buf(), e))?;
    Ok(entries.next().is_none())
}
