use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The directory and file skeleton of a project.
///
/// Both manifests are fixed, ordered lists of paths relative to the scaffold
/// root. The directory manifest lists parents before children so a single
/// ordered pass can materialize the whole tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectLayout {
    /// Directories to create, parents first.
    pub directories: Vec<PathBuf>,
    /// Files to create empty. Re-runs reset these to empty.
    pub files: Vec<PathBuf>,
    /// File name written into manifest directories that end up empty, so
    /// version control can track them.
    pub marker: String,
}

impl ProjectLayout {
    /// The conventional data-science skeleton.
    pub fn data_science() -> Self {
        Self {
            directories: [
                "data",
                "data/raw",
                "data/processed",
                "docs",
                "references",
                "reports",
                "notebooks",
                "saved_models",
                "src",
            ]
            .iter()
            .map(PathBuf::from)
            .collect(),
            files: [
                "params.yaml",
                ".gitignore",
                "requirements.txt",
                "src/__init__.py",
                "notebooks/demo.ipynb",
            ]
            .iter()
            .map(PathBuf::from)
            .collect(),
            marker: ".gitkeep".to_string(),
        }
    }
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self::data_science()
    }
}
