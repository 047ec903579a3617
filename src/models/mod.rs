//! Domain models for ds-bootstrap.
//!
//! # Core Concepts
//!
//! Everything here is pure data. Nothing in this module touches the
//! filesystem or spawns a process:
//!
//! - [`ProjectLayout`]: the fixed directory and file manifests the
//!   scaffolder materializes, plus the marker name for empty directories.
//! - [`Requirements`]: the ordered package-specifier list the installer
//!   walks, parsed from a requirements file.

mod layout;
mod requirements;

pub use layout::*;
pub use requirements::*;
